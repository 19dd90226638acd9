//! `invoice_store` keeps invoices in memory, ordered by invoice number.
//!
//! The store is built on [`BstMap`], a plain (unbalanced) binary search tree.
//! Inserting numbers in sorted order therefore degrades lookups to linear time.
//!
//! Nodes live in a vector and refer to their children by index instead of by
//! pointer. Removed nodes leave vacant slots behind, which are chained into a
//! free list and reused by later inserts. Tree walks use explicit stacks, so
//! even a fully degenerate tree never recurses.
//!
//! The store is single-threaded; share it across threads behind a lock.
//!
//! # Example
//!
//! ```rust
//! use invoice_store::{InvoiceStore, StoreError, STATUS_PENDING};
//!
//! let mut store = InvoiceStore::new();
//! store.insert(100, "2024-01-10", 250.00, STATUS_PENDING);
//! assert_eq!(store.find(100).unwrap().amount, 250.00);
//! assert_eq!(store.find(1), Err(StoreError::NotFound(1)));
//! ```
//!

mod bstmap;
mod entry;
mod error;
mod index;
mod invoice;
mod iter;
mod node;
mod store;

#[cfg(test)]
mod tests;

pub use bstmap::BstMap;
pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use error::{Result, StoreError};
pub use index::{DefaultIx, IndexType, NodeIndex};
pub use invoice::{Invoice, InvoiceMut, STATUS_PAID, STATUS_PENDING};
pub use iter::{IntoIter, Iter, Values};
pub use store::InvoiceStore;
