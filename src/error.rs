use thiserror::Error;

/// Outcomes of [`InvoiceStore`](crate::InvoiceStore) operations that did not apply.
///
/// Both are routine: the store is unchanged and stays fully usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("invoice {0} not found")]
    NotFound(i32),

    #[error("invoice {0} already exists")]
    DuplicateNumber(i32),
}

pub type Result<T> = std::result::Result<T, StoreError>;
