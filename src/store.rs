use tracing::{debug, trace};

use crate::bstmap::BstMap;
use crate::entry::Entry;
use crate::error::{Result, StoreError};
use crate::invoice::{Invoice, InvoiceMut};
use crate::iter::Values;

/// An in-memory collection of invoices ordered by invoice number.
///
/// # Example
///
/// ```rust
/// use invoice_store::{InvoiceStore, StoreError, STATUS_PAID, STATUS_PENDING};
///
/// let mut store = InvoiceStore::new();
/// store.insert(100, "2024-01-10", 250.0, STATUS_PENDING);
/// store.insert(50, "2024-02-01", 75.5, STATUS_PENDING);
///
/// store.update_status(100, STATUS_PAID).unwrap();
/// assert!(store.find(100).unwrap().is_paid());
/// assert_eq!(store.remove(7), Err(StoreError::NotFound(7)));
///
/// let numbers: Vec<_> = store.iter().map(|i| i.number()).collect();
/// assert_eq!(numbers, vec![50, 100]);
/// ```
#[derive(Debug, Default)]
pub struct InvoiceStore {
    invoices: BstMap<i32, Invoice>,
}

impl InvoiceStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` invoices
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        InvoiceStore {
            invoices: BstMap::with_capacity(capacity),
        }
    }

    /// Insert an invoice built from the given fields.
    ///
    /// An invoice already stored under `number` is replaced and returned.
    #[inline]
    pub fn insert(
        &mut self,
        number: i32,
        due_date: impl Into<String>,
        amount: f64,
        status: impl Into<String>,
    ) -> Option<Invoice> {
        self.insert_invoice(Invoice::new(number, due_date, amount, status))
    }

    /// Insert an invoice, replacing and returning any invoice with the same number.
    pub fn insert_invoice(&mut self, invoice: Invoice) -> Option<Invoice> {
        let number = invoice.number();
        let previous = self.invoices.insert(number, invoice);
        debug!(number, replaced = previous.is_some(), "invoice inserted");
        previous
    }

    /// Insert an invoice only if its number is not taken yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateNumber`] and leaves the store unchanged
    /// when an invoice with the same number exists.
    pub fn try_insert(&mut self, invoice: Invoice) -> Result<InvoiceMut<'_>> {
        let number = invoice.number();
        match self.invoices.entry(number) {
            Entry::Occupied(_) => {
                debug!(number, "duplicate invoice rejected");
                Err(StoreError::DuplicateNumber(number))
            }
            Entry::Vacant(entry) => {
                debug!(number, "invoice inserted");
                Ok(InvoiceMut::new(entry.insert(invoice)))
            }
        }
    }

    /// Look up an invoice by number.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no invoice has this number.
    #[inline]
    pub fn find(&self, number: i32) -> Result<&Invoice> {
        self.invoices.get(&number).ok_or_else(|| {
            debug!(number, "invoice not found");
            StoreError::NotFound(number)
        })
    }

    /// Look up an invoice by number for modification.
    ///
    /// The returned [`InvoiceMut`] cannot touch the invoice number.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no invoice has this number.
    #[inline]
    pub fn find_mut(&mut self, number: i32) -> Result<InvoiceMut<'_>> {
        match self.invoices.get_mut(&number) {
            Some(invoice) => Ok(InvoiceMut::new(invoice)),
            None => {
                debug!(number, "invoice not found");
                Err(StoreError::NotFound(number))
            }
        }
    }

    /// Overwrite the status of an invoice in place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] and changes nothing when no invoice
    /// has this number.
    pub fn update_status(&mut self, number: i32, status: impl Into<String>) -> Result<()> {
        let mut invoice = self.find_mut(number)?;
        let _old = invoice.set_status(status);
        debug!(number, status = %invoice.status, "invoice status updated");
        Ok(())
    }

    /// Remove an invoice and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] and leaves the store unchanged when no
    /// invoice has this number.
    pub fn remove(&mut self, number: i32) -> Result<Invoice> {
        match self.invoices.remove(&number) {
            Some(invoice) => {
                debug!(number, "invoice removed");
                Ok(invoice)
            }
            None => {
                debug!(number, "invoice not found");
                Err(StoreError::NotFound(number))
            }
        }
    }

    /// Iterate over all invoices in ascending number order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Values<'_, i32, Invoice> {
        trace!(len = self.len(), "iterating invoices");
        self.invoices.values()
    }

    /// Remove every invoice
    #[inline]
    pub fn clear(&mut self) {
        self.invoices.clear();
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    /// Depth of the underlying tree. Equals `len()` when invoices arrived in
    /// sorted order.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.invoices.height()
    }
}

impl<'a> IntoIterator for &'a InvoiceStore {
    type Item = &'a Invoice;
    type IntoIter = Values<'a, i32, Invoice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Invoice> for InvoiceStore {
    fn extend<I: IntoIterator<Item = Invoice>>(&mut self, iter: I) {
        for invoice in iter {
            let _ignore = self.insert_invoice(invoice);
        }
    }
}

impl FromIterator<Invoice> for InvoiceStore {
    fn from_iter<I: IntoIterator<Item = Invoice>>(iter: I) -> Self {
        let mut store = InvoiceStore::new();
        store.extend(iter);
        store
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for InvoiceStore {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

/// Invoices are re-inserted one by one, so any sequence yields a valid tree.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for InvoiceStore {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let invoices = <Vec<Invoice> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(invoices.into_iter().collect())
    }
}
