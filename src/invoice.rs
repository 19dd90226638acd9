//! The record kept by [`InvoiceStore`](crate::InvoiceStore).

use std::{fmt, mem, ops::Deref};

/// Status of an invoice that is still awaiting payment.
pub const STATUS_PENDING: &str = "pendente";

/// Status of a settled invoice.
pub const STATUS_PAID: &str = "paga";

/// An invoice, identified by its number.
///
/// Fields are stored as given: the due date is free text, the amount is not
/// range checked, and any status string is accepted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Invoice {
    number: i32,
    /// Due date, free-form
    pub due_date: String,
    /// Amount due
    pub amount: f64,
    /// Usually [`STATUS_PENDING`] or [`STATUS_PAID`]
    pub status: String,
}

impl Invoice {
    #[inline]
    pub fn new(
        number: i32,
        due_date: impl Into<String>,
        amount: f64,
        status: impl Into<String>,
    ) -> Self {
        Invoice {
            number,
            due_date: due_date.into(),
            amount,
            status: status.into(),
        }
    }

    /// The invoice number. It is the ordering key and never changes.
    #[inline]
    pub fn number(&self) -> i32 {
        self.number
    }

    #[inline]
    pub fn is_paid(&self) -> bool {
        self.status == STATUS_PAID
    }
}

/// Write access to an invoice held by a store.
///
/// Only the due date, amount and status can be changed. The invoice cannot
/// be replaced as a whole, so its number keeps matching the key it is
/// filed under.
#[derive(Debug)]
pub struct InvoiceMut<'a> {
    invoice: &'a mut Invoice,
}

impl<'a> InvoiceMut<'a> {
    pub(crate) fn new(invoice: &'a mut Invoice) -> Self {
        InvoiceMut { invoice }
    }

    /// Replace the due date, returning the old one.
    #[inline]
    pub fn set_due_date(&mut self, due_date: impl Into<String>) -> String {
        mem::replace(&mut self.invoice.due_date, due_date.into())
    }

    /// Replace the amount, returning the old one.
    #[inline]
    pub fn set_amount(&mut self, amount: f64) -> f64 {
        mem::replace(&mut self.invoice.amount, amount)
    }

    /// Replace the status, returning the old one.
    #[inline]
    pub fn set_status(&mut self, status: impl Into<String>) -> String {
        mem::replace(&mut self.invoice.status, status.into())
    }
}

impl Deref for InvoiceMut<'_> {
    type Target = Invoice;

    fn deref(&self) -> &Invoice {
        self.invoice
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invoice number: {}", self.number)?;
        writeln!(f, "Due date: {}", self.due_date)?;
        writeln!(f, "Amount: {:.2}", self.amount)?;
        write!(f, "Status: {}", self.status)
    }
}
