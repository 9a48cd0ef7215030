use thiserror::Error;

/// Errors that can occur while rendering or exchanging invoices.
///
/// The calculation engine itself never fails; see
/// [`compute_invoice`](super::compute_invoice).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// A whole section (company, customer or booking) is absent.
    #[error("missing invoice data: {0}")]
    MissingData(&'static str),

    /// PDF generation failed.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Catalog or invoice data could not be decoded.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Writing the rendered invoice failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single validation problem with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the offending field (e.g. "company.vat_number").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
