//! PDF invoice rendering.
//!
//! Rendering happens in two steps: [`layout_invoice`] records the page as a
//! list of drawing commands, [`write_pdf`] serializes that list with `lopdf`.
//! All cursor state lives inside a single call, so concurrent renders never
//! share anything.

mod invoice;
mod layout;
pub mod metrics;
mod writer;

use std::path::{Path, PathBuf};

pub use invoice::layout_invoice;
pub use layout::*;
pub use writer::write_pdf;

use crate::core::{InvoiceData, InvoiceError};

/// MIME type of the rendered invoice.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Render an invoice to PDF bytes.
///
/// Fails with [`InvoiceError::MissingData`] if company, customer or booking
/// is absent; completeness of the individual fields is the caller's check
/// (see [`validate_completeness`](crate::core::validate_completeness)).
pub fn render_invoice_pdf(invoice: &InvoiceData) -> Result<Vec<u8>, InvoiceError> {
    let layout = layout_invoice(invoice)?;
    write_pdf(&layout)
}

/// `Faktura_<invoice number>_<customer name>.pdf`, with the customer name
/// reduced to `[A-Za-z0-9_-]`.
pub fn invoice_file_name(invoice: &InvoiceData) -> String {
    let customer = invoice
        .customer
        .as_ref()
        .map_or("", |c| c.name.as_str());
    format!(
        "Faktura_{}_{}.pdf",
        sanitize_file_segment(&invoice.invoice_number),
        sanitize_file_segment(customer)
    )
}

/// Replace every character outside `[A-Za-z0-9_-]` with `_`, one for one.
pub fn sanitize_file_segment(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Render the invoice and save it in `dir` under [`invoice_file_name`].
/// Returns the written path.
pub fn write_invoice_pdf(invoice: &InvoiceData, dir: &Path) -> Result<PathBuf, InvoiceError> {
    let bytes = render_invoice_pdf(invoice)?;
    let path = dir.join(invoice_file_name(invoice));
    std::fs::write(&path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "invoice saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_everything_else() {
        assert_eq!(sanitize_file_segment("Ana García/Söto"), "Ana_Garc_a_S_to");
        assert_eq!(sanitize_file_segment("O'Brien & Co."), "O_Brien___Co_");
        assert_eq!(sanitize_file_segment("anna-lena_b2"), "anna-lena_b2");
        assert_eq!(sanitize_file_segment("../../etc"), "______etc");
        assert_eq!(sanitize_file_segment(""), "");
    }
}
