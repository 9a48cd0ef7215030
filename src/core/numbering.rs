use chrono::{DateTime, Local};
use rand::Rng;

/// Prefix of every generated invoice number.
pub const INVOICE_NUMBER_PREFIX: &str = "INV-";

/// The time-dependent inputs of an invoice: when it was issued and the
/// trailing digit of its payment reference.
///
/// Capturing them in one value keeps [`compute_invoice_with`] deterministic.
///
/// [`compute_invoice_with`]: super::compute_invoice_with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueContext {
    pub issued_at: DateTime<Local>,
    /// 0–9, appended to the payment reference.
    pub ocr_digit: u8,
}

impl IssueContext {
    pub fn new(issued_at: DateTime<Local>, ocr_digit: u8) -> Self {
        Self {
            issued_at,
            ocr_digit: ocr_digit % 10,
        }
    }

    /// Current local time and a random reference digit.
    pub fn now() -> Self {
        Self::new(Local::now(), rand::thread_rng().gen_range(0..10))
    }

    /// Invoice number derived from the issue instant.
    pub fn invoice_number(&self) -> String {
        invoice_number_from_millis(self.issued_at.timestamp_millis())
    }
}

/// `INV-` followed by the last six digits of a millisecond timestamp.
///
/// Numbers repeat every 10^6 ms (about 11.5 days) and two invoices issued in
/// the same millisecond collide. Fine for one invoice at a time; batch
/// issuance needs a proper sequence.
pub fn invoice_number_from_millis(millis: i64) -> String {
    format!(
        "{INVOICE_NUMBER_PREFIX}{:06}",
        millis.rem_euclid(1_000_000)
    )
}

/// Payment reference: the digits of the invoice number plus one extra digit.
///
/// This is a placeholder, NOT a Luhn / mod-10 checked OCR reference. Banks
/// that validate OCR numbers will reject it.
pub fn placeholder_ocr(invoice_number: &str, digit: u8) -> String {
    let digits: String = invoice_number
        .strip_prefix(INVOICE_NUMBER_PREFIX)
        .unwrap_or(invoice_number)
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    format!("{digits}{}", digit % 10)
}
