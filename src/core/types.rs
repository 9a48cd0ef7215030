use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::catalog::{ApartmentType, Currency};

/// The guest being invoiced (Köpare).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDetails {
    pub name: String,
    /// Free-form postal address; may contain line breaks.
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// The stay being invoiced.
///
/// Dates are kept as the strings the booking form produced (`YYYY-MM-DD`,
/// optionally with a time part). Empty or unparsable dates are tolerated
/// and fall back to a one-night stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDetails {
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    /// Apartment id, looked up in the [`Catalog`](super::Catalog).
    pub apartment_type: String,
}

impl Default for BookingDetails {
    fn default() -> Self {
        Self {
            check_in: String::new(),
            check_out: String::new(),
            guests: 1,
            apartment_type: String::new(),
        }
    }
}

impl BookingDetails {
    pub fn new(
        apartment_type: impl Into<String>,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
        guests: u32,
    ) -> Self {
        Self {
            check_in: check_in.into(),
            check_out: check_out.into(),
            guests,
            apartment_type: apartment_type.into(),
        }
    }

    /// Check-in as a calendar date, if it parses.
    pub fn check_in_date(&self) -> Option<NaiveDate> {
        super::calculation::parse_booking_date(&self.check_in).map(|dt| dt.date())
    }

    /// Check-out as a calendar date, if it parses.
    pub fn check_out_date(&self) -> Option<NaiveDate> {
        super::calculation::parse_booking_date(&self.check_out).map(|dt| dt.date())
    }
}

/// Fees charged on top of the accommodation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtraFees {
    /// One-off cleaning fee.
    pub cleaning_fee: Decimal,
    /// Tourist tax per guest and night.
    pub city_tax: Decimal,
    /// Surcharge per guest and night.
    pub extra_guest_fee: Decimal,
    /// Free-form additional fee.
    pub other: Decimal,
    pub other_description: String,
}

impl Default for ExtraFees {
    fn default() -> Self {
        Self {
            cleaning_fee: Decimal::ZERO,
            city_tax: Decimal::ZERO,
            extra_guest_fee: Decimal::ZERO,
            other: Decimal::ZERO,
            other_description: String::new(),
        }
    }
}

impl ExtraFees {
    /// The fees a new booking starts out with: 50 cleaning, 2.50 city tax.
    pub fn standard() -> Self {
        Self {
            cleaning_fee: dec!(50),
            city_tax: dec!(2.5),
            ..Self::default()
        }
    }
}

/// The letting company issuing the invoice (Säljare).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfo {
    pub name: String,
    /// Free-form postal address; may contain line breaks.
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    /// Momsregistreringsnummer.
    pub vat_number: String,
    /// Organisationsnummer.
    pub organization_number: String,
    pub bankgiro: String,
    pub plusgiro: String,
}

/// Currency, VAT and payment terms applied to the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceSettings {
    /// ISO 4217 code, e.g. "SEK".
    pub currency: String,
    /// Symbol appended to every amount, e.g. "kr".
    pub currency_symbol: String,
    /// VAT percentage, 0–100.
    pub vat_rate: Decimal,
    /// Days until payment is due.
    pub payment_terms: u32,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            currency: "SEK".to_string(),
            currency_symbol: "kr".to_string(),
            vat_rate: dec!(25),
            payment_terms: 30,
        }
    }
}

impl InvoiceSettings {
    /// Default VAT and terms, billed in `currency`.
    pub fn for_currency(currency: &Currency) -> Self {
        Self {
            currency: currency.code.clone(),
            currency_symbol: currency.symbol.clone(),
            ..Self::default()
        }
    }
}

/// A computed invoice: all inputs plus every derived figure.
///
/// Produced fresh by [`compute_invoice`](super::compute_invoice) on every
/// input change. `customer`, `company` and `booking` are always present when
/// the engine built the value; they are optional only because invoice data
/// may also arrive deserialized from the UI boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    pub customer: Option<CustomerDetails>,
    pub booking: Option<BookingDetails>,
    #[serde(default)]
    pub extras: ExtraFees,
    pub company: Option<CompanyInfo>,
    #[serde(default)]
    pub settings: InvoiceSettings,
    /// The catalog entry the booking resolved to, `None` on a miss.
    #[serde(default)]
    pub apartment: Option<ApartmentType>,
    /// Billable nights, never below 1.
    pub nights: u32,
    /// Accommodation only: price per night × nights.
    pub subtotal: Decimal,
    /// Everything before VAT.
    pub total: Decimal,
    pub vat_amount: Decimal,
    pub total_including_vat: Decimal,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Placeholder payment reference. Not checksum-validated.
    pub ocr_number: String,
}

/// Which charge a [`LineItem`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineItemKind {
    Accommodation,
    Cleaning,
    CityTax,
    ExtraGuest,
    Other,
}

/// One row of the invoice table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub kind: LineItemKind,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub amount: Decimal,
}
