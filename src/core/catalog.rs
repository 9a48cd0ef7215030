//! Apartment and currency reference data.
//!
//! A [`Catalog`] is an immutable value handed to the calculation engine.
//! Tests and callers may build their own instead of using the built-in one.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A rentable apartment category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentType {
    pub id: String,
    pub name: String,
    pub price_per_night: Decimal,
    pub max_guests: u32,
}

impl ApartmentType {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_per_night: Decimal,
        max_guests: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_per_night,
            max_guests,
        }
    }
}

/// A currency the invoice can be issued in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code.
    pub code: String,
    pub symbol: String,
    pub name: String,
}

impl Currency {
    pub fn new(
        code: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

/// Ordered apartment list plus currency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub apartments: Vec<ApartmentType>,
    #[serde(default)]
    pub currencies: Vec<Currency>,
}

impl Catalog {
    pub fn new(apartments: Vec<ApartmentType>, currencies: Vec<Currency>) -> Self {
        Self {
            apartments,
            currencies,
        }
    }

    /// First apartment with the given id.
    pub fn apartment(&self, id: &str) -> Option<&ApartmentType> {
        self.apartments.iter().find(|apt| apt.id == id)
    }

    /// Currency by ISO code.
    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.code == code)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(default_apartments(), default_currencies())
    }
}

/// The four apartment categories offered out of the box.
pub fn default_apartments() -> Vec<ApartmentType> {
    vec![
        ApartmentType::new("studio", "Studio Apartment", dec!(85), 2),
        ApartmentType::new("one-bedroom", "One Bedroom Apartment", dec!(120), 4),
        ApartmentType::new("two-bedroom", "Two Bedroom Apartment", dec!(180), 6),
        ApartmentType::new("penthouse", "Penthouse Suite", dec!(350), 8),
    ]
}

/// Currencies selectable on the settings form, SEK first.
pub fn default_currencies() -> Vec<Currency> {
    [
        ("SEK", "kr", "Swedish Krona"),
        ("USD", "$", "US Dollar"),
        ("EUR", "€", "Euro"),
        ("GBP", "£", "British Pound"),
        ("CAD", "C$", "Canadian Dollar"),
        ("AUD", "A$", "Australian Dollar"),
        ("JPY", "¥", "Japanese Yen"),
        ("CHF", "CHF", "Swiss Franc"),
        ("NOK", "kr", "Norwegian Krone"),
        ("DKK", "kr", "Danish Krone"),
    ]
    .into_iter()
    .map(|(code, symbol, name)| Currency::new(code, symbol, name))
    .collect()
}
