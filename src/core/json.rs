//! JSON exchange with the UI layer.
//!
//! Field names are camelCase, matching what the booking forms produce.

use super::catalog::Catalog;
use super::error::InvoiceError;
use super::types::InvoiceData;

impl Catalog {
    /// Load a catalog from JSON, e.g. `{"apartments": [...], "currencies": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, InvoiceError> {
        serde_json::from_str(json).map_err(|e| InvoiceError::Catalog(e.to_string()))
    }
}

impl InvoiceData {
    pub fn from_json(json: &str) -> Result<Self, InvoiceError> {
        serde_json::from_str(json).map_err(|e| InvoiceError::Catalog(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, InvoiceError> {
        serde_json::to_string_pretty(self).map_err(|e| InvoiceError::Catalog(e.to_string()))
    }
}
