//! # semesterfaktura
//!
//! Vacation-rental invoicing: turn a booking (customer, apartment, dates,
//! guests, extra fees) into invoice totals, then render a Swedish-style
//! single-page PDF invoice.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Rounding to two decimals happens only when amounts are displayed.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{Local, TimeZone};
//! use semesterfaktura::core::*;
//! use rust_decimal_macros::dec;
//!
//! let catalog = Catalog::default();
//! let booking = BookingDetails::new("studio", "2025-06-01", "2025-06-04", 2);
//! let extras = ExtraFees::standard();
//! let issued = IssueContext::new(Local.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap(), 7);
//!
//! let invoice = compute_invoice_with(
//!     &CustomerDetails::default(),
//!     &booking,
//!     &extras,
//!     &CompanyInfo::default(),
//!     &InvoiceSettings::default(),
//!     &catalog,
//!     &issued,
//! );
//!
//! assert_eq!(invoice.nights, 3);
//! assert_eq!(invoice.total, dec!(320));
//! assert_eq!(invoice.total_including_vat, dec!(400));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Data model, catalog, calculation engine, completeness gate |
//! | `pdf` (default) | Layout command list and PDF rendering via `lopdf` |
//! | `json` | JSON catalogs and invoice data for the UI boundary |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pdf")]
pub mod pdf;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
