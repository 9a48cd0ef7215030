//! Booking data model, reference catalog and the calculation engine.
//!
//! Everything here is pure: the only outside inputs are the clock and one
//! random digit, both captured in [`IssueContext`].

mod calculation;
mod catalog;
mod error;
pub mod format;
#[cfg(feature = "json")]
mod json;
mod numbering;
mod types;
mod validation;

pub use calculation::*;
pub use catalog::*;
pub use error::*;
pub use format::{format_date, format_money, format_rate, round_money};
pub use numbering::*;
pub use types::*;
pub use validation::*;
