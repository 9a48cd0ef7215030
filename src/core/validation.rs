use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::catalog::Catalog;
use super::error::ValidationError;
use super::types::*;

/// Longest payment term the settings form offers.
pub const MAX_PAYMENT_TERMS: u32 = 365;

/// Check that everything a printed invoice needs has been filled in.
///
/// The UI keeps PDF generation disabled until this returns no errors.
/// Returns all missing fields (not just the first).
pub fn validate_completeness(invoice: &InvoiceData) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match &invoice.customer {
        Some(customer) => {
            require(&customer.name, "customer.name", &mut errors);
            require(&customer.email, "customer.email", &mut errors);
        }
        None => errors.push(ValidationError::new("customer", "customer details missing")),
    }

    match &invoice.company {
        Some(company) => {
            require(&company.name, "company.name", &mut errors);
            require(&company.email, "company.email", &mut errors);
            require(&company.vat_number, "company.vat_number", &mut errors);
            require(
                &company.organization_number,
                "company.organization_number",
                &mut errors,
            );
        }
        None => errors.push(ValidationError::new("company", "company details missing")),
    }

    match &invoice.booking {
        Some(booking) => {
            require(&booking.apartment_type, "booking.apartment_type", &mut errors);
            require(&booking.check_in, "booking.check_in", &mut errors);
            require(&booking.check_out, "booking.check_out", &mut errors);
        }
        None => errors.push(ValidationError::new("booking", "booking details missing")),
    }

    errors
}

/// Whether [`validate_completeness`] finds nothing missing.
pub fn is_complete(invoice: &InvoiceData) -> bool {
    validate_completeness(invoice).is_empty()
}

/// Check booking form values against the limits the form enforces.
///
/// Advisory only: [`compute_invoice`](super::compute_invoice) accepts all of
/// these and degrades instead of failing.
pub fn validate_inputs(
    booking: &BookingDetails,
    settings: &InvoiceSettings,
    extras: &ExtraFees,
    catalog: &Catalog,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if settings.vat_rate < Decimal::ZERO || settings.vat_rate > dec!(100) {
        errors.push(ValidationError::new(
            "settings.vat_rate",
            format!("VAT rate {} must be between 0 and 100", settings.vat_rate),
        ));
    }
    if settings.payment_terms < 1 || settings.payment_terms > MAX_PAYMENT_TERMS {
        errors.push(ValidationError::new(
            "settings.payment_terms",
            format!(
                "payment terms of {} days must be between 1 and {MAX_PAYMENT_TERMS}",
                settings.payment_terms
            ),
        ));
    }

    if booking.guests < 1 {
        errors.push(ValidationError::new(
            "booking.guests",
            "at least one guest is required",
        ));
    }
    if !booking.apartment_type.is_empty() {
        match catalog.apartment(&booking.apartment_type) {
            Some(apt) if booking.guests > apt.max_guests => {
                errors.push(ValidationError::new(
                    "booking.guests",
                    format!(
                        "{} guests exceed the maximum of {} for {}",
                        booking.guests, apt.max_guests, apt.name
                    ),
                ));
            }
            Some(_) => {}
            None => errors.push(ValidationError::new(
                "booking.apartment_type",
                format!("unknown apartment type '{}'", booking.apartment_type),
            )),
        }
    }

    let check_in = booking.check_in_date();
    let check_out = booking.check_out_date();
    if !booking.check_in.trim().is_empty() && check_in.is_none() {
        errors.push(ValidationError::new(
            "booking.check_in",
            format!("'{}' is not a valid date", booking.check_in),
        ));
    }
    if !booking.check_out.trim().is_empty() && check_out.is_none() {
        errors.push(ValidationError::new(
            "booking.check_out",
            format!("'{}' is not a valid date", booking.check_out),
        ));
    }
    if let (Some(start), Some(end)) = (check_in, check_out) {
        if end <= start {
            errors.push(ValidationError::new(
                "booking.check_out",
                "check-out must be after check-in",
            ));
        }
    }

    for (field, value) in [
        ("extras.cleaning_fee", extras.cleaning_fee),
        ("extras.city_tax", extras.city_tax),
        ("extras.extra_guest_fee", extras.extra_guest_fee),
        ("extras.other", extras.other),
    ] {
        if value < Decimal::ZERO {
            errors.push(ValidationError::new(field, "fee must not be negative"));
        }
    }

    errors
}

fn require(value: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, "must not be empty"));
    }
}
