use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::catalog::Catalog;
use super::numbering::{IssueContext, placeholder_ocr};
use super::types::*;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Compute an invoice from the booking form inputs, stamped with the
/// current time.
///
/// Never fails. An apartment id missing from `catalog` prices the stay at
/// zero, and empty or unparsable dates bill a single night.
pub fn compute_invoice(
    customer: &CustomerDetails,
    booking: &BookingDetails,
    extras: &ExtraFees,
    company: &CompanyInfo,
    settings: &InvoiceSettings,
    catalog: &Catalog,
) -> InvoiceData {
    compute_invoice_with(
        customer,
        booking,
        extras,
        company,
        settings,
        catalog,
        &IssueContext::now(),
    )
}

/// [`compute_invoice`] with an explicit issue time and reference digit.
pub fn compute_invoice_with(
    customer: &CustomerDetails,
    booking: &BookingDetails,
    extras: &ExtraFees,
    company: &CompanyInfo,
    settings: &InvoiceSettings,
    catalog: &Catalog,
    issue: &IssueContext,
) -> InvoiceData {
    let apartment = catalog.apartment(&booking.apartment_type).cloned();
    if apartment.is_none() && !booking.apartment_type.is_empty() {
        tracing::warn!(
            apartment_type = %booking.apartment_type,
            "apartment type not in catalog, pricing accommodation at zero"
        );
    }
    let base_price = apartment
        .as_ref()
        .map_or(Decimal::ZERO, |apt| apt.price_per_night);

    let nights = billable_nights(&booking.check_in, &booking.check_out);
    let nights_dec = Decimal::from(nights);
    let guests = Decimal::from(booking.guests);

    // Order of summation is part of the contract.
    let subtotal = base_price * nights_dec;
    let city_tax_total = extras.city_tax * guests * nights_dec;
    let extra_guest_fee_total = extras.extra_guest_fee * guests * nights_dec;
    let total =
        subtotal + extras.cleaning_fee + city_tax_total + extra_guest_fee_total + extras.other;

    let vat_amount = total * settings.vat_rate / dec!(100);
    let total_including_vat = total + vat_amount;

    let invoice_number = issue.invoice_number();
    let invoice_date = issue.issued_at.date_naive();
    let due_date = invoice_date
        .checked_add_days(Days::new(settings.payment_terms.into()))
        .unwrap_or(NaiveDate::MAX);
    let ocr_number = placeholder_ocr(&invoice_number, issue.ocr_digit);

    tracing::debug!(
        %invoice_number,
        nights,
        %subtotal,
        %total,
        %vat_amount,
        %total_including_vat,
        "invoice computed"
    );

    InvoiceData {
        customer: Some(customer.clone()),
        booking: Some(booking.clone()),
        extras: extras.clone(),
        company: Some(company.clone()),
        settings: settings.clone(),
        apartment,
        nights,
        subtotal,
        total,
        vat_amount,
        total_including_vat,
        invoice_number,
        invoice_date,
        due_date,
        ocr_number,
    }
}

/// Nights between two booking dates, rounded up to whole days, at least 1.
///
/// A result of 1 does not mean the range was valid: same-day, inverted,
/// empty and unparsable ranges all bill one night.
pub fn billable_nights(check_in: &str, check_out: &str) -> u32 {
    let (Some(start), Some(end)) = (
        parse_booking_instant(check_in),
        parse_booking_instant(check_out),
    ) else {
        if !check_in.trim().is_empty() && !check_out.trim().is_empty() {
            tracing::debug!(check_in, check_out, "unparsable booking dates, billing one night");
        }
        return 1;
    };

    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        return 1;
    }
    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX).max(1)
}

/// Parse a booking form date as written, without applying any UTC offset.
///
/// Accepts `YYYY-MM-DD` (taken as midnight), `YYYY-MM-DDTHH:MM[:SS]` and
/// RFC 3339 timestamps. Returns `None` for anything else, including "".
pub fn parse_booking_date(value: &str) -> Option<NaiveDateTime> {
    parse_booking_instant(value).map(|dt| dt.naive_local())
}

/// Like [`parse_booking_date`], but keeps the offset of RFC 3339 input so
/// stays are measured in real elapsed time. Values without an offset are
/// read as UTC.
fn parse_booking_instant(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }
    let naive = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .or_else(|_| value.parse::<NaiveDateTime>())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()?;
    Some(naive.and_utc().fixed_offset())
}

impl InvoiceData {
    /// Guests on the booking, 0 if the booking is absent.
    pub fn guests(&self) -> u32 {
        self.booking.as_ref().map_or(0, |b| b.guests)
    }

    /// Name of the resolved apartment, if the booking resolved.
    pub fn apartment_name(&self) -> Option<&str> {
        self.apartment.as_ref().map(|apt| apt.name.as_str())
    }

    /// Nightly rate used for the accommodation line.
    pub fn price_per_night(&self) -> Decimal {
        self.apartment
            .as_ref()
            .map_or(Decimal::ZERO, |apt| apt.price_per_night)
    }

    pub fn guest_nights(&self) -> u32 {
        self.guests().saturating_mul(self.nights)
    }

    pub fn city_tax_total(&self) -> Decimal {
        self.extras.city_tax * Decimal::from(self.guests()) * Decimal::from(self.nights)
    }

    pub fn extra_guest_fee_total(&self) -> Decimal {
        self.extras.extra_guest_fee * Decimal::from(self.guests()) * Decimal::from(self.nights)
    }

    /// Rows of the invoice table.
    ///
    /// Accommodation is always first. Cleaning, city tax, extra guest and
    /// other follow in that order, each only when its fee is above zero.
    pub fn line_items(&self) -> Vec<LineItem> {
        let guests = self.guests();
        let nights = self.nights;
        let mut items = vec![LineItem {
            kind: LineItemKind::Accommodation,
            description: self.apartment_name().unwrap_or("Boende").to_string(),
            quantity: nights,
            unit_price: self.price_per_night(),
            amount: self.subtotal,
        }];

        if self.extras.cleaning_fee > Decimal::ZERO {
            items.push(LineItem {
                kind: LineItemKind::Cleaning,
                description: "Städavgift".to_string(),
                quantity: 1,
                unit_price: self.extras.cleaning_fee,
                amount: self.extras.cleaning_fee,
            });
        }

        if self.extras.city_tax > Decimal::ZERO {
            items.push(LineItem {
                kind: LineItemKind::CityTax,
                description: format!("Turistskatt ({guests} gäster × {nights} nätter)"),
                quantity: self.guest_nights(),
                unit_price: self.extras.city_tax,
                amount: self.city_tax_total(),
            });
        }

        if self.extras.extra_guest_fee > Decimal::ZERO {
            items.push(LineItem {
                kind: LineItemKind::ExtraGuest,
                description: format!("Extra gästavgift ({guests} gäster × {nights} nätter)"),
                quantity: self.guest_nights(),
                unit_price: self.extras.extra_guest_fee,
                amount: self.extra_guest_fee_total(),
            });
        }

        if self.extras.other > Decimal::ZERO {
            let description = match self.extras.other_description.trim() {
                "" => "Other Fee".to_string(),
                text => text.to_string(),
            };
            items.push(LineItem {
                kind: LineItemKind::Other,
                description,
                quantity: 1,
                unit_price: self.extras.other,
                amount: self.extras.other,
            });
        }

        items
    }
}
