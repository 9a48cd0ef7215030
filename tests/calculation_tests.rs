use chrono::{Local, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use semesterfaktura::core::*;

fn issued() -> IssueContext {
    IssueContext::new(Local.with_ymd_and_hms(2025, 5, 20, 14, 0, 0).unwrap(), 5)
}

fn customer() -> CustomerDetails {
    CustomerDetails {
        name: "Ana García/Söto".into(),
        address: "Calle Mayor 1\n28013 Madrid".into(),
        email: "ana@example.com".into(),
        phone: "+34 600 000 000".into(),
    }
}

fn company() -> CompanyInfo {
    CompanyInfo {
        name: "Skärgårdens Stugor AB".into(),
        address: "Strandvägen 5, 111 22 Stockholm".into(),
        phone: "08-123 45 67".into(),
        email: "info@stugor.se".into(),
        website: "https://stugor.se".into(),
        vat_number: "SE556677889901".into(),
        organization_number: "556677-8899".into(),
        bankgiro: "123-4567".into(),
        plusgiro: "98 76 54-3".into(),
    }
}

fn compute(
    booking: &BookingDetails,
    extras: &ExtraFees,
    settings: &InvoiceSettings,
) -> InvoiceData {
    compute_invoice_with(
        &customer(),
        booking,
        extras,
        &company(),
        settings,
        &Catalog::default(),
        &issued(),
    )
}

// --- Reference scenarios ---

#[test]
fn studio_three_nights() {
    let booking = BookingDetails::new("studio", "2025-06-01", "2025-06-04", 2);
    let extras = ExtraFees {
        cleaning_fee: dec!(50),
        city_tax: dec!(2.5),
        extra_guest_fee: dec!(0),
        other: dec!(0),
        other_description: String::new(),
    };
    let settings = InvoiceSettings {
        vat_rate: dec!(25),
        ..InvoiceSettings::default()
    };
    let inv = compute(&booking, &extras, &settings);

    assert_eq!(inv.nights, 3);
    assert_eq!(inv.subtotal, dec!(255));
    assert_eq!(inv.city_tax_total(), dec!(15));
    assert_eq!(inv.extra_guest_fee_total(), dec!(0));
    assert_eq!(inv.total, dec!(320));
    assert_eq!(inv.vat_amount, dec!(80));
    assert_eq!(inv.total_including_vat, dec!(400));
}

#[test]
fn studio_same_day() {
    let booking = BookingDetails::new("studio", "2025-06-01", "2025-06-01", 2);
    let inv = compute(&booking, &ExtraFees::standard(), &InvoiceSettings::default());
    assert_eq!(inv.nights, 1);
    assert_eq!(inv.subtotal, dec!(85));
}

#[test]
fn penthouse_week_all_fees() {
    let booking = BookingDetails::new("penthouse", "2025-07-01", "2025-07-08", 6);
    let extras = ExtraFees {
        cleaning_fee: dec!(150),
        city_tax: dec!(1.25),
        extra_guest_fee: dec!(20),
        other: dec!(99.90),
        other_description: "Båthyra".into(),
    };
    let settings = InvoiceSettings {
        vat_rate: dec!(12),
        ..InvoiceSettings::default()
    };
    let inv = compute(&booking, &extras, &settings);

    // 350 * 7 = 2450; 1.25 * 6 * 7 = 52.5; 20 * 6 * 7 = 840
    assert_eq!(inv.nights, 7);
    assert_eq!(inv.subtotal, dec!(2450));
    assert_eq!(inv.total, dec!(2450) + dec!(150) + dec!(52.5) + dec!(840) + dec!(99.90));
    assert_eq!(inv.total, dec!(3592.40));
    // 3592.40 * 12 / 100 = 431.088, kept unrounded
    assert_eq!(inv.vat_amount, dec!(431.088));
    assert_eq!(inv.total_including_vat, dec!(4023.488));
    assert_eq!(format_money(inv.total_including_vat, "kr"), "4023.49 kr");
}

#[test]
fn zero_vat() {
    let booking = BookingDetails::new("one-bedroom", "2025-06-01", "2025-06-03", 1);
    let settings = InvoiceSettings {
        vat_rate: Decimal::ZERO,
        ..InvoiceSettings::default()
    };
    let inv = compute(&booking, &ExtraFees::default(), &settings);
    assert_eq!(inv.total, dec!(240));
    assert_eq!(inv.vat_amount, Decimal::ZERO);
    assert_eq!(inv.total_including_vat, inv.total);
}

// --- Degenerate input ---

#[test]
fn unknown_apartment_is_free() {
    let booking = BookingDetails::new("igloo", "2025-06-01", "2025-06-04", 2);
    let inv = compute(&booking, &ExtraFees::standard(), &InvoiceSettings::default());
    assert!(inv.apartment.is_none());
    assert_eq!(inv.subtotal, Decimal::ZERO);
    // fees still apply
    assert_eq!(inv.total, dec!(50) + dec!(15));
}

#[test]
fn empty_booking_form() {
    let inv = compute(
        &BookingDetails::default(),
        &ExtraFees::default(),
        &InvoiceSettings::default(),
    );
    assert_eq!(inv.nights, 1);
    assert_eq!(inv.subtotal, Decimal::ZERO);
    assert_eq!(inv.total_including_vat, Decimal::ZERO);
}

#[test]
fn malformed_dates_bill_one_night() {
    let booking = BookingDetails::new("studio", "2025-13-01", "2025-06-04", 2);
    let inv = compute(&booking, &ExtraFees::default(), &InvoiceSettings::default());
    assert_eq!(inv.nights, 1);
    assert_eq!(inv.subtotal, dec!(85));
}

#[test]
fn custom_catalog_injected() {
    let catalog = Catalog::new(
        vec![ApartmentType::new("studio", "Tiny Studio", dec!(10), 1)],
        vec![Currency::new("EUR", "€", "Euro")],
    );
    let inv = compute_invoice_with(
        &customer(),
        &BookingDetails::new("studio", "2025-06-01", "2025-06-04", 1),
        &ExtraFees::default(),
        &company(),
        &InvoiceSettings::for_currency(catalog.currency("EUR").unwrap()),
        &catalog,
        &issued(),
    );
    assert_eq!(inv.subtotal, dec!(30));
    assert_eq!(inv.apartment_name(), Some("Tiny Studio"));
    assert_eq!(inv.settings.currency_symbol, "€");
    assert_eq!(inv.settings.vat_rate, dec!(25));
}

// --- Identifiers & dates ---

#[test]
fn identifiers_from_issue_context() {
    let ctx = issued();
    let inv = compute(
        &BookingDetails::new("studio", "2025-06-01", "2025-06-04", 2),
        &ExtraFees::default(),
        &InvoiceSettings::default(),
    );
    let expected = format!("INV-{:06}", ctx.issued_at.timestamp_millis() % 1_000_000);
    assert_eq!(inv.invoice_number, expected);
    assert_eq!(inv.ocr_number, format!("{}5", &expected[4..]));
    assert_eq!(inv.ocr_number.len(), 7);
    assert!(inv.ocr_number.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn due_date_follows_payment_terms() {
    let settings = InvoiceSettings {
        payment_terms: 14,
        ..InvoiceSettings::default()
    };
    let inv = compute(&BookingDetails::default(), &ExtraFees::default(), &settings);
    assert_eq!(inv.invoice_date, NaiveDate::from_ymd_opt(2025, 5, 20).unwrap());
    assert_eq!(inv.due_date, NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
}

#[test]
fn live_clock_produces_today() {
    let inv = compute_invoice(
        &customer(),
        &BookingDetails::new("studio", "2025-06-01", "2025-06-04", 2),
        &ExtraFees::standard(),
        &company(),
        &InvoiceSettings::default(),
        &Catalog::default(),
    );
    assert!(inv.invoice_number.starts_with("INV-"));
    assert_eq!(inv.invoice_number.len(), 10);
    assert!(inv.due_date > inv.invoice_date);
    assert_eq!(inv.total, dec!(320));
}

#[test]
fn recompute_is_stable() {
    let booking = BookingDetails::new("two-bedroom", "2025-08-10", "2025-08-15", 4);
    let a = compute(&booking, &ExtraFees::standard(), &InvoiceSettings::default());
    let b = compute(&booking, &ExtraFees::standard(), &InvoiceSettings::default());
    assert_eq!(a, b);
}

#[test]
fn inputs_carried_through() {
    let booking = BookingDetails::new("studio", "2025-06-01", "2025-06-04", 2);
    let inv = compute(&booking, &ExtraFees::standard(), &InvoiceSettings::default());
    assert_eq!(inv.customer.as_ref().unwrap(), &customer());
    assert_eq!(inv.company.as_ref().unwrap(), &company());
    assert_eq!(inv.booking.as_ref().unwrap(), &booking);
    assert_eq!(inv.extras, ExtraFees::standard());
}

// --- Completeness gate ---

#[test]
fn complete_invoice_passes_gate() {
    let inv = compute(
        &BookingDetails::new("studio", "2025-06-01", "2025-06-04", 2),
        &ExtraFees::standard(),
        &InvoiceSettings::default(),
    );
    assert!(is_complete(&inv));
}

#[test]
fn gate_lists_every_missing_field() {
    let inv = compute_invoice_with(
        &CustomerDetails::default(),
        &BookingDetails::default(),
        &ExtraFees::default(),
        &CompanyInfo::default(),
        &InvoiceSettings::default(),
        &Catalog::default(),
        &issued(),
    );
    let fields: Vec<_> = validate_completeness(&inv)
        .into_iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(
        fields,
        [
            "customer.name",
            "customer.email",
            "company.name",
            "company.email",
            "company.vat_number",
            "company.organization_number",
            "booking.apartment_type",
            "booking.check_in",
            "booking.check_out",
        ]
    );
}

#[test]
fn gate_ignores_optional_fields() {
    let mut company = company();
    company.website.clear();
    company.bankgiro.clear();
    company.plusgiro.clear();
    company.phone.clear();
    let mut customer = customer();
    customer.phone.clear();
    customer.address.clear();
    let inv = compute_invoice_with(
        &customer,
        &BookingDetails::new("studio", "2025-06-01", "2025-06-04", 2),
        &ExtraFees::default(),
        &company,
        &InvoiceSettings::default(),
        &Catalog::default(),
        &issued(),
    );
    assert!(is_complete(&inv));
}

#[test]
fn gate_treats_whitespace_as_missing() {
    let mut company = company();
    company.vat_number = "   ".into();
    let inv = compute_invoice_with(
        &customer(),
        &BookingDetails::new("studio", "2025-06-01", "2025-06-04", 2),
        &ExtraFees::default(),
        &company,
        &InvoiceSettings::default(),
        &Catalog::default(),
        &issued(),
    );
    let errors = validate_completeness(&inv);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "company.vat_number: must not be empty");
}
