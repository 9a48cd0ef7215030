use rust_decimal_macros::dec;
use semesterfaktura::core::*;
use semesterfaktura::pdf;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "semesterfaktura=debug".into()),
        )
        .init();

    let catalog = Catalog::default();
    let company = CompanyInfo {
        name: "Skärgårdens Stugor AB".into(),
        address: "Strandvägen 5\n111 22 Stockholm".into(),
        phone: "08-123 45 67".into(),
        email: "info@stugor.se".into(),
        website: "https://stugor.se".into(),
        vat_number: "SE556677889901".into(),
        organization_number: "556677-8899".into(),
        bankgiro: "123-4567".into(),
        plusgiro: String::new(),
    };
    let customer = CustomerDetails {
        name: "Ana García".into(),
        address: "Calle Mayor 1\n28013 Madrid\nSpain".into(),
        email: "ana@example.com".into(),
        phone: "+34 600 000 000".into(),
    };
    let booking = BookingDetails::new("studio", "2025-06-01", "2025-06-04", 2);
    let extras = ExtraFees {
        other: dec!(120),
        other_description: "Sänglinne".into(),
        ..ExtraFees::standard()
    };
    let settings = catalog
        .currency("SEK")
        .map(InvoiceSettings::for_currency)
        .unwrap_or_default();

    for problem in validate_inputs(&booking, &settings, &extras, &catalog) {
        println!("warning: {problem}");
    }

    let invoice = compute_invoice(&customer, &booking, &extras, &company, &settings, &catalog);
    let symbol = &invoice.settings.currency_symbol;

    println!("Invoice: {}", invoice.invoice_number);
    println!("Date:    {}", format_date(invoice.invoice_date));
    println!("Due:     {}", format_date(invoice.due_date));
    println!("OCR:     {}", invoice.ocr_number);
    println!("---");
    for line in invoice.line_items() {
        println!(
            "  {:<40} {:>3} x {:>12} = {:>12}",
            line.description,
            line.quantity,
            format_money(line.unit_price, symbol),
            format_money(line.amount, symbol)
        );
    }
    println!("---");
    println!("Net:     {}", format_money(invoice.total, symbol));
    println!("VAT:     {}", format_money(invoice.vat_amount, symbol));
    println!("Total:   {}", format_money(invoice.total_including_vat, symbol));

    let missing = validate_completeness(&invoice);
    if !missing.is_empty() {
        for error in missing {
            eprintln!("missing: {error}");
        }
        std::process::exit(1);
    }

    match pdf::write_invoice_pdf(&invoice, &std::env::temp_dir()) {
        Ok(path) => println!("Saved:   {}", path.display()),
        Err(e) => {
            eprintln!("failed to render invoice: {e}");
            std::process::exit(1);
        }
    }
}
