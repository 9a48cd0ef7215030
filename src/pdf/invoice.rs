use crate::core::{
    BookingDetails, CompanyInfo, CustomerDetails, InvoiceData, InvoiceError, format_date,
    format_money, format_rate, parse_booking_date,
};

use super::layout::{Color, FontWeight, LayoutBuilder, PageLayout};

const LEFT: f32 = 20.0;
/// Column width of the seller and buyer blocks.
const ADDRESS_WIDTH: f32 = 80.0;
/// Width of the right-hand column (metadata, booking details).
const RIGHT_COLUMN_WIDTH: f32 = 60.0;
const LINE_HEIGHT: f32 = 5.0;
/// Minimum space between a block and whatever follows it.
const BLOCK_GAP: f32 = 8.0;
/// Addresses are wrapped to at most this many lines so the page never
/// overflows.
const MAX_ADDRESS_LINES: usize = 3;

const SELLER_TOP: f32 = 52.0;
const BUYER_TOP: f32 = 110.0;
const TABLE_TOP: f32 = 150.0;

const TABLE_HEADER_HEIGHT: f32 = 10.0;
const ROW_HEIGHT: f32 = 8.0;
const DESCRIPTION_WIDTH: f32 = 90.0;
/// Payment details sit left of the summary, which starts 100 mm from the
/// right edge.
const PAYMENT_WIDTH: f32 = 85.0;

/// Distance of the first footer line from the bottom edge.
const FOOTER_OFFSET: f32 = 30.0;
const FOOTER_LINES: [&str; 2] = [
    "Tack för att du valde vårt semesterboende!",
    "Vid frågor om denna faktura, kontakta oss på ovanstående kontaktuppgifter.",
];

/// Lay out the invoice page.
///
/// Fails with [`InvoiceError::MissingData`] before any drawing if company,
/// customer or booking is absent. Empty optional fields (website, giro
/// numbers, phone) are left out instead of printed blank.
///
/// Everything fits on one A4 page: addresses wrap to at most three lines,
/// single-line fields are clipped to their column with a trailing `…`, and
/// the payment details share a band with the summary.
pub fn layout_invoice(invoice: &InvoiceData) -> Result<PageLayout, InvoiceError> {
    let company = invoice
        .company
        .as_ref()
        .ok_or(InvoiceError::MissingData("company"))?;
    let customer = invoice
        .customer
        .as_ref()
        .ok_or(InvoiceError::MissingData("customer"))?;
    let booking = invoice
        .booking
        .as_ref()
        .ok_or(InvoiceError::MissingData("booking"))?;

    let mut page = LayoutBuilder::a4();
    page.title(format!("Faktura {}", invoice.invoice_number))
        .line_height(LINE_HEIGHT);

    draw_header(&mut page, invoice);
    let seller_end = draw_seller(&mut page, company);
    let booking_end = draw_booking(&mut page, invoice, booking);
    let buyer_top = BUYER_TOP.max(seller_end + BLOCK_GAP);
    let buyer_end = draw_buyer(&mut page, customer, buyer_top);
    let table_top = TABLE_TOP
        .max(buyer_end + BLOCK_GAP)
        .max(booking_end + BLOCK_GAP);
    let table_end = draw_line_items(&mut page, invoice, table_top);
    let payment_end = draw_payment(&mut page, invoice, company, table_end);
    let summary_end = draw_summary(&mut page, invoice, table_end);
    draw_footer(&mut page);

    let layout = page.finish();
    tracing::debug!(
        invoice_number = %invoice.invoice_number,
        commands = layout.commands.len(),
        content_end = payment_end.max(summary_end),
        "invoice laid out"
    );
    Ok(layout)
}

fn draw_header(page: &mut LayoutBuilder, invoice: &InvoiceData) {
    let x = page.width() - 80.0;
    page.font_size(24.0)
        .font_weight(FontWeight::Bold)
        .text_color(Color::PRIMARY)
        .text(LEFT, 25.0, "FAKTURA");

    page.font_size(10.0)
        .font_weight(FontWeight::Regular)
        .text_color(Color::TEXT);
    let rows = [
        format!("Fakturanummer: {}", invoice.invoice_number),
        format!("Fakturadatum: {}", format_date(invoice.invoice_date)),
        format!("Förfallodatum: {}", format_date(invoice.due_date)),
        format!("OCR-nummer: {}", invoice.ocr_number),
    ];
    let mut y = 22.0;
    for row in rows {
        page.fitted_text(x, y, &row, RIGHT_COLUMN_WIDTH);
        y += 6.0;
    }
}

/// Returns the baseline below the last seller line.
fn draw_seller(page: &mut LayoutBuilder, company: &CompanyInfo) -> f32 {
    page.font_size(12.0)
        .font_weight(FontWeight::Bold)
        .text_color(Color::PRIMARY)
        .text(LEFT, SELLER_TOP, "SÄLJARE");

    page.font_size(10.0)
        .font_weight(FontWeight::Regular)
        .text_color(Color::TEXT)
        .fitted_text(LEFT, SELLER_TOP + 7.0, &company.name, ADDRESS_WIDTH);
    let address_end = page.wrapped_text(
        LEFT,
        SELLER_TOP + 13.0,
        &company.address,
        ADDRESS_WIDTH,
        MAX_ADDRESS_LINES,
    );

    let lines = [
        ("Telefon", company.phone.as_str()),
        ("E-post", company.email.as_str()),
        ("Webbplats", company.website.as_str()),
        ("Org.nr", company.organization_number.as_str()),
        ("Momsreg.nr", company.vat_number.as_str()),
    ];
    labelled_lines(page, LEFT, address_end + 2.0, ADDRESS_WIDTH, &lines)
}

/// Right-hand column next to the seller. Returns the baseline below it.
fn draw_booking(page: &mut LayoutBuilder, invoice: &InvoiceData, booking: &BookingDetails) -> f32 {
    let x = page.width() - 80.0;
    page.font_size(12.0)
        .font_weight(FontWeight::Bold)
        .text_color(Color::PRIMARY)
        .text(x, SELLER_TOP, "BOKNINGSDETALJER");

    page.font_size(10.0)
        .font_weight(FontWeight::Regular)
        .text_color(Color::TEXT);
    let rows = [
        format!("Boende: {}", invoice.apartment_name().unwrap_or("N/A")),
        format!("Incheckning: {}", display_booking_date(&booking.check_in)),
        format!("Utcheckning: {}", display_booking_date(&booking.check_out)),
        format!("Gäster: {}", booking.guests),
        format!("Nätter: {}", invoice.nights),
    ];
    let mut y = SELLER_TOP + 7.0;
    for row in rows {
        page.fitted_text(x, y, &row, RIGHT_COLUMN_WIDTH);
        y += LINE_HEIGHT;
    }
    y
}

fn draw_buyer(page: &mut LayoutBuilder, customer: &CustomerDetails, top: f32) -> f32 {
    page.font_size(12.0)
        .font_weight(FontWeight::Bold)
        .text_color(Color::PRIMARY)
        .text(LEFT, top, "KÖPARE");

    page.font_size(10.0)
        .font_weight(FontWeight::Regular)
        .text_color(Color::TEXT)
        .fitted_text(LEFT, top + 7.0, &customer.name, ADDRESS_WIDTH);
    let address_end = page.wrapped_text(
        LEFT,
        top + 13.0,
        &customer.address,
        ADDRESS_WIDTH,
        MAX_ADDRESS_LINES,
    );

    let lines = [
        ("E-post", customer.email.as_str()),
        ("Telefon", customer.phone.as_str()),
    ];
    labelled_lines(page, LEFT, address_end + 2.0, ADDRESS_WIDTH, &lines)
}

/// Header row plus one row per line item. Returns the y below the last row.
fn draw_line_items(page: &mut LayoutBuilder, invoice: &InvoiceData, top: f32) -> f32 {
    let width = page.width();
    let qty_x = width - 90.0;
    let price_x = width - 45.0;
    let amount_x = width - 22.0;
    let symbol = invoice.settings.currency_symbol.as_str();

    page.fill_rect(LEFT, top, width - 2.0 * LEFT, TABLE_HEADER_HEIGHT, Color::gray(245));
    page.font_size(10.0)
        .font_weight(FontWeight::Bold)
        .text_color(Color::DARK_GRAY);
    let header_y = top + 7.0;
    page.text(25.0, header_y, "Beskrivning");
    page.text(qty_x, header_y, "Antal");
    page.text_right(price_x, header_y, "Pris");
    page.text_right(amount_x, header_y, "Belopp");

    page.font_weight(FontWeight::Regular).font_size(9.0);
    let mut y = top + TABLE_HEADER_HEIGHT + 2.0;
    for item in invoice.line_items() {
        let baseline = y + 5.0;
        page.fitted_text(25.0, baseline, &item.description, DESCRIPTION_WIDTH);
        page.text(qty_x, baseline, item.quantity.to_string());
        page.text_right(price_x, baseline, format_money(item.unit_price, symbol));
        page.text_right(amount_x, baseline, format_money(item.amount, symbol));
        y += ROW_HEIGHT;
    }
    y
}

/// Totals in the right half below the table. Returns the grand total
/// baseline.
fn draw_summary(page: &mut LayoutBuilder, invoice: &InvoiceData, top: f32) -> f32 {
    let width = page.width();
    let label_x = width - 100.0;
    let amount_x = width - 22.0;
    let symbol = invoice.settings.currency_symbol.as_str();

    let mut y = top + 6.0;
    page.stroke(Color::gray(200), 0.5).line(label_x, y, width - 20.0, y);

    y += 6.0;
    page.font_size(10.0)
        .font_weight(FontWeight::Regular)
        .text_color(Color::TEXT);
    page.text(label_x, y, "Delsumma (exkl. moms):");
    page.text_right(amount_x, y, format_money(invoice.total, symbol));
    y += 6.0;

    page.text(label_x, y, format!("Moms ({}%):", format_rate(invoice.settings.vat_rate)));
    page.text_right(amount_x, y, format_money(invoice.vat_amount, symbol));
    y += 4.0;

    page.stroke(Color::PRIMARY, 1.0).line(label_x, y, width - 20.0, y);

    y += 7.0;
    page.font_size(12.0)
        .font_weight(FontWeight::Bold)
        .text_color(Color::PRIMARY);
    page.text(label_x, y, "ATT BETALA:");
    page.text_right(amount_x, y, format_money(invoice.total_including_vat, symbol));
    y
}

/// Payment details in the left half below the table, level with the
/// summary. Returns the baseline after the last line.
fn draw_payment(
    page: &mut LayoutBuilder,
    invoice: &InvoiceData,
    company: &CompanyInfo,
    top: f32,
) -> f32 {
    page.font_size(12.0)
        .font_weight(FontWeight::Bold)
        .text_color(Color::PRIMARY)
        .text(LEFT, top + 6.0, "BETALNINGSINFORMATION");

    page.font_size(10.0)
        .font_weight(FontWeight::Regular)
        .text_color(Color::TEXT);
    let due_date = format_date(invoice.due_date);
    let terms = format!("{} dagar", invoice.settings.payment_terms);
    let lines = [
        ("Bankgiro", company.bankgiro.as_str()),
        ("Plusgiro", company.plusgiro.as_str()),
        ("OCR-nummer", invoice.ocr_number.as_str()),
        ("Förfallodatum", due_date.as_str()),
        ("Betalningsvillkor", terms.as_str()),
    ];
    labelled_lines(page, LEFT, top + 13.0, PAYMENT_WIDTH, &lines)
}

fn draw_footer(page: &mut LayoutBuilder) {
    let (width, height) = (page.width(), page.height());
    let footer_y = height - FOOTER_OFFSET;
    page.font_size(7.0)
        .font_weight(FontWeight::Regular)
        .text_color(Color::LIGHT_GRAY);
    for (i, line) in FOOTER_LINES.iter().enumerate() {
        page.text(LEFT, footer_y + i as f32 * LINE_HEIGHT, *line);
    }

    page.stroke(Color::gray(220), 0.5)
        .stroke_rect(15.0, 15.0, width - 30.0, height - 30.0);
}

/// Draw `Label: value` lines clipped to `max_width`, skipping empty values.
/// Returns the baseline after the last drawn line.
fn labelled_lines(
    page: &mut LayoutBuilder,
    x: f32,
    top: f32,
    max_width: f32,
    lines: &[(&str, &str)],
) -> f32 {
    let mut y = top;
    for (label, value) in lines {
        if value.trim().is_empty() {
            continue;
        }
        page.fitted_text(x, y, &format!("{label}: {value}"), max_width);
        y += LINE_HEIGHT;
    }
    y
}

/// Booking dates as Swedish short dates; unparsable input is shown as typed.
fn display_booking_date(value: &str) -> String {
    parse_booking_date(value)
        .map(|dt| format_date(dt.date()))
        .unwrap_or_else(|| value.to_string())
}
