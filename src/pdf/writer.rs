use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};

use super::layout::{Align, Color, DrawCommand, FontWeight, PageLayout, Stroke};
use super::metrics::{self, MM_PER_PT};
use crate::core::InvoiceError;

const PRODUCER: &str = concat!("semesterfaktura ", env!("CARGO_PKG_VERSION"));

/// Serialize a [`PageLayout`] as a single-page PDF.
///
/// Text is set in the standard Helvetica fonts with WinAnsi encoding;
/// characters outside that code page print as `?`.
pub fn write_pdf(layout: &PageLayout) -> Result<Vec<u8>, InvoiceError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dict("Helvetica"));
    let bold_id = doc.add_object(font_dict("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let page_height = layout.height;
    let operations: Vec<Operation> = layout
        .commands
        .iter()
        .flat_map(|cmd| command_ops(cmd, page_height))
        .collect();
    let content = Content { operations };
    let encoded = content
        .encode()
        .map_err(|e| InvoiceError::Pdf(format!("failed to encode page content: {e}")))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            Object::Real(mm_to_pt(layout.width)),
            Object::Real(mm_to_pt(layout.height)),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut info = dictionary! {
        "Producer" => Object::string_literal(PRODUCER),
    };
    if let Some(title) = &layout.title {
        info.set("Title", Object::String(win_ansi(title), StringFormat::Literal));
    }
    let info_id = doc.add_object(info);
    doc.trailer.set("Info", info_id);

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| InvoiceError::Pdf(format!("failed to save PDF: {e}")))?;

    tracing::debug!(bytes = output.len(), "PDF written");
    Ok(output)
}

fn font_dict(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn command_ops(cmd: &DrawCommand, page_height: f32) -> Vec<Operation> {
    let y_pt = |y: f32| mm_to_pt(page_height - y);

    match cmd {
        DrawCommand::Text {
            x,
            y,
            text,
            align,
            style,
        } => {
            let x = match align {
                Align::Left => *x,
                Align::Right => x - metrics::text_width(text, style.size, style.weight),
            };
            let font = match style.weight {
                FontWeight::Regular => "F1",
                FontWeight::Bold => "F2",
            };
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec![font.into(), Object::Real(style.size)]),
                color_op("rg", style.color),
                Operation::new("Td", vec![Object::Real(mm_to_pt(x)), Object::Real(y_pt(*y))]),
                Operation::new(
                    "Tj",
                    vec![Object::String(win_ansi(text), StringFormat::Literal)],
                ),
                Operation::new("ET", vec![]),
            ]
        }
        DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => {
            let mut ops = stroke_ops(stroke);
            ops.extend([
                Operation::new("m", vec![Object::Real(mm_to_pt(*x1)), Object::Real(y_pt(*y1))]),
                Operation::new("l", vec![Object::Real(mm_to_pt(*x2)), Object::Real(y_pt(*y2))]),
                Operation::new("S", vec![]),
            ]);
            ops
        }
        DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => vec![
            color_op("rg", *color),
            rect_op(*x, *y, *width, *height, page_height),
            Operation::new("f", vec![]),
        ],
        DrawCommand::StrokeRect {
            x,
            y,
            width,
            height,
            stroke,
        } => {
            let mut ops = stroke_ops(stroke);
            ops.push(rect_op(*x, *y, *width, *height, page_height));
            ops.push(Operation::new("S", vec![]));
            ops
        }
    }
}

fn stroke_ops(stroke: &Stroke) -> Vec<Operation> {
    vec![
        color_op("RG", stroke.color),
        Operation::new("w", vec![Object::Real(mm_to_pt(stroke.width))]),
    ]
}

/// `re` takes the lower-left corner in PDF space.
fn rect_op(x: f32, y: f32, width: f32, height: f32, page_height: f32) -> Operation {
    Operation::new(
        "re",
        vec![
            Object::Real(mm_to_pt(x)),
            Object::Real(mm_to_pt(page_height - y - height)),
            Object::Real(mm_to_pt(width)),
            Object::Real(mm_to_pt(height)),
        ],
    )
}

fn color_op(operator: &str, color: Color) -> Operation {
    let channel = |v: u8| Object::Real(f32::from(v) / 255.0);
    Operation::new(
        operator,
        vec![channel(color.r), channel(color.g), channel(color.b)],
    )
}

fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Encode text for the WinAnsi (Windows-1252) code page.
pub(crate) fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8a,
            '‹' => 0x8b,
            'Œ' => 0x8c,
            'Ž' => 0x8e,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9a,
            '›' => 0x9b,
            'œ' => 0x9c,
            'ž' => 0x9e,
            'Ÿ' => 0x9f,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::layout::LayoutBuilder;

    #[test]
    fn win_ansi_swedish_and_euro() {
        assert_eq!(win_ansi("Säljare"), b"S\xe4ljare");
        assert_eq!(win_ansi("Köpare"), b"K\xf6pare");
        assert_eq!(win_ansi("5 €"), b"5 \x80");
        assert_eq!(win_ansi("2 × 3"), b"2 \xd7 3");
    }

    #[test]
    fn win_ansi_unmappable() {
        assert_eq!(win_ansi("¥ 円"), b"\xa5 ?");
        assert_eq!(win_ansi("tab\there"), b"tab?here");
    }

    #[test]
    fn single_page_document() {
        let mut page = LayoutBuilder::a4();
        page.title("Faktura INV-000001").text(20.0, 25.0, "FAKTURA");
        page.fill_rect(20.0, 190.0, 170.0, 15.0, Color::gray(245));
        page.line(110.0, 240.0, 190.0, 240.0);
        page.stroke_rect(15.0, 15.0, 180.0, 267.0);
        let bytes = write_pdf(&page.finish()).unwrap();

        assert!(bytes.starts_with(b"%PDF-1.5"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn content_stream_decodes_back() {
        let mut page = LayoutBuilder::a4();
        page.text(20.0, 25.0, "FAKTURA").line(20.0, 30.0, 190.0, 30.0);
        let bytes = write_pdf(&page.finish()).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let operators: Vec<_> = content.operations.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(
            operators,
            ["BT", "Tf", "rg", "Td", "Tj", "ET", "RG", "w", "m", "l", "S"]
        );
    }

    #[test]
    fn text_positions_flip_y_axis() {
        let mut page = LayoutBuilder::a4();
        page.text(0.0, 0.0, "top");
        let layout = page.finish();
        let ops = command_ops(&layout.commands[0], layout.height);
        let td = ops.iter().find(|op| op.operator == "Td").unwrap();
        let y = td.operands[1].as_float().unwrap();
        assert!((y - 841.89).abs() < 0.01);
    }

    #[test]
    fn right_aligned_text_ends_at_anchor() {
        let mut page = LayoutBuilder::a4();
        page.text_right(100.0, 50.0, "400.00 kr");
        let layout = page.finish();
        let ops = command_ops(&layout.commands[0], layout.height);
        let td = ops.iter().find(|op| op.operator == "Td").unwrap();
        let x = td.operands[0].as_float().unwrap();
        let width = metrics::text_width("400.00 kr", 10.0, FontWeight::Regular);
        assert!((x - mm_to_pt(100.0 - width)).abs() < 0.01);
    }
}
