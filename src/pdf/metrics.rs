//! Helvetica advance widths and word wrapping.
//!
//! Widths are the standard Type 1 metrics in 1/1000 em for the printable
//! ASCII range. Everything else is estimated from a similar glyph, which is
//! close enough to decide where a line breaks.

use super::layout::FontWeight;

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

#[rustfmt::skip]
static HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N'..'Z'
    278, 278, 278, 469, 556, 333,                                                   // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n'..'z'
    334, 260, 334, 584,                                                             // '{'..'~'
];

#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

fn glyph_width(c: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    let c = match c {
        '…' => return 1000,
        ' '..='~' => c,
        'À'..='Å' => 'A',
        'à'..='å' => 'a',
        'Ò'..='Ö' | 'Ø' => 'O',
        'ò'..='ö' | 'ø' => 'o',
        'È'..='Ë' => 'E',
        'è'..='ë' => 'e',
        'Ù'..='Ü' => 'U',
        'ù'..='ü' => 'u',
        'Ì'..='Ï' => 'I',
        'ì'..='ï' => 'i',
        'Ñ' => 'N',
        'ñ' => 'n',
        'Ç' => 'C',
        'ç' => 'c',
        'Æ' | 'Œ' => 'W',
        'æ' | 'œ' => 'm',
        _ => '0',
    };
    table[(c as usize) - 0x20]
}

/// Width of `text` in millimetres at `size` points.
pub fn text_width(text: &str, size: f32, weight: FontWeight) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(glyph_width(c, weight))).sum();
    units as f32 / 1000.0 * size * MM_PER_PT
}

/// Break `text` into lines no wider than `max_width` millimetres.
///
/// Explicit line breaks are kept, runs of whitespace collapse to one space,
/// and a single word wider than the column is split between characters.
/// Blank input yields no lines.
pub fn wrap_text(text: &str, size: f32, weight: FontWeight, max_width: f32) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let fits = |s: &str| text_width(s, size, weight) <= max_width;
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line = word.to_string();
            } else {
                let candidate = format!("{line} {word}");
                if fits(&candidate) {
                    line = candidate;
                    continue;
                }
                lines.push(std::mem::replace(&mut line, word.to_string()));
            }

            while !fits(&line) {
                let (head, tail) = split_to_width(&line, size, weight, max_width);
                lines.push(head);
                line = tail;
            }
        }
        lines.push(line);
    }

    lines
}

/// [`wrap_text`] cut to at most `max_lines` lines. When lines are dropped,
/// the last kept line ends in `…`.
pub fn wrap_text_limited(
    text: &str,
    size: f32,
    weight: FontWeight,
    max_width: f32,
    max_lines: usize,
) -> Vec<String> {
    let mut lines = wrap_text(text, size, weight, max_width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = ellipsize(last, size, weight, max_width);
        }
    }
    lines
}

/// `text` unchanged if it fits in `max_width`, otherwise its longest
/// prefix that fits together with a trailing `…`.
pub fn fit_text(text: &str, size: f32, weight: FontWeight, max_width: f32) -> String {
    if text_width(text, size, weight) <= max_width {
        text.to_string()
    } else {
        ellipsize(text, size, weight, max_width)
    }
}

fn ellipsize(text: &str, size: f32, weight: FontWeight, max_width: f32) -> String {
    let mut prefix = text.trim_end();
    loop {
        let candidate = format!("{prefix}…");
        if prefix.is_empty() || text_width(&candidate, size, weight) <= max_width {
            return candidate;
        }
        let cut = prefix.char_indices().last().map_or(0, |(idx, _)| idx);
        prefix = prefix[..cut].trim_end();
    }
}

/// Longest prefix that fits (at least one character) and the rest.
fn split_to_width(
    word: &str,
    size: f32,
    weight: FontWeight,
    max_width: f32,
) -> (String, String) {
    let mut end = 0;
    for (idx, c) in word.char_indices() {
        if text_width(&word[..idx + c.len_utf8()], size, weight) > max_width && end > 0 {
            break;
        }
        end = idx + c.len_utf8();
    }
    (word[..end].to_string(), word[end..].to_string())
}
