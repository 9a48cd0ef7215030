//! Backend-neutral page description.
//!
//! Layout code records what goes where into a [`PageLayout`] through a
//! [`LayoutBuilder`]; a backend (see [`write_pdf`](super::write_pdf)) turns
//! the finished command list into bytes. Coordinates are millimetres from
//! the top-left corner, text `y` is the baseline.

use serde::Serialize;

use super::metrics;

/// A4 width in millimetres.
pub const PAGE_WIDTH: f32 = 210.0;
/// A4 height in millimetres.
pub const PAGE_HEIGHT: f32 = 297.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const PRIMARY: Self = Self::rgb(0x25, 0x63, 0xeb);
    pub const TEXT: Self = Self::rgb(0x37, 0x41, 0x51);
    pub const LIGHT_GRAY: Self = Self::rgb(0x9c, 0xa3, 0xaf);
    pub const DARK_GRAY: Self = Self::rgb(0x1f, 0x29, 0x37);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Horizontal anchor of a text run: `x` is its left or right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 10.0,
            weight: FontWeight::Regular,
            color: Color::TEXT,
        }
    }
}

/// Stroke settings for lines and outlined rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    /// Line width in millimetres.
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Text {
        x: f32,
        y: f32,
        text: String,
        align: Align,
        style: TextStyle,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Stroke,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        stroke: Stroke,
    },
}

/// One page worth of drawing commands, in painting order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    /// Document title for the PDF metadata.
    pub title: Option<String>,
    pub commands: Vec<DrawCommand>,
}

impl PageLayout {
    /// All text runs in painting order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// The text command whose text is exactly `text`.
    pub fn find_text(&self, text: &str) -> Option<&DrawCommand> {
        self.commands
            .iter()
            .find(|cmd| matches!(cmd, DrawCommand::Text { text: t, .. } if t == text))
    }

    /// Baseline of the first text run starting with `prefix`.
    pub fn text_y(&self, prefix: &str) -> Option<f32> {
        self.commands.iter().find_map(|cmd| match cmd {
            DrawCommand::Text { y, text, .. } if text.starts_with(prefix) => Some(*y),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

/// Records drawing commands with a current text style and stroke, the way
/// a pen-and-cursor drawing API would, but without touching any output.
pub struct LayoutBuilder {
    layout: PageLayout,
    style: TextStyle,
    stroke: Stroke,
    line_height: f32,
}

impl LayoutBuilder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            layout: PageLayout {
                width,
                height,
                title: None,
                commands: Vec::new(),
            },
            style: TextStyle::default(),
            stroke: Stroke {
                color: Color::gray(200),
                width: 0.5,
            },
            line_height: 5.0,
        }
    }

    /// An empty A4 page.
    pub fn a4() -> Self {
        Self::new(PAGE_WIDTH, PAGE_HEIGHT)
    }

    pub fn width(&self) -> f32 {
        self.layout.width
    }

    pub fn height(&self) -> f32 {
        self.layout.height
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.layout.title = Some(title.into());
        self
    }

    pub fn font_size(&mut self, size: f32) -> &mut Self {
        self.style.size = size;
        self
    }

    pub fn font_weight(&mut self, weight: FontWeight) -> &mut Self {
        self.style.weight = weight;
        self
    }

    pub fn text_color(&mut self, color: Color) -> &mut Self {
        self.style.color = color;
        self
    }

    /// Baseline distance used by [`wrapped_text`](Self::wrapped_text), in mm.
    pub fn line_height(&mut self, line_height: f32) -> &mut Self {
        self.line_height = line_height;
        self
    }

    pub fn stroke(&mut self, color: Color, width: f32) -> &mut Self {
        self.stroke = Stroke { color, width };
        self
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// Left-aligned text at baseline `y`.
    pub fn text(&mut self, x: f32, y: f32, text: impl Into<String>) -> &mut Self {
        self.push_text(x, y, text.into(), Align::Left)
    }

    /// Text whose right edge sits at `x`.
    pub fn text_right(&mut self, x: f32, y: f32, text: impl Into<String>) -> &mut Self {
        self.push_text(x, y, text.into(), Align::Right)
    }

    /// Left-aligned text clipped to `max_width`, ending in `…` if cut.
    pub fn fitted_text(&mut self, x: f32, y: f32, text: &str, max_width: f32) -> &mut Self {
        let text = metrics::fit_text(text, self.style.size, self.style.weight, max_width);
        self.push_text(x, y, text, Align::Left)
    }

    /// Word-wrap `text` to `max_width`, keep at most `max_lines` lines and
    /// draw them from `y` on. Returns the baseline below the last line.
    pub fn wrapped_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        max_width: f32,
        max_lines: usize,
    ) -> f32 {
        let TextStyle { size, weight, .. } = self.style;
        let lines = metrics::wrap_text_limited(text, size, weight, max_width, max_lines);
        let mut y = y;
        for line in lines {
            self.text(x, y, line);
            y += self.line_height;
        }
        y
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> &mut Self {
        self.layout.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: self.stroke,
        });
        self
    }

    pub fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> &mut Self {
        self.layout.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
        self
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.layout.commands.push(DrawCommand::StrokeRect {
            x,
            y,
            width,
            height,
            stroke: self.stroke,
        });
        self
    }

    pub fn finish(self) -> PageLayout {
        self.layout
    }

    fn push_text(&mut self, x: f32, y: f32, text: String, align: Align) -> &mut Self {
        self.layout.commands.push(DrawCommand::Text {
            x,
            y,
            text,
            align,
            style: self.style,
        });
        self
    }
}
