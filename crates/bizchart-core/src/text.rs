// File: crates/bizchart-core/src/text.rs
// Summary: Font descriptions handed to the drawing surface, and tick label formatting.

use crate::color::Rgba;

/// Font family used when a style names none.
pub const DEFAULT_FONT_NAME: &str = "Sans";
/// Point size used when a style carries a non-positive size.
pub const DEFAULT_FONT_SIZE: i32 = 13;

/// Text styling for titles and labels. The core never rasterizes glyphs; a
/// surface turns this into a concrete font.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontStyle {
    pub font_name: Option<String>,
    pub font_size: i32,
    pub color: Rgba,
    pub bold: bool,
    pub italic: bool,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self { font_name: None, font_size: 0, color: Rgba::BLACK, bold: false, italic: false }
    }
}

impl FontStyle {
    pub fn bold() -> Self { Self { bold: true, ..Self::default() } }
    pub fn italic() -> Self { Self { italic: true, ..Self::default() } }

    pub fn family(&self) -> &str { self.font_name.as_deref().unwrap_or(DEFAULT_FONT_NAME) }

    pub fn size(&self) -> i32 {
        if self.font_size <= 0 { DEFAULT_FONT_SIZE } else { self.font_size }
    }

    /// Fontconfig-like name, e.g. `Sans:style=Bold Italic`.
    pub fn font_spec(&self) -> String {
        let style = match (self.bold, self.italic) {
            (false, false) => return self.family().to_string(),
            (true, false) => "Bold",
            (false, true) => "Italic",
            (true, true) => "Bold Italic",
        };
        format!("{}:style={}", self.family(), style)
    }
}

/// Label printed next to a gridline: the tick value floored to an integer.
pub fn tick_label(value: f64) -> String {
    if !value.is_finite() { return String::from("0"); }
    format!("{}", value.floor() as i64)
}
