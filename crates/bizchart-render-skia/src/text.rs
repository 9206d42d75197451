// File: crates/bizchart-render-skia/src/text.rs
// Summary: Text shaping and measurement with Skia textlayout, driven by the core font style.

use bizchart_core::FontStyle;
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Families tried after the requested one.
const FALLBACK_FAMILIES: &[&str] = &["DejaVu Sans", "Arial", "Helvetica", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontStyle) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size() as f32);
        ts.set_color(skia::Color::new(font.color.0));
        let slant = match (font.bold, font.italic) {
            (true, true) => skia::FontStyle::bold_italic(),
            (true, false) => skia::FontStyle::bold(),
            (false, true) => skia::FontStyle::italic(),
            (false, false) => skia::FontStyle::normal(),
        };
        ts.set_font_style(slant);
        let mut families = vec![font.family()];
        families.extend(FALLBACK_FAMILIES.iter().copied());
        ts.set_font_families(&families);
        ts
    }

    pub fn layout(&self, text: &str, font: &FontStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// `(width of the longest line, paragraph height)`.
    pub fn measure(&self, text: &str, font: &FontStyle) -> (f32, f32) {
        let p = self.layout(text, font);
        (p.longest_line(), p.height())
    }

    /// Paint `text` with its top-left corner at `(x, y)`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, font: &FontStyle) {
        let p = self.layout(text, font);
        p.paint(canvas, (x, y));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
