// File: crates/bizchart-core/src/config.rs
// Summary: ChartConfig: canvas size, background, titles and grid settings, independent of any dataset.

use tracing::debug;

use crate::color::Rgba;
use crate::text::FontStyle;
use crate::types::{HEIGHT, WIDTH};

/// Default background. The white variant is used; a grey `0xFF808080` never
/// became the library default.
pub const DEFAULT_BACKGROUND: Rgba = Rgba(0xffff_ffff);
pub const DEFAULT_GRID_COLOR: Rgba = Rgba(0xffcc_cccc);
pub const DEFAULT_SUB_GRID_COLOR: Rgba = Rgba(0xffee_eeee);

/// A title string plus its font.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TitleConfig {
    text: Option<String>,
    pub style: FontStyle,
}

impl TitleConfig {
    fn with_style(style: FontStyle) -> Self { Self { text: None, style } }

    /// Set the text; empty strings are ignored.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.is_empty() {
            debug!("ignoring empty title text");
            return false;
        }
        self.text = Some(text);
        true
    }

    pub fn text(&self) -> Option<&str> { self.text.as_deref() }
}

/// Gridline counts and color. Counts are non-negative by type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub x_count: u32,
    pub y_count: u32,
    pub color: Rgba,
}

/// Rendering parameters for a chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartConfig {
    width: u32,
    height: u32,
    background: Rgba,
    title: TitleConfig,
    haxis_title: TitleConfig,
    vaxis_title: TitleConfig,
    grid: GridConfig,
    sub_grid: GridConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: DEFAULT_BACKGROUND,
            title: TitleConfig::with_style(FontStyle::bold()),
            haxis_title: TitleConfig::with_style(FontStyle::italic()),
            vaxis_title: TitleConfig::with_style(FontStyle::italic()),
            grid: GridConfig { x_count: 5, y_count: 5, color: DEFAULT_GRID_COLOR },
            sub_grid: GridConfig { x_count: 0, y_count: 0, color: DEFAULT_SUB_GRID_COLOR },
        }
    }
}

impl ChartConfig {
    /// Defaults with the given canvas size; a zero dimension keeps the default size.
    pub fn new(width: u32, height: u32) -> Self {
        let mut c = Self::default();
        c.set_size(width, height);
        c
    }

    /// Resize the canvas. Zero dimensions are rejected.
    pub fn set_size(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            debug!(width, height, "rejecting empty canvas size");
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    pub fn size(&self) -> (u32, u32) { (self.width, self.height) }

    pub fn set_background_color(&mut self, color: impl Into<Rgba>) { self.background = color.into(); }
    pub fn background_color(&self) -> Rgba { self.background }

    pub fn set_title(&mut self, text: impl Into<String>) -> bool { self.title.set_text(text) }
    pub fn title(&self) -> &TitleConfig { &self.title }
    pub fn title_mut(&mut self) -> &mut TitleConfig { &mut self.title }

    pub fn set_haxis_title(&mut self, text: impl Into<String>) -> bool { self.haxis_title.set_text(text) }
    pub fn haxis_title(&self) -> &TitleConfig { &self.haxis_title }
    pub fn haxis_title_mut(&mut self) -> &mut TitleConfig { &mut self.haxis_title }

    pub fn set_vaxis_title(&mut self, text: impl Into<String>) -> bool { self.vaxis_title.set_text(text) }
    pub fn vaxis_title(&self) -> &TitleConfig { &self.vaxis_title }
    pub fn vaxis_title_mut(&mut self) -> &mut TitleConfig { &mut self.vaxis_title }

    pub fn set_grid_counts(&mut self, x_count: u32, y_count: u32) {
        self.grid.x_count = x_count;
        self.grid.y_count = y_count;
    }
    pub fn set_grid_color(&mut self, color: impl Into<Rgba>) { self.grid.color = color.into(); }
    pub fn grid(&self) -> GridConfig { self.grid }

    pub fn set_sub_grid_counts(&mut self, x_count: u32, y_count: u32) {
        self.sub_grid.x_count = x_count;
        self.sub_grid.y_count = y_count;
    }
    pub fn set_sub_grid_color(&mut self, color: impl Into<Rgba>) { self.sub_grid.color = color.into(); }
    pub fn sub_grid(&self) -> GridConfig { self.sub_grid }
}
