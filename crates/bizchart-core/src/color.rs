// File: crates/bizchart-core/src/color.rs
// Summary: Packed ARGB colors and the fixed series palette.

/// 32-bit color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const BLACK: Rgba = Rgba(0xff00_0000);
    pub const WHITE: Rgba = Rgba(0xffff_ffff);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn a(self) -> u8 { (self.0 >> 24) as u8 }
    #[inline]
    pub const fn r(self) -> u8 { (self.0 >> 16) as u8 }
    #[inline]
    pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }
    #[inline]
    pub const fn b(self) -> u8 { self.0 as u8 }

    /// Scale by `opacity` into a premultiplied color.
    ///
    /// `alpha = trunc(255 * opacity)` and each RGB channel becomes
    /// `(channel * alpha) >> 8`. The source alpha is discarded.
    pub fn premultiplied(self, opacity: f64) -> Self {
        let alpha = (255.0 * opacity.clamp(0.0, 1.0)) as u32;
        let scale = |c: u8| ((c as u32 * alpha) >> 8) as u8;
        Self::from_argb(alpha as u8, scale(self.r()), scale(self.g()), scale(self.b()))
    }
}

impl Default for Rgba {
    fn default() -> Self { Rgba::BLACK }
}

impl From<u32> for Rgba {
    fn from(argb: u32) -> Self { Rgba(argb) }
}

/// Stroke color and area fill color of one series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesColors {
    pub line: Rgba,
    pub area: Rgba,
}

impl SeriesColors {
    pub const fn new(line: u32, area: u32) -> Self {
        Self { line: Rgba(line), area: Rgba(area) }
    }
}

impl Default for SeriesColors {
    fn default() -> Self { Self { line: Rgba::BLACK, area: Rgba::BLACK } }
}

/// Line/area pairs handed out to series in append order, cycling every 20.
pub static PALETTE: [SeriesColors; 20] = [
    SeriesColors::new(0xff3366cc, 0xffc2d1f0),
    SeriesColors::new(0xffdc3912, 0xfff5c4b8),
    SeriesColors::new(0xffff9900, 0xffffe0b3),
    SeriesColors::new(0xff109618, 0xffb7dfba),
    SeriesColors::new(0xff990099, 0xffe0b3e0),
    SeriesColors::new(0xff3b3eac, 0xffb3e0ee),
    SeriesColors::new(0xff0099c6, 0xfff5c7d6),
    SeriesColors::new(0xffdd4477, 0xffd1e6b3),
    SeriesColors::new(0xff66aa00, 0xffeac0c0),
    SeriesColors::new(0xffb82e2e, 0xffc1d0df),
    SeriesColors::new(0xff316395, 0xffe0c7e0),
    SeriesColors::new(0xff994499, 0xffbde6e0),
    SeriesColors::new(0xff22aa99, 0xffe6e6b8),
    SeriesColors::new(0xffaaaa11, 0xffd1c2f0),
    SeriesColors::new(0xff6633cc, 0xfff7d5b3),
    SeriesColors::new(0xffe67300, 0xffdcb5b5),
    SeriesColors::new(0xff8b0707, 0xffd1b7d1),
    SeriesColors::new(0xff329262, 0xffc2ded0),
    SeriesColors::new(0xff5574a6, 0xffccd5e4),
    SeriesColors::new(0xff3b3eac, 0xffc4c5e6),
];

/// Palette entry for the series at insertion position `index`.
#[inline]
pub fn palette_entry(index: usize) -> SeriesColors {
    PALETTE[index % PALETTE.len()]
}
