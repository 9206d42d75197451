// File: crates/bizchart-render-skia/src/lib.rs
// Summary: Skia drawing surface for bizchart charts and CPU raster PNG output.

pub mod text;

use anyhow::Result;
use bizchart_core::{Chart, DrawingSurface, FontStyle, Point, Rect, Rgba, TextMeasure};
use skia_safe as skia;
use tracing::debug;

pub use text::TextShaper;

fn color(c: Rgba) -> skia::Color { skia::Color::new(c.0) }

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

fn path_of(points: &[Point]) -> Option<skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut path = skia::Path::new();
    path.move_to((first.x as f32, first.y as f32));
    for p in rest {
        path.line_to((p.x as f32, p.y as f32));
    }
    Some(path)
}

/// [`DrawingSurface`] over a Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self { Self { canvas, shaper } }
}

impl TextMeasure for SkiaSurface<'_> {
    fn measure(&self, text: &str, font: &FontStyle) -> (f64, f64) {
        let (w, h) = self.shaper.measure(text, font);
        (w as f64, h as f64)
    }
}

impl DrawingSurface for SkiaSurface<'_> {
    fn clear(&mut self, c: Rgba) { self.canvas.clear(color(c)); }

    fn stroke_polyline(&mut self, points: &[Point], c: Rgba, width: f64) {
        let Some(path) = path_of(points) else { return };
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(width as f32);
        stroke.set_color(color(c));
        self.canvas.draw_path(&path, &stroke);
    }

    fn fill_polygon(&mut self, points: &[Point], c: Rgba) {
        let Some(mut path) = path_of(points) else { return };
        path.close();
        self.canvas.draw_path(&path, &fill_paint(c));
    }

    fn fill_rect(&mut self, rect: Rect, c: Rgba) {
        let r = skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32);
        self.canvas.draw_rect(r, &fill_paint(c));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, c: Rgba) {
        self.canvas.draw_circle((center.x as f32, center.y as f32), radius as f32, &fill_paint(c));
    }

    fn draw_text(&mut self, text: &str, top_left: Point, font: &FontStyle) {
        self.shaper.draw(self.canvas, text, top_left.x as f32, top_left.y as f32, font);
    }
}

/// Render `chart` on a CPU raster surface and encode it as PNG.
pub fn render_to_png_bytes(chart: &mut Chart) -> Result<Vec<u8>> {
    let (w, h) = chart.config().size();
    let width = i32::try_from(w)?;
    let height = i32::try_from(h)?;
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;

    let shaper = TextShaper::new();
    {
        let mut target = SkiaSurface::new(surface.canvas(), &shaper);
        chart.render(&mut target);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    debug!(width, height, bytes = data.as_bytes().len(), "encoded chart PNG");
    Ok(data.as_bytes().to_vec())
}

/// Render `chart` to a PNG file at `output_png_path`, creating parent directories.
pub fn render_to_png(chart: &mut Chart, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_to_png_bytes(chart)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
