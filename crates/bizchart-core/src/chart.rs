// File: crates/bizchart-core/src/chart.rs
// Summary: Chart = config + attached dataset + chart kind, with lazy relayout, rendering and hover.

use tracing::debug;

use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::draw::Geometry;
use crate::geometry::{Point, Rect};
use crate::hit::{Hit, HitTester, HoverTracker, MarkerChange};
use crate::layout::{ChartKind, ChartLayout};
use crate::surface::{draw_command, replay, DrawingSurface, TextMeasure};
use crate::types::Offsets;

/// A renderable chart.
///
/// Changing the dataset, the kind or the configuration through this type sets
/// the "needs layout" flag; geometry is recomputed on the next
/// [`Chart::layout`] or [`Chart::render`] and reused otherwise.
pub struct Chart {
    config: ChartConfig,
    dataset: Option<Dataset>,
    kind: ChartKind,
    needs_layout: bool,
    offsets: Offsets,
    geometry: Geometry,
    hit_tester: HitTester,
    hover: HoverTracker,
}

impl Chart {
    pub fn new(kind: ChartKind, config: ChartConfig) -> Self {
        Self {
            config,
            dataset: None,
            kind,
            needs_layout: true,
            offsets: Offsets::default(),
            geometry: Geometry::new(),
            hit_tester: HitTester::new(),
            hover: HoverTracker::new(),
        }
    }

    pub fn line(config: ChartConfig) -> Self { Self::new(ChartKind::line(), config) }
    pub fn bar(config: ChartConfig) -> Self { Self::new(ChartKind::bar(), config) }

    /// Attach `dataset`, returning the one it replaces.
    pub fn set_dataset(&mut self, dataset: Dataset) -> Option<Dataset> {
        self.invalidate();
        self.dataset.replace(dataset)
    }

    pub fn take_dataset(&mut self) -> Option<Dataset> {
        self.invalidate();
        self.dataset.take()
    }

    pub fn dataset(&self) -> Option<&Dataset> { self.dataset.as_ref() }

    pub fn dataset_mut(&mut self) -> Option<&mut Dataset> {
        self.invalidate();
        self.dataset.as_mut()
    }

    pub fn config(&self) -> &ChartConfig { &self.config }

    pub fn config_mut(&mut self) -> &mut ChartConfig {
        self.invalidate();
        &mut self.config
    }

    pub fn kind(&self) -> &ChartKind { &self.kind }

    pub fn kind_mut(&mut self) -> &mut ChartKind {
        self.invalidate();
        &mut self.kind
    }

    pub fn needs_layout(&self) -> bool { self.needs_layout }

    /// Offsets used by the last layout pass.
    pub fn offsets(&self) -> Offsets { self.offsets }

    /// Plot rectangle of the last layout pass, in canvas coordinates.
    pub fn plot_rect(&self) -> Rect {
        let (w, h) = self.config.size();
        self.offsets.plot_rect(w, h)
    }

    fn invalidate(&mut self) {
        self.needs_layout = true;
        self.hover.reset();
    }

    /// Geometry for the current inputs, recomputed only when flagged.
    pub fn layout<M: TextMeasure + ?Sized>(&mut self, measure: &M) -> &Geometry {
        if self.needs_layout {
            let title = self.config.title();
            let title_height = title.text().map_or(0.0, |t| measure.measure(t, &title.style).1);
            self.offsets = Offsets::for_title(title_height);
            let plot = self.plot_rect();
            self.geometry = match &self.dataset {
                Some(d) => self.kind.compute(d, &self.config, plot),
                None => Geometry::new(),
            };
            debug!(kind = self.kind.name(), commands = self.geometry.len(), "chart layout");
            self.needs_layout = false;
        }
        &self.geometry
    }

    /// Paint background, title, geometry and the hover marker onto `surface`.
    pub fn render<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) {
        self.layout(&*surface);

        surface.clear(self.config.background_color());
        let title = self.config.title();
        if let Some(text) = title.text() {
            let (tw, _) = surface.measure(text, &title.style);
            let (w, _) = self.config.size();
            surface.draw_text(text, Point::new((w as f64 - tw) / 2.0, 0.0), &title.style);
        }

        let origin = Point::new(self.offsets.left, self.offsets.top);
        replay(&self.geometry, origin, surface);
        if let Some(hit) = self.hover.current() {
            draw_command(&hit.marker(), origin, surface);
        }
    }

    /// Track the cursor (canvas coordinates) over a line chart.
    ///
    /// Uses the offsets of the previous layout pass. Bar charts never
    /// highlight a point.
    pub fn hover(&mut self, cursor: Point) -> MarkerChange {
        let hit = match (&self.kind, &self.dataset) {
            (ChartKind::Line(_), Some(d)) => self.hit_tester.find(d, &self.config, self.offsets, cursor),
            _ => None,
        };
        self.hover.update(hit)
    }

    /// The point currently highlighted, if any.
    pub fn hovered(&self) -> Option<&Hit> { self.hover.current() }
}
