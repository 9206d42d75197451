// File: crates/bizchart-core/src/lib.rs
// Summary: Core library entry point; exports the data model, layouts, hit testing and draw commands.

pub mod color;
pub mod series;
pub mod dataset;
pub mod config;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod grid;
pub mod text;
pub mod draw;
pub mod surface;
pub mod layout;
pub mod line;
pub mod bar;
pub mod hit;
pub mod chart;
pub mod error;

pub use chart::Chart;
pub use color::{Rgba, SeriesColors, PALETTE};
pub use config::{ChartConfig, GridConfig, TitleConfig};
pub use dataset::Dataset;
pub use draw::{DrawCommand, Geometry, Stroke};
pub use error::ChartError;
pub use geometry::{Point, Rect};
pub use hit::{Hit, HitTester, HoverTracker, MarkerChange};
pub use layout::{ChartKind, ChartLayout};
pub use line::LineLayout;
pub use bar::BarLayout;
pub use scale::{nice_upper_bound, tick_value, to_device, AxisScaler};
pub use series::Series;
pub use surface::{DrawingSurface, TextMeasure};
pub use text::FontStyle;
pub use types::Offsets;
