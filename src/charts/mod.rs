//! Charts module - chart descriptions and SVG rendering

mod plotter;
mod renderer;

pub use plotter::{ChartKind, ChartPlotter, ChartSeries, ChartSpec, TOP_TEAMS};
pub use renderer::{ChartError, StaticChartRenderer};
