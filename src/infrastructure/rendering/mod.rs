pub mod line_chart_renderer;

pub use line_chart_renderer::{LineChartRenderer, PlotArea, value_bounds, x_positions, y_position};
