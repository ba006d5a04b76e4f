use crate::domain::market_data::DateKey;
use serde::{Deserialize, Serialize};

/// Value Object - style hints for one dataset, matching the knobs the
/// original Chart.js widget exposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub border_color: String,
    pub fill: bool,
    pub tension: f64,
}

impl LineStyle {
    pub fn new(border_color: &str) -> Self {
        Self { border_color: border_color.to_string(), fill: false, tension: 0.1 }
    }

    /// Closing-price line
    pub fn close_price() -> Self {
        Self::new("rgb(75, 192, 192)")
    }

    /// Sentiment polarity line
    pub fn sentiment() -> Self {
        Self::new("rgb(255, 99, 132)")
    }

    /// Percent price change line
    pub fn percent_change() -> Self {
        Self::new("rgb(54, 162, 235)")
    }
}

/// Value Object - one labeled data series over the shared label axis
///
/// `None` marks a non-plottable point (e.g. a bar whose percent change could
/// not be derived); renderers break the line there instead of dropping the
/// slot, so index alignment with the label axis survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub style: LineStyle,
}

impl Dataset {
    pub fn new(label: String, data: Vec<Option<f64>>, style: LineStyle) -> Self {
        Self { label, data, style }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Value Object - a chart-ready series: ordered date labels plus one or more
/// datasets sharing that axis, chronologically ascending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<DateKey>,
    pub datasets: Vec<Dataset>,
}

impl ChartSeries {
    pub fn new(labels: Vec<DateKey>, datasets: Vec<Dataset>) -> Self {
        Self { labels, datasets }
    }

    /// The valid "no data" state: nothing to chart, not an error.
    pub fn empty() -> Self {
        Self { labels: Vec::new(), datasets: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.labels.len()
    }
}
