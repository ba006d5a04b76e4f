use crate::domain::{
    chart::{ChartSeries, Dataset},
    logging::LogComponent,
};
use crate::log_debug;
use gloo::utils::document;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Plot geometry shared by the layout helpers and the renderer
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotArea {
    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    pub fn inner_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }
}

/// Min/max over every plottable point of every dataset. `None` when nothing
/// is plottable. A flat series is widened by one unit so it does not divide
/// the plot height by zero.
pub fn value_bounds(datasets: &[Dataset]) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for dataset in datasets {
        for value in dataset.data.iter().flatten() {
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(*value), max.max(*value)),
                None => (*value, *value),
            });
        }
    }
    bounds.map(|(min, max)| if min == max { (min - 0.5, max + 0.5) } else { (min, max) })
}

/// Evenly spaced x positions for `count` points across the inner plot width.
/// A single point sits at the left edge of the inner area.
pub fn x_positions(count: usize, area: &PlotArea) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![area.padding];
    }
    let step = area.inner_width() / (count - 1) as f64;
    (0..count).map(|i| area.padding + step * i as f64).collect()
}

/// Canvas y coordinate for one value; larger values sit higher on screen.
pub fn y_position(value: f64, min: f64, max: f64, area: &PlotArea) -> f64 {
    let normalized = (value - min) / (max - min);
    area.padding + (1.0 - normalized) * area.inner_height()
}

/// Canvas 2D renderer drawing a ChartSeries as Chart.js-style line charts
pub struct LineChartRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl LineChartRenderer {
    const PADDING: f64 = 40.0;
    const BACKGROUND: &'static str = "#1f2937";
    const AXIS_COLOR: &'static str = "#4a5d73";
    const TEXT_COLOR: &'static str = "#e0e0e0";

    pub fn new(canvas_id: &str, width: u32, height: u32) -> Self {
        Self { canvas_id: canvas_id.to_string(), width, height }
    }

    fn area(&self) -> PlotArea {
        PlotArea { width: self.width as f64, height: self.height as f64, padding: Self::PADDING }
    }

    fn get_canvas_context(&self) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
        let canvas = document()
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("failed to get 2D context"))?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("failed to cast to 2D context"))?;

        Ok((canvas, context))
    }

    /// Render the series. An empty series draws the "no data" message; that
    /// is the valid degenerate state, not an error.
    pub fn render(&self, series: &ChartSeries) -> Result<(), JsValue> {
        let (_canvas, context) = self.get_canvas_context()?;

        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from(Self::BACKGROUND));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        if series.is_empty() {
            self.render_no_data_message(&context)?;
            return Ok(());
        }

        log_debug!(
            LogComponent::Infrastructure("LineChart"),
            "Rendering {} points x {} datasets on #{}",
            series.point_count(),
            series.datasets.len(),
            self.canvas_id
        );

        let area = self.area();
        let Some((min, max)) = value_bounds(&series.datasets) else {
            // labels exist but every point is a gap sentinel
            self.render_no_data_message(&context)?;
            return Ok(());
        };
        let xs = x_positions(series.point_count(), &area);

        self.render_axes(&context, &area)?;
        for dataset in &series.datasets {
            self.render_dataset(&context, dataset, &xs, min, max, &area);
        }
        self.render_labels(&context, series, &xs, &area);
        self.render_value_scale(&context, min, max, &area);
        self.render_legend(&context, series);

        Ok(())
    }

    fn render_dataset(
        &self,
        context: &CanvasRenderingContext2d,
        dataset: &Dataset,
        xs: &[f64],
        min: f64,
        max: f64,
        area: &PlotArea,
    ) {
        context.set_stroke_style(&JsValue::from(dataset.style.border_color.as_str()));
        context.set_line_width(2.0);
        context.begin_path();

        // A None point breaks the polyline instead of collapsing the slot.
        let mut pen_down = false;
        for (x, value) in xs.iter().zip(dataset.data.iter()) {
            match value {
                Some(v) => {
                    let y = y_position(*v, min, max, area);
                    if pen_down {
                        context.line_to(*x, y);
                    } else {
                        context.move_to(*x, y);
                        pen_down = true;
                    }
                }
                None => pen_down = false,
            }
        }
        context.stroke();
    }

    fn render_axes(
        &self,
        context: &CanvasRenderingContext2d,
        area: &PlotArea,
    ) -> Result<(), JsValue> {
        context.set_stroke_style(&JsValue::from(Self::AXIS_COLOR));
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(area.padding, area.padding);
        context.line_to(area.padding, area.height - area.padding);
        context.line_to(area.width - area.padding, area.height - area.padding);
        context.stroke();
        Ok(())
    }

    fn render_labels(
        &self,
        context: &CanvasRenderingContext2d,
        series: &ChartSeries,
        xs: &[f64],
        area: &PlotArea,
    ) {
        context.set_fill_style(&JsValue::from(Self::TEXT_COLOR));
        context.set_font("11px monospace");
        context.set_text_align("center");
        for (x, label) in xs.iter().zip(series.labels.iter()) {
            let _ = context.fill_text(label.value(), *x, area.height - area.padding + 16.0);
        }
    }

    fn render_value_scale(
        &self,
        context: &CanvasRenderingContext2d,
        min: f64,
        max: f64,
        area: &PlotArea,
    ) {
        context.set_fill_style(&JsValue::from(Self::TEXT_COLOR));
        context.set_font("11px monospace");
        context.set_text_align("right");
        for step in 0..=4 {
            let value = min + (max - min) * step as f64 / 4.0;
            let y = y_position(value, min, max, area);
            let _ = context.fill_text(&format!("{value:.1}"), area.padding - 6.0, y + 4.0);
        }
    }

    fn render_legend(&self, context: &CanvasRenderingContext2d, series: &ChartSeries) {
        context.set_font("12px sans-serif");
        context.set_text_align("left");
        let mut x = Self::PADDING;
        for dataset in &series.datasets {
            context.set_fill_style(&JsValue::from(dataset.style.border_color.as_str()));
            context.fill_rect(x, 10.0, 10.0, 10.0);
            context.set_fill_style(&JsValue::from(Self::TEXT_COLOR));
            let _ = context.fill_text(&dataset.label, x + 14.0, 19.0);
            x += 14.0 + 8.0 * dataset.label.len() as f64 + 20.0;
        }
    }

    fn render_no_data_message(&self, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from(Self::TEXT_COLOR));
        context.set_font("16px sans-serif");
        context.set_text_align("center");
        context.fill_text("No data", self.width as f64 / 2.0, self.height as f64 / 2.0)?;
        Ok(())
    }
}
