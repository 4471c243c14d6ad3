//! Static Chart Renderer
//! Draws chart descriptions to inline SVG with plotters.
//!
//! Layout:
//! 1. Caption: chart title centered
//! 2. Plot area with axis titles and category labels along x
//! 3. Bars (one column per category) or lines with point markers and a legend

use crate::charts::{ChartKind, ChartSpec};
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

pub const CHART_WIDTH: u32 = 760;
pub const CHART_HEIGHT: u32 = 440;

const FONT: &str = "sans-serif";
const BAR_COLOR: RGBColor = RGBColor(52, 152, 219); // Blue

pub const PALETTE: [RGBColor; 10] = [
    RGBColor(231, 76, 60),  // Red
    RGBColor(46, 204, 113), // Green
    RGBColor(155, 89, 182), // Purple
    RGBColor(243, 156, 18), // Orange
    RGBColor(26, 188, 156), // Teal
    RGBColor(233, 30, 99),  // Pink
    RGBColor(0, 188, 212),  // Cyan
    RGBColor(255, 87, 34),  // Deep Orange
    RGBColor(121, 85, 72),  // Brown
    RGBColor(96, 125, 139), // Blue Grey
];

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to draw chart '{chart}': {message}")]
    Draw { chart: String, message: String },
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render a chart to an SVG document at the default size.
    pub fn render_svg(spec: &ChartSpec) -> Result<String, ChartError> {
        Self::render_svg_sized(spec, CHART_WIDTH, CHART_HEIGHT)
    }

    pub fn render_svg_sized(
        spec: &ChartSpec,
        width: u32,
        height: u32,
    ) -> Result<String, ChartError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            let drawn = match spec.kind {
                ChartKind::Bar => Self::draw_bars(&root, spec),
                ChartKind::Line => Self::draw_lines(&root, spec),
            };
            drawn
                .and_then(|_| root.present().map_err(|e| e.to_string()))
                .map_err(|message| ChartError::Draw {
                    chart: spec.id.clone(),
                    message,
                })?;
        }
        Ok(svg)
    }

    /// Color for the n-th series.
    pub fn series_color(index: usize) -> RGBColor {
        PALETTE[index % PALETTE.len()]
    }

    fn draw_bars(
        root: &DrawingArea<SVGBackend<'_>, Shift>,
        spec: &ChartSpec,
    ) -> Result<(), String> {
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let n = spec.categories.len().max(1);
        let y_max = Self::y_upper(spec);
        let labels = spec.categories.clone();

        let mut chart = ChartBuilder::on(root)
            .caption(&spec.title, (FONT, 20))
            .margin(12)
            .x_label_area_size(90)
            .y_label_area_size(60)
            .build_cartesian_2d((0..n).into_segmented(), 0u64..y_max)
            .map_err(|e| e.to_string())?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(spec.x_title.as_str())
            .y_desc(spec.y_title.as_str())
            .x_labels(n)
            .x_label_style((FONT, 11).into_font().transform(FontTransform::Rotate90))
            .x_label_formatter(&|v| Self::category_label(&labels, v))
            .draw()
            .map_err(|e| e.to_string())?;

        if let Some(series) = spec.series.first() {
            chart
                .draw_series(
                    Histogram::vertical(&chart)
                        .style(BAR_COLOR.filled())
                        .margin(6)
                        .data(series.values.iter().enumerate().map(|(i, v)| (i, *v))),
                )
                .map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    fn draw_lines(
        root: &DrawingArea<SVGBackend<'_>, Shift>,
        spec: &ChartSpec,
    ) -> Result<(), String> {
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let n = spec.categories.len().max(1);
        let y_max = Self::y_upper(spec);
        let labels = spec.categories.clone();

        let mut chart = ChartBuilder::on(root)
            .caption(&spec.title, (FONT, 20))
            .margin(12)
            .x_label_area_size(50)
            .y_label_area_size(50)
            .build_cartesian_2d((0..n).into_segmented(), 0u64..y_max)
            .map_err(|e| e.to_string())?;

        chart
            .configure_mesh()
            .x_desc(spec.x_title.as_str())
            .y_desc(spec.y_title.as_str())
            .x_labels(n)
            .x_label_formatter(&|v| Self::category_label(&labels, v))
            .draw()
            .map_err(|e| e.to_string())?;

        for (idx, series) in spec.series.iter().enumerate() {
            let color = Self::series_color(idx);
            let points: Vec<(SegmentValue<usize>, u64)> = series
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| (SegmentValue::CenterOf(i), *v))
                .collect();

            chart
                .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
                .map_err(|e| e.to_string())?
                .label(series.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

            chart
                .draw_series(
                    points
                        .into_iter()
                        .map(|p| Circle::new(p, 3, color.filled())),
                )
                .map_err(|e| e.to_string())?;
        }

        if !spec.series.is_empty() {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .position(SeriesLabelPosition::UpperRight)
                .draw()
                .map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    /// Upper bound of the y axis with some headroom above the tallest value.
    fn y_upper(spec: &ChartSpec) -> u64 {
        let max = spec.max_value();
        (max + max / 10).max(1) + 1
    }

    fn category_label(labels: &[String], value: &SegmentValue<usize>) -> String {
        match value {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartSeries;

    fn bar_spec(categories: &[&str], values: &[u64]) -> ChartSpec {
        ChartSpec {
            id: "runs_graph".to_string(),
            title: "Top Run Scorers".to_string(),
            x_title: "Player".to_string(),
            y_title: "Runs".to_string(),
            kind: ChartKind::Bar,
            categories: categories.iter().map(|s| s.to_string()).collect(),
            series: vec![ChartSeries {
                name: "runs".to_string(),
                values: values.to_vec(),
            }],
        }
    }

    #[test]
    fn y_axis_has_headroom() {
        assert_eq!(StaticChartRenderer::y_upper(&bar_spec(&[], &[])), 2);
        assert_eq!(StaticChartRenderer::y_upper(&bar_spec(&["A"], &[100])), 111);
    }

    #[test]
    fn category_labels_only_at_centers() {
        let labels = vec!["A".to_string(), "B".to_string()];
        assert_eq!(
            StaticChartRenderer::category_label(&labels, &SegmentValue::CenterOf(1)),
            "B"
        );
        assert_eq!(
            StaticChartRenderer::category_label(&labels, &SegmentValue::Exact(0)),
            ""
        );
        assert_eq!(
            StaticChartRenderer::category_label(&labels, &SegmentValue::CenterOf(5)),
            ""
        );
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(
            StaticChartRenderer::series_color(PALETTE.len() + 2),
            PALETTE[2]
        );
    }

    #[test]
    fn rendering_yields_svg_or_a_named_error() {
        // Text layout depends on system fonts, so either outcome is acceptable
        // as long as a failure names the chart.
        match StaticChartRenderer::render_svg(&bar_spec(&["A", "B"], &[10, 4])) {
            Ok(svg) => assert!(svg.contains("<svg")),
            Err(ChartError::Draw { chart, .. }) => assert_eq!(chart, "runs_graph"),
        }
    }
}
