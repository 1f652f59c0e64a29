//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use crate::data::{CategoryCount, TrendData};
use egui::Color32;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

/// Creates category and trend charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get the palette color for a series index.
    pub fn series_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Draw the category bar chart, one bar per series entry in rendered
    /// order. Returns the index of the clicked series entry, if any.
    pub fn draw_bar_chart(
        ui: &mut egui::Ui,
        plot_id: &str,
        series: &[CategoryCount],
    ) -> Option<usize> {
        let bars: Vec<Bar> = series
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Bar::new(i as f64, entry.value as f64)
                    .width(0.6)
                    .fill(Self::series_color(i))
                    .name(&entry.name)
            })
            .collect();

        let x_labels: Vec<String> = series.iter().map(|entry| entry.name.clone()).collect();

        let response = Plot::new(format!("bars_{}", plot_id))
            .height(360.0)
            .allow_scroll(false)
            .x_axis_label("Category")
            .y_axis_label("Count")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("count"));
                plot_ui.pointer_coordinate()
            });

        // Resolve the click against the rendered series position, never an
        // index into the unsorted counts.
        if response.response.clicked() {
            if let Some(pos) = response.inner {
                let nearest = pos.x.round();
                if nearest >= 0.0 && (pos.x - nearest).abs() <= 0.3 {
                    let idx = nearest as usize;
                    if idx < series.len() && pos.y >= 0.0 {
                        return Some(idx);
                    }
                }
            }
        }
        None
    }

    /// Draw the trend line chart, one line per visible metric, plotted
    /// against record order.
    pub fn draw_trend_chart(ui: &mut egui::Ui, trend: &TrendData, visible: &[bool]) {
        let x_labels = trend.x_labels.clone();

        Plot::new("trend_lines")
            .height(420.0)
            .allow_scroll(false)
            .x_axis_label("Record")
            .y_axis_label("Value")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 {
                    x_labels.get(idx).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (i, metric) in trend.metrics.iter().enumerate() {
                    if !visible.get(i).copied().unwrap_or(true) {
                        continue;
                    }
                    let points: PlotPoints = metric
                        .values
                        .iter()
                        .enumerate()
                        .map(|(x, &y)| [x as f64, y])
                        .collect();
                    plot_ui.line(
                        Line::new(points)
                            .color(Self::series_color(i))
                            .width(2.0)
                            .name(&metric.name),
                    );
                }
            });
    }
}
