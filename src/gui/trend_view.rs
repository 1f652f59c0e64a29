//! Trend View Widget
//! Line chart with a clickable legend that toggles per-metric visibility.

use crate::charts::ChartPlotter;
use crate::data::TrendData;
use egui::{Color32, RichText};

/// Trend line view. Holds one visibility flag per metric; legend clicks
/// flip the flag without touching the underlying records.
#[derive(Default)]
pub struct TrendView {
    visible: Vec<bool>,
}

impl TrendView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to one visible flag per metric, e.g. after a new file load.
    pub fn reset(&mut self, metric_count: usize) {
        self.visible = vec![true; metric_count];
    }

    pub fn toggle(&mut self, idx: usize) {
        if let Some(flag) = self.visible.get_mut(idx) {
            *flag = !*flag;
        }
    }

    pub fn is_visible(&self, idx: usize) -> bool {
        self.visible.get(idx).copied().unwrap_or(true)
    }

    /// Draw the legend row and the line chart.
    pub fn show(&mut self, ui: &mut egui::Ui, trend: &TrendData) {
        if trend.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No numeric columns to plot").size(16.0));
            });
            return;
        }

        ui.label(
            RichText::new(format!(
                "{} metrics over {} records",
                trend.metrics.len(),
                trend.record_count()
            ))
            .size(12.0)
            .color(Color32::GRAY),
        );
        ui.add_space(5.0);

        ui.horizontal_wrapped(|ui| {
            for (i, metric) in trend.metrics.iter().enumerate() {
                let color = if self.is_visible(i) {
                    ChartPlotter::series_color(i)
                } else {
                    Color32::DARK_GRAY
                };

                let (rect, swatch) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::click());
                ui.painter().rect_filled(rect, 3.0, color);

                let text = if self.is_visible(i) {
                    RichText::new(&metric.name).size(13.0)
                } else {
                    RichText::new(&metric.name).size(13.0).color(Color32::GRAY)
                };
                let label = ui.add(egui::Label::new(text).sense(egui::Sense::click()));

                if swatch.clicked() || label.clicked() {
                    self.toggle(i);
                }
                ui.add_space(12.0);
            }
        });

        ui.add_space(8.0);
        ChartPlotter::draw_trend_chart(ui, trend, &self.visible);
    }
}
