//! Category View Widget
//! Radio-group key selection, bar chart, and click-to-drill-down table.

use crate::charts::ChartPlotter;
use crate::data::{category_series, drill_down, CategoryCount, CsvTable};
use egui::{RichText, ScrollArea};

/// Category counting view. Exactly one composite key is active at a time;
/// switching keys recomputes the series and closes any open drill-down.
#[derive(Default)]
pub struct CategoryView {
    selected: Option<usize>,
    series: Vec<CategoryCount>,
    drill_rows: Vec<Vec<String>>,
}

impl CategoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all selection state, e.g. after a new file load.
    pub fn reset(&mut self) {
        self.selected = None;
        self.series.clear();
        self.drill_rows.clear();
    }

    /// Make the key at `col` the active grouping column.
    fn select(&mut self, table: &CsvTable, col: usize) {
        self.selected = Some(col);
        self.series = category_series(table, col);
        self.drill_rows.clear();
    }

    /// Open the drill-down for the clicked series entry.
    fn open_drill(&mut self, table: &CsvTable, idx: usize) {
        let Some(col) = self.selected else {
            return;
        };
        let Some(entry) = self.series.get(idx) else {
            return;
        };
        self.drill_rows = drill_down(table, col, &entry.name)
            .into_iter()
            .map(|row| row.to_vec())
            .collect();
    }

    /// Draw the key list, the bar chart, and the drill-down table.
    pub fn show(&mut self, ui: &mut egui::Ui, table: &CsvTable) {
        ui.label(RichText::new("Group by").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt("key_list")
                    .max_height(140.0)
                    .show(ui, |ui| {
                        for (i, key) in table.keys().iter().enumerate() {
                            if ui.radio(self.selected == Some(i), key).clicked()
                                && self.selected != Some(i)
                            {
                                self.select(table, i);
                            }
                        }
                    });
            });

        ui.add_space(10.0);

        if self.selected.is_none() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Select a key to chart category counts").size(16.0));
            });
            return;
        }

        if self.series.is_empty() {
            ui.label(RichText::new("No data rows to count").size(14.0));
            return;
        }

        if let Some(idx) = ChartPlotter::draw_bar_chart(ui, "categories", &self.series) {
            self.open_drill(table, idx);
        }

        if !self.drill_rows.is_empty() {
            ui.add_space(10.0);
            ui.label(
                RichText::new(format!("{} matching rows", self.drill_rows.len()))
                    .size(13.0)
                    .strong(),
            );
            ui.add_space(5.0);
            Self::draw_drill_table(ui, table.keys(), &self.drill_rows);
        }
    }

    /// Draw the drill-down rows as a striped grid headed by the keys.
    fn draw_drill_table(ui: &mut egui::Ui, keys: &[String], rows: &[Vec<String>]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ScrollArea::both()
                    .id_salt("drill_rows")
                    .max_height(260.0)
                    .show(ui, |ui| {
                        egui::Grid::new("drill_table")
                            .striped(true)
                            .min_col_width(55.0)
                            .spacing([8.0, 4.0])
                            .show(ui, |ui| {
                                for key in keys {
                                    ui.label(RichText::new(key).strong().size(11.0));
                                }
                                ui.end_row();

                                for row in rows {
                                    for field in row {
                                        ui.label(RichText::new(field).size(11.0));
                                    }
                                    ui.end_row();
                                }
                            });
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CsvTable {
        CsvTable::parse("A,B\n1,2\nx,y\nx,z\nw,z\n").unwrap()
    }

    #[test]
    fn selecting_a_key_recomputes_and_clears_drill_down() {
        let table = sample();
        let mut view = CategoryView::new();
        view.select(&table, 1);
        view.open_drill(&table, 1);
        assert!(!view.drill_rows.is_empty());

        view.select(&table, 0);
        assert!(view.drill_rows.is_empty());
        assert_eq!(view.series.len(), 2);
    }

    #[test]
    fn drill_opens_the_clicked_series_entry() {
        let table = sample();
        let mut view = CategoryView::new();
        view.select(&table, 1);
        // Series for column B-2: y (1), z (2).
        assert_eq!(view.series[0].name, "y");
        assert_eq!(view.series[1].name, "z");

        view.open_drill(&table, 1);
        assert_eq!(view.drill_rows.len(), 2);
        assert!(view.drill_rows.iter().all(|row| row[1] == "z"));
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let table = sample();
        let mut view = CategoryView::new();
        view.select(&table, 0);
        view.open_drill(&table, 0);
        view.reset();
        assert!(view.selected.is_none());
        assert!(view.series.is_empty());
        assert!(view.drill_rows.is_empty());
    }
}
