//! Categraph Main Application
//! Main window with control panel and chart views.

use crate::data::{CsvTable, TrendData};
use crate::gui::{CategoryView, TrendView};
use anyhow::Context as _;
use egui::{Color32, RichText, SidePanel};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Complete {
        table: CsvTable,
        trend: TrendData,
        file_stem: String,
    },
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewTab {
    Categories,
    Trends,
}

/// Main application window.
pub struct CategraphApp {
    table: Option<CsvTable>,
    trend: TrendData,
    file_stem: String,
    csv_path: Option<PathBuf>,
    status: String,
    tab: ViewTab,
    category_view: CategoryView,
    trend_view: TrendView,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

/// Read and parse a CSV file off the UI thread.
fn load_table(path: &Path) -> anyhow::Result<(CsvTable, TrendData)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let table = CsvTable::parse(&text).context("Failed to parse CSV")?;
    let trend = TrendData::from_table(&table);
    Ok((table, trend))
}

impl CategraphApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            table: None,
            trend: TrendData::default(),
            file_stem: String::new(),
            csv_path: None,
            status: "Ready".to_string(),
            tab: ViewTab::Categories,
            category_view: CategoryView::new(),
            trend_view: TrendView::new(),
            load_rx: None,
            is_loading: false,
        }
    }

    /// Handle CSV file selection; the read and parse run on a background
    /// thread. A pick while a previous read is pending is ignored.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.csv_path = Some(path.clone());
            self.status = "Loading CSV file...".to_string();
            self.is_loading = true;

            let (tx, rx) = channel();
            self.load_rx = Some(rx);

            thread::spawn(move || {
                let file_stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default();

                let result = match load_table(&path) {
                    Ok((table, trend)) => LoadResult::Complete {
                        table,
                        trend,
                        file_stem,
                    },
                    Err(e) => LoadResult::Error(format!("{:#}", e)),
                };
                let _ = tx.send(result);
            });
        }
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete {
                        table,
                        trend,
                        file_stem,
                    } => {
                        self.status = format!(
                            "Loaded {} rows, {} columns",
                            table.row_count(),
                            table.column_count()
                        );
                        self.category_view.reset();
                        self.trend_view.reset(trend.metrics.len());
                        self.file_stem = file_stem;
                        self.trend = trend;
                        self.table = Some(table);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        self.status = format!("Error: {}", error);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Draw the left control panel.
    fn draw_control_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Categraph")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("CSV Category & Trend Viewer")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.csv_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            self.handle_browse_csv();
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        ui.label(RichText::new("📈 View").size(14.0).strong());
        ui.add_space(5.0);
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.tab, ViewTab::Categories, "Categories");
            ui.radio_value(&mut self.tab, ViewTab::Trends, "Trends");
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));
    }
}

impl eframe::App for CategraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.draw_control_panel(ui);
                });
            });

        // Central panel - active view
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(table) = &self.table else {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
                return;
            };

            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&self.file_stem).size(18.0).strong());
            });
            ui.add_space(8.0);

            match self.tab {
                ViewTab::Categories => self.category_view.show(ui, table),
                ViewTab::Trends => self.trend_view.show(ui, &self.trend),
            }
        });
    }
}
