use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::ResaleDataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – town and flat-type filters
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let towns = match &state.dataset {
        Some(ds) => ds.towns.clone(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Town selector ----
            ui.strong("Town");
            let current_town = state.town.clone();
            egui::ComboBox::from_id_salt("town")
                .selected_text(&current_town)
                .show_ui(ui, |ui: &mut Ui| {
                    for town in &towns {
                        if ui.selectable_label(current_town == *town, town).clicked() {
                            state.set_town(town);
                        }
                    }
                });
            ui.separator();

            // ---- Flat-type visibility toggles, tinted with series colors ----
            ui.strong("Flat types");
            let series: Vec<(String, Color32)> = state
                .chart
                .as_ref()
                .map(|chart| {
                    chart
                        .series
                        .iter()
                        .map(|s| (s.flat_type.clone(), s.color))
                        .collect()
                })
                .unwrap_or_default();

            if series.is_empty() {
                ui.label("No transactions for this town.");
            } else {
                for (flat_type, color) in &series {
                    let mut checked = state.is_visible(flat_type);
                    let text = RichText::new(flat_type).color(*color);
                    if ui.checkbox(&mut checked, text).changed() {
                        state.toggle_flat_type(flat_type);
                    }
                }
            }

            // ---- Data-quality notes for the selected town ----
            if state.summary.missing_month > 0 || state.summary.missing_price > 0 {
                ui.separator();
                if state.summary.missing_month > 0 {
                    ui.label(
                        RichText::new(format!(
                            "{} rows without a usable month",
                            state.summary.missing_month
                        ))
                        .weak(),
                    );
                }
                if state.summary.missing_price > 0 {
                    ui.label(
                        RichText::new(format!(
                            "{} rows without a usable price",
                            state.summary.missing_price
                        ))
                        .weak(),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }

            let can_export = state.chart.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export PNG…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} in {}",
                ds.len(),
                state.summary.matched,
                state.town
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom panel – aggregate table
// ---------------------------------------------------------------------------

/// Table of the aggregate points behind the plotted lines.
pub fn trend_table(ui: &mut Ui, state: &AppState) {
    let points = &state.points;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::remainder())
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.strong("Year");
            });
            header.col(|ui| {
                ui.strong("Flat type");
            });
            header.col(|ui| {
                ui.strong("Mean price");
            });
        })
        .body(|body| {
            body.rows(18.0, points.len(), |mut row| {
                let point = &points[row.index()];
                row.col(|ui| {
                    ui.label(point.year.to_string());
                });
                row.col(|ui| {
                    ui.label(&point.flat_type);
                });
                row.col(|ui| {
                    ui.label(format!("${:.2}", point.mean_price));
                });
            });
        });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open resale data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        load_data_file(state, &path);
    }
}

pub fn export_dialog(state: &mut AppState) {
    let Some(chart) = &state.chart else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export chart")
        .add_filter("PNG image", &["png"])
        .set_file_name("resale-trends.png")
        .save_file();

    if let Some(path) = file {
        match crate::chart::export::save_png(chart, &state.town, &path) {
            Ok(()) => {
                log::info!("Exported chart to {}", path.display());
                state.status_message = None;
            }
            Err(err) => {
                log::error!("Failed to export {}: {err:#}", path.display());
                state.status_message = Some(format!("Error: {err:#}"));
            }
        }
    }
}

/// Load rows from `path` into the state, or surface the error without
/// touching the current dataset.
pub fn load_data_file(state: &mut AppState, path: &Path) {
    match crate::data::loader::load_file(path) {
        Ok(rows) => {
            let dataset = ResaleDataset::from_rows(rows);
            if dataset.is_empty() {
                log::warn!("{} contained no rows", path.display());
            }
            log::info!(
                "Loaded {} rows from {} ({} towns)",
                dataset.len(),
                path.display(),
                dataset.towns.len()
            );
            state.set_dataset(dataset, path.to_path_buf());
        }
        Err(err) => {
            log::error!("Failed to load {}: {err}", path.display());
            state.status_message = Some(format!("Error: {err}"));
        }
    }
}
