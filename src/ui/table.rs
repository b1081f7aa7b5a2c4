use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::CellValue;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Render the sorted, filtered rows.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let Some(view) = &state.table_view else {
        ui.label("No rows to show.");
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.strong(format!("{} row(s), sorted by {}", view.rows.len(), state.schema.sort_column));
        if !view.filter_query.is_empty() {
            ui.separator();
            ui.monospace(&view.filter_query);
        }
        if ui.small_button("Copy as JSON").clicked() {
            match view.records_json() {
                Ok(json) => ui.ctx().copy_text(json),
                Err(e) => log::error!("Failed to serialize rows: {e}"),
            }
        }
    });
    ui.separator();

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::auto().at_least(60.0).clip(true), view.columns.len())
            .header(ROW_HEIGHT + 4.0, |mut header| {
                for column in &view.columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(column);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, view.rows.len(), |mut row| {
                    let values = &view.rows[row.index()];
                    for value in values {
                        row.col(|ui: &mut Ui| {
                            match value {
                                CellValue::Null => ui.label(RichText::new("NA").weak()),
                                other => ui.label(other.to_string()),
                            };
                        });
                    }
                });
            });
    });
}
