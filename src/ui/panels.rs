use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::options::Choice;
use crate::state::{AppState, Interaction};

// ---------------------------------------------------------------------------
// Left side panel – filter dropdowns and x-axis choice
// ---------------------------------------------------------------------------

/// Render the left control panel. Changes are pushed to `pending`.
pub fn side_panel(ui: &mut Ui, state: &AppState, pending: &mut Vec<Interaction>) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for column in state.options.column_names() {
                let Some(current) = state.selection.get(column) else {
                    continue;
                };
                ui.label(format!("{column}:"));
                egui::ComboBox::from_id_salt(column)
                    .width(ui.available_width())
                    .selected_text(current.to_string())
                    .show_ui(ui, |ui: &mut Ui| {
                        for choice in state.options.choices(column) {
                            let is_current = choice == *current;
                            if ui.selectable_label(is_current, choice.to_string()).clicked()
                                && !is_current
                            {
                                pending.push(Interaction::Filter {
                                    column: column.to_string(),
                                    choice,
                                });
                            }
                        }
                    });
                ui.add_space(4.0);
            }

            ui.add_space(12.0);
            ui.strong("Column for the x-axis:");
            egui::ComboBox::from_id_salt("x_axis")
                .width(ui.available_width())
                .selected_text(&state.x_column)
                .show_ui(ui, |ui: &mut Ui| {
                    for col in state.x_axis_choices() {
                        if ui.selectable_label(state.x_column == *col, col).clicked()
                            && state.x_column != *col
                        {
                            pending.push(Interaction::XAxis(col.clone()));
                        }
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with row counts and chain errors.
pub fn top_bar(ui: &mut Ui, state: &AppState, pending: &mut Vec<Interaction>) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.heading("Interactive Table with Filtering");
        ui.separator();

        let visible = state.table_view.as_ref().map_or(0, |v| v.rows.len());
        ui.label(format!("{} rows loaded, {visible} visible", state.table.len()));

        ui.separator();
        if ui.button("Reset filters").clicked() {
            pending.push(Interaction::ResetFilters);
        }

        for msg in [&state.scatter_error, &state.table_error].into_iter().flatten() {
            ui.label(RichText::new(format!("Error: {msg}")).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Debug window
// ---------------------------------------------------------------------------

/// Selection state and predicate text, shown with `--debug`.
pub fn debug_window(ctx: &egui::Context, state: &AppState) {
    egui::Window::new("Debug")
        .default_open(false)
        .show(ctx, |ui: &mut Ui| {
            egui::Grid::new("debug_selection")
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    for (column, choice) in state.selection.iter() {
                        ui.label(column);
                        ui.monospace(match choice {
                            Choice::All => "All".to_string(),
                            Choice::Value(v) => format!("{v:?}"),
                        });
                        ui.end_row();
                    }
                    ui.label("x axis");
                    ui.monospace(&state.x_column);
                    ui.end_row();
                });
            ui.separator();
            ui.label("Filter query:");
            ui.monospace(state.filter_query());
        });
}
