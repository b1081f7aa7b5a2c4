use eframe::egui::{self, Color32, Ui};
use egui_plot::{GridMark, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::data::view::{ScatterSpec, XAxis};
use crate::state::AppState;

/// Hover radius around a point, in screen pixels.
const HOVER_RADIUS: f32 = 8.0;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the LOD scatter plot in the central panel.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let Some(spec) = &state.scatter else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No plot available");
        });
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&spec.title);
    });

    let points: PlotPoints = spec.drawable().map(|(_, xy)| xy).collect();

    let mut plot = Plot::new("scatter_plot")
        .x_axis_label(spec.x_column.clone())
        .y_axis_label(spec.y_column.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|_, _| String::new());

    if let XAxis::Categorical(categories) = &spec.x_axis {
        let categories = categories.clone();
        plot = plot.x_axis_formatter(move |mark: GridMark, _range| {
            let pos = mark.value.round();
            if (mark.value - pos).abs() > f64::EPSILON || pos < 0.0 {
                return String::new();
            }
            categories.get(pos as usize).cloned().unwrap_or_default()
        });
    }

    let response = plot.show(ui, |plot_ui| {
        plot_ui.points(
            Points::new(points)
                .name(&spec.y_column)
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(4.0)
                .color(Color32::LIGHT_BLUE),
        );

        let pointer = plot_ui.pointer_coordinate()?;
        let pointer_pos = plot_ui.screen_from_plot(pointer);
        spec.drawable()
            .map(|(p, [x, y])| {
                let pos = plot_ui.screen_from_plot(PlotPoint::new(x, y));
                (p.row, pos.distance(pointer_pos))
            })
            .filter(|(_, d)| *d <= HOVER_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(row, _)| row)
    });

    if let Some(row) = response.inner {
        response.response.on_hover_ui_at_pointer(|ui: &mut Ui| {
            hover_details(ui, state, spec, row);
        });
    }
}

/// Every column of the hovered row.
fn hover_details(ui: &mut Ui, state: &AppState, spec: &ScatterSpec, row: usize) {
    egui::Grid::new("hover_details").show(ui, |ui: &mut Ui| {
        for (column, value) in state.table.columns().iter().zip(state.table.row(row)) {
            if *column == spec.x_column || *column == spec.y_column {
                ui.strong(column);
            } else {
                ui.label(column);
            }
            ui.label(value.to_string());
            ui.end_row();
        }
    });
}
