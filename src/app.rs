use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Interactions are collected while drawing and dispatched afterwards.
        let mut pending = Vec::new();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state, &mut pending);
        });

        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state, &mut pending);
            });

        egui::TopBottomPanel::bottom("table_panel")
            .default_height(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::data_table(ui, &self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &self.state);
        });

        if self.state.debug {
            panels::debug_window(ctx, &self.state);
        }

        for interaction in pending {
            self.state.dispatch(interaction);
        }
    }
}
