use eframe::egui::{self, CentralPanel, TopBottomPanel};
use egui_extras::{Size, StripBuilder};
use std::sync::Arc;

use crate::callbacks::CallbackRegistry;
use crate::config::DashboardConfig;
use crate::constants::layout::{STANDARD_PADDING, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::data::LaunchDataset;
use crate::error::{DashError, Result};
use crate::state::AppState;
use crate::ui;

/// Native dashboard window
pub struct DashboardApp {
    pub state: AppState,
    pub registry: CallbackRegistry,
}

impl DashboardApp {
    /// Build the app and render both charts for the default selection
    pub fn new(dataset: Arc<LaunchDataset>, config: &DashboardConfig) -> Self {
        let registry = CallbackRegistry::standard();
        let mut state = AppState::new(dataset, config);
        state.render_all(&registry);
        Self { state, registry }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::T) && i.modifiers.command) {
            self.state.ui.dark_mode = !self.state.ui.dark_mode;
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();

        if self.state.ui.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
        self.handle_shortcuts(ctx);

        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui::render_status_bar(self, ui);
        });

        CentralPanel::default().show(ctx, |ui| {
            ui::render_header(ui);
            ui.add_space(STANDARD_PADDING);

            ui::render_controls(self, ui);

            if let Some(message) = self.state.ui.error_message.clone() {
                ui::render_error_banner(self, ui, &message);
            }
            ui.add_space(STANDARD_PADDING);

            StripBuilder::new(ui)
                .size(Size::relative(0.45))
                .size(Size::remainder())
                .vertical(|mut strip| {
                    strip.cell(|ui| {
                        ui::render_pie_panel(self, ui);
                    });
                    strip.cell(|ui| {
                        ui::render_scatter_panel(self, ui);
                    });
                });
        });
    }
}

/// Open the native window and block until it is closed
pub fn run(dataset: Arc<LaunchDataset>, config: &DashboardConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    tracing::info!(rows = dataset.height(), "opening dashboard window");
    let app = DashboardApp::new(dataset, config);
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| DashError::Ui(e.to_string()))
}
