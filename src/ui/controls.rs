use crate::app::DashboardApp;
use crate::callbacks::InputId;
use crate::constants::charts::DASHBOARD_TITLE;
use crate::widgets::{PayloadRangeSlider, SiteDropdown};
use eframe::egui::{self, RichText};

/// Centered dashboard title
pub fn render_header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(DASHBOARD_TITLE).size(32.0).strong());
    });
}

/// Render the site dropdown and payload slider, re-rendering charts on change
pub fn render_controls(app: &mut DashboardApp, ui: &mut egui::Ui) {
    let options = app.state.site_options();
    let bounds = app.state.dataset.payload_bounds();
    let step = app.state.ui.slider_step;

    let mut site = app.state.selection.site().clone();
    let mut range = app.state.selection.payload_range();

    let mut site_changed = false;

    ui.horizontal(|ui| {
        ui.label("Launch Site:");
        site_changed = SiteDropdown::new(&mut site, &options)
            .width(280.0)
            .show(ui)
            .changed();

        ui.separator();

        // Theme toggle
        let theme_icon = if app.state.ui.dark_mode { "☀" } else { "🌙" };
        if ui
            .button(theme_icon)
            .on_hover_text("Toggle dark/light theme (Ctrl+T)")
            .clicked()
        {
            app.state.ui.dark_mode = !app.state.ui.dark_mode;
        }
    });

    ui.add_space(4.0);
    let range_changed = PayloadRangeSlider::new(&mut range, bounds)
        .step(step)
        .show(ui)
        .changed();

    // Site first: its callbacks already cover the scatter
    if site_changed {
        app.state.selection.set_site(site);
        app.state.selection.set_payload_range(range);
        app.state.apply_change(InputId::SiteDropdown, &app.registry);
    } else if range_changed {
        app.state.selection.set_payload_range(range);
        app.state.apply_change(InputId::PayloadSlider, &app.registry);
    }
}

/// Error banner with a dismiss button
pub fn render_error_banner(app: &mut DashboardApp, ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("⚠ {}", message)).color(egui::Color32::from_rgb(214, 39, 40)));
        if ui.small_button("✖").clicked() {
            app.state.ui.clear_error();
        }
    });
}
