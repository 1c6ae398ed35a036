use crate::app::DashboardApp;
use crate::callbacks::OutputId;
use crate::charts::ChartSpec;
use crate::constants::layout::STATUS_BAR_HEIGHT;
use eframe::egui;

/// Bottom status line: data source, dataset size and current selection
pub fn render_status_bar(app: &DashboardApp, ui: &mut egui::Ui) {
    let state = &app.state;
    let source = state
        .dataset
        .source_path()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "in-memory".to_string());

    let range = state.selection.payload_range();
    let shown = match state.chart(OutputId::SuccessPayloadScatterChart) {
        Some(ChartSpec::Scatter(chart)) => chart.point_count(),
        _ => 0,
    };

    ui.horizontal(|ui| {
        ui.set_height(STATUS_BAR_HEIGHT);
        ui.label(format!("📄 {}", source));
        ui.separator();
        ui.label(format!(
            "{} launches, {} sites",
            state.dataset.height(),
            state.dataset.sites().len()
        ));
        ui.separator();
        ui.label(format!(
            "{} | {:.0}–{:.0} kg",
            state.selection.site(),
            range.min(),
            range.max()
        ));
        ui.separator();
        ui.label(format!("{} points shown", shown));

        if state.ui.has_error() {
            ui.separator();
            ui.colored_label(ui.visuals().warn_fg_color, "last update failed");
        }
    });
}
