//! Launch site dropdown

use egui::{Response, Ui};

use crate::constants::sites::PLACEHOLDER;
use crate::state::SiteChoice;

/// A reusable widget for choosing one site or the "all sites" sentinel
pub struct SiteDropdown<'a> {
    selected: &'a mut SiteChoice,
    options: &'a [SiteChoice],
    width: f32,
}

impl<'a> SiteDropdown<'a> {
    /// Create a new dropdown over `options`
    pub fn new(selected: &'a mut SiteChoice, options: &'a [SiteChoice]) -> Self {
        Self {
            selected,
            options,
            width: 260.0,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Show the dropdown; the response is marked changed when a new site was picked
    pub fn show(self, ui: &mut Ui) -> Response {
        let before = self.selected.clone();
        let options = self.options;
        let selected = self.selected;

        let mut response = egui::ComboBox::from_id_salt("site-dropdown")
            .selected_text(selected.label().to_string())
            .width(self.width)
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(selected, option.clone(), option.label());
                }
            })
            .response
            .on_hover_text(PLACEHOLDER);

        if *selected != before {
            response.mark_changed();
        }
        response
    }
}
