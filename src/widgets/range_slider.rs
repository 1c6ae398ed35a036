//! Payload range slider: two linked sliders sharing the dataset bounds

use egui::{Response, Ui};

use crate::constants::charts::PAYLOAD_RANGE_LABEL;
use crate::data::PayloadBounds;
use crate::state::PayloadRange;

/// A reusable widget for picking an inclusive payload range
pub struct PayloadRangeSlider<'a> {
    range: &'a mut PayloadRange,
    bounds: PayloadBounds,
    step: f64,
}

impl<'a> PayloadRangeSlider<'a> {
    /// Create a new range slider over `bounds`
    pub fn new(range: &'a mut PayloadRange, bounds: PayloadBounds) -> Self {
        Self {
            range,
            bounds,
            step: crate::constants::slider::DEFAULT_STEP,
        }
    }

    /// Set the slider step
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Show the widget; the response is marked changed when the range moved
    pub fn show(self, ui: &mut Ui) -> Response {
        let bounds = self.bounds;
        let (mut min, mut max) = (self.range.min(), self.range.max());
        let mut min_moved = false;
        let mut max_moved = false;

        let mut response = ui
            .horizontal(|ui| {
                ui.label(PAYLOAD_RANGE_LABEL);
                min_moved = ui
                    .add(
                        egui::Slider::new(&mut min, bounds.min..=bounds.max)
                            .step_by(self.step)
                            .text("min"),
                    )
                    .changed();
                max_moved = ui
                    .add(
                        egui::Slider::new(&mut max, bounds.min..=bounds.max)
                            .step_by(self.step)
                            .text("max"),
                    )
                    .changed();
            })
            .response;

        if min_moved || max_moved {
            let (min, max) = link_range(min, max, min_moved, bounds);
            if let Ok(range) = PayloadRange::new(min, max) {
                if range != *self.range {
                    *self.range = range;
                    response.mark_changed();
                }
            }
        }

        response
    }
}

/// Keep `min <= max` inside the bounds by dragging the other handle along
pub fn link_range(min: f64, max: f64, min_moved: bool, bounds: PayloadBounds) -> (f64, f64) {
    let (min, max) = (bounds.clamp(min), bounds.clamp(max));
    if min <= max {
        (min, max)
    } else if min_moved {
        (min, min)
    } else {
        (max, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: PayloadBounds = PayloadBounds {
        min: 0.0,
        max: 9600.0,
    };

    #[test]
    fn test_link_range_keeps_order() {
        assert_eq!(link_range(1000.0, 5000.0, true, BOUNDS), (1000.0, 5000.0));
        // Min handle dragged past max pushes max along
        assert_eq!(link_range(6000.0, 5000.0, true, BOUNDS), (6000.0, 6000.0));
        // Max handle dragged below min pulls min along
        assert_eq!(link_range(6000.0, 5000.0, false, BOUNDS), (5000.0, 5000.0));
    }

    #[test]
    fn test_link_range_clamps() {
        assert_eq!(link_range(-10.0, 10000.0, true, BOUNDS), (0.0, 9600.0));
    }
}
