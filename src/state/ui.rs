//! UI interaction state

/// Display preferences and the error banner of the native window
#[derive(Debug, Clone)]
pub struct UiState {
    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Payload slider step in kilograms
    pub slider_step: f64,

    /// Error message to display in UI (banner above the charts)
    pub error_message: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: true,
            slider_step: crate::constants::slider::DEFAULT_STEP,
            error_message: None,
        }
    }
}

impl UiState {
    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Check if there's an error to display
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}
