//! Storefront configuration types.

use std::time::Duration;

use serde::Deserialize;

use crate::validation::ErrorDisplay;

/// Page-level configuration shared by the storefront handlers.
///
/// Defaults match the stock storefront markup, so most pages only need
/// `StorefrontConfig::default()`. Can also be deserialized; missing keys fall
/// back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// ID of the registration form element.
    pub form_id: String,

    /// Class marking a field as invalid.
    pub invalid_class: String,

    /// Class of the message element shown next to an invalid field.
    pub feedback_class: String,

    /// How validation messages are displayed.
    pub error_display: ErrorDisplay,

    /// Currency label used for prices.
    pub currency: String,

    /// How long a toast stays visible, in milliseconds.
    pub toast_duration_ms: u64,

    /// Stepper lower bound when the input has no usable `min`.
    pub stepper_min: i64,

    /// Stepper upper bound when the input has no usable `max`.
    pub stepper_max: i64,

    /// How long a submit button shows its spinner before it is restored, in
    /// milliseconds.
    pub spinner_reset_ms: u64,

    /// Delay after page load before `.alert` banners are removed, in
    /// milliseconds.
    pub alert_dismiss_ms: u64,

    /// Question asked before a delete button may proceed.
    pub delete_confirm_message: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            form_id: "registerForm".to_string(),
            invalid_class: "is-invalid".to_string(),
            feedback_class: "invalid-feedback".to_string(),
            error_display: ErrorDisplay::Below,
            currency: "NPR".to_string(),
            toast_duration_ms: 3000,
            stepper_min: 1,
            stepper_max: 999,
            spinner_reset_ms: 3000,
            alert_dismiss_ms: 5000,
            delete_confirm_message: "Are you sure you want to delete this item?".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Create a config bound to the given form ID.
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            ..Default::default()
        }
    }

    /// Set the error display mode.
    pub fn error_display(mut self, display: ErrorDisplay) -> Self {
        self.error_display = display;
        self
    }

    /// Set the currency label.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set how long toasts stay visible.
    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the stepper fallback bounds.
    pub fn stepper_bounds(mut self, min: i64, max: i64) -> Self {
        self.stepper_min = min;
        self.stepper_max = max;
        self
    }

    /// Toast display duration.
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn spinner_reset(&self) -> Duration {
        Duration::from_millis(self.spinner_reset_ms)
    }

    pub fn alert_dismiss(&self) -> Duration {
        Duration::from_millis(self.alert_dismiss_ms)
    }
}
