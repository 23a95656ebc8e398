//! Surface trait for whatever displays validation errors.

use super::ErrorDisplay;
use crate::error::StorefrontError;

/// Something that can show and clear per-field validation errors.
///
/// The validator itself never touches a document; it hands its results to
/// a surface. At most one error is visible per field: `set_error` replaces
/// whatever the field was showing before.
pub trait ErrorSurface {
    /// Mark a field invalid and show `message` for it.
    fn set_error(&mut self, field: &str, message: &str) -> Result<(), StorefrontError>;

    /// Clear the invalid marker and message of a field.
    fn clear_error(&mut self, field: &str) -> Result<(), StorefrontError>;

    /// Check if the field is currently marked invalid.
    fn has_error(&self, field: &str) -> bool;

    /// Get the message currently shown for a field (if any).
    fn error(&self, field: &str) -> Option<String>;

    /// Get the error display mode.
    fn error_display(&self) -> ErrorDisplay;
}
