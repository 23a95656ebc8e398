//! Storefront error types.
//!
//! A field failing its rules is not an error: it is reported through
//! [`ValidationResult`](crate::validation::ValidationResult). These variants
//! cover a page that does not have the shape a handler expects.

use thiserror::Error;

/// Errors that can occur while wiring handlers to a page document.
#[derive(Debug, Clone, Error)]
pub enum StorefrontError {
    /// The bound form is not in the document.
    #[error("Form '{0}' not found in document")]
    FormNotFound(String),

    /// A field the form needs has no input with that `name`.
    #[error("Field '{field}' not found in form '{form}'")]
    FieldNotFound {
        /// The form ID.
        form: String,
        /// The missing field name.
        field: String,
    },

    /// An element targeted by a handler is not in the document.
    #[error("Element '{0}' not found in document")]
    ElementNotFound(String),

    /// The binding was used before `attach` or after `detach`.
    #[error("Form binding for '{0}' is not attached")]
    NotAttached(String),

    /// A validation pattern failed to compile.
    #[error("Invalid validation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
