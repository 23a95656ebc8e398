//! Form validation system for the storefront.
//!
//! This module provides a fluent API for declaring per-field rules over a
//! snapshot of form values. Validation is pure: [`Validator::validate`] only
//! produces a [`ValidationResult`]. Showing the result is the job of an
//! [`ErrorSurface`], see [`Validator::validate_into`].
//!
//! # Example
//!
//! ```ignore
//! use storefront::validation::Validator;
//!
//! let validator = Validator::new()
//!     .field("username", |f: &Signup| &f.username)
//!         .min_length(3, "Username must be at least 3 characters")
//!     .field("email", |f: &Signup| &f.email)
//!         .required("Email is required")
//!     .build();
//!
//! let result = validator.validate(&signup);
//! if result.is_valid() {
//!     // Proceed with form submission
//! }
//! ```

mod error_display;
mod result;
mod surface;
mod validator;

pub use error_display::ErrorDisplay;
pub use result::{FieldError, ValidationResult};
pub use surface::ErrorSurface;
pub use validator::{Accessor, FieldBuilder, Validator, input_length};
