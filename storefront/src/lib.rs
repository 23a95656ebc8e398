//! Client-side interaction layer of the BookHaven storefront.
//!
//! Handlers operate on a [`storedom`] page document. The registration form
//! validator is the core; the cart, catalog, formatting, toast and page
//! modules cover the rest of the page's behaviour.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod page;
pub mod registration;
pub mod render;
pub mod toast;
pub mod validation;

pub mod prelude {
    pub use crate::config::StorefrontConfig;
    pub use crate::error::StorefrontError;
    pub use crate::page::{
        AlertDismissal, SubmitSpinners, confirm_delete, hide_loading, show_loading,
    };
    pub use crate::registration::{
        EventOutcome, FormBinding, RegistrationForm, RegistrationRules,
    };
    pub use crate::toast::{Toast, ToastKind, ToastQueue};
    pub use crate::validation::{
        ErrorDisplay, ErrorSurface, FieldError, ValidationResult, Validator,
    };

    pub use storedom::{Element, Event};
}
