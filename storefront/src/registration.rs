//! Registration form: field rules and the page binding that enforces them.
//!
//! [`RegistrationRules`] is the pure part and needs no document.
//! [`FormBinding`] ties those rules to one form element: on submit it
//! snapshots the four inputs, validates them, renders the outcome and tells
//! the caller whether the default submission must be suppressed. Editing a
//! field clears that field's error straight away.
//!
//! # Example
//!
//! ```ignore
//! let mut binding = FormBinding::new(StorefrontConfig::default())?;
//! binding.attach(&page)?;
//!
//! storedom::apply_default(&mut page, &event);
//! if binding.handle(&mut page, &event)?.is_suppressed() {
//!     // keep the user on the page
//! }
//!
//! binding.detach();
//! ```

use regex::Regex;
use serde::Deserialize;
use storedom::{Element, Event, find_by_name, find_element};

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::render::{BoundField, DomSurface, clear_field_error};
use crate::validation::{ValidationResult, Validator};

pub const FIELD_USERNAME: &str = "username";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM_PASSWORD: &str = "confirm_password";

/// Field names in check order.
pub const FIELDS: [&str; 4] = [
    FIELD_USERNAME,
    FIELD_EMAIL,
    FIELD_PASSWORD,
    FIELD_CONFIRM_PASSWORD,
];

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// One or more characters that are neither `@` nor browser whitespace.
///
/// Browser `\s` differs from Unicode `White_Space`: it includes U+FEFF and
/// excludes U+0085, so the class is spelled out.
macro_rules! email_run {
    () => {
        r"[^\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+"
    };
}

/// Non-space, non-`@` run, `@`, run, `.`, run. Deliberately permissive: no
/// TLD length or domain label checks.
pub const EMAIL_PATTERN: &str = concat!(
    "^",
    email_run!(),
    "@",
    email_run!(),
    r"\.",
    email_run!(),
    "$"
);

pub const MSG_USERNAME: &str = "Username must be at least 3 characters";
pub const MSG_EMAIL: &str = "Please enter a valid email address";
pub const MSG_PASSWORD: &str = "Password must be at least 8 characters";
pub const MSG_CONFIRM_PASSWORD: &str = "Passwords do not match";

/// Snapshot of the registration inputs at the moment of a submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

fn username(form: &RegistrationForm) -> &str {
    &form.username
}

fn email(form: &RegistrationForm) -> &str {
    &form.email
}

fn password(form: &RegistrationForm) -> &str {
    &form.password
}

fn confirm_password(form: &RegistrationForm) -> &str {
    &form.confirm_password
}

/// The four registration rules.
///
/// | field              | passes when                          |
/// |--------------------|--------------------------------------|
/// | `username`         | at least 3 long                      |
/// | `email`            | matches [`EMAIL_PATTERN`]            |
/// | `password`         | at least 8 long                      |
/// | `confirm_password` | exactly equal to `password`          |
///
/// Lengths are raw input lengths with no trimming. An empty password with an
/// empty confirmation passes the equality rule; the length rule still fails.
pub struct RegistrationRules {
    validator: Validator<RegistrationForm>,
}

impl RegistrationRules {
    pub fn new() -> Result<Self, StorefrontError> {
        let email_re = Regex::new(EMAIL_PATTERN)?;

        let validator = Validator::<RegistrationForm>::new()
            .field(FIELD_USERNAME, username)
            .min_length(USERNAME_MIN_LENGTH, MSG_USERNAME)
            .field(FIELD_EMAIL, email)
            .pattern(email_re, MSG_EMAIL)
            .field(FIELD_PASSWORD, password)
            .min_length(PASSWORD_MIN_LENGTH, MSG_PASSWORD)
            .field(FIELD_CONFIRM_PASSWORD, confirm_password)
            .equals_field(password, MSG_CONFIRM_PASSWORD)
            .build();

        Ok(Self { validator })
    }

    /// Check all four fields. Never short-circuits.
    pub fn validate(&self, form: &RegistrationForm) -> ValidationResult {
        self.validator.validate(form)
    }

    pub fn validator(&self) -> &Validator<RegistrationForm> {
        &self.validator
    }
}

/// What the caller should do with an event after the binding saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event is not for this binding (or the binding is detached).
    Ignored,
    /// The event was consumed, nothing further to do.
    Handled,
    /// Submission passed validation; let the default action happen.
    Proceed,
    /// Submission failed validation; cancel the default action.
    Suppress,
}

impl EventOutcome {
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppress)
    }
}

/// Registration rules bound to one form element in a document.
pub struct FormBinding {
    config: StorefrontConfig,
    rules: RegistrationRules,
    fields: Vec<BoundField>,
    attached: bool,
}

impl FormBinding {
    /// Create a detached binding for `config.form_id`.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        Ok(Self {
            config,
            rules: RegistrationRules::new()?,
            fields: Vec::new(),
            attached: false,
        })
    }

    pub fn form_id(&self) -> &str {
        &self.config.form_id
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Bound fields, in check order. Empty while detached.
    pub fn fields(&self) -> &[BoundField] {
        &self.fields
    }

    /// Locate the form and its four inputs in `root`.
    ///
    /// Re-attaching re-resolves the inputs, so a re-rendered page can be
    /// picked up again. On error the previous binding state is kept.
    pub fn attach(&mut self, root: &Element) -> Result<(), StorefrontError> {
        let form_id = self.config.form_id.clone();
        let form = find_element(root, &form_id)
            .ok_or_else(|| StorefrontError::FormNotFound(form_id.clone()))?;

        let fields = FIELDS
            .iter()
            .map(|&name| {
                find_by_name(form, name)
                    .map(|el| BoundField {
                        name: name.to_string(),
                        element_id: el.id.clone(),
                    })
                    .ok_or_else(|| StorefrontError::FieldNotFound {
                        form: form_id.clone(),
                        field: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for field in &fields {
            self.rules
                .validator
                .bind_widget(&field.name, field.element_id.clone());
        }
        self.fields = fields;
        self.attached = true;

        log::debug!("[binding] attached to form {}", form_id);
        Ok(())
    }

    /// Stop reacting to events. Marks already shown stay in the document.
    pub fn detach(&mut self) {
        if self.attached {
            log::debug!("[binding] detached from form {}", self.config.form_id);
        }
        self.attached = false;
        self.fields.clear();
    }

    /// Read the current values of the four inputs.
    pub fn snapshot(&self, root: &Element) -> Result<RegistrationForm, StorefrontError> {
        if !self.attached {
            return Err(StorefrontError::NotAttached(self.config.form_id.clone()));
        }

        let value_of = |name: &str| -> Result<String, StorefrontError> {
            let field = self
                .fields
                .iter()
                .find(|f| f.name == name)
                .ok_or_else(|| StorefrontError::FieldNotFound {
                    form: self.config.form_id.clone(),
                    field: name.to_string(),
                })?;
            let element = find_element(root, &field.element_id)
                .ok_or_else(|| StorefrontError::ElementNotFound(field.element_id.clone()))?;
            Ok(element.value().unwrap_or_default().to_string())
        };

        Ok(RegistrationForm {
            username: value_of(FIELD_USERNAME)?,
            email: value_of(FIELD_EMAIL)?,
            password: value_of(FIELD_PASSWORD)?,
            confirm_password: value_of(FIELD_CONFIRM_PASSWORD)?,
        })
    }

    /// Validate the form's current values and render the outcome.
    pub fn submit(&self, root: &mut Element) -> Result<ValidationResult, StorefrontError> {
        let form = self.snapshot(root)?;
        let mut surface = DomSurface::new(root, &self.fields, &self.config);
        let result = self.rules.validator.validate_into(&form, &mut surface)?;

        if result.is_valid() {
            log::debug!("[binding] {} passed validation", self.config.form_id);
        } else {
            log::debug!(
                "[binding] {} rejected with {} error(s)",
                self.config.form_id,
                result.errors().len()
            );
        }
        Ok(result)
    }

    /// React to a page event.
    ///
    /// `Submit` on the bound form validates and returns `Proceed` or
    /// `Suppress`. `Input` on a bound field clears that field's error only.
    /// Everything else is `Ignored`.
    pub fn handle(
        &self,
        root: &mut Element,
        event: &Event,
    ) -> Result<EventOutcome, StorefrontError> {
        if !self.attached {
            return Ok(EventOutcome::Ignored);
        }

        match event {
            Event::Submit { target } if *target == self.config.form_id => {
                let result = self.submit(root)?;
                Ok(if result.is_valid() {
                    EventOutcome::Proceed
                } else {
                    EventOutcome::Suppress
                })
            }
            Event::Input { target, .. } => {
                match self.fields.iter().find(|f| f.element_id == *target) {
                    Some(field) => {
                        if clear_field_error(root, field, &self.config)? {
                            log::trace!("[binding] cleared {} on edit", field.name);
                        }
                        Ok(EventOutcome::Handled)
                    }
                    None => Ok(EventOutcome::Ignored),
                }
            }
            _ => Ok(EventOutcome::Ignored),
        }
    }
}
