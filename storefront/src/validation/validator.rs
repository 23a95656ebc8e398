//! Validator builder for fluent validation API.

use regex::Regex;

use super::result::{FieldError, ValidationResult};
use super::surface::ErrorSurface;
use crate::error::StorefrontError;

/// Reads one field's raw value out of a form snapshot.
pub type Accessor<T> = fn(&T) -> &str;

/// Type alias for validation rule closures.
type Rule<T> = Box<dyn Fn(&T) -> Result<(), String> + Send + Sync>;

/// Length of a value as a browser form input reports it (UTF-16 code units).
///
/// No trimming and no grapheme awareness: `"ab "` is 3 long and an emoji
/// outside the BMP counts as 2.
pub fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Internal representation of a field being validated.
struct FieldEntry<T> {
    name: String,
    widget_id: Option<String>,
    rules: Vec<Rule<T>>,
}

/// Rule set over a snapshot of form values of type `T`.
///
/// Every field is checked on every call, in the order fields were declared,
/// so all failing fields are reported at once. Within one field the first
/// failing rule supplies the message.
///
/// # Example
///
/// ```ignore
/// let validator = Validator::new()
///     .field("name", name_of)
///         .required("Name is required")
///     .field("email", email_of)
///         .required("Email is required")
///         .pattern(email_re, "Invalid email format")
///     .build();
///
/// if validator.validate(&values).is_valid() {
///     // Submit form
/// }
/// ```
pub struct Validator<T> {
    fields: Vec<FieldEntry<T>>,
}

impl<T: 'static> Validator<T> {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field(self, name: impl Into<String>, accessor: Accessor<T>) -> FieldBuilder<T> {
        FieldBuilder {
            validator: self,
            name: name.into(),
            accessor,
            rules: Vec::new(),
        }
    }

    /// Names of the declared fields, in check order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Associate a field with the ID of the element that renders it.
    /// Returns false if no field has that name.
    pub fn bind_widget(&mut self, name: &str, widget_id: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.widget_id = Some(widget_id.into());
                true
            }
            None => false,
        }
    }

    /// Run every rule against `values`.
    pub fn validate(&self, values: &T) -> ValidationResult {
        let mut errors = Vec::new();

        for field in &self.fields {
            let first_error = field.rules.iter().find_map(|rule| rule(values).err());
            if let Some(message) = first_error {
                errors.push(FieldError {
                    field_name: field.name.clone(),
                    widget_id: field.widget_id.clone(),
                    message,
                });
            }
        }

        if errors.is_empty() {
            log::trace!("[validation] {} field(s) passed", self.fields.len());
        } else {
            log::debug!(
                "[validation] {} of {} field(s) failed",
                errors.len(),
                self.fields.len()
            );
        }
        ValidationResult::from(errors)
    }

    /// Run every rule and show the outcome on `surface`.
    ///
    /// Each declared field is recomputed fresh: failing fields get their
    /// message (replacing any stale one), passing fields are cleared.
    pub fn validate_into<S: ErrorSurface + ?Sized>(
        &self,
        values: &T,
        surface: &mut S,
    ) -> Result<ValidationResult, StorefrontError> {
        let result = self.validate(values);

        for name in self.field_names() {
            match result.error_for(name) {
                Some(error) => surface.set_error(name, &error.message)?,
                None => surface.clear_error(name)?,
            }
        }

        Ok(result)
    }
}

impl<T: 'static> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<T> {
    validator: Validator<T>,
    name: String,
    accessor: Accessor<T>,
    rules: Vec<Rule<T>>,
}

impl<T: 'static> FieldBuilder<T> {
    /// Add a custom rule over this field's value.
    pub fn rule<F>(self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rule_with(move |_, v| f(v), msg)
    }

    /// Add a custom rule that may also look at the rest of the form.
    pub fn rule_with<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&T, &str) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        let accessor = self.accessor;
        self.rules.push(Box::new(move |values: &T| {
            if f(values, accessor(values)) {
                Ok(())
            } else {
                Err(msg.clone())
            }
        }));
        self
    }

    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (see [`input_length`]).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| input_length(v) >= min, msg)
    }

    /// Require maximum length (see [`input_length`]).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| input_length(v) <= max, msg)
    }

    /// Require the value to match a compiled pattern.
    pub fn pattern(self, re: Regex, msg: impl Into<String>) -> Self {
        self.rule(move |v| re.is_match(v), msg)
    }

    /// Require the value to match a pattern given as a string.
    pub fn try_pattern(
        self,
        pattern: &str,
        msg: impl Into<String>,
    ) -> Result<Self, StorefrontError> {
        let re = Regex::new(pattern)?;
        Ok(self.pattern(re, msg))
    }

    /// Require the value to equal another field exactly.
    pub fn equals_field(self, other: Accessor<T>, msg: impl Into<String>) -> Self {
        self.rule_with(move |values, v| v == other(values), msg)
    }

    /// Require the value to contain a substring.
    pub fn contains(self, substr: impl Into<String>, msg: impl Into<String>) -> Self {
        let substr = substr.into();
        self.rule(move |v| v.contains(&substr), msg)
    }

    /// Continue to the next field.
    pub fn field(self, name: impl Into<String>, accessor: Accessor<T>) -> FieldBuilder<T> {
        self.finalize().field(name, accessor)
    }

    /// Finish declaring rules and return the validator.
    pub fn build(self) -> Validator<T> {
        self.finalize()
    }

    /// Finalize and run all validations once.
    pub fn validate(self, values: &T) -> ValidationResult {
        self.finalize().validate(values)
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator<T> {
        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            name: self.name,
            widget_id: None,
            rules: self.rules,
        });
        validator
    }
}
