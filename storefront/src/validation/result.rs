/// A rule failure for one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name the field was declared under.
    pub field_name: String,
    /// ID of the input element, once the validator is bound to a page.
    pub widget_id: Option<String>,
    /// Message shown to the user.
    pub message: String,
}

/// Outcome of checking a form snapshot.
///
/// Errors are kept in declaration order, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(Vec<FieldError>),
}

impl From<Vec<FieldError>> for ValidationResult {
    /// An empty list is [`ValidationResult::Valid`].
    fn from(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Failures in declaration order; empty when valid.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// The failure reported for `field_name`, if it failed.
    pub fn error_for(&self, field_name: &str) -> Option<&FieldError> {
        self.errors().iter().find(|e| e.field_name == field_name)
    }

    /// Input to move focus to after a rejected submit.
    pub fn first_invalid_widget(&self) -> Option<&str> {
        self.first_error().and_then(|e| e.widget_id.as_deref())
    }
}
