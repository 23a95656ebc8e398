//! Tests for the generic validator and the error surface contract.

use std::collections::HashMap;

use storefront::error::StorefrontError;
use storefront::validation::{
    ErrorDisplay, ErrorSurface, FieldError, ValidationResult, Validator,
};

#[derive(Debug, Default)]
struct Profile {
    name: String,
    nickname: String,
    bio: String,
}

fn name(p: &Profile) -> &str {
    &p.name
}

fn nickname(p: &Profile) -> &str {
    &p.nickname
}

fn bio(p: &Profile) -> &str {
    &p.bio
}

fn profile(name: &str, nickname: &str, bio: &str) -> Profile {
    Profile {
        name: name.to_string(),
        nickname: nickname.to_string(),
        bio: bio.to_string(),
    }
}

/// Error surface that records what it was told to show.
#[derive(Default)]
struct RecordingSurface {
    shown: HashMap<String, String>,
    set_calls: usize,
    clear_calls: usize,
}

impl ErrorSurface for RecordingSurface {
    fn set_error(&mut self, field: &str, message: &str) -> Result<(), StorefrontError> {
        self.set_calls += 1;
        self.shown.insert(field.to_string(), message.to_string());
        Ok(())
    }

    fn clear_error(&mut self, field: &str) -> Result<(), StorefrontError> {
        self.clear_calls += 1;
        self.shown.remove(field);
        Ok(())
    }

    fn has_error(&self, field: &str) -> bool {
        self.shown.contains_key(field)
    }

    fn error(&self, field: &str) -> Option<String> {
        self.shown.get(field).cloned()
    }

    fn error_display(&self) -> ErrorDisplay {
        ErrorDisplay::Below
    }
}

fn validator() -> Validator<Profile> {
    Validator::<Profile>::new()
        .field("name", name)
        .required("Name is required")
        .max_length(10, "Name is too long")
        .field("nickname", nickname)
        .rule_with(|p, v| v != p.name, "Nickname must differ from name")
        .field("bio", bio)
        .contains("books", "Tell us about books")
        .build()
}

#[test]
fn test_field_names_in_declaration_order() {
    let v = validator();
    let names: Vec<&str> = v.field_names().collect();
    assert_eq!(names, vec!["name", "nickname", "bio"]);
}

#[test]
fn test_all_fields_are_checked() {
    let result = validator().validate(&profile("", "", "cats"));
    let fields: Vec<&str> = result
        .errors()
        .iter()
        .map(|e| e.field_name.as_str())
        .collect();
    assert_eq!(fields, vec!["name", "nickname", "bio"]);
}

#[test]
fn test_required_trims_whitespace() {
    let result = validator().validate(&profile("   ", "x", "books"));
    assert_eq!(result.first_error().unwrap().message, "Name is required");
}

#[test]
fn test_max_length() {
    let result = validator().validate(&profile("abcdefghijk", "x", "books"));
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].message, "Name is too long");
}

#[test]
fn test_valid_profile() {
    assert_eq!(
        validator().validate(&profile("Ann", "annie", "I like books")),
        ValidationResult::Valid
    );
}

#[test]
fn test_result_from_error_list() {
    assert_eq!(ValidationResult::from(Vec::new()), ValidationResult::Valid);

    let error = FieldError {
        field_name: "name".to_string(),
        widget_id: None,
        message: "Name is required".to_string(),
    };
    let result = ValidationResult::from(vec![error.clone()]);
    assert!(result.is_invalid());
    assert_eq!(result.error_for("name"), Some(&error));
    assert_eq!(result.first_invalid_widget(), None);
}

#[test]
fn test_error_display_modes() {
    assert!(ErrorDisplay::default().shows_message());
    assert!(!ErrorDisplay::None.shows_message());
}

#[test]
fn test_try_pattern_rejects_bad_regex() {
    let result = Validator::<Profile>::new()
        .field("name", name)
        .try_pattern("([", "never");
    assert!(matches!(result, Err(StorefrontError::InvalidPattern(_))));
}

#[test]
fn test_try_pattern_applies_regex() {
    let validator = Validator::<Profile>::new()
        .field("name", name)
        .try_pattern(r"^[A-Z]", "Capitalise your name")
        .unwrap()
        .build();
    assert!(validator.validate(&profile("Ann", "", "")).is_valid());
    assert!(validator.validate(&profile("ann", "", "")).is_invalid());
}

#[test]
fn test_bind_widget() {
    let mut validator = validator();
    assert!(validator.bind_widget("bio", "bio-input"));
    assert!(!validator.bind_widget("missing", "x"));

    let result = validator.validate(&profile("Ann", "annie", "cats"));
    assert_eq!(result.first_invalid_widget(), Some("bio-input"));
}

#[test]
fn test_validate_into_sets_failures_and_clears_passes() {
    let validator = validator();
    let mut surface = RecordingSurface::default();

    validator
        .validate_into(&profile("", "", "cats"), &mut surface)
        .unwrap();
    assert_eq!(surface.set_calls, 3);
    assert!(surface.has_error("bio"));

    validator
        .validate_into(&profile("Ann", "annie", "cats"), &mut surface)
        .unwrap();
    assert!(!surface.has_error("name"));
    assert!(!surface.has_error("nickname"));
    assert_eq!(surface.error("bio").as_deref(), Some("Tell us about books"));
    assert_eq!(surface.clear_calls, 2);
}

#[test]
fn test_default_validator_is_empty_and_valid() {
    let validator = Validator::<Profile>::default();
    assert_eq!(validator.field_names().count(), 0);
    assert!(validator.validate(&Profile::default()).is_valid());
}
