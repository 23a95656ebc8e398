//! Rendering of validation errors into a page document.

use storedom::{
    Element, find_element, find_element_mut, insert_after, next_sibling, remove_siblings_where,
    siblings_where,
};

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::validation::{ErrorDisplay, ErrorSurface};

/// A field name paired with the ID of the input element that holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundField {
    pub name: String,
    pub element_id: String,
}

/// [`ErrorSurface`] backed by a document.
///
/// Invalid fields get the configured invalid class and, in
/// [`ErrorDisplay::Below`] mode, a `<div class="invalid-feedback d-block">`
/// message inserted right after the input. Each message is tagged with
/// `data-field`, so fields sharing a parent keep their own messages. Stale
/// messages are removed before a new one is inserted, so a field never shows
/// two.
pub struct DomSurface<'a> {
    root: &'a mut Element,
    fields: &'a [BoundField],
    config: &'a StorefrontConfig,
}

impl<'a> DomSurface<'a> {
    pub fn new(
        root: &'a mut Element,
        fields: &'a [BoundField],
        config: &'a StorefrontConfig,
    ) -> Self {
        Self {
            root,
            fields,
            config,
        }
    }

    fn bound(&self, field: &str) -> Result<&'a BoundField, StorefrontError> {
        let fields: &'a [BoundField] = self.fields;
        fields
            .iter()
            .find(|f| f.name == field)
            .ok_or_else(|| StorefrontError::ElementNotFound(field.to_string()))
    }
}

impl ErrorSurface for DomSurface<'_> {
    fn set_error(&mut self, field: &str, message: &str) -> Result<(), StorefrontError> {
        let bound = self.bound(field)?;
        let id = bound.element_id.as_str();

        find_element_mut(self.root, id)
            .ok_or_else(|| StorefrontError::ElementNotFound(id.to_string()))?
            .add_class(self.config.invalid_class.as_str());

        remove_feedback(self.root, bound, self.config);

        if self.config.error_display.shows_message() {
            let feedback = Element::text(message)
                .tag("div")
                .class(self.config.feedback_class.as_str())
                .class("d-block")
                .data("field", field);
            insert_after(self.root, id, feedback);
        }

        log::debug!("[render] {} marked invalid: {}", field, message);
        Ok(())
    }

    fn clear_error(&mut self, field: &str) -> Result<(), StorefrontError> {
        let bound = self.bound(field)?;
        clear_field_error(self.root, bound, self.config)?;
        Ok(())
    }

    fn has_error(&self, field: &str) -> bool {
        self.bound(field)
            .ok()
            .and_then(|bound| find_element(self.root, &bound.element_id))
            .is_some_and(|el| el.has_class(&self.config.invalid_class))
    }

    fn error(&self, field: &str) -> Option<String> {
        let bound = self.bound(field).ok()?;
        field_error_message(self.root, bound, self.config)
    }

    fn error_display(&self) -> ErrorDisplay {
        self.config.error_display
    }
}

/// IDs of the messages that belong to `field`: feedback siblings tagged with
/// its name, plus an untagged feedback element directly after the input
/// (server-rendered markup).
fn feedback_ids(root: &Element, field: &BoundField, config: &StorefrontConfig) -> Vec<String> {
    let class = config.feedback_class.as_str();
    let mut ids: Vec<String> = siblings_where(root, &field.element_id, |sibling| {
        sibling.has_class(class)
            && sibling.get_data("field").map(String::as_str) == Some(field.name.as_str())
    })
    .into_iter()
    .map(|el| el.id.clone())
    .collect();

    match next_sibling(root, &field.element_id) {
        Some(next) if next.has_class(class) && next.get_data("field").is_none() => {
            ids.insert(0, next.id.clone());
        }
        _ => {}
    }
    ids
}

fn remove_feedback(root: &mut Element, field: &BoundField, config: &StorefrontConfig) -> usize {
    let ids = feedback_ids(root, field, config);
    if ids.is_empty() {
        return 0;
    }
    remove_siblings_where(root, &field.element_id, |sibling| ids.contains(&sibling.id))
}

/// Remove the invalid marker and this field's message from its input.
/// Messages of other fields are left alone. Returns true if anything was
/// removed.
pub fn clear_field_error(
    root: &mut Element,
    field: &BoundField,
    config: &StorefrontConfig,
) -> Result<bool, StorefrontError> {
    let had_marker = find_element_mut(root, &field.element_id)
        .ok_or_else(|| StorefrontError::ElementNotFound(field.element_id.clone()))?
        .remove_class(&config.invalid_class);
    let removed = remove_feedback(root, field, config);

    Ok(had_marker || removed > 0)
}

/// Message currently shown for `field`, if any.
pub fn field_error_message(
    root: &Element,
    field: &BoundField,
    config: &StorefrontConfig,
) -> Option<String> {
    let ids = feedback_ids(root, field, config);
    ids.first()
        .and_then(|id| find_element(root, id))
        .map(Element::text_content)
}
