use crate::element::{find_element_mut, Element};

/// Page events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Form submission attempt, targeted at the form element
    Submit { target: String },
    /// Value edited by the user (fires on every keystroke)
    Input { target: String, value: String },
    /// Value committed (fires when the control loses focus or a stepper is used)
    Change { target: String, value: String },
    /// Mouse click
    Click { target: Option<String> },
}

impl Event {
    /// ID of the element the event is aimed at.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Submit { target }
            | Self::Input { target, .. }
            | Self::Change { target, .. } => Some(target.as_str()),
            Self::Click { target } => target.as_deref(),
        }
    }
}

/// Apply the document-level default action of an event.
///
/// For `Input` and `Change` this writes the new value into the target text
/// input before any handler runs, the same order a browser uses. Returns true
/// if the document changed.
pub fn apply_default(root: &mut Element, event: &Event) -> bool {
    match event {
        Event::Input { target, value } | Event::Change { target, value } => {
            match find_element_mut(root, target) {
                Some(element) => element.set_value(value.clone()),
                None => {
                    log::debug!("[event] no element {} for {:?}", target, event);
                    false
                }
            }
        }
        Event::Submit { .. } | Event::Click { .. } => false,
    }
}
