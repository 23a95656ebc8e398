use std::time::{Duration, Instant};

use storedom::{Content, Element};

use crate::config::StorefrontConfig;

/// Default duration for toast notifications.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

pub const TOAST_CLASS: &str = "toast-notification";

/// Toast severity, also used as its CSS modifier class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
        }
    }
}

/// A toast notification.
///
/// # Example
///
/// ```ignore
/// toasts.show(&mut body, Toast::success("Added to cart"), Instant::now());
/// toasts.show(&mut body, Toast::error("Out of stock"), Instant::now());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    /// How long to show the toast.
    pub duration: Duration,
}

impl Toast {
    /// Create a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Set a custom duration for this toast.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Build the toast's element for rendering.
    pub fn element(&self) -> Element {
        Element::div()
            .class(TOAST_CLASS)
            .class(self.kind.class())
            .attr("role", "status")
            .child(Element::div().tag("i").class("fas").class(self.kind.icon()))
            .child(Element::text(self.message.clone()))
    }
}

impl From<String> for Toast {
    fn from(message: String) -> Self {
        Toast::success(message)
    }
}

impl From<&str> for Toast {
    fn from(message: &str) -> Self {
        Toast::success(message)
    }
}

/// Toasts currently attached to the page body, oldest first.
#[derive(Debug)]
pub struct ToastQueue {
    default_duration: Duration,
    active: Vec<(String, Instant, Duration)>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self {
            default_duration: DEFAULT_TOAST_DURATION,
            active: Vec::new(),
        }
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue whose shorthand toasts last `config.toast_duration_ms`.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self {
            default_duration: config.toast_duration(),
            active: Vec::new(),
        }
    }

    /// Show a success toast with the queue's default duration.
    pub fn success(&mut self, body: &mut Element, message: &str, now: Instant) -> String {
        let toast = Toast::success(message).with_duration(self.default_duration);
        self.show(body, toast, now)
    }

    /// Show an error toast with the queue's default duration.
    pub fn error(&mut self, body: &mut Element, message: &str, now: Instant) -> String {
        let toast = Toast::error(message).with_duration(self.default_duration);
        self.show(body, toast, now)
    }

    /// Append `toast` to `body`. Returns the toast element's ID.
    pub fn show(&mut self, body: &mut Element, toast: impl Into<Toast>, now: Instant) -> String {
        let toast = toast.into();
        let element = toast.element();
        let id = element.id.clone();

        body.push_child(element);
        self.active.push((id.clone(), now, toast.duration));
        log::debug!("[toast] showing {} for {:?}", id, toast.duration);
        id
    }

    /// Remove toasts whose duration has elapsed at `now`.
    /// Returns the number removed.
    pub fn expire(&mut self, body: &mut Element, now: Instant) -> usize {
        let (expired, active): (Vec<_>, Vec<_>) = self
            .active
            .drain(..)
            .partition(|(_, shown_at, duration)| now.duration_since(*shown_at) >= *duration);
        self.active = active;

        if let Content::Children(children) = &mut body.content {
            children.retain(|child| !expired.iter().any(|(id, _, _)| *id == child.id));
        }
        expired.len()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
