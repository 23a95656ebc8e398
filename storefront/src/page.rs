//! Page-wide behaviour outside the individual widgets: submit spinners, the
//! loading overlay, alert dismissal and delete confirmation.
//!
//! Nothing here owns a timer. Timed state records the `Instant` it started
//! at, and the caller ticks it with the current time.

use std::time::{Duration, Instant};

use storedom::{
    Content, Element, Event, closest_with_class, collect_by_class, find_element,
    find_element_mut, find_where, remove_element,
};

use crate::config::StorefrontConfig;
use crate::registration::EventOutcome;

pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const ALERT_CLASS: &str = "alert";
pub const DELETE_BUTTON_CLASS: &str = "delete-btn";
pub const PROCESSING_LABEL: &str = "Processing...";

// ============================================================================
// Submit spinners
// ============================================================================

#[derive(Debug)]
struct BusyButton {
    button_id: String,
    original: Content,
    since: Instant,
}

/// Submit buttons currently disabled behind a spinner.
///
/// Every form submission disables the form's `button[type="submit"]` and
/// swaps its label for a spinner. The button is restored after the reset
/// delay whatever the outcome of the submission.
#[derive(Debug)]
pub struct SubmitSpinners {
    reset_after: Duration,
    busy: Vec<BusyButton>,
}

impl SubmitSpinners {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            reset_after,
            busy: Vec::new(),
        }
    }

    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.spinner_reset())
    }

    /// React to a page event. Only `Submit` is of interest.
    pub fn handle(&mut self, root: &mut Element, event: &Event, now: Instant) -> EventOutcome {
        match event {
            Event::Submit { target } => match self.start(root, target, now) {
                Some(_) => EventOutcome::Handled,
                None => EventOutcome::Ignored,
            },
            _ => EventOutcome::Ignored,
        }
    }

    /// Put the submit button of `form_id` into its busy state.
    ///
    /// Returns the button ID, or `None` when the form has no submit button.
    /// A button that is already busy keeps its original label and restarts
    /// its delay.
    pub fn start(&mut self, root: &mut Element, form_id: &str, now: Instant) -> Option<String> {
        let form = find_element(root, form_id)?;
        let button_id = find_where(form, &|el: &Element| {
            el.tag == "button" && el.get_attr("type") == Some("submit")
        })?
        .id
        .clone();

        if let Some(busy) = self.busy.iter_mut().find(|b| b.button_id == button_id) {
            busy.since = now;
            return Some(button_id);
        }

        let button = find_element_mut(root, &button_id)?;
        let original = std::mem::take(&mut button.content);
        button.set_attr("disabled", "");
        button.set_children(vec![
            Element::div().tag("i").class("fas").class("fa-spinner").class("fa-spin"),
            Element::text(format!(" {PROCESSING_LABEL}")),
        ]);

        log::debug!("[page] {} busy", button_id);
        self.busy.push(BusyButton {
            button_id: button_id.clone(),
            original,
            since: now,
        });
        Some(button_id)
    }

    /// Restore buttons whose delay has elapsed at `now`.
    /// Returns the number restored.
    pub fn restore(&mut self, root: &mut Element, now: Instant) -> usize {
        let reset_after = self.reset_after;
        let (due, busy): (Vec<_>, Vec<_>) = self
            .busy
            .drain(..)
            .partition(|b| now.duration_since(b.since) >= reset_after);
        self.busy = busy;

        let mut restored = 0;
        for button in due {
            // The button may have been re-rendered away in the meantime.
            if let Some(el) = find_element_mut(root, &button.button_id) {
                el.content = button.original;
                el.remove_attr("disabled");
                restored += 1;
                log::debug!("[page] {} restored", button.button_id);
            }
        }
        restored
    }

    pub fn is_busy(&self, button_id: &str) -> bool {
        self.busy.iter().any(|b| b.button_id == button_id)
    }
}

// ============================================================================
// Loading overlay
// ============================================================================

/// Append the full-page loading overlay to `body`.
/// Returns false if an overlay is already shown.
pub fn show_loading(body: &mut Element) -> bool {
    if find_element(body, LOADING_OVERLAY_ID).is_some() {
        return false;
    }

    let spinner = Element::div()
        .class("spinner-border")
        .class("text-light")
        .attr("role", "status")
        .child(Element::text("Loading...").class("visually-hidden"));
    body.push_child(Element::div().id(LOADING_OVERLAY_ID).child(spinner));
    log::debug!("[page] loading overlay shown");
    true
}

/// Remove the loading overlay. Returns false if none was shown.
pub fn hide_loading(root: &mut Element) -> bool {
    let removed = remove_element(root, LOADING_OVERLAY_ID).is_some();
    if removed {
        log::debug!("[page] loading overlay hidden");
    }
    removed
}

// ============================================================================
// Alert dismissal
// ============================================================================

/// One-shot removal of the page's `.alert` banners a fixed delay after load.
///
/// Alerts added after the dismissal has run are left alone.
#[derive(Debug)]
pub struct AlertDismissal {
    due_at: Instant,
    done: bool,
}

impl AlertDismissal {
    pub fn new(loaded_at: Instant, delay: Duration) -> Self {
        Self {
            due_at: loaded_at + delay,
            done: false,
        }
    }

    pub fn from_config(loaded_at: Instant, config: &StorefrontConfig) -> Self {
        Self::new(loaded_at, config.alert_dismiss())
    }

    /// Remove every alert if the delay has elapsed at `now`.
    /// Returns the number removed; zero before the deadline and after the
    /// first run.
    pub fn tick(&mut self, root: &mut Element, now: Instant) -> usize {
        if self.done || now < self.due_at {
            return 0;
        }
        self.done = true;

        let removed = collect_by_class(root, ALERT_CLASS)
            .iter()
            .filter(|id| remove_element(root, id).is_some())
            .count();
        log::debug!("[page] dismissed {} alert(s)", removed);
        removed
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

// ============================================================================
// Delete confirmation
// ============================================================================

/// Ask the user to confirm a delete. Clicks inside a `.delete-btn` only
/// proceed when `confirm` answers yes; everything else is `Ignored`.
///
/// ```ignore
/// let outcome = confirm_delete(&page, &event, &config, |question| ask_user(question));
/// ```
pub fn confirm_delete(
    root: &Element,
    event: &Event,
    config: &StorefrontConfig,
    confirm: impl FnOnce(&str) -> bool,
) -> EventOutcome {
    let Event::Click {
        target: Some(target),
    } = event
    else {
        return EventOutcome::Ignored;
    };
    let Some(button) = closest_with_class(root, target, DELETE_BUTTON_CLASS) else {
        return EventOutcome::Ignored;
    };

    if confirm(&config.delete_confirm_message) {
        EventOutcome::Proceed
    } else {
        log::debug!("[page] delete via {} cancelled", button.id);
        EventOutcome::Suppress
    }
}
