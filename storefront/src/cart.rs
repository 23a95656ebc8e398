//! Cart quantity inputs: clamping on change and the -/+ steppers.

use storedom::{Element, find_element, find_element_mut};

use crate::config::StorefrontConfig;
use crate::error::StorefrontError;

/// Parse a leading base-10 integer the way form scripts read number inputs.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit (`"12abc"` is 12). Digit runs beyond `i64` saturate instead of
/// failing. Returns `None` when there are no digits.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Outcome of a quantity change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityChange {
    /// Value was within bounds (or could not be compared).
    Unchanged,
    /// Value exceeded stock; reset to `value` and tell the user.
    ClampedToMax { value: i64, notice: String },
    /// Value was below the minimum; silently raised to `value`.
    RaisedToMin { value: i64 },
}

impl QuantityChange {
    /// The value the input now holds, if it was rewritten.
    pub fn new_value(&self) -> Option<i64> {
        match self {
            Self::Unchanged => None,
            Self::ClampedToMax { value, .. } | Self::RaisedToMin { value } => Some(*value),
        }
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Any missing operand makes its comparison false, so an unparsable value
/// or a missing bound leaves the input alone. The max check wins.
pub fn clamp_quantity(value: Option<i64>, min: Option<i64>, max: Option<i64>) -> QuantityChange {
    match (value, min, max) {
        (Some(v), _, Some(max)) if v > max => QuantityChange::ClampedToMax {
            value: max,
            notice: format!("Maximum {max} items available in stock"),
        },
        (Some(v), Some(min), _) if v < min => QuantityChange::RaisedToMin { value: min },
        _ => QuantityChange::Unchanged,
    }
}

/// Change handler for a quantity input: clamps and rewrites its value.
pub fn on_quantity_change(
    root: &mut Element,
    element_id: &str,
) -> Result<QuantityChange, StorefrontError> {
    let input = find_element_mut(root, element_id)
        .ok_or_else(|| StorefrontError::ElementNotFound(element_id.to_string()))?;

    let change = clamp_quantity(
        input.value().and_then(parse_leading_int),
        input.get_attr("min").and_then(parse_leading_int),
        input.get_attr("max").and_then(parse_leading_int),
    );

    if let Some(value) = change.new_value() {
        input.set_value(value.to_string());
        log::debug!("[cart] {} adjusted to {}", element_id, value);
    }
    Ok(change)
}

/// Stepper button direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Decrease,
    Increase,
}

/// Click handler for a -/+ stepper next to a quantity input.
///
/// Unparsable or zero `min`/`max` fall back to the configured stepper
/// bounds; an unparsable current value counts as 0. The value only moves if
/// it stays strictly inside the bound, and the change handler runs after.
/// Returns the new value, or `None` when the step was refused.
pub fn step_quantity(
    root: &mut Element,
    element_id: &str,
    step: Step,
    config: &StorefrontConfig,
) -> Result<Option<i64>, StorefrontError> {
    let input = find_element(root, element_id)
        .ok_or_else(|| StorefrontError::ElementNotFound(element_id.to_string()))?;

    let current = input.value().and_then(parse_leading_int).unwrap_or(0);
    let bound = |attr: &str, fallback: i64| {
        input
            .get_attr(attr)
            .and_then(parse_leading_int)
            .filter(|&v| v != 0)
            .unwrap_or(fallback)
    };

    let next = match step {
        Step::Decrease if current > bound("min", config.stepper_min) => current - 1,
        Step::Increase if current < bound("max", config.stepper_max) => current + 1,
        _ => return Ok(None),
    };

    if let Some(input) = find_element_mut(root, element_id) {
        input.set_value(next.to_string());
    }
    let change = on_quantity_change(root, element_id)?;
    Ok(Some(change.new_value().unwrap_or(next)))
}
