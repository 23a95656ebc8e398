use storedom::{Element, find_element};
use storefront::cart::{QuantityChange, Step, clamp_quantity, on_quantity_change, step_quantity};
use storefront::config::StorefrontConfig;
use storefront::error::StorefrontError;

fn cart(value: &str, min: Option<&str>, max: Option<&str>) -> Element {
    let mut input = Element::input("quantity", value).id("qty").attr("type", "number");
    if let Some(min) = min {
        input = input.attr("min", min);
    }
    if let Some(max) = max {
        input = input.attr("max", max);
    }
    Element::form().class("add-to-cart-form").child(input)
}

fn value(root: &Element) -> String {
    find_element(root, "qty").unwrap().value().unwrap().to_string()
}

#[test]
fn test_clamp_to_max_with_notice() {
    assert_eq!(
        clamp_quantity(Some(12), Some(1), Some(5)),
        QuantityChange::ClampedToMax {
            value: 5,
            notice: "Maximum 5 items available in stock".to_string(),
        }
    );
}

#[test]
fn test_raise_to_min_silently() {
    assert_eq!(
        clamp_quantity(Some(0), Some(1), Some(5)),
        QuantityChange::RaisedToMin { value: 1 }
    );
}

#[test]
fn test_in_range_or_unparsable_is_unchanged() {
    assert_eq!(clamp_quantity(Some(3), Some(1), Some(5)), QuantityChange::Unchanged);
    assert_eq!(clamp_quantity(Some(5), Some(1), Some(5)), QuantityChange::Unchanged);
    assert_eq!(clamp_quantity(None, Some(1), Some(5)), QuantityChange::Unchanged);
    assert_eq!(clamp_quantity(Some(99), Some(1), None), QuantityChange::Unchanged);
}

#[test]
fn test_change_handler_rewrites_value() {
    let mut root = cart("12", Some("1"), Some("5"));
    let change = on_quantity_change(&mut root, "qty").unwrap();
    assert_eq!(change.new_value(), Some(5));
    assert_eq!(value(&root), "5");

    let mut root = cart("-2", Some("1"), Some("5"));
    on_quantity_change(&mut root, "qty").unwrap();
    assert_eq!(value(&root), "1");
}

#[test]
fn test_change_handler_clamps_oversized_value() {
    let mut root = cart("123456789012345678901234", Some("1"), Some("5"));
    let change = on_quantity_change(&mut root, "qty").unwrap();
    assert!(matches!(change, QuantityChange::ClampedToMax { value: 5, .. }));
    assert_eq!(value(&root), "5");
}

#[test]
fn test_change_handler_leaves_garbage_alone() {
    let mut root = cart("lots", Some("1"), Some("5"));
    assert_eq!(on_quantity_change(&mut root, "qty").unwrap(), QuantityChange::Unchanged);
    assert_eq!(value(&root), "lots");
}

#[test]
fn test_change_handler_missing_input() {
    let mut root = cart("1", None, None);
    assert!(matches!(
        on_quantity_change(&mut root, "nope"),
        Err(StorefrontError::ElementNotFound(_))
    ));
}

#[test]
fn test_steppers_respect_bounds() {
    let config = StorefrontConfig::default();
    let mut root = cart("2", Some("1"), Some("3"));

    assert_eq!(step_quantity(&mut root, "qty", Step::Increase, &config).unwrap(), Some(3));
    assert_eq!(step_quantity(&mut root, "qty", Step::Increase, &config).unwrap(), None);
    assert_eq!(value(&root), "3");

    assert_eq!(step_quantity(&mut root, "qty", Step::Decrease, &config).unwrap(), Some(2));
    assert_eq!(step_quantity(&mut root, "qty", Step::Decrease, &config).unwrap(), Some(1));
    assert_eq!(step_quantity(&mut root, "qty", Step::Decrease, &config).unwrap(), None);
    assert_eq!(value(&root), "1");
}

#[test]
fn test_steppers_fall_back_to_configured_bounds() {
    let config = StorefrontConfig::default().stepper_bounds(1, 2);
    let mut root = cart("", None, None);

    // Empty counts as 0.
    assert_eq!(step_quantity(&mut root, "qty", Step::Increase, &config).unwrap(), Some(1));
    assert_eq!(step_quantity(&mut root, "qty", Step::Increase, &config).unwrap(), Some(2));
    assert_eq!(step_quantity(&mut root, "qty", Step::Increase, &config).unwrap(), None);
}

#[test]
fn test_zero_bound_attribute_uses_fallback() {
    let config = StorefrontConfig::default();
    let mut root = cart("1", Some("0"), Some("10"));
    // min="0" falls back to 1, so the value cannot go below 1.
    assert_eq!(step_quantity(&mut root, "qty", Step::Decrease, &config).unwrap(), None);
}
