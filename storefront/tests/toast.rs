use std::time::{Duration, Instant};

use storedom::{Element, find_element};
use storefront::config::StorefrontConfig;
use storefront::toast::{DEFAULT_TOAST_DURATION, Toast, ToastKind, ToastQueue};

#[test]
fn test_toast_constructors() {
    let ok = Toast::success("Saved");
    assert_eq!(ok.kind, ToastKind::Success);
    assert_eq!(ok.duration, DEFAULT_TOAST_DURATION);

    let err = Toast::error("Failed").with_duration(Duration::from_secs(10));
    assert_eq!(err.kind, ToastKind::Error);
    assert_eq!(err.duration, Duration::from_secs(10));

    let from_str: Toast = "Hello".into();
    assert_eq!(from_str.kind, ToastKind::Success);
}

#[test]
fn test_toast_element() {
    let el = Toast::error("Out of stock").element();
    assert!(el.has_class("toast-notification"));
    assert!(el.has_class("error"));
    assert_eq!(el.text_content(), "Out of stock");
    assert!(el.child_elements()[0].has_class("fa-exclamation-circle"));
}

#[test]
fn test_queue_shows_and_expires() {
    let mut body = Element::div().id("body");
    let mut toasts = ToastQueue::new();
    let start = Instant::now();

    let first = toasts.show(&mut body, Toast::success("one"), start);
    let second = toasts.show(
        &mut body,
        Toast::error("two").with_duration(Duration::from_secs(10)),
        start,
    );
    assert_eq!(toasts.len(), 2);
    assert!(find_element(&body, &first).is_some());

    assert_eq!(toasts.expire(&mut body, start + Duration::from_secs(1)), 0);
    assert_eq!(toasts.expire(&mut body, start + Duration::from_secs(3)), 1);
    assert!(find_element(&body, &first).is_none());
    assert!(find_element(&body, &second).is_some());

    assert_eq!(toasts.expire(&mut body, start + Duration::from_secs(10)), 1);
    assert!(toasts.is_empty());
    assert!(body.child_elements().is_empty());
}

#[test]
fn test_queue_uses_configured_duration() {
    let config = StorefrontConfig::default().with_toast_duration(Duration::from_millis(500));
    let mut body = Element::div();
    let mut toasts = ToastQueue::from_config(&config);
    let start = Instant::now();

    toasts.success(&mut body, "Added to cart", start);
    toasts.error(&mut body, "Out of stock", start);
    assert_eq!(toasts.expire(&mut body, start + Duration::from_millis(499)), 0);
    assert_eq!(toasts.expire(&mut body, start + Duration::from_millis(500)), 2);
}
