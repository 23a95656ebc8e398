//! Drives the registration form through a rejected and an accepted submit.
//!
//! Run with `cargo run -p storefront --example register`.

use std::time::Instant;

use simplelog::{Config, LevelFilter, WriteLogger};
use storedom::{Element, Event, apply_default};
use storefront::prelude::*;

fn page() -> Element {
    let fields = [
        ("username", "username-input", "ab"),
        ("email", "email-input", "bad"),
        ("password", "password-input", "short"),
        ("confirm_password", "confirm-input", "other"),
    ];

    Element::div().id("body").child(
        Element::form()
            .id("registerForm")
            .children(fields.iter().map(|(name, id, value)| {
                Element::div()
                    .class("mb-3")
                    .child(Element::input(*name, *value).id(*id))
            }))
            .child(Element::button("Register").id("submit").attr("type", "submit")),
    )
}

fn print_errors(result: &ValidationResult) {
    for error in result.errors() {
        println!("  {}: {}", error.field_name, error.message);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    WriteLogger::init(LevelFilter::Debug, Config::default(), std::io::stderr())?;

    let config = StorefrontConfig::default();
    let mut body = page();
    let mut binding = FormBinding::new(config.clone())?;
    let mut toasts = ToastQueue::from_config(&config);
    let mut spinners = SubmitSpinners::from_config(&config);
    binding.attach(&body)?;

    let result = binding.submit(&mut body)?;
    println!("first submit valid: {}", result.is_valid());
    print_errors(&result);

    for (target, value) in [
        ("username-input", "alice"),
        ("email-input", "alice@example.com"),
        ("password-input", "longenough1"),
        ("confirm-input", "longenough1"),
    ] {
        let edit = Event::Input {
            target: target.to_string(),
            value: value.to_string(),
        };
        apply_default(&mut body, &edit);
        binding.handle(&mut body, &edit)?;
    }

    let submit = Event::Submit {
        target: binding.form_id().to_string(),
    };
    let now = Instant::now();
    spinners.handle(&mut body, &submit, now);
    match binding.handle(&mut body, &submit)? {
        EventOutcome::Proceed => {
            toasts.success(&mut body, "Registration successful", now);
            println!("second submit accepted");
        }
        outcome => println!("second submit: {outcome:?}"),
    }

    let later = now + config.spinner_reset();
    println!("buttons restored: {}", spinners.restore(&mut body, later));
    println!("toasts expired: {}", toasts.expire(&mut body, later));

    binding.detach();
    Ok(())
}
