//! Price, discount and rating formatting.

use storedom::{Element, collect_by_class, find_element_mut};

use crate::config::StorefrontConfig;

pub const PRICE_CLASS: &str = "book-price";
pub const RATING_CLASS: &str = "rating-stars";

/// Format a price with two decimals, e.g. `NPR 450.00`.
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{currency} {price:.2}")
}

/// Parse the leading decimal number of `input`, ignoring trailing text.
fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

/// Re-format a price label such as `"NPR 450"` or `" 99.5 "`.
///
/// The first currency label is stripped before parsing. Returns `None` when no
/// number can be read, in which case the label should be left as is.
pub fn normalize_price_label(label: &str, currency: &str) -> Option<String> {
    let amount = label.replacen(currency, "", 1);
    parse_leading_float(amount.trim()).map(|price| format_price(price, currency))
}

/// Whole-percent discount between two prices, rounded half up.
/// `None` when the original price is zero.
pub fn discount_percent(original: f64, discounted: f64) -> Option<i64> {
    if original == 0.0 {
        return None;
    }
    let percent = (original - discounted) / original * 100.0;
    Some((percent + 0.5).floor() as i64)
}

/// One slot of a five-star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    /// Icon classes for this star.
    pub fn classes(&self) -> &'static [&'static str] {
        match self {
            Self::Full => &["fas", "fa-star"],
            Self::Half => &["fas", "fa-star-half-alt"],
            Self::Empty => &["far", "fa-star"],
        }
    }
}

/// Five star slots for `rating`: `floor(rating)` full stars, a half star in
/// the next slot when the rating is fractional, empty stars after that.
pub fn rating_stars(rating: f64) -> [Star; 5] {
    let full = rating.floor();
    let fractional = rating.fract() != 0.0;

    std::array::from_fn(|slot| {
        let position = (slot + 1) as f64;
        if position <= full {
            Star::Full
        } else if fractional && position == rating.ceil() {
            Star::Half
        } else {
            Star::Empty
        }
    })
}

/// Re-format every `.book-price` label in the page.
/// Returns the number of labels rewritten.
pub fn apply_price_labels(root: &mut Element, config: &StorefrontConfig) -> usize {
    let mut rewritten = 0;
    for id in collect_by_class(root, PRICE_CLASS) {
        let Some(label) = find_element_mut(root, &id) else {
            continue;
        };
        match normalize_price_label(&label.text_content(), &config.currency) {
            Some(text) => {
                label.set_text(text);
                rewritten += 1;
            }
            None => log::debug!("[format] unreadable price label in {}", id),
        }
    }
    rewritten
}

/// Fill every `.rating-stars` element from its `data-rating` value.
/// Elements without a readable rating are left untouched.
pub fn apply_rating_stars(root: &mut Element) -> usize {
    let mut rendered = 0;
    for id in collect_by_class(root, RATING_CLASS) {
        let Some(container) = find_element_mut(root, &id) else {
            continue;
        };
        let Some(rating) = container
            .get_data("rating")
            .and_then(|r| parse_leading_float(r))
        else {
            continue;
        };

        let icons = rating_stars(rating)
            .iter()
            .map(|star| {
                star.classes()
                    .iter()
                    .fold(Element::div().tag("i"), |el, class| el.class(*class))
            })
            .collect();
        container.set_children(icons);
        rendered += 1;
    }
    rendered
}
