//! Book list search and category filtering.
//!
//! Every book is a `.book-card` element wrapped in a grid cell. Filtering
//! hides or shows the wrapper, never the card itself, so the grid reflows.

use storedom::{Element, collect_by_class, find_element, find_element_mut, parent_id};

pub const BOOK_CARD_CLASS: &str = "book-card";
pub const BOOK_TITLE_CLASS: &str = "book-title";
pub const BOOK_AUTHOR_CLASS: &str = "book-author";

/// Case-insensitive substring match against title or author.
/// An empty term matches everything.
pub fn matches_search(title: &str, author: &str, term: &str) -> bool {
    let term = term.to_lowercase();
    title.to_lowercase().contains(&term) || author.to_lowercase().contains(&term)
}

/// Exact category match. An empty selection matches everything.
pub fn matches_category(category: Option<&str>, selected: &str) -> bool {
    selected.is_empty() || category == Some(selected)
}

/// Text of the first descendant of `card` carrying `class`.
fn card_text(card: &Element, class: &str) -> String {
    collect_by_class(card, class)
        .first()
        .and_then(|id| find_element(card, id))
        .map(Element::text_content)
        .unwrap_or_default()
}

/// Show the wrappers of cards for which `keep` returns true, hide the rest.
/// Returns the number of cards left visible.
fn filter_cards<F>(root: &mut Element, keep: F) -> usize
where
    F: Fn(&Element) -> bool,
{
    let mut visible = 0;

    for card_id in collect_by_class(root, BOOK_CARD_CLASS) {
        let Some(card) = find_element(root, &card_id) else {
            continue;
        };
        let show = keep(card);
        if show {
            visible += 1;
        }

        let Some(wrapper_id) = parent_id(root, &card_id) else {
            continue;
        };
        if let Some(wrapper) = find_element_mut(root, &wrapper_id) {
            wrapper.hidden = !show;
        }
    }

    visible
}

/// Search handler: filter the book list by title or author.
pub fn search(root: &mut Element, term: &str) -> usize {
    let visible = filter_cards(root, |card| {
        matches_search(
            &card_text(card, BOOK_TITLE_CLASS),
            &card_text(card, BOOK_AUTHOR_CLASS),
            term,
        )
    });
    log::debug!("[catalog] search {:?}: {} visible", term, visible);
    visible
}

/// Category select handler: keep only cards whose `data-category` matches.
pub fn filter_category(root: &mut Element, selected: &str) -> usize {
    let visible = filter_cards(root, |card| {
        matches_category(card.get_data("category").map(String::as_str), selected)
    });
    log::debug!("[catalog] category {:?}: {} visible", selected, visible);
    visible
}
