use storedom::{Element, find_element};
use storefront::catalog::{filter_category, matches_category, matches_search, search};

fn card(id: &str, title: &str, author: &str, category: &str) -> Element {
    Element::div().id(format!("col-{id}")).child(
        Element::div()
            .id(id)
            .class("book-card")
            .data("category", category)
            .child(Element::text(title).class("book-title"))
            .child(Element::text(author).class("book-author")),
    )
}

fn shelf() -> Element {
    Element::div()
        .id("shelf")
        .child(card("dune", "Dune", "Frank Herbert", "Fiction"))
        .child(card("sapiens", "Sapiens", "Yuval Noah Harari", "History"))
        .child(card("rust", "The Rust Programming Language", "Steve Klabnik", "Technology"))
}

fn visible(root: &Element) -> Vec<String> {
    ["dune", "sapiens", "rust"]
        .iter()
        .filter(|id| !find_element(root, &format!("col-{id}")).unwrap().hidden)
        .map(|id| id.to_string())
        .collect()
}

#[test]
fn test_matches_search_is_case_insensitive() {
    assert!(matches_search("Dune", "Frank Herbert", "dUNE"));
    assert!(matches_search("Dune", "Frank Herbert", "herb"));
    assert!(matches_search("Dune", "Frank Herbert", ""));
    assert!(!matches_search("Dune", "Frank Herbert", "rust"));
}

#[test]
fn test_matches_category() {
    assert!(matches_category(Some("Fiction"), ""));
    assert!(matches_category(None, ""));
    assert!(matches_category(Some("Fiction"), "Fiction"));
    assert!(!matches_category(Some("Fiction"), "fiction"));
    assert!(!matches_category(None, "Fiction"));
}

#[test]
fn test_search_hides_wrappers_of_non_matching_cards() {
    let mut root = shelf();
    assert_eq!(search(&mut root, "the"), 1);
    assert_eq!(visible(&root), vec!["rust"]);
    // The card itself stays visible; only its wrapper is hidden.
    assert!(!find_element(&root, "dune").unwrap().hidden);
}

#[test]
fn test_search_by_author() {
    let mut root = shelf();
    assert_eq!(search(&mut root, "HARARI"), 1);
    assert_eq!(visible(&root), vec!["sapiens"]);
}

#[test]
fn test_clearing_search_shows_everything() {
    let mut root = shelf();
    search(&mut root, "zzz");
    assert!(visible(&root).is_empty());
    assert_eq!(search(&mut root, ""), 3);
    assert_eq!(visible(&root).len(), 3);
}

#[test]
fn test_category_filter() {
    let mut root = shelf();
    assert_eq!(filter_category(&mut root, "History"), 1);
    assert_eq!(visible(&root), vec!["sapiens"]);

    assert_eq!(filter_category(&mut root, ""), 3);
    assert_eq!(visible(&root).len(), 3);

    assert_eq!(filter_category(&mut root, "Poetry"), 0);
}
