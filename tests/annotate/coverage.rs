//! Page-coverage expansion: ranges, literals, and subsection markers.

use clauseref::on_page_set;
use std::collections::HashSet;

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn integer_range_expands_every_member() {
    assert_eq!(on_page_set("3-6", ""), set(&["3", "4", "5", "6"]));
}

#[test]
fn dotted_range_expands_under_shared_prefix() {
    assert_eq!(
        on_page_set("2.1-2.4", ""),
        set(&["2.1", "2.2", "2.3", "2.4"])
    );
}

#[test]
fn single_number_stays_literal() {
    assert_eq!(on_page_set("7", ""), set(&["7"]));
}

#[test]
fn empty_number_yields_empty_set() {
    assert!(on_page_set("", "5 (1) Text on the page").is_empty());
}

#[test]
fn page_markers_contribute_base_and_composed_ids() {
    let content = "5 (1) Some text\nMore prose follows.";
    let on_page = on_page_set("5", content);
    assert!(on_page.contains("5"));
    assert!(on_page.contains("5(1)"));
}

#[test]
fn markers_across_many_lines_accumulate() {
    let content = "5 (1) First rule.\n5 (2) Second rule.\n6 (1) Imported rule.";
    let on_page = on_page_set("5", content);
    assert_eq!(on_page, set(&["5", "5(1)", "5(2)", "6", "6(1)"]));
}

#[test]
fn mid_line_mentions_are_not_markers() {
    let on_page = on_page_set("9", "as stated in 5 (1) above");
    assert_eq!(on_page, set(&["9"]));
}

#[test]
fn range_page_and_markers_combine() {
    let content = "2.1 (1) Reconciliation happens monthly.";
    let on_page = on_page_set("2.1-2.4", content);
    assert_eq!(
        on_page,
        set(&["2.1", "2.2", "2.3", "2.4", "2.1(1)"])
    );
}
