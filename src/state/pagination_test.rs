use super::*;

fn page_sizes(len: usize, page_size: usize) -> Vec<usize> {
    let mut pager = Pagination::new(len, page_size).unwrap();
    let mut sizes = Vec::new();
    loop {
        sizes.push(pager.visible_range().len());
        if pager.next_disabled() {
            break;
        }
        pager.next();
    }
    sizes
}

// =============================================================
// Page counts
// =============================================================

#[test]
fn page_count_is_ceiling_division() {
    assert_eq!(page_count_for(0, 4), 0);
    assert_eq!(page_count_for(1, 4), 1);
    assert_eq!(page_count_for(4, 4), 1);
    assert_eq!(page_count_for(5, 4), 2);
    assert_eq!(page_count_for(8, 4), 2);
    assert_eq!(page_count_for(10, 4), 3);
    assert_eq!(page_count_for(10, 0), 0);
}

#[test]
fn ten_items_four_per_page_gives_four_four_two() {
    assert_eq!(page_sizes(10, 4), vec![4, 4, 2]);
}

#[test]
fn exact_multiple_has_no_empty_trailing_page() {
    assert_eq!(page_sizes(8, 4), vec![4, 4]);
}

#[test]
fn every_page_shows_its_slice() {
    for len in 2..=23 {
        for page_size in 1..len {
            let mut pager = Pagination::new(len, page_size).unwrap();
            assert_eq!(pager.page_count(), len.div_ceil(page_size));
            for k in 0..pager.page_count() {
                assert_eq!(pager.go_to(k), k);
                let start = k * page_size;
                assert_eq!(pager.visible_range(), start..(start + page_size).min(len));
            }
        }
    }
}

// =============================================================
// No-op cases
// =============================================================

#[test]
fn single_page_or_less_does_not_paginate() {
    assert!(Pagination::new(0, 4).is_none());
    assert!(Pagination::new(3, 4).is_none());
    assert!(Pagination::new(4, 4).is_none());
}

#[test]
fn zero_page_size_does_not_paginate() {
    assert!(Pagination::new(10, 0).is_none());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn last_page_shows_only_remaining_items() {
    let mut pager = Pagination::new(10, 4).unwrap();
    assert_eq!(pager.go_to(2), 2);
    assert_eq!(pager.visible_range(), 8..10);
    assert!(pager.is_visible(8));
    assert!(pager.is_visible(9));
    assert!(!pager.is_visible(7));
}

#[test]
fn next_and_previous_clamp() {
    let mut pager = Pagination::new(10, 4).unwrap();
    assert_eq!(pager.previous(), 0);
    assert_eq!(pager.next(), 1);
    assert_eq!(pager.next(), 2);
    assert_eq!(pager.next(), 2);
    assert_eq!(pager.previous(), 1);
    assert_eq!(pager.go_to(99), 2);
}

#[test]
fn buttons_disable_only_at_edges() {
    let mut pager = Pagination::new(10, 4).unwrap();
    assert!(pager.previous_disabled());
    assert!(!pager.next_disabled());

    pager.next();
    assert!(!pager.previous_disabled());
    assert!(!pager.next_disabled());

    pager.next();
    assert!(!pager.previous_disabled());
    assert!(pager.next_disabled());
}

#[test]
fn two_page_list_disables_each_button_on_its_edge() {
    let mut pager = Pagination::new(5, 4).unwrap();
    assert!(pager.previous_disabled());
    assert!(!pager.next_disabled());
    pager.next();
    assert!(!pager.previous_disabled());
    assert!(pager.next_disabled());
}

// =============================================================
// Height
// =============================================================

#[test]
fn sticky_height_never_shrinks() {
    assert_eq!(sticky_height(0, 120), 120);
    assert_eq!(sticky_height(120, 80), 120);
    assert_eq!(sticky_height(120, 140), 140);
}
