#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn confirm_declines_outside_browser() {
    assert!(!confirm("You sure?"));
}

#[test]
fn scroll_y_is_zero_outside_browser() {
    assert_eq!(scroll_y(), 0.0);
}
