#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn theme_name_matches_mode() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn toggle_icon_swaps_sun_and_moon() {
    assert_eq!(toggle_icon(true), "fas fa-sun");
    assert_eq!(toggle_icon(false), "fas fa-moon");
}

#[test]
fn system_preference_is_false_in_non_hydrate_tests() {
    assert!(!system_prefers_dark());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
