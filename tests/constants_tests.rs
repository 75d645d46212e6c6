// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod toggle {
        include!("../src/core/toggle.rs");
    }
    pub use toggle::*;
}

use constants::*;
use crate::core::CONTAINER_TARGETS;

#[test]
fn selectors_and_classes_match_the_markup() {
    assert_eq!(CONTAINER_SELECTOR, ".container_cdl");
    assert_eq!(INFO_SELECTOR, ".info");
    assert_eq!(EMPOWERMENT_SELECTOR, ".empowerment");
    assert_eq!(EXPANDED_CLASS, "expanded");
    assert_eq!(SHOW_CLASS, "showed");
}

#[test]
fn header_lives_inside_the_container() {
    assert!(HEADER_SELECTOR.starts_with(CONTAINER_SELECTOR));
    assert!(HEADER_SELECTOR.ends_with(".header"));
}

#[test]
fn container_targets_are_ordered_and_share_show_class() {
    let selectors: Vec<_> = CONTAINER_TARGETS.iter().map(|t| t.selector).collect();
    assert_eq!(selectors, [".container_cdl", ".info", ".empowerment"]);
    assert_eq!(CONTAINER_TARGETS[0].class, EXPANDED_CLASS);
    assert_eq!(CONTAINER_TARGETS[1].class, SHOW_CLASS);
    assert_eq!(CONTAINER_TARGETS[2].class, SHOW_CLASS);
}
