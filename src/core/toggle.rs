// Show/hide logic for the custom download container.

use crate::constants::{
    CONTAINER_SELECTOR, EMPOWERMENT_SELECTOR, EXPANDED_CLASS, INFO_SELECTOR, SHOW_CLASS,
};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("no element matches selector `{selector}`")]
    MissingElement { selector: String },
    #[error("selector `{selector}` rejected: {message}")]
    Query { selector: String, message: String },
    #[error("class `{class}` could not be toggled: {message}")]
    ClassList { class: String, message: String },
}

/// An element whose class list can be flipped one token at a time.
pub trait ClassToggle {
    /// Negate membership of `class` and return the new membership.
    fn toggle_class(&self, class: &str) -> Result<bool, ToggleError>;
    fn has_class(&self, class: &str) -> bool;
}

/// Lookup capability standing in for the page document.
pub trait SelectorScope {
    type Element: ClassToggle;

    /// First element matching `selector`, or `None` when nothing matches.
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Element>, ToggleError>;
}

/// A selector paired with the class flipped on the element it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub selector: &'static str,
    pub class: &'static str,
}

impl Target {
    pub const fn new(selector: &'static str, class: &'static str) -> Self {
        Self { selector, class }
    }
}

// Container first, then the two panels.
pub const CONTAINER_TARGETS: [Target; 3] = [
    Target::new(CONTAINER_SELECTOR, EXPANDED_CLASS),
    Target::new(INFO_SELECTOR, SHOW_CLASS),
    Target::new(EMPOWERMENT_SELECTOR, SHOW_CLASS),
];

fn lookup<S: SelectorScope>(scope: &S, selector: &str) -> Result<S::Element, ToggleError> {
    scope
        .query_selector(selector)?
        .ok_or_else(|| ToggleError::MissingElement {
            selector: selector.to_string(),
        })
}

/// Expand or collapse the custom download container.
///
/// Lookups and toggles are interleaved: if a selector matches nothing, the
/// targets before it stay toggled and the ones after it are left alone.
pub fn toggle_container<S: SelectorScope>(scope: &S) -> Result<(), ToggleError> {
    toggle_targets(scope, &CONTAINER_TARGETS)
}

/// Flip each target's class in order, looking every element up fresh.
pub fn toggle_targets<S: SelectorScope>(scope: &S, targets: &[Target]) -> Result<(), ToggleError> {
    for target in targets {
        let element = lookup(scope, target.selector)?;
        let now = element.toggle_class(target.class)?;
        log::debug!("[toggle] {} .{} -> {}", target.selector, target.class, now);
    }
    Ok(())
}

/// Targets resolved once into element handles.
///
/// Resolution fails before anything is toggled, so a bound set either flips
/// every element or (on a class list error) stops at the first rejection.
pub struct BoundTargets<E> {
    bound: Vec<(Target, E)>,
}

impl<E: ClassToggle> BoundTargets<E> {
    pub fn resolve<S>(scope: &S, targets: &[Target]) -> Result<Self, ToggleError>
    where
        S: SelectorScope<Element = E>,
    {
        let bound = targets
            .iter()
            .map(|t| lookup(scope, t.selector).map(|el| (*t, el)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bound })
    }

    pub fn toggle(&self) -> Result<(), ToggleError> {
        for (target, element) in &self.bound {
            let now = element.toggle_class(target.class)?;
            log::debug!("[toggle] {} .{} -> {}", target.selector, target.class, now);
        }
        Ok(())
    }

    /// Current membership of each target's class, in target order.
    pub fn memberships(&self) -> Vec<bool> {
        self.bound
            .iter()
            .map(|(target, element)| element.has_class(target.class))
            .collect()
    }
}

/// One-shot flag for listeners that must be attached at most once per page.
///
/// Listeners are leaked for the page lifetime, so wiring the same header
/// twice would flip every target twice per click.
pub struct WireOnce {
    wired: AtomicBool,
}

impl WireOnce {
    pub const fn new() -> Self {
        Self {
            wired: AtomicBool::new(false),
        }
    }

    /// True for the first caller only.
    pub fn claim(&self) -> bool {
        !self.wired.swap(true, Ordering::SeqCst)
    }

    /// Give the claim back after a failed wiring attempt.
    pub fn release(&self) {
        self.wired.store(false, Ordering::SeqCst);
    }
}

impl Default for WireOnce {
    fn default() -> Self {
        Self::new()
    }
}
