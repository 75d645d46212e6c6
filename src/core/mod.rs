//! Platform-free core of the widget frontend.
//!
//! Nothing here touches a browser API. Callers hand in a [`SelectorScope`]
//! (the live document in the web frontend, an in-memory tree in tests) and
//! the toggle works purely through the [`ClassToggle`] handles it returns.

pub mod toggle;

pub use toggle::*;
