// DOM contract shared with the widget markup and stylesheet.
// Renaming any of these in the markup breaks the toggle silently.

// Selectors
pub const CONTAINER_SELECTOR: &str = ".container_cdl";
pub const INFO_SELECTOR: &str = ".info";
pub const EMPOWERMENT_SELECTOR: &str = ".empowerment";
pub const HEADER_SELECTOR: &str = ".container_cdl .header"; // clickable "Custom Download" title

// Class names
pub const EXPANDED_CLASS: &str = "expanded";
pub const SHOW_CLASS: &str = "showed"; // shared by both panels

// Console logging
pub const LOG_LEVEL: log::Level = log::Level::Info;
