#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod core;
mod dom;
mod events;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("widgets-web starting");
    // No listeners here: markup with an inline onclick would toggle twice.
    Ok(())
}

/// Expand or collapse the custom download container on the live page.
///
/// Called from the header's inline `onclick`. A missing element throws.
#[wasm_bindgen(js_name = toggleContainer)]
pub fn toggle_container() -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| dom::to_js_error("no document"))?;
    core::toggle_container(&document).map_err(|e| {
        log::warn!("[toggle] {}", e);
        dom::to_js_error(e)
    })
}

/// Wire the header click in Rust, for markup without an inline handler.
#[wasm_bindgen(js_name = wireContainerHeader)]
pub fn wire_container_header() -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| dom::to_js_error("no document"))?;
    events::wire_container_header(&document).map_err(dom::to_js_error)
}
