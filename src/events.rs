use crate::constants::HEADER_SELECTOR;
use crate::core::{BoundTargets, SelectorScope, WireOnce, CONTAINER_TARGETS};
use crate::dom;
use web_sys as web;

static HEADER_WIRED: WireOnce = WireOnce::new();

/// Attach a click handler to the container header that expands/collapses it.
///
/// Targets are resolved here, once; a page missing any of them fails at
/// wiring time instead of on every click. Only the first successful call
/// attaches a listener; later calls are no-ops.
pub fn wire_container_header(document: &web::Document) -> anyhow::Result<()> {
    if !HEADER_WIRED.claim() {
        log::warn!("[wire] {} already wired; ignoring", HEADER_SELECTOR);
        return Ok(());
    }
    attach_header_listener(document).inspect_err(|_| HEADER_WIRED.release())?;
    log::info!("[wire] click listener on {}", HEADER_SELECTOR);
    Ok(())
}

fn attach_header_listener(document: &web::Document) -> anyhow::Result<()> {
    let header = SelectorScope::query_selector(document, HEADER_SELECTOR)?
        .ok_or_else(|| anyhow::anyhow!("missing {}", HEADER_SELECTOR))?;
    let targets = BoundTargets::resolve(document, &CONTAINER_TARGETS)?;

    dom::add_click_listener(&header, move || {
        if let Err(e) = targets.toggle() {
            log::error!("[click] container toggle failed: {}", e);
            return;
        }
        log::debug!("[click] container state {:?}", targets.memberships());
    })
}
