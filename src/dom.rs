use crate::core::{ClassToggle, SelectorScope, ToggleError};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    element: &web::Element,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    element
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("click listener rejected: {}", js_message(&e)))?;
    closure.forget();
    Ok(())
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", value))
}

impl SelectorScope for web::Document {
    type Element = web::Element;

    fn query_selector(&self, selector: &str) -> Result<Option<web::Element>, ToggleError> {
        web::Document::query_selector(self, selector).map_err(|e| ToggleError::Query {
            selector: selector.to_string(),
            message: js_message(&e),
        })
    }
}

impl ClassToggle for web::Element {
    fn toggle_class(&self, class: &str) -> Result<bool, ToggleError> {
        self.class_list()
            .toggle(class)
            .map_err(|e| ToggleError::ClassList {
                class: class.to_string(),
                message: js_message(&e),
            })
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

/// Convert a toggle failure into a JS `Error` so it is thrown to the caller.
pub fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
