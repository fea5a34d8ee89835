pub mod app;
pub mod host;
pub mod shared;

use std::sync::Once;

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

static LOGGING: Once = Once::new();

/// Initializes logging using the `log` crate; safe to call repeatedly.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Warn
        };
        _ = console_log::init_with_level(level);
        console_error_panic_hook::set_once();
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
}

/// Mount the date input into `parent_element` and return its teardown function.
///
/// Calling it again with the same element updates the live instance.
#[wasm_bindgen(js_name = mountDateInput)]
pub fn mount_date_input(
    parent_element: Element,
    data: JsValue,
    set_state_value: Function,
) -> Result<Function, JsValue> {
    init_logging();

    let id = host::mount(&parent_element, &data, set_state_value).map_err(|err| {
        log::error!("failed to mount date input: {}", err);
        JsValue::from(err)
    })?;

    // The host may call teardown more than once; `unmount` is idempotent.
    let teardown = Closure::<dyn Fn()>::new(move || host::unmount(id));
    Ok(teardown.into_js_value().unchecked_into())
}

/// Component entry taking the host's `{ parentElement, data, setStateValue }` args object.
#[wasm_bindgen(js_name = dateInputComponent)]
pub fn date_input_component(args: JsValue) -> Result<Function, JsValue> {
    let field = |name: &str| Reflect::get(&args, &JsValue::from_str(name));

    let parent_element = field("parentElement")?
        .dyn_into::<Element>()
        .map_err(|_| JsValue::from(js_sys::Error::new("parentElement is not an element")))?;
    let set_state_value = field("setStateValue")?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from(js_sys::Error::new("setStateValue is not a function")))?;

    mount_date_input(parent_element, field("data")?, set_state_value)
}
