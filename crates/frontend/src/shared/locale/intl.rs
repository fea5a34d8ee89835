//! Week metadata from the browser `Intl.Locale` API.
//!
//! Firefox does not expose `getWeekInfo` / `weekInfo` yet, in which case
//! the lookup reports [`LocaleLookupError::Unsupported`].

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use super::{LocaleLookupError, WeekInfo, WeekInfoSource};

/// [`WeekInfoSource`] backed by `window.navigator` and `Intl.Locale`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntlWeekInfoSource;

impl WeekInfoSource for IntlWeekInfoSource {
    fn ui_locale(&self) -> Option<String> {
        web_sys::window().and_then(|w| w.navigator().language())
    }

    fn week_info(&self, tag: &str) -> Result<WeekInfo, LocaleLookupError> {
        let locale = construct_locale(tag)?;

        let info = match get_function(&locale, "getWeekInfo") {
            Some(get_week_info) => get_week_info
                .call0(&locale)
                .map_err(|_| LocaleLookupError::Unsupported)?,
            None => Reflect::get(&locale, &JsValue::from_str("weekInfo"))
                .map_err(|_| LocaleLookupError::Unsupported)?,
        };

        if info.is_null() || info.is_undefined() {
            return Err(LocaleLookupError::Unsupported);
        }

        serde_wasm_bindgen::from_value(info).map_err(|err| {
            log::debug!("unexpected weekInfo shape for '{}': {}", tag, err);
            LocaleLookupError::Unsupported
        })
    }
}

/// `new Intl.Locale(tag)`; a `RangeError` from the constructor means the tag is invalid.
fn construct_locale(tag: &str) -> Result<JsValue, LocaleLookupError> {
    let intl = Reflect::get(&js_sys::global(), &JsValue::from_str("Intl"))
        .map_err(|_| LocaleLookupError::Unsupported)?;
    let ctor = get_function(&intl, "Locale").ok_or(LocaleLookupError::Unsupported)?;

    Reflect::construct(&ctor, &Array::of1(&JsValue::from_str(tag)))
        .map_err(|_| LocaleLookupError::InvalidTag(tag.to_string()))
}

fn get_function(target: &JsValue, name: &str) -> Option<Function> {
    if !target.is_object() {
        return None;
    }
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}
