use std::any::Any;
use std::cell::RefCell;

use contracts::shared::date_input::{
    DateInputData, DateInputProps, DateInputState, STATE_KEY_VALUE,
};
use js_sys::{Function, Reflect};
use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use super::registry::{InstanceId, InstanceRegistry};
use crate::app::DateInputRoot;

/// Child of the host container that the widget renders into; the first
/// class is preferred, `react-root` is the markup older hosts still emit.
pub const ROOT_CLASSES: [&str; 2] = ["date-input-root", "react-root"];

/// Ошибки монтирования виджета
#[derive(Debug, Error)]
pub enum MountError {
    #[error("Unexpected: date input root element not found")]
    RootNotFound,

    #[error("Unexpected: date input root is not an HTML element")]
    RootNotHtml,

    #[error("invalid root selector: {0}")]
    Selector(String),
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Destination of value changes.
#[derive(Clone)]
pub enum ChangeSink {
    /// `onChange` (or the legacy `on_change`) function from the host data
    Callback(Function),
    /// The host's `setStateValue(key, value)`
    SetState(Function),
}

impl ChangeSink {
    /// Unify the change callback aliases into one sink; an explicit callback
    /// in `data` wins over `setStateValue`.
    pub fn from_args(data: &JsValue, set_state_value: Function) -> Self {
        ["onChange", "on_change"]
            .iter()
            .find_map(|name| {
                Reflect::get(data, &JsValue::from_str(name))
                    .ok()
                    .and_then(|value| value.dyn_into::<Function>().ok())
            })
            .map(ChangeSink::Callback)
            .unwrap_or(ChangeSink::SetState(set_state_value))
    }

    fn emit(&self, state: &DateInputState) {
        let value = state
            .value
            .as_deref()
            .map(JsValue::from_str)
            .unwrap_or(JsValue::NULL);

        let result = match self {
            ChangeSink::Callback(callback) => callback.call1(&JsValue::NULL, &value),
            ChangeSink::SetState(set_state_value) => set_state_value.call2(
                &JsValue::NULL,
                &JsValue::from_str(STATE_KEY_VALUE),
                &value,
            ),
        };
        if let Err(err) = result {
            log::error!("host rejected date input value: {:?}", err);
        }
    }
}

struct MountedRoot {
    props: RwSignal<DateInputProps>,
    sink: ChangeSink,
    /// `UnmountHandle` of the Leptos view; dropping it detaches the view
    view: Box<dyn Any>,
}

thread_local! {
    static ROOTS: RefCell<InstanceRegistry<Element, MountedRoot>> =
        RefCell::new(InstanceRegistry::new());
}

/// Render (or re-render) the widget inside `parent`.
///
/// The first call for a container creates the Leptos root inside its
/// root child (see [`ROOT_CLASSES`]); later calls with the same container only push
/// the new configuration into the live instance.
pub fn mount(
    parent: &Element,
    data: &JsValue,
    set_state_value: Function,
) -> Result<InstanceId, MountError> {
    let props = read_props(data);
    let sink = ChangeSink::from_args(data, set_state_value);

    let existing = ROOTS.with(|roots| {
        let mut roots = roots.borrow_mut();
        let id = roots.id_of(parent)?;
        let root = roots.get_mut(parent)?;
        root.sink = sink.clone();
        Some((id, root.props))
    });
    if let Some((id, signal)) = existing {
        // Set outside the registry borrow: effects may call back into the host.
        signal.set(props);
        return Ok(id);
    }

    let root_element = find_root(parent)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::RootNotHtml)?;

    let id = ROOTS.with(|roots| roots.borrow_mut().allocate_id());
    let props = RwSignal::new(props);
    let on_change = Callback::new(move |value: Option<String>| emit(id, DateInputState { value }));

    let handle = leptos::mount::mount_to(root_element, move || {
        view! { <DateInputRoot props=props on_change=on_change /> }
    });

    let replaced = ROOTS.with(|roots| {
        roots.borrow_mut().insert(
            parent.clone(),
            id,
            MountedRoot {
                props,
                sink,
                view: Box::new(handle),
            },
        )
    });
    if let Some(replaced) = replaced {
        release(replaced);
    }

    log::debug!("date input {:?} mounted", id);
    Ok(id)
}

fn find_root(parent: &Element) -> Result<Element, MountError> {
    for selector in root_selectors() {
        let found = parent
            .query_selector(&selector)
            .map_err(|err| MountError::Selector(format!("{:?}", err)))?;
        if let Some(root) = found {
            return Ok(root);
        }
    }
    Err(MountError::RootNotFound)
}

/// Selectors tried in order of preference.
fn root_selectors() -> impl Iterator<Item = String> {
    ROOT_CLASSES.iter().map(|class| format!(".{}", class))
}

/// Detach the view of `id` and release its registry entry. Idempotent.
pub fn unmount(id: InstanceId) {
    let removed = ROOTS.with(|roots| roots.borrow_mut().remove_by_id(id));
    match removed {
        Some(root) => {
            release(root);
            log::debug!("date input {:?} unmounted", id);
        }
        None => log::debug!("date input {:?} already unmounted", id),
    }
}

fn release(root: MountedRoot) {
    let MountedRoot { props, view, .. } = root;
    drop(view);
    props.dispose();
}

fn emit(id: InstanceId, state: DateInputState) {
    // Clone the sink out so the host may re-enter `mount` synchronously.
    let sink = ROOTS.with(|roots| roots.borrow().get_by_id(id).map(|root| root.sink.clone()));
    match sink {
        Some(sink) => sink.emit(&state),
        None => log::warn!("value change from unmounted date input {:?} dropped", id),
    }
}

/// Host data with defaults applied; malformed data falls back to defaults.
fn read_props(data: &JsValue) -> DateInputProps {
    if data.is_undefined() || data.is_null() {
        return DateInputProps::default();
    }
    match serde_wasm_bindgen::from_value::<DateInputData>(data.clone()) {
        Ok(data) => data.into(),
        Err(err) => {
            log::warn!("malformed date input data ({}), using defaults", err);
            DateInputProps::default()
        }
    }
}
