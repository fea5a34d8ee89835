use contracts::shared::date_input::DateInputProps;
use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::shared::components::date_input::DateInput;

/// Root view of one mounted widget instance.
#[component]
pub fn DateInputRoot(
    props: RwSignal<DateInputProps>,
    on_change: Callback<Option<String>>,
) -> impl IntoView {
    view! {
        <ConfigProvider>
            <div style="display: flex; justify-content: center; align-items: center; height: 100%; width: 100%;">
                <DateInput props=props on_change=on_change />
            </div>
        </ConfigProvider>
    }
}
