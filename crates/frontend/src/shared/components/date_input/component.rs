use chrono::{Local, NaiveDate};
use contracts::shared::date_input::DateInputProps as DateInputConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::calendar_popover::CalendarPopover;
use super::state::{InputContext, InteractionState, Selection, ValueChange};
use crate::shared::calendar::MonthView;
use crate::shared::date_utils::{
    format_display, parse_bound, parse_canonical, translate_format_tokens,
};
use crate::shared::locale::resolve;

const HEADER_BG_COLOR: &str = "rgb(240, 242, 246)";
const DATE_SELECTED_COLOR: &str = "rgb(255, 75, 75)";
const ERROR_COLOR: &str = "#b00020";

/// DateInput component with a localized calendar popover
///
/// The displayed date always comes from `props.value`; picks and clears are
/// reported through `on_change` in the canonical `YYYY/MM/DD` pattern and
/// the host is expected to echo them back as new props.
#[component]
pub fn DateInput(
    /// Host configuration with defaults applied
    #[prop(into)]
    props: Signal<DateInputConfig>,
    /// Callback when the date changes (receives `YYYY/MM/DD`, `None` when cleared)
    on_change: Callback<Option<String>>,
) -> impl IntoView {
    let locale = Memo::new(move |_| props.with(|p| resolve(Some(p.locale.as_str()))));
    let pattern = Memo::new(move |_| props.with(|p| translate_format_tokens(&p.format)));
    let selected = Memo::new(move |_| props.with(|p| parse_canonical(p.value.as_deref())));
    let min = Memo::new(move |_| props.with(|p| parse_bound(p.min.as_deref())));
    let max = Memo::new(move |_| props.with(|p| parse_bound(p.max.as_deref())));
    let disabled = Memo::new(move |_| props.with(|p| p.disabled));

    let interaction = RwSignal::new(InteractionState::default());
    // Text typed by the user that has not been accepted yet
    let draft = RwSignal::new(None::<String>);
    let open = RwSignal::new(false);
    let today = Local::now().date_naive();
    let view_month = RwSignal::new(MonthView::of(today));

    // New configuration from the host resets the transient flags.
    Effect::watch(
        move || props.get(),
        move |_, _, _| {
            interaction.set(InteractionState::default());
            draft.set(None);
        },
        false,
    );

    let emit = move |change: ValueChange| {
        log::debug!("date input changed: {:?}", change.0);
        on_change.run(change.0);
    };

    let open_popover = move || {
        if disabled.get_untracked() || open.get_untracked() {
            return;
        }
        view_month.set(MonthView::initial(
            selected.get_untracked(),
            today,
            min.get_untracked(),
            max.get_untracked(),
        ));
        open.set(true);
    };

    let close_popover = move || {
        if !open.get_untracked() {
            return;
        }
        open.set(false);
        let last_value = props.with_untracked(|p| p.value.clone());
        if interaction
            .try_update(|s| s.on_close(last_value.as_deref()))
            .unwrap_or(false)
        {
            draft.set(None);
        }
    };

    let on_pick = Callback::new(move |day: NaiveDate| {
        if disabled.get_untracked() {
            return;
        }
        draft.set(None);
        if let Some(change) = interaction.try_update(|s| s.on_select(Selection::Single(Some(day)))) {
            emit(change);
        }
        // Defer to next tick: the popover is removed while its click event is still dispatching.
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            close_popover();
        });
    });

    let on_dismiss = Callback::new(move |_: ()| close_popover());

    let on_clear = move |_| {
        if disabled.get_untracked() {
            return;
        }
        draft.set(None);
        if let Some(change) = interaction.try_update(|s| s.on_clear()) {
            emit(change);
        }
    };

    let commit_text = move |text: String| {
        let locale = locale.get_untracked();
        let pattern = pattern.get_untracked();
        let ctx = InputContext {
            pattern: &pattern,
            locale: &locale,
            min: min.get_untracked(),
            max: max.get_untracked(),
            clearable: props.with_untracked(|p| p.clearable),
        };
        if let Some(change) = interaction
            .try_update(|s| s.on_text_commit(&text, &ctx))
            .flatten()
        {
            draft.set(None);
            emit(change);
        }
    };

    let display_text = move || {
        draft.get().unwrap_or_else(|| {
            selected
                .get()
                .map(|date| format_display(date, &pattern.get(), &locale.get()))
                .unwrap_or_default()
        })
    };

    let field_class = move || {
        let mut class = String::from("date-input-intl__field");
        if interaction.with(|s| s.has_error()) {
            class.push_str(" date-input-intl__field--error");
        }
        if disabled.get() {
            class.push_str(" date-input-intl__field--disabled");
        }
        if open.get() {
            class.push_str(" date-input-intl__field--open");
        }
        class
    };

    let error_text = move || interaction.with(|s| s.error.as_ref().map(|e| e.to_string()));
    let show_clear = move || {
        props.with(|p| p.clearable) && !disabled.get() && selected.get().is_some()
    };

    view! {
        <style>
            {format!(
                "
                .date-input-intl {{ position: relative; box-sizing: border-box; font-size: 1rem; }}
                .date-input-intl__label {{ display: block; margin-bottom: 0.25rem; font-size: 0.875rem; }}
                .date-input-intl__field {{
                    display: flex; align-items: center; box-sizing: border-box; max-width: 100%;
                    border: 1px solid var(--colorNeutralStroke1, #d1d1d1); border-radius: 0.5rem;
                    background: var(--colorNeutralBackground1, #fff); line-height: 1.5;
                }}
                .date-input-intl__field:focus-within, .date-input-intl__field--open {{ border-color: {selected}; }}
                .date-input-intl__field--error {{ border-color: {error}; }}
                .date-input-intl__field--error input {{ color: {error}; }}
                .date-input-intl__field--disabled {{ opacity: 0.6; cursor: not-allowed; }}
                .date-input-intl__field input {{
                    flex: 1; min-width: 0; border: none; outline: none; background: transparent;
                    padding: 0.5rem; font: inherit; font-weight: normal; color: inherit;
                }}
                .date-input-intl__field input::placeholder {{ color: #666666; }}
                .date-input-intl__clear {{
                    border: none; background: transparent; cursor: pointer;
                    padding: 0 0.5rem; font-size: 1.1rem; color: {error};
                }}
                .date-input-intl__backdrop {{ position: fixed; inset: 0; z-index: 999; }}
                .date-input-intl__popover {{
                    position: absolute; left: 0; top: 100%; margin-top: 1px; z-index: 1000;
                    background: var(--colorNeutralBackground1, #fff); border-radius: 0.5rem;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.16); width: max-content;
                }}
                .date-input-intl__header {{
                    display: flex; align-items: center; justify-content: space-between;
                    background: {header}; padding: 0.25rem;
                    border-top-left-radius: 0.5rem; border-top-right-radius: 0.5rem;
                }}
                .date-input-intl__title {{ font-weight: 600; }}
                .date-input-intl__weekdays, .date-input-intl__grid {{
                    display: grid; grid-template-columns: repeat(7, 42px); padding: 0 0.25rem;
                }}
                .date-input-intl__weekdays {{ background: {header}; padding-bottom: 0.25rem; }}
                .date-input-intl__weekday {{ text-align: center; font-size: 0.8rem; color: #666666; }}
                .date-input-intl__grid {{ padding-bottom: 0.5rem; }}
                .date-input-intl__day {{
                    width: 42px; height: 40px; line-height: 1.6; font-size: 1rem;
                    border: 1px solid transparent; border-radius: 50%;
                    background: transparent; cursor: pointer; color: inherit;
                }}
                .date-input-intl__day:hover:not(:disabled) {{ border-color: {selected}; }}
                .date-input-intl__day--outside {{ color: #9a9a9a; }}
                .date-input-intl__day--today {{ font-weight: 700; }}
                .date-input-intl__day--selected {{ background: {selected}; color: #fff; }}
                .date-input-intl__day:disabled {{ color: #c8c8c8; cursor: not-allowed; }}
                ",
                selected = DATE_SELECTED_COLOR,
                error = ERROR_COLOR,
                header = HEADER_BG_COLOR,
            )}
        </style>

        <div
            class="date-input-intl"
            data-testid="stDateInputIntl"
            style=move || props.with(|p| p.width.css())
        >
            {move || props.with(|p| p.label.clone()).map(|label| view! {
                <label
                    class="date-input-intl__label"
                    title=move || props.with(|p| p.help.clone())
                >
                    {label}
                </label>
            })}

            <div class=field_class title=error_text>
                <input
                    type="text"
                    data-testid="stDateInputField"
                    autocomplete="off"
                    placeholder=move || props.with(|p| p.format.clone())
                    disabled=move || disabled.get()
                    aria-invalid=move || interaction.with(|s| s.has_error()).to_string()
                    prop:value=display_text
                    on:focus=move |_| open_popover()
                    on:click=move |_| open_popover()
                    on:input=move |ev| draft.set(Some(event_target_value(&ev)))
                    on:change=move |ev| commit_text(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Escape" {
                            close_popover();
                        }
                    }
                />
                <Show when=show_clear>
                    <button
                        type="button"
                        class="date-input-intl__clear"
                        aria-label="Clear date"
                        on:click=on_clear
                    >
                        "×"
                    </button>
                </Show>
            </div>

            <Show when=move || open.get()>
                <CalendarPopover
                    locale=locale
                    view_month=view_month
                    selected=selected
                    min=min
                    max=max
                    today=today
                    on_pick=on_pick
                    on_dismiss=on_dismiss
                />
            </Show>
        </div>
    }
}
