use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

use crate::shared::calendar::{is_selectable, month_grid, MonthView};
use crate::shared::date_utils::format_display;
use crate::shared::locale::LocaleDescriptor;

/// Month calendar shown below the date field
///
/// Weeks start on the locale's first day of week; days outside `[min, max]`
/// are rendered disabled. A click on the backdrop dismisses the popover.
#[component]
pub fn CalendarPopover(
    #[prop(into)] locale: Signal<LocaleDescriptor>,
    /// Month currently shown, owned by the date field
    view_month: RwSignal<MonthView>,
    #[prop(into)] selected: Signal<Option<NaiveDate>>,
    #[prop(into)] min: Signal<Option<NaiveDate>>,
    #[prop(into)] max: Signal<Option<NaiveDate>>,
    today: NaiveDate,
    /// Called with the clicked day
    on_pick: Callback<NaiveDate>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let title = move || {
        let locale = locale.get();
        view_month
            .get()
            .first_day()
            .map(|first| format_display(first, locale.calendar.month_year_pattern, &locale))
            .unwrap_or_default()
    };

    let weekday_headers = move || {
        locale
            .get()
            .weekday_headers()
            .into_iter()
            .map(|name| view! { <span class="date-input-intl__weekday">{name}</span> })
            .collect_view()
    };

    let days = move || {
        let month = view_month.get();
        let (min, max, selected) = (min.get(), max.get(), selected.get());

        month_grid(month, locale.get().first_day_of_week)
            .into_iter()
            .flatten()
            .map(|day| {
                let enabled = is_selectable(day, min, max);
                let is_selected = selected == Some(day);

                let mut class = String::from("date-input-intl__day");
                if day.month() != month.month {
                    class.push_str(" date-input-intl__day--outside");
                }
                if day == today {
                    class.push_str(" date-input-intl__day--today");
                }
                if is_selected {
                    class.push_str(" date-input-intl__day--selected");
                }

                view! {
                    <button
                        type="button"
                        class=class
                        disabled=!enabled
                        aria-selected=is_selected.to_string()
                        on:click=move |_| {
                            if enabled {
                                on_pick.run(day);
                            }
                        }
                    >
                        {day.day()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="date-input-intl__backdrop" on:click=move |_| on_dismiss.run(())></div>
        <div class="date-input-intl__popover" role="dialog">
            <div class="date-input-intl__header">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| view_month.update(|m| *m = m.shift(-1))
                >
                    "‹"
                </Button>
                <span class="date-input-intl__title">{title}</span>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| view_month.update(|m| *m = m.shift(1))
                >
                    "›"
                </Button>
            </div>
            <div class="date-input-intl__weekdays">{weekday_headers}</div>
            <div class="date-input-intl__grid">{days}</div>
        </div>
    }
}
