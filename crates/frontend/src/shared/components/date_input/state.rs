//! Interaction state of the date input.
//!
//! The selected value itself is owned by the host and flows back in through
//! the configuration; this state only tracks the transient `empty` and
//! `error` flags. Each handler returns at most one [`ValueChange`], which the
//! component forwards to the host exactly once.

use chrono::NaiveDate;
use thiserror::Error;

use crate::shared::calendar::is_selectable;
use crate::shared::date_utils::{format_for_output, parse_canonical, parse_display};
use crate::shared::locale::LocaleDescriptor;

/// Dates produced by one picker gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<NaiveDate>),
    /// Range-capable gestures report several candidates
    Multiple(Vec<Option<NaiveDate>>),
}

impl Selection {
    /// The single date, or the first genuine date among the candidates.
    pub fn first_date(&self) -> Option<NaiveDate> {
        match self {
            Selection::Single(date) => *date,
            Selection::Multiple(candidates) => candidates.iter().flatten().next().copied(),
        }
    }
}

/// Value reported to the host: canonical `YYYY/MM/DD` string, `None` when cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange(pub Option<String>);

impl ValueChange {
    fn from_date(date: Option<NaiveDate>) -> Self {
        Self(date.map(format_for_output))
    }
}

/// Ошибка ввода даты вручную
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("\"{0}\" does not match the date format")]
    Unparseable(String),

    #[error("{0} is outside the allowed range")]
    OutOfRange(NaiveDate),
}

/// Everything needed to interpret typed text.
#[derive(Debug, Clone, Copy)]
pub struct InputContext<'a> {
    /// Display pattern in picker tokens
    pub pattern: &'a str,
    pub locale: &'a LocaleDescriptor,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    pub clearable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub is_empty: bool,
    pub error: Option<InputError>,
}

impl InteractionState {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// A date was picked in the calendar.
    pub fn on_select(&mut self, selection: Selection) -> ValueChange {
        self.error = None;
        let date = selection.first_date();
        self.is_empty = date.is_none();
        ValueChange::from_date(date)
    }

    /// The clear button was pressed.
    pub fn on_clear(&mut self) -> ValueChange {
        self.error = None;
        self.is_empty = true;
        ValueChange(None)
    }

    /// The popover closed. When the field was emptied locally, re-derive the
    /// flag from the last value confirmed by the host. Returns whether a
    /// re-sync happened.
    pub fn on_close(&mut self, last_value: Option<&str>) -> bool {
        if !self.is_empty {
            return false;
        }
        self.is_empty = parse_canonical(last_value).is_none();
        true
    }

    /// Text typed into the field was committed (change event or Enter).
    pub fn on_text_commit(&mut self, text: &str, ctx: &InputContext<'_>) -> Option<ValueChange> {
        self.error = None;

        let text = text.trim();
        if text.is_empty() {
            self.is_empty = true;
            return ctx.clearable.then(|| ValueChange(None));
        }

        let Some(date) = parse_display(text, ctx.pattern, ctx.locale) else {
            self.error = Some(InputError::Unparseable(text.to_string()));
            return None;
        };
        if !is_selectable(date, ctx.min, ctx.max) {
            self.error = Some(InputError::OutOfRange(date));
            return None;
        }

        self.is_empty = false;
        Some(ValueChange::from_date(Some(date)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::date_utils::{parse_bound, translate_format_tokens};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn context<'a>(pattern: &'a str, locale: &'a LocaleDescriptor) -> InputContext<'a> {
        InputContext {
            pattern,
            locale,
            min: None,
            max: None,
            clearable: false,
        }
    }

    #[test]
    fn test_select_emits_canonical_once() {
        let mut state = InteractionState::default();
        let picked = parse_canonical(Some("2024-03-05"));

        let change = state.on_select(Selection::Single(picked));

        assert_eq!(change, ValueChange(Some("2024/03/05".to_string())));
        assert!(!state.is_empty);
    }

    #[test]
    fn test_output_ignores_display_pattern() {
        let locale = LocaleDescriptor::default();
        let pattern = translate_format_tokens("DD.MM.YYYY");
        let mut state = InteractionState::default();

        let change = state.on_text_commit("05.03.2024", &context(&pattern, &locale));

        assert_eq!(change, Some(ValueChange(Some("2024/03/05".to_string()))));
    }

    #[test]
    fn test_select_clears_error() {
        let locale = LocaleDescriptor::default();
        let mut state = InteractionState::default();
        state.on_text_commit("garbage", &context("yyyy/MM/dd", &locale));
        assert!(state.has_error());

        state.on_select(Selection::Single(Some(date(2024, 1, 2))));
        assert!(!state.has_error());
    }

    #[test]
    fn test_multiple_takes_first_date() {
        let mut state = InteractionState::default();
        let change = state.on_select(Selection::Multiple(vec![
            None,
            Some(date(2024, 5, 1)),
            Some(date(2024, 5, 9)),
        ]));

        assert_eq!(change, ValueChange(Some("2024/05/01".to_string())));
    }

    #[test]
    fn test_multiple_without_dates_is_clear() {
        let mut state = InteractionState::default();

        assert_eq!(state.on_select(Selection::Multiple(vec![None, None])), ValueChange(None));
        assert_eq!(state.on_select(Selection::Multiple(Vec::new())), ValueChange(None));
        assert_eq!(state.on_select(Selection::Single(None)), ValueChange(None));
        assert!(state.is_empty);
    }

    #[test]
    fn test_clear_emits_none() {
        let mut state = InteractionState::default();

        assert_eq!(state.on_clear(), ValueChange(None));
        assert!(state.is_empty);
    }

    #[test]
    fn test_close_resyncs_only_when_empty() {
        let mut state = InteractionState::default();
        assert!(!state.on_close(Some("2024-03-05")));

        state.on_clear();
        assert!(state.on_close(Some("2024-03-05")));
        assert!(!state.is_empty);

        state.on_clear();
        assert!(state.on_close(None));
        assert!(state.is_empty);
    }

    #[test]
    fn test_typed_garbage_sets_error_without_emitting() {
        let locale = LocaleDescriptor::default();
        let mut state = InteractionState::default();

        let change = state.on_text_commit("2024/02/30", &context("yyyy/MM/dd", &locale));

        assert_eq!(change, None);
        assert_eq!(
            state.error,
            Some(InputError::Unparseable("2024/02/30".to_string()))
        );
    }

    #[test]
    fn test_typed_out_of_range_sets_error() {
        let locale = LocaleDescriptor::default();
        let mut ctx = context("yyyy/MM/dd", &locale);
        ctx.min = parse_bound(Some("2024/03/01"));
        ctx.max = parse_bound(Some("2024/03/31"));
        let mut state = InteractionState::default();

        assert_eq!(state.on_text_commit("2024/04/01", &ctx), None);
        assert_eq!(state.error, Some(InputError::OutOfRange(date(2024, 4, 1))));

        assert_eq!(
            state.on_text_commit("2024/03/31", &ctx),
            Some(ValueChange(Some("2024/03/31".to_string())))
        );
        assert!(!state.has_error());
    }

    #[test]
    fn test_typed_empty_respects_clearable() {
        let locale = LocaleDescriptor::default();
        let mut ctx = context("yyyy/MM/dd", &locale);
        let mut state = InteractionState::default();

        assert_eq!(state.on_text_commit("  ", &ctx), None);
        assert!(state.is_empty);

        ctx.clearable = true;
        assert_eq!(state.on_text_commit("", &ctx), Some(ValueChange(None)));
    }
}
