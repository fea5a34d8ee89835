//! Locale resolution for the date picker.
//!
//! Week metadata (first day of week) comes from the platform through
//! [`WeekInfoSource`]; month and weekday names come from the bundled
//! [`calendar_data`] table. Resolution never fails: every miss degrades to
//! the `en-US` defaults.

pub mod calendar_data;
pub mod intl;

use contracts::shared::date_input::DEFAULT_LOCALE;
use serde::Deserialize;
use thiserror::Error;

pub use calendar_data::CalendarData;
pub use intl::IntlWeekInfoSource;

/// Ошибки получения недельных метаданных
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocaleLookupError {
    #[error("invalid locale tag: {0}")]
    InvalidTag(String),

    #[error("week info is not supported by the platform")]
    Unsupported,
}

/// Week metadata as reported by `Intl.Locale#getWeekInfo()`.
///
/// Days are numbered 1 (Monday) to 7 (Sunday).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekInfo {
    pub first_day: u8,
    #[serde(default)]
    pub weekend: Vec<u8>,
    #[serde(default)]
    pub minimal_days: u8,
}

impl WeekInfo {
    /// First day of week renumbered to 0 (Sunday) .. 6 (Saturday).
    pub fn first_day_sunday_based(&self) -> Option<u8> {
        match self.first_day {
            7 => Some(0),
            day @ 1..=6 => Some(day),
            _ => None,
        }
    }
}

/// Platform access used by [`resolve_with`].
pub trait WeekInfoSource {
    /// Active user-interface locale of the platform.
    fn ui_locale(&self) -> Option<String>;

    /// Week metadata for `tag`.
    fn week_info(&self, tag: &str) -> Result<WeekInfo, LocaleLookupError>;
}

/// Resolved calendar metadata used to render the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleDescriptor {
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u8,
    pub calendar: &'static CalendarData,
}

impl Default for LocaleDescriptor {
    fn default() -> Self {
        Self {
            first_day_of_week: 0,
            calendar: &calendar_data::EN_US,
        }
    }
}

impl LocaleDescriptor {
    pub fn code(&self) -> &'static str {
        self.calendar.code
    }

    /// Minimal weekday headers starting from the first day of week.
    pub fn weekday_headers(&self) -> [&'static str; 7] {
        let first = usize::from(self.first_day_of_week % 7);
        std::array::from_fn(|i| self.calendar.weekdays_min[(first + i) % 7])
    }
}

/// Resolve a locale tag using the browser `Intl` API.
pub fn resolve(tag: Option<&str>) -> LocaleDescriptor {
    resolve_with(&IntlWeekInfoSource, tag)
}

/// Resolve a locale tag against an explicit week metadata source.
pub fn resolve_with<S>(source: &S, tag: Option<&str>) -> LocaleDescriptor
where
    S: WeekInfoSource + ?Sized,
{
    let tag = tag
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| source.ui_locale())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    let week_info = match source.week_info(&tag) {
        Ok(info) => Some(info),
        Err(err) => {
            log::debug!("week info for '{}' unavailable ({}), retrying with {}", tag, err, DEFAULT_LOCALE);
            source.week_info(DEFAULT_LOCALE).ok()
        }
    };

    let defaults = LocaleDescriptor::default();
    let Some(week_info) = week_info else {
        log::debug!("no week info for '{}', using default locale", tag);
        return defaults;
    };

    let calendar = calendar_data::lookup(&tag).unwrap_or(defaults.calendar);
    let first_day_of_week = week_info
        .first_day_sunday_based()
        .unwrap_or(defaults.first_day_of_week);

    LocaleDescriptor {
        first_day_of_week,
        calendar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory platform: tags map to a first day, `None` rejects the tag.
    struct FakeIntl {
        ui_locale: Option<&'static str>,
        supported: bool,
        days: Vec<(&'static str, u8)>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeIntl {
        fn new(days: &[(&'static str, u8)]) -> Self {
            Self {
                ui_locale: Some("en-US"),
                supported: true,
                days: days.to_vec(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl WeekInfoSource for FakeIntl {
        fn ui_locale(&self) -> Option<String> {
            self.ui_locale.map(str::to_string)
        }

        fn week_info(&self, tag: &str) -> Result<WeekInfo, LocaleLookupError> {
            self.calls.borrow_mut().push(tag.to_string());
            if !self.supported {
                return Err(LocaleLookupError::Unsupported);
            }
            self.days
                .iter()
                .find(|(t, _)| *t == tag)
                .map(|(_, first_day)| WeekInfo {
                    first_day: *first_day,
                    weekend: vec![6, 7],
                    minimal_days: 1,
                })
                .ok_or_else(|| LocaleLookupError::InvalidTag(tag.to_string()))
        }
    }

    #[test]
    fn test_sunday_is_renumbered_to_zero() {
        let intl = FakeIntl::new(&[("en-US", 7), ("ja", 7)]);
        let descriptor = resolve_with(&intl, Some("ja"));

        assert_eq!(descriptor.first_day_of_week, 0);
        assert_eq!(descriptor.code(), "ja");
    }

    #[test]
    fn test_monday_passes_through() {
        let intl = FakeIntl::new(&[("en-US", 7), ("de", 1)]);
        let descriptor = resolve_with(&intl, Some("de"));

        assert_eq!(descriptor.first_day_of_week, 1);
        assert_eq!(descriptor.calendar.months_wide[2], "März");
        assert_eq!(descriptor.weekday_headers()[0], "Mo");
        assert_eq!(descriptor.weekday_headers()[6], "So");
    }

    #[test]
    fn test_rejected_tag_retries_with_default() {
        let intl = FakeIntl::new(&[("en-US", 7)]);
        let descriptor = resolve_with(&intl, Some("not a tag"));

        assert_eq!(
            *intl.calls.borrow(),
            vec!["not a tag".to_string(), "en-US".to_string()]
        );
        assert_eq!(descriptor, LocaleDescriptor::default());
    }

    #[test]
    fn test_unknown_table_entry_keeps_platform_first_day() {
        // Platform knows sv-SE but the bundled table does not.
        let intl = FakeIntl::new(&[("en-US", 7), ("sv-SE", 1)]);
        let descriptor = resolve_with(&intl, Some("sv-SE"));

        assert_eq!(descriptor.first_day_of_week, 1);
        assert_eq!(descriptor.code(), "en-US");
    }

    #[test]
    fn test_unsupported_platform_returns_default() {
        let mut intl = FakeIntl::new(&[("de", 1)]);
        intl.supported = false;

        assert_eq!(resolve_with(&intl, Some("de")), LocaleDescriptor::default());
        assert_eq!(intl.calls.borrow().len(), 2);
    }

    #[test]
    fn test_missing_tag_uses_ui_locale() {
        let mut intl = FakeIntl::new(&[("en-US", 7), ("de", 1)]);
        intl.ui_locale = Some("de");

        assert_eq!(resolve_with(&intl, None), resolve_with(&intl, Some("de")));
        assert_eq!(resolve_with(&intl, Some("   ")), resolve_with(&intl, Some("de")));
    }

    #[test]
    fn test_missing_tag_and_ui_locale_uses_default_tag() {
        let mut intl = FakeIntl::new(&[("en-US", 7)]);
        intl.ui_locale = None;

        resolve_with(&intl, None);
        assert_eq!(*intl.calls.borrow(), vec!["en-US".to_string()]);
    }

    #[test]
    fn test_first_day_always_in_range() {
        let intl = FakeIntl::new(&[
            ("en-US", 7),
            ("a", 0),
            ("b", 1),
            ("c", 6),
            ("d", 7),
            ("e", 8),
            ("f", 255),
        ]);
        for tag in ["a", "b", "c", "d", "e", "f", "zz", "", "en-US"] {
            let descriptor = resolve_with(&intl, Some(tag));
            assert!(descriptor.first_day_of_week <= 6, "tag {tag}");
        }
    }

    #[test]
    fn test_week_info_from_json_shape() {
        let info: WeekInfo =
            serde_json::from_str(r#"{"firstDay":1,"weekend":[6,7],"minimalDays":4}"#).unwrap();

        assert_eq!(info.first_day_sunday_based(), Some(1));
        assert_eq!(info.weekend, vec![6, 7]);
        assert_eq!(info.minimal_days, 4);
    }
}
