use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::WidthOption;

/// Canonical pattern of every value exchanged with the host (host token vocabulary)
pub const CANONICAL_FORMAT: &str = "YYYY/MM/DD";

/// Locale used when the host does not send one
pub const DEFAULT_LOCALE: &str = "en-US";

/// Key under which the selected value is reported to the host
pub const STATE_KEY_VALUE: &str = "value";

/// Данные, которые хост передаёт виджету при каждом рендере
///
/// Every field is optional and may also arrive as an explicit `null`. A
/// field of the wrong JSON type reads as absent without affecting the others.
/// Use [`DateInputProps::from`] to obtain the record with defaults applied.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DateInputData {
    #[serde(deserialize_with = "lenient")]
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub min: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub max: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub format: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub locale: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub disabled: Option<bool>,
    pub width: Option<WidthOption>,
    #[serde(deserialize_with = "lenient")]
    pub clearable: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub help: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub key: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

/// `null` and values of another type both read as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Value(value)) => Ok(Some(value)),
        Some(Lenient::Other(_)) | None => Ok(None),
    }
}

/// Widget configuration with every default resolved.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DateInputProps {
    /// Selected date in ISO form (`2024-03-05`), `None` when nothing is selected
    pub value: Option<String>,
    /// Lower bound in the canonical `YYYY/MM/DD` pattern
    pub min: Option<String>,
    /// Upper bound in the canonical `YYYY/MM/DD` pattern
    pub max: Option<String>,
    /// Display pattern in host tokens (`YYYY/MM/DD`, `DD.MM.YYYY`, ...)
    pub format: String,
    pub locale: String,
    pub disabled: bool,
    pub width: WidthOption,
    pub clearable: bool,
    pub label: Option<String>,
    pub help: Option<String>,
}

impl Default for DateInputProps {
    fn default() -> Self {
        Self {
            value: None,
            min: None,
            max: None,
            format: CANONICAL_FORMAT.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            disabled: false,
            width: WidthOption::Stretch,
            clearable: false,
            label: None,
            help: None,
        }
    }
}

impl From<DateInputData> for DateInputProps {
    fn from(data: DateInputData) -> Self {
        let defaults = Self::default();
        Self {
            value: data.value,
            min: data.min,
            max: data.max,
            format: data.format.unwrap_or(defaults.format),
            locale: data
                .locale
                .filter(|l| !l.trim().is_empty())
                .unwrap_or(defaults.locale),
            disabled: data.disabled.unwrap_or(defaults.disabled),
            width: data.width.unwrap_or(defaults.width),
            clearable: data.clearable.unwrap_or(defaults.clearable),
            label: data.label.filter(|l| !l.is_empty()),
            help: data.help.filter(|h| !h.is_empty()),
        }
    }
}

/// Состояние, которое виджет сообщает хосту
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DateInputState {
    /// Selected date in the canonical pattern, `None` when cleared
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let data: DateInputData = serde_json::from_str("{}").unwrap();
        let props = DateInputProps::from(data);

        assert_eq!(props, DateInputProps::default());
        assert_eq!(props.format, "YYYY/MM/DD");
        assert_eq!(props.locale, "en-US");
        assert_eq!(props.width, WidthOption::Stretch);
        assert!(!props.disabled);
        assert!(!props.clearable);
    }

    #[test]
    fn test_explicit_nulls_use_defaults() {
        let json = r#"{
            "value": null, "min": null, "max": null, "format": null,
            "locale": null, "disabled": null, "width": null, "clearable": null
        }"#;
        let data: DateInputData = serde_json::from_str(json).unwrap();

        assert_eq!(DateInputProps::from(data), DateInputProps::default());
    }

    #[test]
    fn test_full_record() {
        let json = r#"{
            "value": "2024-03-05", "min": "2024/02/01", "max": "2024/04/30",
            "format": "DD.MM.YYYY", "locale": "ja", "disabled": true,
            "width": 250, "clearable": true, "label": "Start", "key": "start"
        }"#;
        let data: DateInputData = serde_json::from_str(json).unwrap();
        assert_eq!(data.key.as_deref(), Some("start"));

        let props = DateInputProps::from(data);
        assert_eq!(props.value.as_deref(), Some("2024-03-05"));
        assert_eq!(props.min.as_deref(), Some("2024/02/01"));
        assert_eq!(props.max.as_deref(), Some("2024/04/30"));
        assert_eq!(props.format, "DD.MM.YYYY");
        assert_eq!(props.locale, "ja");
        assert!(props.disabled);
        assert!(props.clearable);
        assert_eq!(props.width, WidthOption::Pixels(250));
        assert_eq!(props.label.as_deref(), Some("Start"));
        assert_eq!(props.help, None);
    }

    #[test]
    fn test_mistyped_field_keeps_the_rest() {
        let json = r#"{
            "disabled": true, "locale": "ja", "format": "DD.MM.YYYY",
            "value": 20240305, "clearable": "yes", "label": ["Start"]
        }"#;
        let data: DateInputData = serde_json::from_str(json).unwrap();
        assert_eq!(data.value, None);
        assert_eq!(data.clearable, None);
        assert_eq!(data.label, None);

        let props = DateInputProps::from(data);
        assert!(props.disabled);
        assert!(!props.clearable);
        assert_eq!(props.locale, "ja");
        assert_eq!(props.format, "DD.MM.YYYY");
        assert_eq!(props.value, None);
    }

    #[test]
    fn test_blank_locale_uses_default() {
        let data = DateInputData {
            locale: Some("  ".to_string()),
            ..Default::default()
        };

        assert_eq!(DateInputProps::from(data).locale, DEFAULT_LOCALE);
    }

    #[test]
    fn test_state_serializes_null() {
        let cleared = serde_json::to_string(&DateInputState { value: None }).unwrap();
        assert_eq!(cleared, r#"{"value":null}"#);

        let picked = DateInputState {
            value: Some("2024/03/05".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&picked).unwrap(),
            r#"{"value":"2024/03/05"}"#
        );
    }
}
