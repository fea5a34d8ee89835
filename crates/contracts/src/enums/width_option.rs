use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ширина виджета, задаваемая хостом
///
/// On the wire the host sends either the string `"stretch"`, the string
/// `"content"` or a positive pixel count. Anything else falls back to
/// [`WidthOption::Stretch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthOption {
    /// Fill the available horizontal space
    #[default]
    Stretch,
    /// Shrink to the intrinsic width of the input
    Content,
    /// Fixed width in CSS pixels
    Pixels(u32),
}

impl WidthOption {
    /// Inline CSS applied to the widget container.
    pub fn css(&self) -> String {
        match self {
            WidthOption::Stretch => "width: 100%;".to_string(),
            WidthOption::Content => "width: fit-content;".to_string(),
            WidthOption::Pixels(px) => format!("width: {}px;", px),
        }
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "stretch" => Some(WidthOption::Stretch),
            "content" => Some(WidthOption::Content),
            other => other
                .parse::<u32>()
                .ok()
                .filter(|px| *px > 0)
                .map(WidthOption::Pixels),
        }
    }

    fn from_number(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 1.0 && value <= u32::MAX as f64 {
            Some(WidthOption::Pixels(value as u32))
        } else {
            None
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWidth {
    Text(String),
    Number(f64),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for WidthOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let width = match RawWidth::deserialize(deserializer)? {
            RawWidth::Text(code) => WidthOption::from_code(&code),
            RawWidth::Number(value) => WidthOption::from_number(value),
            RawWidth::Other(_) => None,
        };
        Ok(width.unwrap_or_default())
    }
}

impl Serialize for WidthOption {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            WidthOption::Stretch => serializer.serialize_str("stretch"),
            WidthOption::Content => serializer.serialize_str("content"),
            WidthOption::Pixels(px) => serializer.serialize_u32(*px),
        }
    }
}
