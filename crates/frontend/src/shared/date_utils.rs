/// Utilities for date parsing and formatting
///
/// Bridges the host's date strings (ISO values, `YYYY/MM/DD` bounds, host
/// format tokens) and the picker's `chrono::NaiveDate` / picker token patterns.
/// Every parser returns `None` on malformed input instead of failing.
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::shared::locale::LocaleDescriptor;

/// Canonical pattern in chrono syntax (`YYYY/MM/DD` in host tokens)
pub const CANONICAL_CHRONO_FORMAT: &str = "%Y/%m/%d";

/// Picker pattern used when the host sends no display format
pub const DEFAULT_PICKER_FORMAT: &str = "yyyy/MM/dd";

/// Parse an ISO-8601 calendar date (the host's `value` field)
/// Example: "2024-03-05", "20240305", "2024-03-05T10:30:00Z" -> 2024-03-05
pub fn parse_canonical(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    match value.split_once(['T', ' ']) {
        Some((date_part, _)) => {
            let date = parse_iso_date(date_part)?;
            iso_time_is_valid(value).then_some(date)
        }
        None => parse_iso_date(value),
    }
}

/// Parse a range bound in the canonical slash pattern
/// Example: "2024/02/29" -> 2024-02-29, "2024/02/30" -> None
pub fn parse_bound(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    NaiveDate::parse_from_str(value, CANONICAL_CHRONO_FORMAT).ok()
}

/// Translate a host display pattern into picker tokens
/// Example: "YYYY/MM/DD" -> "yyyy/MM/dd", "D.M.YY" -> "d.M.yy"
pub fn translate_format_tokens(pattern: &str) -> String {
    if pattern.is_empty() {
        return DEFAULT_PICKER_FORMAT.to_string();
    }
    pattern
        .replace("YYYY", "yyyy")
        .replace("YY", "yy")
        .replace("DD", "dd")
        .replace('D', "d")
}

/// Format a date for the host, always in the canonical pattern
/// Example: 2024-03-05 -> "2024/03/05"
pub fn format_for_output(date: NaiveDate) -> String {
    date.format(CANONICAL_CHRONO_FORMAT).to_string()
}

/// Render a date with a picker pattern
/// Example: 2024-03-05, "dd.MM.yyyy" -> "05.03.2024"; "MMMM yyyy" -> "March 2024"
pub fn format_display(date: NaiveDate, pattern: &str, locale: &LocaleDescriptor) -> String {
    let names = locale.calendar;
    let mut out = String::new();

    for token in tokenize(pattern) {
        match token {
            Token::Year(2) => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
            Token::Year(width) => out.push_str(&format!("{:0width$}", date.year(), width = width)),
            Token::Month(1) => out.push_str(&date.month().to_string()),
            Token::Month(2) => out.push_str(&format!("{:02}", date.month())),
            Token::Month(3) => out.push_str(names.months_abbreviated[date.month0() as usize]),
            Token::Month(4) => out.push_str(names.months_wide[date.month0() as usize]),
            Token::Month(_) => {
                out.extend(names.months_wide[date.month0() as usize].chars().take(1))
            }
            Token::Day(1) => out.push_str(&date.day().to_string()),
            Token::Day(_) => out.push_str(&format!("{:02}", date.day())),
            Token::Weekday(width) => {
                let index = date.weekday().num_days_from_sunday() as usize;
                match width {
                    1..=3 => out.push_str(names.weekdays_abbreviated[index]),
                    4 => out.push_str(names.weekdays_wide[index]),
                    _ => out.extend(names.weekdays_wide[index].chars().take(1)),
                }
            }
            Token::Literal(text) => out.push_str(&text),
        }
    }

    out
}

/// Parse text typed by the user with a picker pattern
/// Example: "05.03.2024", "dd.MM.yyyy" -> 2024-03-05
pub fn parse_display(text: &str, pattern: &str, locale: &LocaleDescriptor) -> Option<NaiveDate> {
    let names = locale.calendar;
    let mut rest = text.trim();
    let (mut year, mut month, mut day) = (None, None, None);

    for token in tokenize(pattern) {
        match token {
            Token::Year(2) => {
                let (yy, tail) = take_digits(rest, 2, 2)?;
                let full = if yy < 50 { 2000 + yy } else { 1900 + yy };
                year = Some(i32::try_from(full).ok()?);
                rest = tail;
            }
            Token::Year(width) => {
                let (y, tail) = take_digits(rest, width.min(4), width.max(4))?;
                year = Some(i32::try_from(y).ok()?);
                rest = tail;
            }
            Token::Month(width @ 1..=2) => {
                let (m, tail) = take_digits(rest, width, 2)?;
                month = Some(u32::try_from(m).ok()?);
                rest = tail;
            }
            Token::Month(width) => {
                let list = if width == 3 {
                    &names.months_abbreviated
                } else {
                    &names.months_wide
                };
                let (index, tail) = take_name(rest, list)?;
                month = Some(index as u32 + 1);
                rest = tail;
            }
            Token::Day(width) => {
                let (d, tail) = take_digits(rest, width.min(2), 2)?;
                day = Some(u32::try_from(d).ok()?);
                rest = tail;
            }
            Token::Weekday(width) => {
                let list = if width == 4 {
                    &names.weekdays_wide
                } else {
                    &names.weekdays_abbreviated
                };
                let (_, tail) = take_name(rest, list)?;
                rest = tail;
            }
            Token::Literal(text) => {
                rest = rest.strip_prefix(text.as_str())?;
            }
        }
    }

    if !rest.is_empty() {
        return None;
    }
    NaiveDate::from_ymd_opt(year?, month?, day?)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Year(usize),
    Month(usize),
    Day(usize),
    Weekday(usize),
    Literal(String),
}

/// Split a picker pattern into field tokens; `'quoted'` text and non-field
/// characters become literals, `''` is an escaped quote.
fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                    continue;
                }
                while let Some(q) = chars.next() {
                    if q == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            literal.push('\'');
                            continue;
                        }
                        break;
                    }
                    literal.push(q);
                }
            }
            'y' | 'M' | 'L' | 'd' | 'E' => {
                let mut width = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    width += 1;
                }
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(match c {
                    'y' => Token::Year(width),
                    'M' | 'L' => Token::Month(width),
                    'd' => Token::Day(width),
                    _ => Token::Weekday(width),
                });
            }
            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

/// Greedily read between `min` and `max` ASCII digits.
fn take_digits(input: &str, min: usize, max: usize) -> Option<(u32, &str)> {
    let len = input
        .bytes()
        .take(max)
        .take_while(u8::is_ascii_digit)
        .count();
    if len < min || len == 0 {
        return None;
    }
    let (digits, tail) = input.split_at(len);
    digits.parse().ok().map(|n| (n, tail))
}

/// Match the longest name from `names` at the start of `input`, ignoring case.
fn take_name<'a>(input: &'a str, names: &[&str]) -> Option<(usize, &'a str)> {
    let lowered = input.to_lowercase();
    names
        .iter()
        .enumerate()
        .filter(|(_, name)| lowered.starts_with(&name.to_lowercase()))
        .max_by_key(|(_, name)| name.len())
        .map(|(index, name)| {
            let matched = name.to_lowercase();
            // Byte offsets of `lowered` may differ from `input` for non-ASCII
            // case mappings; walk `input` by character count instead.
            let chars = matched.chars().count();
            let offset = input
                .char_indices()
                .nth(chars)
                .map(|(i, _)| i)
                .unwrap_or(input.len());
            (index, &input[offset..])
        })
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let all_digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);

    match bytes.len() {
        // YYYY-MM-DD
        10 if bytes[4] == b'-' && bytes[7] == b'-' && all_digits(0..4) && all_digits(5..7) && all_digits(8..10) => {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
        }
        // YYYYMMDD
        8 if all_digits(0..8) => NaiveDate::parse_from_str(value, "%Y%m%d").ok(),
        // YYYY-MM
        7 if bytes[4] == b'-' && all_digits(0..4) && all_digits(5..7) => {
            NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").ok()
        }
        // YYYY
        4 if all_digits(0..4) => NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1),
        _ => None,
    }
}

/// The time part of an ISO date-time must itself be valid; the date is taken as written.
fn iso_time_is_valid(value: &str) -> bool {
    let mut normalized = value.replacen(' ', "T", 1);
    // chrono needs minutes; an hour-only time (`T10`) reads as `T10:00`.
    if let Some((_, time)) = normalized.split_once('T') {
        if time.len() == 2 && time.bytes().all(|b| b.is_ascii_digit()) {
            normalized.push_str(":00");
        }
    }
    DateTime::parse_from_rfc3339(&normalized).is_ok()
        || ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).is_ok())
}
