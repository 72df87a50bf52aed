// src/engine/dates.rs
//! Date normalizer: free text in, `DateValue` out. Never fails; anything it cannot
//! read becomes `DateValue::Unknown`.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::core::sanitize::{is_placeholder, normalize_hyphens};
use crate::engine::types::DateValue;

const MONTH: &str = r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

#[derive(Clone, Copy, Debug)]
enum Shape {
    YearMonthDay,
    NumericMonthDayYear,
    DottedDayMonthYear,
    MonthDayYear,
    DayMonthYear,
    MonthYear,
}

fn shapes() -> &'static [(Shape, Regex)] {
    static SHAPES: OnceLock<Vec<(Shape, Regex)>> = OnceLock::new();
    SHAPES.get_or_init(|| {
        let src = [
            (Shape::YearMonthDay, s!(r"\b(\d{4})[-/.](\d{1,2})[-/.](\d{1,2})\b")),
            (Shape::NumericMonthDayYear, s!(r"\b(\d{1,2})/(\d{1,2})/(\d{4}|\d{2})\b")),
            (Shape::DottedDayMonthYear, s!(r"\b(\d{1,2})\.(\d{1,2})\.(\d{4})\b")),
            (Shape::MonthDayYear, format!(r"\b{MONTH}\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s+(\d{{4}})\b")),
            (Shape::DayMonthYear, format!(r"\b(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?{MONTH}\.?,?\s+(\d{{4}})\b")),
            (Shape::MonthYear, format!(r"\b{MONTH}\.?,?\s+(\d{{4}})\b")),
        ];
        src.into_iter()
            .filter_map(|(shape, pat)| Regex::new(&format!("(?i){pat}")).ok().map(|re| (shape, re)))
            .collect()
    })
}

/// A day number right before a month name ("19th of ", "3 "). `MonthYear` must not
/// claim that month, or the day would quietly become the 1st.
fn ends_with_day(prefix: &str) -> bool {
    static DAY: OnceLock<Option<Regex>> = OnceLock::new();
    DAY.get_or_init(|| Regex::new(r"(?i)\b\d{1,2}(?:st|nd|rd|th)?\s+(?:of\s+)?$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(prefix))
}

/// Phrases vendors wrap around a date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prose {
    /// "not sooner than X"
    NotSoonerThan,
    /// "deprecated as of X", "deprecated on X"
    DeprecatedAsOf,
    /// "shutdown on X", "shut down on X", "shutdown date: X"
    ShutdownOn,
    /// "discontinued as of X", "discontinues on X"
    DiscontinuedAsOf,
}

impl Prose {
    pub const ALL: [Prose; 4] =
        [Prose::NotSoonerThan, Prose::DeprecatedAsOf, Prose::ShutdownOn, Prose::DiscontinuedAsOf];

    fn pattern(self) -> &'static str {
        match self {
            Prose::NotSoonerThan => r"(?i)\bnot\s+sooner\s+than\s+(.+)",
            Prose::DeprecatedAsOf => r"(?i)\bdeprecated\s+(?:as\s+of|on)\s+(.+)",
            Prose::ShutdownOn => r"(?i)\bshut\s*down\s+(?:on|date[:\s]+)\s*(.+)",
            Prose::DiscontinuedAsOf => r"(?i)\bdiscontinue[ds]?\s+(?:on|as\s+of)\s+(.+)",
        }
    }

    fn regex(self) -> Option<&'static Regex> {
        static PROSE: OnceLock<Vec<(Prose, Regex)>> = OnceLock::new();
        PROSE
            .get_or_init(|| {
                Prose::ALL
                    .iter()
                    .filter_map(|&p| Regex::new(p.pattern()).ok().map(|re| (p, re)))
                    .collect()
            })
            .iter()
            .find(|(p, _)| *p == self)
            .map(|(_, re)| re)
    }

    /// Start offset and captured tail of the first occurrence in `text`.
    fn capture(self, text: &str) -> Option<(usize, &str)> {
        let caps = self.regex()?.captures(text)?;
        let whole = caps.get(0)?;
        let tail = caps.get(1)?;
        Some((whole.start(), tail.as_str().trim()))
    }
}

/// Normalize a date-bearing cell.
///
/// Order: placeholders ("", "-", "—", "N/A") → trailing "(…)" annotation removed →
/// prose phrase unwrapped (one level) → fuzzy calendar parse.
pub fn normalize_date(text: &str) -> DateValue {
    normalize(text, true)
}

/// Date introduced by one specific phrase, e.g. the shutdown date in a paragraph that
/// also mentions a deprecation date.
pub fn prose_date(text: &str, prose: Prose) -> DateValue {
    let text = normalize_hyphens(text);
    match prose.capture(&text) {
        Some((_, tail)) => normalize(tail, false),
        None => DateValue::Unknown,
    }
}

fn normalize(text: &str, unwrap_prose: bool) -> DateValue {
    let text = normalize_hyphens(text);
    let text = text.trim();
    if is_placeholder(text) {
        return DateValue::Unknown;
    }
    let text = strip_annotation(text);
    if is_placeholder(text) {
        return DateValue::Unknown;
    }

    if unwrap_prose {
        let earliest = Prose::ALL
            .iter()
            .filter_map(|p| p.capture(text))
            .min_by_key(|(start, _)| *start);
        if let Some((_, tail)) = earliest {
            return normalize(tail, false);
        }
    }

    fuzzy_date(text).map(DateValue::Known).unwrap_or(DateValue::Unknown)
}

/// "June 19, 2026 (us-east-1)" → "June 19, 2026"
fn strip_annotation(text: &str) -> &str {
    if !text.ends_with(')') {
        return text;
    }
    match text.find('(') {
        Some(open) => text[..open].trim_end(),
        None => text,
    }
}

/// Earliest recognizable calendar date anywhere in `text`.
pub fn fuzzy_date(text: &str) -> Option<NaiveDate> {
    // (start, length, date); earliest start wins, then the longer match
    let mut best: Option<(usize, usize, NaiveDate)> = None;
    for (shape, re) in shapes() {
        for caps in re.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            if matches!(shape, Shape::MonthYear) && ends_with_day(&text[..whole.start()]) {
                continue;
            }
            let Some(date) = date_from(*shape, &caps) else { continue };
            let cand = (whole.start(), whole.len(), date);
            best = match best {
                Some(cur) if (cur.0, std::cmp::Reverse(cur.1)) <= (cand.0, std::cmp::Reverse(cand.1)) => Some(cur),
                _ => Some(cand),
            };
        }
    }
    best.map(|(_, _, date)| date)
}

fn date_from(shape: Shape, caps: &regex::Captures<'_>) -> Option<NaiveDate> {
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    let month = |i: usize| caps.get(i).and_then(|m| month_number(m.as_str()));
    // "6/19/26" is 2026
    let year = |i: usize| num(i).map(|y| if y < 100 { 2000 + y } else { y });
    let (y, m, d) = match shape {
        Shape::YearMonthDay => (num(1)?, num(2)?, num(3)?),
        Shape::NumericMonthDayYear => (year(3)?, num(1)?, num(2)?),
        Shape::DottedDayMonthYear => (num(3)?, num(2)?, num(1)?),
        Shape::MonthDayYear => (num(3)?, month(1)?, num(2)?),
        Shape::DayMonthYear => (num(3)?, month(2)?, num(1)?),
        Shape::MonthYear => (num(2)?, month(1)?, 1),
    };
    NaiveDate::from_ymd_opt(i32::try_from(y).ok()?, m, d)
}

fn month_number(name: &str) -> Option<u32> {
    let key: String = name.chars().take(3).collect::<String>().to_ascii_lowercase();
    let n = match key.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}
