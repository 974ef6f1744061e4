use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tera::Value;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

fn rounded(seconds: u64, unit: u64) -> u64 {
    (seconds + unit / 2) / unit
}

/// Describes `then` relative to `now`: "just now", "3 days ago",
/// "in an hour".
pub fn humanize(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then).num_seconds();
    let seconds = elapsed.unsigned_abs();

    let phrase = match seconds {
        s if s < 45 => return "just now".to_string(),
        s if s < 90 => "a minute".to_string(),
        s if s < 45 * MINUTE => format!("{} minutes", rounded(s, MINUTE)),
        s if s < 90 * MINUTE => "an hour".to_string(),
        s if s < 22 * HOUR => format!("{} hours", rounded(s, HOUR)),
        s if s < 36 * HOUR => "a day".to_string(),
        s if s < 26 * DAY => format!("{} days", rounded(s, DAY)),
        s if s < 45 * DAY => "a month".to_string(),
        s if s < 320 * DAY => format!("{} months", rounded(s, MONTH)),
        s if s < 548 * DAY => "a year".to_string(),
        s => format!("{} years", rounded(s, YEAR)),
    };

    if elapsed < 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

/// Tera filter for humanize; takes an RFC 3339 timestamp.
pub fn humanize_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("humanize expects a timestamp string"))?;

    let then = DateTime::parse_from_rfc3339(raw)
        .map_err(|err| tera::Error::msg(format!("humanize cannot parse {raw:?}: {err}")))?;

    Ok(Value::String(humanize(then.with_timezone(&Utc), Utc::now())))
}

/// Escapes text for HTML bodies and quoted attributes. Unlike Tera's
/// default, `/` is left alone so that URLs and `way/123` stay readable.
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
    }
    output
}
