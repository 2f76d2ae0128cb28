// Rule predicates
//
// Every predicate is pure and total over JSON values. Non-string values are
// first converted with the same rules a browser uses when a value is turned
// into a string (`String(value)`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::RuleKind;

/// Browser `\s`: differs from Unicode White_Space on U+0085 and U+FEFF.
const WHITESPACE: &str = r"\t\n\x0B\x0C\r\x20\x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^@{WHITESPACE}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
});

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[\p{{L}}{WHITESPACE}\-]+$")).expect("name pattern compiles")
});

const PASSWORD_MIN_LENGTH: usize = 8;

/// Evaluate a rule against a value.
///
/// `password` is the current value of the form's `password` field, used only
/// by [`RuleKind::PasswordMatch`]. Unknown rules always pass.
pub fn check(kind: &RuleKind, value: &Value, password: Option<&Value>) -> bool {
    match kind {
        RuleKind::Required => required(value),
        RuleKind::MinLength(min) => min_length(value, *min),
        RuleKind::Email => email(value),
        RuleKind::Password => password_strength(value),
        RuleKind::PasswordMatch => password_match(value, password),
        RuleKind::NameFormat => name_format(value),
        RuleKind::Unknown(_) => true,
    }
}

/// Not null and not the empty string. `0` and `false` count as present.
pub fn required(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// String length is at least `min`. A missing `min` never passes.
pub fn min_length(value: &Value, min: Option<f64>) -> bool {
    match min {
        Some(min) => text_length(&to_text(value)) as f64 >= min,
        None => false,
    }
}

pub fn email(value: &Value) -> bool {
    EMAIL_REGEX.is_match(&to_text(value))
}

/// Uppercase ASCII letter, ASCII digit, at least 8 characters, single line.
pub fn password_strength(value: &Value) -> bool {
    let text = to_text(value);

    !text.chars().any(is_line_terminator)
        && text.chars().any(|c| c.is_ascii_uppercase())
        && text.chars().any(|c| c.is_ascii_digit())
        && text_length(&text) >= PASSWORD_MIN_LENGTH
}

/// Strict equality with the password field's value. Fails when the form has
/// no `password` field.
pub fn password_match(value: &Value, password: Option<&Value>) -> bool {
    password.is_some_and(|password| strict_equals(value, password))
}

/// Unicode letters, whitespace and hyphens only.
pub fn name_format(value: &Value) -> bool {
    NAME_REGEX.is_match(&to_text(value))
}

/// Convert a value to its display string the way `String(value)` does.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    n.as_f64().map(js_number_text).unwrap_or_default()
}

/// Shortest round-trip digits laid out the way `Number.prototype.toString`
/// does: plain notation for exponents in `-7..21`, `d.ddde±x` otherwise.
fn js_number_text(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let scientific = format!("{:e}", f.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat(-n as usize))
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", e.abs())
        }
    };

    if f < 0.0 { format!("-{body}") } else { body }
}

/// Length in UTF-16 code units, matching browser string length.
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// `===` on JSON values: primitives by value, numbers numerically,
/// arrays and objects never equal (each is a distinct reference).
fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}
