// Validation rules

use serde::{Deserialize, Serialize};

/// The closed set of rule kinds.
///
/// Rules arriving from a serialized form definition with a type outside this
/// set deserialize to [`RuleKind::Unknown`] and never produce an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    /// Value is present: not null and not the empty string.
    Required,
    /// String form is at least this many characters long. A rule without a
    /// parameter never passes.
    MinLength(Option<f64>),
    /// Looks like `local@domain.tld`.
    Email,
    /// At least 8 characters with an uppercase letter and a digit.
    Password,
    /// Equals the current value of the form's `password` field.
    PasswordMatch,
    /// Letters, whitespace and hyphens only.
    NameFormat,
    /// Unrecognized rule type, skipped during validation.
    Unknown(String),
}

impl RuleKind {
    /// Parse the wire identifier of a rule.
    pub fn from_type(kind: &str, value: Option<f64>) -> Self {
        match kind {
            "required" => RuleKind::Required,
            "minLength" => RuleKind::MinLength(value),
            "email" => RuleKind::Email,
            "password" => RuleKind::Password,
            "passwordMatch" => RuleKind::PasswordMatch,
            "nameFormat" => RuleKind::NameFormat,
            other => RuleKind::Unknown(other.to_string()),
        }
    }

    /// The wire identifier of this rule.
    pub fn type_name(&self) -> &str {
        match self {
            RuleKind::Required => "required",
            RuleKind::MinLength(_) => "minLength",
            RuleKind::Email => "email",
            RuleKind::Password => "password",
            RuleKind::PasswordMatch => "passwordMatch",
            RuleKind::NameFormat => "nameFormat",
            RuleKind::Unknown(name) => name,
        }
    }

    /// The numeric parameter carried by the rule, if any.
    pub fn parameter(&self) -> Option<f64> {
        match self {
            RuleKind::MinLength(min) => *min,
            _ => None,
        }
    }
}

/// A rule attached to a field, with the message shown when it fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRule", into = "RawRule")]
pub struct ValidationRule {
    pub kind: RuleKind,
    pub message: String,
}

impl ValidationRule {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(RuleKind::Required, message)
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::new(RuleKind::MinLength(Some(min as f64)), message)
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::new(RuleKind::Email, message)
    }

    pub fn password(message: impl Into<String>) -> Self {
        Self::new(RuleKind::Password, message)
    }

    pub fn password_match(message: impl Into<String>) -> Self {
        Self::new(RuleKind::PasswordMatch, message)
    }

    pub fn name_format(message: impl Into<String>) -> Self {
        Self::new(RuleKind::NameFormat, message)
    }
}

/// Serialized shape: `{ "type": "minLength", "value": 3, "message": "..." }`.
#[derive(Serialize, Deserialize)]
struct RawRule {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    message: String,
}

impl From<RawRule> for ValidationRule {
    fn from(raw: RawRule) -> Self {
        Self {
            kind: RuleKind::from_type(&raw.kind, raw.value),
            message: raw.message,
        }
    }
}

impl From<ValidationRule> for RawRule {
    fn from(rule: ValidationRule) -> Self {
        Self {
            kind: rule.kind.type_name().to_string(),
            value: rule.kind.parameter(),
            message: rule.message,
        }
    }
}
