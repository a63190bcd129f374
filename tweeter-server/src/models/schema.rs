//! Static field schemas for request bodies
//!
//! A `Schema` is a table of `FieldRule`s. Checking a body runs every rule
//! against every field and collects all violations in one pass, in schema
//! order, followed by keys the schema doesn't know about. Keys listed as
//! ignored are accepted and dropped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::{FieldViolation, ValidationError, ViolationKind};

/// Letters, digits, and underscores only
static ALPHANUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("invalid alphanum regex"));

/// Absolute http(s) URI without whitespace
static HTTP_URI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("invalid uri regex")
});

/// Extra format constraint on a string field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `[A-Za-z0-9_]+`
    Alphanumeric,
    /// `http://` or `https://` URI
    HttpUri,
}

impl Format {
    fn check(self, s: &str) -> Result<(), &'static str> {
        let ok = match self {
            Self::Alphanumeric => ALPHANUM_RE.is_match(s),
            Self::HttpUri => HTTP_URI_RE.is_match(s),
        };
        if ok {
            return Ok(());
        }
        Err(match self {
            Self::Alphanumeric => "must only contain alpha-numeric and underscore characters",
            Self::HttpUri => "must be a valid uri",
        })
    }
}

/// Rules for one string field.
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub min_len: usize,
    pub max_len: usize,
    pub format: Option<Format>,
}

impl FieldRule {
    /// Optional string field with no length limit.
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            min_len: 0,
            max_len: usize::MAX,
            format: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_len = min;
        self.max_len = max;
        self
    }

    pub const fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    fn check(&self, value: Option<&Value>, out: &mut Vec<FieldViolation>) {
        let s = match value {
            None if self.required => {
                out.push(FieldViolation::new(self.name, ViolationKind::Required));
                return;
            }
            None => return,
            Some(Value::String(s)) => s,
            Some(_) => {
                out.push(FieldViolation::new(self.name, ViolationKind::NotString));
                return;
            }
        };

        if s.is_empty() {
            out.push(FieldViolation::new(self.name, ViolationKind::Empty));
            return;
        }

        let len = s.chars().count();
        if len < self.min_len {
            out.push(FieldViolation::new(
                self.name,
                ViolationKind::TooShort { min: self.min_len },
            ));
        }
        if len > self.max_len {
            out.push(FieldViolation::new(
                self.name,
                ViolationKind::TooLong { max: self.max_len },
            ));
        }

        if let Some(format) = self.format {
            if let Err(reason) = format.check(s) {
                out.push(FieldViolation::new(
                    self.name,
                    ViolationKind::InvalidFormat { reason },
                ));
            }
        }
    }
}

/// Object schema: the full set of allowed keys and their rules
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldRule],
    pub ignored: &'static [&'static str],
}

impl Schema {
    pub const fn new(fields: &'static [FieldRule]) -> Self {
        Self {
            fields,
            ignored: &[],
        }
    }

    /// Accept `keys` without checking or returning them.
    pub const fn ignoring(mut self, keys: &'static [&'static str]) -> Self {
        self.ignored = keys;
        self
    }

    fn knows(&self, key: &str) -> bool {
        self.fields.iter().any(|rule| rule.name == key) || self.ignored.iter().any(|k| *k == key)
    }

    /// Check `candidate` against every rule.
    ///
    /// Returns the object's fields when nothing is violated.
    pub fn check<'a>(&self, candidate: &'a Value) -> Result<ValidFields<'a>, ValidationError> {
        let Some(map) = candidate.as_object() else {
            return Err(ValidationError::new(vec![FieldViolation::new(
                "value",
                ViolationKind::NotObject,
            )]));
        };

        let mut violations = Vec::new();
        for rule in self.fields {
            rule.check(map.get(rule.name), &mut violations);
        }
        for key in map.keys() {
            if !self.knows(key) {
                violations.push(FieldViolation::new(key.as_str(), ViolationKind::NotAllowed));
            }
        }

        if violations.is_empty() {
            Ok(ValidFields(map))
        } else {
            Err(ValidationError::new(violations))
        }
    }
}

/// Fields of an object that passed its schema
#[derive(Debug, Clone, Copy)]
pub struct ValidFields<'a>(&'a Map<String, Value>);

impl ValidFields<'_> {
    /// String value of `name`, empty if the schema allowed it to be absent.
    pub fn string(&self, name: &str) -> String {
        self.0
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned()
    }
}
