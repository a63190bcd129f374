//! Validation error types

use std::fmt;

/// A single rule a field failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required field is absent
    Required,

    /// Field is present but not a string
    NotString,

    /// String field is empty
    Empty,

    /// String is shorter than the minimum length
    TooShort { min: usize },

    /// String exceeds the maximum length
    TooLong { max: usize },

    /// String doesn't match the required format (e.g., uri)
    InvalidFormat { reason: &'static str },

    /// Key is not part of the schema
    NotAllowed,

    /// Body itself is not a JSON object
    NotObject,
}

/// One violated constraint on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// Human-readable message, as returned to clients.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = &self.field;
        match &self.kind {
            ViolationKind::Required => write!(f, "\"{}\" is required", field),
            ViolationKind::NotString => write!(f, "\"{}\" must be a string", field),
            ViolationKind::Empty => write!(f, "\"{}\" is not allowed to be empty", field),
            ViolationKind::TooShort { min } => {
                write!(f, "\"{}\" length must be at least {} characters long", field, min)
            }
            ViolationKind::TooLong { max } => write!(
                f,
                "\"{}\" length must be less than or equal to {} characters long",
                field, max
            ),
            ViolationKind::InvalidFormat { reason } => write!(f, "\"{}\" {}", field, reason),
            ViolationKind::NotAllowed => write!(f, "\"{}\" is not allowed", field),
            ViolationKind::NotObject => write!(f, "\"{}\" must be of type object", field),
        }
    }
}

/// Validation failure carrying every violated constraint, in check order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    details: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(details: Vec<FieldViolation>) -> Self {
        Self { details }
    }

    pub fn details(&self) -> &[FieldViolation] {
        &self.details
    }

    /// Messages only, field names dropped.
    pub fn messages(&self) -> Vec<String> {
        self.details.iter().map(FieldViolation::message).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(". "))
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_display() {
        let v = FieldViolation::new("text", ViolationKind::TooLong { max: 280 });
        assert_eq!(
            v.to_string(),
            "\"text\" length must be less than or equal to 280 characters long"
        );
    }

    #[test]
    fn messages_drop_field_names_and_keep_order() {
        let err = ValidationError::new(vec![
            FieldViolation::new("username", ViolationKind::Required),
            FieldViolation::new("text", ViolationKind::NotString),
        ]);
        assert_eq!(
            err.messages(),
            vec!["\"username\" is required", "\"text\" must be a string"]
        );
        assert_eq!(
            err.to_string(),
            "\"username\" is required. \"text\" must be a string"
        );
    }
}
