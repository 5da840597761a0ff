//! Field-level validation failures and their message rendering.

use std::fmt;

use validator::ValidationErrors;

/// One failing field (or parameter) together with its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Render violations as `"<field>: <message>, ..."` in the given order.
///
/// An empty list renders as the empty string.
pub fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flatten `validator` errors into violations.
///
/// `ValidationErrors` keeps fields in a hash map, so fields are sorted by name
/// to keep messages stable. Errors for one field keep their rule order. An
/// error without a message falls back to its code.
pub fn violations_from_errors(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut fields: Vec<_> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (field.to_string(), errs))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect()
}
