use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failing field and the reason it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn required(field: &str) -> Self {
        Self::new(field, format!("Path `{field}` is required."))
    }

    pub fn invalid_enum(field: &str, value: &str) -> Self {
        Self::new(
            field,
            format!("`{value}` is not a valid enum value for path `{field}`."),
        )
    }
}

/// Every field that failed the task schema, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Task validation failed: {}", join(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(error: FieldError) -> Self {
        Self::new(vec![error])
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_single_error() {
        let error = ValidationError::single(FieldError::required("title"));
        assert_eq!(
            error.to_string(),
            "Task validation failed: title: Path `title` is required."
        );
    }

    #[test]
    fn joins_multiple_errors() {
        let error = ValidationError::new(vec![
            FieldError::required("title"),
            FieldError::invalid_enum("priority", "urgent"),
        ]);
        assert_eq!(
            error.to_string(),
            "Task validation failed: title: Path `title` is required., \
             priority: `urgent` is not a valid enum value for path `priority`."
        );
        assert!(error.has_field("priority"));
        assert!(!error.has_field("completed"));
    }
}
