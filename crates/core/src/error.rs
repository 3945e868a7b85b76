use std::collections::BTreeMap;

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {}", summarize(.0))]
    Validation(FieldErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a `NotFound` for any displayable lookup key (slug or id).
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Build a `Validation` error carrying a single message for one field.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert(field.to_string(), vec![message.into()]);
        CoreError::Validation(fields)
    }
}

/// First message of the first failing field, used as the human summary.
pub fn summarize(fields: &FieldErrors) -> String {
    fields
        .values()
        .flat_map(|messages| messages.iter())
        .next()
        .cloned()
        .unwrap_or_else(|| "The given data was invalid.".to_string())
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let field = field.to_string();
            let messages = field_errors
                .iter()
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("The {field} field is invalid ({}).", err.code),
                })
                .collect();
            fields.insert(field, messages);
        }
        CoreError::Validation(fields)
    }
}
