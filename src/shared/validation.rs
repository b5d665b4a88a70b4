// src/shared/validation.rs
use email_address::EmailAddress;
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Field name used when the body itself is not a JSON object.
pub const ROOT_FIELD: &str = "$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    #[schema(example = "email")]
    pub field: String,
    #[schema(example = "must be a valid email address")]
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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request body failed validation ({} violation(s))", .violations.len())]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl From<Vec<FieldViolation>> for ValidationErrors {
    fn from(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }
}

//
// ──────────────────────────────────────────────────────────
// Object validator
// ──────────────────────────────────────────────────────────
//

/// Reads typed fields out of an untyped JSON object while collecting
/// every violation. Fields that are never asked for (ids, timestamps,
/// flags owned by the server) are ignored.
pub struct ObjectValidator<'a> {
    fields: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> ObjectValidator<'a> {
    pub fn new(body: &'a Value) -> Result<Self, ValidationErrors> {
        match body.as_object() {
            Some(fields) => Ok(Self {
                fields,
                violations: Vec::new(),
            }),
            None => Err(ValidationErrors::from(vec![FieldViolation::new(
                ROOT_FIELD,
                "request body must be a JSON object",
            )])),
        }
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    pub fn reject(&mut self, field: &str, message: &str) {
        self.violations.push(FieldViolation::new(field, message));
    }

    pub fn required_string(&mut self, field: &str) -> String {
        match self.present(field) {
            None => {
                self.reject(field, "is required");
                String::new()
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                self.reject(field, "must not be blank");
                String::new()
            }
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.reject(field, "must be a string");
                String::new()
            }
        }
    }

    pub fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.present(field) {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.reject(field, "must be a string");
                None
            }
        }
    }

    pub fn required_string_list(&mut self, field: &str) -> Vec<String> {
        if self.present(field).is_none() {
            self.reject(field, "is required");
            return Vec::new();
        }
        self.string_list_or_empty(field)
    }

    pub fn string_list_or_empty(&mut self, field: &str) -> Vec<String> {
        let Some(value) = self.present(field) else {
            return Vec::new();
        };

        let items = value.as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        });

        match items {
            Some(items) => items,
            None => {
                self.reject(field, "must be an array of strings");
                Vec::new()
            }
        }
    }

    pub fn bool_or(&mut self, field: &str, default: bool) -> bool {
        match self.present(field) {
            None => default,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                self.reject(field, "must be a boolean");
                default
            }
        }
    }

    pub fn email(&mut self, field: &str) -> String {
        let before = self.violations.len();
        let value = self.required_string(field);

        if self.violations.len() == before && !EmailAddress::is_valid(value.trim()) {
            self.reject(field, "must be a valid email address");
        }

        value
    }

    /// Hands back `value` when no violation was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.violations.is_empty() {
            Ok(value)
        } else {
            Err(ValidationErrors::from(self.violations))
        }
    }
}
