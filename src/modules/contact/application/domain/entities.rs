use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::shared::validation::{ObjectValidator, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@x.io")]
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// Inbound message. `read` and `createdAt` are owned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl NewContactMessage {
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut v = ObjectValidator::new(body)?;

        let new = NewContactMessage {
            name: v.required_string("name"),
            email: v.email("email"),
            subject: v.required_string("subject"),
            message: v.required_string("message"),
        };

        v.finish(new)
    }

    pub fn into_message(self, id: i32, created_at: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at,
            read: false,
        }
    }
}
