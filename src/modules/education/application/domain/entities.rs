use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::shared::validation::{ObjectValidator, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Bachelor of Science in Computer Science")]
    pub degree: String,
    pub institution: String,
    pub location: String,
    #[schema(example = "2018")]
    pub start_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

/// Education entry as accepted from clients. The id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEducation {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_year: String,
    pub end_year: Option<String>,
    pub description: Option<String>,
    pub gpa: Option<String>,
}

impl NewEducation {
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut v = ObjectValidator::new(body)?;

        let new = NewEducation {
            degree: v.required_string("degree"),
            institution: v.required_string("institution"),
            location: v.required_string("location"),
            start_year: v.required_string("startYear"),
            end_year: v.optional_string("endYear"),
            description: v.optional_string("description"),
            gpa: v.optional_string("gpa"),
        };

        v.finish(new)
    }

    pub fn into_education(self, id: i32) -> Education {
        Education {
            id,
            degree: self.degree,
            institution: self.institution,
            location: self.location,
            start_year: self.start_year,
            end_year: self.end_year,
            description: self.description,
            gpa: self.gpa,
        }
    }
}
