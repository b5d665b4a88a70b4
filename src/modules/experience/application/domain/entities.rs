use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::shared::validation::{ObjectValidator, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Senior Full Stack Developer")]
    pub title: String,
    pub company: String,
    pub location: String,
    /// `YYYY-MM`
    #[schema(example = "2024-01")]
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
    pub is_current_job: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub is_current_job: bool,
}

impl NewExperience {
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut v = ObjectValidator::new(body)?;

        let new = NewExperience {
            title: v.required_string("title"),
            company: v.required_string("company"),
            location: v.required_string("location"),
            start_date: v.required_string("startDate"),
            end_date: v.optional_string("endDate"),
            description: v.required_string("description"),
            technologies: v.required_string_list("technologies"),
            is_current_job: v.bool_or("isCurrentJob", false),
        };

        v.finish(new)
    }

    pub fn into_experience(self, id: i32) -> Experience {
        Experience {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            technologies: self.technologies,
            is_current_job: self.is_current_job,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_current_job_defaults_to_false() {
        let body = json!({
            "title": "Dev",
            "company": "Acme",
            "location": "Remote",
            "startDate": "2020-01",
            "description": "Built things",
            "technologies": ["Rust"]
        });

        let new = NewExperience::from_json(&body).unwrap();

        assert!(!new.is_current_job);
        assert_eq!(new.technologies, vec!["Rust"]);
    }

    #[test]
    fn technologies_must_be_strings() {
        let body = json!({
            "title": "Dev",
            "company": "Acme",
            "location": "Remote",
            "startDate": "2020-01",
            "description": "Built things",
            "technologies": ["Rust", 3],
            "isCurrentJob": "yes"
        });

        let err = NewExperience::from_json(&body).unwrap_err();

        assert_eq!(err.violations().len(), 2);
        assert!(err.has_field("technologies"));
        assert!(err.has_field("isCurrentJob"));
    }
}
