use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::shared::validation::{ObjectValidator, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "E-commerce Platform")]
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl NewProject {
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut v = ObjectValidator::new(body)?;

        let new = NewProject {
            title: v.required_string("title"),
            description: v.required_string("description"),
            technologies: v.required_string_list("technologies"),
            github_url: v.optional_string("githubUrl"),
            live_url: v.optional_string("liveUrl"),
            image_url: v.optional_string("imageUrl"),
            featured: v.bool_or("featured", false),
        };

        v.finish(new)
    }

    pub fn into_project(self, id: i32) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            technologies: self.technologies,
            github_url: self.github_url,
            live_url: self.live_url,
            image_url: self.image_url,
            featured: self.featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn featured_defaults_to_false() {
        let body = json!({
            "title": "CLI",
            "description": "A tool",
            "technologies": ["Rust"]
        });

        let new = NewProject::from_json(&body).unwrap();

        assert!(!new.featured);
        assert_eq!(new.github_url, None);
    }

    #[test]
    fn urls_must_be_strings() {
        let body = json!({
            "title": "CLI",
            "description": "A tool",
            "technologies": ["Rust"],
            "githubUrl": 12
        });

        let err = NewProject::from_json(&body).unwrap_err();

        assert!(err.has_field("githubUrl"));
    }
}
