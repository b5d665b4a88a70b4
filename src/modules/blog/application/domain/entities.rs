use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::modules::blog::application::domain::derivation::is_valid_slug;
use crate::shared::validation::{ObjectValidator, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Getting Started with React and TypeScript")]
    pub title: String,
    #[schema(example = "getting-started-with-react-typescript")]
    pub slug: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub published: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Name of the uploaded document this post was created from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
    /// Server-side location of the uploaded original. Never exposed.
    #[serde(skip)]
    pub file_path: Option<String>,
}

/// Admin listing row: the post plus facts about its source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostAdminView {
    #[serde(flatten)]
    pub post: BlogPost,
    pub file_exists: bool,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip)]
    pub file_path: Option<String>,
    #[serde(skip)]
    pub original_filename: Option<String>,
}

impl NewBlogPost {
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let mut v = ObjectValidator::new(body)?;

        let title = v.required_string("title");
        let slug = v.required_string("slug");
        if !slug.is_empty() && !is_valid_slug(&slug) {
            v.reject(
                "slug",
                "must contain only lowercase letters, digits and single hyphens",
            );
        }

        let new = NewBlogPost {
            title,
            slug,
            content: v.required_string("content"),
            excerpt: v.optional_string("excerpt"),
            published: v.bool_or("published", false),
            tags: v.string_list_or_empty("tags"),
            file_path: None,
            original_filename: None,
        };

        v.finish(new)
    }

    pub fn into_post(self, id: i32, now: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            excerpt: self.excerpt,
            published: self.published,
            tags: self.tags,
            created_at: now,
            updated_at: now,
            original_filename: self.original_filename,
            file_path: self.file_path,
        }
    }
}
