use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    #[sea_orm(unique)]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,

    pub published: bool,

    // JSONB array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,

    #[sea_orm(nullable)]
    pub file_path: Option<String>,

    #[sea_orm(nullable)]
    pub original_filename: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
