use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // JSONB array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    #[sea_orm(nullable)]
    pub github_url: Option<String>,

    #[sea_orm(nullable)]
    pub live_url: Option<String>,

    #[sea_orm(nullable)]
    pub image_url: Option<String>,

    pub featured: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
