use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "experience")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    pub company: String,

    pub location: String,

    pub start_date: String,

    #[sea_orm(nullable)]
    pub end_date: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // JSONB array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    pub is_current_job: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
