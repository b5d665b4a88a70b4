pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_education_table;
mod m20250301_000002_create_experience_table;
mod m20250301_000003_create_projects_table;
mod m20250301_000004_create_blog_posts_table;
mod m20250301_000005_create_contact_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_education_table::Migration),
            Box::new(m20250301_000002_create_experience_table::Migration),
            Box::new(m20250301_000003_create_projects_table::Migration),
            Box::new(m20250301_000004_create_blog_posts_table::Migration),
            Box::new(m20250301_000005_create_contact_messages_table::Migration),
        ]
    }
}
