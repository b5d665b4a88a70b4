use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(
                        ColumnDef::new(Projects::Technologies)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Projects::GithubUrl).string_len(500))
                    .col(ColumnDef::new(Projects::LiveUrl).string_len(500))
                    .col(ColumnDef::new(Projects::ImageUrl).string_len(500))
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Featured listing on the home page
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_featured
                ON projects (featured)
                WHERE featured = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_projects_featured;")
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    Technologies,
    GithubUrl,
    LiveUrl,
    ImageUrl,
    Featured,
    CreatedAt,
}
