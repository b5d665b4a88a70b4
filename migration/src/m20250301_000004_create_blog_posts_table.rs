use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create blog_posts table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPosts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPosts::Title).string_len(255).not_null())
                    .col(ColumnDef::new(BlogPosts::Slug).string_len(255).not_null())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(ColumnDef::new(BlogPosts::Excerpt).text())
                    .col(
                        ColumnDef::new(BlogPosts::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(BlogPosts::Tags).json_binary().not_null())
                    .col(ColumnDef::new(BlogPosts::FilePath).string_len(500))
                    .col(ColumnDef::new(BlogPosts::OriginalFilename).string_len(255))
                    .col(
                        ColumnDef::new(BlogPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Slugs are the public lookup key
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_blog_posts_slug_unique
                ON blog_posts (slug);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_blog_posts_published_created_at
                ON blog_posts (published, created_at DESC);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_blog_posts_updated_at
                BEFORE UPDATE ON blog_posts
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_blog_posts_updated_at ON blog_posts;
                DROP INDEX IF EXISTS idx_blog_posts_slug_unique;
                DROP INDEX IF EXISTS idx_blog_posts_published_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Title,
    Slug,
    Content,
    Excerpt,
    Published,
    Tags,
    FilePath,
    OriginalFilename,
    CreatedAt,
    UpdatedAt,
}
