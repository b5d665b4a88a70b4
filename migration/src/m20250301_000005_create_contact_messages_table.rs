use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactMessages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactMessages::Name).string_len(255).not_null())
                    .col(ColumnDef::new(ContactMessages::Email).string_len(255).not_null())
                    .col(
                        ColumnDef::new(ContactMessages::Subject)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContactMessages::Message).text().not_null())
                    .col(
                        ColumnDef::new(ContactMessages::Read)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ContactMessages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Inbox is always read newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_contact_messages_created_at
                ON contact_messages (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_contact_messages_created_at;")
            .await?;

        manager
            .drop_table(Table::drop().table(ContactMessages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactMessages {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    Read,
    CreatedAt,
}
