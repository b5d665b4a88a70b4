use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experience::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experience::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experience::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Experience::Company).string_len(255).not_null())
                    .col(ColumnDef::new(Experience::Location).string_len(255).not_null())
                    .col(ColumnDef::new(Experience::StartDate).string_len(20).not_null())
                    .col(ColumnDef::new(Experience::EndDate).string_len(20))
                    .col(ColumnDef::new(Experience::Description).text().not_null())
                    .col(
                        ColumnDef::new(Experience::Technologies)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experience::IsCurrentJob)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Experience::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experience::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experience {
    Table,
    Id,
    Title,
    Company,
    Location,
    StartDate,
    EndDate,
    Description,
    Technologies,
    IsCurrentJob,
    CreatedAt,
}
