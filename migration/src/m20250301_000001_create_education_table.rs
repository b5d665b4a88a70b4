use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Education::Degree).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Education::Institution)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Education::Location).string_len(255).not_null())
                    .col(ColumnDef::new(Education::StartYear).string_len(10).not_null())
                    .col(ColumnDef::new(Education::EndYear).string_len(10))
                    .col(ColumnDef::new(Education::Description).text())
                    .col(ColumnDef::new(Education::Gpa).string_len(20))
                    .col(
                        ColumnDef::new(Education::CreatedAt)
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
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Degree,
    Institution,
    Location,
    StartYear,
    EndYear,
    Description,
    Gpa,
    CreatedAt,
}
