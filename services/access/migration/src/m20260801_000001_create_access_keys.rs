use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessKeys::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessKeys::Code)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AccessKeys::Status).string().not_null())
                    .col(ColumnDef::new(AccessKeys::OwnerEmail).string())
                    .col(ColumnDef::new(AccessKeys::ExpiresAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(AccessKeys::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessKeys::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AccessKeys {
    Table,
    Code,
    Status,
    OwnerEmail,
    ExpiresAt,
    CreatedAt,
}
