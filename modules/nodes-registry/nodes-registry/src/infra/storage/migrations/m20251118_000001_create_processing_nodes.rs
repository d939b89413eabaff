use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProcessingNodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProcessingNodes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProcessingNodes::Hostname).string().not_null())
                    .col(ColumnDef::new(ProcessingNodes::Port).integer().not_null())
                    .col(
                        ColumnDef::new(ProcessingNodes::ApiVersion)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ProcessingNodes::QueueCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProcessingNodes::AvailableOptions)
                            .json_binary()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProcessingNodes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProcessingNodes {
    Table,
    Id,
    Hostname,
    Port,
    ApiVersion,
    QueueCount,
    AvailableOptions,
}
