//! Migration: people and roles.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(People::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(People::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(People::FirstName).string().not_null())
                    .col(ColumnDef::new(People::LastName).string().not_null())
                    .col(ColumnDef::new(People::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(People::ForcePasswordChange)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(People::Roles).json_binary().not_null())
                    .col(
                        ColumnDef::new(People::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(People::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Roles::Name).string().not_null().primary_key())
                    .col(ColumnDef::new(Roles::Capabilities).json_binary().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum People {
    Table,
    Id,
    Email,
    FirstName,
    LastName,
    PasswordHash,
    ForcePasswordChange,
    Roles,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Roles {
    Table,
    Name,
    Capabilities,
}
