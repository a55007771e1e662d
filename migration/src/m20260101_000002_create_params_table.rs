use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, ForeignKey, ForeignKeyAction, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{boolean, integer, json, pk_auto, string_len},
};

use crate::m20260101_000001_create_tags_table::Tags;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Params::Table)
                    .if_not_exists()
                    .col(pk_auto(Params::Id))
                    .col(integer(Params::TagId))
                    .col(string_len(Params::DbColumn, 100))
                    .col(string_len(Params::DisplayName, 200))
                    .col(json(Params::OptionValue))
                    .col(string_len(Params::FieldType, 50).default("text"))
                    .col(string_len(Params::ValueType, 50).default("string"))
                    .col(boolean(Params::ApiParam).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-params-tag_id")
                            .from(Params::Table, Params::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-params-tag_id")
                    .table(Params::Table)
                    .col(Params::TagId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Params::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Params {
    Table,
    Id,
    TagId,
    DbColumn,
    DisplayName,
    OptionValue,
    FieldType,
    ValueType,
    ApiParam,
}
