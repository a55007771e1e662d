use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Index, MigrationTrait, SchemaManager, Table,
    },
    schema::{boolean, pk_auto, string_len, text},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(pk_auto(Tags::Id))
                    .col(string_len(Tags::Tag, 100))
                    .col(text(Tags::Query).default(""))
                    .col(text(Tags::Comment).default(""))
                    .col(string_len(Tags::DynamicParamSource, 255).default(""))
                    .col(boolean(Tags::ApiActive).default(false))
                    .col(string_len(Tags::ApiEndpoint, 255).default(""))
                    .col(string_len(Tags::ApiName, 255).default(""))
                    .col(boolean(Tags::ApiAtGetData).default(false))
                    .col(text(Tags::ApiMessage).default(""))
                    .col(boolean(Tags::QueryActive).default(true))
                    .col(boolean(Tags::TagActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-tags-tag")
                    .table(Tags::Table)
                    .col(Tags::Tag)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tags {
    Table,
    Id,
    Tag,
    Query,
    Comment,
    DynamicParamSource,
    ApiActive,
    ApiEndpoint,
    ApiName,
    ApiAtGetData,
    ApiMessage,
    QueryActive,
    TagActive,
}
