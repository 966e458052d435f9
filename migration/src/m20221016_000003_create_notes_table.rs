use sea_orm_migration::{prelude::*, schema::*};

use crate::m20221016_000001_create_users_table::User;

const INDEX_NAME: &str = "notes_pinned_timestamp_index";
const COLOR_SYMBOLS: [&str; 5] = ["a", "b", "c", "d", "e"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Note::Table)
                    .if_not_exists()
                    .col(uuid(Note::Id).primary_key())
                    .col(uuid_null(Note::UserId))
                    .col(boolean(Note::Pinned).default(false))
                    .col(string_len(Note::Title, 400))
                    .col(text_null(Note::Description))
                    .col(
                        timestamp_with_time_zone(Note::Timestamp)
                            .default(Expr::current_timestamp()),
                    )
                    .col(date_null(Note::Date))
                    .col(
                        string_len(Note::Color, 1)
                            .default("a")
                            .check(Expr::col(Note::Color).is_in(COLOR_SYMBOLS)),
                    )
                    .col(string_null(Note::Image))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-notes-user_id")
                            .from(Note::Table, Note::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Note::Table)
                    .col(Note::Pinned)
                    .col(Note::Timestamp)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Note::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Note::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Note {
    #[sea_orm(iden = "notes")]
    Table,
    Id,
    UserId,
    Pinned,
    Title,
    Description,
    Timestamp,
    Date,
    Color,
    Image,
}
