use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, ForeignKey, ForeignKeyAction, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::uuid,
};

use crate::{
    m20221016_000002_create_tags_table::Tag, m20221016_000003_create_notes_table::Note,
};

const INDEX_NAME: &str = "notes_tags_tag_id_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotesTags::Table)
                    .if_not_exists()
                    .col(uuid(NotesTags::NoteId))
                    .col(uuid(NotesTags::TagId))
                    .primary_key(
                        Index::create()
                            .name("pk-notes_tags")
                            .col(NotesTags::NoteId)
                            .col(NotesTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-notes_tags-note_id")
                            .from(NotesTags::Table, NotesTags::NoteId)
                            .to(Note::Table, Note::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-notes_tags-tag_id")
                            .from(NotesTags::Table, NotesTags::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(NotesTags::Table)
                    .col(NotesTags::TagId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(INDEX_NAME)
                    .table(NotesTags::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(NotesTags::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum NotesTags {
    Table,
    NoteId,
    TagId,
}
