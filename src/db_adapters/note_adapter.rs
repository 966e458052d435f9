use std::future::Future;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbConn, DbErr,
    EntityTrait, IntoActiveModel, LoaderTrait, ModelTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, Select, Set, TransactionTrait,
};
use uuid::Uuid;

use entities::{
    note::{ActiveModel, Column, Entity, Model},
    notes_tags,
    sea_orm_active_enums::NoteColor,
    tag,
};

use crate::{icontains, map_constraint_err};

#[derive(Clone)]
pub struct NoteAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> NoteAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.query = self.query.limit(limit);
        self
    }
}

pub trait NoteFilter {
    fn filter_eq_id(self, id: Uuid) -> Self;
    fn filter_eq_pinned(self, pinned: bool) -> Self;
    fn filter_title_icontains(self, needle: &str) -> Self;
    fn filter_has_any_tag(self, tag_ids: Vec<Uuid>) -> Self;
}

impl NoteFilter for NoteAdapter<'_> {
    fn filter_eq_id(mut self, id: Uuid) -> Self {
        self.query = self.query.filter(Column::Id.eq(id));
        self
    }

    fn filter_eq_pinned(mut self, pinned: bool) -> Self {
        self.query = self.query.filter(Column::Pinned.eq(pinned));
        self
    }

    fn filter_title_icontains(mut self, needle: &str) -> Self {
        self.query = self.query.filter(icontains(Column::Title, needle));
        self
    }

    /// Keeps notes linked to at least one of `tag_ids`. An empty list matches nothing.
    fn filter_has_any_tag(mut self, tag_ids: Vec<Uuid>) -> Self {
        self.query = self.query.filter(
            Column::Id.in_subquery(
                Query::select()
                    .column(notes_tags::Column::NoteId)
                    .from(notes_tags::Entity)
                    .and_where(notes_tags::Column::TagId.is_in(tag_ids))
                    .to_owned(),
            ),
        );
        self
    }
}

pub trait NoteOrder {
    fn order_by_pinned(self, order: Order) -> Self;
    fn order_by_timestamp(self, order: Order) -> Self;
    fn order_by_id(self, order: Order) -> Self;
}

impl NoteOrder for NoteAdapter<'_> {
    fn order_by_pinned(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Pinned, order);
        self
    }

    fn order_by_timestamp(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Timestamp, order);
        self
    }

    fn order_by_id(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Id, order);
        self
    }
}

pub trait NoteQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_all_with_tags(self) -> impl Future<Output = Result<Vec<(Model, Vec<tag::Model>)>, DbErr>>;
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_with_tags(
        self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<(Model, Vec<tag::Model>)>, DbErr>>;
}

impl NoteQuery for NoteAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn get_all_with_tags(self) -> Result<Vec<(Model, Vec<tag::Model>)>, DbErr> {
        let notes = self.query.all(self.db).await?;
        let tags = notes
            .load_many_to_many(
                tag::Entity::find().order_by_asc(tag::Column::Title),
                notes_tags::Entity,
                self.db,
            )
            .await?;
        Ok(notes.into_iter().zip(tags).collect())
    }

    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_with_tags(self, id: Uuid) -> Result<Option<(Model, Vec<tag::Model>)>, DbErr> {
        let db = self.db;
        match self.get_by_id(id).await? {
            Some(note) => {
                let tags = note
                    .find_related(tag::Entity)
                    .order_by_asc(tag::Column::Title)
                    .all(db)
                    .await?;
                Ok(Some((note, tags)))
            }
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNoteParams {
    pub user_id: Option<Uuid>,
    pub pinned: bool,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub color: NoteColor,
    pub image: Option<String>,
    pub tag_ids: Vec<Uuid>,
}

#[derive(Debug, Clone)]
pub struct UpdateNoteParams {
    pub pinned: bool,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub color: NoteColor,
    pub image: Option<String>,
    pub tag_ids: Vec<Uuid>,
}

pub trait NoteMutation {
    fn create(self, params: CreateNoteParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn update(
        self,
        note: Model,
        params: UpdateNoteParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn toggle_pinned(self, note: Model) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, note: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl NoteMutation for NoteAdapter<'_> {
    async fn create(self, params: CreateNoteParams) -> Result<Model, DbErr> {
        let txn = self.db.begin().await?;
        let note = ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(params.user_id),
            pinned: Set(params.pinned),
            title: Set(params.title),
            description: Set(params.description),
            timestamp: Set(Utc::now().into()),
            date: Set(params.date),
            color: Set(params.color),
            image: Set(params.image),
        }
        .insert(&txn)
        .await?;
        link_tags(&txn, &note, params.tag_ids).await?;
        txn.commit().await?;
        Ok(note)
    }

    async fn update(self, note: Model, params: UpdateNoteParams) -> Result<Model, DbErr> {
        let txn = self.db.begin().await?;
        let mut note = note.into_active_model();
        note.pinned = Set(params.pinned);
        note.title = Set(params.title);
        note.description = Set(params.description);
        note.date = Set(params.date);
        note.color = Set(params.color);
        note.image = Set(params.image);
        let note = note.update(&txn).await?;

        notes_tags::Entity::delete_many()
            .filter(notes_tags::Column::NoteId.eq(note.id))
            .exec(&txn)
            .await?;
        link_tags(&txn, &note, params.tag_ids).await?;
        txn.commit().await?;
        Ok(note)
    }

    async fn toggle_pinned(self, note: Model) -> Result<Model, DbErr> {
        let pinned = note.pinned;
        let mut note = note.into_active_model();
        note.pinned = Set(!pinned);
        note.update(self.db).await
    }

    async fn delete(self, note: Model) -> Result<(), DbErr> {
        note.delete(self.db).await.map(|_| ())
    }
}

async fn link_tags<C: ConnectionTrait>(
    conn: &C,
    note: &Model,
    tag_ids: Vec<Uuid>,
) -> Result<(), DbErr> {
    if tag_ids.is_empty() {
        return Ok(());
    }
    let mut tag_ids = tag_ids;
    tag_ids.sort();
    tag_ids.dedup();
    let tag_links = tag_ids.into_iter().map(|tag_id| notes_tags::ActiveModel {
        note_id: Set(note.id),
        tag_id: Set(tag_id),
    });
    notes_tags::Entity::insert_many(tag_links)
        .exec_without_returning(conn)
        .await
        .map(|_| ())
        .map_err(map_constraint_err)
}
