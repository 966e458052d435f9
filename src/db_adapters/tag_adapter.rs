use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, ModelTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::tag::{ActiveModel, Column, Entity, Model};

use crate::{icontains, map_constraint_err};

#[derive(Clone)]
pub struct TagAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> TagAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait TagFilter {
    fn filter_eq_id(self, id: Uuid) -> Self;
    fn filter_in_ids(self, ids: Vec<Uuid>) -> Self;
    fn filter_title_icontains(self, needle: &str) -> Self;
}

impl TagFilter for TagAdapter<'_> {
    fn filter_eq_id(mut self, id: Uuid) -> Self {
        self.query = self.query.filter(Column::Id.eq(id));
        self
    }

    fn filter_in_ids(mut self, ids: Vec<Uuid>) -> Self {
        self.query = self.query.filter(Column::Id.is_in(ids));
        self
    }

    fn filter_title_icontains(mut self, needle: &str) -> Self {
        self.query = self.query.filter(icontains(Column::Title, needle));
        self
    }
}

pub trait TagOrder {
    fn order_by_id(self, order: Order) -> Self;
    fn order_by_title(self, order: Order) -> Self;
}

impl TagOrder for TagAdapter<'_> {
    fn order_by_id(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Id, order);
        self
    }

    fn order_by_title(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Title, order);
        self
    }
}

pub trait TagQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn count(self) -> impl Future<Output = Result<u64, DbErr>>;
}

impl TagQuery for TagAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn count(self) -> Result<u64, DbErr> {
        self.query.count(self.db).await
    }
}

#[derive(Debug, Clone)]
pub struct CreateTagParams {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct UpdateTagParams {
    pub title: String,
}

pub trait TagMutation {
    fn create(self, params: CreateTagParams) -> impl Future<Output = Result<Model, DbErr>>;
    fn update(self, tag: Model, params: UpdateTagParams)
        -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, tag: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl TagMutation for TagAdapter<'_> {
    async fn create(self, params: CreateTagParams) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(params.title),
            created_at: Set(Utc::now().into()),
        }
        .insert(self.db)
        .await
        .map_err(map_constraint_err)
    }

    async fn update(self, tag: Model, params: UpdateTagParams) -> Result<Model, DbErr> {
        let mut tag = tag.into_active_model();
        tag.title = Set(params.title);
        tag.update(self.db).await.map_err(map_constraint_err)
    }

    async fn delete(self, tag: Model) -> Result<(), DbErr> {
        tag.delete(self.db).await.map(|_| ())
    }
}
