use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use entities::{note, notes_tags, sea_orm_active_enums::NoteColor};
use sea_orm::{ActiveModelTrait, DbConn, DbErr, Set};
use std::future::Future;
use uuid::Uuid;

pub fn note() -> note::ActiveModel {
    note::ActiveModel {
        id: Set(Uuid::now_v7()),
        user_id: Set(None),
        pinned: Set(false),
        title: Set("note".to_string()),
        description: Set(None),
        timestamp: Set(Utc::now().into()),
        date: Set(None),
        color: Set(NoteColor::Yellow),
        image: Set(None),
    }
}

pub trait NoteFactory {
    fn title(self, title: &str) -> note::ActiveModel;
    fn description(self, description: Option<String>) -> note::ActiveModel;
    fn pinned(self, pinned: bool) -> note::ActiveModel;
    fn timestamp(self, timestamp: DateTime<FixedOffset>) -> note::ActiveModel;
    fn date(self, date: Option<NaiveDate>) -> note::ActiveModel;
    fn color(self, color: NoteColor) -> note::ActiveModel;
    fn user_id(self, user_id: Option<Uuid>) -> note::ActiveModel;
    fn image(self, image: Option<String>) -> note::ActiveModel;
    fn insert_with_tags(
        self,
        db: &DbConn,
        tag_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<note::Model, DbErr>> + Send;
}

impl NoteFactory for note::ActiveModel {
    fn title(mut self, title: &str) -> note::ActiveModel {
        self.title = Set(title.to_string());
        self
    }

    fn description(mut self, description: Option<String>) -> note::ActiveModel {
        self.description = Set(description);
        self
    }

    fn pinned(mut self, pinned: bool) -> note::ActiveModel {
        self.pinned = Set(pinned);
        self
    }

    fn timestamp(mut self, timestamp: DateTime<FixedOffset>) -> note::ActiveModel {
        self.timestamp = Set(timestamp);
        self
    }

    fn date(mut self, date: Option<NaiveDate>) -> note::ActiveModel {
        self.date = Set(date);
        self
    }

    fn color(mut self, color: NoteColor) -> note::ActiveModel {
        self.color = Set(color);
        self
    }

    fn user_id(mut self, user_id: Option<Uuid>) -> note::ActiveModel {
        self.user_id = Set(user_id);
        self
    }

    fn image(mut self, image: Option<String>) -> note::ActiveModel {
        self.image = Set(image);
        self
    }

    async fn insert_with_tags(self, db: &DbConn, tag_ids: Vec<Uuid>) -> Result<note::Model, DbErr> {
        let note = self.insert(db).await?;
        for tag_id in tag_ids {
            notes_tags::ActiveModel {
                note_id: Set(note.id),
                tag_id: Set(tag_id),
            }
            .insert(db)
            .await?;
        }
        Ok(note)
    }
}
