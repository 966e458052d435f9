use chrono::Utc;
use entities::tag;
use sea_orm::Set;
use uuid::Uuid;

pub fn tag() -> tag::ActiveModel {
    let id = Uuid::now_v7();
    tag::ActiveModel {
        id: Set(id),
        title: Set(format!("tag_{}", id.simple())),
        created_at: Set(Utc::now().into()),
    }
}

pub trait TagFactory {
    fn title(self, title: &str) -> tag::ActiveModel;
}

impl TagFactory for tag::ActiveModel {
    fn title(mut self, title: &str) -> tag::ActiveModel {
        self.title = Set(title.to_string());
        self
    }
}
