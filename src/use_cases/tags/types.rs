use chrono::{DateTime, FixedOffset};
use entities::tag;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TagVisible {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<FixedOffset>,
}

impl From<&tag::Model> for TagVisible {
    fn from(item: &tag::Model) -> Self {
        TagVisible {
            id: item.id,
            title: item.title.clone(),
            created_at: item.created_at,
        }
    }
}

impl From<tag::Model> for TagVisible {
    fn from(item: tag::Model) -> Self {
        TagVisible::from(&item)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TagForm {
    pub title: Option<String>,
}

impl From<&TagVisible> for TagForm {
    fn from(tag: &TagVisible) -> Self {
        TagForm {
            title: Some(tag.title.clone()),
        }
    }
}
