use chrono::{DateTime, FixedOffset, NaiveDate};
use entities::{custom_methods::NoteColorTrait, note, sea_orm_active_enums::NoteColor, tag};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tags::types::TagVisible;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct NoteVisible {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub pinned: bool,
    pub title: String,
    pub description: Option<String>,
    pub timestamp: DateTime<FixedOffset>,
    pub date: Option<NaiveDate>,
    pub color: NoteColor,
    pub color_label: String,
    pub image: Option<String>,
    pub tags: Vec<TagVisible>,
}

impl From<(note::Model, Vec<tag::Model>)> for NoteVisible {
    fn from((item, tags): (note::Model, Vec<tag::Model>)) -> Self {
        NoteVisible {
            id: item.id,
            user_id: item.user_id,
            pinned: item.pinned,
            title: item.title,
            description: item.description,
            timestamp: item.timestamp,
            date: item.date,
            color: item.color,
            color_label: item.color.label().to_string(),
            image: item.image,
            tags: tags.iter().map(TagVisible::from).collect(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct HomeNotes {
    pub pinned: Vec<NoteVisible>,
    pub recent: Vec<NoteVisible>,
}

/// Raw values of a submitted note form. Every field is kept as typed so the
/// form can be shown again after a failed submission.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NoteForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub color: Option<String>,
    pub pinned: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_clear: Option<String>,
}

impl NoteForm {
    pub fn is_pinned(&self) -> bool {
        is_checked(&self.pinned)
    }

    pub fn clears_image(&self) -> bool {
        is_checked(&self.image_clear)
    }
}

fn is_checked(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some("on" | "true" | "1"))
}

impl From<&NoteVisible> for NoteForm {
    fn from(note: &NoteVisible) -> Self {
        NoteForm {
            title: Some(note.title.clone()),
            description: note.description.clone(),
            date: note.date.map(|d| d.format("%Y-%m-%d").to_string()),
            color: Some(note.color.symbol()),
            pinned: note.pinned.then(|| "on".to_string()),
            tags: note.tags.iter().map(|t| t.id.to_string()).collect(),
            image_clear: None,
        }
    }
}

/// A note form rejected by validation, with the values to show again.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RejectedNoteForm {
    pub form: NoteForm,
    pub errors: crate::FormErrors,
}
