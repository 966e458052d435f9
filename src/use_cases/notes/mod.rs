pub mod image;
pub mod types;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod toggle_pin;
pub mod update;

use chrono::NaiveDate;
use db_adapters::{
    tag_adapter::{TagAdapter, TagFilter, TagQuery},
    CustomDbErr,
};
use entities::{custom_methods::NoteColorTrait, sea_orm_active_enums::NoteColor, tag};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{
    error_500,
    forms::{clean_text, invalid_choice, required_text, FormErrors},
    notes::{
        image::{ImageUpload, INVALID_IMAGE},
        types::NoteForm,
    },
    UseCaseError,
};

pub(crate) const NOTE_TITLE_MAX_CHARS: usize = 400;
pub(crate) const RECENT_NOTES_LIMIT: u64 = 30;

pub(crate) struct CleanedNote {
    pub pinned: bool,
    pub title: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub color: NoteColor,
    pub tags: Vec<tag::Model>,
}

impl CleanedNote {
    pub fn tag_ids(&self) -> Vec<Uuid> {
        self.tags.iter().map(|tag| tag.id).collect()
    }
}

/// Validates a submitted note form. Field problems come back as
/// `UseCaseError::Invalid`.
pub(crate) async fn clean_note_form(
    form: &NoteForm,
    image: Option<&ImageUpload>,
    tag_adapter: TagAdapter<'_>,
) -> Result<CleanedNote, UseCaseError> {
    let mut errors = FormErrors::new();

    let title = required_text(&mut errors, "title", &form.title, NOTE_TITLE_MAX_CHARS);

    let date = clean_text(&form.date).and_then(|date| {
        NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| errors.add("date", "Enter a valid date."))
            .ok()
    });

    let color = match clean_text(&form.color) {
        None => Some(NoteColor::default()),
        Some(symbol) => {
            let color = NoteColor::from_symbol(&symbol);
            if color.is_none() {
                errors.add("color", invalid_choice(&symbol));
            }
            color
        }
    };

    let tags = clean_tags(&mut errors, &form.tags, tag_adapter).await?;

    if image.is_some_and(|upload| !upload.is_acceptable()) {
        errors.add("image", INVALID_IMAGE);
    }

    match (title, color) {
        (Some(title), Some(color)) if errors.is_empty() => Ok(CleanedNote {
            pinned: form.is_pinned(),
            title,
            description: clean_text(&form.description),
            date,
            color,
            tags,
        }),
        _ => Err(UseCaseError::Invalid(errors)),
    }
}

/// A tag deleted between validation and write shows up as a tags error.
pub(crate) fn write_err(e: DbErr) -> UseCaseError {
    match &e {
        DbErr::Custom(message) => match CustomDbErr::from(message) {
            CustomDbErr::NotFound => UseCaseError::Invalid(FormErrors::single(
                "tags",
                "Select a valid choice. That choice is not one of the available choices.",
            )),
            _ => error_500(e),
        },
        _ => error_500(e),
    }
}

async fn clean_tags(
    errors: &mut FormErrors,
    raw_tags: &[String],
    tag_adapter: TagAdapter<'_>,
) -> Result<Vec<tag::Model>, UseCaseError> {
    let mut tag_ids = Vec::new();
    for raw in raw_tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        match Uuid::parse_str(raw) {
            Ok(id) if !tag_ids.contains(&id) => tag_ids.push(id),
            Ok(_) => {}
            Err(_) => errors.add("tags", invalid_choice(raw)),
        }
    }
    if tag_ids.is_empty() {
        return Ok(Vec::new());
    }

    let tags = tag_adapter
        .filter_in_ids(tag_ids.clone())
        .get_all()
        .await
        .map_err(error_500)?;
    for missing in tag_ids
        .iter()
        .filter(|id| !tags.iter().any(|tag| tag.id == **id))
    {
        errors.add("tags", invalid_choice(&missing.to_string()));
    }
    Ok(tags)
}
