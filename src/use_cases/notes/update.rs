use db_adapters::{
    note_adapter::{NoteAdapter, NoteMutation, NoteQuery, UpdateNoteParams},
    tag_adapter::TagAdapter,
};
use uuid::Uuid;

use crate::{
    error_500,
    notes::{
        clean_note_form,
        image::{ImageStore, ImageUpload},
        types::{NoteForm, NoteVisible},
        write_err,
    },
    UseCaseError,
};

/// A new upload replaces the current image; `image_clear` drops it.
pub async fn update_note<'a>(
    note_id: Uuid,
    params: NoteForm,
    image: Option<ImageUpload>,
    note_adapter: NoteAdapter<'a>,
    tag_adapter: TagAdapter<'a>,
    image_store: &impl ImageStore,
) -> Result<NoteVisible, UseCaseError> {
    let note = note_adapter
        .clone()
        .get_by_id(note_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Note with this id was not found".to_string(),
        ))?;
    let cleaned = clean_note_form(&params, image.as_ref(), tag_adapter).await?;
    let tag_ids = cleaned.tag_ids();

    let stored_image = match &image {
        Some(upload) => Some(image_store.store(upload).map_err(error_500)?),
        None => None,
    };
    let next_image = match (&stored_image, params.clears_image()) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => None,
        (None, false) => note.image.clone(),
    };

    match note_adapter
        .update(
            note,
            UpdateNoteParams {
                pinned: cleaned.pinned,
                title: cleaned.title,
                description: cleaned.description,
                date: cleaned.date,
                color: cleaned.color,
                image: next_image,
                tag_ids,
            },
        )
        .await
    {
        Ok(note) => Ok(NoteVisible::from((note, cleaned.tags))),
        Err(e) => {
            if let Some(path) = &stored_image {
                image_store.discard(path);
            }
            Err(write_err(e))
        }
    }
}
