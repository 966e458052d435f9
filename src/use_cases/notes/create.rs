use db_adapters::{
    note_adapter::{CreateNoteParams, NoteAdapter, NoteMutation},
    tag_adapter::TagAdapter,
};
use entities::user as user_entity;

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

pub async fn create_note<'a>(
    user: Option<user_entity::Model>,
    params: NoteForm,
    image: Option<ImageUpload>,
    note_adapter: NoteAdapter<'a>,
    tag_adapter: TagAdapter<'a>,
    image_store: &impl ImageStore,
) -> Result<NoteVisible, UseCaseError> {
    let cleaned = clean_note_form(&params, image.as_ref(), tag_adapter).await?;
    let tag_ids = cleaned.tag_ids();

    let stored_image = match &image {
        Some(upload) => Some(image_store.store(upload).map_err(error_500)?),
        None => None,
    };

    match note_adapter
        .create(CreateNoteParams {
            user_id: user.map(|user| user.id),
            pinned: cleaned.pinned,
            title: cleaned.title,
            description: cleaned.description,
            date: cleaned.date,
            color: cleaned.color,
            image: stored_image.clone(),
            tag_ids,
        })
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
