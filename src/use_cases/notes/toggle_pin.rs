use db_adapters::note_adapter::{NoteAdapter, NoteMutation, NoteQuery};
use uuid::Uuid;

use crate::{error_500, UseCaseError};

/// Flips `pinned` and returns the new value.
pub async fn toggle_note_pin<'a>(
    note_id: Uuid,
    note_adapter: NoteAdapter<'a>,
) -> Result<bool, UseCaseError> {
    let note = note_adapter
        .clone()
        .get_by_id(note_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Note with this id was not found".to_string(),
        ))?;
    note_adapter
        .toggle_pinned(note)
        .await
        .map(|note| note.pinned)
        .map_err(error_500)
}
