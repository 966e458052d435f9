use db_adapters::note_adapter::{NoteAdapter, NoteQuery};
use uuid::Uuid;

use crate::{error_500, notes::types::NoteVisible, UseCaseError};

pub async fn get_note<'a>(
    note_id: Uuid,
    note_adapter: NoteAdapter<'a>,
) -> Result<NoteVisible, UseCaseError> {
    note_adapter
        .get_with_tags(note_id)
        .await
        .map_err(error_500)?
        .map(NoteVisible::from)
        .ok_or(UseCaseError::NotFound(
            "Note with this id was not found".to_string(),
        ))
}
