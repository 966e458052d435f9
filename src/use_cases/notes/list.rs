use db_adapters::{
    note_adapter::{NoteAdapter, NoteFilter, NoteOrder, NoteQuery},
    Order::Desc,
};

use crate::{
    error_500,
    filters::{filter_notes, NoteListQuery},
    notes::{
        types::{HomeNotes, NoteVisible},
        RECENT_NOTES_LIMIT,
    },
    UseCaseError,
};

pub async fn list_home_notes<'a>(
    query: NoteListQuery,
    note_adapter: NoteAdapter<'a>,
) -> Result<HomeNotes, UseCaseError> {
    let filtered = filter_notes(&query, note_adapter);

    let pinned = filtered
        .clone()
        .filter_eq_pinned(true)
        .order_by_pinned(Desc)
        .order_by_timestamp(Desc)
        .order_by_id(Desc)
        .get_all_with_tags()
        .await
        .map_err(error_500)?;
    let recent = filtered
        .filter_eq_pinned(false)
        .order_by_timestamp(Desc)
        .order_by_id(Desc)
        .limit(RECENT_NOTES_LIMIT)
        .get_all_with_tags()
        .await
        .map_err(error_500)?;

    Ok(HomeNotes {
        pinned: pinned.into_iter().map(NoteVisible::from).collect(),
        recent: recent.into_iter().map(NoteVisible::from).collect(),
    })
}
