use db_adapters::{
    note_adapter::{NoteAdapter, NoteFilter},
    tag_adapter::{TagAdapter, TagFilter},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct TagListQuery {
    pub q: Option<String>,
    pub search_name: Option<String>,
}

#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct NoteListQuery {
    pub q: Option<String>,
    pub tag: Vec<String>,
}

impl NoteListQuery {
    /// Builds the query from raw query string pairs, keeping every `tag`.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut query, (key, value)| {
                match key.as_str() {
                    "q" => query.q = Some(value),
                    "tag" => query.tag.push(value),
                    _ => {}
                }
                query
            })
    }

    pub fn selected_tags(&self) -> Vec<&str> {
        self.tag
            .iter()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn filter_tags<'a>(query: &TagListQuery, tag_adapter: TagAdapter<'a>) -> TagAdapter<'a> {
    [&query.q, &query.search_name]
        .into_iter()
        .filter_map(active)
        .fold(tag_adapter, |adapter, needle| {
            adapter.filter_title_icontains(needle)
        })
}

/// Ids that do not parse still take part in the tag filter, so a request for
/// unknown tags yields no notes instead of all of them.
pub fn filter_notes<'a>(query: &NoteListQuery, note_adapter: NoteAdapter<'a>) -> NoteAdapter<'a> {
    let mut note_adapter = note_adapter;
    if let Some(q) = active(&query.q) {
        note_adapter = note_adapter.filter_title_icontains(q);
    }
    let selected = query.selected_tags();
    if !selected.is_empty() {
        let tag_ids = selected
            .into_iter()
            .filter_map(|t| Uuid::parse_str(t).ok())
            .collect();
        note_adapter = note_adapter.filter_has_any_tag(tag_ids);
    }
    note_adapter
}
