pub mod types;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::forms::{required_text, FormErrors};

pub(crate) const TAG_TITLE_MAX_CHARS: usize = 240;
pub(crate) const DUPLICATE_TITLE: &str = "Tag with this Title already exists.";

pub(crate) fn clean_title(title: &Option<String>) -> Result<String, FormErrors> {
    let mut errors = FormErrors::new();
    match required_text(&mut errors, "title", title, TAG_TITLE_MAX_CHARS) {
        Some(title) if errors.is_empty() => Ok(title),
        _ => Err(errors),
    }
}
