use actix_session::Session;
use use_cases::notes::types::RejectedNoteForm;
use tracing::{event, Level};

pub const USER_ID_KEY: &str = "user_id";
const REJECTED_NOTE_FORM_KEY: &str = "_note_create_form";

pub fn get_user_id(session: &Session) -> Result<uuid::Uuid, String> {
    match session.get(USER_ID_KEY) {
        Ok(user_id) => match user_id {
            None => Err("You are not authenticated".to_string()),
            Some(id) => Ok(id),
        },
        Err(e) => Err(e.to_string()),
    }
}

/// Keeps a rejected note form for the page the client is redirected to.
pub fn stash_rejected_note_form(session: &Session, rejected: RejectedNoteForm) {
    if let Err(e) = session.insert(REJECTED_NOTE_FORM_KEY, rejected) {
        event!(target: "backend", Level::WARN, "Error storing rejected note form: {:?}", e);
    }
}

pub fn take_rejected_note_form(session: &Session) -> Option<RejectedNoteForm> {
    session
        .remove_as::<RejectedNoteForm>(REJECTED_NOTE_FORM_KEY)
        .and_then(Result::ok)
}
