use actix_multipart::form::MultipartForm;
use actix_session::Session;
use actix_web::{
    post,
    web::{Data, ReqData},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::{note_adapter::NoteAdapter, tag_adapter::TagAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    notes::{create::create_note, types::RejectedNoteForm},
    UseCaseError,
};

use crate::{
    flash::{push_flash, FlashLevel},
    media::MediaStore,
    notes::form::{image_upload, NoteMultipart},
    utils::{redirect, response_500, session::stash_rejected_note_form},
};

/// Answers with a redirect home in every non-fatal case. A rejected form is
/// kept in the session and shown again on the home page.
#[tracing::instrument(name = "Creating a note", skip(db, user, session, settings, payload))]
#[post("/validate-note-creation/")]
pub async fn create_note_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    session: Session,
    settings: Data<Settings>,
    payload: MultipartForm<NoteMultipart>,
) -> HttpResponse {
    let (params, image) = payload.into_inner().into_parts();
    match create_note(
        user.map(|user| user.into_inner()),
        params.clone(),
        image.as_ref().map(image_upload),
        NoteAdapter::init(&db),
        TagAdapter::init(&db),
        &MediaStore::from_settings(&settings),
    )
    .await
    {
        Ok(_) => {
            push_flash(&session, FlashLevel::Success, "New note created");
            redirect("/")
        }
        Err(UseCaseError::Invalid(errors)) => {
            stash_rejected_note_form(
                &session,
                RejectedNoteForm {
                    form: params,
                    errors,
                },
            );
            redirect("/")
        }
        Err(e) => response_500(e),
    }
}
