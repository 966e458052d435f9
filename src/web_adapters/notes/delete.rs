use actix_session::Session;
use actix_web::{
    route,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::note_adapter::NoteAdapter;
use sea_orm::DbConn;
use use_cases::{notes::delete::delete_note, UseCaseError};

use crate::{
    flash::{push_flash, FlashLevel},
    utils::{redirect, response_404, response_500},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    note_id: uuid::Uuid,
}

#[tracing::instrument(name = "Deleting a note", skip(db, session))]
#[route("/note/delete/{note_id}/", method = "GET", method = "POST")]
pub async fn delete_note_endpoint(
    db: Data<DbConn>,
    session: Session,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match delete_note(path_param.note_id, NoteAdapter::init(&db)).await {
        Ok(_) => {
            push_flash(&session, FlashLevel::Warning, "You deleted the note");
            redirect("/")
        }
        Err(UseCaseError::NotFound(_)) => response_404(),
        Err(e) => response_500(e),
    }
}
