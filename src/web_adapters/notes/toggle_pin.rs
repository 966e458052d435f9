use actix_web::{
    route,
    web::{Data, Path},
    HttpRequest, HttpResponse,
};
use db_adapters::note_adapter::NoteAdapter;
use sea_orm::DbConn;
use use_cases::{notes::toggle_pin::toggle_note_pin, UseCaseError};

use crate::utils::{local_referer, redirect, response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    note_id: uuid::Uuid,
}

#[tracing::instrument(name = "Toggling a note pin", skip(db, req))]
#[route("/pinned/{note_id}/", method = "GET", method = "POST")]
pub async fn toggle_note_pin_endpoint(
    db: Data<DbConn>,
    req: HttpRequest,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match toggle_note_pin(path_param.note_id, NoteAdapter::init(&db)).await {
        Ok(_) => redirect(&local_referer(&req)),
        Err(UseCaseError::NotFound(_)) => response_404(),
        Err(e) => response_500(e),
    }
}
