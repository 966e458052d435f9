use actix_session::Session;
use actix_web::{
    get, post,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::tag_adapter::TagAdapter;
use entities::user as user_entity;
use minijinja::context;
use sea_orm::DbConn;
use use_cases::{
    tags::{delete::delete_tag, get::get_tag},
    users::types::UserVisible,
    UseCaseError,
};

use crate::{
    flash::take_flashes,
    utils::{redirect, render_html, response_404, response_500},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    tag_id: uuid::Uuid,
}

#[tracing::instrument(name = "Confirming a tag deletion", skip(db, user, session))]
#[get("/tag-delete/{tag_id}/")]
pub async fn delete_tag_confirmation(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    session: Session,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match get_tag(path_param.tag_id, TagAdapter::init(&db)).await {
        Ok(tag) => render_html(
            "tags/delete_confirm.html",
            context! {
                tag,
                messages => take_flashes(&session),
                current_user => user.map(|user| UserVisible::from(user.into_inner())),
            },
        ),
        Err(UseCaseError::NotFound(_)) => response_404(),
        Err(e) => response_500(e),
    }
}

#[tracing::instrument(name = "Deleting a tag", skip(db))]
#[post("/tag-delete/{tag_id}/")]
pub async fn delete_tag_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match delete_tag(path_param.tag_id, TagAdapter::init(&db)).await {
        Ok(_) => redirect("/tag-list"),
        Err(UseCaseError::NotFound(_)) => response_404(),
        Err(e) => response_500(e),
    }
}
