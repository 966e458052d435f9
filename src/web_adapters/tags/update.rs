use actix_session::Session;
use actix_web::{
    get, post,
    web::{Data, Form, Path, ReqData},
    HttpResponse,
};
use db_adapters::tag_adapter::TagAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    tags::{get::get_tag, types::TagForm, update::update_tag},
    FormErrors, UseCaseError,
};

use crate::{
    tags::render_tag_form,
    utils::{redirect, response_404, response_500},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    tag_id: uuid::Uuid,
}

#[tracing::instrument(name = "Showing the tag update form", skip(db, user, session))]
#[get("/tag-update/{tag_id}/")]
pub async fn update_tag_form(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    session: Session,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match get_tag(path_param.tag_id, TagAdapter::init(&db)).await {
        Ok(tag) => {
            let form = TagForm::from(&tag);
            render_tag_form(user, &session, Some(tag), form, FormErrors::new())
        }
        Err(UseCaseError::NotFound(_)) => response_404(),
        Err(e) => response_500(e),
    }
}

#[tracing::instrument(name = "Updating a tag", skip(db, user, session))]
#[post("/tag-update/{tag_id}/")]
pub async fn update_tag_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    session: Session,
    path_param: Path<PathParam>,
    req: Form<TagForm>,
) -> HttpResponse {
    let params = req.into_inner();
    let errors = match update_tag(path_param.tag_id, params.clone(), TagAdapter::init(&db)).await {
        Ok(_) => return redirect("/tag-list"),
        Err(UseCaseError::Invalid(errors)) => errors,
        Err(UseCaseError::Conflict(message)) => FormErrors::single("title", message),
        Err(UseCaseError::NotFound(_)) => return response_404(),
        Err(e) => return response_500(e),
    };
    match get_tag(path_param.tag_id, TagAdapter::init(&db)).await {
        Ok(tag) => render_tag_form(user, &session, Some(tag), params, errors),
        Err(e) => response_500(e),
    }
}
