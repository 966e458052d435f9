use actix_session::Session;
use actix_web::{
    get, post,
    web::{Data, Form, ReqData},
    HttpResponse,
};
use db_adapters::tag_adapter::TagAdapter;
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    tags::{create::create_tag, types::TagForm},
    FormErrors, UseCaseError,
};

use crate::{
    tags::render_tag_form,
    utils::{redirect, response_500},
};

#[tracing::instrument(name = "Showing the tag create form", skip(user, session))]
#[get("/tag-create/")]
pub async fn create_tag_form(
    user: Option<ReqData<user_entity::Model>>,
    session: Session,
) -> HttpResponse {
    render_tag_form(user, &session, None, TagForm::default(), FormErrors::new())
}

#[tracing::instrument(name = "Creating a tag", skip(db, user, session))]
#[post("/tag-create/")]
pub async fn create_tag_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    session: Session,
    req: Form<TagForm>,
) -> HttpResponse {
    let params = req.into_inner();
    match create_tag(params.clone(), TagAdapter::init(&db)).await {
        Ok(_) => redirect("/tag-list"),
        Err(UseCaseError::Invalid(errors)) => render_tag_form(user, &session, None, params, errors),
        Err(UseCaseError::Conflict(message)) => render_tag_form(
            user,
            &session,
            None,
            params,
            FormErrors::single("title", message),
        ),
        Err(e) => response_500(e),
    }
}
