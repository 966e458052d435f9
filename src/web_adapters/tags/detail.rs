use actix_session::Session;
use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::tag_adapter::TagAdapter;
use entities::user as user_entity;
use minijinja::context;
use sea_orm::DbConn;
use use_cases::{tags::get::get_tag, users::types::UserVisible, UseCaseError};

use crate::{
    flash::take_flashes,
    utils::{render_html, response_404, response_500},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    tag_id: uuid::Uuid,
}

#[tracing::instrument(name = "Showing a tag", skip(db, user, session))]
#[get("/tag-detail/{tag_id}/")]
pub async fn tag_detail_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    session: Session,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match get_tag(path_param.tag_id, TagAdapter::init(&db)).await {
        Ok(tag) => render_html(
            "tags/detail.html",
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
