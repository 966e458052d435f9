use actix_session::Session;
use actix_web::{
    get,
    web::{Data, Query, ReqData},
    HttpResponse,
};
use db_adapters::tag_adapter::TagAdapter;
use entities::user as user_entity;
use minijinja::context;
use sea_orm::DbConn;
use use_cases::{filters::TagListQuery, tags::list::list_tags, users::types::UserVisible};

use crate::{
    flash::take_flashes,
    utils::{render_html, response_500},
};

#[tracing::instrument(name = "Listing tags", skip(db, user, session))]
#[get("/tag-list")]
pub async fn list_tags_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    session: Session,
    query: Query<TagListQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    match list_tags(query.clone(), TagAdapter::init(&db)).await {
        Ok(tags) => render_html(
            "tags/list.html",
            context! {
                tags,
                query,
                messages => take_flashes(&session),
                current_user => user.map(|user| UserVisible::from(user.into_inner())),
            },
        ),
        Err(e) => response_500(e),
    }
}
