use actix_session::Session;
use actix_web::{
    get,
    web::{Data, Query, ReqData},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::{note_adapter::NoteAdapter, tag_adapter::TagAdapter};
use entities::user as user_entity;
use minijinja::context;
use sea_orm::DbConn;
use use_cases::{
    filters::{NoteListQuery, TagListQuery},
    notes::{list::list_home_notes, types::RejectedNoteForm},
    tags::list::list_tags,
    users::types::UserVisible,
};

use crate::{
    flash::take_flashes,
    notes::color_choices,
    utils::{render_html, response_500, session::take_rejected_note_form},
};

#[tracing::instrument(name = "Rendering the home page", skip(db, user, session, settings))]
#[get("/")]
pub async fn home(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    session: Session,
    settings: Data<Settings>,
    query: Query<Vec<(String, String)>>,
) -> HttpResponse {
    let query = NoteListQuery::from_pairs(query.into_inner());
    let notes = match list_home_notes(query.clone(), NoteAdapter::init(&db)).await {
        Ok(notes) => notes,
        Err(e) => return response_500(e),
    };
    let tags = match list_tags(TagListQuery::default(), TagAdapter::init(&db)).await {
        Ok(tags) => tags,
        Err(e) => return response_500(e),
    };
    let RejectedNoteForm { form, errors } = take_rejected_note_form(&session).unwrap_or_default();

    render_html(
        "notes/home.html",
        context! {
            pinned => notes.pinned,
            recent => notes.recent,
            tags,
            query,
            form,
            errors,
            colors => color_choices(),
            media_url => &settings.application.media_url,
            messages => take_flashes(&session),
            current_user => user.map(|user| UserVisible::from(user.into_inner())),
        },
    )
}
