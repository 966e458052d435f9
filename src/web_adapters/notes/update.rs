use actix_multipart::form::MultipartForm;
use actix_session::Session;
use actix_web::{
    get, post,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::{note_adapter::NoteAdapter, tag_adapter::TagAdapter};
use entities::user as user_entity;
use minijinja::context;
use sea_orm::DbConn;
use use_cases::{
    filters::TagListQuery,
    notes::{
        get::get_note,
        types::{NoteForm, NoteVisible},
        update::update_note,
    },
    tags::list::list_tags,
    users::types::UserVisible,
    FormErrors, UseCaseError,
};

use crate::{
    flash::{push_flash, take_flashes, FlashLevel},
    media::MediaStore,
    notes::{
        color_choices,
        form::{image_upload, NoteMultipart},
    },
    utils::{redirect, render_html, response_404, response_500},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    note_id: uuid::Uuid,
}

#[tracing::instrument(name = "Showing the note update form", skip(db, user, session, settings))]
#[get("/note/update/{note_id}/")]
pub async fn update_note_form(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    session: Session,
    settings: Data<Settings>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match get_note(path_param.note_id, NoteAdapter::init(&db)).await {
        Ok(note) => {
            let form = NoteForm::from(&note);
            render_update_page(&db, user, &session, &settings, note, form, FormErrors::new()).await
        }
        Err(UseCaseError::NotFound(_)) => response_404(),
        Err(e) => response_500(e),
    }
}

#[tracing::instrument(name = "Updating a note", skip(db, user, session, settings, payload))]
#[post("/note/update/{note_id}/")]
pub async fn update_note_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    session: Session,
    settings: Data<Settings>,
    path_param: Path<PathParam>,
    payload: MultipartForm<NoteMultipart>,
) -> HttpResponse {
    let (params, image) = payload.into_inner().into_parts();
    match update_note(
        path_param.note_id,
        params.clone(),
        image.as_ref().map(image_upload),
        NoteAdapter::init(&db),
        TagAdapter::init(&db),
        &MediaStore::from_settings(&settings),
    )
    .await
    {
        Ok(note) => {
            push_flash(
                &session,
                FlashLevel::Success,
                &format!("The note \"{}\" was updated successfully.", note.title),
            );
            redirect("/")
        }
        Err(UseCaseError::Invalid(errors)) => {
            match get_note(path_param.note_id, NoteAdapter::init(&db)).await {
                Ok(note) => render_update_page(&db, user, &session, &settings, note, params, errors).await,
                Err(e) => response_500(e),
            }
        }
        Err(UseCaseError::NotFound(_)) => response_404(),
        Err(e) => response_500(e),
    }
}

async fn render_update_page(
    db: &DbConn,
    user: Option<ReqData<user_entity::Model>>,
    session: &Session,
    settings: &Settings,
    note: NoteVisible,
    form: NoteForm,
    errors: FormErrors,
) -> HttpResponse {
    match list_tags(TagListQuery::default(), TagAdapter::init(db)).await {
        Ok(tags) => render_html(
            "notes/update.html",
            context! {
                note,
                form,
                errors,
                tags,
                colors => color_choices(),
                media_url => &settings.application.media_url,
                messages => take_flashes(session),
                current_user => user.map(|user| UserVisible::from(user.into_inner())),
            },
        ),
        Err(e) => response_500(e),
    }
}
