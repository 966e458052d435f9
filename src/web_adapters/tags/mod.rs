mod create;
mod delete;
mod detail;
mod list;
mod update;

use actix_session::Session;
use actix_web::{
    web::{ReqData, ServiceConfig},
    HttpResponse,
};
use entities::user as user_entity;
use minijinja::context;
use use_cases::{
    tags::types::{TagForm, TagVisible},
    users::types::UserVisible,
    FormErrors,
};

use crate::{flash::take_flashes, utils::render_html};

pub fn tag_routes(cfg: &mut ServiceConfig) {
    cfg.service(list::list_tags_endpoint)
        .service(detail::tag_detail_endpoint)
        .service(create::create_tag_form)
        .service(create::create_tag_endpoint)
        .service(update::update_tag_form)
        .service(update::update_tag_endpoint)
        .service(delete::delete_tag_confirmation)
        .service(delete::delete_tag_endpoint);
}

/// Create and update share one form page; `tag` is set when updating.
fn render_tag_form(
    user: Option<ReqData<user_entity::Model>>,
    session: &Session,
    tag: Option<TagVisible>,
    form: TagForm,
    errors: FormErrors,
) -> HttpResponse {
    render_html(
        "tags/form.html",
        context! {
            tag,
            form,
            errors,
            messages => take_flashes(session),
            current_user => user.map(|user| UserVisible::from(user.into_inner())),
        },
    )
}
