use actix_session::Session;
use actix_web::{
    get, post,
    web::{Data, Form},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use minijinja::context;
use sea_orm::DbConn;
use use_cases::{
    users::{register::register_user, types::RegisterForm},
    FormErrors, UseCaseError,
};

use crate::{
    flash::{push_flash, take_flashes, FlashLevel},
    utils::{redirect, render_html, response_500},
};

#[tracing::instrument(name = "Showing the registration form", skip(session))]
#[get("/register")]
pub async fn register_form(session: Session) -> HttpResponse {
    render_register(&session, RegisterForm::default(), FormErrors::new())
}

#[tracing::instrument(name = "Adding a new user", skip(db, session, req), fields(username = ?req.username))]
#[post("/register")]
pub async fn register_user_endpoint(
    db: Data<DbConn>,
    session: Session,
    req: Form<RegisterForm>,
) -> HttpResponse {
    let params = req.into_inner();
    match register_user(params.clone(), UserAdapter::init(&db)).await {
        Ok(user) => {
            push_flash(
                &session,
                FlashLevel::Success,
                &format!("Account {} was created. You can log in now.", user.username),
            );
            redirect("/users/login")
        }
        Err(UseCaseError::Invalid(errors)) => render_register(&session, params, errors),
        Err(e) => response_500(e),
    }
}

fn render_register(session: &Session, form: RegisterForm, errors: FormErrors) -> HttpResponse {
    render_html(
        "users/register.html",
        context! {
            form,
            errors,
            messages => take_flashes(session),
            current_user => (),
        },
    )
}
