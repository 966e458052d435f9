use actix_session::{Session, SessionInsertError};
use actix_web::{
    get, post,
    web::{Data, Form, Query},
    HttpResponse,
};
use db_adapters::user_adapter::UserAdapter;
use minijinja::context;
use sea_orm::DbConn;
use use_cases::{
    forms::NON_FIELD_ERRORS,
    users::{
        authenticate::{authenticate_user, INVALID_LOGIN},
        types::LoginForm,
    },
    FormErrors, UseCaseError,
};

use crate::{
    flash::take_flashes,
    utils::{redirect, render_html, response_500, safe_next, session::USER_ID_KEY},
};

#[derive(serde::Deserialize, Debug)]
pub struct NextQuery {
    next: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
    next: Option<String>,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"********")
            .field("next", &self.next)
            .finish()
    }
}

#[tracing::instrument(name = "Showing the login form", skip(session))]
#[get("/login")]
pub async fn login_form(session: Session, query: Query<NextQuery>) -> HttpResponse {
    render_login(&session, LoginForm::default(), FormErrors::new(), query.into_inner().next)
}

#[tracing::instrument(name = "Logging a user in", skip(db, session, req), fields(username = ?req.username))]
#[post("/login")]
pub async fn login_user(db: Data<DbConn>, session: Session, req: Form<LoginRequest>) -> HttpResponse {
    let LoginRequest {
        username,
        password,
        next,
    } = req.into_inner();
    let params = LoginForm { username, password };
    match authenticate_user(params.clone(), UserAdapter::init(&db)).await {
        Ok(user) => match renew_session(&session, user.id) {
            Ok(_) => redirect(safe_next(next.as_deref())),
            Err(e) => response_500(e),
        },
        Err(UseCaseError::Invalid(errors)) => render_login(&session, params, errors, next),
        Err(UseCaseError::Unauthorized) => render_login(
            &session,
            params,
            FormErrors::single(NON_FIELD_ERRORS, INVALID_LOGIN),
            next,
        ),
        Err(e) => response_500(e),
    }
}

fn renew_session(session: &Session, id: uuid::Uuid) -> Result<(), SessionInsertError> {
    session.renew();
    session.insert(USER_ID_KEY, id)
}

fn render_login(
    session: &Session,
    form: LoginForm,
    errors: FormErrors,
    next: Option<String>,
) -> HttpResponse {
    render_html(
        "users/login.html",
        context! {
            form,
            errors,
            next,
            messages => take_flashes(session),
            current_user => (),
        },
    )
}
