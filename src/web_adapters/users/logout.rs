use actix_session::Session;
use actix_web::{post, HttpResponse};
use tracing::{event, Level};

use crate::utils::{redirect, session::get_user_id};

#[tracing::instrument(name = "Log out user", skip(session))]
#[post("/logout")]
pub async fn log_out(session: Session) -> HttpResponse {
    if get_user_id(&session).is_ok() {
        event!(target: "backend", Level::INFO, "User_id retrieved from the session.");
    }
    session.purge();
    redirect("/users/login")
}
