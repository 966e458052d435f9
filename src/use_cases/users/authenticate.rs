use db_adapters::user_adapter::{UserAdapter, UserFilter, UserMutation, UserQuery};
use entities::user;

use crate::{
    error_500,
    forms::{clean_text, FormErrors, REQUIRED},
    users::{password::verify_password, types::LoginForm},
    UseCaseError,
};

pub const INVALID_LOGIN: &str = "Please enter a correct username and password. Note that both fields may be case-sensitive.";

/// Checks the credentials of an active user and records the login.
pub async fn authenticate_user<'a>(
    params: LoginForm,
    user_adapter: UserAdapter<'a>,
) -> Result<user::Model, UseCaseError> {
    let username = clean_text(&params.username);
    let password = params.password.filter(|p| !p.is_empty());
    let (username, password) = match (username, password) {
        (Some(username), Some(password)) => (username, password),
        (username, password) => {
            let mut errors = FormErrors::new();
            if username.is_none() {
                errors.add("username", REQUIRED);
            }
            if password.is_none() {
                errors.add("password", REQUIRED);
            }
            return Err(UseCaseError::Invalid(errors));
        }
    };

    let user = user_adapter
        .clone()
        .filter_eq_is_active(true)
        .get_by_username(&username)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::Unauthorized)?;
    verify_password(&user.password, password.as_bytes())
        .map_err(|_| UseCaseError::Unauthorized)?;

    tracing::event!(target: "backend", tracing::Level::INFO, "User logged in successfully.");
    user_adapter.update_last_login(user).await.map_err(error_500)
}
