use db_adapters::{
    user_adapter::{CreateUserParams, UserAdapter, UserMutation, UserQuery},
    CustomDbErr,
};
use sea_orm::DbErr;
use validator::ValidateEmail;

use crate::{
    error_500,
    forms::{check_max_chars, clean_text, FormErrors, REQUIRED},
    users::{
        password::{hash, validate_password},
        types::{RegisterForm, UserVisible},
    },
    UseCaseError,
};

const USERNAME_MAX_CHARS: usize = 150;
const USERNAME_TAKEN: &str = "A user with that username already exists.";

pub async fn register_user<'a>(
    params: RegisterForm,
    user_adapter: UserAdapter<'a>,
) -> Result<UserVisible, UseCaseError> {
    let mut errors = FormErrors::new();

    let username = clean_text(&params.username);
    match &username {
        Some(username) => {
            check_max_chars(&mut errors, "username", username, USERNAME_MAX_CHARS);
            if !is_valid_username(username) {
                errors.add(
                    "username",
                    "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
                );
            }
        }
        None => errors.add("username", REQUIRED),
    }

    let email = clean_text(&params.email).unwrap_or_default();
    if !email.is_empty() && !email.validate_email() {
        errors.add("email", "Enter a valid email address.");
    }

    // Passwords are taken as typed.
    let password1 = params.password1.filter(|p| !p.is_empty());
    let password2 = params.password2.filter(|p| !p.is_empty());
    if password1.is_none() {
        errors.add("password1", REQUIRED);
    }
    match (&password1, &password2) {
        (_, None) => errors.add("password2", REQUIRED),
        (Some(p1), Some(p2)) if p1 != p2 => {
            errors.add("password2", "The two password fields didn’t match.")
        }
        (Some(p1), Some(_)) => {
            for message in validate_password(p1, username.as_deref().unwrap_or_default()) {
                errors.add("password2", message);
            }
        }
        (None, Some(_)) => {}
    }

    let (username, password) = match (username, password1) {
        (Some(username), Some(password)) if errors.is_empty() => (username, password),
        _ => return Err(UseCaseError::Invalid(errors)),
    };

    if user_adapter
        .clone()
        .get_by_username(&username)
        .await
        .map_err(error_500)?
        .is_some()
    {
        return Err(UseCaseError::Invalid(FormErrors::single(
            "username",
            USERNAME_TAKEN,
        )));
    }

    let password = hash(password.as_bytes()).map_err(error_500)?;
    user_adapter
        .create(CreateUserParams {
            username,
            email,
            password,
            is_active: true,
        })
        .await
        .map(UserVisible::from)
        .map_err(|e| match &e {
            DbErr::Custom(message) => match CustomDbErr::from(message) {
                CustomDbErr::Duplicate => {
                    UseCaseError::Invalid(FormErrors::single("username", USERNAME_TAKEN))
                }
                _ => error_500(e),
            },
            _ => error_500(e),
        })
}

fn is_valid_username(username: &str) -> bool {
    username
        .chars()
        .all(|c| c.is_alphanumeric() || "@.+-_".contains(c))
}
