use entities::user;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct UserVisible {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

impl From<&user::Model> for UserVisible {
    fn from(item: &user::Model) -> Self {
        UserVisible {
            id: item.id,
            username: item.username.clone(),
            email: item.email.clone(),
            is_active: item.is_active,
        }
    }
}

impl From<user::Model> for UserVisible {
    fn from(item: user::Model) -> Self {
        UserVisible::from(&item)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RegisterForm {
    pub username: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password1: Option<String>,
    #[serde(skip_serializing)]
    pub password2: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct LoginForm {
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}
