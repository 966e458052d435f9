use chrono::Utc;
use entities::user;
use sea_orm::Set;

pub fn user() -> user::ActiveModel {
    let now = Utc::now();
    user::ActiveModel {
        id: Set(uuid::Uuid::now_v7()),
        username: Set(format!("user_{}", uuid::Uuid::now_v7().simple())),
        email: Set("notebook@test.com".to_string()),
        password: Set("password".to_string()),
        is_active: Set(true),
        last_login: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait UserFactory {
    fn username(self, username: &str) -> user::ActiveModel;
    fn is_active(self, is_active: bool) -> user::ActiveModel;
    fn password(self, hashed_password: &str) -> user::ActiveModel;
}

impl UserFactory for user::ActiveModel {
    fn username(mut self, username: &str) -> user::ActiveModel {
        self.username = Set(username.to_string());
        self
    }

    fn is_active(mut self, is_active: bool) -> user::ActiveModel {
        self.is_active = Set(is_active);
        self
    }

    fn password(mut self, hashed_password: &str) -> user::ActiveModel {
        self.password = Set(hashed_password.to_string());
        self
    }
}
