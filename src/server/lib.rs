use std::io;

use actix_session::{
    config::{PersistentSession, SessionMiddlewareBuilder},
    storage::{RedisSessionStore, SessionStore},
};
use actix_web::{
    cookie,
    error::InternalError,
    web::{self, scope, PathConfig},
    Scope,
};
use common::settings::types::Settings;
use web_adapters::{auth_routes, not_found, not_found_page, note_routes, tag_routes};

pub async fn get_preps_for_redis_session_store(
    settings: &Settings,
    redis_url: &str,
) -> io::Result<(RedisSessionStore, cookie::Key)> {
    let secret_key = cookie::Key::from(settings.secret.hmac_secret.as_bytes());
    let redis_store = RedisSessionStore::new(redis_url).await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Error on getting RedisSessionStore: {}", e),
        )
    })?;
    Ok((redis_store, secret_key))
}

pub fn setup_session_middleware_builder<S: SessionStore>(
    builder: SessionMiddlewareBuilder<S>,
    settings: &Settings,
) -> SessionMiddlewareBuilder<S> {
    let builder = builder
        .session_lifecycle(PersistentSession::default().session_ttl(cookie::time::Duration::weeks(2)))
        .cookie_name("sessionid".to_string())
        .cookie_same_site(cookie::SameSite::Lax);
    if settings.debug {
        builder.cookie_secure(false)
    } else {
        builder
    }
}

/// Every page of the site. Malformed ids in paths answer like unknown ones.
pub fn get_routes() -> Scope {
    scope("")
        .app_data(PathConfig::default().error_handler(|err, _| {
            InternalError::from_response(err, not_found_page()).into()
        }))
        .service(health_check)
        .configure(note_routes)
        .configure(tag_routes)
        .configure(auth_routes)
        .default_service(web::to(not_found))
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json("Application is safe and healthy.")
}
