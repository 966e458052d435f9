use std::fmt::Debug;

use actix_web::{
    http::{
        header::{LOCATION, REFERER},
        StatusCode,
    },
    HttpRequest, HttpResponse,
};
use minijinja::{context, Value};
use tracing::{event, Level};

use crate::templates::render;

pub mod session;

/// Rendered page with the given status.
pub fn render_page(status: StatusCode, name: &str, ctx: Value) -> HttpResponse {
    match render(name, ctx) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => response_500(e),
    }
}

pub fn render_html(name: &str, ctx: Value) -> HttpResponse {
    render_page(StatusCode::OK, name, ctx)
}

/// Found: redirect with 302
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}

/// NotFound
pub fn response_404() -> HttpResponse {
    not_found_page()
}

pub fn not_found_page() -> HttpResponse {
    render_page(
        StatusCode::NOT_FOUND,
        "404.html",
        context! { messages => Vec::<Value>::new() },
    )
}

/// Internal Server Error: with logging
pub fn response_500<T: Debug>(e: T) -> HttpResponse {
    event!(target: "backend", Level::ERROR, "{:?}", e);
    match render("500.html", context! { messages => Vec::<Value>::new() }) {
        Ok(body) => HttpResponse::InternalServerError()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(_) => HttpResponse::InternalServerError()
            .body("Some unexpected error happened. Please try again later."),
    }
}

/// Default service for paths no route matches.
pub async fn not_found() -> HttpResponse {
    not_found_page()
}

/// Keeps redirects on this site: a path, never a scheme relative `//host`.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(next) if next.starts_with('/') && !next.starts_with("//") && !next.contains('\\') => {
            next
        }
        _ => "/",
    }
}

/// The Referer as a path on this site, `/` when missing or pointing elsewhere.
pub fn local_referer(req: &HttpRequest) -> String {
    let conn = req.connection_info();
    let origin = format!("{}://{}", conn.scheme(), conn.host());
    let referer = req
        .headers()
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .map(|referer| match referer.strip_prefix(origin.as_str()) {
            Some("") => "/",
            Some(path) => path,
            None => referer,
        });
    safe_next(referer).to_string()
}
