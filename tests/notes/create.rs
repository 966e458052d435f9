use std::path::Path;

use actix_web::{http, test};
use entities::{note, notes_tags};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use crate::utils::{
    init_app, location, png_bytes, read_html, session_cookie, Connections, MultipartBody,
};
use common::factory::{self, *};

#[actix_web::test]
async fn groceries_note_with_tag_and_pin() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let home = factory::tag().title("Home").insert(&db).await?;

    let req = MultipartBody::new()
        .text("title", "Groceries")
        .text("description", "milk, eggs")
        .text("color", "c")
        .text("pinned", "on")
        .text("tags", &home.id.to_string())
        .post("/validate-note-creation/")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/"));
    let cookie = session_cookie(&res).unwrap();

    let note_in_db = note::Entity::find()
        .filter(note::Column::Title.eq("Groceries"))
        .one(&db)
        .await?
        .unwrap();
    assert!(note_in_db.pinned);
    assert_eq!(note_in_db.description, Some("milk, eggs".to_string()));
    let links = notes_tags::Entity::find()
        .filter(notes_tags::Column::NoteId.eq(note_in_db.id))
        .all(&db)
        .await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].tag_id, home.id);

    let req = test::TestRequest::get().uri("/").cookie(cookie).to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains("New note created"));
    assert!(html.contains("Groceries"));

    Ok(())
}

#[actix_web::test]
async fn too_long_title_is_shown_again_once() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let title = "x".repeat(401);

    let req = MultipartBody::new()
        .text("title", &title)
        .post("/validate-note-creation/")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/"));
    let cookie = session_cookie(&res).unwrap();
    assert_eq!(note::Entity::find().count(&db).await?, 0);

    let req = test::TestRequest::get()
        .uri("/")
        .cookie(cookie.clone())
        .to_request();
    let res = test::call_service(&app, req).await;
    let cookie = session_cookie(&res).unwrap_or(cookie);
    let html = read_html(res).await;
    assert!(html.contains("Ensure this value has at most 400 characters (it has 401)."));
    assert!(html.contains(&title));

    let req = test::TestRequest::get().uri("/").cookie(cookie).to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(!html.contains("Ensure this value has at most 400 characters"));

    Ok(())
}

#[actix_web::test]
async fn non_image_upload_is_rejected() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = MultipartBody::new()
        .text("title", "Receipt")
        .file("image", "receipt.txt", "text/plain", b"total: 12")
        .post("/validate-note-creation/")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    let cookie = session_cookie(&res).unwrap();
    assert_eq!(note::Entity::find().count(&db).await?, 0);

    let req = test::TestRequest::get().uri("/").cookie(cookie).to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains("Upload a valid image."));

    Ok(())
}

#[actix_web::test]
async fn text_file_named_like_png_is_rejected() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = MultipartBody::new()
        .text("title", "Whiteboard")
        .file("image", "evil.png", "image/png", b"this is plainly not a png")
        .post("/validate-note-creation/")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    let cookie = session_cookie(&res).unwrap();
    assert_eq!(note::Entity::find().count(&db).await?, 0);

    let req = test::TestRequest::get().uri("/").cookie(cookie).to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains("Upload a valid image."));

    Ok(())
}

#[actix_web::test]
async fn image_is_stored_under_media_root() -> Result<(), DbErr> {
    let Connections {
        app, db, settings, ..
    } = init_app().await?;

    let req = MultipartBody::new()
        .text("title", "Whiteboard")
        .file("image", "board.png", "image/png", &png_bytes())
        .post("/validate-note-creation/")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);

    let note_in_db = note::Entity::find().one(&db).await?.unwrap();
    let image = note_in_db.image.unwrap();
    assert!(image.starts_with("images/"));
    assert!(image.ends_with(".png"));
    let stored = Path::new(&settings.application.media_root).join(&image);
    assert!(stored.exists());
    std::fs::remove_file(stored).ok();

    Ok(())
}

#[actix_web::test]
async fn unknown_tag_creates_nothing() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = MultipartBody::new()
        .text("title", "Groceries")
        .text("tags", &uuid::Uuid::now_v7().to_string())
        .post("/validate-note-creation/")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);

    assert_eq!(note::Entity::find().count(&db).await?, 0);
    assert_eq!(notes_tags::Entity::find().count(&db).await?, 0);

    Ok(())
}
