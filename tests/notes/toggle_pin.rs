use actix_web::{http, test};
use chrono::{Duration, Utc};
use entities::note;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};

use crate::utils::{init_app, location, read_html, section, Connections, MultipartBody};
use common::factory::{self, *};

#[actix_web::test]
async fn redirects_to_referer() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let note = factory::note().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri(&format!("/pinned/{}/", note.id))
        .insert_header((http::header::REFERER, "/?q=groceries"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/?q=groceries"));

    let note_in_db = note::Entity::find_by_id(note.id).one(&db).await?.unwrap();
    assert!(note_in_db.pinned);

    Ok(())
}

#[actix_web::test]
async fn off_site_referer_falls_back_to_home() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let note = factory::note().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri(&format!("/pinned/{}/", note.id))
        .insert_header((http::header::REFERER, "https://evil.example/phish"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/"));

    Ok(())
}

#[actix_web::test]
async fn created_note_moves_from_recent_to_pinned() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    factory::note()
        .title("Errands")
        .timestamp((Utc::now() - Duration::days(7)).into())
        .insert(&db)
        .await?;

    let req = MultipartBody::new()
        .text("title", "Groceries")
        .text("color", "a")
        .post("/validate-note-creation/")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    let groceries = note::Entity::find()
        .filter(note::Column::Title.eq("Groceries"))
        .one(&db)
        .await?
        .unwrap();
    assert!(!groceries.pinned);

    let req = test::TestRequest::get().uri("/").to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    let recent = section(&html, "recent");
    assert!(!section(&html, "pinned").contains("Groceries"));
    let groceries_at = recent.find("<h3>Groceries</h3>").unwrap();
    assert!(groceries_at < recent.find("<h3>Errands</h3>").unwrap());

    let req = test::TestRequest::post()
        .uri(&format!("/pinned/{}/", groceries.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);

    let req = test::TestRequest::get().uri("/").to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(section(&html, "pinned").contains("<h3>Groceries</h3>"));
    assert!(!section(&html, "recent").contains("Groceries"));
    assert!(section(&html, "recent").contains("<h3>Errands</h3>"));

    Ok(())
}

#[actix_web::test]
async fn toggling_twice_restores_pin() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let note = factory::note().insert(&db).await?;

    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri(&format!("/pinned/{}/", note.id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::FOUND);
        assert_eq!(location(&res).as_deref(), Some("/"));
    }

    let note_in_db = note::Entity::find_by_id(note.id).one(&db).await?.unwrap();
    assert_eq!(note_in_db, note);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_id() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri(&format!("/pinned/{}/", uuid::Uuid::now_v7()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
