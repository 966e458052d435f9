use actix_web::{http, test};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::utils::{init_app, read_html, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn pinned_notes_come_before_recent_ones() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let now = Utc::now();
    factory::note()
        .title("Loose note")
        .timestamp(now.into())
        .insert(&db)
        .await?;
    factory::note()
        .title("Pinned note")
        .pinned(true)
        .timestamp((now - Duration::days(3)).into())
        .insert(&db)
        .await?;

    let req = test::TestRequest::get().uri("/").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let html = read_html(res).await;
    let pinned_at = html.find("Pinned note").unwrap();
    let loose_at = html.find("Loose note").unwrap();
    assert!(pinned_at < loose_at);
    assert_eq!(html.matches("Pinned note").count(), 1);

    Ok(())
}

#[actix_web::test]
async fn filters_by_title_and_tag() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let home = factory::tag().title("Home").insert(&db).await?;
    factory::note()
        .title("Groceries")
        .insert_with_tags(&db, vec![home.id])
        .await?;
    factory::note().title("Grocery budget").insert(&db).await?;
    factory::note()
        .title("Fix the sink")
        .insert_with_tags(&db, vec![home.id])
        .await?;

    let req = test::TestRequest::get()
        .uri(&format!("/?q=GROC&tag={}", home.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let html = read_html(res).await;
    assert!(html.contains("Groceries"));
    assert!(!html.contains("Grocery budget"));
    assert!(!html.contains("Fix the sink"));

    Ok(())
}

#[actix_web::test]
async fn unknown_or_malformed_tag_shows_no_notes() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    factory::note().title("Groceries").insert(&db).await?;

    for uri in [
        format!("/?tag={}", uuid::Uuid::now_v7()),
        "/?tag=5".to_string(),
    ] {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let html = read_html(res).await;
        assert!(!html.contains("Groceries"), "{} should list no notes", uri);
        assert!(html.contains("No notes yet."));
    }

    Ok(())
}

#[actix_web::test]
async fn recent_notes_are_capped() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let now = Utc::now();
    for i in 0..31 {
        factory::note()
            .title(&format!("Entry {:02}", i))
            .timestamp((now - Duration::minutes(i)).into())
            .insert(&db)
            .await?;
    }

    let req = test::TestRequest::get().uri("/").to_request();
    let res = test::call_service(&app, req).await;

    let html = read_html(res).await;
    assert!(html.contains("Entry 29"));
    assert!(!html.contains("Entry 30"));

    Ok(())
}
