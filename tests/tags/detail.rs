use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::utils::{init_app, read_html, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let tag = factory::tag().title("Home").insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/tag-detail/{}/", tag.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(read_html(res).await.contains("Home"));

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_or_malformed_id() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    for uri in [
        format!("/tag-detail/{}/", uuid::Uuid::now_v7()),
        "/tag-detail/abc/".to_string(),
    ] {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::NOT_FOUND, "{}", uri);
    }

    Ok(())
}
