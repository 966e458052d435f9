use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};

use crate::utils::{init_app, read_html, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    factory::tag().title("Home").insert(&db).await?;
    factory::tag().title("Work").insert(&db).await?;

    let req = test::TestRequest::get().uri("/tag-list").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let html = read_html(res).await;
    assert!(html.find("Home").unwrap() < html.find("Work").unwrap());

    Ok(())
}

#[actix_web::test]
async fn search_is_case_insensitive() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    factory::tag().title("Green").insert(&db).await?;
    factory::tag().title("EVERGREEN").insert(&db).await?;
    factory::tag().title("Red").insert(&db).await?;

    for uri in ["/tag-list?q=gre", "/tag-list?search_name=GRE"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let html = read_html(test::call_service(&app, req).await).await;
        assert!(html.contains("Green"), "{}", uri);
        assert!(html.contains("EVERGREEN"), "{}", uri);
        assert!(!html.contains("Red"), "{}", uri);
    }

    Ok(())
}
