use actix_web::{http, test};
use entities::tag;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use crate::utils::{init_app, location, read_html, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/tag-create/")
        .set_form([("title", "  Home ")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/tag-list"));

    let tag_in_db = tag::Entity::find()
        .filter(tag::Column::Title.eq("Home"))
        .one(&db)
        .await?;
    assert!(tag_in_db.is_some());

    Ok(())
}

#[actix_web::test]
async fn duplicate_title_is_rejected() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    factory::tag().title("Home").insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/tag-create/")
        .set_form([("title", "Home")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(read_html(res).await.contains("Tag with this Title already exists."));

    assert_eq!(tag::Entity::find().count(&db).await?, 1);

    Ok(())
}

#[actix_web::test]
async fn blank_title_is_required() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/tag-create/")
        .set_form([("title", "   ")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(read_html(res).await.contains("This field is required."));

    assert_eq!(tag::Entity::find().count(&db).await?, 0);

    Ok(())
}
