use actix_web::{http, test};
use entities::tag;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use crate::utils::{init_app, location, read_html, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let tag = factory::tag().title("Home").insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/tag-update/{}/", tag.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(read_html(res).await.contains("value=\"Home\""));

    let req = test::TestRequest::post()
        .uri(&format!("/tag-update/{}/", tag.id))
        .set_form([("title", "Household")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/tag-list"));

    let tag_in_db = tag::Entity::find_by_id(tag.id).one(&db).await?.unwrap();
    assert_eq!(tag_in_db.title, "Household");
    assert_eq!(tag_in_db.created_at, tag.created_at);

    Ok(())
}

#[actix_web::test]
async fn title_taken_by_another_tag() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    factory::tag().title("Work").insert(&db).await?;
    let tag = factory::tag().title("Home").insert(&db).await?;

    let req = test::TestRequest::post()
        .uri(&format!("/tag-update/{}/", tag.id))
        .set_form([("title", "Work")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(read_html(res).await.contains("Tag with this Title already exists."));

    let tag_in_db = tag::Entity::find_by_id(tag.id).one(&db).await?.unwrap();
    assert_eq!(tag_in_db.title, "Home");

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_id() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri(&format!("/tag-update/{}/", uuid::Uuid::now_v7()))
        .set_form([("title", "Home")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
