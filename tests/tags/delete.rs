use actix_web::{http, test};
use entities::{note, notes_tags, tag};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait};

use crate::utils::{init_app, location, read_html, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn confirmation_page() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let tag = factory::tag().title("Home").insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/tag-delete/{}/", tag.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    assert!(read_html(res).await.contains("Home"));

    assert!(tag::Entity::find_by_id(tag.id).one(&db).await?.is_some());

    Ok(())
}

#[actix_web::test]
async fn notes_survive_tag_deletion() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let tag = factory::tag().insert(&db).await?;
    let note = factory::note().insert_with_tags(&db, vec![tag.id]).await?;

    let req = test::TestRequest::post()
        .uri(&format!("/tag-delete/{}/", tag.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/tag-list"));

    assert!(tag::Entity::find_by_id(tag.id).one(&db).await?.is_none());
    assert!(note::Entity::find_by_id(note.id).one(&db).await?.is_some());
    assert_eq!(notes_tags::Entity::find().count(&db).await?, 0);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_id() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri(&format!("/tag-delete/{}/", uuid::Uuid::now_v7()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
