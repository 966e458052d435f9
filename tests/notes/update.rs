use actix_web::{http, test};
use entities::{note, notes_tags, sea_orm_active_enums::NoteColor};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};

use crate::utils::{init_app, location, read_html, Connections, MultipartBody};
use common::factory::{self, *};

#[actix_web::test]
async fn form_is_prefilled() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let note = factory::note()
        .title("Groceries")
        .description(Some("milk".to_string()))
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri(&format!("/note/update/{}/", note.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let html = read_html(res).await;
    assert!(html.contains("value=\"Groceries\""));
    assert!(html.contains(">milk</textarea>"));

    Ok(())
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let home = factory::tag().insert(&db).await?;
    let work = factory::tag().insert(&db).await?;
    let note = factory::note()
        .title("Groceries")
        .insert_with_tags(&db, vec![home.id])
        .await?;

    let req = MultipartBody::new()
        .text("title", "Groceries for the week")
        .text("color", "e")
        .text("tags", &work.id.to_string())
        .post(&format!("/note/update/{}/", note.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/"));

    let note_in_db = note::Entity::find_by_id(note.id).one(&db).await?.unwrap();
    assert_eq!(note_in_db.title, "Groceries for the week");
    assert_eq!(note_in_db.color, NoteColor::Blue);
    assert_eq!(note_in_db.timestamp, note.timestamp);
    let tag_ids: Vec<uuid::Uuid> = notes_tags::Entity::find()
        .filter(notes_tags::Column::NoteId.eq(note.id))
        .all(&db)
        .await?
        .into_iter()
        .map(|link| link.tag_id)
        .collect();
    assert_eq!(tag_ids, vec![work.id]);

    Ok(())
}

#[actix_web::test]
async fn invalid_form_is_rendered_again() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let note = factory::note().title("Groceries").insert(&db).await?;

    let req = MultipartBody::new()
        .text("title", "")
        .text("date", "yesterday")
        .post(&format!("/note/update/{}/", note.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let html = read_html(res).await;
    assert!(html.contains("This field is required."));
    assert!(html.contains("Enter a valid date."));

    let note_in_db = note::Entity::find_by_id(note.id).one(&db).await?.unwrap();
    assert_eq!(note_in_db.title, "Groceries");

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_or_malformed_id() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    for uri in [
        format!("/note/update/{}/", uuid::Uuid::now_v7()),
        "/note/update/42/".to_string(),
    ] {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::NOT_FOUND, "{}", uri);
    }

    let req = MultipartBody::new()
        .text("title", "Groceries")
        .post(&format!("/note/update/{}/", uuid::Uuid::now_v7()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
