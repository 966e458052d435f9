use actix_web::{http, test};
use entities::user;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::users::authenticate::INVALID_LOGIN;

use crate::utils::{
    init_app, location, read_html, session_cookie, Connections, HASHED_PASSWORD,
};
use common::factory::{self, *};

#[actix_web::test]
async fn login_to_home_to_logout() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user()
        .username("alice")
        .password(HASHED_PASSWORD)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/users/login")
        .set_form([("username", "alice"), ("password", "password"), ("next", "/tag-list")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/tag-list"));
    let cookie = session_cookie(&res).unwrap();

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(user_in_db.last_login.is_some());

    let req = test::TestRequest::get()
        .uri("/")
        .cookie(cookie.clone())
        .to_request();
    let html = read_html(test::call_service(&app, req).await).await;
    assert!(html.contains("<span>alice</span>"));
    assert!(html.contains("Log out"));

    let req = test::TestRequest::post()
        .uri("/users/logout")
        .cookie(cookie)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/users/login"));
    let removal = session_cookie(&res).unwrap();
    assert_eq!(removal.value(), "");

    Ok(())
}

#[actix_web::test]
async fn wrong_password_keeps_visitor_anonymous() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    factory::user()
        .username("alice")
        .password(HASHED_PASSWORD)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/users/login")
        .set_form([("username", "alice"), ("password", "passw0rd")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    let cookie = session_cookie(&res);

    let html = read_html(res).await;
    assert!(html.contains(INVALID_LOGIN));

    let mut req = test::TestRequest::get().uri("/");
    if let Some(cookie) = cookie {
        req = req.cookie(cookie);
    }
    let html = read_html(test::call_service(&app, req.to_request()).await).await;
    assert!(!html.contains("Log out"));

    Ok(())
}

#[actix_web::test]
async fn inactive_user_cannot_log_in() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    factory::user()
        .username("alice")
        .password(HASHED_PASSWORD)
        .is_active(false)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/users/login")
        .set_form([("username", "alice"), ("password", "password")])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    let cookie = session_cookie(&res);
    assert!(read_html(res).await.contains(INVALID_LOGIN));

    let mut req = test::TestRequest::get().uri("/");
    if let Some(cookie) = cookie {
        req = req.cookie(cookie);
    }
    let html = read_html(test::call_service(&app, req.to_request()).await).await;
    assert!(!html.contains("Log out"));

    Ok(())
}

#[actix_web::test]
async fn next_to_other_host_is_ignored() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    factory::user()
        .username("alice")
        .password(HASHED_PASSWORD)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/users/login")
        .set_form([
            ("username", "alice"),
            ("password", "password"),
            ("next", "//evil.example"),
        ])
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::FOUND);
    assert_eq!(location(&res).as_deref(), Some("/"));

    Ok(())
}
