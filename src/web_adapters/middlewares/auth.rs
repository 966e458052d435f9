use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_session::SessionExt;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web::Data,
    Error, HttpMessage,
};
use db_adapters::user_adapter::{UserAdapter, UserFilter, UserQuery};
use futures::future::LocalBoxFuture;
use sea_orm::DbConn;
use tracing::{event, Level};

use crate::utils::session::get_user_id;

/// Puts the logged in, active user into request extensions. Requests without
/// a session user pass through untouched.
pub struct AuthenticateUser;

impl<S: 'static, B> Transform<S, ServiceRequest> for AuthenticateUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticateUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticateUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticateUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticateUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        Box::pin(async move {
            let session = req.get_session();
            if let (Ok(user_id), Some(db)) = (get_user_id(&session), req.app_data::<Data<DbConn>>())
            {
                match UserAdapter::init(db)
                    .filter_eq_is_active(true)
                    .get_by_id(user_id)
                    .await
                {
                    Ok(Some(user)) => {
                        req.extensions_mut().insert(user);
                    }
                    Ok(None) => {
                        event!(target: "backend", Level::INFO, "Session user {} no longer exists or is inactive.", user_id);
                    }
                    Err(e) => {
                        event!(target: "backend", Level::ERROR, "Error loading session user: {:?}", e);
                    }
                }
            }

            svc.call(req).await
        })
    }
}
