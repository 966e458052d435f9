use actix_web::web::{scope, ServiceConfig};

mod login;
mod logout;
mod register;

pub fn auth_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users")
            .service(login::login_form)
            .service(login::login_user)
            .service(logout::log_out)
            .service(register::register_form)
            .service(register::register_user_endpoint),
    );
}
