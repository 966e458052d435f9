mod create;
mod delete;
mod form;
mod home;
mod toggle_pin;
mod update;

use actix_web::web::ServiceConfig;
use entities::{custom_methods::NoteColorTrait, sea_orm_active_enums::NoteColor};
use sea_orm::Iterable;

pub fn note_routes(cfg: &mut ServiceConfig) {
    cfg.service(home::home)
        .service(create::create_note_endpoint)
        .service(update::update_note_form)
        .service(update::update_note_endpoint)
        .service(toggle_pin::toggle_note_pin_endpoint)
        .service(delete::delete_note_endpoint);
}

/// `(symbol, label)` pairs for the color select.
fn color_choices() -> Vec<(String, &'static str)> {
    NoteColor::iter()
        .map(|color| (color.symbol(), color.label()))
        .collect()
}
