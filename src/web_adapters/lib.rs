mod flash;
mod media;
mod middlewares;
mod notes;
mod tags;
mod templates;
mod users;
mod utils;

pub use middlewares::auth as auth_middleware;
pub use notes::note_routes;
pub use tags::tag_routes;
pub use users::auth_routes;
pub use utils::{not_found, not_found_page};
