mod note;
mod tag;
mod user;

pub use note::*;
pub use tag::*;
pub use user::*;
