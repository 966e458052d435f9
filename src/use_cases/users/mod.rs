pub mod types;

pub mod authenticate;
pub mod password;
pub mod register;
