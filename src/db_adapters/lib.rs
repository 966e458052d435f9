pub mod note_adapter;
pub mod tag_adapter;
pub mod user_adapter;

use core::fmt;
pub use sea_orm::Order;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ColumnTrait, DbErr, SqlErr,
};

pub enum CustomDbErr {
    Duplicate,
    NotFound,
    Unimplemented,
}

impl fmt::Display for CustomDbErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomDbErr::Duplicate => write!(f, "Duplicate"),
            CustomDbErr::NotFound => write!(f, "NotFound"),
            CustomDbErr::Unimplemented => write!(f, "Unimplemented"),
        }
    }
}

impl std::str::FromStr for CustomDbErr {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Duplicate" => Ok(CustomDbErr::Duplicate),
            "NotFound" => Ok(CustomDbErr::NotFound),
            _ => Ok(CustomDbErr::Unimplemented),
        }
    }
}

impl From<&String> for CustomDbErr {
    fn from(value: &String) -> Self {
        value.parse().unwrap_or(CustomDbErr::Unimplemented)
    }
}

/// Turns backend specific constraint failures into `DbErr::Custom` so callers
/// can tell them apart without knowing the database.
pub(crate) fn map_constraint_err(e: DbErr) -> DbErr {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DbErr::Custom(CustomDbErr::Duplicate.to_string())
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            DbErr::Custom(CustomDbErr::NotFound.to_string())
        }
        _ => e,
    }
}

/// Case-insensitive substring match, `%` and `_` in `needle` are matched literally.
pub(crate) fn icontains(column: impl ColumnTrait, needle: &str) -> SimpleExpr {
    let escaped = needle
        .to_lowercase()
        .replace('!', "!!")
        .replace('%', "!%")
        .replace('_', "!_");
    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(format!("%{}%", escaped)).escape('!'))
}
