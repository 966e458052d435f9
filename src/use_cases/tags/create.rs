use db_adapters::{
    tag_adapter::{CreateTagParams, TagAdapter, TagMutation},
    CustomDbErr,
};
use sea_orm::DbErr;

use crate::{
    error_500,
    tags::{clean_title, types::{TagForm, TagVisible}, DUPLICATE_TITLE},
    UseCaseError,
};

pub async fn create_tag<'a>(
    params: TagForm,
    tag_adapter: TagAdapter<'a>,
) -> Result<TagVisible, UseCaseError> {
    let title = clean_title(&params.title).map_err(UseCaseError::Invalid)?;
    tag_adapter
        .create(CreateTagParams { title })
        .await
        .map(TagVisible::from)
        .map_err(|e| match &e {
            DbErr::Custom(message) => match CustomDbErr::from(message) {
                CustomDbErr::Duplicate => UseCaseError::Conflict(DUPLICATE_TITLE.to_string()),
                _ => error_500(e),
            },
            _ => error_500(e),
        })
}
