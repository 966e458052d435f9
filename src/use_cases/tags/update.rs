use db_adapters::{
    tag_adapter::{TagAdapter, TagMutation, TagQuery, UpdateTagParams},
    CustomDbErr,
};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{
    error_500,
    tags::{clean_title, types::{TagForm, TagVisible}, DUPLICATE_TITLE},
    UseCaseError,
};

pub async fn update_tag<'a>(
    tag_id: Uuid,
    params: TagForm,
    tag_adapter: TagAdapter<'a>,
) -> Result<TagVisible, UseCaseError> {
    let tag = tag_adapter
        .clone()
        .get_by_id(tag_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Tag with this id was not found".to_string(),
        ))?;
    let title = clean_title(&params.title).map_err(UseCaseError::Invalid)?;

    tag_adapter
        .update(tag, UpdateTagParams { title })
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
