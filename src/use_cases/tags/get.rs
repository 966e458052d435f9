use db_adapters::tag_adapter::{TagAdapter, TagQuery};
use uuid::Uuid;

use crate::{error_500, tags::types::TagVisible, UseCaseError};

pub async fn get_tag<'a>(tag_id: Uuid, tag_adapter: TagAdapter<'a>) -> Result<TagVisible, UseCaseError> {
    tag_adapter
        .get_by_id(tag_id)
        .await
        .map_err(error_500)?
        .map(TagVisible::from)
        .ok_or(UseCaseError::NotFound(
            "Tag with this id was not found".to_string(),
        ))
}
