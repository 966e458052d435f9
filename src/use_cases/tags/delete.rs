use db_adapters::tag_adapter::{TagAdapter, TagMutation, TagQuery};
use uuid::Uuid;

use crate::{error_500, UseCaseError};

pub async fn delete_tag<'a>(tag_id: Uuid, tag_adapter: TagAdapter<'a>) -> Result<(), UseCaseError> {
    let tag = tag_adapter
        .clone()
        .get_by_id(tag_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::NotFound(
            "Tag with this id was not found".to_string(),
        ))?;
    tag_adapter.delete(tag).await.map_err(error_500)
}
