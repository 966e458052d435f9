use db_adapters::{
    tag_adapter::{TagAdapter, TagOrder, TagQuery},
    Order::Asc,
};

use crate::{
    error_500,
    filters::{filter_tags, TagListQuery},
    tags::types::TagVisible,
    UseCaseError,
};

pub async fn list_tags<'a>(
    query: TagListQuery,
    tag_adapter: TagAdapter<'a>,
) -> Result<Vec<TagVisible>, UseCaseError> {
    filter_tags(&query, tag_adapter)
        .order_by_id(Asc)
        .get_all()
        .await
        .map(|tags| tags.iter().map(TagVisible::from).collect())
        .map_err(error_500)
}
