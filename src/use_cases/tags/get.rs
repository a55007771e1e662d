use db_adapters::tag_adapter::{TagAdapter, TagQuery};

use crate::{error_500, tag_not_found, tags::types::TagVisible, UseCaseError};

pub async fn get_tag<'a>(
    tag_id: i32,
    tag_adapter: TagAdapter<'a>,
) -> Result<TagVisible, UseCaseError> {
    tag_adapter
        .get_with_params(tag_id)
        .await
        .map_err(error_500)?
        .map(TagVisible::from)
        .ok_or(tag_not_found(tag_id))
}
