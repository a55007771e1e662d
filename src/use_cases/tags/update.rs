use db_adapters::tag_adapter::{TagAdapter, TagMutation};

use crate::{
    error_500, tag_not_found, tags::types::TagUpdateRequest, types::ResponseEnvelope,
    UseCaseError,
};

pub async fn update_tag<'a>(
    tag_id: i32,
    params: TagUpdateRequest,
    tag_adapter: TagAdapter<'a>,
) -> Result<ResponseEnvelope, UseCaseError> {
    params.validate()?;

    tag_adapter
        .partial_update_with_params(tag_id, params.into())
        .await
        .map_err(error_500)?
        .map(|tag| ResponseEnvelope::ok(tag.id, "Tag updated successfully".to_string()))
        .ok_or(tag_not_found(tag_id))
}
