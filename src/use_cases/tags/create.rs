use db_adapters::tag_adapter::{TagAdapter, TagMutation};

use crate::{error_500, tags::types::TagCreateRequest, types::ResponseEnvelope, UseCaseError};

pub async fn create_tag<'a>(
    params: TagCreateRequest,
    tag_adapter: TagAdapter<'a>,
) -> Result<ResponseEnvelope, UseCaseError> {
    params.validate()?;

    tag_adapter
        .create_with_params(params.into())
        .await
        .map(|tag| {
            ResponseEnvelope::ok(tag.id, format!("Tag created successfully with ID: {}", tag.id))
        })
        .map_err(error_500)
}
