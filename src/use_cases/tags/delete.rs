use db_adapters::tag_adapter::{TagAdapter, TagMutation};

use crate::{error_500, tag_not_found, types::ResponseEnvelope, UseCaseError};

pub async fn delete_tag<'a>(
    tag_id: i32,
    tag_adapter: TagAdapter<'a>,
) -> Result<ResponseEnvelope, UseCaseError> {
    match tag_adapter.delete_by_id(tag_id).await.map_err(error_500)? {
        true => Ok(ResponseEnvelope::ok(
            tag_id,
            "Tag deleted successfully".to_string(),
        )),
        false => Err(tag_not_found(tag_id)),
    }
}
