use db_adapters::param_adapter::{ParamAdapter, ParamMutation};

use crate::{error_500, param_not_found, types::ResponseEnvelope, UseCaseError};

pub async fn delete_param<'a>(
    param_id: i32,
    param_adapter: ParamAdapter<'a>,
) -> Result<ResponseEnvelope, UseCaseError> {
    match param_adapter.delete_by_id(param_id).await.map_err(error_500)? {
        true => Ok(ResponseEnvelope::ok(
            param_id,
            "Parameter deleted successfully".to_string(),
        )),
        false => Err(param_not_found(param_id)),
    }
}
