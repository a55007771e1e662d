use db_adapters::param_adapter::{ParamAdapter, ParamMutation};

use crate::{
    error_500, param_not_found, params::types::ParamUpdateRequest, types::ResponseEnvelope,
    UseCaseError,
};

pub async fn update_param<'a>(
    param_id: i32,
    params: ParamUpdateRequest,
    param_adapter: ParamAdapter<'a>,
) -> Result<ResponseEnvelope, UseCaseError> {
    params.validate()?;

    param_adapter
        .partial_update(param_id, params.into())
        .await
        .map_err(error_500)?
        .map(|param| ResponseEnvelope::ok(param.id, "Parameter updated successfully".to_string()))
        .ok_or(param_not_found(param_id))
}
