use db_adapters::param_adapter::{ParamAdapter, ParamQuery};

use crate::{error_500, param_not_found, params::types::ParamVisible, UseCaseError};

pub async fn get_param<'a>(
    param_id: i32,
    param_adapter: ParamAdapter<'a>,
) -> Result<ParamVisible, UseCaseError> {
    param_adapter
        .get_by_id(param_id)
        .await
        .map_err(error_500)?
        .map(ParamVisible::from)
        .ok_or(param_not_found(param_id))
}
