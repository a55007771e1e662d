use db_adapters::{
    param_adapter::{ParamAdapter, ParamMutation},
    CustomDbErr,
};
use sea_orm::DbErr;

use crate::{
    error_500, params::types::ParamCreateRequest, tag_not_found, types::ResponseEnvelope,
    UseCaseError,
};

pub async fn create_param<'a>(
    tag_id: i32,
    params: ParamCreateRequest,
    param_adapter: ParamAdapter<'a>,
) -> Result<ResponseEnvelope, UseCaseError> {
    params.validate()?;

    match param_adapter.create_for_tag(tag_id, params.into()).await {
        Ok(Some(param)) => Ok(ResponseEnvelope::ok(
            param.id,
            format!("Parameter created successfully with ID: {}", param.id),
        )),
        Ok(None) => Err(tag_not_found(tag_id)),
        Err(e) => match &e {
            DbErr::Custom(message) => match CustomDbErr::from(message) {
                CustomDbErr::NotFound => Err(tag_not_found(tag_id)),
                _ => Err(error_500(e)),
            },
            _ => Err(error_500(e)),
        },
    }
}
