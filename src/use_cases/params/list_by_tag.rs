use db_adapters::{
    param_adapter::{ParamAdapter, ParamFilter, ParamOrder, ParamQuery},
    tag_adapter::{TagAdapter, TagQuery},
    Order::Asc,
};

use crate::{error_500, params::types::ParamVisible, tag_not_found, UseCaseError};

pub async fn list_params_for_tag<'a>(
    tag_id: i32,
    tag_adapter: TagAdapter<'a>,
    param_adapter: ParamAdapter<'a>,
) -> Result<Vec<ParamVisible>, UseCaseError> {
    if tag_adapter
        .get_by_id(tag_id)
        .await
        .map_err(error_500)?
        .is_none()
    {
        return Err(tag_not_found(tag_id));
    }

    param_adapter
        .filter_eq_tag_id(tag_id)
        .order_by_id(Asc)
        .get_all()
        .await
        .map(|params| params.into_iter().map(ParamVisible::from).collect::<Vec<_>>())
        .map_err(error_500)
}
