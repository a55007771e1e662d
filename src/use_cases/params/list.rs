use db_adapters::{
    param_adapter::{ParamAdapter, ParamOrder, ParamPaginate, ParamQuery},
    Order::Asc,
};

use crate::{error_500, params::types::ParamVisible, types::ListQuery, UseCaseError};

pub async fn list_params<'a>(
    query: ListQuery,
    param_adapter: ParamAdapter<'a>,
) -> Result<Vec<ParamVisible>, UseCaseError> {
    let (offset, limit) = query.offset_and_limit();
    param_adapter
        .order_by_id(Asc)
        .paginate(offset, limit)
        .get_all()
        .await
        .map(|params| params.into_iter().map(ParamVisible::from).collect::<Vec<_>>())
        .map_err(error_500)
}
