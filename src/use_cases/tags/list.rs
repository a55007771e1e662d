use db_adapters::{
    tag_adapter::{TagAdapter, TagOrder, TagPaginate, TagQuery},
    Order::Asc,
};

use crate::{error_500, tags::types::TagVisible, types::ListQuery, UseCaseError};

pub async fn list_tags<'a>(
    query: ListQuery,
    tag_adapter: TagAdapter<'a>,
) -> Result<Vec<TagVisible>, UseCaseError> {
    let (offset, limit) = query.offset_and_limit();
    tag_adapter
        .order_by_id(Asc)
        .paginate(offset, limit)
        .get_all_with_params()
        .await
        .map(|tags| tags.into_iter().map(TagVisible::from).collect::<Vec<_>>())
        .map_err(error_500)
}
