use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::tag_adapter::TagAdapter;
use sea_orm::DbConn;
use use_cases::{tags::list::list_tags, types::ListQuery};

use crate::utils::response_500;

#[tracing::instrument(name = "Listing tags", skip(db))]
#[get("")]
pub async fn list_tags_endpoint(db: Data<DbConn>, query: Query<ListQuery>) -> HttpResponse {
    match list_tags(query.into_inner(), TagAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => response_500(e),
    }
}
