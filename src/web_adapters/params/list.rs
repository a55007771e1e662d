use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::param_adapter::ParamAdapter;
use sea_orm::DbConn;
use use_cases::{params::list::list_params, types::ListQuery};

use crate::utils::response_500;

#[tracing::instrument(name = "Listing params", skip(db))]
#[get("")]
pub async fn list_params_endpoint(db: Data<DbConn>, query: Query<ListQuery>) -> HttpResponse {
    match list_params(query.into_inner(), ParamAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => response_500(e),
    }
}
