use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::param_adapter::ParamAdapter;
use sea_orm::DbConn;
use use_cases::params::get::get_param;

use crate::utils::response_from_use_case_error;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    param_id: i32,
}

#[tracing::instrument(name = "Getting a param", skip(db))]
#[get("/{param_id}")]
pub async fn get_param_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match get_param(path_param.param_id, ParamAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => response_from_use_case_error(e),
    }
}
