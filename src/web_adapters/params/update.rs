use actix_web::{
    put,
    web::{Data, Json, Path},
    HttpResponse,
};
use db_adapters::param_adapter::ParamAdapter;
use sea_orm::DbConn;
use use_cases::params::{types::ParamUpdateRequest, update::update_param};

use crate::utils::response_from_use_case_error;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    param_id: i32,
}

#[tracing::instrument(name = "Updating a param", skip(db))]
#[put("/{param_id}")]
pub async fn update_param_endpoint(
    db: Data<DbConn>,
    req: Json<ParamUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match update_param(path_param.param_id, req.into_inner(), ParamAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => response_from_use_case_error(e),
    }
}
