use actix_web::{
    post,
    web::{Data, Json, Path},
    HttpResponse,
};
use db_adapters::param_adapter::ParamAdapter;
use sea_orm::DbConn;
use use_cases::params::{create::create_param, types::ParamCreateRequest};

use crate::utils::response_from_use_case_error;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    tag_id: i32,
}

/// Mounted under `/tags`.
#[tracing::instrument(name = "Creating a param for a tag", skip(db))]
#[post("/{tag_id}/params")]
pub async fn create_param_endpoint(
    db: Data<DbConn>,
    req: Json<ParamCreateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match create_param(path_param.tag_id, req.into_inner(), ParamAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Created().json(res),
        Err(e) => response_from_use_case_error(e),
    }
}
