use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::{param_adapter::ParamAdapter, tag_adapter::TagAdapter};
use sea_orm::DbConn;
use use_cases::params::list_by_tag::list_params_for_tag;

use crate::utils::response_from_use_case_error;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    tag_id: i32,
}

/// Mounted under `/tags`.
#[tracing::instrument(name = "Listing a tag's params", skip(db))]
#[get("/{tag_id}/params")]
pub async fn list_params_for_tag_endpoint(
    db: Data<DbConn>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match list_params_for_tag(
        path_param.tag_id,
        TagAdapter::init(&db),
        ParamAdapter::init(&db),
    )
    .await
    {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => response_from_use_case_error(e),
    }
}
