use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::tag_adapter::TagAdapter;
use sea_orm::DbConn;
use use_cases::tags::get::get_tag;

use crate::utils::response_from_use_case_error;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    tag_id: i32,
}

#[tracing::instrument(name = "Getting a tag with its params", skip(db))]
#[get("/{tag_id}")]
pub async fn get_tag_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match get_tag(path_param.tag_id, TagAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => response_from_use_case_error(e),
    }
}
