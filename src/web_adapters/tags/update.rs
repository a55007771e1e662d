use actix_web::{
    put,
    web::{Data, Json, Path},
    HttpResponse,
};
use db_adapters::tag_adapter::TagAdapter;
use sea_orm::DbConn;
use use_cases::tags::{types::TagUpdateRequest, update::update_tag};

use crate::utils::response_from_use_case_error;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    tag_id: i32,
}

#[tracing::instrument(name = "Updating a tag", skip(db))]
#[put("/{tag_id}")]
pub async fn update_tag_endpoint(
    db: Data<DbConn>,
    req: Json<TagUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match update_tag(path_param.tag_id, req.into_inner(), TagAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => response_from_use_case_error(e),
    }
}
