use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use db_adapters::tag_adapter::TagAdapter;
use sea_orm::DbConn;
use use_cases::tags::{create::create_tag, types::TagCreateRequest};

use crate::utils::response_from_use_case_error;

#[tracing::instrument(name = "Creating a tag", skip(db))]
#[post("")]
pub async fn create_tag_endpoint(db: Data<DbConn>, req: Json<TagCreateRequest>) -> HttpResponse {
    match create_tag(req.into_inner(), TagAdapter::init(&db)).await {
        Ok(res) => HttpResponse::Created().json(res),
        Err(e) => response_from_use_case_error(e),
    }
}
