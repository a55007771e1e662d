use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::tags::types::TagVisible;
use web_adapters::ErrorResponse;

use super::super::utils::init_app;
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let tag = factory::tag()
        .tag("vip".to_string())
        .query("SELECT 1".to_string())
        .api_endpoint("/api/vip".to_string())
        .insert(&db)
        .await?;
    let other_tag = factory::tag().insert(&db).await?;
    let param_0 = factory::param(tag.id)
        .db_column("c0".to_string())
        .option_value(vec!["a".to_string(), "b".to_string()])
        .insert(&db)
        .await?;
    factory::param(other_tag.id).insert(&db).await?;
    let param_1 = factory::param(tag.id)
        .db_column("c1".to_string())
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri(&format!("/tags/{}", tag.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: TagVisible = test::read_body_json(resp).await;
    assert_eq!(res.id, tag.id);
    assert_eq!(res.tag, "vip".to_string());
    assert_eq!(res.query, "SELECT 1".to_string());
    assert_eq!(res.api_endpoint, "/api/vip".to_string());
    assert_eq!(res.params.len(), 2);
    assert_eq!(res.params[0].id, param_0.id);
    assert_eq!(res.params[0].option_value, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(res.params[1].id, param_1.id);
    assert!(res.params.iter().all(|param| param.tag_id == tag.id));

    Ok(())
}

#[actix_web::test]
async fn not_found_on_non_existent_tag_id() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    let req = test::TestRequest::get().uri("/tags/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    let res: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(res.error, "Tag with ID 42 not found".to_string());

    Ok(())
}

#[actix_web::test]
async fn not_found_on_non_integer_tag_id() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    let req = test::TestRequest::get().uri("/tags/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
