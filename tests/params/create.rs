use actix_web::{http, test};
use entities::param;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use serde_json::json;
use use_cases::{params::types::ParamCreateRequest, types::ResponseEnvelope};
use web_adapters::ErrorResponse;

use super::super::utils::init_app;
use common::factory;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let tag = factory::tag().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri(&format!("/tags/{}/params", tag.id))
        .set_json(json!({
            "db_column": "status",
            "display_name": "Status",
            "option_value": ["open", "closed"],
            "field_type": "select",
            "api_param": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);

    let res: ResponseEnvelope = test::read_body_json(resp).await;
    assert!(res.success);
    assert_eq!(
        res.message,
        format!("Parameter created successfully with ID: {}", res.id)
    );

    let param_in_db = param::Entity::find_by_id(res.id).one(&db).await?.unwrap();
    assert_eq!(param_in_db.tag_id, tag.id);
    assert_eq!(param_in_db.db_column, "status".to_string());
    assert_eq!(
        param_in_db.option_value.0,
        vec!["open".to_string(), "closed".to_string()]
    );
    assert_eq!(param_in_db.field_type, "select".to_string());
    assert_eq!(param_in_db.value_type, "string".to_string());
    assert!(param_in_db.api_param);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_non_existent_tag_id() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/tags/42/params")
        .set_json(ParamCreateRequest::new("c1", "Col 1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    let res: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(res.error, "Tag with ID 42 not found".to_string());
    assert!(param::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[actix_web::test]
async fn unprocessable_entity_on_invalid_fields() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let tag = factory::tag().insert(&db).await?;

    for body in [
        json!({"db_column": "", "display_name": "Col 1"}),
        json!({"db_column": "c1", "display_name": "x".repeat(201)}),
        json!({"db_column": "c1"}),
        json!({"db_column": "c1", "display_name": "Col 1", "option_value": "a"}),
    ] {
        let req = test::TestRequest::post()
            .uri(&format!("/tags/{}/params", tag.id))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
    }
    assert!(param::Entity::find().all(&db).await?.is_empty());

    Ok(())
}
