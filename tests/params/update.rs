use actix_web::{http, test};
use entities::param;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use serde_json::json;
use use_cases::types::ResponseEnvelope;
use web_adapters::ErrorResponse;

use super::super::utils::init_app;
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let tag = factory::tag().insert(&db).await?;
    let param = factory::param(tag.id)
        .option_value(vec!["a".to_string()])
        .api_param(true)
        .insert(&db)
        .await?;

    let req = test::TestRequest::put()
        .uri(&format!("/params/{}", param.id))
        .set_json(json!({
            "display_name": "Renamed",
            "option_value": [],
            "api_param": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: ResponseEnvelope = test::read_body_json(resp).await;
    assert_eq!(
        res,
        ResponseEnvelope {
            success: true,
            id: param.id,
            message: "Parameter updated successfully".to_string(),
        }
    );

    let param_in_db = param::Entity::find_by_id(param.id).one(&db).await?.unwrap();
    assert_eq!(param_in_db.display_name, "Renamed".to_string());
    assert!(param_in_db.option_value.0.is_empty());
    assert!(!param_in_db.api_param);
    assert_eq!(param_in_db.db_column, param.db_column);
    assert_eq!(param_in_db.field_type, param.field_type);
    assert_eq!(param_in_db.tag_id, tag.id);

    Ok(())
}

#[actix_web::test]
async fn empty_body_changes_nothing() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let tag = factory::tag().insert(&db).await?;
    let param = factory::param(tag.id).insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/params/{}", param.id))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let param_in_db = param::Entity::find_by_id(param.id).one(&db).await?.unwrap();
    assert_eq!(param_in_db, param);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_non_existent_param_id() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    let req = test::TestRequest::put()
        .uri("/params/42")
        .set_json(json!({"display_name": "Renamed"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    let res: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(res.error, "Parameter with ID 42 not found".to_string());

    Ok(())
}

#[actix_web::test]
async fn unprocessable_entity_on_invalid_fields() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let tag = factory::tag().insert(&db).await?;
    let param = factory::param(tag.id).insert(&db).await?;

    for body in [
        json!({"db_column": ""}),
        json!({"db_column": "x".repeat(101)}),
        json!({"api_param": "yes"}),
    ] {
        let req = test::TestRequest::put()
            .uri(&format!("/params/{}", param.id))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    let param_in_db = param::Entity::find_by_id(param.id).one(&db).await?.unwrap();
    assert_eq!(param_in_db, param);

    Ok(())
}

#[actix_web::test]
async fn unprocessable_entity_on_explicit_null() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let tag = factory::tag().insert(&db).await?;
    let param = factory::param(tag.id).insert(&db).await?;

    for body in [
        json!({"display_name": null}),
        json!({"option_value": null, "api_param": true}),
    ] {
        let req = test::TestRequest::put()
            .uri(&format!("/params/{}", param.id))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    let param_in_db = param::Entity::find_by_id(param.id).one(&db).await?.unwrap();
    assert_eq!(param_in_db, param);

    Ok(())
}
