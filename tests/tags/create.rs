use actix_web::{http, test};
use entities::{param, tag};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde_json::json;
use use_cases::{
    params::types::ParamCreateRequest, tags::types::TagCreateRequest, types::ResponseEnvelope,
};
use web_adapters::ErrorResponse;

use super::super::utils::init_app;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/tags")
        .set_json(json!({
            "tag": "vip",
            "query": "SELECT 1",
            "params": [{"db_column": "c1", "display_name": "Col 1"}]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);

    let res: ResponseEnvelope = test::read_body_json(resp).await;
    assert!(res.success);
    assert_eq!(
        res.message,
        format!("Tag created successfully with ID: {}", res.id)
    );

    let tag_in_db = tag::Entity::find_by_id(res.id).one(&db).await?.unwrap();
    assert_eq!(tag_in_db.tag, "vip".to_string());
    assert_eq!(tag_in_db.query, "SELECT 1".to_string());
    assert_eq!(tag_in_db.comment, "".to_string());
    assert!(!tag_in_db.api_active);
    assert!(tag_in_db.query_active);
    assert!(tag_in_db.tag_active);

    let params_in_db = param::Entity::find()
        .filter(param::Column::TagId.eq(res.id))
        .all(&db)
        .await?;
    assert_eq!(params_in_db.len(), 1);
    assert_eq!(params_in_db[0].db_column, "c1".to_string());
    assert_eq!(params_in_db[0].display_name, "Col 1".to_string());
    assert_eq!(params_in_db[0].field_type, "text".to_string());
    assert_eq!(params_in_db[0].value_type, "string".to_string());
    assert!(params_in_db[0].option_value.0.is_empty());
    assert!(!params_in_db[0].api_param);

    Ok(())
}

#[actix_web::test]
async fn creates_every_param_in_order() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let mut req_body = TagCreateRequest::new("multi");
    req_body.params = (0..3)
        .map(|i| ParamCreateRequest::new(&format!("c{}", i), &format!("Col {}", i)))
        .collect();

    let req = test::TestRequest::post()
        .uri("/tags")
        .set_json(req_body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);
    let res: ResponseEnvelope = test::read_body_json(resp).await;

    let params_in_db = param::Entity::find()
        .filter(param::Column::TagId.eq(res.id))
        .order_by_asc(param::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(
        params_in_db
            .iter()
            .map(|param| param.db_column.clone())
            .collect::<Vec<_>>(),
        vec!["c0".to_string(), "c1".to_string(), "c2".to_string()]
    );

    Ok(())
}

#[actix_web::test]
async fn create_without_params() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/tags")
        .set_json(json!({"tag": "plain"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);

    let res: ResponseEnvelope = test::read_body_json(resp).await;
    assert!(tag::Entity::find_by_id(res.id).one(&db).await?.is_some());
    assert!(param::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[actix_web::test]
async fn nothing_is_created_when_a_param_insert_fails() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    db.execute_unprepared(
        "CREATE TRIGGER reject_boom_params BEFORE INSERT ON params \
         WHEN NEW.db_column = 'boom' \
         BEGIN SELECT RAISE(ABORT, 'rejected param'); END;",
    )
    .await?;

    let req = test::TestRequest::post()
        .uri("/tags")
        .set_json(json!({
            "tag": "vip",
            "params": [
                {"db_column": "c1", "display_name": "Col 1"},
                {"db_column": "boom", "display_name": "Boom"}
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

    let res: ErrorResponse = test::read_body_json(resp).await;
    assert!(!res.error.contains("rejected param"));

    assert!(tag::Entity::find().all(&db).await?.is_empty());
    assert!(param::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[actix_web::test]
async fn unprocessable_entity_on_short_tag_name() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/tags")
        .set_json(TagCreateRequest::new("a"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::UNPROCESSABLE_ENTITY);

    let res: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(res.error, "tag is too short (1 chars, min 2)".to_string());
    assert!(tag::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[actix_web::test]
async fn unprocessable_entity_on_empty_db_column() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/tags")
        .set_json(json!({
            "tag": "vip",
            "params": [{"db_column": "", "display_name": "Col 1"}]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::UNPROCESSABLE_ENTITY);

    assert!(tag::Entity::find().all(&db).await?.is_empty());
    assert!(param::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[actix_web::test]
async fn unprocessable_entity_on_malformed_body() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    for body in [
        json!({"query": "SELECT 1"}),
        json!({"tag": 123}),
        json!({"tag": "vip", "params": [{"db_column": "c1"}]}),
    ] {
        let req = test::TestRequest::post()
            .uri("/tags")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::UNPROCESSABLE_ENTITY);

        let res: ErrorResponse = test::read_body_json(resp).await;
        assert!(!res.error.is_empty());
    }
    assert!(tag::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[actix_web::test]
async fn served_under_v2() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/v2/tags")
        .set_json(TagCreateRequest::new("v2 tag"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);

    let res: ResponseEnvelope = test::read_body_json(resp).await;
    let tag_in_db = tag::Entity::find_by_id(res.id).one(&db).await?.unwrap();
    assert_eq!(tag_in_db.tag, "v2 tag".to_string());

    Ok(())
}
