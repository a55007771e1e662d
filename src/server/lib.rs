use actix_cors::Cors;
use actix_web::{
    get,
    web::{scope, ServiceConfig},
    HttpResponse,
};
use serde::{Deserialize, Serialize};
use web_adapters::{json_config, param_routes, tag_routes};

/// Registers every endpoint at the root and again under `/v2`.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(scope("/v2").configure(api_routes))
        .configure(api_routes);
}

fn api_routes(cfg: &mut ServiceConfig) {
    cfg.configure(tag_routes).configure(param_routes);
}

/// Browsers on `allowed_origins` may call any endpoint with credentials.
pub fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| match origin.as_str() {
            "*" => cors.allow_any_origin(),
            origin => cors.allowed_origin(origin),
        })
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy".to_string(),
        message: "API is running".to_string(),
    })
}
