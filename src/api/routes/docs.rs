//! Serves the generated OpenAPI document.
use actix_web::{get, web, HttpResponse};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

#[get("/docs/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}
