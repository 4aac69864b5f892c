use actix_web::{get, web, HttpResponse};
use serde_json::json;

#[get("/health")]
#[instrument]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
}
