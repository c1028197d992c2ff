use actix_web::web::{self, get, resource};
use actix_web::{HttpResponse, Resource};
use common::config::{FrontendConfig, CONFIG_PATH};

/// Registers `GET /config.json`.
pub fn configure_routes() -> Resource {
    resource(CONFIG_PATH).route(get().to(process))
}

async fn process(config: web::Data<FrontendConfig>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::*;

    #[actix_web::test]
    async fn serves_backend_location() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(FrontendConfig::new("http://api.local:9000/")))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/config.json").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!({ "BACKEND_API_URI": "http://api.local:9000" }));
    }
}
