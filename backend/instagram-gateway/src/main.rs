use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use instagram_gateway::clients::graph::GraphHttpClient;
use instagram_gateway::config::Config;
use instagram_gateway::openapi::ApiDoc;
use instagram_gateway::{handlers, AppState};

async fn openapi_json(doc: web::Data<utoipa::openapi::OpenApi>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(doc.as_ref())
}

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("🔧 Starting instagram-gateway");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "✅ Configuration loaded: env={}, graph_version={}",
        config.app.env, config.graph.api_version
    );

    let bind_addr = format!("{}:{}", config.app.host, config.app.port);
    let state = AppState::new(config, Arc::new(GraphHttpClient::new()));

    info!("🚀 instagram-gateway listening on http://{}", bind_addr);
    info!("  - API docs: http://{}/swagger-ui/", bind_addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let openapi_doc = ApiDoc::openapi();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(openapi_doc.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api/openapi.json", openapi_doc.clone()),
            )
            .route("/api/openapi.json", web::get().to(openapi_json))
            .configure(handlers::configure_routes)
    })
    .bind(&bind_addr)
    .context("Failed to bind HTTP server")?
    .run()
    .await
    .context("HTTP server error")?;

    info!("🛑 instagram-gateway shutting down");
    Ok(())
}
