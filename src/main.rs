use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use std::sync::Arc;
use studio_backend::auth::{AuthorizerData, SharedSecret};
use studio_backend::config::AppConfig;
use studio_backend::handlers;
use studio_backend::storage::UploadStorage;
use studio_backend::{create_pool, init_database};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env();

    let db = create_pool(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;
    init_database(&db).await.map_err(std::io::Error::other)?;
    let db_data = web::Data::new(db);

    let storage = UploadStorage::open(&config.upload_dir, config.max_upload_bytes).await?;
    tracing::info!(
        dir = %storage.root().display(),
        max_file_bytes = storage.max_file_bytes(),
        "Upload storage ready"
    );
    let storage_data = web::Data::new(storage);

    if config.uses_default_password() {
        tracing::warn!("ADMIN_PASSWORD not set; using the default admin password");
    }
    let authorizer: AuthorizerData = Arc::new(SharedSecret::new(config.admin_password.clone()));
    let authorizer_data = web::Data::new(authorizer);

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let mut app = App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(storage_data.clone())
            .app_data(authorizer_data.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
            .service(handlers::site::uploads_service(&config.upload_dir));

        if let Some(static_dir) = &config.static_dir {
            app = app.service(handlers::site::spa_service(static_dir));
        }

        app
    })
    .bind(&bind_addr)?
    .run()
    .await
}
