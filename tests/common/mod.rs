//! Shared harness for the HTTP integration tests.
//!
//! Every context gets its own temporary directory holding a SQLite database
//! (migrated with the real `Migrator`) and an upload directory.
#![allow(dead_code)]

use actix_web::http::header;
use actix_web::{test, web};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tempfile::TempDir;

use studio_backend::auth::{AuthorizerData, SharedSecret};
use studio_backend::config::DEFAULT_MAX_UPLOAD_BYTES;
use studio_backend::create_pool;
use studio_backend::handlers;
use studio_backend::storage::UploadStorage;

pub const ADMIN_PASSWORD: &str = "test-admin-password";

pub struct TestContext {
    pub db: web::Data<DatabaseConnection>,
    pub storage: web::Data<UploadStorage>,
    pub authorizer: web::Data<AuthorizerData>,
    _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_upload_limit(DEFAULT_MAX_UPLOAD_BYTES).await
    }

    pub async fn with_upload_limit(max_file_bytes: u64) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let db = create_pool(&database_url)
            .await
            .expect("Failed to open test database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to migrate test database");

        let storage = UploadStorage::open(dir.path().join("uploads"), max_file_bytes)
            .await
            .expect("Failed to open upload storage");

        let authorizer: AuthorizerData = Arc::new(SharedSecret::new(ADMIN_PASSWORD));

        Self {
            db: web::Data::new(db),
            storage: web::Data::new(storage),
            authorizer: web::Data::new(authorizer),
            _dir: dir,
        }
    }

    /// Register app data and routes the same way `main` does.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.db.clone())
            .app_data(self.storage.clone())
            .app_data(self.authorizer.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
            .service(handlers::site::uploads_service(self.storage.root()));
    }

    pub fn conn(&self) -> &DatabaseConnection {
        self.db.get_ref()
    }

    /// Number of blobs currently in the upload directory.
    pub fn stored_files(&self) -> usize {
        std::fs::read_dir(self.storage.root())
            .expect("upload dir readable")
            .count()
    }
}

/// Minimal `multipart/form-data` body builder.
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: "----studio-test-boundary-7MA4YWxkTrZu0gW".to_string(),
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn into_request(mut self, uri: &str) -> test::TestRequest {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        test::TestRequest::post()
            .uri(uri)
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", self.boundary),
            ))
            .set_payload(self.body)
    }
}

/// A create form with the admin password and the given text fields.
pub fn portfolio_form(title: &str, category: &str) -> MultipartForm {
    MultipartForm::new()
        .text("password", ADMIN_PASSWORD)
        .text("title", title)
        .text("category", category)
}
