use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use std::path::{Path, PathBuf};

use crate::storage::UPLOAD_URL_PREFIX;

/// Serve stored blobs verbatim under `/uploads`.
pub fn uploads_service(upload_dir: &Path) -> Files {
    Files::new(UPLOAD_URL_PREFIX, upload_dir)
}

/// Serve the built single-page client, falling back to `index.html` so
/// client-side routes resolve.
pub fn spa_service(static_dir: &Path) -> Files {
    let index: PathBuf = static_dir.join("index.html");

    Files::new("/", static_dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}
