//! Filesystem blob store for uploaded portfolio media.
//!
//! Blobs live flat under a single root directory and are served back verbatim
//! under [`UPLOAD_URL_PREFIX`]. The database only ever stores the public URL
//! (`/uploads/<name>`), never the on-disk path.

use futures_util::{Stream, StreamExt};
use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::ApiError;

/// URL prefix under which stored blobs are served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

/// A blob that has been fully written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub url: String,
    pub path: PathBuf,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct UploadStorage {
    root: PathBuf,
    max_file_bytes: u64,
}

impl UploadStorage {
    /// Open (and create if needed) the upload directory.
    pub async fn open(root: impl Into<PathBuf>, max_file_bytes: u64) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self {
            root,
            max_file_bytes,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_bytes
    }

    /// Stream one upload to disk under a freshly generated name.
    ///
    /// The partial file is removed if the stream fails or grows past the
    /// per-file limit.
    pub async fn store_stream<S, B, E>(
        &self,
        original_name: &str,
        stream: S,
    ) -> Result<StoredBlob, ApiError>
    where
        S: Stream<Item = Result<B, E>>,
        B: AsRef<[u8]>,
        E: Display,
    {
        let file_name = generate_file_name(original_name);
        let path = self.root.join(&file_name);
        let mut file = fs::File::create(&path).await.map_err(|e| {
            warn!(path = %path.display(), error = %e, "storage: create failed");
            e
        })?;

        let mut stream = std::pin::pin!(stream);
        let mut size: u64 = 0;
        let written: Result<(), ApiError> = async {
            while let Some(chunk) = stream.next().await {
                let chunk = chunk
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;
                let bytes = chunk.as_ref();
                size += bytes.len() as u64;
                if size > self.max_file_bytes {
                    return Err(ApiError::FileTooLarge {
                        file_name: original_name.to_string(),
                        limit: self.max_file_bytes,
                    });
                }
                file.write_all(bytes).await?;
            }
            file.flush().await?;
            Ok(())
        }
        .await;

        drop(file);
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&path).await {
                warn!(path = %path.display(), error = %cleanup, "storage: failed to remove partial upload");
            }
            return Err(e);
        }

        debug!(original = %original_name, path = %path.display(), size, "storage: blob written");
        Ok(StoredBlob {
            url: format!("{UPLOAD_URL_PREFIX}/{file_name}"),
            path,
            size,
        })
    }

    /// Remove the blob behind `url`.
    ///
    /// Returns `Ok(false)` when the URL is not under the managed prefix or the
    /// file is already gone.
    pub async fn delete_url(&self, url: &str) -> io::Result<bool> {
        let Some(path) = self.path_for_url(url) else {
            return Ok(false);
        };

        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(path = %path.display(), "storage: blob removed");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Best-effort removal of blobs written for a request that was rejected.
    pub async fn discard(&self, blobs: &[StoredBlob]) {
        for blob in blobs {
            if let Err(e) = self.delete_url(&blob.url).await {
                warn!(url = %blob.url, error = %e, "storage: failed to discard upload");
            }
        }
    }

    /// Map a public URL back to a path inside the root, refusing anything
    /// that would escape it.
    fn path_for_url(&self, url: &str) -> Option<PathBuf> {
        let name = url.strip_prefix(UPLOAD_URL_PREFIX)?.strip_prefix('/')?;
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return None;
        }
        Some(self.root.join(name))
    }
}

/// `<unix-millis>-<random>[.ext]`, keeping the original extension when it is
/// plain ASCII alphanumeric.
pub fn generate_file_name(original_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random = Uuid::new_v4().simple();
    match file_extension(original_name) {
        Some(ext) => format!("{millis}-{random}.{ext}"),
        None => format!("{millis}-{random}"),
    }
}

fn file_extension(name: &str) -> Option<&str> {
    Path::new(name)
        .extension()?
        .to_str()
        .filter(|ext| !ext.is_empty() && ext.len() <= 16)
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
}
