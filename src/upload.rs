use actix_multipart::{Field, Multipart};
use futures_util::TryStreamExt;

use crate::auth::{Authorizer, require_admin};
use crate::error::ApiError;
use crate::models::portfolio::NewPortfolio;
use crate::models::portfolio_images::{MediaKind, NewAttachment};
use crate::storage::{StoredBlob, UploadStorage};

/// Text fields are small; anything larger is a malformed request.
const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

/// A file from the create form, already written to storage.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: String,
    pub media_type: MediaKind,
    pub blob: StoredBlob,
}

impl UploadedFile {
    pub fn to_attachment(&self) -> NewAttachment {
        NewAttachment {
            url: self.blob.url.clone(),
            media_type: self.media_type,
        }
    }
}

/// Everything submitted with `POST /api/portfolio`.
#[derive(Debug, Default)]
pub struct PortfolioForm {
    pub title: Option<String>,
    pub category: Option<String>,
    pub video_url: Option<String>,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub result: Option<String>,
    pub password: Option<String>,
    pub files: Vec<UploadedFile>,
}

/// A form that failed authorization or validation. The caller owns the
/// files that were already stored and must discard them.
#[derive(Debug)]
pub struct Rejected {
    pub error: ApiError,
    pub files: Vec<UploadedFile>,
}

impl PortfolioForm {
    fn set_text(&mut self, name: &str, value: String) {
        let value = Some(value).filter(|v| !v.trim().is_empty());
        match name {
            "title" => self.title = value,
            "category" => self.category = value,
            "video_url" => self.video_url = value,
            "problem" => self.problem = value,
            "solution" => self.solution = value,
            "result" => self.result = value,
            "password" => self.password = value,
            _ => {}
        }
    }

    /// Check the credential, then the required parts, in that order.
    pub fn accept(
        self,
        authorizer: &dyn Authorizer,
    ) -> Result<(NewPortfolio, Vec<UploadedFile>), Rejected> {
        let check = require_admin(authorizer, self.password.as_deref()).and_then(|()| {
            if self.files.is_empty() {
                Err(ApiError::BadRequest(
                    "At least one image or video file is required".to_string(),
                ))
            } else {
                Ok(())
            }
        });
        if let Err(error) = check {
            return Err(Rejected {
                error,
                files: self.files,
            });
        }

        let (title, category) = match (self.title, self.category) {
            (Some(title), Some(category)) => (title, category),
            _ => {
                return Err(Rejected {
                    error: ApiError::BadRequest("title and category are required".to_string()),
                    files: self.files,
                });
            }
        };

        let input = NewPortfolio {
            title,
            category,
            video_url: self.video_url,
            problem: self.problem,
            solution: self.solution,
            result: self.result,
        };
        Ok((input, self.files))
    }
}

/// Read the multipart create form, streaming `images` files into storage.
///
/// The `password` part must precede every file part: it is checked as soon
/// as it arrives, and a file sent before an accepted password ends the read
/// with `Unauthorized` without touching storage. On any failure the blobs
/// written so far are removed before returning.
pub async fn read_portfolio_form(
    mut payload: Multipart,
    storage: &UploadStorage,
    authorizer: &dyn Authorizer,
) -> Result<PortfolioForm, ApiError> {
    let mut form = PortfolioForm::default();

    if let Err(e) = read_fields(&mut payload, storage, authorizer, &mut form).await {
        discard_files(storage, &form.files).await;
        return Err(e);
    }

    Ok(form)
}

async fn read_fields(
    payload: &mut Multipart,
    storage: &UploadStorage,
    authorizer: &dyn Authorizer,
    form: &mut PortfolioForm,
) -> Result<(), ApiError> {
    let mut authorized = false;

    while let Some(field) = payload.try_next().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        match (name.as_str(), file_name) {
            ("images" | "images[]", Some(original_name)) => {
                if !authorized {
                    return Err(ApiError::Unauthorized);
                }
                let media_type =
                    MediaKind::from_content_type(field.content_type().map(|m| m.essence_str()));
                let blob = storage.store_stream(&original_name, field).await?;
                tracing::debug!(file = %original_name, url = %blob.url, size = blob.size, "Stored upload");
                form.files.push(UploadedFile {
                    original_name,
                    media_type,
                    blob,
                });
            }
            (_, Some(original_name)) => {
                tracing::debug!(field = %name, file = %original_name, "Ignoring unexpected file part");
                drain(field).await?;
            }
            (_, None) => {
                let value = read_text(field).await?;
                form.set_text(&name, value);
                if name == "password" {
                    require_admin(authorizer, form.password.as_deref())?;
                    authorized = true;
                }
            }
        }
    }

    Ok(())
}

async fn drain(mut field: Field) -> Result<(), ApiError> {
    while field.try_next().await.map_err(multipart_error)?.is_some() {}
    Ok(())
}

async fn read_text(mut field: Field) -> Result<String, ApiError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
        if buf.len() + chunk.len() > MAX_TEXT_FIELD_BYTES {
            return Err(ApiError::BadRequest(format!(
                "Form field exceeds {MAX_TEXT_FIELD_BYTES} bytes"
            )));
        }
        buf.extend_from_slice(&chunk);
    }

    String::from_utf8(buf).map_err(|_| ApiError::BadRequest("Form field is not valid UTF-8".to_string()))
}

/// Remove every blob belonging to `files`.
pub async fn discard_files(storage: &UploadStorage, files: &[UploadedFile]) {
    let blobs: Vec<StoredBlob> = files.iter().map(|f| f.blob.clone()).collect();
    storage.discard(&blobs).await;
}

fn multipart_error(e: actix_multipart::MultipartError) -> ApiError {
    ApiError::BadRequest(format!("Invalid multipart body: {e}"))
}
