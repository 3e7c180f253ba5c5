//! Logo upload extractor
//!
//! Reads a `multipart/form-data` brand registration: the single `logo` file
//! part is streamed to the upload store, text parts fill the registration form.
//! Requests that are not multipart yield an empty form and no logo.

use axum::{
    async_trait,
    extract::{multipart::MultipartError, FromRef, FromRequest, Multipart, Request},
    http::{header, HeaderMap},
};
use shop_core::DomainError;
use shop_service::{CreateBrandRequest, StoredUpload, UploadStore};
use tracing::warn;

use crate::response::ApiError;
use crate::state::AppState;

/// Form field carrying the logo file
pub const LOGO_FIELD: &str = "logo";

/// Brand registration form plus the stored logo, if one was sent
#[derive(Debug, Default)]
pub struct LogoUpload {
    pub form: CreateBrandRequest,
    pub logo: Option<StoredUpload>,
}

#[async_trait]
impl<S> FromRequest<S> for LogoUpload
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(req.headers()) {
            return Ok(Self::default());
        }

        let app_state = AppState::from_ref(state);
        let store = app_state.upload_store();

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::upload(DomainError::ValidationError(e.body_text())))?;

        let mut upload = Self::default();
        if let Err(e) = upload.read_parts(&mut multipart, store).await {
            if let Some(logo) = upload.logo.take() {
                if let Err(remove_err) = store.remove(&logo).await {
                    warn!(file = %logo.filename, error = %remove_err, "Failed to remove rejected logo");
                }
            }
            return Err(ApiError::upload(e));
        }

        Ok(upload)
    }
}

impl LogoUpload {
    async fn read_parts(
        &mut self,
        multipart: &mut Multipart,
        store: &UploadStore,
    ) -> Result<(), DomainError> {
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();

            let Some(file_name) = field.file_name().map(ToString::to_string) else {
                let value = field.text().await.map_err(multipart_error)?;
                self.form.set_form_field(&name, value);
                continue;
            };

            // Browsers send an empty file part when no file was chosen
            if file_name.is_empty() {
                continue;
            }

            if name != LOGO_FIELD || self.logo.is_some() {
                return Err(DomainError::UnexpectedField(name));
            }

            let content_type = field.content_type().unwrap_or_default().to_string();
            let stored = store.store(&file_name, &content_type, field).await?;
            self.logo = Some(stored);
        }

        Ok(())
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.to_ascii_lowercase().starts_with("multipart/form-data"))
}

fn multipart_error(e: MultipartError) -> DomainError {
    DomainError::ValidationError(e.body_text())
}
