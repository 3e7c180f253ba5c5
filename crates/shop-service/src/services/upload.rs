//! Logo storage on the local filesystem
//!
//! Uploaded logos are written to `<upload_dir>/<millis>_<original name>` and
//! referenced from brands by their public path `<public_prefix>/<file name>`.
//! The content type is checked before anything touches the disk, and a file
//! that fails midway is removed.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use futures_util::{Stream, StreamExt};
use shop_common::StorageConfig;
use shop_core::DomainError;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument, warn};

/// Content types accepted for brand logos
pub const ALLOWED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

const FALLBACK_NAME: &str = "upload";

const MAX_NAME_ATTEMPTS: i64 = 64;

/// A logo written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Generated file name, `<millis>_<original name>`
    pub filename: String,
    pub disk_path: PathBuf,
    /// Path the file is served under
    pub public_path: String,
    pub content_type: String,
    pub size: u64,
}

/// Disk store for uploaded logos
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    public_prefix: String,
    max_bytes: u64,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, public_prefix: impl Into<String>, max_bytes: u64) -> Self {
        let public_prefix: String = public_prefix.into();
        Self {
            dir: dir.into(),
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
            max_bytes,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(
            config.upload_dir.clone(),
            config.public_prefix.clone(),
            config.max_file_size_bytes(),
        )
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn public_prefix(&self) -> &str {
        &self.public_prefix
    }

    /// Largest accepted upload in bytes
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Check a declared content type against the allow-list.
    ///
    /// Parameters such as `; charset=...` are ignored and the comparison is
    /// case-insensitive. Returns the normalized type.
    pub fn check_content_type(content_type: Option<&str>) -> Result<String, DomainError> {
        let raw = content_type.unwrap_or_default();
        let essence = raw
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if ALLOWED_CONTENT_TYPES.contains(&essence.as_str()) {
            Ok(essence)
        } else {
            Err(DomainError::UnsupportedMediaType(raw.to_string()))
        }
    }

    /// File name for an upload received at `millis`
    pub fn stored_filename(original: &str, millis: i64) -> String {
        format!("{millis}_{}", base_name(original))
    }

    /// Public path for a stored file name
    pub fn public_path(&self, filename: &str) -> String {
        format!("{}/{filename}", self.public_prefix)
    }

    /// Create the upload directory if it does not exist
    pub async fn ensure_dir(&self) -> Result<(), DomainError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| storage_error("create upload directory", &self.dir, e))
    }

    /// Stream an upload to disk.
    ///
    /// Fails without writing when the content type is not allowed, and removes
    /// the partial file when the stream errors or exceeds the size limit.
    #[instrument(skip(self, stream), fields(dir = %self.dir.display()))]
    pub async fn store<S, B, E>(
        &self,
        original_name: &str,
        content_type: &str,
        stream: S,
    ) -> Result<StoredUpload, DomainError>
    where
        S: Stream<Item = Result<B, E>>,
        B: AsRef<[u8]>,
        E: fmt::Display,
    {
        let content_type = Self::check_content_type(Some(content_type))?;
        self.ensure_dir().await?;

        let (filename, disk_path, file) = self.create_file(original_name).await?;

        let size = match self.write_stream(file, &disk_path, stream).await {
            Ok(size) => size,
            Err(e) => {
                discard(&disk_path).await;
                return Err(e);
            }
        };

        debug!(file = %filename, size, "Stored upload");

        Ok(StoredUpload {
            public_path: self.public_path(&filename),
            filename,
            disk_path,
            content_type,
            size,
        })
    }

    /// Create a new file for an upload, never reusing an existing name.
    ///
    /// A taken name moves the timestamp forward one millisecond.
    async fn create_file(
        &self,
        original_name: &str,
    ) -> Result<(String, PathBuf, fs::File), DomainError> {
        let millis = Utc::now().timestamp_millis();

        for offset in 0..MAX_NAME_ATTEMPTS {
            let filename = Self::stored_filename(original_name, millis + offset);
            let disk_path = self.dir.join(&filename);

            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&disk_path)
                .await
            {
                Ok(file) => return Ok((filename, disk_path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
                Err(e) => return Err(storage_error("create file", &disk_path, e)),
            }
        }

        Err(DomainError::StorageError(format!(
            "no free file name for {original_name} in {}",
            self.dir.display()
        )))
    }

    async fn write_stream<S, B, E>(
        &self,
        mut file: fs::File,
        path: &Path,
        stream: S,
    ) -> Result<u64, DomainError>
    where
        S: Stream<Item = Result<B, E>>,
        B: AsRef<[u8]>,
        E: fmt::Display,
    {
        futures_util::pin_mut!(stream);
        let mut size: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| DomainError::ValidationError(e.to_string()))?;
            let bytes = chunk.as_ref();

            size += bytes.len() as u64;
            if size > self.max_bytes {
                return Err(DomainError::FileTooLarge {
                    max_bytes: self.max_bytes,
                });
            }

            file.write_all(bytes)
                .await
                .map_err(|e| storage_error("write file", path, e))?;
        }

        file.flush()
            .await
            .map_err(|e| storage_error("flush file", path, e))?;

        Ok(size)
    }

    /// Delete a stored upload
    pub async fn remove(&self, upload: &StoredUpload) -> Result<(), DomainError> {
        fs::remove_file(&upload.disk_path)
            .await
            .map_err(|e| storage_error("remove file", &upload.disk_path, e))
    }
}

/// Last path component of a client supplied file name
fn base_name(original: &str) -> &str {
    let name = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    match name {
        "" | "." | ".." => FALLBACK_NAME,
        name => name,
    }
}

async fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %e, "Failed to remove partial upload");
        }
    }
}

fn storage_error(action: &str, path: &Path, e: std::io::Error) -> DomainError {
    DomainError::StorageError(format!("{action} {}: {e}", path.display()))
}
