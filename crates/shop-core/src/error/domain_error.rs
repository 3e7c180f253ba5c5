//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Brand not found: {0}")]
    BrandNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Only .jpeg, .png, and .webp files are supported")]
    UnsupportedMediaType(String),

    #[error("File too large: max {max_bytes} bytes")]
    FileTooLarge { max_bytes: u64 },

    #[error("Unexpected field")]
    UnexpectedField(String),

    #[error("No file uploaded.")]
    MissingUpload,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Brand with this slug already exists.")]
    BrandSlugExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::BrandNotFound(_) => "UNKNOWN_BRAND",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
            Self::UnexpectedField(_) => "UNEXPECTED_FIELD",
            Self::MissingUpload => "MISSING_UPLOAD",

            Self::BrandSlugExists(_) => "BRAND_SLUG_EXISTS",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BrandNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::UnsupportedMediaType(_)
                | Self::FileTooLarge { .. }
                | Self::UnexpectedField(_)
                | Self::MissingUpload
        )
    }

    /// Check if the error was raised while receiving an upload
    pub fn is_upload(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedMediaType(_) | Self::FileTooLarge { .. } | Self::UnexpectedField(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::BrandSlugExists(_))
    }
}
