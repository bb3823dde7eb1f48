//! Error types for board generation, the file collaborators, and the HTTP
//! surface.
//!
//! The domain errors ([`BoardError`], [`ProfileError`], [`CommentError`])
//! are plain enums with `Display` impls; [`ApiError`] is the single
//! HTTP-facing type, converting each of them into a status code and a
//! `{"error": ...}` JSON body.

use std::fmt;
use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde_json::json;

use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Failures of the board generator itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board dimension outside the allowed range.
    InvalidSize { size: usize },
    /// The pool cannot fill the board: strict generation with a short pool,
    /// or an empty pool that no strategy can stretch.
    InsufficientValues { needed: usize, available: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize { size } => write!(
                f,
                "size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, size
            ),
            BoardError::InsufficientValues { needed, available } => {
                write!(f, "need {} values but only {} provided", needed, available)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Failures while loading profile files.
#[derive(Debug)]
pub enum ProfileError {
    /// No profile file with this name.
    NotFound { name: String },
    /// The file exists but could not be read.
    Io {
        name: String,
        source: std::io::Error,
    },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::NotFound { name } => write!(f, "profile '{}' not found", name),
            ProfileError::Io { name, source } => {
                write!(f, "failed to read profile '{}': {}", name, source)
            }
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileError::NotFound { .. } => None,
            ProfileError::Io { source, .. } => Some(source),
        }
    }
}

/// Failures while persisting comments.
#[derive(Debug)]
pub enum CommentError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Encode(serde_json::Error),
}

impl fmt::Display for CommentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentError::Io { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            CommentError::Encode(source) => write!(f, "failed to encode comments: {}", source),
        }
    }
}

impl std::error::Error for CommentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommentError::Io { source, .. } => Some(source),
            CommentError::Encode(source) => Some(source),
        }
    }
}

/// API-facing error: every variant maps to one HTTP status and JSON body.
#[derive(Debug)]
pub enum ApiError {
    InvalidSize { size: usize },
    MissingCustomValues,
    ProfileNotFound { name: String },
    InsufficientValues { needed: usize, available: usize },
    MissingUsername,
    MissingComment,
    CommentSaveFailed { message: String },
    Internal { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidSize { size } => write!(f, "invalid size {}", size),
            ApiError::MissingCustomValues => write!(f, "custom values required"),
            ApiError::ProfileNotFound { name } => write!(f, "profile '{}' not found", name),
            ApiError::InsufficientValues { needed, available } => {
                write!(f, "need {} values but only {} provided", needed, available)
            }
            ApiError::MissingUsername => write!(f, "username is required"),
            ApiError::MissingComment => write!(f, "comment is required"),
            ApiError::CommentSaveFailed { message } => {
                write!(f, "failed to save comment: {}", message)
            }
            ApiError::Internal { message } => write!(f, "internal error: {}", message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidSize { .. } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": format!("Size must be between {} and {}", MIN_BOARD_SIZE, MAX_BOARD_SIZE),
                }),
            ),
            ApiError::MissingCustomValues => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Custom values required for custom profile" }),
            ),
            ApiError::ProfileNotFound { name } => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("Profile '{}' not found", name) }),
            ),
            ApiError::InsufficientValues { needed, available } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "insufficient_values",
                    "message": format!("Need {} values but only {} provided", needed, available),
                    "needed": needed,
                    "available": available,
                }),
            ),
            ApiError::MissingUsername => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Username is required" }),
            ),
            ApiError::MissingComment => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Comment is required" }),
            ),
            ApiError::CommentSaveFailed { message } => {
                error!("Comment store failure: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to save comment" }),
                )
            }
            ApiError::Internal { message } => {
                error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidSize { size } => ApiError::InvalidSize { size },
            BoardError::InsufficientValues { needed, available } => {
                ApiError::InsufficientValues { needed, available }
            }
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound { name } => ApiError::ProfileNotFound { name },
            ProfileError::Io { .. } => ApiError::Internal {
                message: err.to_string(),
            },
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(err: CommentError) -> Self {
        ApiError::CommentSaveFailed {
            message: err.to_string(),
        }
    }
}
