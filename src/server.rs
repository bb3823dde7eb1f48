//! Axum HTTP server: JSON endpoints for the bingo frontend.
//!
//! All endpoints are stateless apart from the flat-file stores. The shared
//! [`BingoContext`] is passed as `Arc<BingoContext>` across async handlers.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | API info |
//! | GET | `/health` | Health check |
//! | GET | `/debug` | Filesystem diagnostics |
//! | GET | `/profiles` | Available profiles with value counts |
//! | POST | `/generate` | Generate a board; 400 on a short pool |
//! | POST | `/generate-with-strategy` | Generate a board, stretching a short pool per `?strategy=` |
//! | GET | `/comments` | Stored comments, newest first |
//! | POST | `/comments` | Add a comment |

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::board::{self, ShortageStrategy};
use crate::comments::{Comment, CommentCreate};
use crate::env_config;
use crate::errors::ApiError;
use crate::profiles::{self, ProfileInfo};
use crate::types::BingoContext;

pub type AppState = Arc<BingoContext>;

pub fn create_router(ctx: Arc<BingoContext>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health_check))
        .route("/debug", get(handle_debug_info))
        .route("/profiles", get(handle_list_profiles))
        .route("/generate", post(handle_generate))
        .route("/generate-with-strategy", post(handle_generate_with_strategy))
        .route("/comments", get(handle_get_comments).post(handle_add_comment))
        .layer(cors_layer())
        .with_state(ctx)
}

/// CORS for the browser frontend: origins from `ALLOWED_ORIGINS`, any
/// method and header. No cookie flow exists, so credentials stay off.
fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = env_config::allowed_origins()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct GenerateRequest {
    size: usize,
    profile: String,
    #[serde(default)]
    custom_values: Option<Vec<String>>,
    #[serde(default)]
    free_space: bool,
}

#[derive(Deserialize)]
struct StrategyParams {
    #[serde(default)]
    strategy: ShortageStrategy,
}

/// Resolve the value pool for a request: `custom` takes the inline values,
/// anything else names a file in the profiles directory.
fn resolve_values(ctx: &BingoContext, req: &GenerateRequest) -> Result<Vec<String>, ApiError> {
    if req.profile == "custom" {
        match &req.custom_values {
            Some(values) if !values.is_empty() => Ok(values.clone()),
            _ => Err(ApiError::MissingCustomValues),
        }
    } else {
        Ok(profiles::load_profile_values(&ctx.profiles_dir, &req.profile)?)
    }
}

fn board_response(req: &GenerateRequest, cells: Vec<Vec<String>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "size": req.size,
        "cells": cells,
        "profile": req.profile,
        "free_space": req.free_space,
    }))
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Bingo API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/profiles",
            "/generate",
            "/generate-with-strategy",
            "/comments",
        ],
    }))
}

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_debug_info(State(ctx): State<AppState>) -> Json<serde_json::Value> {
    let working_directory = std::env::current_dir()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());
    Json(serde_json::json!({
        "working_directory": working_directory,
        "profiles_dir": ctx.profiles_dir.display().to_string(),
        "profiles_dir_exists": ctx.profiles_dir.is_dir(),
        "profiles_count": profiles::list_profiles(&ctx.profiles_dir).len(),
        "comments_file": ctx.comments.path().display().to_string(),
        "comments_file_exists": ctx.comments.path().exists(),
        "comments_count": ctx.comments.list().len(),
    }))
}

async fn handle_list_profiles(State(ctx): State<AppState>) -> Json<Vec<ProfileInfo>> {
    Json(profiles::list_profiles(&ctx.profiles_dir))
}

// ── POST handlers ───────────────────────────────────────────────────

async fn handle_generate(
    State(ctx): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    board::validate_size(req.size)?;
    let values = resolve_values(&ctx, &req)?;
    let mut rng = SmallRng::from_os_rng();
    let cells = board::generate_strict(&values, req.size, req.free_space, &mut rng)?;
    Ok(board_response(&req, cells))
}

async fn handle_generate_with_strategy(
    State(ctx): State<AppState>,
    Query(params): Query<StrategyParams>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    board::validate_size(req.size)?;
    let values = resolve_values(&ctx, &req)?;
    let mut rng = SmallRng::from_os_rng();
    let cells = board::generate(&values, req.size, req.free_space, params.strategy, &mut rng)?;
    Ok(board_response(&req, cells))
}

async fn handle_get_comments(State(ctx): State<AppState>) -> Json<Vec<Comment>> {
    Json(ctx.comments.list())
}

async fn handle_add_comment(
    State(ctx): State<AppState>,
    Json(req): Json<CommentCreate>,
) -> Result<Json<Comment>, ApiError> {
    if req.username.trim().is_empty() {
        return Err(ApiError::MissingUsername);
    }
    if req.comment.trim().is_empty() {
        return Err(ApiError::MissingComment);
    }
    let comment = ctx.comments.add(&req.username, &req.comment)?;
    Ok(Json(comment))
}
