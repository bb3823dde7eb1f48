//! Shared environment configuration for the bingo binaries.
//!
//! Consolidates `BINGO_BASE_PATH`, `BINGO_PORT`, `ALLOWED_ORIGINS`, and the
//! data-file locations read by the server binary.

use std::path::PathBuf;

/// Read `BINGO_BASE_PATH` (default `"."`), chdir, print path. Exits on failure.
pub fn init_base_path() -> PathBuf {
    let base_path = std::env::var("BINGO_BASE_PATH").unwrap_or_else(|_| ".".to_string());
    println!("BINGO_BASE_PATH={}", base_path);
    let path = PathBuf::from(&base_path);
    if std::env::set_current_dir(&base_path).is_err() {
        eprintln!("Failed to change directory to {}", base_path);
        std::process::exit(1);
    }
    if let Ok(cwd) = std::env::current_dir() {
        println!("Working directory: {}", cwd.display());
    }
    path
}

/// Read `BINGO_PORT` (default 8000).
pub fn server_port() -> u16 {
    std::env::var("BINGO_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8000)
}

/// Read `ALLOWED_ORIGINS` (comma-separated, default `http://localhost:3000`).
pub fn allowed_origins() -> Vec<String> {
    std::env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000".to_string())
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

/// Read `BINGO_PROFILES_DIR` (default `profiles`).
pub fn profiles_dir() -> PathBuf {
    PathBuf::from(std::env::var("BINGO_PROFILES_DIR").unwrap_or_else(|_| "profiles".to_string()))
}

/// Read `BINGO_COMMENTS_FILE` (default `data/comments.json`).
pub fn comments_file() -> PathBuf {
    PathBuf::from(
        std::env::var("BINGO_COMMENTS_FILE").unwrap_or_else(|_| "data/comments.json".to_string()),
    )
}
