//! Flat-file comment store: a JSON list of user comments.
//!
//! Comments live in a single pretty-printed JSON array on disk. The store
//! rewrites the whole file on every add and serializes writers through a
//! mutex, since the server runs handlers concurrently.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::CommentError;

/// A stored user comment.
///
/// `timestamp` and `id` are stamped by the store on add; files written by
/// hand or by older versions may carry entries without them, so both stay
/// optional on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub username: String,
    pub comment: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Body of `POST /comments`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentCreate {
    pub username: String,
    pub comment: String,
}

/// Comment storage backed by one JSON file.
pub struct CommentStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CommentStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored comments, newest first.
    pub fn list(&self) -> Vec<Comment> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut comments = self.read_all();
        comments.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        comments
    }

    /// Append a comment, stamping its timestamp and id. Inputs are trimmed;
    /// the caller validates that neither is blank.
    pub fn add(&self, username: &str, comment: &str) -> Result<Comment, CommentError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut comments = self.read_all();
        let now = Utc::now();
        let entry = Comment {
            username: username.trim().to_string(),
            comment: comment.trim().to_string(),
            timestamp: Some(now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()),
            id: Some(format!("{}_{}", now.timestamp_millis(), comments.len())),
        };
        comments.push(entry.clone());
        self.write_all(&comments)?;
        Ok(entry)
    }

    /// Read the backing file, treating a missing or unparsable file as an
    /// empty list rather than an error.
    fn read_all(&self) -> Vec<Comment> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!("Error loading comments from {}: {}", self.path.display(), err);
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(comments) => comments,
            Err(err) => {
                warn!("Error parsing comments in {}: {}", self.path.display(), err);
                Vec::new()
            }
        }
    }

    fn write_all(&self, comments: &[Comment]) -> Result<(), CommentError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| CommentError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        let json = serde_json::to_string_pretty(comments).map_err(CommentError::Encode)?;
        fs::write(&self.path, json).map_err(|source| CommentError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn temp_store() -> CommentStore {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        let dir = std::env::temp_dir().join(format!(
            "bingo-comments-test-{}-{}",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ));
        CommentStore::new(dir.join("data").join("comments.json"))
    }

    #[test]
    fn test_missing_file_lists_empty() {
        let store = temp_store();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_add_stamps_and_persists() {
        let store = temp_store();
        let added = store.add("  alice ", " first!  ").unwrap();
        assert_eq!(added.username, "alice");
        assert_eq!(added.comment, "first!");
        assert!(added.timestamp.is_some());
        assert_eq!(added.id.as_deref().unwrap().split('_').count(), 2);

        let listed = store.list();
        assert_eq!(listed, vec![added]);
    }

    #[test]
    fn test_list_newest_first() {
        let store = temp_store();
        store.add("alice", "older").unwrap();
        std::thread::sleep(Duration::from_millis(5));
        store.add("bob", "newer").unwrap();

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].comment, "newer");
        assert_eq!(listed[1].comment, "older");
    }

    #[test]
    fn test_corrupt_file_lists_empty() {
        let store = temp_store();
        store.add("alice", "hello").unwrap();
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_entries_without_stamps_tolerated() {
        let store = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            r#"[{"username": "carol", "comment": "legacy"}]"#,
        )
        .unwrap();
        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].timestamp, None);
        assert_eq!(listed[0].id, None);
    }
}
