//! Shared server state.

use std::path::PathBuf;

use crate::comments::CommentStore;

/// Everything the handlers need: where profiles live and the comment store.
///
/// Built once at startup and shared immutably as `Arc<BingoContext>` across
/// async handlers. Board generation itself is stateless; the only mutable
/// state in the process sits behind the comment store's lock.
pub struct BingoContext {
    pub profiles_dir: PathBuf,
    pub comments: CommentStore,
}

impl BingoContext {
    pub fn new(profiles_dir: PathBuf, comments_file: PathBuf) -> Self {
        Self {
            profiles_dir,
            comments: CommentStore::new(comments_file),
        }
    }
}
