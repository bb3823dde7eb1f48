//! Board limits and fixed labels shared across the crate.

/// Smallest playable board dimension.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest playable board dimension. A 10×10 board needs 100 pool values
/// (99 with free space), which the shipped `numbers` profile covers.
pub const MAX_BOARD_SIZE: usize = 10;

/// Label placed in the center cell when free space is enabled. Not drawn
/// from the pool; a pool value may coincidentally equal it.
pub const FREE_SPACE_LABEL: &str = "★ FREE ★";
