//! Board generation: pool shaping, random sampling, and grid layout.
//!
//! The generator is a pure function of its inputs plus the injected random
//! source. Shortage handling happens before sampling: the pool is padded
//! with blanks or extended with whole copies of itself first, and the
//! sample then treats repeated copies as distinct slots. A `repeat` board
//! can therefore contain duplicate values.

use rand::seq::index;
use rand::Rng;
use serde::Deserialize;

use crate::constants::{FREE_SPACE_LABEL, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::errors::BoardError;

/// Policy for filling a board when the pool has fewer values than cells.
///
/// Deserialized from the lowercase wire strings `"repeat"` / `"blank"`;
/// anything else is rejected at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortageStrategy {
    /// Concatenate whole copies of the pool until it covers the board.
    #[default]
    Repeat,
    /// Pad the pool with empty strings.
    Blank,
}

/// Number of cells that must come from the value pool.
pub fn needed_cells(size: usize, free_space: bool) -> usize {
    size * size - usize::from(free_space)
}

/// Reject board dimensions outside [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
pub fn validate_size(size: usize) -> Result<(), BoardError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardError::InvalidSize { size })
    }
}

/// Generate a board, resolving a short pool with the given strategy.
///
/// Never fails on shortage. The error cases are an out-of-range size and an
/// empty pool, which neither strategy can stretch.
pub fn generate<R: Rng>(
    values: &[String],
    size: usize,
    free_space: bool,
    strategy: ShortageStrategy,
    rng: &mut R,
) -> Result<Vec<Vec<String>>, BoardError> {
    validate_size(size)?;
    let needed = needed_cells(size, free_space);
    if values.is_empty() {
        return Err(BoardError::InsufficientValues {
            needed,
            available: 0,
        });
    }

    let pool: Vec<String> = if values.len() < needed {
        match strategy {
            ShortageStrategy::Blank => {
                let mut padded = values.to_vec();
                padded.resize(needed, String::new());
                padded
            }
            ShortageStrategy::Repeat => {
                let repetitions = needed / values.len() + 1;
                let mut repeated = Vec::with_capacity(repetitions * values.len());
                for _ in 0..repetitions {
                    repeated.extend(values.iter().cloned());
                }
                repeated
            }
        }
    } else {
        values.to_vec()
    };

    Ok(lay_out(sample(&pool, needed, rng), size, free_space))
}

/// Generate a board without a shortage strategy: a short pool is an error
/// carrying the needed/available counts, never a partial board.
pub fn generate_strict<R: Rng>(
    values: &[String],
    size: usize,
    free_space: bool,
    rng: &mut R,
) -> Result<Vec<Vec<String>>, BoardError> {
    validate_size(size)?;
    let needed = needed_cells(size, free_space);
    if values.len() < needed {
        return Err(BoardError::InsufficientValues {
            needed,
            available: values.len(),
        });
    }
    Ok(lay_out(sample(values, needed, rng), size, free_space))
}

/// Draw `min(pool.len(), needed)` values uniformly without replacement.
fn sample<R: Rng>(pool: &[String], needed: usize, rng: &mut R) -> Vec<String> {
    let amount = needed.min(pool.len());
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect()
}

/// Lay the sampled values out row-major, left to right, top to bottom.
/// The center cell holds the free-space label when enabled.
fn lay_out(picked: Vec<String>, size: usize, free_space: bool) -> Vec<Vec<String>> {
    let center = size / 2;
    let mut next = picked.into_iter();
    let mut cells = Vec::with_capacity(size);
    for row in 0..size {
        let mut cols = Vec::with_capacity(size);
        for col in 0..size {
            if free_space && row == center && col == center {
                cols.push(FREE_SPACE_LABEL.to_string());
            } else {
                cols.push(next.next().unwrap_or_default());
            }
        }
        cells.push(cols);
    }
    cells
}
