//! Parallel processing utilities

use crate::error::Result;
use rayon::prelude::*;

/// Apply `f` to every item on the rayon pool, keeping input order.
///
/// All items are processed; when several fail, the error of the earliest item
/// is returned, exactly as a sequential loop would.
pub fn try_map_in_order<T, R, F>(items: &[T], f: F) -> Result<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> Result<R> + Send + Sync,
{
    let results: Vec<Result<R>> = items.par_iter().map(f).collect();
    results.into_iter().collect()
}
