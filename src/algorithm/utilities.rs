//! # Utilities
//!
//! Helper functions for algorithms.

/// Reduce the size of the vector by removing values.
///
/// # Arguments
///
/// * `vector` - `Vec` to remove indices from.
/// * `indices` - A set of indices to remove from the vector, assumed sorted and deduplicated.
pub(crate) fn remove_indices<T>(vector: &mut Vec<T>, indices: &[usize]) {
    debug_assert!(indices.len() <= vector.len());
    // Sorted and all values are unique
    debug_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    debug_assert!(indices.iter().all(|&i| i < vector.len()));

    let mut i = 0;
    let mut j = 0;
    vector.retain(|_| {
        let keep = i == indices.len() || j < indices[i];
        if !keep {
            i += 1;
        }
        j += 1;
        keep
    });
}
