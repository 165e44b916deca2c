//! Nearest-value lookup on a sorted depth sequence

/// Find the element of an ascending sorted sequence closest to `query`.
///
/// Binary search for the insertion point, then compare the two straddling
/// neighbors. Queries at or beyond either end clamp to the first/last
/// element; an exact distance tie resolves to the smaller value.
///
/// Returns `None` only for an empty sequence. O(log n), no side effects.
pub fn closest(sorted_values: &[f64], query: f64) -> Option<f64> {
    if sorted_values.is_empty() {
        return None;
    }

    let idx = sorted_values.partition_point(|v| *v < query);

    if idx == 0 {
        return Some(sorted_values[0]);
    }
    if idx == sorted_values.len() {
        return Some(sorted_values[idx - 1]);
    }

    let before = sorted_values[idx - 1];
    let after = sorted_values[idx];

    // Strict comparison: a tie keeps the smaller neighbor
    if after - query < query - before {
        Some(after)
    } else {
        Some(before)
    }
}

/// Snap each query depth onto its nearest grid value.
///
/// The per-query result is `None` only when the grid itself is empty.
pub fn snap_to_grid(grid: &[f64], queries: &[f64]) -> Vec<Option<f64>> {
    queries.iter().map(|&q| closest(grid, q)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_interior() {
        assert_eq!(closest(&[1.0, 3.0, 5.0, 7.0], 4.0), Some(3.0));
        assert_eq!(closest(&[1.0, 3.0, 5.0, 7.0], 4.5), Some(5.0));
        assert_eq!(closest(&[1.0, 3.0, 5.0, 7.0], 6.9), Some(7.0));
    }

    #[test]
    fn test_closest_tie_breaks_toward_smaller() {
        // 4 is equidistant from 3 and 5: the smaller value wins
        assert_eq!(closest(&[1.0, 3.0, 5.0, 7.0], 4.0), Some(3.0));
        assert_eq!(closest(&[0.0, 10.0], 5.0), Some(0.0));
    }

    #[test]
    fn test_closest_clamps_below_and_above_range() {
        assert_eq!(closest(&[10.0, 20.0, 30.0], 5.0), Some(10.0));
        assert_eq!(closest(&[10.0, 20.0, 30.0], 35.0), Some(30.0));
    }

    #[test]
    fn test_closest_exact_match() {
        assert_eq!(closest(&[10.0, 20.0, 30.0], 20.0), Some(20.0));
        assert_eq!(closest(&[10.0, 20.0, 30.0], 10.0), Some(10.0));
        assert_eq!(closest(&[10.0, 20.0, 30.0], 30.0), Some(30.0));
    }

    #[test]
    fn test_closest_single_element() {
        assert_eq!(closest(&[42.0], -100.0), Some(42.0));
        assert_eq!(closest(&[42.0], 1000.0), Some(42.0));
    }

    #[test]
    fn test_closest_empty() {
        assert_eq!(closest(&[], 1.0), None);
    }

    #[test]
    fn test_snap_to_grid() {
        let grid = [0.0, 0.5, 1.0, 1.5, 2.0];
        let snapped = snap_to_grid(&grid, &[0.1, 0.74, 0.76, 3.0]);

        assert_eq!(
            snapped,
            vec![Some(0.0), Some(0.5), Some(1.0), Some(2.0)]
        );
    }

    #[test]
    fn test_snap_to_empty_grid() {
        assert_eq!(snap_to_grid(&[], &[1.0, 2.0]), vec![None, None]);
    }
}
