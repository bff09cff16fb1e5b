//! Reverse-pyramid row packing for the tech-stack display
//!
//! Rows start at roughly the width of the triangle that would hold every
//! item (`ceil(sqrt(2n))`) and shrink by one per row, never below two. The
//! final row takes whatever is left.

/// Narrowest row width the packer shrinks to
const MIN_ROW_WIDTH: usize = 2;

/// Width of the first row for `n` items
#[inline]
fn initial_width(n: usize) -> usize {
    (2.0 * n as f64).sqrt().ceil() as usize
}

/// Row lengths produced by [`pack`] for `n` items
pub fn row_lengths(n: usize) -> Vec<usize> {
    let mut lengths = Vec::new();
    let mut remaining = n;
    let mut width = initial_width(n);

    while remaining > 0 {
        if remaining <= width {
            lengths.push(remaining);
            break;
        }
        lengths.push(width);
        remaining -= width;
        width = width.saturating_sub(1).max(MIN_ROW_WIDTH);
    }

    lengths
}

/// Partition `items` into non-increasing rows, preserving order
pub fn pack<T>(items: impl IntoIterator<Item = T>) -> Vec<Vec<T>> {
    let items: Vec<T> = items.into_iter().collect();
    let mut iter = items.into_iter();
    row_lengths(iter.len())
        .into_iter()
        .map(|len| iter.by_ref().take(len).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_preserves_order_and_coverage() {
        let rows = pack(1..=10);
        let flat: Vec<i32> = rows.iter().flatten().copied().collect();
        assert_eq!(flat, (1..=10).collect::<Vec<_>>());
        assert_eq!(rows, vec![vec![1, 2, 3, 4, 5], vec![6, 7, 8, 9], vec![10]]);
    }

    #[test]
    fn test_tech_stack_count() {
        assert_eq!(row_lengths(29), vec![8, 7, 6, 5, 3]);
        let rows = pack(0..29);
        assert_eq!(rows.iter().map(Vec::len).sum::<usize>(), 29);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(pack(Vec::<u8>::new()).is_empty());
        assert_eq!(pack(["only"]), vec![vec!["only"]]);
    }

    #[test]
    fn test_rows_never_grow() {
        for n in 0..200 {
            let lengths = row_lengths(n);
            assert_eq!(lengths.iter().sum::<usize>(), n, "n={}", n);
            assert!(
                lengths.windows(2).all(|w| w[0] >= w[1]),
                "n={} produced {:?}",
                n,
                lengths
            );
        }
    }

    #[test]
    fn test_small_counts() {
        assert_eq!(row_lengths(2), vec![2]);
        assert_eq!(row_lengths(3), vec![3]);
        assert_eq!(row_lengths(4), vec![3, 1]);
        assert_eq!(row_lengths(5), vec![4, 1]);
    }
}
