use indexmap::IndexMap;
use std::ops::Range;

pub fn is_even(x: &i64) -> bool {
    x % 2 == 0
}

/// Keeps the even values of `range`.
pub fn evens(range: Range<i64>) -> Vec<i64> {
    range.filter(is_even).collect()
}

pub fn squares(range: Range<i64>) -> Vec<i64> {
    range.map(|x| x.pow(2)).collect()
}

/// Maps each value of `range` to its cube, in ascending key order.
pub fn cubes(range: Range<i64>) -> IndexMap<i64, i64> {
    cubes_where(range, |_| true)
}

pub fn cubes_where<F>(range: Range<i64>, keep: F) -> IndexMap<i64, i64>
where
    F: Fn(&i64) -> bool,
{
    range.filter(|x| keep(x)).map(|x| (x, x.pow(3))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evens_from_one() {
        assert_eq!(evens(1..15), vec![2, 4, 6, 8, 10, 12, 14]);
    }

    #[test]
    fn test_evens_from_zero() {
        assert_eq!(evens(0..10), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_squares() {
        assert_eq!(squares(0..10), vec![0, 1, 4, 9, 16, 25, 36, 49, 64, 81]);
    }

    #[test]
    fn test_cubes_keep_insertion_order() {
        let all = cubes(0..5);
        let pairs: Vec<(i64, i64)> = all.into_iter().collect();
        assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 8), (3, 27), (4, 64)]);
    }

    #[test]
    fn test_cubes_even_keys() {
        let even = cubes_where(0..5, is_even);
        let pairs: Vec<(i64, i64)> = even.into_iter().collect();
        assert_eq!(pairs, vec![(0, 0), (2, 8), (4, 64)]);
    }

    #[test]
    fn test_empty_range() {
        assert!(evens(5..5).is_empty());
        assert!(cubes(3..3).is_empty());
    }
}
