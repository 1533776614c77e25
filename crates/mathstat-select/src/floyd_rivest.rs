//! Floyd–Rivest selection
//!
//! Reorders a slice in place so that the element at rank `k` is the k-th
//! smallest, everything before it compares less or equal and everything
//! after it compares greater or equal. Expected `O(n)` comparisons.
//!
//! Windows wider than [`SAMPLE_THRESHOLD`] are first narrowed by
//! recursively selecting inside a sub-window sized from `n^(2/3)` and
//! positioned around where the k-th element is expected to land, which
//! leaves a good pivot at `k`. The window is then partitioned around that
//! pivot and shrunk to the side containing `k`.

use crate::{Error, Result};
use num_traits::float::FloatCore;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use tracing::trace;

/// Window width above which the pivot is chosen from a sub-sample
pub const SAMPLE_THRESHOLD: usize = 600;

/// Select the k-th smallest value (0-indexed) of `data` in place.
///
/// Floats are ordered as [`OrderedFloat`] orders them: NaN compares
/// greater than every other value, including infinity.
///
/// # Example
///
/// ```rust
/// use mathstat_select::select;
///
/// let mut data = [9.0, 1.0, 8.0, 2.0, 7.0, 3.0];
/// assert_eq!(select(&mut data, 2).unwrap(), 3.0);
/// assert!(data[..2].iter().all(|&x| x <= 3.0));
/// assert!(data[3..].iter().all(|&x| x >= 3.0));
/// ```
pub fn select<T: FloatCore>(data: &mut [T], k: usize) -> Result<T> {
    let len = data.len();
    Error::check_window(len, 0, len.saturating_sub(1), k)?;
    floyd_rivest(data, 0, len - 1, k, &mut float_order);
    Ok(data[k])
}

/// [`select`] restricted to the window `data[left..=right]`.
///
/// Elements outside the window are not touched; the result is the element
/// of rank `k - left` within the window.
pub fn select_range<T: FloatCore>(data: &mut [T], left: usize, right: usize, k: usize) -> Result<T> {
    Error::check_window(data.len(), left, right, k)?;
    floyd_rivest(data, left, right, k, &mut float_order);
    Ok(data[k])
}

/// [`select`] under an arbitrary total order.
///
/// # Example
///
/// ```rust
/// use mathstat_select::select_by;
///
/// let mut words = ["pear", "fig", "banana", "kiwi"];
/// let longest = select_by(&mut words, 3, |a, b| a.len().cmp(&b.len())).unwrap();
/// assert_eq!(*longest, "banana");
/// ```
pub fn select_by<T, F>(data: &mut [T], k: usize, mut compare: F) -> Result<&T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    Error::check_window(len, 0, len.saturating_sub(1), k)?;
    floyd_rivest(data, 0, len - 1, k, &mut compare);
    Ok(&data[k])
}

pub(crate) fn float_order<T: FloatCore>(a: &T, b: &T) -> Ordering {
    OrderedFloat(*a).cmp(&OrderedFloat(*b))
}

/// Selection on `a[left..=right]`; callers guarantee `left <= k <= right < a.len()`
pub(crate) fn floyd_rivest<T, F>(a: &mut [T], mut left: usize, mut right: usize, k: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    while right > left {
        if right - left > SAMPLE_THRESHOLD {
            let (new_left, new_right) = sample_window(left, right, k);
            trace!(left, right, new_left, new_right, k, "narrowing selection window");
            floyd_rivest(a, new_left, new_right, k, compare);
        }

        let t = a[k].clone();
        let mut i = left;
        let mut j = right;
        a.swap(left, k);
        if compare(&a[right], &t) == Ordering::Greater {
            a.swap(right, left);
        }
        // a[left] <= t <= a[right] bound both scans
        while i < j {
            a.swap(i, j);
            i += 1;
            j -= 1;
            while compare(&a[i], &t) == Ordering::Less {
                i += 1;
            }
            while compare(&a[j], &t) == Ordering::Greater {
                j -= 1;
            }
        }

        if compare(&a[left], &t) == Ordering::Equal {
            a.swap(left, j);
        } else {
            j += 1;
            a.swap(j, right);
        }

        match j.cmp(&k) {
            Ordering::Equal => return,
            Ordering::Less => left = j + 1,
            Ordering::Greater => right = j - 1,
        }
    }
}

/// Sub-window expected to contain rank `k` after sampling
fn sample_window(left: usize, right: usize, k: usize) -> (usize, usize) {
    let n = (right - left + 1) as f64;
    let i = (k - left + 1) as f64;
    let z = n.ln();
    let s = 0.5 * (2.0 * z / 3.0).exp();
    let direction = match i.partial_cmp(&(n / 2.0)) {
        Some(Ordering::Less) => -1.0,
        Some(Ordering::Greater) => 1.0,
        _ => 0.0,
    };
    let sd = 0.5 * (z * s * (n - s) / n).sqrt() * direction;
    let k = k as f64;
    let new_left = (k - i * s / n + sd).max(left as f64) as usize;
    let new_right = (k + (n - i) * s / n + sd).min(right as f64) as usize;
    (new_left, new_right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn assert_partitioned(data: &[f64], k: usize, expected: f64) {
        assert_eq!(data[k], expected);
        assert!(data[..k].iter().all(|&x| x <= expected));
        assert!(data[k + 1..].iter().all(|&x| x >= expected));
    }

    #[test]
    fn test_small_inputs() {
        let mut one = [4.0];
        assert_eq!(select(&mut one, 0).unwrap(), 4.0);

        let mut two = [2.0, 1.0];
        assert_eq!(select(&mut two, 0).unwrap(), 1.0);
        assert_eq!(select(&mut two, 1).unwrap(), 2.0);
    }

    #[test]
    fn test_every_rank_with_duplicates() {
        let base = [5.0, 1.0, 3.0, 3.0, 9.0, 0.0, 3.0, 7.0, 1.0, 5.0];
        let mut sorted = base.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for k in 0..base.len() {
            let mut data = base;
            select(&mut data, k).unwrap();
            assert_partitioned(&data, k, sorted[k]);
        }
    }

    #[test]
    fn test_large_input_uses_sampling() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let base: Vec<f64> = (0..10_000).map(|_| rng.gen_range(-1e3..1e3)).collect();
        let mut sorted = base.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for k in [0, 1, 2_500, 4_999, 5_000, 9_998, 9_999] {
            let mut data = base.clone();
            select(&mut data, k).unwrap();
            assert_partitioned(&data, k, sorted[k]);
        }
    }

    #[test]
    fn test_sorted_and_reversed_input() {
        let ascending: Vec<f64> = (0..2_000).map(f64::from).collect();
        let mut data = ascending.clone();
        assert_eq!(select(&mut data, 1_234).unwrap(), 1_234.0);

        let mut data: Vec<f64> = ascending.into_iter().rev().collect();
        assert_eq!(select(&mut data, 17).unwrap(), 17.0);
    }

    #[test]
    fn test_nan_sorts_last() {
        let mut data = [2.0, f64::NAN, -1.0, f64::INFINITY];
        assert!(select(&mut data, 3).unwrap().is_nan());
        assert_eq!(select(&mut data, 2).unwrap(), f64::INFINITY);
        assert_eq!(select(&mut data, 0).unwrap(), -1.0);
    }

    #[test]
    fn test_select_range_leaves_outside_untouched() {
        let mut data = [100.0, 5.0, 4.0, 3.0, 2.0, 1.0, -100.0];
        assert_eq!(select_range(&mut data, 1, 5, 1).unwrap(), 1.0);
        assert_eq!(data[0], 100.0);
        assert_eq!(data[6], -100.0);
    }

    #[test]
    fn test_rank_errors() {
        let mut empty: [f64; 0] = [];
        assert!(matches!(select(&mut empty, 0), Err(Error::EmptyData)));

        let mut data = [1.0f32, 2.0, 3.0];
        assert!(matches!(select(&mut data, 3), Err(Error::InvalidRank { k: 3, .. })));
        assert!(select_range(&mut data, 2, 1, 1).is_err());
        assert_eq!(select(&mut data, 1).unwrap(), 2.0f32);
    }

    #[test]
    fn test_sample_window_brackets_rank() {
        for (left, right, k) in [(0, 1_000, 10), (0, 1_000, 500), (200, 5_000, 4_900)] {
            let (l, r) = sample_window(left, right, k);
            assert!(left <= l && l <= k && k <= r && r <= right, "{l} {r}");
        }
    }
}
