//! Order statistics built on Floyd–Rivest selection
//!
//! The slice variants reorder their input; the `_of` variants work on a
//! copy and leave the caller's data alone.

use crate::floyd_rivest::{float_order, floyd_rivest, select, select_range};
use crate::{Error, Result};
use num_traits::float::FloatCore;
use num_traits::NumCast;

/// Index into `data` of its k-th smallest element, without reordering `data`
///
/// # Example
///
/// ```rust
/// use mathstat_select::argselect;
///
/// let data = [0.3, 0.1, 0.2];
/// assert_eq!(argselect(&data, 0).unwrap(), 1);
/// assert_eq!(argselect(&data, 2).unwrap(), 0);
/// ```
pub fn argselect<T: FloatCore>(data: &[T], k: usize) -> Result<usize> {
    let len = data.len();
    Error::check_window(len, 0, len.saturating_sub(1), k)?;
    let mut indices: Vec<usize> = (0..len).collect();
    floyd_rivest(&mut indices, 0, len - 1, k, &mut |&a: &usize, &b: &usize| {
        float_order(&data[a], &data[b])
    });
    Ok(indices[k])
}

/// Smallest value; reorders `data`
pub fn min<T: FloatCore>(data: &mut [T]) -> Result<T> {
    Error::check_non_empty(data)?;
    select(data, 0)
}

/// Largest value; reorders `data`
pub fn max<T: FloatCore>(data: &mut [T]) -> Result<T> {
    Error::check_non_empty(data)?;
    let last = data.len() - 1;
    select(data, last)
}

/// Median; reorders `data`.
///
/// Odd lengths take the middle order statistic. Even lengths average the
/// two middle ones: the upper is selected over the whole slice, after which
/// the lower is the largest element of the left part.
///
/// # Example
///
/// ```rust
/// use mathstat_select::median;
///
/// assert_eq!(median(&mut [10.0, 20.0, 30.0, 40.0, 50.0]).unwrap(), 30.0);
/// assert_eq!(median(&mut [20.0, 40.0, 10.0, 30.0]).unwrap(), 25.0);
/// ```
pub fn median<T: FloatCore>(data: &mut [T]) -> Result<T> {
    Error::check_non_empty(data)?;
    let mid = data.len() / 2;
    let upper = select(data, mid)?;
    if data.len() % 2 == 1 {
        return Ok(upper);
    }
    let lower = select_range(data, 0, mid - 1, mid - 1)?;
    Ok((lower + upper) / (T::one() + T::one()))
}

/// Quantile `p` with linear interpolation between neighbouring order
/// statistics; reorders `data`.
///
/// The position is `h = p · (n − 1)`, the result
/// `x[⌊h⌋] + (h − ⌊h⌋) · (x[⌊h⌋ + 1] − x[⌊h⌋])`.
pub fn quantile<T: FloatCore>(data: &mut [T], p: f64) -> Result<T> {
    Error::check_probability(p)?;
    Error::check_non_empty(data)?;
    let last = data.len() - 1;
    let h = p * last as f64;
    let lo = (h.floor() as usize).min(last);
    let lower = select(data, lo)?;
    let frac = h - lo as f64;
    if frac == 0.0 || lo == last {
        return Ok(lower);
    }
    let upper = select_range(data, lo + 1, last, lo + 1)?;
    let weight = <T as NumCast>::from(frac)
        .ok_or_else(|| Error::Numerical(format!("interpolation weight {frac} is not representable")))?;
    Ok(lower + weight * (upper - lower))
}

/// [`median`] of a copy of `data`
pub fn median_of<T: FloatCore>(data: &[T]) -> Result<T> {
    median(&mut data.to_vec())
}

/// [`quantile`] of a copy of `data`
pub fn quantile_of<T: FloatCore>(data: &[T], p: f64) -> Result<T> {
    quantile(&mut data.to_vec(), p)
}
