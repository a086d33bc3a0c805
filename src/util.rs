// MIT/Apache2 License

use num_traits::{Bounded, NumCast};

/// Scale a value in the range `[0, 1]` up to the full range of an unsigned integer type.
///
/// Out-of-range inputs saturate, and NaN maps to zero.
#[inline]
pub(crate) fn clamp<T: Bounded + NumCast>(value: f32) -> T {
    let max = T::max_value().to_f32().unwrap_or(0.0);
    let value = if value.is_nan() { 0.0 } else { value.max(0.0).min(1.0) };
    NumCast::from((value * max).round()).unwrap_or_else(T::min_value)
}

/// Convert a floating point extent to a whole number of pixels, rounding up.
#[inline]
pub(crate) fn pixel_extent(extent: f32) -> Option<u32> {
    if !extent.is_finite() || extent <= 0.0 {
        None
    } else {
        num_traits::cast(extent.ceil())
    }
}
