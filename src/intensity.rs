// MIT/Apache2 License

use crate::util::clamp;
use ordered_float::NotNan;

/// A range that goes from zero to one, defining the intensity of one channel of a color. This type is
/// essentially a wrapper around an `f32`, but with two invariants:
///
/// * The inner value will always be between `0.0` and `1.0`.
/// * The inner value will never be `NaN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Intensity {
    inner: NotNan<f32>,
}

impl Intensity {
    pub const ZERO: Intensity = unsafe { Intensity::new_unchecked(0.0) };
    pub const ONE: Intensity = unsafe { Intensity::new_unchecked(1.0) };

    /// Create a new `Intensity`, without checking the inner value.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if `inner` is not a number, or outside of the range [0, 1].
    #[inline]
    pub const unsafe fn new_unchecked(inner: f32) -> Self {
        Self {
            inner: NotNan::new_unchecked(inner),
        }
    }

    /// Create a new `Intensity`. If the inner value does not meet the invariants mentioned above, this function
    /// returns `None`.
    #[inline]
    pub fn new(inner: f32) -> Option<Self> {
        if inner.is_nan() || inner < 0.0 || inner > 1.0 {
            None
        } else {
            Some(unsafe { Self::new_unchecked(inner) })
        }
    }

    /// Create a new `Intensity`, pinning out-of-range values to the nearest bound. `NaN` becomes zero.
    #[inline]
    pub fn saturating(inner: f32) -> Self {
        if inner.is_nan() {
            Self::ZERO
        } else {
            unsafe { Self::new_unchecked(inner.max(0.0).min(1.0)) }
        }
    }

    /// Get the inner value of the `Intensity`.
    #[inline]
    pub fn into_inner(self) -> f32 {
        self.inner.into_inner()
    }

    /// Clamp this value to a `u8`.
    #[inline]
    pub fn clamp_u8(self) -> u8 {
        clamp(self.into_inner())
    }
}

impl From<Intensity> for f32 {
    #[inline]
    fn from(i: Intensity) -> f32 {
        i.into_inner()
    }
}

impl From<u8> for Intensity {
    #[inline]
    fn from(channel: u8) -> Intensity {
        unsafe { Intensity::new_unchecked(channel as f32 / 255.0) }
    }
}
