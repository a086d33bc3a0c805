// MIT/Apache2 License

use crate::{Color, Error};
use tinyvec::TinyVec;

const EXPECTED_CSTOPS: usize = 3;

/// A color stop in a color gradient.
///
/// `position` is nominally in `[0, 1]`. Stops are used in the order they are supplied; nothing sorts them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorStop {
    pub color: Color,
    pub position: f32,
}

impl ColorStop {
    #[inline]
    pub fn new(color: Color, position: f32) -> ColorStop {
        ColorStop { color, position }
    }
}

impl From<(Color, f32)> for ColorStop {
    #[inline]
    fn from((color, position): (Color, f32)) -> ColorStop {
        ColorStop { color, position }
    }
}

/// The interpolated continuum of colors across a set of color stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    // invariant: contains at least 2 elements, all with finite positions
    stops: TinyVec<[ColorStop; EXPECTED_CSTOPS]>,
}

impl Ramp {
    /// Build a ramp from the given stops, in order.
    ///
    /// Fails if there are fewer than two stops or if any position is not finite. Unsorted or duplicated
    /// positions are accepted as-is.
    #[inline]
    pub fn new(stops: &[ColorStop]) -> crate::Result<Ramp> {
        if stops.len() < 2 {
            return Err(Error::TooFewStops(stops.len()));
        }

        if let Some(bad) = stops.iter().position(|stop| !stop.position.is_finite()) {
            return Err(Error::InvalidStop(bad));
        }

        Ok(Ramp {
            stops: stops.iter().copied().collect(),
        })
    }

    /// Get a slice reference to the color stop values.
    #[inline]
    pub fn as_slice(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Get the color at ramp parameter `t`.
    ///
    /// Parameters at or before the first stop take the first stop's color, and parameters at or past the last
    /// stop take the last stop's color. Between them, the first pair of neighbors bracketing `t` is
    /// interpolated; one always exists, since the neighbors chain from the first position to the last.
    ///
    /// Stops out of order still follow these rules. A reversed ramp, whose first stop sits at `1.0`, samples to
    /// its first color everywhere in `[0, 1]`.
    pub fn sample(&self, t: f32) -> Color {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];

        if t.is_nan() || t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }

        let bracketed = self.stops.windows(2).find_map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            if from.position <= t && t <= to.position {
                let span = to.position - from.position;
                if span > 0.0 {
                    Some(from.color.lerp(to.color, (t - from.position) / span))
                } else {
                    Some(to.color)
                }
            } else {
                None
            }
        });

        match bracketed {
            Some(color) => color,
            None => unreachable!("first < t < last, so some neighboring pair brackets t"),
        }
    }
}

/// Rendering flags that control whether a gradient is painted past its end points.
///
/// These are handed to the [`Surface`] unchanged.
///
/// [`Surface`]: crate::Surface
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DrawOptions {
    /// Extend the first color over the area before the gradient's start.
    pub draws_before_start: bool,
    /// Extend the last color over the area past the gradient's end.
    pub draws_after_end: bool,
}

impl DrawOptions {
    /// Paint only the span between the start and end.
    pub const NONE: DrawOptions = DrawOptions {
        draws_before_start: false,
        draws_after_end: false,
    };
    /// Paint the whole surface, extending both end colors.
    pub const EXTEND: DrawOptions = DrawOptions {
        draws_before_start: true,
        draws_after_end: true,
    };

    /// Map a raw gradient parameter onto the ramp, or `None` if the pixel should be left untouched.
    #[inline]
    pub(crate) fn apply(self, t: f32) -> Option<f32> {
        if t < 0.0 {
            if self.draws_before_start {
                Some(0.0)
            } else {
                None
            }
        } else if t > 1.0 {
            if self.draws_after_end {
                Some(1.0)
            } else {
                None
            }
        } else {
            Some(t)
        }
    }
}
