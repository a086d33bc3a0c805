// MIT/Apache2 License

use crate::{Color, Image};
use std::sync::Arc;

/// The value a [`ColorSource`] hands back: what the indicator's shapes get filled with.
///
/// [`ColorSource`]: crate::ColorSource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fill {
    /// Every point of the shape gets the same color.
    SolidColor(Color),
    /// The image is mapped onto the shape's drawing space, with its top left corner at the origin, and repeats
    /// in both directions.
    Pattern(Arc<Image>),
}

impl Fill {
    /// Paints nothing. This is what color sources degrade to when rendering is not possible.
    pub const TRANSPARENT: Fill = Fill::SolidColor(Color::TRANSPARENT);

    /// Is this a solid fill that paints nothing?
    ///
    /// A pattern is never considered transparent, even if all of its pixels are.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        matches!(self, Fill::SolidColor(color) if color.is_transparent())
    }

    /// Get the image backing this fill, if it is a pattern.
    #[inline]
    pub fn as_pattern(&self) -> Option<&Image> {
        match self {
            Fill::Pattern(image) => Some(&**image),
            Fill::SolidColor(_) => None,
        }
    }

    /// Get the color a shape filled with this value shows at the given point of its drawing space.
    pub fn sample(&self, x: f32, y: f32) -> Color {
        match self {
            Fill::SolidColor(color) => *color,
            Fill::Pattern(image) => {
                if !x.is_finite() || !y.is_finite() || image.width() == 0 || image.height() == 0 {
                    return Color::TRANSPARENT;
                }

                let px = (x.floor() as i64).rem_euclid(image.width() as i64) as u32;
                let py = (y.floor() as i64).rem_euclid(image.height() as i64) as u32;
                image.pixel(px, py).unwrap_or(Color::TRANSPARENT)
            }
        }
    }
}

impl Default for Fill {
    #[inline]
    fn default() -> Fill {
        Fill::TRANSPARENT
    }
}

impl From<Color> for Fill {
    #[inline]
    fn from(color: Color) -> Fill {
        Fill::SolidColor(color)
    }
}

impl From<Image> for Fill {
    #[inline]
    fn from(image: Image) -> Fill {
        Fill::Pattern(Arc::new(image))
    }
}
