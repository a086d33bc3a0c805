// MIT/Apache2 License

use std::fmt;

/// Sum error type for chalkspin operations.
///
/// None of these ever escape a [`ColorSource`]; they are reported by the fallible rendering entry points and
/// degraded to a transparent fill at the color source boundary.
///
/// [`ColorSource`]: crate::ColorSource
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A static string message.
    StaticMsg(&'static str),
    /// A ramp needs at least two color stops; this many were supplied.
    TooFewStops(usize),
    /// The color stop at this index has a position that is not a finite number.
    InvalidStop(usize),
    /// The requested drawing size cannot be turned into a pixel grid.
    InvalidSize { width: f32, height: f32 },
    /// The backend was asked for a surface with no pixels.
    EmptySurface,
    /// The backend refused to allocate a surface this large.
    SurfaceTooLarge { width: u32, height: u32, max: u32 },
    /// Attempted to run an unsupported operation.
    NotSupported(NSOpType),
}

/// An operation that is not supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NSOpType {
    Gradients,
    RadialGradients,
    Snapshots,
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticMsg(s) => f.write_str(s),
            Self::TooFewStops(n) => write!(f, "Gradient needs at least 2 color stops, got {}", n),
            Self::InvalidStop(i) => write!(f, "Color stop #{} has a non-finite position", i),
            Self::InvalidSize { width, height } => {
                write!(f, "Cannot rasterize at size {}x{}", width, height)
            }
            Self::EmptySurface => f.write_str("Surface has no pixels"),
            Self::SurfaceTooLarge { width, height, max } => write!(
                f,
                "Surface of {}x{} exceeds the maximum dimension of {}",
                width, height, max
            ),
            Self::NotSupported(nsop) => {
                write!(f, "Surface does not support feature \"{:?}\"", nsop)
            }
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
