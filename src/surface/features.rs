// MIT/Apache2 License

/// Features that are enabled on the [`Surface`].
///
/// [`Surface`]: crate::Surface
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SurfaceFeatures {
    /// Linear gradients can be drawn.
    pub gradients: bool,
    /// Radial gradients can be drawn.
    pub radial_gradients: bool,
}

impl SurfaceFeatures {
    /// Everything is supported.
    pub const ALL: SurfaceFeatures = SurfaceFeatures {
        gradients: true,
        radial_gradients: true,
    };
}
