// MIT/Apache2 License

use crate::{DrawOptions, Error, Image, NSOpType, Ramp};
use lyon_geom::Point;

/// Provides the `SurfaceFeatures` type.
mod features;
/// Implements `Surface` on `&mut Surface` and `Backend` on shared pointers.
mod mut_impl;
/// The pure software rasterizer.
mod software;

pub use features::SurfaceFeatures;
pub use software::{SoftwareBackend, SoftwareSurface, DEFAULT_MAX_DIMENSION};

/// An offscreen buffer of pixels that gradients can be drawn onto.
///
/// A `Surface` is created by a [`Backend`] at a fixed pixel size and starts out fully transparent. Once it has
/// been drawn on, its contents are captured with [`snapshot`]. Dropping the `Surface` releases whatever the
/// backend allocated for it; callers rely on that being the only cleanup needed.
///
/// Every `Surface` is expected to be able to take a snapshot. Drawing is governed by its
/// [`SurfaceFeatures`]:
///
/// * If the `gradients` field is enabled, `draw_linear_gradient` is expected to work.
/// * If the `radial_gradients` field is enabled, `draw_radial_gradient` is expected to work. The default
///   implementation returns `NotSupported`.
///
/// Coordinates are in pixels, with the origin at the top left corner. Pixels are sampled at their centers.
///
/// [`snapshot`]: Surface::snapshot
pub trait Surface {
    /// Get an enumeration of the features that this `Surface` is capable of.
    fn features(&self) -> SurfaceFeatures;

    /// The width of the surface, in pixels.
    fn width(&self) -> u32;
    /// The height of the surface, in pixels.
    fn height(&self) -> u32;

    /// Paint a linear gradient. The ramp runs from `start` (parameter `0`) to `end` (parameter `1`), and is
    /// constant along lines perpendicular to that axis. `options` decides whether anything is painted before
    /// `start` and after `end`.
    fn draw_linear_gradient(
        &mut self,
        ramp: &Ramp,
        start: Point<f32>,
        end: Point<f32>,
        options: DrawOptions,
    ) -> crate::Result;

    /// Paint a radial gradient, blending between the circle at `start_center` with `start_radius` (parameter
    /// `0`) and the circle at `end_center` with `end_radius` (parameter `1`).
    #[inline]
    fn draw_radial_gradient(
        &mut self,
        _ramp: &Ramp,
        _start_center: Point<f32>,
        _start_radius: f32,
        _end_center: Point<f32>,
        _end_radius: f32,
        _options: DrawOptions,
    ) -> crate::Result {
        Err(Error::NotSupported(NSOpType::RadialGradients))
    }

    /// Capture the current contents of the surface as an [`Image`].
    fn snapshot(&self) -> crate::Result<Image>;
}

/// Something that can hand out offscreen [`Surface`]s.
///
/// This is the rasterization capability a gradient color source is parameterized by. The default is the
/// [`SoftwareBackend`]; an application that already has a drawing API can plug it in here instead.
///
/// Backends wrapping a drawing context that cannot be used from several threads at once must be serialized by
/// whoever owns them; nothing in this crate locks around `create_surface`.
pub trait Backend {
    /// The type of surface this backend creates.
    type Surface: Surface;

    /// Create a new, fully transparent surface of the given pixel dimensions.
    fn create_surface(&self, width: u32, height: u32) -> crate::Result<Self::Surface>;
}
