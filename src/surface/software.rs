// MIT/Apache2 License

//! Software rasterizer. Gradients are evaluated once per pixel, at the pixel's center, straight into an RGBA
//! buffer in memory. Nothing is blended: a painted pixel replaces whatever was there before.

use super::{Backend, Surface, SurfaceFeatures};
use crate::{image::QUANTUM, Color, DrawOptions, Error, Image, Ramp};
use lyon_geom::{Point, Vector};

const FEATURES: SurfaceFeatures = SurfaceFeatures::ALL;

/// The largest width or height a `SoftwareBackend` allocates by default.
pub const DEFAULT_MAX_DIMENSION: u32 = 4096;

/// Creates [`SoftwareSurface`]s. This backend has no state besides its size limit, so it can be shared freely
/// between threads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SoftwareBackend {
    max_dimension: u32,
}

impl SoftwareBackend {
    #[inline]
    pub const fn new() -> Self {
        Self::with_max_dimension(DEFAULT_MAX_DIMENSION)
    }

    /// Create a backend that refuses surfaces wider or taller than `max_dimension` pixels.
    #[inline]
    pub const fn with_max_dimension(max_dimension: u32) -> Self {
        Self { max_dimension }
    }

    #[inline]
    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }
}

impl Default for SoftwareBackend {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SoftwareBackend {
    type Surface = SoftwareSurface;

    #[inline]
    fn create_surface(&self, width: u32, height: u32) -> crate::Result<SoftwareSurface> {
        if width == 0 || height == 0 {
            return Err(Error::EmptySurface);
        }
        if width > self.max_dimension || height > self.max_dimension {
            return Err(Error::SurfaceTooLarge {
                width,
                height,
                max: self.max_dimension,
            });
        }

        Ok(SoftwareSurface::new(width, height))
    }
}

/// An RGBA buffer in memory, released when dropped.
#[derive(Debug)]
pub struct SoftwareSurface {
    width: u32,
    height: u32,
    // invariant: len == width * height * QUANTUM
    pixels: Vec<u8>,
}

impl SoftwareSurface {
    #[inline]
    fn new(width: u32, height: u32) -> Self {
        log::trace!("Allocating {}x{} software surface", width, height);
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * QUANTUM],
        }
    }

    /// Run `shader` on the center of every pixel, and overwrite the pixels it returns a color for.
    #[inline]
    fn shade<F: FnMut(Point<f32>) -> Option<Color>>(&mut self, mut shader: F) {
        let width = self.width as usize;
        self.pixels
            .chunks_exact_mut(QUANTUM)
            .enumerate()
            .for_each(|(i, px)| {
                let center = Point::new((i % width) as f32 + 0.5, (i / width) as f32 + 0.5);
                if let Some(color) = shader(center) {
                    let (r, g, b, a) = color.clamp_u8();
                    px.copy_from_slice(&[r, g, b, a]);
                }
            });
    }
}

impl Drop for SoftwareSurface {
    #[inline]
    fn drop(&mut self) {
        log::trace!(
            "Releasing {}x{} software surface",
            self.width,
            self.height
        );
    }
}

impl Surface for SoftwareSurface {
    #[inline]
    fn features(&self) -> SurfaceFeatures {
        FEATURES
    }

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    fn draw_linear_gradient(
        &mut self,
        ramp: &Ramp,
        start: Point<f32>,
        end: Point<f32>,
        options: DrawOptions,
    ) -> crate::Result {
        let axis = end - start;
        let length_sq = axis.square_length();
        if !length_sq.is_finite() || length_sq == 0.0 {
            // the gradient has no direction; nothing to paint
            log::trace!("Skipping degenerate linear gradient at {:?}", start);
            return Ok(());
        }

        self.shade(|p| {
            let t = (p - start).dot(axis) / length_sq;
            options.apply(t).map(|t| ramp.sample(t))
        });
        Ok(())
    }

    fn draw_radial_gradient(
        &mut self,
        ramp: &Ramp,
        start_center: Point<f32>,
        start_radius: f32,
        end_center: Point<f32>,
        end_radius: f32,
        options: DrawOptions,
    ) -> crate::Result {
        let circles = RadialGeometry {
            center: start_center,
            radius: start_radius,
            center_delta: end_center - start_center,
            radius_delta: end_radius - start_radius,
        };
        if !circles.is_finite() {
            log::trace!("Skipping radial gradient with non-finite geometry");
            return Ok(());
        }

        self.shade(|p| {
            circles
                .parameters(p)
                .iter()
                .copied()
                .flatten()
                .find_map(|t| options.apply(t))
                .map(|t| ramp.sample(t))
        });
        Ok(())
    }

    #[inline]
    fn snapshot(&self) -> crate::Result<Image> {
        Image::new(self.width, self.height, self.pixels.clone()).ok_or(Error::StaticMsg(
            "Software surface buffer does not match its dimensions",
        ))
    }
}

/// Two circles, interpolated: at parameter `t` the circle is centered on `center + t * center_delta` with
/// radius `radius + t * radius_delta`.
#[derive(Debug, Copy, Clone)]
struct RadialGeometry {
    center: Point<f32>,
    radius: f32,
    center_delta: Vector<f32>,
    radius_delta: f32,
}

impl RadialGeometry {
    #[inline]
    fn is_finite(&self) -> bool {
        self.center.x.is_finite()
            && self.center.y.is_finite()
            && self.center_delta.x.is_finite()
            && self.center_delta.y.is_finite()
            && self.radius.is_finite()
            && self.radius_delta.is_finite()
    }

    #[inline]
    fn radius_at(&self, t: f32) -> f32 {
        self.radius + t * self.radius_delta
    }

    /// The parameters of the interpolated circles passing through `p` with a non-negative radius, largest
    /// first.
    ///
    /// Solves `|p - center(t)|^2 = radius(t)^2`, which expands to `a t^2 - 2 b t + c = 0`.
    fn parameters(&self, p: Point<f32>) -> [Option<f32>; 2] {
        let offset = p - self.center;
        let a = self.center_delta.square_length() - self.radius_delta * self.radius_delta;
        let b = offset.dot(self.center_delta) + self.radius * self.radius_delta;
        let c = offset.square_length() - self.radius * self.radius;

        let valid = |t: f32| Some(t).filter(|&t| t.is_finite() && self.radius_at(t) >= 0.0);

        if a == 0.0 {
            if b == 0.0 {
                return [None, None];
            }
            return [valid(c / (2.0 * b)), None];
        }

        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return [None, None];
        }

        let root = discriminant.sqrt();
        let (t1, t2) = ((b + root) / a, (b - root) / a);
        let (hi, lo) = if t1 >= t2 { (t1, t2) } else { (t2, t1) };
        [valid(hi), valid(lo)]
    }
}
