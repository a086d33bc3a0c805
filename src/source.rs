// MIT/Apache2 License

use crate::{
    util::pixel_extent, Backend, Color, ColorStop, DrawOptions, Error, Fill, Image, NSOpType, Ramp,
    SoftwareBackend, Surface,
};
use lyon_geom::{Point, Size};
use std::{rc::Rc, sync::Arc};

/// Decides what an activity indicator is painted with.
///
/// The indicator view calls `color` on every layout or draw pass with its visual type (`kind`), the size it
/// is drawn at and the inset it keeps from its edges, and fills its shapes with the result. `K` is whatever
/// the embedding application uses to enumerate indicator types; this crate never looks inside it.
///
/// Implementations must not fail. If no meaningful fill can be produced they return [`Fill::TRANSPARENT`].
pub trait ColorSource<K: ?Sized> {
    /// Get the fill for an indicator of the given kind, drawn at `size` with `padding` on every side.
    fn color(&self, kind: &K, size: Size<f32>, padding: f32) -> Fill;
}

impl<K: ?Sized, S: ColorSource<K> + ?Sized> ColorSource<K> for &S {
    #[inline]
    fn color(&self, kind: &K, size: Size<f32>, padding: f32) -> Fill {
        (**self).color(kind, size, padding)
    }
}

impl<K: ?Sized, S: ColorSource<K> + ?Sized> ColorSource<K> for Box<S> {
    #[inline]
    fn color(&self, kind: &K, size: Size<f32>, padding: f32) -> Fill {
        (**self).color(kind, size, padding)
    }
}

impl<K: ?Sized, S: ColorSource<K> + ?Sized> ColorSource<K> for Rc<S> {
    #[inline]
    fn color(&self, kind: &K, size: Size<f32>, padding: f32) -> Fill {
        (**self).color(kind, size, padding)
    }
}

impl<K: ?Sized, S: ColorSource<K> + ?Sized> ColorSource<K> for Arc<S> {
    #[inline]
    fn color(&self, kind: &K, size: Size<f32>, padding: f32) -> Fill {
        (**self).color(kind, size, padding)
    }
}

/// Paints every indicator with the same color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct SolidColorSource {
    color: Color,
}

impl SolidColorSource {
    #[inline]
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    #[inline]
    pub fn get(&self) -> Color {
        self.color
    }
}

impl From<Color> for SolidColorSource {
    #[inline]
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl<K: ?Sized> ColorSource<K> for SolidColorSource {
    #[inline]
    fn color(&self, _kind: &K, _size: Size<f32>, _padding: f32) -> Fill {
        Fill::SolidColor(self.color)
    }
}

/// How a [`GradientColorSource`] lays its ramp out over the indicator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientVariant {
    /// The ramp runs along the line from `start` to `end`. Both are given in unit coordinates, as fractions of
    /// the indicator's width and height, and may lie outside of `[0, 1]`.
    Linear { start: Point<f32>, end: Point<f32> },
    /// The ramp grows outward from the center of the indicator and ends at the edge of the largest circle that
    /// fits inside the padding.
    Radial,
}

impl Default for GradientVariant {
    /// A diagonal from the top left corner to the bottom right corner.
    #[inline]
    fn default() -> Self {
        GradientVariant::Linear {
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 1.0),
        }
    }
}

/// Paints indicators with a multi-stop gradient, rendered to an image at the indicator's size and handed out
/// as a pattern fill.
///
/// The source is immutable once built. Every call to [`color`] rasterizes again into a fresh surface from the
/// backend, because the output depends on the size the indicator currently has; nothing is cached. Rendering
/// failures of any kind (too few stops, an empty size, a backend that cannot allocate or cannot draw) turn into
/// [`Fill::TRANSPARENT`]. Use [`render`] to find out what went wrong.
///
/// [`color`]: ColorSource::color
/// [`render`]: GradientColorSource::render
#[derive(Debug, Clone, PartialEq)]
pub struct GradientColorSource<B = SoftwareBackend> {
    stops: Vec<ColorStop>,
    variant: GradientVariant,
    options: DrawOptions,
    backend: B,
}

impl GradientColorSource<SoftwareBackend> {
    /// Create a new source from the given color stops, in order. The source starts out as a diagonal linear
    /// gradient, with no extension past its end points, rendered in software.
    #[inline]
    pub fn new<I>(stops: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ColorStop>,
    {
        Self {
            stops: stops.into_iter().map(Into::into).collect(),
            variant: GradientVariant::default(),
            options: DrawOptions::default(),
            backend: SoftwareBackend::default(),
        }
    }
}

impl<B> GradientColorSource<B> {
    /// Use the given layout.
    #[inline]
    pub fn with_variant(self, variant: GradientVariant) -> Self {
        Self { variant, ..self }
    }

    /// Use the given drawing options. These only apply to linear gradients.
    #[inline]
    pub fn with_options(self, options: DrawOptions) -> Self {
        Self { options, ..self }
    }

    /// Render with a different backend.
    #[inline]
    pub fn with_backend<B2>(self, backend: B2) -> GradientColorSource<B2> {
        GradientColorSource {
            stops: self.stops,
            variant: self.variant,
            options: self.options,
            backend,
        }
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    #[inline]
    pub fn variant(&self) -> GradientVariant {
        self.variant
    }

    #[inline]
    pub fn options(&self) -> DrawOptions {
        self.options
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: Backend> GradientColorSource<B> {
    /// Rasterize the gradient for an indicator of the given size and padding.
    pub fn render(&self, size: Size<f32>, padding: f32) -> crate::Result<Image> {
        let ramp = Ramp::new(&self.stops)?;

        let (width, height) = match (pixel_extent(size.width), pixel_extent(size.height)) {
            (Some(width), Some(height)) => (width, height),
            _ => {
                return Err(Error::InvalidSize {
                    width: size.width,
                    height: size.height,
                })
            }
        };

        // released on every path out of this function
        let mut surface = self.backend.create_surface(width, height)?;
        let features = surface.features();

        match self.variant {
            GradientVariant::Linear { start, end } => {
                if !features.gradients {
                    return Err(Error::NotSupported(NSOpType::Gradients));
                }

                let start = Point::new(start.x * size.width, start.y * size.height);
                let end = Point::new(end.x * size.width, end.y * size.height);
                log::trace!(
                    "Drawing linear gradient from {:?} to {:?} on {}x{}",
                    start,
                    end,
                    width,
                    height
                );
                surface.draw_linear_gradient(&ramp, start, end, self.options)?;
            }
            GradientVariant::Radial => {
                if !features.radial_gradients {
                    return Err(Error::NotSupported(NSOpType::RadialGradients));
                }

                let center = Point::new(size.width / 2.0, size.height / 2.0);
                let radius = radial_end_radius(size, padding);
                log::trace!(
                    "Drawing radial gradient of radius {} on {}x{}",
                    radius,
                    width,
                    height
                );
                surface.draw_radial_gradient(
                    &ramp,
                    center,
                    0.0,
                    center,
                    radius,
                    DrawOptions::NONE,
                )?;
            }
        }

        surface.snapshot()
    }
}

impl<K: ?Sized, B: Backend> ColorSource<K> for GradientColorSource<B> {
    #[inline]
    fn color(&self, _kind: &K, size: Size<f32>, padding: f32) -> Fill {
        match self.render(size, padding) {
            Ok(image) => Fill::Pattern(Arc::new(image)),
            Err(e) => {
                log::debug!("Gradient unavailable, falling back to transparent: {}", e);
                Fill::TRANSPARENT
            }
        }
    }
}

/// The usable diameter of the indicator once padding is taken off its smaller side. Never negative.
#[inline]
pub fn indicator_edge(size: Size<f32>, padding: f32) -> f32 {
    (size.width.min(size.height) - 2.0 * padding).max(0.0)
}

/// The radius at which a radial gradient ends for the given indicator geometry.
#[inline]
pub fn radial_end_radius(size: Size<f32>, padding: f32) -> f32 {
    indicator_edge(size, padding) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SurfaceFeatures;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    enum Kind {
        BallPulse,
        LineSpinFade,
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn red() -> Color {
        Color::from_rgba8(255, 0, 0, 255)
    }

    fn blue() -> Color {
        Color::from_rgba8(0, 0, 255, 255)
    }

    fn red_to_blue() -> GradientColorSource {
        GradientColorSource::new(vec![
            ColorStop::new(red(), 0.0),
            ColorStop::new(blue(), 1.0),
        ])
    }

    fn square(side: f32) -> Size<f32> {
        Size::new(side, side)
    }

    fn pattern(fill: &Fill) -> &Image {
        fill.as_pattern().expect("expected a pattern fill")
    }

    fn rgba(image: &Image, x: u32, y: u32) -> (u8, u8, u8, u8) {
        image.pixel(x, y).unwrap().clamp_u8()
    }

    /// Counts the surfaces that are alive, and can be told to fail or to lack features.
    #[derive(Debug, Default)]
    struct TrackingBackend {
        live: Rc<Cell<usize>>,
        created: Rc<Cell<usize>>,
        fail_snapshot: bool,
        linear_only: bool,
    }

    #[derive(Debug)]
    struct TrackedSurface {
        inner: crate::SoftwareSurface,
        live: Rc<Cell<usize>>,
        fail_snapshot: bool,
        linear_only: bool,
    }

    impl Backend for TrackingBackend {
        type Surface = TrackedSurface;

        fn create_surface(&self, width: u32, height: u32) -> crate::Result<TrackedSurface> {
            let inner = SoftwareBackend::new().create_surface(width, height)?;
            self.live.set(self.live.get() + 1);
            self.created.set(self.created.get() + 1);
            Ok(TrackedSurface {
                inner,
                live: self.live.clone(),
                fail_snapshot: self.fail_snapshot,
                linear_only: self.linear_only,
            })
        }
    }

    impl Drop for TrackedSurface {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    impl Surface for TrackedSurface {
        fn features(&self) -> SurfaceFeatures {
            SurfaceFeatures {
                radial_gradients: !self.linear_only,
                ..self.inner.features()
            }
        }

        fn width(&self) -> u32 {
            self.inner.width()
        }

        fn height(&self) -> u32 {
            self.inner.height()
        }

        fn draw_linear_gradient(
            &mut self,
            ramp: &Ramp,
            start: Point<f32>,
            end: Point<f32>,
            options: DrawOptions,
        ) -> crate::Result {
            self.inner.draw_linear_gradient(ramp, start, end, options)
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
            if self.linear_only {
                return Err(Error::NotSupported(NSOpType::RadialGradients));
            }
            self.inner.draw_radial_gradient(
                ramp,
                start_center,
                start_radius,
                end_center,
                end_radius,
                options,
            )
        }

        fn snapshot(&self) -> crate::Result<Image> {
            if self.fail_snapshot {
                Err(Error::NotSupported(NSOpType::Snapshots))
            } else {
                self.inner.snapshot()
            }
        }
    }

    #[test]
    fn solid_ignores_arguments() {
        let source = SolidColorSource::new(red());
        for (kind, size, padding) in [
            (Kind::BallPulse, square(100.0), 0.0),
            (Kind::LineSpinFade, Size::new(0.0, 0.0), 50.0),
            (Kind::BallPulse, Size::new(-3.0, f32::NAN), f32::INFINITY),
        ]
        .iter()
        {
            assert_eq!(source.color(kind, *size, *padding), Fill::SolidColor(red()));
        }
        assert_eq!(SolidColorSource::from(blue()).get(), blue());
    }

    #[test]
    fn too_few_stops_is_transparent() {
        init_logger();
        let empty = GradientColorSource::new(Vec::<ColorStop>::new());
        assert!(empty.color(&Kind::BallPulse, square(50.0), 0.0).is_transparent());

        let single = GradientColorSource::new(vec![ColorStop::new(red(), 0.0)]);
        assert!(single.color(&Kind::BallPulse, square(50.0), 0.0).is_transparent());
        assert_eq!(
            single.render(square(50.0), 0.0).unwrap_err(),
            Error::TooFewStops(1)
        );
    }

    #[test]
    fn empty_size_is_transparent() {
        init_logger();
        let source = red_to_blue();
        for size in [
            Size::new(0.0, 0.0),
            Size::new(0.0, 50.0),
            Size::new(-10.0, 10.0),
            Size::new(f32::NAN, 10.0),
            Size::new(10.0, f32::INFINITY),
        ]
        .iter()
        {
            assert!(source.color(&Kind::BallPulse, *size, 0.0).is_transparent());
        }
    }

    #[test]
    fn diagonal_linear_ramp() {
        init_logger();
        let fill = red_to_blue().color(&Kind::BallPulse, square(50.0), 0.0);
        let image = pattern(&fill);
        assert_eq!((image.width(), image.height()), (50, 50));

        let (r, _, b, a) = rgba(image, 0, 0);
        assert!(r >= 250 && b <= 5 && a == 255);
        let (r, _, b, a) = rgba(image, 49, 49);
        assert!(r <= 5 && b >= 250 && a == 255);
        let (r, _, b, _) = rgba(image, 24, 24);
        assert!((r as i32 - b as i32).abs() <= 10);

        // the whole square lies between the start and end points
        assert!(image.pixels().all(|px| px[3] == 255));
    }

    #[test]
    fn linear_points_scale_with_size() {
        let source = red_to_blue().with_variant(GradientVariant::Linear {
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 0.0),
        });
        let image = source.render(Size::new(100.0, 10.0), 0.0).unwrap();
        assert_eq!((image.width(), image.height()), (100, 10));

        // constant down each column, ramping along the width
        assert_eq!(rgba(&image, 50, 0), rgba(&image, 50, 9));
        assert_eq!(rgba(&image, 0, 0).0, 254);
        assert_eq!(rgba(&image, 99, 0).2, 254);
    }

    #[test]
    fn linear_honors_draw_options() {
        let source = red_to_blue().with_variant(GradientVariant::Linear {
            start: Point::new(0.25, 0.5),
            end: Point::new(0.75, 0.5),
        });

        let bare = source.render(Size::new(40.0, 10.0), 0.0).unwrap();
        assert_eq!(rgba(&bare, 0, 5).3, 0);
        assert_eq!(rgba(&bare, 39, 5).3, 0);
        assert_eq!(rgba(&bare, 20, 5).3, 255);

        let extended = source
            .with_options(DrawOptions::EXTEND)
            .render(Size::new(40.0, 10.0), 0.0)
            .unwrap();
        assert_eq!(rgba(&extended, 0, 5), (255, 0, 0, 255));
        assert_eq!(rgba(&extended, 39, 5), (0, 0, 255, 255));
    }

    #[test]
    fn radial_radius_follows_padding() {
        assert_relative_eq!(radial_end_radius(square(100.0), 10.0), 40.0);
        assert_relative_eq!(radial_end_radius(Size::new(100.0, 60.0), 10.0), 20.0);
        assert_relative_eq!(radial_end_radius(square(100.0), 60.0), 0.0);
        assert_relative_eq!(radial_end_radius(square(100.0), f32::NAN), 0.0);
        assert_relative_eq!(indicator_edge(square(100.0), 10.0), 80.0);
    }

    #[test]
    fn radial_gradient_ends_at_indicator_edge() {
        init_logger();
        let source = red_to_blue().with_variant(GradientVariant::Radial);
        let fill = source.color(&Kind::BallPulse, square(100.0), 10.0);
        let image = pattern(&fill);

        // near the center the ramp starts at red
        let (r, _, b, a) = rgba(image, 50, 50);
        assert!(r >= 245 && b <= 10 && a == 255);
        // 38.5 px out is inside the radius of 40
        assert_eq!(rgba(image, 88, 50).3, 255);
        // 41.5 px out is not
        assert_eq!(rgba(image, 91, 50).3, 0);
        assert_eq!(rgba(image, 0, 0).3, 0);
    }

    #[test]
    fn radial_ignores_draw_options() {
        let source = red_to_blue()
            .with_variant(GradientVariant::Radial)
            .with_options(DrawOptions::EXTEND);
        let image = source.render(square(100.0), 10.0).unwrap();
        assert_eq!(rgba(&image, 0, 0).3, 0);
        assert_eq!(rgba(&image, 99, 99).3, 0);
    }

    #[test]
    fn oversized_padding_gives_empty_pattern() {
        let source = red_to_blue().with_variant(GradientVariant::Radial);
        let fill = source.color(&Kind::BallPulse, square(100.0), 60.0);
        let image = pattern(&fill);
        assert!(image.pixels().all(|px| px[3] == 0));
    }

    #[test]
    fn rendering_is_deterministic() {
        for variant in [GradientVariant::default(), GradientVariant::Radial].iter() {
            let source = GradientColorSource::new(vec![
                ColorStop::new(red(), 0.0),
                ColorStop::new(Color::WHITE, 0.3),
                ColorStop::new(blue(), 1.0),
            ])
            .with_variant(*variant);
            let first = source.color(&Kind::BallPulse, Size::new(37.5, 42.0), 4.0);
            let second = source.color(&Kind::BallPulse, Size::new(37.5, 42.0), 4.0);
            assert!(first.as_pattern().is_some());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn kind_does_not_change_output() {
        let source = red_to_blue();
        assert_eq!(
            source.color(&Kind::BallPulse, square(30.0), 2.0),
            source.color(&Kind::LineSpinFade, square(30.0), 2.0)
        );
        assert_eq!(
            source.color("ballPulse", square(30.0), 2.0),
            source.color(&Kind::LineSpinFade, square(30.0), 2.0)
        );
    }

    #[test]
    fn sub_pixel_size_renders() {
        let source = red_to_blue().with_options(DrawOptions::EXTEND);
        let fill = source.color(&Kind::BallPulse, square(0.0002), 0.0);
        let image = pattern(&fill);
        assert_eq!((image.width(), image.height()), (1, 1));
        // the pixel center lies far past the end of the scaled-down axis
        assert_eq!(rgba(image, 0, 0), (0, 0, 255, 255));
    }

    #[test]
    fn fractional_size_rounds_up() {
        let image = red_to_blue().render(Size::new(10.2, 3.7), 0.0).unwrap();
        assert_eq!((image.width(), image.height()), (11, 4));
    }

    #[test]
    fn backend_refusal_is_transparent() {
        init_logger();
        let source = red_to_blue().with_backend(SoftwareBackend::with_max_dimension(16));
        assert!(source.color(&Kind::BallPulse, square(100.0), 0.0).is_transparent());
        assert!(matches!(
            source.render(square(100.0), 0.0),
            Err(Error::SurfaceTooLarge { max: 16, .. })
        ));
        assert!(source.color(&Kind::BallPulse, square(16.0), 0.0).as_pattern().is_some());
    }

    #[test]
    fn surface_released_on_success() {
        let backend = TrackingBackend::default();
        let (live, created) = (backend.live.clone(), backend.created.clone());
        let source = red_to_blue().with_backend(backend);

        assert!(source.color(&Kind::BallPulse, square(20.0), 0.0).as_pattern().is_some());
        assert!(source.color(&Kind::BallPulse, square(20.0), 0.0).as_pattern().is_some());
        assert_eq!(created.get(), 2);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn surface_released_on_failed_snapshot() {
        init_logger();
        let backend = TrackingBackend {
            fail_snapshot: true,
            ..TrackingBackend::default()
        };
        let (live, created) = (backend.live.clone(), backend.created.clone());
        let source = red_to_blue().with_backend(backend);

        assert!(source.color(&Kind::BallPulse, square(20.0), 0.0).is_transparent());
        assert_eq!(created.get(), 1);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn missing_feature_is_transparent() {
        let backend = TrackingBackend {
            linear_only: true,
            ..TrackingBackend::default()
        };
        let live = backend.live.clone();
        let source = red_to_blue().with_backend(backend);

        assert!(source.color(&Kind::BallPulse, square(20.0), 0.0).as_pattern().is_some());

        let radial = source.with_variant(GradientVariant::Radial);
        assert_eq!(
            radial.render(square(20.0), 0.0).unwrap_err(),
            Error::NotSupported(NSOpType::RadialGradients)
        );
        assert!(radial.color(&Kind::BallPulse, square(20.0), 0.0).is_transparent());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn sources_behind_pointers() {
        let sources: Vec<Box<dyn ColorSource<Kind>>> = vec![
            Box::new(SolidColorSource::new(red())),
            Box::new(red_to_blue()),
            Box::new(Arc::new(red_to_blue().with_variant(GradientVariant::Radial))),
        ];
        let fills: Vec<Fill> = sources
            .iter()
            .map(|source| source.color(&Kind::LineSpinFade, square(24.0), 2.0))
            .collect();

        assert_eq!(fills[0], Fill::SolidColor(red()));
        assert!(fills[1].as_pattern().is_some());
        assert!(fills[2].as_pattern().is_some());

        let borrowed = &sources[0];
        assert_eq!(
            borrowed.color(&Kind::BallPulse, square(1.0), 0.0),
            Fill::SolidColor(red())
        );
    }

    #[test]
    fn configuration_is_kept() {
        let source = red_to_blue()
            .with_variant(GradientVariant::Radial)
            .with_options(DrawOptions::EXTEND);
        assert_eq!(source.stops().len(), 2);
        assert_eq!(source.stops()[1], ColorStop::new(blue(), 1.0));
        assert_eq!(source.variant(), GradientVariant::Radial);
        assert_eq!(source.options(), DrawOptions::EXTEND);
        assert_eq!(source.backend(), &SoftwareBackend::default());
    }

    #[test]
    fn gradient_source_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GradientColorSource>();
        assert_send_sync::<SolidColorSource>();
        assert_send_sync::<Fill>();

        let source = Arc::new(red_to_blue());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = source.clone();
                std::thread::spawn(move || source.color(&Kind::BallPulse, square(16.0), 1.0))
            })
            .collect();
        let fills: Vec<Fill> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(fills.windows(2).all(|w| w[0] == w[1]));
    }
}
