// MIT/Apache2 License

use super::{Backend, Surface, SurfaceFeatures};
use crate::{DrawOptions, Image, Ramp};
use lyon_geom::Point;
use std::{rc::Rc, sync::Arc};

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn features(&self) -> SurfaceFeatures {
        (**self).features()
    }
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }
    #[inline]
    fn draw_linear_gradient(
        &mut self,
        ramp: &Ramp,
        start: Point<f32>,
        end: Point<f32>,
        options: DrawOptions,
    ) -> crate::Result {
        (**self).draw_linear_gradient(ramp, start, end, options)
    }
    #[inline]
    fn draw_radial_gradient(
        &mut self,
        ramp: &Ramp,
        start_center: Point<f32>,
        start_radius: f32,
        end_center: Point<f32>,
        end_radius: f32,
        options: DrawOptions,
    ) -> crate::Result {
        (**self).draw_radial_gradient(
            ramp,
            start_center,
            start_radius,
            end_center,
            end_radius,
            options,
        )
    }
    #[inline]
    fn snapshot(&self) -> crate::Result<Image> {
        (**self).snapshot()
    }
}

macro_rules! impl_backend_for_pointer {
    ($($ptr: ident),*) => {
        $(
            impl<B: Backend + ?Sized> Backend for $ptr<B> {
                type Surface = B::Surface;

                #[inline]
                fn create_surface(&self, width: u32, height: u32) -> crate::Result<Self::Surface> {
                    (**self).create_surface(width, height)
                }
            }
        )*
    };
}

impl<B: Backend + ?Sized> Backend for &B {
    type Surface = B::Surface;

    #[inline]
    fn create_surface(&self, width: u32, height: u32) -> crate::Result<Self::Surface> {
        (**self).create_surface(width, height)
    }
}

impl_backend_for_pointer!(Box, Rc, Arc);
