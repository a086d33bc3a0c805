// MIT/Apache2 License

//! Color sources for activity indicators.
//!
//! A spinner view holds a [`ColorSource`] and asks it, on every layout or draw pass, what to fill its shapes
//! with. [`SolidColorSource`] always answers with the same color. [`GradientColorSource`] renders a multi-stop
//! linear or radial gradient at the indicator's current size and answers with the resulting image, wrapped as a
//! repeating [`Fill::Pattern`].
//!
//! Rendering goes through the [`Backend`] and [`Surface`] traits. The crate ships a software implementation,
//! [`SoftwareBackend`], which is used unless another backend is supplied.
//!
//! Color sources never fail. Whenever a gradient cannot be rendered they hand out [`Fill::TRANSPARENT`] and
//! log the reason at the `debug` level through the `log` facade.

mod error;

pub mod color;
pub mod fill;
pub mod gradient;
pub mod image;
pub mod intensity;
pub mod source;
pub mod surface;

pub(crate) mod util;

pub use color::*;
pub use error::*;
pub use fill::*;
pub use gradient::*;
pub use image::*;
pub use intensity::*;
pub use source::*;
pub use surface::*;

#[doc(inline)]
pub use lyon_geom::{Point, Size, Vector};
