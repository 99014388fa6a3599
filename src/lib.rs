//! Pointwise describes infinite, continuous images as pure functions of the plane.
//!
//! An image is a [`BaseImage<T>`]: a shared, immutable mapping from [`Point`] to `T`.
//! Nothing is computed until a point is sampled, and sampling has no side effects, so any
//! image can be sampled from many threads at once.
//!
//! # Layers
//!
//! 1. **Combinators**: [`compose!`] chains unary functions and [`lift!`] applies an n-ary
//!    function point-wise to the results of n unary functions.
//! 2. **Image algebra**, built from the combinators:
//!    - generators: [`constant`], [`circle`], [`checker`], [`polar_checker`], [`rings`],
//!      [`vertical_stripe`]
//!    - transforms: [`rotate`], [`translate`], [`scale`]
//!    - compositing: [`cond`], [`lerp`], [`darken`], [`lighten`]
//! 3. **Scenes**: [`Node`] and [`Scene`] describe the same algebra as data (JSON via serde),
//!    validate numeric parameters and build the corresponding images.
//!
//! The image functions do not validate their numeric parameters. A zero cell size or a
//! zero scale factor yields whatever the floating-point arithmetic produces. Parameters
//! that come from outside the program should go through [`Node::validate`].
//!
//! ```
//! use pointwise::{Color, Point, circle, cond, constant, rotate};
//!
//! let red = Color::rgb(255, 0, 0);
//! let dot = circle(Point::new(4.0, 0.0), 1.0, true, false);
//! let img = cond(&rotate(&dot, std::f64::consts::PI), &constant(red), &constant(Color::WHITE));
//! assert_eq!(img.sample(Point::new(-4.0, 0.0)), red);
//! assert_eq!(img.sample(Point::new(4.0, 0.0)), Color::WHITE);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod combinator;
mod foundation;
mod image;
mod scene;

pub use foundation::color::Color;
pub use foundation::core::{Fraction, Point, Polar, Vector, distance, from_polar, to_polar};
pub use foundation::error::{PointwiseError, PointwiseResult};
pub use image::base::{BaseImage, Blend, Field, Image, Region};
pub use image::compositing::{cond, darken, lerp, lighten};
pub use image::generators::{checker, circle, constant, polar_checker, rings, vertical_stripe};
pub use image::transforms::{rotate, scale, translate};
pub use scene::build::SceneValue;
pub use scene::model::{Node, Scene};
