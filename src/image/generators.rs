//! Pattern generators.
//!
//! Numeric parameters are not checked. A zero cell size or a non-positive radius gives a
//! degenerate pattern, not an error. Use the scene layer when parameters come from
//! untrusted input.

use std::f64::consts::TAU;

use crate::{
    foundation::core::{Point, Polar, distance, to_polar},
    image::{
        base::{BaseImage, Field},
        transforms::translate,
    },
};

struct Constant<T> {
    value: T,
}

impl<T: Clone + Send + Sync> Field<T> for Constant<T> {
    fn sample(&self, _p: Point) -> T {
        self.value.clone()
    }
}

struct Circle<T> {
    center: Point,
    radius: f64,
    inner: T,
    outer: T,
}

impl<T: Clone + Send + Sync> Field<T> for Circle<T> {
    fn sample(&self, p: Point) -> T {
        if distance(self.center, p) < self.radius {
            self.inner.clone()
        } else {
            self.outer.clone()
        }
    }
}

struct Checker<T> {
    size: f64,
    inner: T,
    outer: T,
}

impl<T: Clone + Send + Sync> Field<T> for Checker<T> {
    fn sample(&self, p: Point) -> T {
        let col = (p.x / self.size).floor();
        let row = (p.y / self.size).floor();
        if (col + row).rem_euclid(2.0) == 0.0 {
            self.inner.clone()
        } else {
            self.outer.clone()
        }
    }
}

struct VerticalStripe<T> {
    width: f64,
    inner: T,
    outer: T,
}

impl<T: Clone + Send + Sync> Field<T> for VerticalStripe<T> {
    fn sample(&self, p: Point) -> T {
        if 2.0 * p.x.abs() < self.width {
            self.inner.clone()
        } else {
            self.outer.clone()
        }
    }
}

/// Every point maps to `value`.
pub fn constant<T>(value: T) -> BaseImage<T>
where
    T: Clone + Send + Sync + 'static,
{
    BaseImage::new(Constant { value })
}

/// `inner` strictly inside the circle, `outer` on its boundary and beyond.
pub fn circle<T>(center: Point, radius: f64, inner: T, outer: T) -> BaseImage<T>
where
    T: Clone + Send + Sync + 'static,
{
    BaseImage::new(Circle {
        center,
        radius,
        inner,
        outer,
    })
}

/// Axis-aligned squares of side `size`, alternating between `inner` and `outer`.
///
/// The cell `[0, size) x [0, size)` is `inner`.
pub fn checker<T>(size: f64, inner: T, outer: T) -> BaseImage<T>
where
    T: Clone + Send + Sync + 'static,
{
    BaseImage::new(Checker { size, inner, outer })
}

/// A checker laid out in polar coordinates: rings `size` apart, each split into `segments`
/// angular cells.
pub fn polar_checker<T>(size: f64, segments: u32, inner: T, outer: T) -> BaseImage<T>
where
    T: Clone + Send + Sync + 'static,
{
    let stretch = polar_stretch(size, segments);
    BaseImage::new(crate::compose!(
        to_polar,
        move |q: Polar| Point::new(q.radius, q.angle * stretch),
        checker(size, inner, outer).to_fn(),
    ))
}

/// Factor that turns an angle into a checker coordinate, so one full turn spans `segments`
/// cells of side `size`.
pub(crate) fn polar_stretch(size: f64, segments: u32) -> f64 {
    size * f64::from(segments) / TAU
}

/// Concentric rings of width `width` around `center`.
///
/// This is a one-segment polar checker, so the angular coordinate still picks a checker
/// row: below `center` the ring parity is shifted by one.
pub fn rings<T>(center: Point, width: f64, inner: T, outer: T) -> BaseImage<T>
where
    T: Clone + Send + Sync + 'static,
{
    translate(&polar_checker(width, 1, inner, outer), center.to_vec2())
}

/// A vertical band of width `width` centered on the y axis.
pub fn vertical_stripe<T>(width: f64, inner: T, outer: T) -> BaseImage<T>
where
    T: Clone + Send + Sync + 'static,
{
    BaseImage::new(VerticalStripe {
        width,
        inner,
        outer,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/image/generators.rs"]
mod tests;
