//! Geometric transforms. Each one resamples its source at a moved point.

use crate::{
    foundation::core::{Point, Polar, Vector, from_polar, to_polar},
    image::base::BaseImage,
};

/// Rotates `image` counter-clockwise by `phi` radians about the origin.
pub fn rotate<T: 'static>(image: &BaseImage<T>, phi: f64) -> BaseImage<T> {
    BaseImage::new(crate::compose!(
        to_polar,
        move |q: Polar| Polar::new(q.radius, q.angle - phi),
        from_polar,
        image.to_fn(),
    ))
}

/// Moves `image` by `v`.
pub fn translate<T: 'static>(image: &BaseImage<T>, v: Vector) -> BaseImage<T> {
    BaseImage::new(crate::lift!(image.to_fn(), move |p: Point| p - v))
}

/// Scales `image` by `s` about the origin. `s == 0` is not guarded.
pub fn scale<T: 'static>(image: &BaseImage<T>, s: f64) -> BaseImage<T> {
    BaseImage::new(crate::lift!(image.to_fn(), move |p: Point| {
        (p.to_vec2() / s).to_point()
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/image/transforms.rs"]
mod tests;
