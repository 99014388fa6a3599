pub use kurbo::Point;

/// A displacement in the plane. Only ever added to or subtracted from a [`Point`].
pub type Vector = kurbo::Vec2;

/// Blend weight, nominally in `[0, 1]`. The range is not enforced.
pub type Fraction = f64;

/// A point in polar form: distance from the origin and angle in radians.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polar {
    /// Distance from the origin.
    pub radius: f64,
    /// Counter-clockwise from the positive x axis.
    pub angle: f64,
}

impl Polar {
    /// Create a polar point.
    pub fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Angle is measured counter-clockwise from the positive x axis, in `(-pi, pi]`.
pub fn to_polar(p: Point) -> Polar {
    let v = p.to_vec2();
    Polar {
        radius: v.hypot(),
        angle: v.atan2(),
    }
}

/// Inverse of [`to_polar`], up to float rounding.
pub fn from_polar(q: Polar) -> Point {
    (Vector::from_angle(q.angle) * q.radius).to_point()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
