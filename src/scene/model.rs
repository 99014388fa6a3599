use crate::{
    foundation::{
        color::Color,
        core::{Fraction, Point, Vector},
        error::{PointwiseError, PointwiseResult},
    },
    image::generators::polar_stretch,
};

/// Data form of an image of `T`, one variant per generator, transform and operator.
///
/// Serialized internally tagged, e.g. `{ "kind": "checker", "size": 2.0, "inner": .., "outer": .. }`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node<T> {
    /// See [`constant`](crate::constant).
    Constant {
        /// Value at every point.
        value: T,
    },
    /// See [`circle`](crate::circle).
    Circle {
        /// Center of the disk.
        center: Point,
        /// Must be finite and > 0.
        radius: f64,
        /// Value strictly inside.
        inner: T,
        /// Value on the boundary and beyond.
        outer: T,
    },
    /// See [`checker`](crate::checker).
    Checker {
        /// Side of a cell.
        size: f64,
        /// Value of the cell containing `(0.5 * size, 0.5 * size)`.
        inner: T,
        /// Value of the other cells.
        outer: T,
    },
    /// See [`polar_checker`](crate::polar_checker).
    PolarChecker {
        /// Ring width.
        size: f64,
        /// Angular cells per ring, at least 1.
        segments: u32,
        /// First checker value.
        inner: T,
        /// Second checker value.
        outer: T,
    },
    /// See [`rings`](crate::rings).
    Rings {
        /// Common center of the rings.
        center: Point,
        /// Ring width.
        width: f64,
        /// First ring value.
        inner: T,
        /// Second ring value.
        outer: T,
    },
    /// See [`vertical_stripe`](crate::vertical_stripe).
    VerticalStripe {
        /// Full width of the band.
        width: f64,
        /// Value inside the band.
        inner: T,
        /// Value outside it.
        outer: T,
    },
    /// See [`rotate`](crate::rotate).
    Rotate {
        /// Image to rotate.
        source: Box<Node<T>>,
        /// Radians, counter-clockwise.
        angle: f64,
    },
    /// See [`translate`](crate::translate).
    Translate {
        /// Image to move.
        source: Box<Node<T>>,
        /// Displacement.
        by: Vector,
    },
    /// See [`scale`](crate::scale).
    Scale {
        /// Image to scale.
        source: Box<Node<T>>,
        /// Uniform factor about the origin.
        factor: f64,
    },
    /// See [`cond`](crate::cond).
    Cond {
        /// Where `this_way` applies.
        region: Box<Node<bool>>,
        /// Image inside the region.
        this_way: Box<Node<T>>,
        /// Image outside the region.
        that_way: Box<Node<T>>,
    },
    // Lerp, Darken and Lighten build for colors only.
    /// See [`lerp`](crate::lerp).
    Lerp {
        /// Weight toward `that_way` at each point.
        blend: Box<Node<Fraction>>,
        /// Image at weight 0.
        this_way: Box<Node<T>>,
        /// Image at weight 1.
        that_way: Box<Node<T>>,
    },
    /// See [`darken`](crate::darken).
    Darken {
        /// Image to darken.
        source: Box<Node<T>>,
        /// Weight toward black.
        blend: Box<Node<Fraction>>,
    },
    /// See [`lighten`](crate::lighten).
    Lighten {
        /// Image to lighten.
        source: Box<Node<T>>,
        /// Weight toward white.
        blend: Box<Node<Fraction>>,
    },
}

/// A complete scene document: the color image it describes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Root of the node tree.
    pub image: Node<Color>,
}

impl<T> Node<T> {
    /// Checks the numeric preconditions the image functions themselves leave unguarded.
    ///
    /// Besides the parameters themselves, derived factors must be usable: the angular
    /// stretch of a polar checker must be finite, and a scale factor must be a normal
    /// float so that dividing a point by it does not overflow.
    pub fn validate(&self) -> PointwiseResult<()> {
        match self {
            Self::Constant { .. } => Ok(()),
            Self::Circle { center, radius, .. } => {
                finite_point("circle.center", *center)?;
                positive("circle.radius", *radius)
            }
            Self::Checker { size, .. } => positive("checker.size", *size),
            Self::PolarChecker { size, segments, .. } => {
                positive("polar_checker.size", *size)?;
                if *segments == 0 {
                    return Err(PointwiseError::validation(
                        "polar_checker.segments must be > 0",
                    ));
                }
                if !polar_stretch(*size, *segments).is_finite() {
                    return Err(PointwiseError::validation(
                        "polar_checker.size * segments is too large",
                    ));
                }
                Ok(())
            }
            Self::Rings { center, width, .. } => {
                finite_point("rings.center", *center)?;
                positive("rings.width", *width)
            }
            Self::VerticalStripe { width, .. } => positive("vertical_stripe.width", *width),
            Self::Rotate { source, angle } => {
                finite("rotate.angle", *angle)?;
                source.validate()
            }
            Self::Translate { source, by } => {
                finite("translate.by.x", by.x)?;
                finite("translate.by.y", by.y)?;
                source.validate()
            }
            Self::Scale { source, factor } => {
                finite("scale.factor", *factor)?;
                if !factor.is_normal() {
                    return Err(PointwiseError::validation(
                        "scale.factor must be non-zero and not subnormal",
                    ));
                }
                source.validate()
            }
            Self::Cond {
                region,
                this_way,
                that_way,
            } => {
                region.validate()?;
                this_way.validate()?;
                that_way.validate()
            }
            Self::Lerp {
                blend,
                this_way,
                that_way,
            } => {
                blend.validate()?;
                this_way.validate()?;
                that_way.validate()
            }
            Self::Darken { source, blend } | Self::Lighten { source, blend } => {
                source.validate()?;
                blend.validate()
            }
        }
    }

    /// Number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + match self {
            Self::Constant { .. }
            | Self::Circle { .. }
            | Self::Checker { .. }
            | Self::PolarChecker { .. }
            | Self::Rings { .. }
            | Self::VerticalStripe { .. } => 0,
            Self::Rotate { source, .. }
            | Self::Translate { source, .. }
            | Self::Scale { source, .. } => source.node_count(),
            Self::Cond {
                region,
                this_way,
                that_way,
            } => region.node_count() + this_way.node_count() + that_way.node_count(),
            Self::Lerp {
                blend,
                this_way,
                that_way,
            } => blend.node_count() + this_way.node_count() + that_way.node_count(),
            Self::Darken { source, blend } | Self::Lighten { source, blend } => {
                source.node_count() + blend.node_count()
            }
        }
    }
}

impl Scene {
    /// Parses a scene document. Does not validate it.
    #[tracing::instrument(skip(json), fields(len = json.len()))]
    pub fn from_json(json: &str) -> PointwiseResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> PointwiseResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// See [`Node::validate`].
    pub fn validate(&self) -> PointwiseResult<()> {
        self.image.validate()
    }
}

fn finite(what: &str, v: f64) -> PointwiseResult<()> {
    if !v.is_finite() {
        return Err(PointwiseError::validation(format!("{what} must be finite")));
    }
    Ok(())
}

fn positive(what: &str, v: f64) -> PointwiseResult<()> {
    finite(what, v)?;
    if v <= 0.0 {
        return Err(PointwiseError::validation(format!("{what} must be > 0")));
    }
    Ok(())
}

fn finite_point(what: &str, p: Point) -> PointwiseResult<()> {
    if !p.is_finite() {
        return Err(PointwiseError::validation(format!("{what} must be finite")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
