use crate::{
    foundation::{
        color::Color,
        core::Fraction,
        error::{PointwiseError, PointwiseResult},
    },
    image::{
        base::{BaseImage, Blend, Image},
        compositing::{cond, darken, lerp, lighten},
        generators::{checker, circle, constant, polar_checker, rings, vertical_stripe},
        transforms::{rotate, scale, translate},
    },
    scene::model::{Node, Scene},
};

/// Value types a [`Node`] can describe.
///
/// Blending operators default to [`PointwiseError::Unsupported`]; only [`Color`] provides them.
pub trait SceneValue: Clone + Send + Sync + 'static {
    /// Human-readable name used in errors and logs.
    const NAME: &'static str;

    /// Image for a `lerp` node.
    fn lerp(
        _blend: &Blend,
        _this_way: &BaseImage<Self>,
        _that_way: &BaseImage<Self>,
    ) -> PointwiseResult<BaseImage<Self>> {
        Err(unsupported::<Self>("lerp"))
    }

    /// Image for a `darken` node.
    fn darken(_image: &BaseImage<Self>, _blend: &Blend) -> PointwiseResult<BaseImage<Self>> {
        Err(unsupported::<Self>("darken"))
    }

    /// Image for a `lighten` node.
    fn lighten(_image: &BaseImage<Self>, _blend: &Blend) -> PointwiseResult<BaseImage<Self>> {
        Err(unsupported::<Self>("lighten"))
    }
}

fn unsupported<T: SceneValue>(op: &str) -> PointwiseError {
    PointwiseError::unsupported(format!("{op} is only defined for color images, not {}", T::NAME))
}

impl SceneValue for Color {
    const NAME: &'static str = "color";

    fn lerp(blend: &Blend, this_way: &Image, that_way: &Image) -> PointwiseResult<Image> {
        Ok(lerp(blend, this_way, that_way))
    }

    fn darken(image: &Image, blend: &Blend) -> PointwiseResult<Image> {
        Ok(darken(image, blend))
    }

    fn lighten(image: &Image, blend: &Blend) -> PointwiseResult<Image> {
        Ok(lighten(image, blend))
    }
}

impl SceneValue for bool {
    const NAME: &'static str = "region";
}

impl SceneValue for Fraction {
    const NAME: &'static str = "blend";
}

impl<T: SceneValue> Node<T> {
    /// Validates the tree, then builds the image it describes.
    #[tracing::instrument(skip(self), fields(value = T::NAME))]
    pub fn build(&self) -> PointwiseResult<BaseImage<T>> {
        self.validate()?;
        let image = self.build_unchecked()?;
        tracing::debug!(nodes = self.node_count(), "built image");
        Ok(image)
    }

    fn build_unchecked(&self) -> PointwiseResult<BaseImage<T>> {
        let image = match self {
            Self::Constant { value } => constant(value.clone()),
            Self::Circle {
                center,
                radius,
                inner,
                outer,
            } => circle(*center, *radius, inner.clone(), outer.clone()),
            Self::Checker { size, inner, outer } => checker(*size, inner.clone(), outer.clone()),
            Self::PolarChecker {
                size,
                segments,
                inner,
                outer,
            } => polar_checker(*size, *segments, inner.clone(), outer.clone()),
            Self::Rings {
                center,
                width,
                inner,
                outer,
            } => rings(*center, *width, inner.clone(), outer.clone()),
            Self::VerticalStripe {
                width,
                inner,
                outer,
            } => vertical_stripe(*width, inner.clone(), outer.clone()),
            Self::Rotate { source, angle } => rotate(&source.build_unchecked()?, *angle),
            Self::Translate { source, by } => translate(&source.build_unchecked()?, *by),
            Self::Scale { source, factor } => scale(&source.build_unchecked()?, *factor),
            Self::Cond {
                region,
                this_way,
                that_way,
            } => cond(
                &region.build_unchecked()?,
                &this_way.build_unchecked()?,
                &that_way.build_unchecked()?,
            ),
            Self::Lerp {
                blend,
                this_way,
                that_way,
            } => T::lerp(
                &blend.build_unchecked()?,
                &this_way.build_unchecked()?,
                &that_way.build_unchecked()?,
            )?,
            Self::Darken { source, blend } => {
                T::darken(&source.build_unchecked()?, &blend.build_unchecked()?)?
            }
            Self::Lighten { source, blend } => {
                T::lighten(&source.build_unchecked()?, &blend.build_unchecked()?)?
            }
        };
        Ok(image)
    }
}

impl Scene {
    /// Validates and builds the scene's color image.
    #[tracing::instrument(skip(self))]
    pub fn build(&self) -> PointwiseResult<Image> {
        self.image.build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/build.rs"]
mod tests;
