use std::sync::LazyLock;

use crate::{
    foundation::{
        color::Color,
        core::{Fraction, Point},
    },
    image::{
        base::{BaseImage, Blend, Field, Image, Region},
        generators::constant,
    },
};

static BLACK: LazyLock<Image> = LazyLock::new(|| constant(Color::BLACK));
static WHITE: LazyLock<Image> = LazyLock::new(|| constant(Color::WHITE));

struct Select<T> {
    region: Region,
    this_way: BaseImage<T>,
    that_way: BaseImage<T>,
}

impl<T: 'static> Field<T> for Select<T> {
    fn sample(&self, p: Point) -> T {
        // Only the chosen branch is sampled.
        if self.region.sample(p) {
            self.this_way.sample(p)
        } else {
            self.that_way.sample(p)
        }
    }
}

/// `this_way` where `region` holds, `that_way` elsewhere. No blending at the edge.
pub fn cond<T: 'static>(
    region: &Region,
    this_way: &BaseImage<T>,
    that_way: &BaseImage<T>,
) -> BaseImage<T> {
    BaseImage::new(Select {
        region: region.clone(),
        this_way: this_way.clone(),
        that_way: that_way.clone(),
    })
}

/// Mixes `this_way` toward `that_way` by the weight `blend` gives at each point.
pub fn lerp(blend: &Blend, this_way: &Image, that_way: &Image) -> Image {
    BaseImage::new(crate::lift!(
        |t: Fraction, a: Color, b: Color| a.weighted_mean(b, t),
        blend.to_fn(),
        this_way.to_fn(),
        that_way.to_fn(),
    ))
}

/// [`lerp`] from `image` toward black: `blend` 0 keeps `image`, 1 gives black.
pub fn darken(image: &Image, blend: &Blend) -> Image {
    lerp(blend, image, &BLACK)
}

/// [`lerp`] from `image` toward white.
pub fn lighten(image: &Image, blend: &Blend) -> Image {
    lerp(blend, image, &WHITE)
}

#[cfg(test)]
#[path = "../../tests/unit/image/compositing.rs"]
mod tests;
