use std::{fmt, sync::Arc};

use crate::foundation::{
    color::Color,
    core::{Fraction, Point},
};

/// A pure mapping from points of the plane to values of type `T`.
///
/// Implementations must be side-effect free: sampling the same point twice gives the same
/// value, and sampling from several threads at once needs no synchronization. Every
/// `Fn(Point) -> T + Send + Sync` closure is a `Field<T>`.
pub trait Field<T>: Send + Sync {
    /// The value at `p`.
    fn sample(&self, p: Point) -> T;
}

impl<T, F> Field<T> for F
where
    F: Fn(Point) -> T + Send + Sync,
{
    fn sample(&self, p: Point) -> T {
        self(p)
    }
}

/// Immutable, cheaply clonable handle to a [`Field`].
///
/// Clones share the same underlying mapping. Two images are interchangeable when they
/// produce the same value at every point; there is no other notion of identity.
pub struct BaseImage<T> {
    field: Arc<dyn Field<T>>,
}

/// An image of membership tests.
pub type Region = BaseImage<bool>;
/// An image of colors.
pub type Image = BaseImage<Color>;
/// An image of blend weights.
pub type Blend = BaseImage<Fraction>;

impl<T: 'static> BaseImage<T> {
    /// Wrap a field, usually a closure over [`Point`].
    pub fn new(field: impl Field<T> + 'static) -> Self {
        Self {
            field: Arc::new(field),
        }
    }

    /// Evaluate the image at `p`.
    pub fn sample(&self, p: Point) -> T {
        self.field.sample(p)
    }

    /// The image as a plain closure, for use as a stage of `compose!` or `lift!`.
    pub fn to_fn(&self) -> impl Fn(Point) -> T + Clone + Send + Sync + use<T> {
        let field = Arc::clone(&self.field);
        move |p| field.sample(p)
    }

    /// Post-processes every sample with `f`.
    pub fn map<U: 'static>(
        &self,
        f: impl Fn(T) -> U + Send + Sync + 'static,
    ) -> BaseImage<U> {
        BaseImage::new(crate::compose!(self.to_fn(), f))
    }
}

impl<T> Clone for BaseImage<T> {
    fn clone(&self) -> Self {
        Self {
            field: Arc::clone(&self.field),
        }
    }
}

impl<T> fmt::Debug for BaseImage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseImage")
            .field("value", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/image/base.rs"]
mod tests;
