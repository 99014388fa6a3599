//! The two primitives every image is derived from: [`compose!`](crate::compose) and
//! [`lift!`](crate::lift). Both are macros so that any statically known number of stages
//! can be chained, each with its own argument and result types.

mod compose;
mod lift;
