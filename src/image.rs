pub mod base;
pub mod compositing;
pub mod generators;
pub mod transforms;
