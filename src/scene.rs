pub mod build;
pub mod model;
