// Module exports for models

pub mod geometry;
pub mod range;
pub mod settings;
