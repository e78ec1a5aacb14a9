// Weekly Scheduler Library
// Grid geometry, cell/date mapping, range merging and drag gestures

pub mod error;
pub mod gesture;
pub mod models;
pub mod services;
pub mod utils;
