// Service module exports

pub mod grid;
pub mod mapping;
pub mod merge;
pub mod schedule;
pub mod settings;
