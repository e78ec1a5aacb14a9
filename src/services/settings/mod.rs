mod service;

pub use service::{parse, ConfigService};
