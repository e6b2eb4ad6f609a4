pub mod schemas;
pub mod types;

pub use schemas::*;
pub use types::{Dialect, PropertySummary, Role, SchemaSummary, SpecDocument};
