pub mod classifier;
pub mod name_normalizer;
pub mod schema_resolver;
pub mod selection;
pub mod spec_to_ir;

pub use schema_resolver::{ResolvedSchema, resolve_schema};
pub use selection::expand_selection;
pub use spec_to_ir::load;
