pub mod emitters;
pub mod error;
pub mod generator;
pub mod output;
pub mod type_mapper;
pub mod validation;

pub use error::JavaError;
pub use generator::JavaModelGenerator;
pub use output::write_units;
