pub mod config;
pub mod error;
pub mod ir;
pub mod parse;
pub mod transform;

use error::GenerateError;
use ir::{Role, SpecDocument};

/// One generated source file: its qualified type name and full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub name: String,
    pub code: String,
}

impl GeneratedUnit {
    /// Name of the unit that replaces the output of a failed run.
    pub const ERROR_NAME: &'static str = "Error";

    /// The substitute unit for a failed run. Every line of the message is
    /// emitted as a line comment.
    pub fn error(message: &str) -> Self {
        let code = format!("Generation failed: {message}")
            .lines()
            .map(|line| format!("// {line}"))
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            name: Self::ERROR_NAME.to_string(),
            code,
        }
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.name)
    }
}

/// A target-language back end that renders one schema in one role.
pub trait CodeGenerator {
    type Error: std::error::Error;

    /// File extension of emitted units, without the dot.
    fn extension(&self) -> &'static str;

    fn synthesize(
        &self,
        document: &SpecDocument,
        schema: &str,
        role: Role,
    ) -> Result<String, Self::Error>;
}

/// Parse, load, and expand in one go, failing on the first error.
pub fn try_generate<G: CodeGenerator>(
    text: &str,
    selection: &[String],
    generator: &G,
) -> Result<Vec<GeneratedUnit>, GenerateError> {
    let value = parse::parse_document(text)?;
    let document = transform::load(&value)?;
    transform::expand_selection(&document, selection, generator)
        .map_err(|e| GenerateError::Synthesis(e.to_string()))
}

/// Best-effort generation: any failure yields a single [`GeneratedUnit::error`]
/// unit instead of an error.
pub fn generate<G: CodeGenerator>(
    text: &str,
    selection: &[String],
    generator: &G,
) -> Vec<GeneratedUnit> {
    match try_generate(text, selection, generator) {
        Ok(units) => units,
        Err(e) => {
            log::error!("generation failed: {e}");
            vec![GeneratedUnit::error(&e.to_string())]
        }
    }
}
