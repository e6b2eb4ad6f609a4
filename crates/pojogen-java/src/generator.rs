use minijinja::Environment;
use pojogen_core::CodeGenerator;
use pojogen_core::config::{EnumType, GenerationOptions};
use pojogen_core::ir::{Role, SpecDocument};
use pojogen_core::transform::resolve_schema;

use crate::emitters;
use crate::error::JavaError;

/// Java model class generator.
pub struct JavaModelGenerator {
    options: GenerationOptions,
    env: Environment<'static>,
}

impl JavaModelGenerator {
    pub fn new(options: GenerationOptions) -> Result<Self, JavaError> {
        Ok(Self {
            options,
            env: emitters::environment()?,
        })
    }
}

impl CodeGenerator for JavaModelGenerator {
    type Error = JavaError;

    fn extension(&self) -> &'static str {
        "java"
    }

    fn synthesize(
        &self,
        document: &SpecDocument,
        schema: &str,
        role: Role,
    ) -> Result<String, Self::Error> {
        let (Some(node), Some(resolved)) = (
            document.schema(schema),
            resolve_schema(schema, &document.schemas),
        ) else {
            log::debug!("schema `{schema}` not found");
            return Ok(format!("// Schema {schema} not found."));
        };
        let name = role.qualified_name(schema);

        if node.is_enum() {
            return match self.options.enum_type {
                EnumType::Enum => emitters::enums::emit_enum(&self.env, &self.options, &name, node),
                EnumType::String => {
                    emitters::enums::emit_constants(&self.env, &self.options, &name, node)
                }
            };
        }

        emitters::class::emit_class(&self.env, &self.options, schema, &name, node, &resolved)
    }
}
