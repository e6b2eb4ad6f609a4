use minijinja::{Environment, context};
use pojogen_core::config::GenerationOptions;
use pojogen_core::ir::SchemaNode;
use pojogen_core::transform::name_normalizer::to_constant_name;
use serde_json::Value;

use super::{CONSTANTS_TEMPLATE, ENUM_TEMPLATE, JSON_PROPERTY};
use crate::error::JavaError;
use crate::validation::escape_java;

/// Emit a Java `enum` with one member per literal.
pub fn emit_enum(
    env: &Environment<'_>,
    options: &GenerationOptions,
    name: &str,
    schema: &SchemaNode,
) -> Result<String, JavaError> {
    let count = schema.enum_values.len();
    let members: Vec<minijinja::Value> = schema
        .enum_values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let literal = literal_text(value);
            let separator = if i + 1 < count { "," } else { "" };
            context! {
                line => format!("{}{separator}", to_constant_name(&literal)),
                json_name => options.use_jackson.then(|| escape_java(&literal)),
            }
        })
        .collect();

    let imports: Vec<&str> = if options.use_jackson {
        vec![JSON_PROPERTY]
    } else {
        Vec::new()
    };

    let tmpl = env.get_template(ENUM_TEMPLATE)?;
    Ok(tmpl.render(context! {
        package => options.package_name,
        imports => imports,
        name => name,
        members => members,
    })?)
}

/// Emit a final class holding one `String` constant per literal.
pub fn emit_constants(
    env: &Environment<'_>,
    options: &GenerationOptions,
    name: &str,
    schema: &SchemaNode,
) -> Result<String, JavaError> {
    let constants: Vec<minijinja::Value> = schema
        .enum_values
        .iter()
        .map(|value| {
            let literal = literal_text(value);
            context! {
                name => to_constant_name(&literal),
                value => escape_java(&literal),
            }
        })
        .collect();

    let tmpl = env.get_template(CONSTANTS_TEMPLATE)?;
    Ok(tmpl.render(context! {
        package => options.package_name,
        name => name,
        constants => constants,
    })?)
}

/// The text of an enum literal: strings as-is, anything else in JSON form.
fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
