use std::collections::HashSet;

use serde_json::Value;

use crate::ir::{PropertyKind, PropertyNode, PropertySummary, SchemaNode, SchemaSummary};
use crate::parse::operation::RawOperation;

/// Schema names found at an operation boundary, by position.
#[derive(Debug, Clone, Default)]
pub struct RoleSets {
    pub request: HashSet<String>,
    pub response: HashSet<String>,
}

/// Scan every operation for request and response body schemas.
///
/// Only direct references and arrays of references count; a schema that is
/// reachable only through another schema's properties is in neither set.
pub fn classify_roles(document: &Value) -> RoleSets {
    let mut roles = RoleSets::default();

    let Some(paths) = document.get("paths").and_then(Value::as_object) else {
        return roles;
    };

    for (path, item) in paths {
        let Some(methods) = item.as_object() else {
            continue;
        };
        for (method, op) in methods {
            if method == "parameters" || !op.is_object() {
                continue;
            }
            let op: RawOperation = match serde_json::from_value(op.clone()) {
                Ok(op) => op,
                Err(e) => {
                    log::debug!("skipping {method} {path}: {e}");
                    continue;
                }
            };
            roles.request.extend(
                op.request_schemas()
                    .filter_map(|s| s.referenced_name())
                    .map(str::to_string),
            );
            roles.response.extend(
                op.response_schemas()
                    .filter_map(|s| s.referenced_name())
                    .map(str::to_string),
            );
        }
    }

    roles
}

/// Build the display summary of one schema.
pub fn summarize(name: &str, schema: &SchemaNode, roles: &RoleSets) -> SchemaSummary {
    SchemaSummary {
        name: name.to_string(),
        description: schema.description.clone(),
        properties: schema
            .properties
            .iter()
            .map(|(prop_name, prop)| PropertySummary {
                name: prop_name.clone(),
                type_name: display_type(prop),
                required: schema.required.contains(prop_name),
            })
            .collect(),
        is_request: roles.request.contains(name),
        is_response: roles.response.contains(name),
    }
}

/// A short type label for listings, e.g. `List<Pet>`, `long`, `enum`.
fn display_type(prop: &PropertyNode) -> String {
    match &prop.kind {
        PropertyKind::Ref(name) => name.clone(),
        PropertyKind::Array { items } => {
            let inner = items
                .as_deref()
                .map(display_type)
                .unwrap_or_else(|| "Object".to_string());
            format!("List<{inner}>")
        }
        PropertyKind::String { .. } if !prop.enum_values.is_empty() => "enum".to_string(),
        kind if kind.format() == Some("int64") => "long".to_string(),
        PropertyKind::String { .. } => "string".to_string(),
        PropertyKind::Integer { .. } => "integer".to_string(),
        PropertyKind::Number { .. } => "number".to_string(),
        PropertyKind::Boolean => "boolean".to_string(),
        PropertyKind::Object => "object".to_string(),
        PropertyKind::Other(tag) => tag.clone(),
        PropertyKind::Untyped => "Object".to_string(),
    }
}
