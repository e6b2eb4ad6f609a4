use std::collections::BTreeSet;

use pojogen_core::config::{DateType, GenerationOptions};
use pojogen_core::ir::PropertyKind;
use pojogen_core::transform::name_normalizer::to_upper_camel;

/// A Java type expression plus the imports it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaType {
    pub name: String,
    pub imports: BTreeSet<String>,
}

impl JavaType {
    fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: BTreeSet::new(),
        }
    }

    fn imported(name: &str, import: &str) -> Self {
        Self {
            name: name.to_string(),
            imports: BTreeSet::from([import.to_string()]),
        }
    }

    fn generic(container: &str, import: &str, inner: JavaType) -> Self {
        let mut imports = inner.imports;
        imports.insert(import.to_string());
        Self {
            name: format!("{container}<{}>", inner.name),
            imports,
        }
    }
}

/// Map a property kind to its Java type under the active options.
pub fn map_type(kind: &PropertyKind, options: &GenerationOptions) -> JavaType {
    map_kind(kind, options, options.use_boxed_primitives)
}

/// Map a field's type, wrapping it in `Optional<…>` when `optional` is set.
pub fn map_field_type(kind: &PropertyKind, options: &GenerationOptions, optional: bool) -> JavaType {
    if optional {
        JavaType::generic("Optional", "java.util.Optional", map_kind(kind, options, true))
    } else {
        map_type(kind, options)
    }
}

fn map_kind(kind: &PropertyKind, options: &GenerationOptions, boxed: bool) -> JavaType {
    let primitive = |boxed_name: &str, raw_name: &str| {
        JavaType::plain(if boxed { boxed_name } else { raw_name })
    };

    match kind {
        PropertyKind::Ref(name) => JavaType::plain(to_upper_camel(name)),
        PropertyKind::String { format } => match (format.as_deref(), options.date_type) {
            (Some("date-time" | "date"), DateType::OffsetDateTime) => {
                JavaType::imported("OffsetDateTime", "java.time.OffsetDateTime")
            }
            _ => JavaType::plain("String"),
        },
        PropertyKind::Integer { format } => match format.as_deref() {
            Some("int64") => primitive("Long", "long"),
            _ => primitive("Integer", "int"),
        },
        PropertyKind::Number { format } => match format.as_deref() {
            Some("double") => primitive("Double", "double"),
            Some("float") => primitive("Float", "float"),
            _ => JavaType::imported("BigDecimal", "java.math.BigDecimal"),
        },
        PropertyKind::Boolean => primitive("Boolean", "boolean"),
        PropertyKind::Array { items } => {
            // Type arguments must be reference types
            let inner = match items {
                Some(items) => map_kind(&items.kind, options, true),
                None => JavaType::plain("Object"),
            };
            JavaType::generic("List", "java.util.List", inner)
        }
        PropertyKind::Object | PropertyKind::Untyped => JavaType::plain("Object"),
        PropertyKind::Other(tag) => JavaType::plain(to_upper_camel(tag)),
    }
}
