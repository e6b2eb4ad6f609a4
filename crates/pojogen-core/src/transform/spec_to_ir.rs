use indexmap::IndexMap;
use serde_json::Value;

use crate::error::SpecError;
use crate::ir::*;
use crate::parse::schema::{RawSchema, RawSchemaOrRef, TypeSet, ref_name};

use super::classifier::{classify_roles, summarize};

/// Load a parsed document into a [`SpecDocument`].
///
/// The dialect is picked from the top-level `swagger` or `openapi` key. A
/// document with neither, or without a schema container, loads with no
/// schemas.
pub fn load(document: &Value) -> Result<SpecDocument, SpecError> {
    let root = document.as_object().ok_or(SpecError::InvalidDocument)?;

    let dialect = if root.get("swagger").is_some_and(|v| !v.is_null()) {
        Dialect::Swagger2
    } else if root.get("openapi").is_some_and(|v| !v.is_null()) {
        Dialect::OpenApi3
    } else {
        log::warn!("document has neither a `swagger` nor an `openapi` key; no schemas loaded");
        Dialect::Unknown
    };

    let container = match dialect {
        Dialect::Swagger2 => root.get("definitions"),
        Dialect::OpenApi3 => root.get("components").and_then(|c| c.get("schemas")),
        Dialect::Unknown => None,
    };

    let mut schemas = IndexMap::new();
    if let Some(entries) = container.and_then(Value::as_object) {
        for (name, value) in entries {
            schemas.insert(name.clone(), load_schema(name, value)?);
        }
    }

    let roles = classify_roles(document);
    let summaries = schemas
        .iter()
        .map(|(name, schema)| summarize(name, schema, &roles))
        .collect();

    log::info!("loaded {} schemas ({:?})", schemas.len(), dialect);

    Ok(SpecDocument {
        dialect,
        schemas,
        summaries,
    })
}

/// Validate and convert one named schema.
fn load_schema(name: &str, value: &Value) -> Result<SchemaNode, SpecError> {
    let raw: RawSchemaOrRef =
        serde_json::from_value(value.clone()).map_err(|source| SpecError::InvalidSchema {
            name: name.to_string(),
            source,
        })?;

    Ok(match raw {
        // A bare alias behaves like a single-member composition.
        RawSchemaOrRef::Ref { ref_path } => SchemaNode {
            description: None,
            properties: IndexMap::new(),
            required: Vec::new(),
            all_of: ref_name(&ref_path)
                .map(|target| SchemaMember::Ref(target.to_string()))
                .into_iter()
                .collect(),
            enum_values: Vec::new(),
            source: value.clone(),
        },
        RawSchemaOrRef::Schema(schema) => schema_node(*schema, value.clone()),
    })
}

fn schema_node(schema: RawSchema, source: Value) -> SchemaNode {
    let all_of = schema
        .all_of
        .into_iter()
        .zip(member_sources(&source))
        .filter_map(|(member, member_source)| match member {
            RawSchemaOrRef::Ref { ref_path } => {
                ref_name(&ref_path).map(|target| SchemaMember::Ref(target.to_string()))
            }
            RawSchemaOrRef::Schema(inline) => Some(SchemaMember::Inline(Box::new(schema_node(
                *inline,
                member_source,
            )))),
        })
        .collect();

    SchemaNode {
        description: schema.description,
        properties: schema
            .properties
            .into_iter()
            .map(|(name, prop)| (name, property_node(prop)))
            .collect(),
        required: schema.required,
        all_of,
        enum_values: schema.enum_values,
        source,
    }
}

/// The raw JSON of each `allOf` member, aligned with the deserialized list.
fn member_sources(source: &Value) -> Vec<Value> {
    source
        .get("allOf")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Convert a raw property into its typed variant.
pub fn property_node(raw: RawSchemaOrRef) -> PropertyNode {
    let schema = match raw {
        RawSchemaOrRef::Ref { ref_path } => {
            let target = ref_name(&ref_path).unwrap_or(&ref_path).to_string();
            return PropertyNode::new(PropertyKind::Ref(target));
        }
        RawSchemaOrRef::Schema(schema) => *schema,
    };

    let type_tag = schema
        .schema_type
        .as_ref()
        .and_then(TypeSet::primary)
        .map(str::to_string);
    let format = schema.format;

    let kind = match type_tag.as_deref() {
        Some("string") => PropertyKind::String { format },
        Some("integer") => PropertyKind::Integer { format },
        Some("number") => PropertyKind::Number { format },
        Some("boolean") => PropertyKind::Boolean,
        Some("array") => PropertyKind::Array {
            items: schema.items.map(|items| Box::new(property_node(*items))),
        },
        Some("object") => PropertyKind::Object,
        Some(other) => PropertyKind::Other(other.to_string()),
        None if !schema.properties.is_empty() => PropertyKind::Object,
        None => match schema.items {
            Some(items) => PropertyKind::Array {
                items: Some(Box::new(property_node(*items))),
            },
            None => PropertyKind::Untyped,
        },
    };

    PropertyNode {
        kind,
        constraints: Constraints {
            min_length: schema.min_length,
            max_length: schema.max_length,
            pattern: schema.pattern,
            minimum: schema.minimum,
            maximum: schema.maximum,
            exclusive_minimum: schema.exclusive_minimum,
            exclusive_maximum: schema.exclusive_maximum,
            min_items: schema.min_items,
            max_items: schema.max_items,
            unique_items: schema.unique_items.unwrap_or(false),
        },
        enum_values: schema.enum_values,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_non_object_document() {
        assert!(matches!(
            load(&json!("just a string")),
            Err(SpecError::InvalidDocument)
        ));
        assert!(matches!(load(&json!([1, 2])), Err(SpecError::InvalidDocument)));
    }

    #[test]
    fn test_unknown_dialect_is_empty() {
        let doc = load(&json!({"info": {"title": "x"}, "definitions": {"A": {}}})).unwrap();
        assert_eq!(doc.dialect, Dialect::Unknown);
        assert!(doc.schemas.is_empty());
        assert!(doc.summaries.is_empty());
    }

    #[test]
    fn test_missing_container_is_empty() {
        let doc = load(&json!({"openapi": "3.0.3", "paths": {}})).unwrap();
        assert_eq!(doc.dialect, Dialect::OpenApi3);
        assert!(doc.schemas.is_empty());
    }

    #[test]
    fn test_swagger_definitions() {
        let doc = load(&json!({
            "swagger": "2.0",
            "definitions": {"Pet": {"properties": {"id": {"type": "integer", "format": "int64"}}}}
        }))
        .unwrap();
        assert_eq!(doc.dialect, Dialect::Swagger2);
        let pet = doc.schema("Pet").unwrap();
        assert_eq!(
            pet.properties["id"].kind,
            PropertyKind::Integer {
                format: Some("int64".to_string())
            }
        );
    }

    #[test]
    fn test_property_kinds() {
        let doc = load(&json!({
            "openapi": "3.1.0",
            "components": {"schemas": {"Thing": {
                "type": "object",
                "properties": {
                    "owner": {"$ref": "#/components/schemas/User"},
                    "tags": {"type": "array", "items": {"$ref": "#/components/schemas/Tag"}},
                    "scores": {"type": "array", "items": {"type": "number", "format": "float"}},
                    "nickname": {"type": ["string", "null"], "maxLength": 20},
                    "meta": {"type": "object"},
                    "inline": {"properties": {"a": {"type": "string"}}},
                    "anything": {},
                    "upload": {"type": "file"}
                }
            }}}
        }))
        .unwrap();
        let props = &doc.schema("Thing").unwrap().properties;
        assert_eq!(props["owner"].kind, PropertyKind::Ref("User".to_string()));
        assert_eq!(props["tags"].referenced_name(), Some("Tag"));
        match &props["scores"].kind {
            PropertyKind::Array { items: Some(items) } => assert_eq!(
                items.kind,
                PropertyKind::Number {
                    format: Some("float".to_string())
                }
            ),
            other => panic!("expected array, got {other:?}"),
        }
        assert_eq!(props["nickname"].kind, PropertyKind::String { format: None });
        assert_eq!(props["nickname"].constraints.max_length, Some(20));
        assert_eq!(props["meta"].kind, PropertyKind::Object);
        assert_eq!(props["inline"].kind, PropertyKind::Object);
        assert_eq!(props["anything"].kind, PropertyKind::Untyped);
        assert_eq!(props["upload"].kind, PropertyKind::Other("file".to_string()));
    }

    #[test]
    fn test_composition_members() {
        let doc = load(&json!({
            "openapi": "3.0.0",
            "components": {"schemas": {
                "Animal": {"properties": {"name": {"type": "string"}}},
                "Dog": {"allOf": [
                    {"$ref": "#/components/schemas/Animal"},
                    {"properties": {"owner": {"$ref": "#/components/schemas/Person"}}}
                ]}
            }}
        }))
        .unwrap();
        let dog = doc.schema("Dog").unwrap();
        assert_eq!(dog.all_of.len(), 2);
        assert_eq!(dog.all_of[0], SchemaMember::Ref("Animal".to_string()));
        match &dog.all_of[1] {
            SchemaMember::Inline(inline) => {
                assert!(inline.properties.contains_key("owner"));
                assert!(inline.source.get("properties").is_some());
            }
            other => panic!("expected inline member, got {other:?}"),
        }
        assert_eq!(dog.references(), vec!["Animal", "Person"]);
    }

    #[test]
    fn test_alias_schema_becomes_composition() {
        let doc = load(&json!({
            "swagger": "2.0",
            "definitions": {
                "Pet": {"properties": {"id": {"type": "integer"}}},
                "PetAlias": {"$ref": "#/definitions/Pet"}
            }
        }))
        .unwrap();
        let alias = doc.schema("PetAlias").unwrap();
        assert_eq!(alias.all_of, vec![SchemaMember::Ref("Pet".to_string())]);
    }

    #[test]
    fn test_invalid_schema_body() {
        let err = load(&json!({
            "openapi": "3.0.0",
            "components": {"schemas": {"Bad": {"required": "name"}}}
        }))
        .unwrap_err();
        match err {
            SpecError::InvalidSchema { name, .. } => assert_eq!(name, "Bad"),
            other => panic!("expected InvalidSchema, got {other:?}"),
        }
    }
}
