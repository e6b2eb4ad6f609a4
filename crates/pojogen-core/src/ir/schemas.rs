use indexmap::IndexMap;
use serde_json::Value;

use crate::parse::schema::Exclusivity;

/// A named schema from the document's schema container.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub description: Option<String>,
    pub properties: IndexMap<String, PropertyNode>,
    pub required: Vec<String>,
    pub all_of: Vec<SchemaMember>,
    pub enum_values: Vec<Value>,
    /// The schema exactly as it appeared in the document.
    pub source: Value,
}

impl SchemaNode {
    pub fn is_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }

    /// Names of the schemas this one refers to, in document order.
    ///
    /// Covers direct property references (including array items), `allOf`
    /// references, and the property references of inline `allOf` members.
    pub fn references(&self) -> Vec<&str> {
        let mut refs: Vec<&str> = self
            .properties
            .values()
            .filter_map(PropertyNode::referenced_name)
            .collect();
        for member in &self.all_of {
            match member {
                SchemaMember::Ref(name) => refs.push(name),
                SchemaMember::Inline(inline) => refs.extend(
                    inline
                        .properties
                        .values()
                        .filter_map(PropertyNode::referenced_name),
                ),
            }
        }
        refs
    }
}

/// One entry of an `allOf` list.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaMember {
    Ref(String),
    Inline(Box<SchemaNode>),
}

/// A property of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyNode {
    pub kind: PropertyKind,
    pub constraints: Constraints,
    pub enum_values: Vec<Value>,
}

impl PropertyNode {
    pub fn new(kind: PropertyKind) -> Self {
        Self {
            kind,
            constraints: Constraints::default(),
            enum_values: Vec::new(),
        }
    }

    /// The schema this property points at, directly or through any depth of
    /// array items.
    pub fn referenced_name(&self) -> Option<&str> {
        match &self.kind {
            PropertyKind::Ref(name) => Some(name.as_str()),
            PropertyKind::Array { items: Some(items) } => items.referenced_name(),
            _ => None,
        }
    }
}

/// The recognized raw schema kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    /// Reference to a named schema (the bare name, not the pointer).
    Ref(String),
    String { format: Option<String> },
    Integer { format: Option<String> },
    Number { format: Option<String> },
    Boolean,
    Array { items: Option<Box<PropertyNode>> },
    Object,
    /// Neither `type` nor `$ref` was given.
    Untyped,
    /// A type tag outside the recognized set.
    Other(String),
}

impl PropertyKind {
    pub fn format(&self) -> Option<&str> {
        match self {
            PropertyKind::String { format }
            | PropertyKind::Integer { format }
            | PropertyKind::Number { format } => format.as_deref(),
            _ => None,
        }
    }
}

/// Validation keywords of a property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Constraints {
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<Exclusivity>,
    pub exclusive_maximum: Option<Exclusivity>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub unique_items: bool,
}
