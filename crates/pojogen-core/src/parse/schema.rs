use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// The `type` field can be a single type or an array of types.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeSet {
    /// The first type tag that is not `null`.
    pub fn primary(&self) -> Option<&str> {
        match self {
            TypeSet::Single(t) => Some(t.as_str()),
            TypeSet::Multiple(types) => types.iter().map(String::as_str).find(|t| *t != "null"),
        }
    }
}

/// A reference or inline schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawSchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<RawSchema>),
}

impl RawSchemaOrRef {
    /// The schema name a body schema points at, either directly or as the
    /// item type of an array.
    pub fn referenced_name(&self) -> Option<&str> {
        match self {
            RawSchemaOrRef::Ref { ref_path } => ref_name(ref_path),
            RawSchemaOrRef::Schema(schema) => {
                let is_array = schema
                    .schema_type
                    .as_ref()
                    .and_then(TypeSet::primary)
                    .is_some_and(|t| t == "array");
                match schema.items.as_deref() {
                    Some(RawSchemaOrRef::Ref { ref_path }) if is_array => ref_name(ref_path),
                    _ => None,
                }
            }
        }
    }
}

/// `exclusiveMinimum`/`exclusiveMaximum`: a flag in OpenAPI 3.0 and Swagger
/// 2.0, a bound of its own in OpenAPI 3.1.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Exclusivity {
    Flag(bool),
    Bound(f64),
}

/// A JSON Schema object, restricted to the keywords model generation reads.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RawSchema {
    #[serde(rename = "type")]
    pub schema_type: Option<TypeSet>,

    pub format: Option<String>,

    pub description: Option<String>,

    // Object properties
    #[serde(default)]
    pub properties: IndexMap<String, RawSchemaOrRef>,

    #[serde(default)]
    pub required: Vec<String>,

    // Array items
    pub items: Option<Box<RawSchemaOrRef>>,

    // Composition
    #[serde(rename = "allOf", default)]
    pub all_of: Vec<RawSchemaOrRef>,

    // Enum values
    #[serde(rename = "enum", default)]
    pub enum_values: Vec<Value>,

    // Numeric constraints
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    #[serde(rename = "exclusiveMinimum")]
    pub exclusive_minimum: Option<Exclusivity>,
    #[serde(rename = "exclusiveMaximum")]
    pub exclusive_maximum: Option<Exclusivity>,

    // String constraints
    #[serde(rename = "minLength")]
    pub min_length: Option<u64>,
    #[serde(rename = "maxLength")]
    pub max_length: Option<u64>,
    pub pattern: Option<String>,

    // Array constraints
    #[serde(rename = "minItems")]
    pub min_items: Option<u64>,
    #[serde(rename = "maxItems")]
    pub max_items: Option<u64>,
    #[serde(rename = "uniqueItems")]
    pub unique_items: Option<bool>,
}

/// Extract the schema name from a `$ref` such as `#/components/schemas/Foo`
/// or `#/definitions/Foo`: the last path segment.
pub fn ref_name(ref_path: &str) -> Option<&str> {
    ref_path.rsplit('/').next().filter(|name| !name.is_empty())
}
