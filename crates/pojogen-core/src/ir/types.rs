use indexmap::IndexMap;
use serde::Serialize;

use super::schemas::SchemaNode;
use crate::transform::name_normalizer::to_upper_camel;

/// Which OpenAPI generation a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// `swagger: "2.0"`, schemas under `definitions`.
    Swagger2,
    /// `openapi: 3.x`, schemas under `components.schemas`.
    OpenApi3,
    /// Neither marker present.
    Unknown,
}

/// A loaded document: every named schema plus its usage summary.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    pub dialect: Dialect,
    pub schemas: IndexMap<String, SchemaNode>,
    pub summaries: Vec<SchemaSummary>,
}

impl SpecDocument {
    pub fn schema(&self, name: &str) -> Option<&SchemaNode> {
        self.schemas.get(name)
    }

    pub fn summary(&self, name: &str) -> Option<&SchemaSummary> {
        self.summaries.iter().find(|s| s.name == name)
    }

    pub fn schema_names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }
}

/// Display summary of one schema, annotated with its usage roles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub properties: Vec<PropertySummary>,
    pub is_request: bool,
    pub is_response: bool,
}

impl SchemaSummary {
    /// The roles a selection of this schema expands into.
    pub fn roles(&self) -> Vec<Role> {
        let mut roles = Vec::new();
        if self.is_request {
            roles.push(Role::Request);
        }
        if self.is_response {
            roles.push(Role::Response);
        }
        if roles.is_empty() {
            roles.push(Role::Model);
        }
        roles
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySummary {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub required: bool,
}

/// The usage role a generated unit is emitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Model,
    Request,
    Response,
}

impl Role {
    pub fn suffix(self) -> &'static str {
        match self {
            Role::Model => "",
            Role::Request => "Request",
            Role::Response => "Response",
        }
    }

    /// `UserRequest` for (`user`, `Request`).
    pub fn qualified_name(self, base: &str) -> String {
        format!("{}{}", to_upper_camel(base), self.suffix())
    }
}
