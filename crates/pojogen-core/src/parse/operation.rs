use indexmap::IndexMap;
use serde::Deserialize;

use super::schema::RawSchemaOrRef;

/// The parts of an operation that carry body schemas.
///
/// OpenAPI 3.x puts them under `requestBody.content` and
/// `responses.*.content`; Swagger 2.0 uses a `body` parameter and
/// `responses.*.schema`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOperation {
    #[serde(rename = "requestBody")]
    pub request_body: Option<RawBody>,

    pub parameters: Vec<RawParameter>,

    pub responses: IndexMap<String, RawBody>,
}

/// A request body or response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawBody {
    pub content: IndexMap<String, RawMediaType>,
    pub schema: Option<RawSchemaOrRef>,
}

impl RawBody {
    /// Every schema attached to this body, across media types.
    pub fn schemas(&self) -> impl Iterator<Item = &RawSchemaOrRef> {
        self.content
            .values()
            .filter_map(|mt| mt.schema.as_ref())
            .chain(self.schema.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMediaType {
    pub schema: Option<RawSchemaOrRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawParameter {
    #[serde(rename = "in")]
    pub location: Option<String>,
    pub schema: Option<RawSchemaOrRef>,
}

impl RawOperation {
    /// Schemas in request-body position.
    pub fn request_schemas(&self) -> impl Iterator<Item = &RawSchemaOrRef> {
        let body_params = self
            .parameters
            .iter()
            .filter(|p| p.location.as_deref() == Some("body"))
            .filter_map(|p| p.schema.as_ref());
        self.request_body
            .iter()
            .flat_map(|body| body.schemas())
            .chain(body_params)
    }

    /// Schemas in response-body position, across all status codes.
    pub fn response_schemas(&self) -> impl Iterator<Item = &RawSchemaOrRef> {
        self.responses.values().flat_map(|body| body.schemas())
    }
}
