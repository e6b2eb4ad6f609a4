use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level project configuration loaded from `.pojogen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PojogenConfig {
    pub input: String,
    pub output: String,
    /// Base schema names to generate. Empty means every schema in the document.
    pub schemas: Vec<String>,
    pub options: GenerationOptions,
}

impl Default for PojogenConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            output: "src/main/java/com/example/model".to_string(),
            schemas: Vec::new(),
            options: GenerationOptions::default(),
        }
    }
}

/// Stylistic switches for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub package_name: String,
    /// Emit Lombok `@Data`/`@Builder` instead of hand-written accessors.
    pub use_lombok: bool,
    /// Emit getters and setters when Lombok is off.
    pub generate_helpers: bool,
    pub use_jackson: bool,
    pub use_validation_annotations: bool,
    pub validation_api: ValidationApi,
    /// Wrap fields that are not required in `Optional<T>`.
    pub use_optional: bool,
    pub use_boxed_primitives: bool,
    pub date_type: DateType,
    pub enum_type: EnumType,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            package_name: "com.example.model".to_string(),
            use_lombok: false,
            generate_helpers: true,
            use_jackson: true,
            use_validation_annotations: true,
            validation_api: ValidationApi::Jakarta,
            use_optional: false,
            use_boxed_primitives: true,
            date_type: DateType::String,
            enum_type: EnumType::Enum,
        }
    }
}

/// Root namespace of the Bean Validation API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationApi {
    #[default]
    Jakarta,
    Javax,
}

impl ValidationApi {
    pub fn namespace(self) -> &'static str {
        match self {
            ValidationApi::Jakarta => "jakarta",
            ValidationApi::Javax => "javax",
        }
    }
}

/// How `date` and `date-time` strings are typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateType {
    #[default]
    String,
    OffsetDateTime,
}

/// How enum schemas are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumType {
    /// A Java `enum`.
    #[default]
    Enum,
    /// A final class of `String` constants.
    String,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".pojogen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<PojogenConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: PojogenConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# pojogen configuration
input: openapi.yaml
output: src/main/java/com/example/model
schemas: []           # base schema names; empty = every schema

options:
  package_name: com.example.model
  use_lombok: false
  generate_helpers: true      # getters/setters when use_lombok is false
  use_jackson: true
  use_validation_annotations: true
  validation_api: jakarta     # jakarta | javax
  use_optional: false
  use_boxed_primitives: true
  date_type: string           # string | offset_date_time
  enum_type: enum             # enum | string
"#
}
