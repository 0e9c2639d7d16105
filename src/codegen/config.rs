//! Generator configuration.
//!
//! Every setting has a default matching the DMTF Redfish document, so an
//! empty file (or no file at all) configures a Redfish run.
//!
//! ```yaml
//! models_base_module: models
//! api_base_module: api
//! simple_models:
//!   - pattern: "^Redfish(?P<model>[A-Za-z0-9]+)$"
//!     module: redfish
//! inline_schema_names:
//!   RedfishError_error: RedfishRedfishError
//! trait_name_overrides:
//!   V1: ServiceRoot
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CodegenError;

/// A fixed-module naming convention
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimpleModelConfig {
    /// Regex with a `model` capture group
    pub pattern: String,
    /// Module the matched models are placed in
    pub module: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_models_base_module")]
    pub models_base_module: String,

    #[serde(default = "default_api_base_module")]
    pub api_base_module: String,

    /// Tried in order, after the versioned convention and before the
    /// unversioned one
    #[serde(default = "default_simple_models")]
    pub simple_models: Vec<SimpleModelConfig>,

    /// Renames for schemas the document parser named automatically
    #[serde(default = "default_inline_schema_names")]
    pub inline_schema_names: IndexMap<String, String>,

    /// PascalCase trait name to the name to use instead
    #[serde(default = "default_trait_name_overrides")]
    pub trait_name_overrides: IndexMap<String, String>,

    /// Regexes with a `name` group, tried in order on the last segment of
    /// an endpoint path
    #[serde(default = "default_path_name_patterns")]
    pub path_name_patterns: Vec<String>,
}

fn default_models_base_module() -> String {
    "models".to_string()
}

fn default_api_base_module() -> String {
    "api".to_string()
}

fn default_simple_models() -> Vec<SimpleModelConfig> {
    vec![
        SimpleModelConfig {
            pattern: "^Redfish(?P<model>[A-Za-z0-9]+)$".to_string(),
            module: "redfish".to_string(),
        },
        SimpleModelConfig {
            pattern: "^odata-v4_(?P<model>[A-Za-z0-9]+)$".to_string(),
            module: "odata_v4".to_string(),
        },
    ]
}

fn default_inline_schema_names() -> IndexMap<String, String> {
    IndexMap::from([
        ("RedfishError_error".to_string(), "RedfishRedfishError".to_string()),
        (
            "_redfish_v1_odata_get_200_response".to_string(),
            "odata-v4_ServiceDocument".to_string(),
        ),
        (
            "_redfish_v1_odata_get_200_response_value_inner".to_string(),
            "odata-v4_Service".to_string(),
        ),
    ])
}

fn default_trait_name_overrides() -> IndexMap<String, String> {
    IndexMap::from([("V1".to_string(), "ServiceRoot".to_string())])
}

fn default_path_name_patterns() -> Vec<String> {
    vec![
        r"^(?P<name>[A-Za-z0-9]+)$".to_string(),
        r"^\{(?P<name>[A-Za-z0-9]+)\}$".to_string(),
        r"\.(?P<name>[A-Za-z0-9]+)$".to_string(),
        r"^\$(?P<name>metadata)$".to_string(),
    ]
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            models_base_module: default_models_base_module(),
            api_base_module: default_api_base_module(),
            simple_models: default_simple_models(),
            inline_schema_names: default_inline_schema_names(),
            trait_name_overrides: default_trait_name_overrides(),
            path_name_patterns: default_path_name_patterns(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CodegenError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_yaml(&contents).map_err(|source| CodegenError::Yaml {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null, not as an empty mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }
}
