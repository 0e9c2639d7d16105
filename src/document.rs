//! In-memory view of an OpenAPI document.
//!
//! Only what naming needs is kept: schema names with their property names,
//! and the path table with each path item as an opaque JSON payload.
//! `serde_yaml` reads both YAML and JSON documents.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::error::CodegenError;

const SCHEMA_REFERENCE_PREFIX: &str = "#/components/schemas/";

/// A named schema of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaInfo {
    pub name: String,
    /// `#/components/schemas/<name>`
    pub reference: String,
    pub properties: Vec<String>,
}

impl SchemaInfo {
    pub fn new(name: &str, properties: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            reference: format!("{}{}", SCHEMA_REFERENCE_PREFIX, name),
            properties,
        }
    }

    pub fn has_property(&self, property: &str) -> bool {
        self.properties.iter().any(|p| p == property)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApiDocument {
    pub schemas: IndexMap<String, SchemaInfo>,
    pub paths: IndexMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(default)]
    components: RawComponents,
    #[serde(default)]
    paths: IndexMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawComponents {
    #[serde(default)]
    schemas: IndexMap<String, RawSchema>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSchema {
    #[serde(default)]
    properties: IndexMap<String, serde_yaml::Value>,
}

impl ApiDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the schema and path tables of an OpenAPI document
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
        let raw: RawDocument = serde_yaml::from_str(contents)?;

        let schemas = raw
            .components
            .schemas
            .into_iter()
            .map(|(name, schema)| {
                let properties = schema.properties.into_keys().collect();
                let info = SchemaInfo::new(&name, properties);
                (name, info)
            })
            .collect();

        Ok(Self {
            schemas,
            paths: raw.paths,
        })
    }

    pub fn add_schema(&mut self, name: &str, properties: &[&str]) {
        let properties = properties.iter().map(|p| p.to_string()).collect();
        self.schemas.insert(name.to_string(), SchemaInfo::new(name, properties));
    }

    pub fn add_path(&mut self, path: &str, payload: Value) {
        self.paths.insert(path.to_string(), payload);
    }

    /// Rename schemas whose names were generated by the document parser
    pub fn apply_inline_schema_names(&mut self, renames: &IndexMap<String, String>) {
        for (from, to) in renames {
            if let Some(schema) = self.schemas.shift_remove(from) {
                debug!("Renaming inline schema {} to {}", from, to);
                let renamed = SchemaInfo::new(to, schema.properties);
                self.schemas.insert(to.clone(), renamed);
            }
        }
    }
}
