//! Data-model naming: schema names to modules and types.

pub mod identifier;
pub mod mapper;
pub mod odata_type;
pub mod resolver;

use serde::Serialize;

use crate::codegen::crate_path::{CratePath, RustType};

pub use identifier::{SchemaIdentifier, UnversionedSchemaIdentifier, VersionedSchemaIdentifier};
pub use mapper::{ModelConvention, ModelMatchResult};
pub use odata_type::{ModelGenerationPolicy, ODataTypePolicy};
pub use resolver::ModelResolver;

/// Where one schema's generated type lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelPlan {
    /// Schema name in the document
    pub schema: String,
    pub rust_type: RustType,
    /// Module of the file that defines the type
    pub module_path: CratePath,
    /// Canonical `@odata.type`, for schemas that declare one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
}
