//! # redfish-codegen: naming and namespace planning
//!
//! Turns a Redfish OpenAPI document into a plan for a generated Rust crate:
//! the module each data model and each endpoint trait lives in, the name of
//! its type, and which module declares or re-exports which child.
//!
//! ## Models
//!
//! Schema names are matched against an ordered chain of conventions:
//!
//! | Schema                        | Type                                          |
//! |-------------------------------|-----------------------------------------------|
//! | `Chassis_v1_0_0_PowerState`   | `crate::models::chassis::v1_0_0::PowerState`  |
//! | `RedfishRedfishError`         | `crate::models::redfish::RedfishError`        |
//! | `odata-v4_ServiceDocument`    | `crate::models::odata_v4::ServiceDocument`    |
//! | `Resource_Status`             | `crate::models::resource::Status`             |
//!
//! Each type gets its own module, declared anonymously (`mod x; pub use x::*;`)
//! so the type is referenced without repeating its module name.
//!
//! ## Endpoints
//!
//! The path table becomes a tree rooted at the shortest path. Each endpoint
//! gets a trait in a module named after the path from the root:
//! `/redfish/v1/Chassis/{ChassisId}` is `crate::api::v1::chassis::chassis_id::ChassisId`.
//!
//! ## Example
//!
//! ```rust
//! use redfish_codegen::{generate_plan, ApiDocument, GeneratorConfig};
//!
//! let mut document = ApiDocument::new();
//! document.add_schema("Chassis_v1_0_0_Chassis", &["@odata.type"]);
//! document.add_path("/redfish/v1", serde_json::json!({"get": {}}));
//!
//! let plan = generate_plan(document, &GeneratorConfig::default()).unwrap();
//! assert_eq!(plan.models[0].odata_type.as_deref(), Some("#Chassis.v1_0_0.Chassis"));
//! assert_eq!(plan.traits[0].rust_type.to_string(), "crate::api::v1::ServiceRoot");
//! ```

pub mod error;
pub mod text;

// Schema and endpoint naming
pub mod model;
pub mod api;

// Layout planning
pub mod codegen;
pub mod document;

// Re-export key types
pub use error::{CaseConversionError, CodegenError, IdentifierParseError, NormalizationError};
pub use text::{CaseStyle, Identifier};
pub use model::{ModelMatchResult, ModelPlan, ModelResolver, SchemaIdentifier};
pub use api::{ApiEndpoint, EndpointGraph, TraitContext, TraitContextFactory};
pub use codegen::{
    generate_plan, CratePath, GenerationPlan, GeneratorConfig, ModuleContext, ModuleRegistry,
    RustType, Submodule, Visibility,
};
pub use document::{ApiDocument, SchemaInfo};
