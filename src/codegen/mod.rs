//! Crate layout planning: paths, module declarations, configuration and
//! the pass that ties the naming stages together.

pub mod config;
pub mod crate_path;
pub mod module_context;
pub mod pipeline;

pub use config::{GeneratorConfig, SimpleModelConfig};
pub use crate_path::{CratePath, PathAnchor, RustType};
pub use module_context::{ModuleContext, ModuleRegistry, Submodule, Visibility};
pub use pipeline::{generate_plan, plan_models, plan_traits, GenerationPlan};

/// Plan a run from an OpenAPI document and an optional YAML config file
///
/// # Example
///
/// ```rust,no_run
/// let plan = redfish_codegen::codegen::plan_from_files("api/openapi.yaml", None::<&str>)
///     .expect("planning failed");
/// println!("{} traits", plan.traits.len());
/// ```
pub fn plan_from_files(
    document_path: impl AsRef<std::path::Path>,
    config_path: Option<impl AsRef<std::path::Path>>,
) -> Result<GenerationPlan, crate::error::CodegenError> {
    let config = match config_path {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    let document = crate::document::ApiDocument::from_file(document_path)?;
    generate_plan(document, &config)
}
