//! Resolves schema names to Rust types through an ordered chain of
//! naming conventions.

use tracing::debug;

use crate::codegen::config::GeneratorConfig;
use crate::codegen::crate_path::{CratePath, RustType};
use crate::error::{CaseConversionError, CodegenError};
use crate::model::mapper::{ModelConvention, ModelMatchResult};
use crate::text::Identifier;

/// The last `/`-separated segment of a schema reference
///
/// `#/components/schemas/Chassis_v1_0_0_Chassis` gives
/// `Chassis_v1_0_0_Chassis`; a bare name is returned unchanged.
pub fn path_identifier(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[derive(Debug, Clone)]
pub struct ModelResolver {
    conventions: Vec<ModelConvention>,
    base_module: Identifier,
}

impl ModelResolver {
    /// Conventions are tried in the order given; the first match wins
    pub fn new(conventions: Vec<ModelConvention>, base_module: Identifier) -> Self {
        Self {
            conventions,
            base_module,
        }
    }

    /// Versioned first, then the configured simple conventions, then the
    /// unversioned catch-all
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, CodegenError> {
        let mut conventions = vec![ModelConvention::Versioned];
        for simple in &config.simple_models {
            conventions.push(ModelConvention::simple(&simple.pattern, &simple.module)?);
        }
        conventions.push(ModelConvention::Unversioned);

        Ok(Self::new(conventions, Identifier::parse(&config.models_base_module)))
    }

    pub fn conventions(&self) -> &[ModelConvention] {
        &self.conventions
    }

    /// `None` when no convention recognises `name`; callers skip the schema
    pub fn resolve(&self, name: &str) -> Option<ModelMatchResult> {
        self.conventions.iter().find_map(|convention| {
            let result = convention.matches(name)?;
            debug!("{} matched {} convention", name, convention.label());
            Some(result)
        })
    }

    pub fn resolve_path(&self, reference: &str) -> Option<ModelMatchResult> {
        self.resolve(path_identifier(reference))
    }

    /// `crate::models`
    pub fn base_path(&self) -> CratePath {
        CratePath::crate_local(vec![self.base_module.clone()])
    }

    /// The type a match names, e.g. `crate::models::chassis::v1_0_0::PowerState`
    pub fn rust_type(&self, result: &ModelMatchResult) -> Result<RustType, CaseConversionError> {
        let mut path = self.base_path();
        for component in &result.module {
            component.to_snake_case()?;
            path = path.append(component.clone());
        }
        RustType::new(path, &result.model)
    }

    /// The module holding the type, e.g. `crate::models::chassis::v1_0_0::power_state`
    pub fn module_path(&self, result: &ModelMatchResult) -> Result<CratePath, CaseConversionError> {
        let rust_type = self.rust_type(result)?;
        result.model.to_snake_case()?;
        Ok(rust_type.path.append(result.model.clone()))
    }
}
