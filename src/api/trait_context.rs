//! Handler traits generated for endpoints.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::api::endpoint::ApiEndpoint;
use crate::api::name_translator::PathNameTranslator;
use crate::codegen::config::GeneratorConfig;
use crate::codegen::crate_path::{CratePath, RustType};
use crate::error::CodegenError;
use crate::text::Identifier;

/// The handler surface generated for one endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitContext {
    pub rust_type: RustType,
    /// Module the trait is generated in
    pub module_path: CratePath,
    /// Endpoint path the trait serves
    pub endpoint: String,
    #[serde(skip)]
    pub payload: Value,
}

/// Builds trait contexts from the summaries on an endpoint's root path
#[derive(Debug, Clone)]
pub struct TraitContextFactory {
    base_path: CratePath,
    translator: PathNameTranslator,
    name_overrides: IndexMap<Identifier, Identifier>,
}

impl TraitContextFactory {
    pub fn new(
        base_module: Identifier,
        translator: PathNameTranslator,
        name_overrides: &IndexMap<String, String>,
    ) -> Self {
        let name_overrides = name_overrides
            .iter()
            .map(|(from, to)| (Identifier::parse(from), Identifier::parse(to)))
            .collect();

        Self {
            base_path: CratePath::crate_local(vec![base_module]),
            translator,
            name_overrides,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, CodegenError> {
        Ok(Self::new(
            Identifier::parse(&config.api_base_module),
            PathNameTranslator::from_config(config)?,
            &config.trait_name_overrides,
        ))
    }

    /// `crate::api`
    pub fn base_path(&self) -> &CratePath {
        &self.base_path
    }

    pub fn translator(&self) -> &PathNameTranslator {
        &self.translator
    }

    fn names(&self, summaries: &[&str]) -> Result<Vec<Identifier>, CodegenError> {
        summaries
            .iter()
            .map(|summary| {
                let name = self.translator.translate_segment(summary).ok_or_else(|| {
                    CodegenError::UntranslatableSegment {
                        segment: summary.to_string(),
                        path: summaries.join("/"),
                    }
                })?;
                let identifier = Identifier::parse(name);
                identifier.to_snake_case()?;
                Ok(identifier)
            })
            .collect()
    }

    /// `[v1, Chassis, {ChassisId}]` gives `crate::api::v1::chassis::chassis_id`
    pub fn module_path(&self, summaries: &[&str]) -> Result<CratePath, CodegenError> {
        Ok(self
            .names(summaries)?
            .into_iter()
            .fold(self.base_path.clone(), |path, name| path.append(name)))
    }

    /// The trait type for an endpoint, named after its last summary unless
    /// an override renames it
    pub fn rust_type(&self, summaries: &[&str]) -> Result<RustType, CodegenError> {
        let module_path = self.module_path(summaries)?;
        let name = module_path
            .last_component()
            .cloned()
            .unwrap_or_else(|| Identifier::parse(""));
        let name = self.name_overrides.get(&name).cloned().unwrap_or(name);
        Ok(RustType::new(module_path, &name)?)
    }

    pub fn make_trait_context(
        &self,
        summaries: &[&str],
        endpoint: &ApiEndpoint,
    ) -> Result<TraitContext, CodegenError> {
        let rust_type = self.rust_type(summaries)?;
        Ok(TraitContext {
            module_path: rust_type.path.clone(),
            rust_type,
            endpoint: endpoint.path().to_string(),
            payload: endpoint.payload().clone(),
        })
    }
}
