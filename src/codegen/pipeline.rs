//! One planning pass over a document.
//!
//! Resolves every schema to a model, every endpoint to a trait, and
//! records the module declarations both need. The pass is all-or-nothing:
//! any fatal error returns `Err` and no plan, since a partial module tree
//! cannot be emitted safely. Schemas no naming convention recognises are
//! the one recoverable case; they are logged and listed in
//! [`GenerationPlan::skipped`].

use serde::Serialize;
use tracing::{info, warn};

use crate::api::{project, EndpointGraph, TraitContext, TraitContextFactory};
use crate::codegen::config::GeneratorConfig;
use crate::codegen::crate_path::CratePath;
use crate::codegen::module_context::ModuleRegistry;
use crate::document::ApiDocument;
use crate::error::CodegenError;
use crate::model::{ModelGenerationPolicy, ModelPlan, ModelResolver, ODataTypePolicy};
use crate::text::Identifier;

/// Everything the emitter needs to lay out the generated crate
#[derive(Debug, Clone, Serialize)]
pub struct GenerationPlan {
    pub models: Vec<ModelPlan>,
    /// Parents before children
    pub traits: Vec<TraitContext>,
    pub modules: ModuleRegistry,
    /// Schemas left out because no convention matched their name
    pub skipped: Vec<String>,
}

/// Resolve each schema of the document; unresolved ones are skipped
pub fn plan_models(
    document: &ApiDocument,
    resolver: &ModelResolver,
) -> Result<(Vec<ModelPlan>, Vec<String>), CodegenError> {
    let mut models = Vec::new();
    let mut skipped = Vec::new();

    for (name, schema) in &document.schemas {
        let Some(result) = resolver.resolve_path(&schema.reference) else {
            warn!("no match for model {}", name);
            skipped.push(name.clone());
            continue;
        };

        models.push(ModelPlan {
            schema: name.clone(),
            rust_type: resolver.rust_type(&result)?,
            module_path: resolver.module_path(&result)?,
            odata_type: None,
        });
    }

    Ok((models, skipped))
}

/// Build, normalize and project the endpoint tree
pub fn plan_traits(
    document: &ApiDocument,
    factory: &TraitContextFactory,
    registry: &mut ModuleRegistry,
) -> Result<Vec<TraitContext>, CodegenError> {
    let mut graph = EndpointGraph::build(&document.paths, factory.translator())?;
    graph.normalize()?;
    project(&graph, factory, registry)
}

/// Plan a whole generation run
pub fn generate_plan(
    mut document: ApiDocument,
    config: &GeneratorConfig,
) -> Result<GenerationPlan, CodegenError> {
    let resolver = ModelResolver::from_config(config)?;
    let factory = TraitContextFactory::from_config(config)?;
    let policies: [&dyn ModelGenerationPolicy; 1] = [&ODataTypePolicy];

    document.apply_inline_schema_names(&config.inline_schema_names);

    info!("Resolving {} schemas", document.schemas.len());
    let (mut models, skipped) = plan_models(&document, &resolver)?;
    for policy in policies {
        policy.apply(&mut models, &document.schemas)?;
    }

    let mut modules = ModuleRegistry::new();
    for model in &models {
        modules.register_path(&model.module_path);
    }
    info!("  ✓ {} models, {} skipped", models.len(), skipped.len());

    info!("Building endpoint tree from {} paths", document.paths.len());
    let traits = plan_traits(&document, &factory, &mut modules)?;
    info!("  ✓ {} traits", traits.len());

    let root = CratePath::crate_root();
    modules.add_named(&root, Identifier::parse(&config.api_base_module));
    modules.add_named(&root, Identifier::parse(&config.models_base_module));

    Ok(GenerationPlan {
        models,
        traits,
        modules,
        skipped,
    })
}
