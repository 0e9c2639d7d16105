//! Canonical `@odata.type` values for schemas.

use indexmap::IndexMap;

use crate::document::SchemaInfo;
use crate::error::{CodegenError, IdentifierParseError};
use crate::model::identifier::SchemaIdentifier;
use crate::model::resolver::path_identifier;
use crate::model::ModelPlan;

const ODATA_TYPE_PROPERTY: &str = "@odata.type";

/// The canonical type of the schema at `path`
///
/// `#/components/schemas/Chassis_v1_0_0_Chassis` gives
/// `#Chassis.v1_0_0.Chassis`, `Resource_Status` gives `#Resource.Status`.
pub fn identify(path: &str) -> Result<String, IdentifierParseError> {
    SchemaIdentifier::parse(path_identifier(path)).map(|id| id.odata_type())
}

/// A transformation applied to the resolved model set as a whole
pub trait ModelGenerationPolicy {
    fn apply(
        &self,
        models: &mut [ModelPlan],
        schemas: &IndexMap<String, SchemaInfo>,
    ) -> Result<(), CodegenError>;
}

/// Attaches the canonical type to every model that carries an
/// `@odata.type` property
#[derive(Debug, Clone, Copy, Default)]
pub struct ODataTypePolicy;

impl ModelGenerationPolicy for ODataTypePolicy {
    fn apply(
        &self,
        models: &mut [ModelPlan],
        schemas: &IndexMap<String, SchemaInfo>,
    ) -> Result<(), CodegenError> {
        for model in models.iter_mut() {
            let Some(schema) = schemas.get(&model.schema) else {
                continue;
            };
            if schema.has_property(ODATA_TYPE_PROPERTY) {
                model.odata_type = Some(identify(&schema.reference)?);
            }
        }
        Ok(())
    }
}
