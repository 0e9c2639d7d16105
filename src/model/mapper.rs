//! Naming conventions that map a schema name to a module and a type.

use regex::Regex;
use serde::Serialize;

use crate::error::CodegenError;
use crate::model::identifier::{UnversionedSchemaIdentifier, VersionedSchemaIdentifier};
use crate::text::Identifier;

/// Where a schema lands: the module path below the models base, and the
/// name of its type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelMatchResult {
    pub module: Vec<Identifier>,
    pub model: Identifier,
}

/// One naming convention of the resolver chain
#[derive(Debug, Clone)]
pub enum ModelConvention {
    /// `Module_vX_Y_Z_Model` into `[module, vX_Y_Z]`
    Versioned,
    /// A fixed pattern with a `model` group, into a fixed module
    Simple { pattern: Regex, module: Identifier },
    /// `Module_Model` into `[module]`
    Unversioned,
}

impl ModelConvention {
    /// Fails if `pattern` is not a valid regex or has no `model` group
    pub fn simple(pattern: &str, module: &str) -> Result<Self, CodegenError> {
        let pattern = Regex::new(pattern)
            .map_err(|e| CodegenError::Config(format!("invalid model pattern '{}': {}", pattern, e)))?;

        if !pattern.capture_names().any(|name| name == Some("model")) {
            return Err(CodegenError::Config(format!(
                "model pattern '{}' has no 'model' capture group",
                pattern
            )));
        }

        Ok(ModelConvention::Simple {
            pattern,
            module: Identifier::parse(module),
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelConvention::Versioned => "versioned",
            ModelConvention::Simple { .. } => "simple",
            ModelConvention::Unversioned => "unversioned",
        }
    }

    pub fn matches(&self, name: &str) -> Option<ModelMatchResult> {
        match self {
            ModelConvention::Versioned => {
                let id = VersionedSchemaIdentifier::parse(name).ok()?;
                Some(ModelMatchResult {
                    module: id.module_path(),
                    model: Identifier::parse(id.model()),
                })
            }
            ModelConvention::Simple { pattern, module } => {
                let captures = pattern.captures(name)?;
                Some(ModelMatchResult {
                    module: vec![module.clone()],
                    model: Identifier::parse(captures.name("model")?.as_str()),
                })
            }
            ModelConvention::Unversioned => {
                let id = UnversionedSchemaIdentifier::parse(name).ok()?;
                Some(ModelMatchResult {
                    module: vec![Identifier::parse(id.module())],
                    model: Identifier::parse(id.model()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versioned_convention() {
        let result = ModelConvention::Versioned
            .matches("Chassis_v1_0_0_PowerState")
            .unwrap();
        assert_eq!(result.module, vec![Identifier::parse("chassis"), Identifier::parse("v1_0_0")]);
        assert_eq!(result.model.to_pascal_case().unwrap(), "PowerState");
        assert!(ModelConvention::Versioned.matches("Resource_Id").is_none());
    }

    #[test]
    fn test_simple_convention() {
        let convention = ModelConvention::simple("^Redfish(?P<model>[A-Za-z0-9]+)$", "redfish").unwrap();
        let result = convention.matches("RedfishRedfishError").unwrap();
        assert_eq!(result.module, vec![Identifier::parse("redfish")]);
        assert_eq!(result.model.to_pascal_case().unwrap(), "RedfishError");
        assert!(convention.matches("Chassis_Chassis").is_none());
    }

    #[test]
    fn test_simple_convention_needs_model_group() {
        assert!(ModelConvention::simple("^Redfish.*$", "redfish").is_err());
        assert!(ModelConvention::simple("^Redfish(", "redfish").is_err());
    }

    #[test]
    fn test_unversioned_also_matches_versioned_names() {
        let result = ModelConvention::Unversioned
            .matches("Chassis_v1_0_0_PowerState")
            .unwrap();
        assert_eq!(result.module, vec![Identifier::parse("chassis_v1_0_0")]);
        assert_eq!(result.model, Identifier::parse("PowerState"));
    }

    #[test]
    fn test_multi_segment_names_stay_distinct() {
        let baz = ModelConvention::Unversioned.matches("Foo_Bar_Baz").unwrap();
        let qux = ModelConvention::Unversioned.matches("Foo_Bar_Qux").unwrap();
        assert_eq!(baz.module, vec![Identifier::parse("foo_bar")]);
        assert_eq!(baz.model, Identifier::parse("Baz"));
        assert_ne!(baz, qux);

        let versioned = ModelConvention::Versioned.matches("Foo_Bar_v1_0_0_Baz").unwrap();
        assert_eq!(
            versioned.module,
            vec![Identifier::parse("Foo_Bar"), Identifier::parse("v1_0_0")]
        );
        assert_eq!(versioned.model, Identifier::parse("Baz"));
    }
}
