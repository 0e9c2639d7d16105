//! End-to-end planning of a small Redfish document loaded from disk.

use redfish_codegen::codegen::plan_from_files;
use redfish_codegen::{generate_plan, ApiDocument, CodegenError, GeneratorConfig, Visibility};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

const OPENAPI: &str = r##"
openapi: 3.0.1
info:
  title: Redfish
  version: "2023.1"
paths:
  /redfish/v1:
    get:
      responses: {}
  /redfish/v1/:
    get:
      responses: {}
  /redfish/v1/$metadata:
    get:
      responses: {}
  /redfish/v1/Chassis:
    get:
      responses: {}
  /redfish/v1/Chassis/{ChassisId}:
    get:
      responses: {}
    patch:
      responses: {}
  /redfish/v1/ChassisGroups:
    get:
      responses: {}
  /redfish/v1/Systems:
    get:
      responses: {}
  /redfish/v1/Systems/{ComputerSystemId}:
    get:
      responses: {}
  /redfish/v1/Systems/{ComputerSystemId}/Actions/ComputerSystem.Reset:
    post:
      responses: {}
components:
  schemas:
    Chassis_v1_0_0_Chassis:
      type: object
      properties:
        "@odata.type":
          type: string
        Id:
          type: string
    Chassis_v1_0_0_PowerState:
      type: string
    Resource_Status:
      type: object
    RedfishError_error:
      type: object
    odata-v4_IdRef:
      type: object
      properties:
        "@odata.id":
          type: string
    ServiceRoot:
      type: object
"##;

fn write_document(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("openapi.yaml");
    fs::write(&path, contents).unwrap();
    path
}

fn submodules(plan: &redfish_codegen::GenerationPlan, module: &str) -> Vec<(String, Visibility)> {
    plan.modules
        .get(module)
        .unwrap_or_else(|| panic!("module {} not registered", module))
        .submodules()
        .into_iter()
        .map(|s| (s.name(), s.visibility))
        .collect()
}

#[test]
fn test_plan_from_files() {
    let dir = TempDir::new().unwrap();
    let document = write_document(&dir, OPENAPI);

    let plan = plan_from_files(&document, None::<&str>).unwrap();

    assert_eq!(plan.skipped, vec!["ServiceRoot"]);
    assert_eq!(plan.models.len(), 5);
    assert_eq!(plan.traits.len(), 8);
}

#[test]
fn test_model_types() {
    let dir = TempDir::new().unwrap();
    let plan = plan_from_files(write_document(&dir, OPENAPI), None::<&str>).unwrap();

    let types: Vec<(String, String)> = plan
        .models
        .iter()
        .map(|m| (m.schema.clone(), m.rust_type.to_string()))
        .collect();

    let expected = [
        ("Chassis_v1_0_0_Chassis", "crate::models::chassis::v1_0_0::Chassis"),
        ("Chassis_v1_0_0_PowerState", "crate::models::chassis::v1_0_0::PowerState"),
        ("Resource_Status", "crate::models::resource::Status"),
        ("odata-v4_IdRef", "crate::models::odata_v4::IdRef"),
        ("RedfishRedfishError", "crate::models::redfish::RedfishError"),
    ];
    for (schema, rust_type) in expected {
        assert!(
            types.contains(&(schema.to_string(), rust_type.to_string())),
            "{} should be {}",
            schema,
            rust_type
        );
    }
}

#[test]
fn test_odata_type_only_where_declared() {
    let dir = TempDir::new().unwrap();
    let plan = plan_from_files(write_document(&dir, OPENAPI), None::<&str>).unwrap();

    let with_type: Vec<(&str, &str)> = plan
        .models
        .iter()
        .filter_map(|m| Some((m.schema.as_str(), m.odata_type.as_deref()?)))
        .collect();
    assert_eq!(with_type, vec![("Chassis_v1_0_0_Chassis", "#Chassis.v1_0_0.Chassis")]);
}

#[test]
fn test_model_modules_are_anonymous_leaves() {
    let dir = TempDir::new().unwrap();
    let plan = plan_from_files(write_document(&dir, OPENAPI), None::<&str>).unwrap();

    assert_eq!(
        submodules(&plan, "crate"),
        vec![
            ("api".to_string(), Visibility::Named),
            ("models".to_string(), Visibility::Named),
        ]
    );
    assert_eq!(
        submodules(&plan, "crate::models"),
        vec![
            ("chassis".to_string(), Visibility::Named),
            ("odata_v4".to_string(), Visibility::Named),
            ("redfish".to_string(), Visibility::Named),
            ("resource".to_string(), Visibility::Named),
        ]
    );
    assert_eq!(
        submodules(&plan, "crate::models::chassis"),
        vec![("v1_0_0".to_string(), Visibility::Named)]
    );
    assert_eq!(
        submodules(&plan, "crate::models::chassis::v1_0_0"),
        vec![
            ("chassis".to_string(), Visibility::Anonymous),
            ("power_state".to_string(), Visibility::Anonymous),
        ]
    );
}

#[test]
fn test_trait_types() {
    let dir = TempDir::new().unwrap();
    let plan = plan_from_files(write_document(&dir, OPENAPI), None::<&str>).unwrap();

    let types: HashSet<String> = plan.traits.iter().map(|t| t.rust_type.to_string()).collect();
    let expected = [
        "crate::api::v1::ServiceRoot",
        "crate::api::v1::metadata::Metadata",
        "crate::api::v1::chassis::Chassis",
        "crate::api::v1::chassis::chassis_id::ChassisId",
        "crate::api::v1::chassis_groups::ChassisGroups",
        "crate::api::v1::systems::Systems",
        "crate::api::v1::systems::computer_system_id::ComputerSystemId",
        "crate::api::v1::systems::computer_system_id::reset::Reset",
    ];
    for rust_type in expected {
        assert!(types.contains(rust_type), "missing trait {}", rust_type);
    }

    let modules: HashSet<String> = plan.traits.iter().map(|t| t.module_path.to_string()).collect();
    assert_eq!(modules.len(), plan.traits.len());
}

#[test]
fn test_traits_listed_parent_first() {
    let dir = TempDir::new().unwrap();
    let plan = plan_from_files(write_document(&dir, OPENAPI), None::<&str>).unwrap();

    assert_eq!(plan.traits[0].endpoint, "/redfish/v1");
    let position = |endpoint: &str| {
        plan.traits
            .iter()
            .position(|t| t.endpoint == endpoint)
            .unwrap()
    };
    assert!(position("/redfish/v1/Chassis") < position("/redfish/v1/Chassis/{ChassisId}"));
    assert!(position("/redfish/v1/Systems") < position("/redfish/v1/Systems/{ComputerSystemId}"));
}

#[test]
fn test_trait_modules_declared_in_parent() {
    let dir = TempDir::new().unwrap();
    let plan = plan_from_files(write_document(&dir, OPENAPI), None::<&str>).unwrap();

    assert_eq!(
        submodules(&plan, "crate::api"),
        vec![("v1".to_string(), Visibility::Named)]
    );
    assert_eq!(
        submodules(&plan, "crate::api::v1"),
        vec![
            ("chassis".to_string(), Visibility::Named),
            ("chassis_groups".to_string(), Visibility::Named),
            ("metadata".to_string(), Visibility::Named),
            ("systems".to_string(), Visibility::Named),
        ]
    );
    assert_eq!(
        submodules(&plan, "crate::api::v1::systems::computer_system_id"),
        vec![("reset".to_string(), Visibility::Named)]
    );
}

#[test]
fn test_plan_with_config_file() {
    let dir = TempDir::new().unwrap();
    let document = write_document(&dir, OPENAPI);
    let config = dir.path().join("codegen.yaml");
    fs::write(&config, "models_base_module: schemas\napi_base_module: handlers\n").unwrap();

    let plan = plan_from_files(&document, Some(&config)).unwrap();

    assert!(plan
        .models
        .iter()
        .all(|m| m.rust_type.to_string().starts_with("crate::schemas::")));
    assert_eq!(plan.traits[0].rust_type.to_string(), "crate::handlers::v1::ServiceRoot");
}

#[test]
fn test_missing_document() {
    let dir = TempDir::new().unwrap();
    let err = plan_from_files(dir.path().join("openapi.yaml"), None::<&str>).unwrap_err();
    assert!(matches!(err, CodegenError::Io { .. }));
}

#[test]
fn test_untranslatable_endpoint_aborts() {
    let mut document = ApiDocument::new();
    document.add_path("/redfish/v1", serde_json::json!({}));
    document.add_path("/redfish/v1/$batch", serde_json::json!({}));

    let err = generate_plan(document, &GeneratorConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        CodegenError::UntranslatableSegment { ref segment, .. } if segment == "$batch"
    ));
}

#[test]
fn test_plan_serializes() {
    let dir = TempDir::new().unwrap();
    let plan = plan_from_files(write_document(&dir, OPENAPI), None::<&str>).unwrap();

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["skipped"], serde_json::json!(["ServiceRoot"]));
    assert_eq!(json["traits"][0]["rust_type"]["path"], "crate::api::v1");
    assert_eq!(json["traits"][0]["rust_type"]["name"], "ServiceRoot");
    assert!(json["modules"]["crate::models::chassis::v1_0_0"].is_object());
}
