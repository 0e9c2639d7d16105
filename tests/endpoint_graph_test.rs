//! Endpoint tree construction through the public API.

use indexmap::IndexMap;
use redfish_codegen::api::{project, EndpointGraph, PathNameTranslator, TraitContextFactory};
use redfish_codegen::{GeneratorConfig, ModuleRegistry, NormalizationError};
use serde_json::{json, Value};

const PATHS: &[&str] = &[
    "/redfish/v1",
    "/redfish/v1/Chassis",
    "/redfish/v1/Chassis/{ChassisId}",
    "/redfish/v1/Chassis/{ChassisId}/Power",
    "/redfish/v1/ChassisGroups",
    "/redfish/v1/ChassisGroups/{GroupId}",
    "/redfish/v1/Managers",
];

fn table(paths: &[&str]) -> IndexMap<String, Value> {
    paths
        .iter()
        .map(|p| (p.to_string(), json!({"get": {"operationId": p}})))
        .collect()
}

fn translator() -> PathNameTranslator {
    PathNameTranslator::from_config(&GeneratorConfig::default()).unwrap()
}

fn parent_of(graph: &EndpointGraph, path: &str) -> Option<String> {
    let node = graph.node(path).unwrap();
    let parents = graph.parents(node);
    assert!(parents.len() <= 1, "{} has {} parents", path, parents.len());
    parents
        .first()
        .map(|&parent| graph.endpoint(parent).path().to_string())
}

fn normalized(paths: &[&str]) -> EndpointGraph {
    let mut graph = EndpointGraph::build(&table(paths), &translator()).unwrap();
    graph.normalize().unwrap();
    graph
}

#[test]
fn test_parents_after_normalization() {
    let graph = normalized(PATHS);

    assert_eq!(parent_of(&graph, "/redfish/v1"), None);
    assert_eq!(parent_of(&graph, "/redfish/v1/Chassis").as_deref(), Some("/redfish/v1"));
    assert_eq!(
        parent_of(&graph, "/redfish/v1/Chassis/{ChassisId}/Power").as_deref(),
        Some("/redfish/v1/Chassis/{ChassisId}")
    );
    assert_eq!(parent_of(&graph, "/redfish/v1/ChassisGroups").as_deref(), Some("/redfish/v1"));
    assert_eq!(
        parent_of(&graph, "/redfish/v1/ChassisGroups/{GroupId}").as_deref(),
        Some("/redfish/v1/ChassisGroups")
    );
}

#[test]
fn test_input_order_does_not_matter() {
    let mut reversed: Vec<&str> = PATHS.to_vec();
    reversed.reverse();

    let forward = normalized(PATHS);
    let backward = normalized(&reversed);

    for path in PATHS {
        assert_eq!(parent_of(&forward, path), parent_of(&backward, path), "{}", path);
    }
}

#[test]
fn test_every_endpoint_has_one_path_from_root() {
    let graph = normalized(PATHS);
    graph.check_tree().unwrap();

    let node = graph.node("/redfish/v1/ChassisGroups/{GroupId}").unwrap();
    let names: Vec<&str> = graph
        .path_from_root(node)
        .unwrap()
        .into_iter()
        .map(|n| graph.endpoint(n).name())
        .collect();
    assert_eq!(names, vec!["v1", "ChassisGroups", "GroupId"]);
}

#[test]
fn test_second_route_to_endpoint_is_fatal() {
    let mut graph = EndpointGraph::build(&table(PATHS), &translator()).unwrap();
    let root = graph.root().unwrap();
    let power = graph.node("/redfish/v1/Chassis/{ChassisId}/Power").unwrap();
    graph.link(root, power);

    let err = graph.normalize().unwrap_err();
    assert!(matches!(
        err,
        NormalizationError::MultiplePaths { ref endpoint } if endpoint == "/redfish/v1/Chassis/{ChassisId}/Power"
    ));
}

#[test]
fn test_project_keeps_payloads() {
    let graph = normalized(PATHS);
    let factory = TraitContextFactory::from_config(&GeneratorConfig::default()).unwrap();
    let mut registry = ModuleRegistry::new();

    let traits = project(&graph, &factory, &mut registry).unwrap();

    assert_eq!(traits.len(), PATHS.len());
    let power = traits
        .iter()
        .find(|t| t.endpoint == "/redfish/v1/Chassis/{ChassisId}/Power")
        .unwrap();
    assert_eq!(power.rust_type.to_string(), "crate::api::v1::chassis::chassis_id::power::Power");
    assert_eq!(power.payload["get"]["operationId"], "/redfish/v1/Chassis/{ChassisId}/Power");

    let group = traits
        .iter()
        .find(|t| t.endpoint == "/redfish/v1/ChassisGroups/{GroupId}")
        .unwrap();
    assert_eq!(group.module_path.to_string(), "crate::api::v1::chassis_groups::group_id");
}
