//! Path resolution through the public API.

use crate::common::{ENTITY, embedded_registry, widget_registry};
use prop_registry::{PropDescriptor, PropKind, PropPath, ScalarKind, find_prop};

#[test]
fn test_empty_and_single_segment_paths_are_absent() {
    let registry = widget_registry();
    assert_absent!(registry, []);
    assert_absent!(registry, ["unknownType"]);
    assert_absent!(registry, [ENTITY]);
}

#[test]
fn test_top_level_field() {
    let registry = widget_registry();
    assert_resolves!(registry, [ENTITY, "label"], "label", PropKind::Scalar);
    assert_absent!(registry, [ENTITY, "missingField"]);
}

#[test]
fn test_nested_object_field() {
    let registry = widget_registry();
    assert_resolves!(registry, [ENTITY, "settings", "theme"], "theme", PropKind::Scalar);
    assert_resolves!(
        registry,
        [ENTITY, "settings", "layout", "columns"],
        "columns",
        PropKind::Scalar
    );
    assert_absent!(registry, [ENTITY, "settings", "columns"]);
}

#[test]
fn test_array_index_is_elidable() {
    let registry = widget_registry();
    let elided = registry.find_prop(&[ENTITY, "items", "name"]);
    let indexed = registry.find_prop(&[ENTITY, "items", "0", "name"]);

    assert_eq!(elided, Some(&PropDescriptor::scalar("name")));
    assert_eq!(elided, indexed);
}

#[test]
fn test_array_index_without_field_resolves_to_the_array() {
    let registry = widget_registry();
    assert_resolves!(registry, [ENTITY, "items", "0"], "items", PropKind::Array);
    assert_resolves!(registry, [ENTITY, "items", "99", "5"], "items", PropKind::Array);
    assert_absent!(registry, [ENTITY, "items", "-1"]);
    assert_absent!(registry, [ENTITY, "items", "0", "sku"]);
}

#[test]
fn test_map_key_is_elidable() {
    let registry = widget_registry();
    let direct = registry.find_prop(&[ENTITY, "entries", "x"]).unwrap();
    assert_eq!(direct, &PropDescriptor::scalar("x"));

    for key in ["anyKey", "0", "with space", ""] {
        assert_eq!(
            registry.find_prop(&[ENTITY, "entries", key, "x"]),
            Some(direct),
            "key {:?}",
            key
        );
    }
}

#[test]
fn test_map_key_named_like_a_value_field() {
    let registry = widget_registry();
    let x = registry.find_prop(&[ENTITY, "entries", "x"]).unwrap();
    assert_eq!(registry.find_prop(&[ENTITY, "entries", "x", "x"]), Some(x));
    assert_resolves!(registry, [ENTITY, "entries", "x", "y"], "entries", PropKind::Map);
}

#[test]
fn test_array_of_arrays_consumes_one_segment_per_level() {
    let registry = widget_registry();
    assert_resolves!(registry, [ENTITY, "matrix", "2"], "row", PropKind::Array);
    assert_resolves!(registry, [ENTITY, "matrix", "2", "3"], "cell", PropKind::Scalar);
    assert_resolves!(registry, [ENTITY, "matrix", "first", "last"], "cell", PropKind::Scalar);
    assert_absent!(registry, [ENTITY, "matrix", "2", "3", "4"]);
}

#[test]
fn test_map_of_arrays_of_objects() {
    let registry = widget_registry();
    assert_resolves!(registry, [ENTITY, "groups", "admins"], "members", PropKind::Array);
    assert_resolves!(registry, [ENTITY, "groups", "admins", "id"], "id", PropKind::Scalar);
    assert_resolves!(
        registry,
        [ENTITY, "groups", "admins", "0", "id"],
        "id",
        PropKind::Scalar
    );
}

#[test]
fn test_map_of_scalars_and_scalars_stop_resolution() {
    let registry = widget_registry();
    assert_resolves!(registry, [ENTITY, "flags"], "flags", PropKind::Map);
    assert_absent!(registry, [ENTITY, "flags", "beta"]);
    assert_absent!(registry, [ENTITY, "label", "0"]);
    assert_absent!(registry, [ENTITY, "items", "price", "currency"]);
}

/// Policy check: a failed lookup does not end the walk early, and nothing
/// after it can bring the path back to a descriptor.
#[test]
fn test_failed_lookup_keeps_the_result_absent() {
    let registry = widget_registry();
    assert_absent!(registry, [ENTITY, "nope", "label"]);
    assert_absent!(registry, [ENTITY, "settings", "nope", "theme"]);
    assert_absent!(registry, [ENTITY, "items", "nope", "0", "name"]);
}

#[test]
fn test_scalar_kind_is_carried_through() {
    let registry = widget_registry();
    let price = registry.find_prop(&[ENTITY, "items", "price"]).unwrap();
    assert_eq!(
        price,
        &PropDescriptor::scalar_of("price", ScalarKind::Number)
    );
}

#[test]
fn test_docker_image_scenario() {
    let registry = embedded_registry();
    assert_eq!(
        registry.find_prop(&["dockerImage", "name"]),
        Some(&PropDescriptor::scalar("name"))
    );
    assert_absent!(registry, ["dockerImage", "missingField"]);
    assert_absent!(registry, ["dockerImage"]);
}

#[test]
fn test_kubernetes_paths() {
    let registry = embedded_registry();
    assert_resolves!(
        registry,
        ["kubernetesService", "kubernetesObject", "spec", "ports", "targetPort"],
        "targetPort",
        PropKind::Scalar
    );
    assert_resolves!(
        registry,
        ["kubernetesDeployment", "kubernetesObject", "spec", "template", "spec", "containers", "1", "env", "0", "value"],
        "value",
        PropKind::Scalar
    );
    assert_resolves!(
        registry,
        ["kubernetesDeployment", "kubernetesObject", "spec", "selector", "matchLabels"],
        "matchLabels",
        PropKind::Map
    );
}

#[test]
fn test_string_paths_resolve_like_segment_lists() {
    let registry = embedded_registry();
    let path: PropPath = "kubernetesNamespace/kubernetesObject/metadata/annotations"
        .parse()
        .unwrap();
    let segments = [
        "kubernetesNamespace",
        "kubernetesObject",
        "metadata",
        "annotations",
    ];

    assert_eq!(path.resolve(&registry), find_prop(&registry, &segments));
    assert_eq!(
        path.resolve(&registry).map(|prop| prop.kind()),
        Some(PropKind::Map)
    );
}

#[test]
fn test_resolved_descriptor_serializes() {
    let registry = embedded_registry();
    let credentials = registry.find_prop(&["dockerHub", "credentials"]).unwrap();
    let value = serde_json::to_value(credentials).unwrap();

    assert_eq!(value["kind"], "object");
    assert_eq!(value["name"], "credentials");
    assert_eq!(value["properties"][0]["name"], "username");
}
