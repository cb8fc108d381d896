//! Compiled-in entity-type schemas.
//!
//! Each entity type is embedded as a static JSON string, so a registry can be
//! built without any external schema files. The order of [`all_entries`] is
//! the registration order.

/// All compiled-in entries, in registration order.
pub fn all_entries() -> [&'static str; 5] {
    [
        docker_image_entry(),
        docker_hub_entry(),
        kubernetes_namespace_entry(),
        kubernetes_deployment_entry(),
        kubernetes_service_entry(),
    ]
}

/// Returns the `dockerImage` entry as a JSON string.
pub fn docker_image_entry() -> &'static str {
    r#"{
  "entityType": "dockerImage",
  "properties": [
    { "kind": "scalar", "name": "name" },
    { "kind": "scalar", "name": "image" },
    {
      "kind": "array",
      "name": "tags",
      "item": { "kind": "scalar", "name": "tag" }
    },
    {
      "kind": "array",
      "name": "exposedPorts",
      "item": {
        "kind": "object",
        "name": "exposedPort",
        "properties": [
          { "kind": "scalar", "name": "containerPort", "type": "number" },
          { "kind": "scalar", "name": "protocol" }
        ]
      }
    },
    {
      "kind": "map",
      "name": "env",
      "value": { "kind": "scalar", "name": "envValue" }
    },
    {
      "kind": "array",
      "name": "buildArgSets",
      "item": {
        "kind": "map",
        "name": "buildArgs",
        "value": { "kind": "scalar", "name": "buildArg" }
      }
    },
    {
      "kind": "array",
      "name": "layerDigests",
      "item": {
        "kind": "array",
        "name": "layer",
        "item": { "kind": "scalar", "name": "digest" }
      }
    }
  ]
}"#
}

/// Returns the `dockerHub` entry as a JSON string.
pub fn docker_hub_entry() -> &'static str {
    r#"{
  "entityType": "dockerHub",
  "properties": [
    { "kind": "scalar", "name": "name" },
    {
      "kind": "object",
      "name": "credentials",
      "properties": [
        { "kind": "scalar", "name": "username" },
        { "kind": "scalar", "name": "password" }
      ]
    },
    {
      "kind": "map",
      "name": "repositories",
      "value": {
        "kind": "object",
        "name": "repository",
        "properties": [
          { "kind": "scalar", "name": "description" },
          { "kind": "scalar", "name": "private", "type": "boolean" },
          { "kind": "scalar", "name": "pullCount", "type": "number" }
        ]
      }
    },
    {
      "kind": "map",
      "name": "collaborators",
      "value": {
        "kind": "array",
        "name": "members",
        "item": { "kind": "scalar", "name": "member" }
      }
    },
    {
      "kind": "map",
      "name": "teamPermissions",
      "value": {
        "kind": "map",
        "name": "permissions",
        "value": { "kind": "scalar", "name": "permission" }
      }
    }
  ]
}"#
}

/// Returns the `kubernetesNamespace` entry as a JSON string.
pub fn kubernetes_namespace_entry() -> &'static str {
    r#"{
  "entityType": "kubernetesNamespace",
  "properties": [
    { "kind": "scalar", "name": "name" },
    {
      "kind": "object",
      "name": "kubernetesObject",
      "properties": [
        { "kind": "scalar", "name": "apiVersion" },
        { "kind": "scalar", "name": "kind" },
        {
          "kind": "object",
          "name": "metadata",
          "properties": [
            { "kind": "scalar", "name": "name" },
            {
              "kind": "map",
              "name": "labels",
              "value": { "kind": "scalar", "name": "labelValue" }
            },
            {
              "kind": "map",
              "name": "annotations",
              "value": { "kind": "scalar", "name": "annotationValue" }
            }
          ]
        }
      ]
    }
  ]
}"#
}

/// Returns the `kubernetesDeployment` entry as a JSON string.
pub fn kubernetes_deployment_entry() -> &'static str {
    r#"{
  "entityType": "kubernetesDeployment",
  "properties": [
    { "kind": "scalar", "name": "name" },
    {
      "kind": "object",
      "name": "kubernetesObject",
      "properties": [
        { "kind": "scalar", "name": "apiVersion" },
        { "kind": "scalar", "name": "kind" },
        {
          "kind": "object",
          "name": "metadata",
          "properties": [
            { "kind": "scalar", "name": "name" },
            { "kind": "scalar", "name": "namespace" },
            {
              "kind": "map",
              "name": "labels",
              "value": { "kind": "scalar", "name": "labelValue" }
            }
          ]
        },
        {
          "kind": "object",
          "name": "spec",
          "properties": [
            { "kind": "scalar", "name": "replicas", "type": "number" },
            {
              "kind": "object",
              "name": "selector",
              "properties": [
                {
                  "kind": "map",
                  "name": "matchLabels",
                  "value": { "kind": "scalar", "name": "labelValue" }
                }
              ]
            },
            {
              "kind": "object",
              "name": "template",
              "properties": [
                {
                  "kind": "object",
                  "name": "metadata",
                  "properties": [
                    {
                      "kind": "map",
                      "name": "labels",
                      "value": { "kind": "scalar", "name": "labelValue" }
                    }
                  ]
                },
                {
                  "kind": "object",
                  "name": "spec",
                  "properties": [
                    {
                      "kind": "array",
                      "name": "containers",
                      "item": {
                        "kind": "object",
                        "name": "container",
                        "properties": [
                          { "kind": "scalar", "name": "name" },
                          { "kind": "scalar", "name": "image" },
                          {
                            "kind": "array",
                            "name": "args",
                            "item": { "kind": "scalar", "name": "arg" }
                          },
                          {
                            "kind": "array",
                            "name": "ports",
                            "item": {
                              "kind": "object",
                              "name": "port",
                              "properties": [
                                { "kind": "scalar", "name": "name" },
                                { "kind": "scalar", "name": "containerPort", "type": "number" },
                                { "kind": "scalar", "name": "protocol" }
                              ]
                            }
                          },
                          {
                            "kind": "array",
                            "name": "env",
                            "item": {
                              "kind": "object",
                              "name": "envVar",
                              "properties": [
                                { "kind": "scalar", "name": "name" },
                                { "kind": "scalar", "name": "value" }
                              ]
                            }
                          }
                        ]
                      }
                    },
                    {
                      "kind": "map",
                      "name": "nodeSelector",
                      "value": { "kind": "scalar", "name": "nodeLabel" }
                    }
                  ]
                }
              ]
            }
          ]
        }
      ]
    }
  ]
}"#
}

/// Returns the `kubernetesService` entry as a JSON string.
pub fn kubernetes_service_entry() -> &'static str {
    r#"{
  "entityType": "kubernetesService",
  "properties": [
    { "kind": "scalar", "name": "name" },
    {
      "kind": "object",
      "name": "kubernetesObject",
      "properties": [
        { "kind": "scalar", "name": "apiVersion" },
        { "kind": "scalar", "name": "kind" },
        {
          "kind": "object",
          "name": "metadata",
          "properties": [
            { "kind": "scalar", "name": "name" },
            { "kind": "scalar", "name": "namespace" }
          ]
        },
        {
          "kind": "object",
          "name": "spec",
          "properties": [
            { "kind": "scalar", "name": "type" },
            {
              "kind": "array",
              "name": "ports",
              "item": {
                "kind": "object",
                "name": "servicePort",
                "properties": [
                  { "kind": "scalar", "name": "name" },
                  { "kind": "scalar", "name": "port", "type": "number" },
                  { "kind": "scalar", "name": "targetPort", "type": "number" },
                  { "kind": "scalar", "name": "protocol" }
                ]
              }
            },
            {
              "kind": "map",
              "name": "selector",
              "value": { "kind": "scalar", "name": "labelValue" }
            }
          ]
        }
      ]
    }
  ]
}"#
}
