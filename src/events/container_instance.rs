// Copyright (c) 2025 - Cowboy AI, Inc.
//! Container Instance State Change Detail
//!
//! Sent when a container instance's agent connects or disconnects, its status
//! changes (ACTIVE, DRAINING, ...), or its resource accounting changes because
//! a task was placed on or removed from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable::or_default;

/// Container instance status or resource change
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerInstanceStateChange {
    #[serde(deserialize_with = "or_default")]
    pub agent_connected: bool,

    /// Capability attributes (`com.amazonaws.ecs.capability.logging-driver.awslogs`, ...)
    #[serde(deserialize_with = "or_default")]
    pub attributes: Vec<ContainerInstanceAttribute>,

    #[serde(deserialize_with = "or_default")]
    pub cluster_arn: String,

    #[serde(deserialize_with = "or_default")]
    pub container_instance_arn: String,

    #[serde(deserialize_with = "or_default")]
    pub ec2_instance_id: String,

    #[serde(deserialize_with = "or_default")]
    pub status: String,

    /// Resources the instance registered with at startup
    #[serde(deserialize_with = "or_default")]
    pub registered_resources: Vec<Resource>,

    /// Resources still free for task placement
    #[serde(deserialize_with = "or_default")]
    pub remaining_resources: Vec<Resource>,

    #[serde(deserialize_with = "or_default")]
    pub version: i64,

    #[serde(deserialize_with = "or_default")]
    pub version_info: AgentVersionInfo,

    #[serde(deserialize_with = "or_default")]
    pub updated_at: DateTime<Utc>,
}

/// Agent and Docker versions running on the instance
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentVersionInfo {
    #[serde(deserialize_with = "or_default")]
    pub agent_hash: String,

    #[serde(deserialize_with = "or_default")]
    pub agent_version: String,

    #[serde(deserialize_with = "or_default")]
    pub docker_version: String,
}

/// Capability attribute advertised by the agent
///
/// Most attributes are bare names; a few (`ecs.os-type`, `ecs.cpu-architecture`)
/// also carry a value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerInstanceAttribute {
    #[serde(deserialize_with = "or_default")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "or_default")]
    pub value: String,
}

/// A schedulable resource on a container instance
///
/// Which value field is populated depends on `kind`: `INTEGER` resources
/// (CPU, MEMORY) use `integer_value`, `STRINGSET` resources (PORTS) use
/// `string_set_value`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    #[serde(deserialize_with = "or_default")]
    pub name: String,

    /// `INTEGER`, `INTEGERSET` or `STRINGSET`; `type` on the wire
    #[serde(rename = "type", deserialize_with = "or_default")]
    pub kind: String,

    #[serde(deserialize_with = "or_default")]
    pub integer_value: i64,

    #[serde(deserialize_with = "or_default")]
    pub integer_set_value: Vec<i64>,

    #[serde(deserialize_with = "or_default")]
    pub string_set_value: Vec<String>,
}

impl ContainerInstanceStateChange {
    /// Find a remaining resource by name (`CPU`, `MEMORY`, `PORTS`, ...)
    pub fn remaining(&self, name: &str) -> Option<&Resource> {
        self.remaining_resources.iter().find(|r| r.name == name)
    }

    /// Find a registered resource by name
    pub fn registered(&self, name: &str) -> Option<&Resource> {
        self.registered_resources.iter().find(|r| r.name == name)
    }
}
