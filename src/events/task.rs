// Copyright (c) 2025 - Cowboy AI, Inc.
//! Task State Change Detail
//!
//! Sent whenever a task's lifecycle status changes (provisioning, pulling,
//! running, stopping, stopped) or one of its containers changes status.
//!
//! Every field decodes to its zero value when absent or `null`, so a partially
//! populated detail (early PROVISIONING events carry no timestamps beyond
//! `createdAt`) still decodes cleanly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable::or_default;

/// Task lifecycle status change
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskStateChange {
    /// Elastic network interfaces and other resources attached to the task
    #[serde(deserialize_with = "or_default")]
    pub attachments: Vec<TaskAttachment>,

    #[serde(deserialize_with = "or_default")]
    pub availability_zone: String,

    #[serde(deserialize_with = "or_default")]
    pub cluster_arn: String,

    /// Containers in the task, in task definition order
    #[serde(deserialize_with = "or_default")]
    pub containers: Vec<Container>,

    #[serde(deserialize_with = "or_default")]
    pub created_at: DateTime<Utc>,

    /// `EC2`, `FARGATE` or `EXTERNAL`
    #[serde(deserialize_with = "or_default")]
    pub launch_type: String,

    /// Task-level CPU units, as the string ECS reports (`"256"`)
    #[serde(deserialize_with = "or_default")]
    pub cpu: String,

    /// Task-level memory in MiB, as the string ECS reports (`"512"`)
    #[serde(deserialize_with = "or_default")]
    pub memory: String,

    #[serde(deserialize_with = "or_default")]
    pub desired_status: String,

    /// Service group (`service:web`) or task family (`family:web`)
    #[serde(deserialize_with = "or_default")]
    pub group: String,

    #[serde(deserialize_with = "or_default")]
    pub last_status: String,

    #[serde(deserialize_with = "or_default")]
    pub connectivity: String,

    #[serde(deserialize_with = "or_default")]
    pub connectivity_at: DateTime<Utc>,

    #[serde(deserialize_with = "or_default")]
    pub pull_started_at: DateTime<Utc>,

    #[serde(deserialize_with = "or_default")]
    pub started_at: DateTime<Utc>,

    /// Principal or service that started the task
    #[serde(deserialize_with = "or_default")]
    pub started_by: String,

    #[serde(deserialize_with = "or_default")]
    pub pull_stopped_at: DateTime<Utc>,

    #[serde(deserialize_with = "or_default")]
    pub updated_at: DateTime<Utc>,

    #[serde(deserialize_with = "or_default")]
    pub task_arn: String,

    #[serde(deserialize_with = "or_default")]
    pub task_definition_arn: String,

    /// Monotonic per-task version; later events carry larger values
    #[serde(deserialize_with = "or_default")]
    pub version: i64,

    #[serde(deserialize_with = "or_default")]
    pub platform_version: String,

    #[serde(deserialize_with = "or_default")]
    pub stopped_reason: String,

    /// `TaskFailedToStart`, `EssentialContainerExited`, `UserInitiated`, ...
    #[serde(deserialize_with = "or_default")]
    pub stop_code: String,

    #[serde(deserialize_with = "or_default")]
    pub stopping_at: DateTime<Utc>,

    #[serde(deserialize_with = "or_default")]
    pub stopped_at: DateTime<Utc>,

    #[serde(deserialize_with = "or_default")]
    pub execution_stopped_at: DateTime<Utc>,
}

/// A resource attached to the task, usually an ENI in `awsvpc` mode
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskAttachment {
    #[serde(deserialize_with = "or_default")]
    pub id: String,

    /// Attachment type (`eni`); `type` on the wire
    #[serde(rename = "type", deserialize_with = "or_default")]
    pub kind: String,

    #[serde(deserialize_with = "or_default")]
    pub status: String,

    /// Name/value pairs in the order ECS sent them
    #[serde(deserialize_with = "or_default")]
    pub details: Vec<TaskAttachmentDetail>,
}

/// One name/value entry of a task attachment (`subnetId`, `macAddress`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskAttachmentDetail {
    #[serde(deserialize_with = "or_default")]
    pub name: String,

    #[serde(deserialize_with = "or_default")]
    pub value: String,
}

/// A container in the task
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Container {
    #[serde(deserialize_with = "or_default")]
    pub container_arn: String,

    #[serde(deserialize_with = "or_default")]
    pub last_status: String,

    #[serde(deserialize_with = "or_default")]
    pub name: String,

    #[serde(deserialize_with = "or_default")]
    pub image: String,

    #[serde(deserialize_with = "or_default")]
    pub image_digest: String,

    /// Docker container ID on the host
    #[serde(deserialize_with = "or_default")]
    pub runtime_id: String,

    #[serde(deserialize_with = "or_default")]
    pub task_arn: String,

    #[serde(deserialize_with = "or_default")]
    pub network_interfaces: Vec<NetworkInterface>,

    #[serde(deserialize_with = "or_default")]
    pub cpu: String,

    #[serde(deserialize_with = "or_default")]
    pub memory: String,

    #[serde(deserialize_with = "or_default")]
    pub memory_reservation: String,

    /// Zero until the container has exited
    #[serde(deserialize_with = "or_default")]
    pub exit_code: i64,

    #[serde(deserialize_with = "or_default")]
    pub reason: String,
}

/// Network interface bound to a container
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkInterface {
    #[serde(deserialize_with = "or_default")]
    pub attachment_id: String,

    // Attachment details spell it `privateIPv4Address`; accept both.
    #[serde(alias = "privateIPv4Address", deserialize_with = "or_default")]
    pub private_ipv4_address: String,

    #[serde(deserialize_with = "or_default")]
    pub ipv6_address: String,
}

impl TaskStateChange {
    /// Look up a named detail value across all attachments
    pub fn attachment_detail(&self, name: &str) -> Option<&str> {
        self.attachments
            .iter()
            .flat_map(|attachment| attachment.details.iter())
            .find(|detail| detail.name == name)
            .map(|detail| detail.value.as_str())
    }
}
