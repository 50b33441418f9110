// Copyright (c) 2025 - Cowboy AI, Inc.
//! ECS Event Details
//!
//! Record schemas for the `detail` payload of ECS change notifications, one
//! per recognized `detail-type`, and the registry tying tags to schemas.
//!
//! # Wire Conventions
//!
//! - Field names are lower camel case (`clusterArn`). Fields named `type` on
//!   the wire are `kind` in Rust.
//! - Timestamps are RFC 3339 in UTC with fractional seconds and a `Z` suffix
//!   (`2020-01-23T17:57:38.453Z`).
//! - Unknown fields are ignored so newer ECS payloads keep decoding.
//! - Absent and `null` fields decode to the zero value: empty string, `0`,
//!   `false`, the Unix epoch, or an empty list. Lists keep wire order.
//!
//! # Module Organization
//!
//! - [`detail`] - `DetailType` registry and the `EcsEventDetail` union
//! - [`task`] - `ECS Task State Change`
//! - [`container_instance`] - `ECS Container Instance State Change`
//! - [`deployment`] - `ECS Deployment State Change`

pub mod container_instance;
pub mod deployment;
pub mod detail;
pub(crate) mod nullable;
pub mod task;

// Re-export commonly used types
pub use container_instance::{
    AgentVersionInfo, ContainerInstanceAttribute, ContainerInstanceStateChange, Resource,
};
pub use deployment::DeploymentStateChange;
pub use detail::{DetailType, EcsEventDetail};
pub use task::{Container, NetworkInterface, TaskAttachment, TaskAttachmentDetail, TaskStateChange};
