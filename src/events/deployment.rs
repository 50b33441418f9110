// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deployment State Change Detail

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable::or_default;

/// Service deployment status notification
///
/// `event_type` is the severity (`INFO`, `ERROR`); `event_name` is the
/// deployment milestone (`SERVICE_DEPLOYMENT_IN_PROGRESS`,
/// `SERVICE_DEPLOYMENT_COMPLETED`, `SERVICE_DEPLOYMENT_FAILED`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentStateChange {
    #[serde(deserialize_with = "or_default")]
    pub event_type: String,

    #[serde(deserialize_with = "or_default")]
    pub event_name: String,

    #[serde(deserialize_with = "or_default")]
    pub deployment_id: String,

    #[serde(deserialize_with = "or_default")]
    pub updated_at: DateTime<Utc>,

    #[serde(deserialize_with = "or_default")]
    pub reason: String,
}
