// Copyright (c) 2025 - Cowboy AI, Inc.
//! Detail Type Registry
//!
//! Maps each recognized `detail-type` tag to exactly one record schema, and
//! defines the tagged union the decoder returns.
//!
//! The registry is the [`DetailType`] enum itself: [`DetailType::ALL`] lists
//! every entry and [`DetailType::as_str`] is the only place a tag string is
//! spelled out. Lookup is exact, case-sensitive string equality.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::value::MapAccessDeserializer;
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::container_instance::ContainerInstanceStateChange;
use super::deployment::DeploymentStateChange;
use super::task::TaskStateChange;
use crate::envelope::Envelope;
use crate::errors::{DecodeError, DecodeResult};

/// Recognized ECS event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailType {
    /// `ECS Task State Change`
    TaskStateChange,
    /// `ECS Container Instance State Change`
    ContainerInstanceStateChange,
    /// `ECS Deployment State Change`
    DeploymentStateChange,
}

impl DetailType {
    /// Every registry entry
    pub const ALL: [DetailType; 3] = [
        DetailType::TaskStateChange,
        DetailType::ContainerInstanceStateChange,
        DetailType::DeploymentStateChange,
    ];

    /// The exact `detail-type` tag for this category
    pub const fn as_str(self) -> &'static str {
        match self {
            DetailType::TaskStateChange => "ECS Task State Change",
            DetailType::ContainerInstanceStateChange => "ECS Container Instance State Change",
            DetailType::DeploymentStateChange => "ECS Deployment State Change",
        }
    }

    /// Look up a tag in the registry
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|detail_type| detail_type.as_str() == tag)
    }

    /// Decode a raw detail payload into this category's schema
    ///
    /// An empty (or whitespace-only) payload and a literal `null` both decode
    /// to the zero-valued record. Anything other than a JSON object or `null`
    /// is a [`DecodeError::Detail`].
    pub fn decode(self, detail: &[u8]) -> DecodeResult<EcsEventDetail> {
        match self {
            DetailType::TaskStateChange => {
                parse_detail(self, detail).map(EcsEventDetail::TaskStateChange)
            }
            DetailType::ContainerInstanceStateChange => {
                parse_detail(self, detail).map(EcsEventDetail::ContainerInstanceStateChange)
            }
            DetailType::DeploymentStateChange => {
                parse_detail(self, detail).map(EcsEventDetail::DeploymentStateChange)
            }
        }
    }
}

fn parse_detail<T>(detail_type: DetailType, detail: &[u8]) -> DecodeResult<T>
where
    T: DeserializeOwned + Default,
{
    if detail.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice::<DetailObject<T>>(detail)
        .map(|DetailObject(record)| record)
        .map_err(|source| DecodeError::Detail {
            detail_type,
            source,
        })
}

/// Top-level detail payload: a JSON object or `null`
///
/// Derived struct deserializers also accept arrays and fill fields by
/// position; routing through `deserialize_map` rules that out.
struct DetailObject<T>(T);

impl<'de, T> Deserialize<'de> for DetailObject<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_option(DetailObjectVisitor(PhantomData))
            .map(DetailObject)
    }
}

struct DetailObjectVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for DetailObjectVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object or null")
    }

    fn visit_none<E>(self) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_unit<E>(self) -> Result<T, E> {
        Ok(T::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, map: A) -> Result<T, A::Error>
    where
        A: MapAccess<'de>,
    {
        T::deserialize(MapAccessDeserializer::new(map))
    }
}

impl fmt::Display for DetailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailType {
    type Err = DecodeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::from_tag(tag).ok_or_else(|| DecodeError::UnrecognizedDetailType(tag.to_string()))
    }
}

/// A decoded ECS event detail
///
/// One variant per registry entry. Serializes adjacently tagged, so the JSON
/// form is `{"detail-type": "...", "detail": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "detail-type", content = "detail")]
pub enum EcsEventDetail {
    #[serde(rename = "ECS Task State Change")]
    TaskStateChange(TaskStateChange),

    #[serde(rename = "ECS Container Instance State Change")]
    ContainerInstanceStateChange(ContainerInstanceStateChange),

    #[serde(rename = "ECS Deployment State Change")]
    DeploymentStateChange(DeploymentStateChange),
}

impl EcsEventDetail {
    /// Registry entry for this record
    pub fn detail_type(&self) -> DetailType {
        match self {
            EcsEventDetail::TaskStateChange(_) => DetailType::TaskStateChange,
            EcsEventDetail::ContainerInstanceStateChange(_) => {
                DetailType::ContainerInstanceStateChange
            }
            EcsEventDetail::DeploymentStateChange(_) => DetailType::DeploymentStateChange,
        }
    }

    /// When the change happened, according to ECS
    pub fn updated_at(&self) -> DateTime<Utc> {
        match self {
            EcsEventDetail::TaskStateChange(detail) => detail.updated_at,
            EcsEventDetail::ContainerInstanceStateChange(detail) => detail.updated_at,
            EcsEventDetail::DeploymentStateChange(detail) => detail.updated_at,
        }
    }

    /// Cluster the change belongs to; deployment details don't carry one
    pub fn cluster_arn(&self) -> Option<&str> {
        match self {
            EcsEventDetail::TaskStateChange(detail) => Some(&detail.cluster_arn),
            EcsEventDetail::ContainerInstanceStateChange(detail) => Some(&detail.cluster_arn),
            EcsEventDetail::DeploymentStateChange(_) => None,
        }
    }

    /// Encode the record back into an envelope carrying its tag
    pub fn to_envelope(&self) -> DecodeResult<Envelope> {
        let detail = match self {
            EcsEventDetail::TaskStateChange(detail) => serde_json::to_vec(detail),
            EcsEventDetail::ContainerInstanceStateChange(detail) => serde_json::to_vec(detail),
            EcsEventDetail::DeploymentStateChange(detail) => serde_json::to_vec(detail),
        }
        .map_err(DecodeError::Encode)?;

        Ok(Envelope::new(self.detail_type().as_str(), detail))
    }
}

impl From<TaskStateChange> for EcsEventDetail {
    fn from(detail: TaskStateChange) -> Self {
        EcsEventDetail::TaskStateChange(detail)
    }
}

impl From<ContainerInstanceStateChange> for EcsEventDetail {
    fn from(detail: ContainerInstanceStateChange) -> Self {
        EcsEventDetail::ContainerInstanceStateChange(detail)
    }
}

impl From<DeploymentStateChange> for EcsEventDetail {
    fn from(detail: DeploymentStateChange) -> Self {
        EcsEventDetail::DeploymentStateChange(detail)
    }
}
