// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event bus envelope
//!
//! The outer wrapper every ECS notification arrives in. Only `detail-type` and
//! `detail` drive decoding; the remaining fields are carried through as
//! metadata.
//!
//! ```text
//! {
//!   "version": "0",
//!   "id": "3317b2af-7005-947d-b652-f55e762e571a",
//!   "detail-type": "ECS Task State Change",
//!   "source": "aws.ecs",
//!   "account": "111122223333",
//!   "time": "2020-01-23T17:57:58Z",
//!   "region": "us-west-2",
//!   "resources": ["arn:aws:ecs:us-west-2:111122223333:task/..."],
//!   "detail": { ... }
//! }
//! ```

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decoder;
use crate::errors::{DecodeError, DecodeResult};
use crate::events::nullable::or_default;
use crate::events::{DetailType, EcsEventDetail};

/// Event bus envelope with a raw, still-encoded detail payload
///
/// Metadata is carried as received: `id` is opaque text, and absent or `null`
/// fields take their zero value like record fields do.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    #[serde(deserialize_with = "or_default")]
    pub version: String,

    #[serde(deserialize_with = "or_default")]
    pub id: String,

    /// Discriminator selecting the detail schema
    #[serde(rename = "detail-type", deserialize_with = "or_default")]
    pub detail_type: String,

    #[serde(deserialize_with = "or_default")]
    pub source: String,

    #[serde(deserialize_with = "or_default")]
    pub account: String,

    #[serde(deserialize_with = "or_default")]
    pub time: DateTime<Utc>,

    #[serde(deserialize_with = "or_default")]
    pub region: String,

    #[serde(deserialize_with = "or_default")]
    pub resources: Vec<String>,

    /// JSON-encoded detail bytes, exactly as received
    #[serde(with = "raw_detail")]
    pub detail: Vec<u8>,
}

impl Envelope {
    /// Create an envelope carrying only a tag and a detail payload
    pub fn new(detail_type: impl Into<String>, detail: impl Into<Vec<u8>>) -> Self {
        Self {
            detail_type: detail_type.into(),
            detail: detail.into(),
            ..Default::default()
        }
    }

    /// Parse a complete envelope document
    pub fn from_slice(bytes: &[u8]) -> DecodeResult<Self> {
        serde_json::from_slice(bytes).map_err(DecodeError::Envelope)
    }

    /// Registry entry for this envelope's tag, if it is recognized
    pub fn known_detail_type(&self) -> Option<DetailType> {
        DetailType::from_tag(&self.detail_type)
    }

    /// Decode the detail payload according to the tag
    pub fn decode(&self) -> DecodeResult<EcsEventDetail> {
        decoder::decode(self)
    }
}

impl FromStr for Envelope {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

/// Keeps `detail` as raw JSON text instead of a parsed value
mod raw_detail {
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::value::RawValue;

    pub fn serialize<S>(detail: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if detail.iter().all(u8::is_ascii_whitespace) {
            return serializer.serialize_none();
        }

        let text = std::str::from_utf8(detail).map_err(S::Error::custom)?;
        let raw = RawValue::from_string(text.to_owned()).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Box<RawValue>>::deserialize(deserializer)?;
        Ok(raw.map(|raw| raw.get().as_bytes().to_vec()).unwrap_or_default())
    }
}
