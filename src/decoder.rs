// Copyright (c) 2025 - Cowboy AI, Inc.
//! Detail-type dispatch
//!
//! Selects the record schema for an envelope from its `detail-type` tag and
//! decodes the raw detail payload into it.
//!
//! ```rust
//! use ecs_event_details::{decode, EcsEventDetail, Envelope};
//!
//! let envelope = Envelope::new(
//!     "ECS Deployment State Change",
//!     r#"{"eventType": "INFO", "eventName": "SERVICE_DEPLOYMENT_COMPLETED"}"#,
//! );
//!
//! match decode(&envelope).unwrap() {
//!     EcsEventDetail::DeploymentStateChange(deployment) => {
//!         assert_eq!(deployment.event_name, "SERVICE_DEPLOYMENT_COMPLETED");
//!     }
//!     other => panic!("unexpected detail: {:?}", other),
//! }
//! ```

use tracing::{debug, warn};

use crate::envelope::Envelope;
use crate::errors::{DecodeError, DecodeResult};
use crate::events::{DetailType, EcsEventDetail};

/// What to do with an envelope whose tag is not in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownDetailType {
    /// Fail with [`DecodeError::UnrecognizedDetailType`]
    #[default]
    Reject,
    /// Return `Ok(None)` so mixed event streams can be filtered in place
    Skip,
}

/// Configuration for [`EventDetailDecoder`]
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// Handling of unrecognized `detail-type` tags
    pub unknown_detail_type: UnknownDetailType,
}

/// Decoder for ECS event envelopes
///
/// Holds only its configuration, so one instance can be shared freely across
/// threads and tasks.
#[derive(Debug, Clone, Default)]
pub struct EventDetailDecoder {
    config: DecoderConfig,
}

impl EventDetailDecoder {
    /// Create a decoder with the given configuration
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decoder that skips unrecognized tags instead of failing
    pub fn skipping_unknown() -> Self {
        Self::new(DecoderConfig {
            unknown_detail_type: UnknownDetailType::Skip,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode an envelope's detail
    ///
    /// Returns `Ok(None)` only for an unrecognized tag under
    /// [`UnknownDetailType::Skip`].
    pub fn decode(&self, envelope: &Envelope) -> DecodeResult<Option<EcsEventDetail>> {
        match (envelope.known_detail_type(), self.config.unknown_detail_type) {
            (Some(detail_type), _) => decode_known(detail_type, envelope).map(Some),
            (None, UnknownDetailType::Reject) => Err(reject(envelope)),
            (None, UnknownDetailType::Skip) => {
                debug!("Skipping unrecognized detail type: {:?}", envelope.detail_type);
                Ok(None)
            }
        }
    }
}

/// Decode an envelope's detail, rejecting unrecognized tags
pub fn decode(envelope: &Envelope) -> DecodeResult<EcsEventDetail> {
    match envelope.known_detail_type() {
        Some(detail_type) => decode_known(detail_type, envelope),
        None => Err(reject(envelope)),
    }
}

fn decode_known(detail_type: DetailType, envelope: &Envelope) -> DecodeResult<EcsEventDetail> {
    match detail_type.decode(&envelope.detail) {
        Ok(detail) => {
            debug!(
                "Decoded {} detail ({} bytes)",
                detail_type,
                envelope.detail.len()
            );
            Ok(detail)
        }
        Err(err) => {
            debug!("Failed to decode {} detail: {}", detail_type, err);
            Err(err)
        }
    }
}

fn reject(envelope: &Envelope) -> DecodeError {
    warn!("Rejecting unrecognized detail type: {:?}", envelope.detail_type);
    DecodeError::UnrecognizedDetailType(envelope.detail_type.clone())
}
