//! Typed decoding of ECS change notifications
//!
//! ECS publishes task, container instance and deployment changes to the event
//! bus wrapped in an envelope whose `detail-type` names the kind of change.
//! This crate turns such an envelope into a strongly typed record, chosen by
//! that tag.
//!
//! Decoding is a pure function of the envelope: no I/O, no shared state.

pub mod decoder;
pub mod envelope;
pub mod errors;
pub mod events;

// Re-export commonly used types
pub use decoder::{decode, DecoderConfig, EventDetailDecoder, UnknownDetailType};
pub use envelope::Envelope;
pub use errors::{DecodeError, DecodeResult};
pub use events::{
    ContainerInstanceStateChange, DeploymentStateChange, DetailType, EcsEventDetail,
    TaskStateChange,
};
