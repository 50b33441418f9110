// Copyright (c) 2025 - Cowboy AI, Inc.
//! Null-as-zero field decoding
//!
//! ECS detail payloads sometimes carry explicit `null` for fields that have
//! no value yet (an empty `stoppedReason`, a task that has not stopped).
//! Those decode to the field type's zero value, same as an absent field.

use serde::{Deserialize, Deserializer};

/// Deserialize `T`, mapping JSON `null` to `T::default()`
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
