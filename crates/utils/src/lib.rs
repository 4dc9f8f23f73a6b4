// Copyright 2025 Irreducible Inc.

//! Utility modules used in LargeInt.

pub mod serialization;

pub use bytes;
pub use serialization::{DeserializeBytes, SerializationError, SerializeBytes};
