// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Encoding and hashing primitives shared by the Neo account crates.

pub mod encoding;
pub mod hash;
mod uint160;

pub use uint160::{AddressError, AddressVersion, UInt160};
