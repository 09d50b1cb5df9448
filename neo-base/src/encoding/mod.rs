// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

mod base58;
mod wif;

pub use base58::*;
pub use wif::*;
