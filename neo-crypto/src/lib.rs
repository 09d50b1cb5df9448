// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

pub mod aes;
pub mod ecc256;
pub mod nep2;
pub mod scrypt;
