// Copyright @ 2025 - Present, R3E Network
// All Rights Reserved

use zeroize::Zeroizing;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScryptParams {
    pub n: u64,
    pub r: u32,
    pub p: u32,
}

impl core::fmt::Display for ScryptParams {
    #[inline]
    fn fmt(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::write!(formatter, "ScryptParams{{n:{},r:{},p:{}}}", self.n, self.r, self.p)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScryptDeriveError {
    #[error("scrypt: invalid scrypt params")]
    InvalidParams,

    #[error("scrypt: invalid derived length")]
    InvalidDerivedLength,
}

pub trait DeriveScryptKey {
    fn derive_scrypt_key<const N: usize>(
        &self,
        salt: &[u8],
        scrypt: ScryptParams,
    ) -> Result<Zeroizing<[u8; N]>, ScryptDeriveError>;
}

impl<T: AsRef<[u8]> + ?Sized> DeriveScryptKey for T {
    /// derived length must in [10, 64],
    /// n must be power of two and greater than 1,
    /// r and p must be positive, and `log2(n) < 16 * r`
    fn derive_scrypt_key<const N: usize>(
        &self,
        salt: &[u8],
        scrypt: ScryptParams,
    ) -> Result<Zeroizing<[u8; N]>, ScryptDeriveError> {
        if scrypt.n < 2 || scrypt.n.count_ones() != 1 {
            return Err(ScryptDeriveError::InvalidParams);
        }

        let log_n = u8::try_from(scrypt.n.ilog2()).map_err(|_| ScryptDeriveError::InvalidParams)?;
        let params = scrypt::Params::new(log_n, scrypt.r, scrypt.p, N)
            .map_err(|_err| ScryptDeriveError::InvalidParams)?;

        let mut derived = Zeroizing::new([0u8; N]);
        scrypt::scrypt(self.as_ref(), salt, &params, derived.as_mut_slice())
            .map_err(|_err| ScryptDeriveError::InvalidDerivedLength)?;

        Ok(derived)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const FAST: ScryptParams = ScryptParams { n: 16, r: 1, p: 1 };

    #[test]
    fn test_derive_is_deterministic() {
        let a = "password".derive_scrypt_key::<64>(b"salt", FAST).expect("derive should be ok");
        let b = "password".derive_scrypt_key::<64>(b"salt", FAST).expect("derive should be ok");
        assert_eq!(a.as_slice(), b.as_slice());

        let c = "passw0rd".derive_scrypt_key::<64>(b"salt", FAST).expect("derive should be ok");
        assert_ne!(a.as_slice(), c.as_slice());
    }

    #[test]
    fn test_short_password_is_accepted() {
        assert!("pw".derive_scrypt_key::<64>(b"salt", FAST).is_ok());
        assert!("".derive_scrypt_key::<32>(b"salt", FAST).is_ok());
    }

    #[test]
    fn test_invalid_params() {
        let not_power_of_two = ScryptParams { n: 15, r: 1, p: 1 };
        assert_eq!(
            "pw".derive_scrypt_key::<64>(b"salt", not_power_of_two).unwrap_err(),
            ScryptDeriveError::InvalidParams
        );

        let zero_r = ScryptParams { n: 16, r: 0, p: 1 };
        assert!("pw".derive_scrypt_key::<64>(b"salt", zero_r).is_err());

        let one = ScryptParams { n: 1, r: 1, p: 1 };
        assert!("pw".derive_scrypt_key::<64>(b"salt", one).is_err());
    }
}
