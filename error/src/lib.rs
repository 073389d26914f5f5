/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains the error type shared by the HDCP 2.2 cipher crates.

--*/
#![cfg_attr(not(feature = "std"), no_std)]
use core::convert::From;
use core::num::{NonZeroU32, TryFromIntError};

/// Cipher Error Type
///
/// The upper 16 bits identify the component, the lower 16 bits the error
/// within that component.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CipherError(pub NonZeroU32);

/// Macro to define error constants ensuring uniqueness
///
/// This macro takes a list of (name, value, doc) tuples and generates
/// constant definitions for each error code.
#[macro_export]
macro_rules! define_error_constants {
    ($(($name:ident, $value:expr, $doc:expr)),* $(,)?) => {
        $(
            #[doc = $doc]
            pub const $name: CipherError = CipherError::new_const($value);
        )*

        #[cfg(test)]
        /// Returns a vector of all defined error constants for testing uniqueness
        pub fn all_constants() -> Vec<(&'static str, u32)> {
            vec![
                $(
                    (stringify!($name), $value),
                )*
            ]
        }
    };
}

impl CipherError {
    /// Create a cipher error; only used from const contexts so a zero value
    /// fails the build instead of panicking at runtime. Use
    /// `CipherError::try_from()` to convert a runtime `u32`.
    const fn new_const(val: u32) -> Self {
        match NonZeroU32::new(val) {
            Some(val) => Self(val),
            None => panic!("CipherError cannot be 0"),
        }
    }

    /// Component portion of the error code.
    pub const fn component(&self) -> u16 {
        (self.0.get() >> 16) as u16
    }

    define_error_constants![
        (
            DRIVER_HDCP22_CIPHER_DP_INVALID_CORE_ID,
            0x0001_0001,
            "HDCP22 Cipher DP Error: core identifier mismatch"
        ),
        (
            DRIVER_HDCP22_CIPHER_DP_INVALID_LANE_COUNT,
            0x0001_0002,
            "HDCP22 Cipher DP Error: lane count must be 1, 2 or 4"
        ),
        (
            DRIVER_HDCP22_CIPHER_DP_CONFIG_NOT_FOUND,
            0x0001_0003,
            "HDCP22 Cipher DP Error: no configuration for device id"
        ),
    ];
}

impl From<core::num::NonZeroU32> for crate::CipherError {
    fn from(val: core::num::NonZeroU32) -> Self {
        crate::CipherError(val)
    }
}

impl From<CipherError> for core::num::NonZeroU32 {
    fn from(val: CipherError) -> Self {
        val.0
    }
}

impl From<CipherError> for u32 {
    fn from(val: CipherError) -> Self {
        core::num::NonZeroU32::from(val).get()
    }
}

impl TryFrom<u32> for CipherError {
    type Error = TryFromIntError;
    fn try_from(val: u32) -> Result<Self, TryFromIntError> {
        match NonZeroU32::try_from(val) {
            Ok(val) => Ok(CipherError(val)),
            Err(err) => Err(err),
        }
    }
}

pub type CipherResult<T> = Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_try_from() {
        assert!(CipherError::try_from(0).is_err());
        assert_eq!(
            Ok(CipherError::DRIVER_HDCP22_CIPHER_DP_INVALID_LANE_COUNT),
            CipherError::try_from(0x0001_0002)
        );
    }

    #[test]
    fn test_into_u32() {
        assert_eq!(
            u32::from(CipherError::DRIVER_HDCP22_CIPHER_DP_INVALID_CORE_ID),
            0x0001_0001
        );
        assert_eq!(
            CipherError::DRIVER_HDCP22_CIPHER_DP_CONFIG_NOT_FOUND.component(),
            0x0001
        );
    }

    #[test]
    fn test_error_constants_uniqueness() {
        let constants = CipherError::all_constants();
        let mut error_values = HashSet::new();
        let mut duplicates = Vec::new();

        for (name, value) in constants {
            if !error_values.insert(value) {
                duplicates.push((name, value));
            }
        }

        assert!(
            duplicates.is_empty(),
            "Found duplicate error codes: {:?}",
            duplicates
        );
    }
}
