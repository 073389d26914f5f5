/*++

Licensed under the Apache-2.0 license.

File Name:

    config.rs

Abstract:

    File contains the per-instance configuration of the cipher driver.

--*/

use hdcp22_error::{CipherError, CipherResult};

/// Hardware configuration of one cipher instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CipherDpConfig {
    /// Unique device identifier
    pub device_id: u16,

    /// Base address of the register block
    pub base_address: usize,
}

/// Find the configuration for `device_id` in `table`.
///
/// # Error
///
/// * `DRIVER_HDCP22_CIPHER_DP_CONFIG_NOT_FOUND` - No entry has `device_id`
pub fn lookup_config(table: &[CipherDpConfig], device_id: u16) -> CipherResult<&CipherDpConfig> {
    table
        .iter()
        .find(|config| config.device_id == device_id)
        .ok_or(CipherError::DRIVER_HDCP22_CIPHER_DP_CONFIG_NOT_FOUND)
}
