/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the HDCP 2.2 Cipher (DisplayPort) driver.

--*/

#![cfg_attr(not(test), no_std)]

mod config;
mod hdcp22_cipher_dp;
mod hw;

pub use config::{lookup_config, CipherDpConfig};
pub use hdcp22_cipher_dp::{CipherDpStatus, CipherDpVersion, Hdcp22CipherDp};
pub use hdcp22_error::{CipherError, CipherResult};
pub use hw::CipherDpRegs;
