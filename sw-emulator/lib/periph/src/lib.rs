/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the HDCP22 Emulator Peripheral library.

--*/

mod hdcp22_cipher_dp;

pub use hdcp22_cipher_dp::Hdcp22CipherDpPeriph;
