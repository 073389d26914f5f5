/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the HDCP22 Emulator Types library.

--*/

use std::fmt;

/// Bus data width
pub type RvData = u32;

/// Bus address width
pub type RvAddr = u32;

/// Bus IO Operation size
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum RvSize {
    Byte = 1,
    HalfWord = 2,
    Word = 4,
    Invalid,
}

impl RvSize {
    /// Access size in bytes; `Invalid` is zero.
    pub const fn bytes(self) -> usize {
        match self {
            RvSize::Byte => 1,
            RvSize::HalfWord => 2,
            RvSize::Word => 4,
            RvSize::Invalid => 0,
        }
    }
}

impl From<RvSize> for usize {
    fn from(val: RvSize) -> usize {
        val.bytes()
    }
}

impl From<usize> for RvSize {
    fn from(val: usize) -> RvSize {
        match val {
            1 => RvSize::Byte,
            2 => RvSize::HalfWord,
            4 => RvSize::Word,
            _ => RvSize::Invalid,
        }
    }
}

impl fmt::Display for RvSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            RvSize::Byte => "Byte",
            RvSize::HalfWord => "HalfWord",
            RvSize::Word => "Word",
            RvSize::Invalid => "Invalid",
        };
        f.write_str(name)
    }
}
