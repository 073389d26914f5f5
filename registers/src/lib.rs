/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains the register map of the HDCP 2.2 Cipher for DisplayPort.

--*/

#![no_std]

use tock_registers::register_bitfields;

/// Version bank base
pub const VER_BASE: usize = 0x00;

/// Core identifier register
pub const VER_ID_OFFSET: usize = VER_BASE;

/// Core version register
pub const VER_VERSION_OFFSET: usize = VER_BASE + 0x04;

/// Register bank base
pub const REG_BASE: usize = 0x40;

/// Control register
pub const REG_CTRL_OFFSET: usize = REG_BASE;

/// Control register set alias; writing a mask sets those bits
pub const REG_CTRL_SET_OFFSET: usize = REG_BASE + 0x04;

/// Control register clear alias; writing a mask clears those bits
pub const REG_CTRL_CLR_OFFSET: usize = REG_BASE + 0x08;

/// Status register
pub const REG_STA_OFFSET: usize = REG_BASE + 0x0C;

/// Session key Ks, least significant word first
pub const REG_KS_1_OFFSET: usize = REG_BASE + 0x10;
pub const REG_KS_2_OFFSET: usize = REG_BASE + 0x14;
pub const REG_KS_3_OFFSET: usize = REG_BASE + 0x18;
pub const REG_KS_4_OFFSET: usize = REG_BASE + 0x1C;

/// Global constant LC128, least significant word first
pub const REG_LC128_1_OFFSET: usize = REG_BASE + 0x20;
pub const REG_LC128_2_OFFSET: usize = REG_BASE + 0x24;
pub const REG_LC128_3_OFFSET: usize = REG_BASE + 0x28;
pub const REG_LC128_4_OFFSET: usize = REG_BASE + 0x2C;

/// Random IV Riv, least significant word first
pub const REG_RIV_1_OFFSET: usize = REG_BASE + 0x30;
pub const REG_RIV_2_OFFSET: usize = REG_BASE + 0x34;

/// Input counter, low word then high word
pub const REG_INPUTCTR_1_OFFSET: usize = REG_BASE + 0x38;
pub const REG_INPUTCTR_2_OFFSET: usize = REG_BASE + 0x3C;

/// Size of the register block in bytes
pub const REG_BLOCK_SIZE: usize = REG_BASE + 0x40;

// Control register masks
pub const REG_CTRL_RUN_MASK: u32 = 1 << 0;
pub const REG_CTRL_IE_MASK: u32 = 1 << 1;
pub const REG_CTRL_MODE_MASK: u32 = 1 << 2;
pub const REG_CTRL_ENCRYPT_MASK: u32 = 1 << 3;
pub const REG_CTRL_BLANK_MASK: u32 = 1 << 4;
pub const REG_CTRL_NOISE_MASK: u32 = 1 << 5;
pub const REG_CTRL_LANE_CNT_BIT_POS: u32 = 6;
pub const REG_CTRL_LANE_CNT_MASK: u32 = 0xF << REG_CTRL_LANE_CNT_BIT_POS;

// Status register masks
pub const REG_STA_IRQ_MASK: u32 = 1 << 0;
pub const REG_STA_EVT_MASK: u32 = 1 << 1;
pub const REG_STA_ENCRYPTED_MASK: u32 = 1 << 2;

/// Expected value of `VER_ID >> SHIFT_16`
pub const VER_ID: u32 = 0x4843;

pub const SHIFT_16: u32 = 16;
pub const MASK_16: u32 = 0xFFFF;

register_bitfields! [
    u32,

    /// Core Identifier Fields
    pub ID [
        CORE_ID OFFSET(16) NUMBITS(16) [],
    ],

    /// Core Version Fields
    pub VERSION [
        REVISION OFFSET(0) NUMBITS(16) [],
        MINOR OFFSET(16) NUMBITS(8) [],
        MAJOR OFFSET(24) NUMBITS(8) [],
    ],

    /// Control Register Fields
    pub CTRL [
        RUN OFFSET(0) NUMBITS(1) [],
        IE OFFSET(1) NUMBITS(1) [],
        MODE OFFSET(2) NUMBITS(1) [
            Rx = 0,
            Tx = 1,
        ],
        ENCRYPT OFFSET(3) NUMBITS(1) [],
        BLANK OFFSET(4) NUMBITS(1) [],
        NOISE OFFSET(5) NUMBITS(1) [],
        LANE_CNT OFFSET(6) NUMBITS(4) [
            One = 1,
            Two = 2,
            Four = 4,
        ],
    ],

    /// Status Register Fields
    pub STA [
        IRQ OFFSET(0) NUMBITS(1) [],
        EVT OFFSET(1) NUMBITS(1) [],
        ENCRYPTED OFFSET(2) NUMBITS(1) [],
    ],
];
