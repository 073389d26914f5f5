/*++

Licensed under the Apache-2.0 license.

File Name:

    hdcp22_cipher_dp.rs

Abstract:

    File contains API for the HDCP 2.2 Cipher (DisplayPort) core.

--*/

use bitflags::bitflags;
use hdcp22_cipher_dp_registers::*;
use hdcp22_error::{CipherError, CipherResult};
use hdcp22_ureg::MmioMut;
use tock_registers::LocalRegisterCopy;

use crate::{CipherDpConfig, CipherDpRegs};

bitflags! {
    /// Status register flags
    pub struct CipherDpStatus: u32 {
        /// Interrupt pending
        const IRQ = REG_STA_IRQ_MASK;
        /// Event latched
        const EVT = REG_STA_EVT_MASK;
        /// Cipher is producing encrypted output
        const ENCRYPTED = REG_STA_ENCRYPTED_MASK;
    }
}

/// Core version
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CipherDpVersion {
    pub major: u8,
    pub minor: u8,
    pub revision: u16,
}

impl From<u32> for CipherDpVersion {
    fn from(value: u32) -> Self {
        let reg = LocalRegisterCopy::<u32, VERSION::Register>::new(value);
        Self {
            major: reg.read(VERSION::MAJOR) as u8,
            minor: reg.read(VERSION::MINOR) as u8,
            revision: reg.read(VERSION::REVISION) as u16,
        }
    }
}

/// HDCP 2.2 Cipher (DisplayPort) driver
pub struct Hdcp22CipherDp<TMmio: MmioMut> {
    config: CipherDpConfig,
    regs: CipherDpRegs<TMmio>,
}

impl<TMmio: MmioMut> Hdcp22CipherDp<TMmio> {
    /// Initialize the driver for the core described by `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Instance configuration
    /// * `mmio` - Bus the register block is reached through
    ///
    /// # Error
    ///
    /// * `DRIVER_HDCP22_CIPHER_DP_INVALID_CORE_ID` - VER_ID does not identify a cipher core
    ///
    /// # Safety
    ///
    /// `config.base_address` must be the address of a cipher register block
    /// on the bus served by `mmio`.
    pub unsafe fn new(config: &CipherDpConfig, mmio: TMmio) -> CipherResult<Self> {
        let regs = CipherDpRegs::new(config.base_address, mmio);

        let ver_id = LocalRegisterCopy::<u32, ID::Register>::new(regs.read_reg(VER_ID_OFFSET));
        if ver_id.read(ID::CORE_ID) != VER_ID {
            Err(CipherError::DRIVER_HDCP22_CIPHER_DP_INVALID_CORE_ID)?
        }

        Ok(Self {
            config: *config,
            regs,
        })
    }

    pub fn config(&self) -> &CipherDpConfig {
        &self.config
    }

    /// Raw register accessors of this instance.
    pub fn regs(&self) -> &CipherDpRegs<TMmio> {
        &self.regs
    }

    fn ctrl(&self) -> LocalRegisterCopy<u32, CTRL::Register> {
        LocalRegisterCopy::new(self.regs.get_control_reg())
    }

    fn set_ctrl_bits(&self, mask: u32) {
        self.regs.write_reg(REG_CTRL_SET_OFFSET, mask);
    }

    fn clr_ctrl_bits(&self, mask: u32) {
        self.regs.write_reg(REG_CTRL_CLR_OFFSET, mask);
    }

    fn update_ctrl_bits(&self, mask: u32, set: bool) {
        if set {
            self.set_ctrl_bits(mask)
        } else {
            self.clr_ctrl_bits(mask)
        }
    }

    /// Start the cipher.
    pub fn enable(&self) {
        self.set_ctrl_bits(REG_CTRL_RUN_MASK);
    }

    /// Stop the cipher.
    pub fn disable(&self) {
        self.clr_ctrl_bits(REG_CTRL_RUN_MASK);
    }

    pub fn is_enabled(&self) -> bool {
        self.ctrl().is_set(CTRL::RUN)
    }

    /// Operate as a transmitter (encrypting) cipher.
    pub fn set_tx_mode(&self) {
        self.set_ctrl_bits(REG_CTRL_MODE_MASK);
    }

    /// Operate as a receiver (decrypting) cipher.
    pub fn set_rx_mode(&self) {
        self.clr_ctrl_bits(REG_CTRL_MODE_MASK);
    }

    pub fn is_tx_mode(&self) -> bool {
        self.ctrl().matches_all(CTRL::MODE::Tx)
    }

    pub fn enable_tx_encryption(&self) {
        self.set_ctrl_bits(REG_CTRL_ENCRYPT_MASK);
    }

    pub fn disable_tx_encryption(&self) {
        self.clr_ctrl_bits(REG_CTRL_ENCRYPT_MASK);
    }

    pub fn is_encrypted(&self) -> bool {
        self.status().contains(CipherDpStatus::ENCRYPTED)
    }

    /// Enable or disable noise injection.
    pub fn noise(&self, set: bool) {
        self.update_ctrl_bits(REG_CTRL_NOISE_MASK, set);
    }

    /// Enable or disable blank screen output.
    pub fn blank(&self, set: bool) {
        self.update_ctrl_bits(REG_CTRL_BLANK_MASK, set);
    }

    pub fn enable_interrupts(&self) {
        self.set_ctrl_bits(REG_CTRL_IE_MASK);
    }

    pub fn disable_interrupts(&self) {
        self.clr_ctrl_bits(REG_CTRL_IE_MASK);
    }

    /// Program the number of active DisplayPort lanes.
    ///
    /// The field is cleared through the CLR alias and the new value is set
    /// through the SET alias, so no other control bit is written.
    ///
    /// # Error
    ///
    /// * `DRIVER_HDCP22_CIPHER_DP_INVALID_LANE_COUNT` - `lane_count` is not 1, 2 or 4
    pub fn set_lane_count(&self, lane_count: u8) -> CipherResult<()> {
        let field = match lane_count {
            1 => CTRL::LANE_CNT::One,
            2 => CTRL::LANE_CNT::Two,
            4 => CTRL::LANE_CNT::Four,
            _ => Err(CipherError::DRIVER_HDCP22_CIPHER_DP_INVALID_LANE_COUNT)?,
        };
        self.clr_ctrl_bits(REG_CTRL_LANE_CNT_MASK);
        self.set_ctrl_bits(field.value);
        Ok(())
    }

    pub fn lane_count(&self) -> u8 {
        self.ctrl().read(CTRL::LANE_CNT) as u8
    }

    /// Load the session key Ks.
    pub fn set_ks(&self, ks: &[u8; 16]) {
        self.write_be_words(REG_KS_1_OFFSET, ks);
    }

    /// Load the global constant LC128.
    pub fn set_lc128(&self, lc128: &[u8; 16]) {
        self.write_be_words(REG_LC128_1_OFFSET, lc128);
    }

    /// Load the random IV Riv.
    pub fn set_riv(&self, riv: &[u8; 8]) {
        self.write_be_words(REG_RIV_1_OFFSET, riv);
    }

    // Byte 0 is the most significant byte and lands in the highest register.
    fn write_be_words(&self, first_offset: usize, bytes: &[u8]) {
        let words = bytes.len() / 4;
        for (i, chunk) in bytes.chunks_exact(4).enumerate() {
            let value = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            self.regs.write_reg(first_offset + (words - 1 - i) * 4, value);
        }
    }

    /// Number of input blocks processed by the cipher.
    pub fn input_counter(&self) -> u64 {
        let low = self.regs.read_reg(REG_INPUTCTR_1_OFFSET);
        let high = self.regs.read_reg(REG_INPUTCTR_2_OFFSET);
        (u64::from(high) << 32) | u64::from(low)
    }

    pub fn status(&self) -> CipherDpStatus {
        CipherDpStatus::from_bits_truncate(self.regs.get_status_reg())
    }

    /// Acknowledge a latched event and its interrupt.
    pub fn clear_event(&self) {
        self.regs
            .write_reg(REG_STA_OFFSET, (CipherDpStatus::EVT | CipherDpStatus::IRQ).bits());
    }

    pub fn version(&self) -> CipherDpVersion {
        self.regs.read_reg(VER_VERSION_OFFSET).into()
    }
}
