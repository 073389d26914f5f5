/*++

Licensed under the Apache-2.0 license.

File Name:

    hw.rs

Abstract:

    File contains the register accessors of the HDCP 2.2 Cipher (DisplayPort).

--*/

use hdcp22_cipher_dp_registers::{REG_BLOCK_SIZE, REG_CTRL_OFFSET, REG_STA_OFFSET};
use hdcp22_ureg::{Mmio, MmioMut};

/// Handle to one cipher register block.
///
/// Every access goes through `TMmio` at `base_address + offset`. Accesses
/// are volatile and issued in program order.
pub struct CipherDpRegs<TMmio: Mmio> {
    base_address: usize,
    mmio: TMmio,
}

impl<TMmio: Mmio> CipherDpRegs<TMmio> {
    /// Create a handle for the register block at `base_address`.
    ///
    /// # Safety
    ///
    /// `base_address` must be the address of a cipher register block on
    /// the bus served by `mmio`, and nothing else may treat that region as
    /// ordinary memory.
    pub unsafe fn new(base_address: usize, mmio: TMmio) -> Self {
        Self { base_address, mmio }
    }

    pub fn base_address(&self) -> usize {
        self.base_address
    }

    pub fn mmio(&self) -> &TMmio {
        &self.mmio
    }

    /// Load the 32-bit word at absolute address `addr`.
    ///
    /// # Safety
    ///
    /// `addr` must be a readable, 4-byte aligned register address.
    #[inline(always)]
    pub unsafe fn in32(&self, addr: usize) -> u32 {
        self.mmio.read_volatile(addr as *const u32)
    }

    /// Read the register at `offset` from the base address.
    #[inline(always)]
    pub fn read_reg(&self, offset: usize) -> u32 {
        debug_assert!(offset < REG_BLOCK_SIZE && offset % 4 == 0);
        unsafe { self.in32(self.base_address + offset) }
    }

    #[inline(always)]
    pub fn get_control_reg(&self) -> u32 {
        self.read_reg(REG_CTRL_OFFSET)
    }

    #[inline(always)]
    pub fn get_status_reg(&self) -> u32 {
        self.read_reg(REG_STA_OFFSET)
    }
}

impl<TMmio: MmioMut> CipherDpRegs<TMmio> {
    /// Store `value` to absolute address `addr`.
    ///
    /// # Safety
    ///
    /// `addr` must be a writable, 4-byte aligned register address.
    #[inline(always)]
    pub unsafe fn out32(&self, addr: usize, value: u32) {
        self.mmio.write_volatile(addr as *mut u32, value)
    }

    /// Write `value` to the register at `offset` from the base address.
    #[inline(always)]
    pub fn write_reg(&self, offset: usize, value: u32) {
        debug_assert!(offset < REG_BLOCK_SIZE && offset % 4 == 0);
        unsafe { self.out32(self.base_address + offset, value) }
    }
}
