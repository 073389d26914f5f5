/*++

Licensed under the Apache-2.0 license.

File Name:

    hdcp22_cipher_dp.rs

Abstract:

    File contains the HDCP 2.2 Cipher (DisplayPort) register block model.

--*/

use std::{cell::RefCell, rc::Rc};

use hdcp22_cipher_dp_registers::*;
use hdcp22_emu_bus::{
    Bus, BusError, ReadOnlyRegister, ReadWriteRegister, Register, WriteOneToClearRegister,
};
use hdcp22_emu_types::{RvAddr, RvData, RvSize};
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

struct CipherDpRegs {
    /// Core identifier register
    ver_id: ReadOnlyRegister<ID::Register>,

    /// Core version register
    ver_version: ReadOnlyRegister<VERSION::Register>,

    /// Control register, also reachable through the SET and CLR aliases
    ctrl: ReadWriteRegister<CTRL::Register>,

    /// Latched status bits (IRQ, EVT); ENCRYPTED is derived on read
    sta: WriteOneToClearRegister<STA::Register>,

    ks: [ReadWriteRegister; 4],

    lc128: [ReadWriteRegister; 4],

    riv: [ReadWriteRegister; 2],

    input_ctr: [ReadOnlyRegister; 2],
}

impl CipherDpRegs {
    fn new(ver_id: u32, ver_version: u32) -> Self {
        Self {
            ver_id: ReadOnlyRegister::new(ver_id),
            ver_version: ReadOnlyRegister::new(ver_version),
            ctrl: ReadWriteRegister::new(0),
            sta: WriteOneToClearRegister::new(0),
            ks: std::array::from_fn(|_| ReadWriteRegister::new(0)),
            lc128: std::array::from_fn(|_| ReadWriteRegister::new(0)),
            riv: std::array::from_fn(|_| ReadWriteRegister::new(0)),
            input_ctr: std::array::from_fn(|_| ReadOnlyRegister::new(0)),
        }
    }

    fn read_status(&self, size: RvSize) -> Result<RvData, BusError> {
        let latched = self.sta.read(size)?;
        let encrypted = self.ctrl.reg.is_set(CTRL::RUN) && self.ctrl.reg.is_set(CTRL::ENCRYPT);
        Ok(if encrypted {
            latched | STA::ENCRYPTED::SET.value
        } else {
            latched
        })
    }

    fn write_ctrl_alias(&mut self, size: RvSize, set: bool, mask: RvData) -> Result<(), BusError> {
        if size != RvSize::Word {
            Err(BusError::StoreAccessFault)?
        }
        let ctrl = self.ctrl.reg.get();
        self.ctrl
            .reg
            .set(if set { ctrl | mask } else { ctrl & !mask });
        Ok(())
    }
}

fn word_index(addr: RvAddr, first: usize) -> usize {
    (addr as usize - first) / 4
}

/// Model of the HDCP 2.2 Cipher (DisplayPort) register block.
///
/// Clones share the same registers, so a test can keep a handle to the
/// peripheral after handing a clone to a bus.
#[derive(Clone)]
pub struct Hdcp22CipherDpPeriph {
    regs: Rc<RefCell<CipherDpRegs>>,
}

impl Hdcp22CipherDpPeriph {
    /// VER_ID Register Value ("HC" in the upper half-word)
    pub const VER_ID_VAL: RvData = VER_ID << SHIFT_16;

    /// VER_VERSION Register Value (1.0, revision 0)
    pub const VER_VERSION_VAL: RvData = 0x0100_0000;

    /// Create a model of a core reporting the expected identifier.
    pub fn new() -> Self {
        Self::with_ids(Self::VER_ID_VAL, Self::VER_VERSION_VAL)
    }

    /// Create a model with explicit VER_ID and VER_VERSION values.
    pub fn with_ids(ver_id: RvData, ver_version: RvData) -> Self {
        Self {
            regs: Rc::new(RefCell::new(CipherDpRegs::new(ver_id, ver_version))),
        }
    }

    /// Memory map size.
    pub fn mmap_size(&self) -> RvAddr {
        REG_BLOCK_SIZE as RvAddr
    }

    /// Latch an event. IRQ is raised too when interrupts are enabled.
    pub fn raise_event(&self) {
        let regs = self.regs.borrow();
        regs.sta.reg.modify(STA::EVT::SET);
        if regs.ctrl.reg.is_set(CTRL::IE) {
            regs.sta.reg.modify(STA::IRQ::SET);
        }
    }

    /// Drive the input counter registers.
    pub fn set_input_counter(&self, counter: u64) {
        let regs = self.regs.borrow();
        regs.input_ctr[0].reg.set(counter as u32);
        regs.input_ctr[1].reg.set((counter >> 32) as u32);
    }

    /// Current control register value.
    pub fn ctrl(&self) -> RvData {
        self.regs.borrow().ctrl.reg.get()
    }

    /// Ks words, KS_1 first.
    pub fn ks(&self) -> [RvData; 4] {
        let regs = self.regs.borrow();
        std::array::from_fn(|i| regs.ks[i].reg.get())
    }

    /// LC128 words, LC128_1 first.
    pub fn lc128(&self) -> [RvData; 4] {
        let regs = self.regs.borrow();
        std::array::from_fn(|i| regs.lc128[i].reg.get())
    }

    /// Riv words, RIV_1 first.
    pub fn riv(&self) -> [RvData; 2] {
        let regs = self.regs.borrow();
        std::array::from_fn(|i| regs.riv[i].reg.get())
    }
}

impl Default for Hdcp22CipherDpPeriph {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for Hdcp22CipherDpPeriph {
    /// Read data of specified size from given address
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the read
    /// * `addr` - Address to read from
    ///
    /// # Error
    ///
    /// * `BusError` - Exception with cause `BusError::LoadAccessFault` or `BusError::LoadAddrMisaligned`
    fn read(&mut self, size: RvSize, addr: RvAddr) -> Result<RvData, BusError> {
        if addr & 0x3 != 0 {
            Err(BusError::LoadAddrMisaligned)?
        }
        let regs = self.regs.borrow();
        match addr as usize {
            VER_ID_OFFSET => regs.ver_id.read(size),
            VER_VERSION_OFFSET => regs.ver_version.read(size),
            REG_CTRL_OFFSET | REG_CTRL_SET_OFFSET | REG_CTRL_CLR_OFFSET => regs.ctrl.read(size),
            REG_STA_OFFSET => regs.read_status(size),
            REG_KS_1_OFFSET..=REG_KS_4_OFFSET => {
                regs.ks[word_index(addr, REG_KS_1_OFFSET)].read(size)
            }
            REG_LC128_1_OFFSET..=REG_LC128_4_OFFSET => {
                regs.lc128[word_index(addr, REG_LC128_1_OFFSET)].read(size)
            }
            REG_RIV_1_OFFSET..=REG_RIV_2_OFFSET => {
                regs.riv[word_index(addr, REG_RIV_1_OFFSET)].read(size)
            }
            REG_INPUTCTR_1_OFFSET..=REG_INPUTCTR_2_OFFSET => {
                regs.input_ctr[word_index(addr, REG_INPUTCTR_1_OFFSET)].read(size)
            }
            _ => Err(BusError::LoadAccessFault),
        }
    }

    /// Write data of specified size to given address
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the write
    /// * `addr` - Address to write
    /// * `val` - Data to write
    ///
    /// # Error
    ///
    /// * `BusError` - Exception with cause `BusError::StoreAccessFault` or `BusError::StoreAddrMisaligned`
    fn write(&mut self, size: RvSize, addr: RvAddr, val: RvData) -> Result<(), BusError> {
        if addr & 0x3 != 0 {
            Err(BusError::StoreAddrMisaligned)?
        }
        let mut regs = self.regs.borrow_mut();
        match addr as usize {
            VER_ID_OFFSET => regs.ver_id.write(size, val),
            VER_VERSION_OFFSET => regs.ver_version.write(size, val),
            REG_CTRL_OFFSET => regs.ctrl.write(size, val),
            REG_CTRL_SET_OFFSET => regs.write_ctrl_alias(size, true, val),
            REG_CTRL_CLR_OFFSET => regs.write_ctrl_alias(size, false, val),
            REG_STA_OFFSET => regs.sta.write(size, val),
            REG_KS_1_OFFSET..=REG_KS_4_OFFSET => {
                regs.ks[word_index(addr, REG_KS_1_OFFSET)].write(size, val)
            }
            REG_LC128_1_OFFSET..=REG_LC128_4_OFFSET => {
                regs.lc128[word_index(addr, REG_LC128_1_OFFSET)].write(size, val)
            }
            REG_RIV_1_OFFSET..=REG_RIV_2_OFFSET => {
                regs.riv[word_index(addr, REG_RIV_1_OFFSET)].write(size, val)
            }
            REG_INPUTCTR_1_OFFSET..=REG_INPUTCTR_2_OFFSET => {
                regs.input_ctr[word_index(addr, REG_INPUTCTR_1_OFFSET)].write(size, val)
            }
            _ => Err(BusError::StoreAccessFault),
        }
    }
}
