/*++

Licensed under the Apache-2.0 license.

File Name:

    register.rs

Abstract:

    File contains the 32-bit register cells used by emulated peripherals.

--*/

use crate::BusError;
use hdcp22_emu_types::{RvData, RvSize};
use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::InMemoryRegister;
use tock_registers::RegisterLongName;

pub trait Register {
    /// Read data of specified size
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the read
    ///
    /// # Error
    ///
    /// * `BusError` - Exception with cause `BusError::LoadAccessFault`
    fn read(&self, size: RvSize) -> Result<RvData, BusError>;

    /// Write data of specified size
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the write
    /// * `val` - Data to write
    ///
    /// # Error
    ///
    /// * `BusError` - Exception with cause `BusError::StoreAccessFault`
    fn write(&mut self, size: RvSize, val: RvData) -> Result<(), BusError>;
}

fn check_word(size: RvSize, err: BusError) -> Result<(), BusError> {
    if size != RvSize::Word {
        Err(err)?
    }
    Ok(())
}

/// Read Write Register
pub struct ReadWriteRegister<R: RegisterLongName = ()> {
    /// Register
    pub reg: InMemoryRegister<u32, R>,
}

impl<R: RegisterLongName> ReadWriteRegister<R> {
    /// Create an instance of Read Write Register
    pub fn new(val: u32) -> Self {
        Self {
            reg: InMemoryRegister::new(val),
        }
    }
}

impl<R: RegisterLongName> Register for ReadWriteRegister<R> {
    fn read(&self, size: RvSize) -> Result<RvData, BusError> {
        check_word(size, BusError::LoadAccessFault)?;
        Ok(self.reg.get())
    }

    fn write(&mut self, size: RvSize, val: RvData) -> Result<(), BusError> {
        check_word(size, BusError::StoreAccessFault)?;
        self.reg.set(val);
        Ok(())
    }
}

/// Read Only Register
///
/// The value is driven by the peripheral model through `reg`; bus writes
/// fault.
pub struct ReadOnlyRegister<R: RegisterLongName = ()> {
    /// Register
    pub reg: InMemoryRegister<u32, R>,
}

impl<R: RegisterLongName> ReadOnlyRegister<R> {
    /// Create an instance of Read Only Register
    pub fn new(val: u32) -> Self {
        Self {
            reg: InMemoryRegister::new(val),
        }
    }
}

impl<R: RegisterLongName> Register for ReadOnlyRegister<R> {
    fn read(&self, size: RvSize) -> Result<RvData, BusError> {
        check_word(size, BusError::LoadAccessFault)?;
        Ok(self.reg.get())
    }

    fn write(&mut self, _size: RvSize, _val: RvData) -> Result<(), BusError> {
        Err(BusError::StoreAccessFault)
    }
}

/// Write-One-To-Clear Register
///
/// Bus writes clear every bit that is set in the written value. Bits are
/// set by the peripheral model through `reg`.
pub struct WriteOneToClearRegister<R: RegisterLongName = ()> {
    /// Register
    pub reg: InMemoryRegister<u32, R>,
}

impl<R: RegisterLongName> WriteOneToClearRegister<R> {
    /// Create an instance of Write-One-To-Clear Register
    pub fn new(val: u32) -> Self {
        Self {
            reg: InMemoryRegister::new(val),
        }
    }
}

impl<R: RegisterLongName> Register for WriteOneToClearRegister<R> {
    fn read(&self, size: RvSize) -> Result<RvData, BusError> {
        check_word(size, BusError::LoadAccessFault)?;
        Ok(self.reg.get())
    }

    fn write(&mut self, size: RvSize, val: RvData) -> Result<(), BusError> {
        check_word(size, BusError::StoreAccessFault)?;
        self.reg.set(self.reg.get() & !val);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tock_registers::register_bitfields;

    register_bitfields! [
        u32,

        FLAGS [
            A OFFSET(0) NUMBITS(1) [],
            B OFFSET(1) NUMBITS(1) [],
        ],
    ];

    #[test]
    fn test_read_write_register() {
        let mut reg = ReadWriteRegister::<()>::new(0);
        assert_eq!(reg.write(RvSize::Word, 0xdead_beef), Ok(()));
        assert_eq!(reg.read(RvSize::Word), Ok(0xdead_beef));
        assert_eq!(
            reg.write(RvSize::Byte, 0xff),
            Err(BusError::StoreAccessFault)
        );
        assert_eq!(
            reg.read(RvSize::HalfWord),
            Err(BusError::LoadAccessFault)
        );
        assert_eq!(reg.read(RvSize::Word), Ok(0xdead_beef));
    }

    #[test]
    fn test_read_only_register() {
        let mut reg = ReadOnlyRegister::<()>::new(0x4843_0000);
        assert_eq!(reg.read(RvSize::Word), Ok(0x4843_0000));
        assert_eq!(reg.write(RvSize::Word, 0), Err(BusError::StoreAccessFault));
        assert_eq!(reg.read(RvSize::Word), Ok(0x4843_0000));
    }

    #[test]
    fn test_write_one_to_clear_register() {
        let mut reg = WriteOneToClearRegister::<FLAGS::Register>::new(0);
        reg.reg.write(FLAGS::A::SET + FLAGS::B::SET);
        assert_eq!(reg.read(RvSize::Word), Ok(0b11));

        assert_eq!(reg.write(RvSize::Word, 0b01), Ok(()));
        assert!(!reg.reg.is_set(FLAGS::A));
        assert!(reg.reg.is_set(FLAGS::B));

        // Writing zeros leaves the bits alone
        assert_eq!(reg.write(RvSize::Word, 0), Ok(()));
        assert_eq!(reg.read(RvSize::Word), Ok(0b10));
    }
}
