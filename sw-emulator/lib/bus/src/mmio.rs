// Licensed under the Apache-2.0 license

use std::cell::RefCell;

use hdcp22_emu_types::RvSize;
use hdcp22_ureg::{Uint, UintType};

use crate::Bus;

const fn rvsize<T: Uint>() -> RvSize {
    match T::TYPE {
        UintType::U8 => RvSize::Byte,
        UintType::U16 => RvSize::HalfWord,
        UintType::U32 => RvSize::Word,
    }
}

unsafe fn transmute_to_u32<T: Uint>(src: &T) -> u32 {
    match T::TYPE {
        UintType::U8 => std::mem::transmute_copy::<T, u8>(src).into(),
        UintType::U16 => std::mem::transmute_copy::<T, u16>(src).into(),
        UintType::U32 => std::mem::transmute_copy::<T, u32>(src),
    }
}

unsafe fn transmute_from_u32<T: Uint>(val: u32) -> T {
    match T::TYPE {
        UintType::U8 => std::mem::transmute_copy::<u8, T>(&(val as u8)),
        UintType::U16 => std::mem::transmute_copy::<u16, T>(&(val as u16)),
        UintType::U32 => std::mem::transmute_copy::<u32, T>(&val),
    }
}

/// An MMIO implementation that reads and writes to a `hdcp22_emu_bus::Bus`.
///
/// Pointer values are used as bus addresses and are never dereferenced.
pub struct BusMmio<TBus: Bus> {
    bus: RefCell<TBus>,
}
impl<TBus: Bus> BusMmio<TBus> {
    pub fn new(bus: TBus) -> Self {
        Self {
            bus: RefCell::new(bus),
        }
    }
    pub fn into_inner(self) -> TBus {
        self.bus.into_inner()
    }
    /// Runs `f` with exclusive access to the underlying bus.
    pub fn with_bus<R>(&self, f: impl FnOnce(&mut TBus) -> R) -> R {
        f(&mut self.bus.borrow_mut())
    }
}
impl<TBus: Bus> hdcp22_ureg::Mmio for BusMmio<TBus> {
    /// Loads from address `src` on the bus and returns the value.
    ///
    /// # Panics
    ///
    /// This function panics if the bus faults.
    ///
    /// # Safety
    ///
    /// As the pointer isn't read from, this Mmio implementation isn't actually
    /// unsafe.
    unsafe fn read_volatile<T: Uint>(&self, src: *const T) -> T {
        let addr = src as usize as u32;
        let val_u32 = match self.bus.borrow_mut().read(rvsize::<T>(), addr) {
            Ok(val) => val,
            Err(err) => panic!("BusMmio: read of {addr:#010x} faulted: {err:?}"),
        };
        transmute_from_u32(val_u32)
    }
}

impl<TBus: Bus> hdcp22_ureg::MmioMut for BusMmio<TBus> {
    /// Stores `src` to address `dst` on the bus.
    ///
    /// # Panics
    ///
    /// This function panics if the bus faults.
    ///
    /// # Safety
    ///
    /// As the pointer isn't written to, this Mmio implementation isn't actually
    /// unsafe.
    unsafe fn write_volatile<T: Uint>(&self, dst: *mut T, src: T) {
        let addr = dst as usize as u32;
        let val = transmute_to_u32(&src);
        if let Err(err) = self.bus.borrow_mut().write(rvsize::<T>(), addr, val) {
            panic!("BusMmio: write of {val:#x} to {addr:#010x} faulted: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::FakeBus;
    use crate::BusError;
    use hdcp22_ureg::{Mmio, MmioMut};

    use super::*;

    #[test]
    fn test_bus_mmio() {
        let mut fake_bus = FakeBus::new();
        fake_bus.read_result = Ok(0x3abc_9321);
        let log = fake_bus.log.clone();
        let mmio = BusMmio::new(fake_bus);
        unsafe {
            mmio.write_volatile(0xa000_0044 as *mut u32, 0x0000_0001);
            mmio.write_volatile(0xa000_0008 as *mut u16, 0x39af);
            mmio.write_volatile(0xa000_000a as *mut u8, 0xf3);

            assert_eq!(mmio.read_volatile(0xa000_0040 as *const u32), 0x3abc_9321);
            assert_eq!(mmio.read_volatile(0xa000_0040 as *const u16), 0x9321);
            assert_eq!(mmio.read_volatile(0xa000_0040 as *const u8), 0x21);
        }
        assert_eq!(
            log.take(),
            "write(RvSize::Word, 0xa0000044, 0x1)\n\
             write(RvSize::HalfWord, 0xa0000008, 0x39af)\n\
             write(RvSize::Byte, 0xa000000a, 0xf3)\n\
             read(RvSize::Word, 0xa0000040)\n\
             read(RvSize::HalfWord, 0xa0000040)\n\
             read(RvSize::Byte, 0xa0000040)\n"
        );
    }

    #[test]
    fn test_bus_mmio_with_bus() {
        let mmio = BusMmio::new(FakeBus::new());
        mmio.with_bus(|bus| bus.read_result = Ok(7));
        assert_eq!(unsafe { mmio.read_volatile(0x10 as *const u32) }, 7);
        assert_eq!(mmio.into_inner().log.take(), "read(RvSize::Word, 0x10)\n");
    }

    #[test]
    #[should_panic(expected = "faulted")]
    fn test_bus_mmio_read_fault_panics() {
        let mut fake_bus = FakeBus::new();
        fake_bus.read_result = Err(BusError::LoadAccessFault);
        let mmio = BusMmio::new(fake_bus);
        unsafe {
            mmio.read_volatile(0x4 as *const u32);
        }
    }
}
