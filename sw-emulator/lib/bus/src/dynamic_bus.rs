/*++

Licensed under the Apache-2.0 license.

File Name:

    dynamic_bus.rs

Abstract:

    File contains DynamicBus type.

--*/

use std::{io::ErrorKind, ops::RangeInclusive};

use crate::{Bus, BusError};
use hdcp22_emu_types::{RvAddr, RvData, RvSize};

struct MappedDevice {
    name: String,
    mmap_range: RangeInclusive<RvAddr>,
    bus: Box<dyn Bus>,
}

/// A bus that places devices at absolute address windows and forwards each
/// access to the owning device with a window-relative address.
#[derive(Default)]
pub struct DynamicBus {
    /// Devices sorted by window start
    devs: Vec<MappedDevice>,
}

impl DynamicBus {
    pub fn new() -> DynamicBus {
        Self::default()
    }

    /// Attach a device at the specified address window
    ///
    /// # Arguments
    ///
    /// * `name` - Device name, used in error messages
    /// * `mmap_range` - Absolute addresses claimed by the device
    /// * `bus` - Device to attach
    ///
    /// # Error
    ///
    /// * `ErrorKind::AddrInUse` - The window overlaps an attached device
    pub fn attach_dev(
        &mut self,
        name: &str,
        mmap_range: RangeInclusive<RvAddr>,
        bus: Box<dyn Bus>,
    ) -> std::io::Result<()> {
        let mut index = 0;
        for cur_dev in self.devs.iter() {
            let cur = &cur_dev.mmap_range;
            if mmap_range.end() >= cur.start() && mmap_range.start() <= cur.end() {
                return Err(std::io::Error::new(
                    ErrorKind::AddrInUse,
                    format!(
                        "Address space for device {} ({:#010x}-{:#010x}) collides with device {} ({:#010x}-{:#010x})",
                        name,
                        mmap_range.start(),
                        mmap_range.end(),
                        cur_dev.name,
                        cur.start(),
                        cur.end()
                    ),
                ));
            }
            if mmap_range.start() < cur.start() {
                break;
            }
            index += 1;
        }
        self.devs.insert(
            index,
            MappedDevice {
                name: name.into(),
                mmap_range,
                bus,
            },
        );
        Ok(())
    }

    fn find_dev(&mut self, addr: RvAddr) -> Option<&mut MappedDevice> {
        self.devs.iter_mut().find(|d| d.mmap_range.contains(&addr))
    }
}

impl Bus for DynamicBus {
    fn read(&mut self, size: RvSize, addr: RvAddr) -> Result<RvData, BusError> {
        match self.find_dev(addr) {
            Some(dev) => dev.bus.read(size, addr - dev.mmap_range.start()),
            None => Err(BusError::LoadAccessFault),
        }
    }

    fn write(&mut self, size: RvSize, addr: RvAddr, val: RvData) -> Result<(), BusError> {
        match self.find_dev(addr) {
            Some(dev) => dev.bus.write(size, addr - dev.mmap_range.start(), val),
            None => Err(BusError::StoreAccessFault),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::FakeBus;

    #[test]
    fn test_dynamic_bus_forwards_relative_address() {
        let mut bus = DynamicBus::new();
        let mut cipher = FakeBus::new();
        cipher.read_result = Ok(0x4843_0100);
        let log = cipher.log.clone();
        bus.attach_dev("CIPHER", 0xa000_0000..=0xa000_007f, Box::new(cipher))
            .unwrap();

        assert_eq!(bus.read(RvSize::Word, 0xa000_0000), Ok(0x4843_0100));
        assert_eq!(bus.write(RvSize::Word, 0xa000_0044, 0x1), Ok(()));
        assert_eq!(
            log.take(),
            "read(RvSize::Word, 0x0)\nwrite(RvSize::Word, 0x44, 0x1)\n"
        );
    }

    #[test]
    fn test_dynamic_bus_unmapped() {
        let mut bus = DynamicBus::new();
        bus.attach_dev("CIPHER", 0xa000_0000..=0xa000_007f, Box::new(FakeBus::new()))
            .unwrap();
        assert_eq!(
            bus.read(RvSize::Word, 0xa000_0080),
            Err(BusError::LoadAccessFault)
        );
        assert_eq!(
            bus.write(RvSize::Word, 0x9fff_fffc, 0),
            Err(BusError::StoreAccessFault)
        );
    }

    fn is_sorted<T>(slice: &[T]) -> bool
    where
        T: Ord,
    {
        slice.windows(2).all(|s| s[0] <= s[1])
    }

    #[test]
    fn test_attach_dev() {
        let mut bus = DynamicBus::new();
        bus.attach_dev("CIPHER1", 0x100..=0x17f, Box::new(FakeBus::new()))
            .unwrap();
        bus.attach_dev("CIPHER0", 0x0..=0x7f, Box::new(FakeBus::new()))
            .unwrap();
        bus.attach_dev("CIPHER2", 0x200..=0x27f, Box::new(FakeBus::new()))
            .unwrap();

        let err = bus
            .attach_dev("CIPHER3", 0x170..=0x1ef, Box::new(FakeBus::new()))
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::AddrInUse);
        assert_eq!(err.to_string(), "Address space for device CIPHER3 (0x00000170-0x000001ef) collides with device CIPHER1 (0x00000100-0x0000017f)");

        let addrs: Vec<RvAddr> = bus
            .devs
            .iter()
            .flat_map(|d| [*d.mmap_range.start(), *d.mmap_range.end()])
            .collect();
        assert_eq!(addrs.len(), 6);
        assert!(is_sorted(&addrs));
    }
}
