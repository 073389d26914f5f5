/*++

Licensed under the Apache-2.0 license.

File Name:

    fake_bus.rs

Abstract:

    File contains code for a fake implementation of the Bus trait.

--*/
use hdcp22_emu_types::{RvAddr, RvData, RvSize};

use crate::{testing::Log, Bus, BusError};
use std::collections::VecDeque;
use std::fmt::Write;

/// A Bus implementation that logs all calls, and allows the user to script
/// the return values of the methods.
///
/// Reads pop from `read_queue` first and fall back to `read_result` once the
/// queue is empty.
///
/// # Example
///
/// ```
/// use hdcp22_emu_bus::{Bus, testing::FakeBus};
/// use hdcp22_emu_types::RvSize;
///
/// let mut fake_bus = FakeBus::new();
/// fake_bus.read_queue.push_back(Ok(0x4843_0000));
/// fake_bus.read_result = Ok(35);
/// assert_eq!(fake_bus.read(RvSize::Word, 0xa000_0000), Ok(0x4843_0000));
/// assert_eq!(fake_bus.read(RvSize::Word, 0xa000_0040), Ok(35));
/// assert_eq!(
///     "read(RvSize::Word, 0xa0000000)\nread(RvSize::Word, 0xa0000040)\n",
///     fake_bus.log.take()
/// );
/// ```
pub struct FakeBus {
    pub log: Log,
    pub read_queue: VecDeque<Result<RvData, BusError>>,
    pub read_result: Result<RvData, BusError>,
    pub write_result: Result<(), BusError>,
}
impl FakeBus {
    pub fn new() -> Self {
        Self {
            log: Log::new(),
            read_queue: VecDeque::new(),
            read_result: Ok(0),
            write_result: Ok(()),
        }
    }
}
impl Default for FakeBus {
    fn default() -> Self {
        Self::new()
    }
}
impl Bus for FakeBus {
    fn read(&mut self, size: RvSize, addr: RvAddr) -> Result<RvData, BusError> {
        writeln!(self.log.w(), "read(RvSize::{size:?}, {addr:#x})").unwrap();
        self.read_queue.pop_front().unwrap_or(self.read_result)
    }

    fn write(&mut self, size: RvSize, addr: RvAddr, val: RvData) -> Result<(), BusError> {
        writeln!(self.log.w(), "write(RvSize::{size:?}, {addr:#x}, {val:#x})").unwrap();
        self.write_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_bus() {
        let mut fake_bus = FakeBus::new();

        assert_eq!(fake_bus.read(RvSize::Word, 0xa000_004c), Ok(0));
        assert_eq!("read(RvSize::Word, 0xa000004c)\n", fake_bus.log.take());

        assert_eq!(fake_bus.write(RvSize::Word, 0xa000_0044, 0x9), Ok(()));
        assert_eq!(
            "write(RvSize::Word, 0xa0000044, 0x9)\n",
            fake_bus.log.take()
        );

        fake_bus.read_result = Err(BusError::LoadAccessFault);
        assert_eq!(
            fake_bus.read(RvSize::Byte, 0x12345678),
            Err(BusError::LoadAccessFault)
        );
        assert_eq!("read(RvSize::Byte, 0x12345678)\n", fake_bus.log.take());

        fake_bus.write_result = Err(BusError::StoreAddrMisaligned);
        assert_eq!(
            fake_bus.write(RvSize::Word, 0x131, 0x1),
            Err(BusError::StoreAddrMisaligned)
        );
        assert_eq!("write(RvSize::Word, 0x131, 0x1)\n", fake_bus.log.take());
    }

    #[test]
    fn test_fake_bus_read_queue() {
        let mut fake_bus = FakeBus::new();
        fake_bus.read_queue.push_back(Ok(1));
        fake_bus.read_queue.push_back(Err(BusError::LoadAddrMisaligned));
        fake_bus.read_result = Ok(3);

        assert_eq!(fake_bus.read(RvSize::Word, 0), Ok(1));
        assert_eq!(
            fake_bus.read(RvSize::Word, 2),
            Err(BusError::LoadAddrMisaligned)
        );
        assert_eq!(fake_bus.read(RvSize::Word, 4), Ok(3));
        assert_eq!(fake_bus.read(RvSize::Word, 4), Ok(3));
    }
}
