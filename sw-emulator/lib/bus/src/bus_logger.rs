// Licensed under the Apache-2.0 license

use std::fmt::Write;

use crate::testing::Log;
use crate::{Bus, BusError};
use hdcp22_emu_types::{RvAddr, RvData, RvSize};

/// Bus wrapper that records one line per transaction.
///
/// ```text
/// CIPHER  read32 *0xa0000040 -> 0x41
/// CIPHER write32 *0xa0000044 <- 0x1
/// ```
pub struct BusLogger<TBus: Bus, W: Write = Log> {
    pub bus: TBus,
    pub log: Option<W>,
    name: &'static str,
}
impl<TBus: Bus, W: Write> BusLogger<TBus, W> {
    pub fn new(name: &'static str, bus: TBus) -> Self {
        Self {
            bus,
            log: None,
            name,
        }
    }

    pub fn with_log(mut self, log: W) -> Self {
        self.log = Some(log);
        self
    }

    pub fn into_inner(self) -> TBus {
        self.bus
    }

    fn log_read(&mut self, size: RvSize, addr: RvAddr, result: Result<RvData, BusError>) {
        let name = self.name;
        if let Some(log) = &mut self.log {
            let bits = usize::from(size) * 8;
            match result {
                Ok(val) => {
                    writeln!(log, "{name}  read{bits} *0x{addr:08x} -> 0x{val:x}").unwrap()
                }
                Err(e) => {
                    writeln!(log, "{name}  read{bits} *0x{addr:08x} ***FAULT {e:?}").unwrap()
                }
            }
        }
    }

    fn log_write(
        &mut self,
        size: RvSize,
        addr: RvAddr,
        val: RvData,
        result: Result<(), BusError>,
    ) {
        let name = self.name;
        if let Some(log) = &mut self.log {
            let bits = usize::from(size) * 8;
            match result {
                Ok(()) => {
                    writeln!(log, "{name} write{bits} *0x{addr:08x} <- 0x{val:x}").unwrap()
                }
                Err(e) => writeln!(
                    log,
                    "{name} write{bits} *0x{addr:08x} <- 0x{val:x} ***FAULT {e:?}"
                )
                .unwrap(),
            }
        }
    }
}
impl<TBus: Bus, W: Write> Bus for BusLogger<TBus, W> {
    fn read(&mut self, size: RvSize, addr: RvAddr) -> Result<RvData, BusError> {
        let result = self.bus.read(size, addr);
        self.log_read(size, addr, result);
        result
    }

    fn write(&mut self, size: RvSize, addr: RvAddr, val: RvData) -> Result<(), BusError> {
        let result = self.bus.write(size, addr, val);
        self.log_write(size, addr, val, result);
        result
    }
}
