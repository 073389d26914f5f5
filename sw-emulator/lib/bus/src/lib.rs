/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the HDCP22 Emulator Bus library.

--*/
mod bus;
mod bus_logger;
mod dynamic_bus;
mod mmio;
mod register;
pub mod testing;

pub use crate::bus::{Bus, BusError};
pub use crate::bus_logger::BusLogger;
pub use crate::dynamic_bus::DynamicBus;
pub use crate::mmio::BusMmio;
pub use crate::register::{
    ReadOnlyRegister, ReadWriteRegister, Register, WriteOneToClearRegister,
};
