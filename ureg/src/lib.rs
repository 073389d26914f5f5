// Licensed under the Apache-2.0 license

//! Minimal volatile MMIO access traits.
//!
//! Drivers are written against [`Mmio`]/[`MmioMut`] instead of raw pointers
//! so the same driver code can target real hardware ([`RealMmio`]) or an
//! emulated bus.

#![no_std]

use core::marker::PhantomData;

mod private {
    pub trait Sealed {}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UintType {
    U8,
    U16,
    U32,
}

/// Unsigned integer types that can be moved across an MMIO bus.
pub trait Uint: Clone + Copy + Default + private::Sealed {
    const TYPE: UintType;
}
impl private::Sealed for u8 {}
impl Uint for u8 {
    const TYPE: UintType = UintType::U8;
}
impl private::Sealed for u16 {}
impl Uint for u16 {
    const TYPE: UintType = UintType::U16;
}
impl private::Sealed for u32 {}
impl Uint for u32 {
    const TYPE: UintType = UintType::U32;
}

pub trait Mmio: Sized {
    /// Loads from address `src` and returns the value.
    ///
    /// # Safety
    ///
    /// Same requirements as [`core::ptr::read_volatile`].
    unsafe fn read_volatile<T: Uint>(&self, src: *const T) -> T;
}

pub trait MmioMut: Mmio {
    /// Stores `src` to address `dst`.
    ///
    /// # Safety
    ///
    /// Same requirements as [`core::ptr::write_volatile`].
    unsafe fn write_volatile<T: Uint>(&self, dst: *mut T, src: T);
}

/// MMIO backend that dereferences the addresses directly.
#[derive(Clone, Copy, Default)]
pub struct RealMmio<'a>(PhantomData<&'a ()>);
impl Mmio for RealMmio<'_> {
    #[inline(always)]
    unsafe fn read_volatile<T: Uint>(&self, src: *const T) -> T {
        core::ptr::read_volatile(src)
    }
}

/// Like [`RealMmio`], but also allows stores.
#[derive(Clone, Copy, Default)]
pub struct RealMmioMut<'a>(PhantomData<&'a mut ()>);
impl Mmio for RealMmioMut<'_> {
    #[inline(always)]
    unsafe fn read_volatile<T: Uint>(&self, src: *const T) -> T {
        core::ptr::read_volatile(src)
    }
}
impl MmioMut for RealMmioMut<'_> {
    #[inline(always)]
    unsafe fn write_volatile<T: Uint>(&self, dst: *mut T, src: T) {
        core::ptr::write_volatile(dst, src)
    }
}

impl<TMmio: Mmio> Mmio for &TMmio {
    #[inline(always)]
    unsafe fn read_volatile<T: Uint>(&self, src: *const T) -> T {
        (**self).read_volatile(src)
    }
}
impl<TMmio: MmioMut> MmioMut for &TMmio {
    #[inline(always)]
    unsafe fn write_volatile<T: Uint>(&self, dst: *mut T, src: T) {
        (**self).write_volatile(dst, src)
    }
}
