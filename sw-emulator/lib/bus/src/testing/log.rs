/*++

Licensed under the Apache-2.0 license.

File Name:

    log.rs

Abstract:

    File contains a shared text buffer for recording bus activity.

--*/
use std::{
    cell::{Ref, RefCell},
    fmt::Write,
    ops::Deref,
    rc::Rc,
};

/// A text buffer that can be appended to without `&mut self`. Fake buses and
/// [`crate::BusLogger`] record their activity here.
///
/// Clones share the same underlying buffer, so a test can keep a clone and
/// inspect a log that was moved into a bus.
///
/// # Example
///
/// ```
/// use hdcp22_emu_bus::testing::Log;
/// use std::fmt::Write;
///
/// let log = Log::new();
/// let mut sink = log.clone();
/// writeln!(sink, "Line 1").unwrap();
/// writeln!(log.w(), "Line 2").unwrap();
/// assert_eq!("Line 1\nLine 2\n", &*log.as_str());
/// assert_eq!("Line 1\nLine 2\n", log.take());
/// assert_eq!("", log.take());
/// ```
#[derive(Clone, Default)]
pub struct Log {
    log: Rc<RefCell<String>>,
}
impl Log {
    /// Construct an empty `Log`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the contents of the log without modifying it.
    pub fn as_str(&self) -> impl Deref<Target = str> + '_ {
        Ref::map(self.log.borrow(), String::as_str)
    }

    /// Empties the log and returns what it held.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    /// Returns a writer for use with write!() or writeln!().
    pub fn w(&self) -> impl Write + '_ {
        LogWriter { log: &self.log }
    }
}

impl Write for Log {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.log.borrow_mut().push_str(s);
        Ok(())
    }
}

struct LogWriter<'a> {
    log: &'a RefCell<String>,
}
impl Write for LogWriter<'_> {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.log.borrow_mut().push_str(s);
        Ok(())
    }
}
