//! Serial port channel, feature-gated behind `serial`.
//!
//! The RC-S620/S module speaks 115200 8N1 over its UART pins.

#![cfg(feature = "serial")]

use crate::transport::traits::ByteChannel;
use crate::{Error, Result};
use serialport::{ClearBuffer, SerialPort};
use std::io::{Read, Write};
use std::time::Duration;

/// Default UART baud rate of the RC-S620/S.
pub const DEFAULT_BAUD: u32 = 115_200;

/// Byte channel backed by a serial port.
pub struct SerialChannel {
    port: Box<dyn SerialPort>,
}

impl SerialChannel {
    /// Open a serial port at the module's default baud rate.
    pub fn open(path: &str) -> Result<Self> {
        Self::open_with_baud(path, DEFAULT_BAUD)
    }

    /// Open a serial port at an explicit baud rate.
    pub fn open_with_baud(path: &str, baud: u32) -> Result<Self> {
        let port = serialport::new(path, baud)
            .timeout(Duration::from_millis(10))
            .open()
            .map_err(|e| match e.kind {
                serialport::ErrorKind::NoDevice => Error::DeviceNotFound,
                _ => Error::Serial(e),
            })?;
        Ok(Self { port })
    }

    /// Wrap an already-open port.
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        Self { port }
    }
}

impl ByteChannel for SerialChannel {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn read_with_deadline(&mut self, max_len: usize, wait: Duration) -> Result<Vec<u8>> {
        self.port.set_timeout(wait)?;
        let mut buf = vec![0u8; max_len];
        match self.port.read(&mut buf) {
            Ok(n) => {
                buf.truncate(n);
                Ok(buf)
            }
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(Vec::new()),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn discard_input(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }
}
