//! Plain data types used across the driver.

use crate::Error;
use std::convert::TryFrom;

/// IDm — FeliCa manufacture ID, 8 bytes (newtype pattern).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Idm([u8; 8]);

impl Idm {
    /// Wrap an 8-byte identifier.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Lowercase hex rendering, handy for logs.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// PMm — FeliCa manufacture parameters, 8 bytes (newtype pattern).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pmm([u8; 8]);

impl Pmm {
    /// Wrap an 8-byte parameter block.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// FeliCa system code (u16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemCode(u16);

impl SystemCode {
    /// Wildcard system code matching any card.
    pub const ANY: Self = Self(0xFFFF);
    /// FeliCa common area.
    pub const COMMON: Self = Self(0xFE00);

    /// Wrap a raw system code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Raw value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Big-endian bytes as they appear in the polling command.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl Default for SystemCode {
    fn default() -> Self {
        Self::ANY
    }
}

/// Card family detected by the most recent poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PiccType {
    /// No card detected yet.
    #[default]
    Unknown,
    /// FeliCa card (IDm/PMm held).
    Felica,
    /// ISO14443 Type A, MIFARE-classic family.
    TypeAMifare,
    /// ISO14443 Type A, Ultralight family (page-addressed).
    TypeAUltralight,
    /// ISO14443 Type B (PUPI held).
    TypeB,
}

/// Target baud rate / modulation selector for InListPassiveTarget.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaudRate {
    /// 106 kbps ISO14443 Type A.
    TypeA106 = 0x00,
    /// 212 kbps FeliCa.
    Felica212 = 0x01,
    /// 106 kbps ISO14443 Type B.
    TypeB106 = 0x03,
}

/// Ultralight-family sub-variant, selected by capability container size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UltralightVariant {
    /// NTAG213, 45 pages.
    Ntag213,
    /// NTAG215, 135 pages.
    Ntag215,
    /// NTAG216, 231 pages.
    Ntag216,
}

impl UltralightVariant {
    /// Map the capability container size byte (page 3, byte 2) to a variant.
    pub fn from_cc_size(size: u8) -> Option<Self> {
        match size {
            0x12 => Some(Self::Ntag213),
            0x3E => Some(Self::Ntag215),
            0x6F => Some(Self::Ntag216),
            _ => None,
        }
    }

    /// Total addressable pages of the tag.
    pub fn total_pages(&self) -> u16 {
        match self {
            Self::Ntag213 => 45,
            Self::Ntag215 => 135,
            Self::Ntag216 => 231,
        }
    }
}

/// Outcome of a polling operation. "No card present" is a normal outcome,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// A card answered; the session now holds its identifiers.
    Found(PiccType),
    /// No card answered within the chip's polling window.
    NotFound,
}

impl PollOutcome {
    /// True when a card was detected.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
