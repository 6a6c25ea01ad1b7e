//! Last-seen card state for one device instance.
//!
//! Identifiers are only ever written by a successful, fully validated poll;
//! callers read them through accessors between calls. One logical session
//! per device instance, never shared across threads.

use crate::types::{Idm, PiccType, Pmm, UltralightVariant};

/// Session state: identifiers and card family from the most recent poll.
#[derive(Debug, Clone, Default)]
pub struct Session {
    idm: [u8; 8],
    pmm: [u8; 8],
    id_length: u8,
    picc_type: PiccType,
    ul_variant: Option<UltralightVariant>,
}

impl Session {
    /// Full 8-byte identifier buffer. Only the first [`Self::id_length`]
    /// bytes are meaningful; use [`Self::id`] for the effective identifier.
    pub fn idm(&self) -> &[u8; 8] {
        &self.idm
    }

    /// Effective identifier of the selected card (8 bytes for FeliCa,
    /// commonly 4 or 7 for Type A, 4 for Type B).
    pub fn id(&self) -> &[u8] {
        &self.idm[..self.id_length as usize]
    }

    /// FeliCa manufacture parameters; meaningful after a FeliCa poll only.
    pub fn pmm(&self) -> &[u8; 8] {
        &self.pmm
    }

    /// Length of the effective identifier.
    pub fn id_length(&self) -> u8 {
        self.id_length
    }

    /// Card family of the most recent poll.
    pub fn picc_type(&self) -> PiccType {
        self.picc_type
    }

    /// Cached Ultralight sub-variant from a capability probe, if any.
    pub fn ultralight_variant(&self) -> Option<UltralightVariant> {
        self.ul_variant
    }

    pub(crate) fn record_felica(&mut self, idm: Idm, pmm: Pmm) {
        self.idm = *idm.as_bytes();
        self.pmm = *pmm.as_bytes();
        self.id_length = 8;
        self.picc_type = PiccType::Felica;
        self.ul_variant = None;
    }

    pub(crate) fn record_type_a(&mut self, uid: &[u8], family: PiccType) {
        let len = uid.len().min(8);
        self.idm = [0u8; 8];
        self.idm[..len].copy_from_slice(&uid[..len]);
        self.id_length = len as u8;
        self.picc_type = family;
        self.ul_variant = None;
    }

    pub(crate) fn record_type_b(&mut self, pupi: [u8; 4]) {
        self.idm = [0u8; 8];
        self.idm[..4].copy_from_slice(&pupi);
        self.id_length = 4;
        self.picc_type = PiccType::TypeB;
        self.ul_variant = None;
    }

    pub(crate) fn set_ultralight_variant(&mut self, variant: UltralightVariant) {
        self.ul_variant = Some(variant);
    }
}
