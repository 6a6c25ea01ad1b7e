//! InListPassiveTarget response decoders, one per card family.
//!
//! All three share the same envelope: the body starts with the number of
//! activated targets; zero targets means "no card present". When the chip's
//! anticollision returns more than one target only the first is decoded —
//! the driver runs a single-target model.

use crate::protocol::parser;
use crate::types::{Idm, PiccType, Pmm};
use crate::Result;

/// FeliCa target: IDm and PMm from the polling response.
#[derive(Debug, Clone, Copy)]
pub struct FelicaTarget {
    /// Manufacture ID.
    pub idm: Idm,
    /// Manufacture parameters.
    pub pmm: Pmm,
}

/// ISO14443 Type A target.
#[derive(Debug, Clone)]
pub struct TypeATarget {
    /// SENS_RES (ATQA) as returned by the chip.
    pub sens_res: [u8; 2],
    /// SEL_RES (SAK).
    pub sel_res: u8,
    /// UID, commonly 4 bytes (MIFARE classic) or 7 bytes (Ultralight).
    pub uid: Vec<u8>,
}

impl TypeATarget {
    /// Classify the Type A sub-family.
    ///
    /// Best-effort heuristic: a 7-byte UID with SEL_RES 0x00 is treated as
    /// Ultralight family; every other target as MIFARE-classic family. The
    /// chip gives no stronger discriminator at this level.
    pub fn family(&self) -> PiccType {
        if self.sel_res == 0x00 && self.uid.len() == 7 {
            PiccType::TypeAUltralight
        } else {
            PiccType::TypeAMifare
        }
    }
}

/// ISO14443 Type B target.
#[derive(Debug, Clone, Copy)]
pub struct TypeBTarget {
    /// Pseudo-unique PICC identifier from ATQB.
    pub pupi: [u8; 4],
    /// Application data field from ATQB.
    pub application_data: [u8; 4],
    /// Protocol info field from ATQB.
    pub protocol_info: [u8; 3],
}

/// Decode a FeliCa polling body:
/// `[nb_targets][tg][len=0x14][0x01][idm(8)][pmm(8)]`.
pub fn decode_felica_target(body: &[u8]) -> Result<Option<FelicaTarget>> {
    if parser::byte_at(body, 0)? == 0 {
        return Ok(None);
    }
    // target descriptor: logical number, payload length, polling response
    // code 0x01
    parser::ensure_len(body, 4 + 16)?;
    parser::expect_byte(body, 2, 0x14)?;
    parser::expect_byte(body, 3, 0x01)?;
    let idm = parser::idm_at(body, 4)?;
    let pmm = parser::pmm_at(body, 12)?;
    Ok(Some(FelicaTarget { idm, pmm }))
}

/// Decode a Type A polling body:
/// `[nb_targets][tg][sens_res(2)][sel_res][uid_len][uid...]`.
pub fn decode_type_a_target(body: &[u8]) -> Result<Option<TypeATarget>> {
    if parser::byte_at(body, 0)? == 0 {
        return Ok(None);
    }
    let sens_res = [parser::byte_at(body, 2)?, parser::byte_at(body, 3)?];
    let sel_res = parser::byte_at(body, 4)?;
    let uid_len = parser::byte_at(body, 5)? as usize;
    let uid = parser::slice_at(body, 6, uid_len)?.to_vec();
    Ok(Some(TypeATarget {
        sens_res,
        sel_res,
        uid,
    }))
}

/// Decode a Type B polling body:
/// `[nb_targets][tg][atqb(12)]...` where ATQB is `0x50 pupi(4) app(4)
/// protocol(3)`. Trailing ATTRIB_RES bytes are ignored.
pub fn decode_type_b_target(body: &[u8]) -> Result<Option<TypeBTarget>> {
    if parser::byte_at(body, 0)? == 0 {
        return Ok(None);
    }
    parser::expect_byte(body, 2, 0x50)?;
    let atqb = parser::slice_at(body, 2, 12)?;
    let mut pupi = [0u8; 4];
    pupi.copy_from_slice(&atqb[1..5]);
    let mut application_data = [0u8; 4];
    application_data.copy_from_slice(&atqb[5..9]);
    let mut protocol_info = [0u8; 3];
    protocol_info.copy_from_slice(&atqb[9..12]);
    Ok(Some(TypeBTarget {
        pupi,
        application_data,
        protocol_info,
    }))
}
