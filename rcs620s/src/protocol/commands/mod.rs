//! Chip command payloads. New commands get a variant here and a per-command
//! encoder in `protocol::commands::<name>.rs`.

pub mod poll;
pub mod rf_config;
pub mod thru;

pub use poll::encode_in_list_passive_target;
pub use rf_config::encode_rf_configuration;
pub use thru::encode_communicate_thru_ex;

use crate::constants::{
    ADDITIONAL_WAIT_24MS, CMD_COMMUNICATE_THRU_EX, CMD_IN_LIST_PASSIVE_TARGET,
    CMD_RF_CONFIGURATION, RFCONFIG_ADDITIONAL_WAIT, RFCONFIG_MAX_RETRIES, RFCONFIG_RF_FIELD,
    RFCONFIG_VARIOUS_TIMINGS,
};
use crate::types::{BaudRate, SystemCode};

/// High-level chip command. Payloads start with the host prefix `0xD4`
/// followed by the command code; the chip answers with `0xD5` and
/// code + 1.
#[derive(Debug, Clone)]
pub enum Command {
    /// RFConfiguration (0x32): tune a chip parameter or switch the RF field.
    RfConfiguration {
        /// Configuration item selector.
        item: u8,
        /// Item-specific data bytes.
        data: Vec<u8>,
    },
    /// InListPassiveTarget (0x4A): poll for a card of one family.
    InListPassiveTarget {
        /// Maximum number of targets to activate (this driver uses 1).
        max_targets: u8,
        /// Target family / baud rate selector.
        baud: BaudRate,
        /// Family-specific initiator data.
        initiator: Vec<u8>,
    },
    /// CommunicateThruEX (0xA0): exchange a raw card command.
    CommunicateThruEx {
        /// Chip-side deadline in 0.5 ms units.
        deadline: u16,
        /// Raw card command bytes.
        data: Vec<u8>,
    },
}

impl Command {
    /// Command code as understood by the chip.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::RfConfiguration { .. } => CMD_RF_CONFIGURATION,
            Self::InListPassiveTarget { .. } => CMD_IN_LIST_PASSIVE_TARGET,
            Self::CommunicateThruEx { .. } => CMD_COMMUNICATE_THRU_EX,
        }
    }

    /// Encode the command into the raw frame payload (prefix + code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::RfConfiguration { item, data } => encode_rf_configuration(*item, data),
            Self::InListPassiveTarget {
                max_targets,
                baud,
                initiator,
            } => encode_in_list_passive_target(*max_targets, *baud, initiator),
            Self::CommunicateThruEx { deadline, data } => {
                encode_communicate_thru_ex(*deadline, data)
            }
        }
    }

    /// RF field off.
    pub fn rf_off() -> Self {
        Self::RfConfiguration {
            item: RFCONFIG_RF_FIELD,
            data: vec![0x00],
        }
    }

    /// Init step 1: various timings, all defaults.
    pub fn rf_config_timings() -> Self {
        Self::RfConfiguration {
            item: RFCONFIG_VARIOUS_TIMINGS,
            data: vec![0x00, 0x00, 0x00],
        }
    }

    /// Init step 2: no chip-level retries; retry policy stays with the caller.
    pub fn rf_config_retries() -> Self {
        Self::RfConfiguration {
            item: RFCONFIG_MAX_RETRIES,
            data: vec![0x00, 0x00, 0x00],
        }
    }

    /// Init step 3: additional wait time of 24 ms.
    pub fn rf_config_additional_wait() -> Self {
        Self::RfConfiguration {
            item: RFCONFIG_ADDITIONAL_WAIT,
            data: vec![ADDITIONAL_WAIT_24MS],
        }
    }

    /// Poll for a FeliCa card with the given system code.
    pub fn poll_felica(system_code: SystemCode) -> Self {
        let [hi, lo] = system_code.to_be_bytes();
        Self::InListPassiveTarget {
            max_targets: 1,
            baud: BaudRate::Felica212,
            // FeliCa polling: command 0x00, system code, request code 0,
            // time slot 0
            initiator: vec![0x00, hi, lo, 0x00, 0x00],
        }
    }

    /// Poll for an ISO14443 Type A card.
    pub fn poll_type_a() -> Self {
        Self::InListPassiveTarget {
            max_targets: 1,
            baud: BaudRate::TypeA106,
            initiator: Vec::new(),
        }
    }

    /// Poll for an ISO14443 Type B card (AFI 0x00 = any application).
    pub fn poll_type_b() -> Self {
        Self::InListPassiveTarget {
            max_targets: 1,
            baud: BaudRate::TypeB106,
            initiator: vec![0x00],
        }
    }
}
