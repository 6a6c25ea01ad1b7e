//! Wire-level constants for the RC-S620/S serial protocol.

/// Frame preamble: 0x00 0x00 0xFF.
pub const FRAME_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Fixed acknowledgement pattern. The reader emits it before every response
/// frame; written host-to-reader it aborts the in-flight operation.
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Frame header length: preamble(3) + little-endian length(2).
pub const FRAME_HEADER_LEN: usize = 5;

/// Maximum payload of a command-transport frame (extended read/write).
pub const MAX_FRAME_PAYLOAD_LEN: usize = 265;

/// Maximum length of a card command carried by CommunicateThruEX.
pub const MAX_CARD_COMMAND_LEN: usize = 254;

/// Maximum data length accepted by the FeliCa Push command.
pub const MAX_PUSH_DATA_LEN: usize = 224;

/// Host-to-reader payload prefix.
pub const HOST_PREFIX: u8 = 0xD4;
/// Reader-to-host payload prefix.
pub const DEVICE_PREFIX: u8 = 0xD5;

/// RFConfiguration command code.
pub const CMD_RF_CONFIGURATION: u8 = 0x32;
/// InListPassiveTarget command code.
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;
/// CommunicateThruEX command code.
pub const CMD_COMMUNICATE_THRU_EX: u8 = 0xA0;

/// RFConfiguration item: RF field on/off.
pub const RFCONFIG_RF_FIELD: u8 = 0x01;
/// RFConfiguration item: various timings.
pub const RFCONFIG_VARIOUS_TIMINGS: u8 = 0x02;
/// RFConfiguration item: max retries.
pub const RFCONFIG_MAX_RETRIES: u8 = 0x05;
/// RFConfiguration item: additional wait time.
pub const RFCONFIG_ADDITIONAL_WAIT: u8 = 0x81;
/// Additional wait time value: 24 ms.
pub const ADDITIONAL_WAIT_24MS: u8 = 0xB7;

/// FeliCa Push command / response codes.
pub const FELICA_CMD_PUSH: u8 = 0xB0;
/// Response code paired with [`FELICA_CMD_PUSH`].
pub const FELICA_RES_PUSH: u8 = 0xB1;
/// FeliCa mode-change command completing a Push sequence.
pub const FELICA_CMD_CHANGE_MODE: u8 = 0xA4;
/// Response code paired with [`FELICA_CMD_CHANGE_MODE`].
pub const FELICA_RES_CHANGE_MODE: u8 = 0xA5;

/// MIFARE Ultralight READ command (returns four 4-byte pages).
pub const MIFARE_UL_CMD_READ: u8 = 0x30;
/// Page holding the NTAG capability container.
pub const MIFARE_UL_CAPABILITY_PAGE: u8 = 0x03;
