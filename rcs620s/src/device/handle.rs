//! Device handle: the command transport loop and the typed reader
//! operations, with initialization state enforced at compile time.

use std::marker::PhantomData;
use std::time::Duration;

use crate::constants::{
    ACK_FRAME, FELICA_CMD_CHANGE_MODE, FELICA_CMD_PUSH, FELICA_RES_CHANGE_MODE, FELICA_RES_PUSH,
    FRAME_HEADER_LEN, MAX_CARD_COMMAND_LEN, MAX_PUSH_DATA_LEN, MIFARE_UL_CAPABILITY_PAGE,
    MIFARE_UL_CMD_READ,
};
use crate::device::session::Session;
use crate::protocol::{codec, responses, Command, Frame, Response};
use crate::transport::{ByteChannel, Clock, MonotonicClock};
use crate::types::{PiccType, PollOutcome, SystemCode, UltralightVariant};
use crate::utils::{self, bytes_to_hex};
use crate::{Error, Result};

/// Type-state marker: device not yet initialized.
pub struct Uninitialized;
/// Type-state marker: RF configuration done, polling allowed.
pub struct Initialized;

/// Bytes requested per bounded read in the receive loop.
const READ_CHUNK_LEN: usize = 64;

/// RC-S620/S device handle. Polling and card operations are only available
/// after [`Rcs620s::init_device`] has succeeded; a failed init means the
/// session is unusable until a new handle is built and re-initialized.
pub struct Rcs620s<State = Uninitialized> {
    channel: Box<dyn ByteChannel>,
    clock: Box<dyn Clock>,
    timeout: Duration,
    session: Session,
    _state: PhantomData<State>,
}

impl<State> std::fmt::Debug for Rcs620s<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rcs620s")
            .field("timeout", &self.timeout)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<State> Rcs620s<State> {
    /// Timeout budget bounding one command exchange.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Set the timeout budget for subsequent exchanges.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Send one command frame and block for its response frame.
    ///
    /// Single-shot: a timeout or malformed frame is reported to the caller,
    /// never retried here. The channel's input buffer is empty on return,
    /// success or failure.
    fn exchange(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        let frame = codec::encode_command_frame(cmd)?;
        self.channel.discard_input()?;
        log::trace!("tx {}", bytes_to_hex(&frame));
        self.channel.write(&frame)?;

        let slice = utils::ms(utils::RECEIVE_SLICE_MS);
        let started = self.clock.now();
        let mut buf: Vec<u8> = Vec::new();
        let mut acked = false;
        loop {
            let chunk = self.channel.read_with_deadline(READ_CHUNK_LEN, slice)?;
            buf.extend_from_slice(&chunk);

            if !acked && buf.len() >= ACK_FRAME.len() {
                if Frame::is_ack(&buf) {
                    buf.drain(..ACK_FRAME.len());
                    acked = true;
                } else {
                    self.cancel();
                    return Err(Error::Frame("missing acknowledgement".into()));
                }
            }

            if acked && buf.len() > FRAME_HEADER_LEN {
                match Frame::decode(&buf) {
                    Ok(payload) => {
                        log::trace!("rx {}", bytes_to_hex(&payload));
                        self.channel.discard_input()?;
                        let resp = Response::decode(cmd.command_code(), &payload)?;
                        return Ok(resp.body);
                    }
                    // incomplete frame: keep reading until the budget runs out
                    Err(Error::Truncated { .. }) => {}
                    Err(e) => {
                        self.cancel();
                        return Err(e);
                    }
                }
            }

            if self.clock.now().saturating_sub(started) >= self.timeout {
                log::debug!("exchange timed out after {:?}", self.timeout);
                self.cancel();
                return Err(Error::Timeout);
            }
        }
    }

    /// Fire-and-forget chip-level abort: write the ACK pattern, wait a short
    /// settle time, drop whatever the chip answered. This is the one place
    /// errors are deliberately swallowed.
    fn cancel(&mut self) {
        if let Err(e) = self.channel.write(&ACK_FRAME) {
            log::debug!("cancel write failed: {}", e);
        }
        self.clock.sleep(utils::ms(utils::CANCEL_SETTLE_MS));
        if let Err(e) = self.channel.discard_input() {
            log::debug!("cancel discard failed: {}", e);
        }
    }

    /// RFConfiguration responses carry no body.
    fn expect_empty(body: Vec<u8>) -> Result<()> {
        if body.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidLength {
                expected: 0,
                actual: body.len(),
            })
        }
    }
}

impl Rcs620s<Uninitialized> {
    /// Create a handle over a byte channel with the default wall clock and
    /// timeout budget.
    pub fn new(channel: Box<dyn ByteChannel>) -> Self {
        Self::from_parts(
            channel,
            Box::new(MonotonicClock::new()),
            utils::default_timeout(),
        )
    }

    pub(crate) fn from_parts(
        channel: Box<dyn ByteChannel>,
        clock: Box<dyn Clock>,
        timeout: Duration,
    ) -> Self {
        Self {
            channel,
            clock,
            timeout,
            session: Session::default(),
            _state: PhantomData,
        }
    }

    /// Configure the RF front end: timings, retry counts and additional
    /// wait time. Required once before any polling.
    pub fn init_device(mut self) -> Result<Rcs620s<Initialized>> {
        for cmd in [
            Command::rf_config_timings(),
            Command::rf_config_retries(),
            Command::rf_config_additional_wait(),
        ] {
            let body = self.exchange(&cmd)?;
            Self::expect_empty(body)?;
        }
        log::debug!("reader initialized");

        Ok(Rcs620s {
            channel: self.channel,
            clock: self.clock,
            timeout: self.timeout,
            session: self.session,
            _state: PhantomData,
        })
    }
}

impl Rcs620s<Initialized> {
    /// Poll for a FeliCa card. `SystemCode::ANY` matches any card.
    pub fn poll_felica(&mut self, system_code: SystemCode) -> Result<PollOutcome> {
        let body = self.exchange(&Command::poll_felica(system_code))?;
        match Self::target_or_none(responses::decode_felica_target(&body)) {
            Some(target) => {
                self.session.record_felica(target.idm, target.pmm);
                log::debug!("felica card: idm={}", target.idm.to_hex());
                Ok(PollOutcome::Found(PiccType::Felica))
            }
            None => Ok(PollOutcome::NotFound),
        }
    }

    /// Poll for an ISO14443 Type A card (MIFARE-classic or Ultralight
    /// family, classified best-effort from SEL_RES and UID length).
    pub fn poll_type_a(&mut self) -> Result<PollOutcome> {
        let body = self.exchange(&Command::poll_type_a())?;
        match Self::target_or_none(responses::decode_type_a_target(&body)) {
            Some(target) => {
                let family = target.family();
                self.session.record_type_a(&target.uid, family);
                log::debug!("type A card: uid={}", bytes_to_hex(&target.uid));
                Ok(PollOutcome::Found(family))
            }
            None => Ok(PollOutcome::NotFound),
        }
    }

    /// Poll for an ISO14443 Type B card.
    pub fn poll_type_b(&mut self) -> Result<PollOutcome> {
        let body = self.exchange(&Command::poll_type_b())?;
        match Self::target_or_none(responses::decode_type_b_target(&body)) {
            Some(target) => {
                self.session.record_type_b(target.pupi);
                log::debug!("type B card: pupi={}", bytes_to_hex(&target.pupi));
                Ok(PollOutcome::Found(PiccType::TypeB))
            }
            None => Ok(PollOutcome::NotFound),
        }
    }

    /// Exchange a raw card command through the chip (CommunicateThruEX) and
    /// return the card's response bytes.
    pub fn card_command(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        if command.is_empty() || command.len() > MAX_CARD_COMMAND_LEN {
            return Err(Error::InvalidArgument(format!(
                "card command length {} out of range 1..={}",
                command.len(),
                MAX_CARD_COMMAND_LEN
            )));
        }
        // chip-side deadline in 0.5 ms units, saturated
        let millis = self.timeout.as_millis() as u64;
        let deadline = if millis >= 0x8000 {
            0xFFFF
        } else {
            (millis * 2) as u16
        };
        let body = self.exchange(&Command::CommunicateThruEx {
            deadline,
            data: command.to_vec(),
        })?;
        responses::decode_thru(&body)
    }

    /// FeliCa Push: send `data` to the currently selected card. Requires a
    /// successful FeliCa poll first; `data` must be 1..=224 bytes.
    pub fn push(&mut self, data: &[u8]) -> Result<()> {
        if self.session.picc_type() != PiccType::Felica {
            return Err(Error::NoCardSelected);
        }
        if data.is_empty() || data.len() > MAX_PUSH_DATA_LEN {
            return Err(Error::InvalidArgument(format!(
                "push data length {} out of range 1..={}",
                data.len(),
                MAX_PUSH_DATA_LEN
            )));
        }

        let idm = *self.session.idm();
        let mut cmd = Vec::with_capacity(10 + data.len());
        cmd.push(FELICA_CMD_PUSH);
        cmd.extend_from_slice(&idm);
        cmd.push(data.len() as u8);
        cmd.extend_from_slice(data);
        let resp = self.card_command(&cmd)?;
        Self::check_push_echo(&resp, FELICA_RES_PUSH, &idm, data.len() as u8)?;

        // mode change completes the push sequence
        let mut fin = Vec::with_capacity(10);
        fin.push(FELICA_CMD_CHANGE_MODE);
        fin.extend_from_slice(&idm);
        fin.push(0x00);
        let resp = self.card_command(&fin)?;
        Self::check_push_echo(&resp, FELICA_RES_CHANGE_MODE, &idm, 0x00)?;

        // give the card time to act on the pushed data
        self.clock.sleep(utils::ms(utils::PUSH_SETTLE_MS));
        Ok(())
    }

    /// Total pages of the selected Ultralight-family tag (45/135/231), or 0
    /// when no Ultralight tag is selected or its capability container could
    /// not be read. The first call probes page 3 and caches the result
    /// until the next successful poll.
    pub fn total_pages_for_detected_tag(&mut self) -> u16 {
        if self.session.picc_type() != PiccType::TypeAUltralight {
            return 0;
        }
        if let Some(variant) = self.session.ultralight_variant() {
            return variant.total_pages();
        }
        match self.card_command(&[MIFARE_UL_CMD_READ, MIFARE_UL_CAPABILITY_PAGE]) {
            Ok(data) if data.len() >= 3 => match UltralightVariant::from_cc_size(data[2]) {
                Some(variant) => {
                    self.session.set_ultralight_variant(variant);
                    variant.total_pages()
                }
                None => 0,
            },
            Ok(_) => 0,
            Err(e) => {
                log::debug!("capability container read failed: {}", e);
                0
            }
        }
    }

    /// Read four pages (16 bytes) starting at `start_page` from the
    /// selected Ultralight-family tag.
    pub fn read_ultralight_page(&mut self, start_page: u8) -> Result<Vec<u8>> {
        if self.session.picc_type() != PiccType::TypeAUltralight {
            return Err(Error::NoCardSelected);
        }
        let total = self.total_pages_for_detected_tag();
        if u16::from(start_page) >= total {
            return Err(Error::OutOfRange {
                page: start_page,
                total,
            });
        }
        self.card_command(&[MIFARE_UL_CMD_READ, start_page])
    }

    /// Turn the RF field off. Best-effort: needs no card present and never
    /// touches the session state.
    pub fn rf_off(&mut self) -> Result<()> {
        let body = self.exchange(&Command::rf_off())?;
        Self::expect_empty(body)
    }

    /// Session state recorded by the most recent successful poll.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Full 8-byte identifier buffer (see [`Session::idm`]).
    pub fn idm(&self) -> &[u8; 8] {
        self.session.idm()
    }

    /// Effective identifier of the selected card.
    pub fn id(&self) -> &[u8] {
        self.session.id()
    }

    /// FeliCa manufacture parameters.
    pub fn pmm(&self) -> &[u8; 8] {
        self.session.pmm()
    }

    /// Length of the effective identifier.
    pub fn id_length(&self) -> u8 {
        self.session.id_length()
    }

    /// Card family of the most recent poll.
    pub fn picc_type(&self) -> PiccType {
        self.session.picc_type()
    }

    /// A malformed-but-framed polling body counts as "no card present";
    /// the shape error is logged, the session stays untouched.
    fn target_or_none<T>(decoded: Result<Option<T>>) -> Option<T> {
        match decoded {
            Ok(target) => target,
            Err(e) => {
                log::debug!("polling response malformed, treating as no card: {}", e);
                None
            }
        }
    }

    fn check_push_echo(resp: &[u8], code: u8, idm: &[u8; 8], trailer: u8) -> Result<()> {
        if resp.len() == 10 && resp[0] == code && &resp[1..9] == idm && resp[9] == trailer {
            Ok(())
        } else {
            Err(Error::UnexpectedResponse {
                expected: code,
                actual: resp.first().copied().unwrap_or(0),
            })
        }
    }
}
