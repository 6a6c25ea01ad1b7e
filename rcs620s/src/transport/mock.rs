//! Mock channel and virtual clock for unit tests. The channel records
//! written frames and returns queued read chunks; paired with a shared
//! [`VirtualClock`] the transport's timeout paths run in fast virtual time.

use crate::transport::traits::{ByteChannel, Clock};
use crate::Result;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

/// Shared virtual clock. Clones observe and advance the same time.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    inner: Rc<RefCell<Duration>>,
}

impl VirtualClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the shared time.
    pub fn advance(&self, by: Duration) {
        *self.inner.borrow_mut() += by;
    }

    /// Current virtual time.
    pub fn elapsed(&self) -> Duration {
        *self.inner.borrow()
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Duration {
        self.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance(duration);
    }
}

/// Mock byte channel. Queued chunks model future reader output (one chunk
/// per read call); an exhausted queue models a silent reader, and each empty
/// read advances the attached virtual clock by the read deadline so timeout
/// loops terminate without real waiting.
#[derive(Debug, Default)]
pub struct MockChannel {
    reads: VecDeque<Vec<u8>>,
    /// Every payload passed to `write`, in order.
    pub written: Vec<Vec<u8>>,
    /// Number of `discard_input` calls observed.
    pub discards: usize,
    clock: Option<VirtualClock>,
}

impl MockChannel {
    /// Channel with no scripted reads and no virtual clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Channel advancing the given shared clock on empty reads.
    pub fn with_clock(clock: VirtualClock) -> Self {
        Self {
            clock: Some(clock),
            ..Self::default()
        }
    }

    /// Queue one chunk to be returned by the next read call.
    pub fn push_read(&mut self, chunk: Vec<u8>) {
        self.reads.push_back(chunk);
    }

    /// Remaining queued chunks.
    pub fn pending_reads(&self) -> usize {
        self.reads.len()
    }
}

impl ByteChannel for MockChannel {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.written.push(data.to_vec());
        Ok(())
    }

    fn read_with_deadline(&mut self, max_len: usize, wait: Duration) -> Result<Vec<u8>> {
        match self.reads.pop_front() {
            Some(mut chunk) => {
                if chunk.len() > max_len {
                    let rest = chunk.split_off(max_len);
                    self.reads.push_front(rest);
                }
                Ok(chunk)
            }
            None => {
                if let Some(clock) = &self.clock {
                    clock.advance(wait);
                }
                Ok(Vec::new())
            }
        }
    }

    fn discard_input(&mut self) -> Result<()> {
        // Scripted chunks represent future reader output, not buffered
        // input, so they survive a discard.
        self.discards += 1;
        Ok(())
    }
}
