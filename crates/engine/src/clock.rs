//! Frame clock: host timestamps in, elapsed milliseconds out.

/// Converts monotonically increasing timestamps into per-frame deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Milliseconds since the previous call.
    ///
    /// The first call yields 0. A timestamp earlier than the previous one also
    /// yields 0 and becomes the new reference point.
    pub fn elapsed_ms(&mut self, now_ms: u64) -> u32 {
        let elapsed = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_ms = Some(now_ms);
        u32::try_from(elapsed).unwrap_or(u32::MAX)
    }

    /// Forget the reference point; the next tick yields 0 again.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
