//! Next-frame scheduling capability
//!
//! The host's display-refresh primitive (requestAnimationFrame or a native
//! frame pacer) sits behind this trait so the state machine can be stepped
//! deterministically in tests. At most one frame callback is pending at a
//! time; the controller re-arms after each tick and cancels on GameOver and
//! destroy.

pub trait FrameScheduler {
    /// Arm the next frame callback. Arming while already armed is a no-op.
    fn schedule(&mut self);
    /// Cancel the pending callback, if any
    fn cancel(&mut self);
    fn is_scheduled(&self) -> bool;
}

/// Hand-driven scheduler for tests and headless runs. The driver calls
/// `take` each iteration and ticks the controller only when a frame was due.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: bool,
    pub scheduled: u64,
    pub cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending frame, returning whether one was due
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self) {
        if !self.pending {
            self.pending = true;
            self.scheduled += 1;
        }
    }

    fn cancel(&mut self) {
        if self.pending {
            self.pending = false;
            self.cancelled += 1;
        }
    }

    fn is_scheduled(&self) -> bool {
        self.pending
    }
}
