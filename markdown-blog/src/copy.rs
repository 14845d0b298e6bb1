//! Copy-button feedback state machine.
//!
//! `Idle -> Copied` on activation, back to `Idle` exactly
//! [`COPY_RESET_WINDOW_MS`] later. Every activation starts a new epoch;
//! a reset only applies if its epoch is still current, so re-activating
//! while `Copied` restarts the window instead of stacking timers.

/// How long the `Copied` affordance stays visible, in milliseconds.
pub const COPY_RESET_WINDOW_MS: u64 = 2000;

/// Feedback state for one copy affordance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyState {
    /// Nothing copied recently.
    #[default]
    Idle,
    /// A copy was attempted within the reset window.
    Copied,
}

/// Epoch-guarded `Idle`/`Copied` machine backing [`CopyableCodeBlock`].
///
/// [`CopyableCodeBlock`]: crate::render::CopyableCodeBlock
#[derive(Debug, Default)]
pub struct CopyFeedback {
    state: CopyState,
    epoch: u64,
}

impl CopyFeedback {
    /// A fresh machine in `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> CopyState {
        self.state
    }

    /// Enter `Copied` and return the epoch the caller must pass back to
    /// [`expire`](Self::expire) when the reset window elapses.
    pub fn activate(&mut self) -> u64 {
        self.epoch += 1;
        self.state = CopyState::Copied;
        self.epoch
    }

    /// Return to `Idle` if `epoch` is still the current one. Returns whether
    /// the state actually changed; a stale epoch (the window was restarted
    /// in the meantime) is a no-op.
    pub fn expire(&mut self, epoch: u64) -> bool {
        if self.epoch == epoch && self.state == CopyState::Copied {
            self.state = CopyState::Idle;
            true
        } else {
            false
        }
    }
}
