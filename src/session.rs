use std::time::{Duration, Instant};

use crate::error::{KioskError, Result};
use crate::models::Intent;

/// How long a lock may be held before it is considered abandoned and
/// forcibly cleared. Liveness over safety: the pipeline is stateless per
/// call, so a forced unlock cannot corrupt shared state.
pub const STALE_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Session-scoped mutual exclusion for the analysis pipeline.
///
/// At most one request runs at a time; concurrent attempts are rejected
/// immediately with `LockContention` rather than queued.
pub struct ProcessingLock {
    locked_at: Option<Instant>,
    stale_after: Duration,
}

impl ProcessingLock {
    pub fn new() -> Self {
        Self::with_stale_timeout(STALE_LOCK_TIMEOUT)
    }

    /// Lock with a custom staleness window (tests use short windows).
    pub fn with_stale_timeout(stale_after: Duration) -> Self {
        Self {
            locked_at: None,
            stale_after,
        }
    }

    pub fn is_held(&self) -> bool {
        self.locked_at.is_some()
    }

    /// Try to take the lock.
    ///
    /// A holder past the staleness window is forcibly cleared first, so
    /// a crashed prior request cannot lock the session out permanently.
    pub fn acquire(&mut self) -> Result<()> {
        if let Some(at) = self.locked_at {
            if at.elapsed() <= self.stale_after {
                return Err(KioskError::LockContention);
            }
            self.locked_at = None;
        }
        self.locked_at = Some(Instant::now());
        Ok(())
    }

    pub fn release(&mut self) {
        self.locked_at = None;
    }

    /// Run `f` under the lock, releasing unconditionally afterwards.
    pub fn run<T>(&mut self, f: impl FnOnce() -> T) -> Result<T> {
        self.acquire()?;
        let result = f();
        self.release();
        Ok(result)
    }
}

impl Default for ProcessingLock {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-session pipeline state.
///
/// Owned by the calling layer and passed explicitly; the shared engine
/// handle is the only process-wide instance in the crate.
#[derive(Default)]
pub struct SessionContext {
    /// Intent of the most recent request, if any.
    pub last_intent: Option<Intent>,

    /// Names of the most recently recommended menus.
    pub last_recommendations: Vec<String>,

    /// Free-form clerk reply generated for the last recommendation.
    pub reply_text: String,

    pub lock: ProcessingLock,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore all state to its initial values, including the lock.
    pub fn reset(&mut self) {
        self.last_intent = None;
        self.last_recommendations.clear();
        self.reply_text.clear();
        self.lock.release();
    }
}
