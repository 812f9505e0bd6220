use std::sync::{Mutex, PoisonError};

use pokebat_battle::Side;
use tokio::sync::watch;

/// Two-flag completion barrier for roster drafting.
///
/// Flags are written under one lock and the "all ready" signal is published while that
/// lock is held, so a side arriving second always observes the first side's flag.
pub struct DraftBarrier {
    ready: Mutex<[bool; 2]>,
    all_ready: watch::Sender<bool>,
}

impl DraftBarrier {
    pub fn new() -> Self {
        let (all_ready, _) = watch::channel(false);
        Self {
            ready: Mutex::new([false; 2]),
            all_ready,
        }
    }

    /// Mark a side's roster complete. Returns true if this arrival completed the barrier.
    pub fn arrive(&self, side: Side) -> bool {
        let mut ready = self.ready.lock().unwrap_or_else(PoisonError::into_inner);
        ready[side.index()] = true;

        let all = ready.iter().all(|done| *done);
        if all {
            self.all_ready.send_replace(true);
        }
        all
    }

    pub fn is_ready(&self, side: Side) -> bool {
        self.ready.lock().unwrap_or_else(PoisonError::into_inner)[side.index()]
    }

    /// Wait until both sides have arrived
    pub async fn wait(&self) {
        let mut rx = self.all_ready.subscribe();
        // The sender lives in self, so the channel cannot close while we wait
        let _ = rx.wait_for(|ready| *ready).await;
    }
}

impl Default for DraftBarrier {
    fn default() -> Self {
        Self::new()
    }
}
