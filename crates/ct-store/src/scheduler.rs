//! Fixed-period tick scheduler.

use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use crate::store::StateStore;

/// Drives the store's tick at a fixed period on a dedicated thread.
///
/// Ticks are strictly serialized: the next period cannot fire before the
/// previous tick has been applied, because one thread runs them back to
/// back. A period that elapses while a tick is still running is simply
/// skipped, never queued.
pub struct TickDriver {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Spawn the scheduler thread. Default period is 1 second.
    pub fn start(store: Arc<StateStore>, period: Duration) -> Self {
        let (stop_tx, stop_rx) = channel();
        let handle = thread::spawn(move || loop {
            // The stop channel doubles as the period timer.
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => store.tick(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    debug!("tick driver stopping");
                    break;
                }
            }
        });
        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Signal the scheduler to stop and wait for the in-flight tick (if any)
    /// to complete. No further ticks run afterwards.
    pub fn stop(mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
