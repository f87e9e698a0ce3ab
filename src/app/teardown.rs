//! One-shot cancellation shared by every task a controller spawns.
//!
//! The gate starts open. [`TeardownGate::trigger`] closes it for good and
//! wakes every [`TeardownListener`]. Dropping the gate counts as a trigger,
//! so tasks never outlive the controller that spawned them.

use tokio::sync::watch;

#[derive(Debug)]
pub struct TeardownGate {
    tx: watch::Sender<bool>,
}

impl TeardownGate {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Close the gate. Later calls are no-ops.
    pub fn trigger(&self) {
        self.tx.send_if_modified(|torn_down| {
            let changed = !*torn_down;
            *torn_down = true;
            changed
        });
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn listener(&self) -> TeardownListener {
        TeardownListener {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for TeardownGate {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct TeardownListener {
    rx: watch::Receiver<bool>,
}

impl TeardownListener {
    /// Resolve once the gate is triggered or dropped.
    pub async fn triggered(&mut self) {
        // Err means the gate was dropped, which is a teardown too.
        let _ = self.rx.wait_for(|torn_down| *torn_down).await;
    }

    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }
}
