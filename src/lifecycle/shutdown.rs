//! Shutdown coordination.
//!
//! The flag is sticky: a server subscribed after [`Shutdown::trigger`] still
//! stops immediately.

use tokio::sync::watch;

/// Owner side of the shutdown flag. Held by `main` or by a test harness.
#[derive(Debug)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

/// Subscriber side, handed to [`crate::HttpServer::run`].
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Ask every subscriber to stop. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Subscribers still alive (servers not yet stopped).
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownSignal {
    /// Resolve once shutdown is triggered or the owning [`Shutdown`] is dropped.
    pub async fn triggered(mut self) {
        let _ = self.rx.wait_for(|stop| *stop).await;
    }
}
