//! Live order-event fan-out.
//!
//! The lifecycle manager publishes through the [`Notifier`] capability;
//! handlers that own a live connection subscribe through
//! [`BroadcastNotifier::subscribe`]. Publishing is fire-and-forget against
//! whatever listeners are currently attached: there is no replay log, so a
//! listener that connects after an event never sees it.

pub mod events;

pub use events::OrderEvent;

use tokio::sync::broadcast;

/// Capacity of the broadcast channel backing the notifier.
///
/// A receiver that falls further behind than this skips ahead and misses
/// the lagged events, which is acceptable under the no-delivery-guarantee
/// contract.
const CHANNEL_CAPACITY: usize = 256;

/// Publish side of the notification channel.
///
/// Injected into the order lifecycle manager so tests can substitute a
/// recording implementation.
pub trait Notifier: Send + Sync {
    /// Broadcast an event to all currently attached listeners.
    fn publish(&self, event: OrderEvent);
}

/// Production notifier backed by `tokio::sync::broadcast`.
///
/// Cloning shares the underlying channel.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    tx: broadcast::Sender<OrderEvent>,
}

impl BroadcastNotifier {
    /// Create a notifier with the default channel capacity.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Attach a new listener.
    ///
    /// The receiver only observes events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.tx.subscribe()
    }

    /// Number of currently attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for BroadcastNotifier {
    fn publish(&self, event: OrderEvent) {
        match self.tx.send(event) {
            Ok(listeners) => {
                tracing::debug!(listeners, "order event broadcast");
            }
            Err(broadcast::error::SendError(event)) => {
                // No listeners attached; the event is dropped by contract.
                tracing::debug!(event = event.name(), "order event had no listeners");
            }
        }
    }
}
