use sevroute_sink::SinkError;
use thiserror::Error;

use crate::SubscriberId;

/// Errors surfaced by [`crate::Registry`].
#[derive(Debug, Error)]
pub enum ObserverError {
    /// The handle was never issued by this registry.
    #[error("unknown subscriber {id}")]
    UnknownSubscriber {
        /// Offending handle.
        id: SubscriberId,
    },

    /// A subscriber failed to deliver an event; later subscribers were not
    /// notified.
    #[error("subscriber {id} failed to deliver: {source}")]
    Delivery {
        /// Subscriber whose callback failed.
        id: SubscriberId,
        /// Underlying delivery failure.
        #[source]
        source: SinkError,
    },
}

impl ObserverError {
    /// Creates an unknown subscriber error.
    pub const fn unknown_subscriber(id: SubscriberId) -> Self {
        Self::UnknownSubscriber { id }
    }

    /// Creates a delivery error for subscriber `id`.
    pub const fn delivery(id: SubscriberId, source: SinkError) -> Self {
        Self::Delivery { id, source }
    }
}
