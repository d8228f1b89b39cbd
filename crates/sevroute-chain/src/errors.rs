//! Error types for chain construction and dispatch.

use sevroute_sink::SinkError;
use thiserror::Error;

use crate::HandlerId;

/// Errors surfaced while linking or walking a [`crate::Chain`].
#[derive(Debug, Error)]
pub enum ChainError {
    /// The handle does not belong to this chain.
    #[error("unknown handler {id}")]
    UnknownHandler {
        /// Offending handle.
        id: HandlerId,
    },

    /// The successor links loop back to a handler already visited.
    #[error("handler chain revisits {id}")]
    Cycle {
        /// Handler that would have been visited twice.
        id: HandlerId,
    },

    /// The consuming handler failed to deliver the message.
    #[error("delivery failed: {0}")]
    Sink(#[from] SinkError),
}

impl ChainError {
    /// Creates an unknown handler error.
    pub const fn unknown_handler(id: HandlerId) -> Self {
        Self::UnknownHandler { id }
    }

    /// Creates a cycle error.
    pub const fn cycle(id: HandlerId) -> Self {
        Self::Cycle { id }
    }
}
