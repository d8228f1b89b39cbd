//! Observer registry publishing severity-specific events.
//!
//! The [`Registry`] owns its [`Subscriber`]s and hands out [`SubscriberId`]
//! handles. Publishing an [`Event`] invokes the matching callback on every
//! registered subscriber in registration order; variants that do not react to
//! that event treat the callback as a no-op.

mod errors;
mod registry;
mod subscriber;

pub use errors::ObserverError;
pub use registry::{Notification, Registry, SubscriberId};
pub use subscriber::{Event, Subscriber};

/// Tracing target for observer notifications.
pub(crate) const OBSERVER_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::observer");
