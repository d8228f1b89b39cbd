//! Chain of Responsibility over severity-tagged messages.
//!
//! A [`Chain`] owns an ordered set of [`Handler`] nodes, each bound to exactly
//! one [`sevroute_core::Severity`]. Nodes are addressed through lightweight
//! [`HandlerId`] handles and linked with [`Chain::set_next`]. Dispatching a
//! message walks the links from a chosen head until a node bound to the
//! message's severity consumes it.
//!
//! ## Outcomes
//!
//! Every dispatch produces an [`Outcome`] that callers must match:
//!
//! - [`Outcome::Consumed`]: a warning or error handler delivered the message
//!   (console line or file rewrite respectively).
//! - [`Outcome::Terminal`]: a fatal or unknown message either reached its own
//!   handler or fell off the end of the chain. The caller reports the
//!   [`TerminalCondition`] and abandons the current processing attempt.
//! - [`Outcome::Dropped`]: a warning or error message found no handler.
//!
//! Delivery failures and invalid handles are errors ([`ChainError`]), never
//! outcomes.

mod chain;
mod errors;
mod handler;
mod outcome;

pub use chain::{Chain, HandlerId};
pub use errors::ChainError;
pub use handler::{Handler, HandlerKind};
pub use outcome::{Outcome, TerminalCondition, TerminalKind};

/// Tracing target for chain dispatch.
pub(crate) const CHAIN_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::chain");
