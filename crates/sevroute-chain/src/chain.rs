//! Handler storage, linking and the dispatch walk.

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use sevroute_core::LogMessage;
use tracing::{debug, trace, warn};

use crate::outcome::{Outcome, TerminalCondition, TerminalKind};
use crate::{CHAIN_TARGET, ChainError, Handler};

/// Source of per-chain tags; a handle is only valid for the chain whose tag it
/// carries.
static NEXT_CHAIN: AtomicU64 = AtomicU64::new(0);

/// Handle to a handler owned by a [`Chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId {
    chain: u64,
    index: usize,
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.chain, self.index)
    }
}

#[derive(Debug, Clone)]
struct Node {
    handler: Handler,
    next: Option<HandlerId>,
}

/// Owning collection of handlers and their successor links.
///
/// Handlers are appended with [`Chain::push`] and linked with
/// [`Chain::set_next`]. Links are expected to form a simple list built up
/// front by the caller; [`Chain::handle`] reports a cycle instead of looping.
///
/// Every chain carries its own tag, so handles issued by one chain are
/// rejected by another even when their positions coincide. A clone keeps the
/// tag and therefore accepts the original's handles.
#[derive(Debug, Clone)]
pub struct Chain {
    tag: u64,
    nodes: Vec<Node>,
}

impl Default for Chain {
    fn default() -> Self {
        Self {
            tag: NEXT_CHAIN.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
        }
    }
}

impl Chain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes every handler and links each one to the next in iteration
    /// order.
    ///
    /// Returns the chain together with the head, or `None` when no handlers
    /// were supplied.
    #[must_use]
    pub fn linked(handlers: impl IntoIterator<Item = Handler>) -> (Self, Option<HandlerId>) {
        let mut chain = Self::new();
        let mut previous: Option<HandlerId> = None;
        let mut head = None;
        for handler in handlers {
            let id = chain.push(handler);
            match previous {
                Some(prev) => chain.link(prev, id),
                None => head = Some(id),
            }
            previous = Some(id);
        }
        (chain, head)
    }

    /// Adds an unlinked handler and returns its handle.
    pub fn push(&mut self, handler: Handler) -> HandlerId {
        let id = HandlerId {
            chain: self.tag,
            index: self.nodes.len(),
        };
        self.nodes.push(Node {
            handler,
            next: None,
        });
        id
    }

    /// Makes `next` the successor of `handler`, replacing any previous link.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownHandler`] when either handle does not
    /// belong to this chain.
    pub fn set_next(&mut self, handler: HandlerId, next: HandlerId) -> Result<(), ChainError> {
        self.node(next)?;
        self.node(handler)?;
        self.link(handler, next);
        Ok(())
    }

    /// Returns the handler behind `id`.
    #[must_use]
    pub fn get(&self, id: HandlerId) -> Option<&Handler> {
        self.node(id).ok().map(|node| &node.handler)
    }

    /// Returns the successor of `id`, if one is linked.
    #[must_use]
    pub fn next(&self, id: HandlerId) -> Option<HandlerId> {
        self.node(id).ok().and_then(|node| node.next)
    }

    /// Number of handlers owned by the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the chain owns no handlers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Offers `message` to `head` and then to each successor in turn.
    ///
    /// Warning lines are written to `console`; error handlers write their own
    /// files.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownHandler`] for a foreign `head`,
    /// [`ChainError::Cycle`] when the links loop, and [`ChainError::Sink`] when
    /// the consuming handler fails to deliver.
    pub fn handle<W: Write + ?Sized>(
        &self,
        head: HandlerId,
        message: &LogMessage,
        console: &mut W,
    ) -> Result<Outcome, ChainError> {
        let mut visited = 0_usize;
        let mut current = Some(head);
        while let Some(id) = current {
            let node = self.node(id)?;
            if visited == self.nodes.len() {
                return Err(ChainError::cycle(id));
            }
            visited += 1;

            if node.handler.severity() == message.severity() {
                debug!(
                    target: CHAIN_TARGET,
                    handler = %node.handler.kind(),
                    id = %id,
                    severity = %message.severity(),
                    "handler matched"
                );
                return Ok(node.handler.consume(message, console)?);
            }

            trace!(
                target: CHAIN_TARGET,
                handler = %node.handler.kind(),
                id = %id,
                severity = %message.severity(),
                "forwarding to successor"
            );
            current = node.next;
        }

        Ok(Self::exhausted(message))
    }

    fn exhausted(message: &LogMessage) -> Outcome {
        match TerminalKind::for_severity(message.severity()) {
            Some(kind) => {
                warn!(
                    target: CHAIN_TARGET,
                    severity = %message.severity(),
                    "chain exhausted by terminal message"
                );
                Outcome::Terminal(TerminalCondition::new(kind, message.text()))
            }
            None => {
                debug!(
                    target: CHAIN_TARGET,
                    severity = %message.severity(),
                    "chain exhausted; message dropped"
                );
                Outcome::Dropped
            }
        }
    }

    fn node(&self, id: HandlerId) -> Result<&Node, ChainError> {
        if id.chain != self.tag {
            return Err(ChainError::unknown_handler(id));
        }
        self.nodes
            .get(id.index)
            .ok_or_else(|| ChainError::unknown_handler(id))
    }

    fn link(&mut self, handler: HandlerId, next: HandlerId) {
        if handler.chain != self.tag {
            return;
        }
        if let Some(node) = self.nodes.get_mut(handler.index) {
            node.next = Some(next);
        }
    }
}
