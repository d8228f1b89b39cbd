//! Subscriber storage and event publication.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::{Event, OBSERVER_TARGET, ObserverError, Subscriber};

/// Source of per-registry tags.
static NEXT_REGISTRY: AtomicU64 = AtomicU64::new(0);

/// Handle identifying a subscriber owned by a [`Registry`].
///
/// Handles carry the tag of the registry that issued them and are never
/// valid for another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId {
    registry: u64,
    serial: u64,
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.registry, self.serial)
    }
}

/// Summary of a single publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    event: Event,
    delivered_to: Vec<SubscriberId>,
}

impl Notification {
    /// Event that was published.
    #[must_use]
    pub const fn event(&self) -> Event {
        self.event
    }

    /// Subscribers whose callback acted, in notification order.
    ///
    /// A subscriber registered more than once appears once per registration.
    #[must_use]
    pub fn delivered_to(&self) -> &[SubscriberId] {
        &self.delivered_to
    }

    /// Returns `true` when `id` acted on the event at least once.
    #[must_use]
    pub fn reached(&self, id: SubscriberId) -> bool {
        self.delivered_to.contains(&id)
    }
}

/// Publisher holding subscribers in registration order.
///
/// The registry owns every subscriber it has been given. Registration entries
/// refer to them by [`SubscriberId`], so one subscriber may be registered
/// several times and [`Registry::remove_observer`] drops every entry for it.
///
/// [`Registry::remove_observer`] only unregisters: the subscriber stays owned
/// so it can be re-attached later. [`Registry::forget`] releases it for good.
#[derive(Debug)]
pub struct Registry {
    tag: u64,
    subscribers: HashMap<SubscriberId, Subscriber>,
    entries: Vec<SubscriberId>,
    next_serial: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            tag: NEXT_REGISTRY.fetch_add(1, Ordering::Relaxed),
            subscribers: HashMap::new(),
            entries: Vec::new(),
            next_serial: 0,
        }
    }
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `subscriber` and registers it once.
    pub fn add_observer(&mut self, subscriber: Subscriber) -> SubscriberId {
        let id = SubscriberId {
            registry: self.tag,
            serial: self.next_serial,
        };
        self.next_serial += 1;
        self.subscribers.insert(id, subscriber);
        self.entries.push(id);
        debug!(target: OBSERVER_TARGET, subscriber = %id, "observer added");
        id
    }

    /// Registers an already-owned subscriber again.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::UnknownSubscriber`] when `id` was not issued by
    /// this registry or has been forgotten.
    pub fn attach(&mut self, id: SubscriberId) -> Result<(), ObserverError> {
        if !self.subscribers.contains_key(&id) {
            return Err(ObserverError::unknown_subscriber(id));
        }
        self.entries.push(id);
        debug!(target: OBSERVER_TARGET, subscriber = %id, "observer attached");
        Ok(())
    }

    /// Removes every registration of `id` and returns how many were removed.
    ///
    /// The subscriber itself stays owned and can be re-attached. Handles from
    /// another registry match nothing and remove nothing.
    pub fn remove_observer(&mut self, id: SubscriberId) -> usize {
        if id.registry != self.tag {
            return 0;
        }
        let before = self.entries.len();
        self.entries.retain(|entry| *entry != id);
        let removed = before - self.entries.len();
        debug!(target: OBSERVER_TARGET, subscriber = %id, removed, "observer removed");
        removed
    }

    /// Unregisters `id` everywhere and gives up ownership of its subscriber.
    ///
    /// Returns the subscriber, or `None` when `id` is foreign or already
    /// forgotten. The handle is invalid afterwards.
    pub fn forget(&mut self, id: SubscriberId) -> Option<Subscriber> {
        let subscriber = self.subscribers.remove(&id)?;
        self.entries.retain(|entry| *entry != id);
        debug!(target: OBSERVER_TARGET, subscriber = %id, "observer forgotten");
        Some(subscriber)
    }

    /// Number of subscribers owned, registered or not.
    #[must_use]
    pub fn owned(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns the subscriber behind `id`, registered or not.
    #[must_use]
    pub fn subscriber(&self, id: SubscriberId) -> Option<&Subscriber> {
        self.subscribers.get(&id)
    }

    /// Returns `true` when `id` currently has at least one registration.
    #[must_use]
    pub fn is_registered(&self, id: SubscriberId) -> bool {
        self.entries.contains(&id)
    }

    /// Number of registration entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Publishes a warning to every registration.
    ///
    /// # Errors
    ///
    /// See [`Registry::publish`].
    pub fn warning<W: Write + ?Sized>(
        &self,
        message: &str,
        console: &mut W,
    ) -> Result<Notification, ObserverError> {
        self.publish(Event::Warning, message, console)
    }

    /// Publishes an error to every registration.
    ///
    /// # Errors
    ///
    /// See [`Registry::publish`].
    pub fn error<W: Write + ?Sized>(
        &self,
        message: &str,
        console: &mut W,
    ) -> Result<Notification, ObserverError> {
        self.publish(Event::Error, message, console)
    }

    /// Publishes a fatal error to every registration.
    ///
    /// # Errors
    ///
    /// See [`Registry::publish`].
    pub fn fatal_error<W: Write + ?Sized>(
        &self,
        message: &str,
        console: &mut W,
    ) -> Result<Notification, ObserverError> {
        self.publish(Event::FatalError, message, console)
    }

    /// Invokes the `event` callback on every registration in order.
    ///
    /// The registration list cannot change while a publication is in
    /// progress.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::Delivery`] for the first subscriber that fails;
    /// subscribers after it are not notified.
    pub fn publish<W: Write + ?Sized>(
        &self,
        event: Event,
        message: &str,
        console: &mut W,
    ) -> Result<Notification, ObserverError> {
        let mut delivered_to = Vec::new();
        for &id in &self.entries {
            let Some(subscriber) = self.subscribers.get(&id) else {
                continue;
            };
            let acted = subscriber
                .notify(event, message, console)
                .map_err(|source| ObserverError::delivery(id, source))?;
            trace!(
                target: OBSERVER_TARGET,
                subscriber = %id,
                event = %event,
                acted,
                "subscriber notified"
            );
            if acted {
                delivered_to.push(id);
            }
        }
        debug!(
            target: OBSERVER_TARGET,
            event = %event,
            registrations = self.entries.len(),
            delivered = delivered_to.len(),
            "event published"
        );
        Ok(Notification {
            event,
            delivered_to,
        })
    }
}

#[cfg(test)]
mod tests;
