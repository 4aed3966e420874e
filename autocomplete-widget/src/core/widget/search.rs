//! Option source adapter: issues requests and hands back completed lookups

use std::collections::HashMap;

use autocomplete_engine::{Mailbox, OptionSource, RequestId};
use tracing::{debug, trace};

use super::RequestKind;

/// A lookup ready to be applied to the widget state
pub(super) struct Completed<T> {
    pub id: RequestId,
    pub kind: RequestKind,
    pub options: Vec<T>,
}

/// Wraps the caller's [`OptionSource`] and remembers why each request was made.
pub(super) struct SearchAdapter<T> {
    source: Box<dyn OptionSource<T>>,
    mailbox: Mailbox<T>,
    in_flight: HashMap<RequestId, RequestKind>,
    discard_stale: bool,
}

impl<T> SearchAdapter<T> {
    pub fn new(source: Box<dyn OptionSource<T>>, discard_stale: bool) -> Self {
        Self {
            source,
            mailbox: Mailbox::new(),
            in_flight: HashMap::new(),
            discard_stale,
        }
    }

    /// Issue a request. Synchronous sources answer before this returns; the
    /// answer is still only applied through [`Self::take_completed`].
    pub fn request(&mut self, query: &str, kind: RequestKind) -> RequestId {
        let reply = self.mailbox.reply();
        let id = reply.id();
        debug!("search {} for {:?} ({:?})", id, query, kind);
        self.in_flight.insert(id, kind);
        self.source.request(query, reply);
        id
    }

    /// Number of requests issued and still waiting for an answer.
    /// Requests whose reply was dropped unsent are not counted.
    pub fn in_flight(&self) -> usize {
        self.in_flight
            .len()
            .saturating_sub(self.mailbox.abandoned_len())
    }

    /// Drain answered requests in arrival order, forgetting abandoned ones.
    ///
    /// With `discard_stale`, answers to anything but the latest request are
    /// dropped here.
    pub fn take_completed(&mut self) -> Vec<Completed<T>> {
        for id in self.mailbox.take_abandoned() {
            if self.in_flight.remove(&id).is_some() {
                debug!("request {} abandoned by its source", id);
            }
        }

        let latest = self.mailbox.latest();
        let mut completed = Vec::new();
        while let Some(delivery) = self.mailbox.pop() {
            let Some(kind) = self.in_flight.remove(&delivery.id) else {
                trace!("ignoring unknown delivery {}", delivery.id);
                continue;
            };
            if self.discard_stale && Some(delivery.id) != latest {
                debug!(
                    "dropping stale result {} ({} options), latest is {:?}",
                    delivery.id,
                    delivery.options.len(),
                    latest
                );
                continue;
            }
            completed.push(Completed {
                id: delivery.id,
                kind,
                options: delivery.options,
            });
        }
        completed
    }
}
