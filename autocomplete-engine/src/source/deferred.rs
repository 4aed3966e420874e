//! Source that parks requests until the host resolves them

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::debug;

use super::{OptionSource, Reply, RequestId};

struct Pending<T> {
    query: String,
    reply: Reply<T>,
}

type Queue<T> = Rc<RefCell<VecDeque<Pending<T>>>>;

/// An [`OptionSource`] that never answers on its own.
///
/// Every request is queued; the paired [`DeferredHandle`] answers them
/// later, in any order. Useful for hosts whose lookups complete on a later
/// event-loop turn, and for reproducing out-of-order completions.
pub struct DeferredSource<T> {
    queue: Queue<T>,
}

/// Host-side handle for resolving requests held by a [`DeferredSource`]
pub struct DeferredHandle<T> {
    queue: Queue<T>,
}

impl<T> Clone for DeferredHandle<T> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<T> DeferredSource<T> {
    /// Create a source and the handle that resolves its requests.
    pub fn new() -> (Self, DeferredHandle<T>) {
        let queue: Queue<T> = Rc::new(RefCell::new(VecDeque::new()));
        let handle = DeferredHandle {
            queue: Rc::clone(&queue),
        };
        (Self { queue }, handle)
    }
}

impl<T> OptionSource<T> for DeferredSource<T> {
    fn request(&mut self, query: &str, reply: Reply<T>) {
        debug!("deferring request {} for {:?}", reply.id(), query);
        self.queue.borrow_mut().push_back(Pending {
            query: query.to_string(),
            reply,
        });
    }
}

impl<T> DeferredHandle<T> {
    /// Number of requests still waiting for an answer
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Queries of the outstanding requests, oldest first
    pub fn pending_queries(&self) -> Vec<String> {
        self.queue
            .borrow()
            .iter()
            .map(|p| p.query.clone())
            .collect()
    }

    /// Answer the oldest outstanding request.
    pub fn resolve_next(&self, options: Vec<T>) -> Option<RequestId> {
        let pending = self.queue.borrow_mut().pop_front()?;
        Some(Self::answer(pending, options))
    }

    /// Answer the newest outstanding request.
    pub fn resolve_latest(&self, options: Vec<T>) -> Option<RequestId> {
        let pending = self.queue.borrow_mut().pop_back()?;
        Some(Self::answer(pending, options))
    }

    /// Answer the oldest outstanding request by running `lookup` on its query.
    pub fn resolve_next_with(&self, lookup: impl FnOnce(&str) -> Vec<T>) -> Option<RequestId> {
        let pending = self.queue.borrow_mut().pop_front()?;
        let options = lookup(&pending.query);
        Some(Self::answer(pending, options))
    }

    /// Drop every outstanding request without answering. The caller's
    /// mailbox records each of them as abandoned.
    pub fn abandon_all(&self) -> usize {
        let mut queue = self.queue.borrow_mut();
        let n = queue.len();
        queue.clear();
        n
    }

    // The queue borrow is released before `send` so a reply may be sent
    // while the handle is shared with the mailbox owner.
    fn answer(pending: Pending<T>, options: Vec<T>) -> RequestId {
        let id = pending.reply.id();
        pending.reply.send(options);
        id
    }
}
