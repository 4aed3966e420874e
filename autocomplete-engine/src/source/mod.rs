//! Option source contract
//!
//! A source answers `request(query, reply)` by eventually calling
//! [`Reply::send`] exactly once. Replies land in a [`Mailbox`] owned by the
//! caller, in arrival order, tagged with the [`RequestId`] they answer.
//! Nothing here enforces a timeout: a reply that is dropped unsent never
//! produces a delivery, and its id is recorded as abandoned instead.

mod deferred;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

pub use deferred::{DeferredHandle, DeferredSource};

/// Monotonically increasing identifier of a source request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A completed lookup waiting to be applied
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery<T> {
    /// Request this delivery answers
    pub id: RequestId,
    /// Options returned by the source, in source order
    pub options: Vec<T>,
}

#[derive(Debug)]
struct MailboxInner<T> {
    queue: VecDeque<Delivery<T>>,
    next_id: u64,
    /// Requests whose reply was dropped without being sent
    abandoned: Vec<RequestId>,
}

/// Arrival-ordered queue of deliveries shared between a caller and its replies.
///
/// Single-threaded by construction (`Rc`); the widget that owns it never
/// crosses threads.
#[derive(Debug)]
pub struct Mailbox<T> {
    inner: Rc<RefCell<MailboxInner<T>>>,
}

impl<T> Clone for Mailbox<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MailboxInner {
                queue: VecDeque::new(),
                next_id: 0,
                abandoned: Vec::new(),
            })),
        }
    }

    /// Allocate the next request id and a reply handle bound to it.
    pub fn reply(&self) -> Reply<T> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            RequestId(inner.next_id)
        };
        Reply {
            id,
            mailbox: Some(self.clone()),
        }
    }

    /// The most recently allocated request id, if any.
    pub fn latest(&self) -> Option<RequestId> {
        match self.inner.borrow().next_id {
            0 => None,
            n => Some(RequestId(n)),
        }
    }

    /// Pop the oldest delivery.
    pub fn pop(&self) -> Option<Delivery<T>> {
        self.inner.borrow_mut().queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().queue.is_empty()
    }

    /// Number of requests abandoned and not yet taken.
    pub fn abandoned_len(&self) -> usize {
        self.inner.borrow().abandoned.len()
    }

    /// Drain the ids of requests whose reply was dropped unsent.
    pub fn take_abandoned(&self) -> Vec<RequestId> {
        std::mem::take(&mut self.inner.borrow_mut().abandoned)
    }

    fn push(&self, delivery: Delivery<T>) {
        self.inner.borrow_mut().queue.push_back(delivery);
    }
}

/// Single-shot handle used by a source to answer one request.
///
/// Dropping it without calling [`Reply::send`] marks the request abandoned.
#[derive(Debug)]
pub struct Reply<T> {
    id: RequestId,
    /// Taken on send
    mailbox: Option<Mailbox<T>>,
}

impl<T> Reply<T> {
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Deliver the options for this request. Consumes the reply.
    pub fn send(mut self, options: Vec<T>) {
        tracing::trace!("reply {} delivered {} options", self.id, options.len());
        if let Some(mailbox) = self.mailbox.take() {
            mailbox.push(Delivery {
                id: self.id,
                options,
            });
        }
    }
}

impl<T> Drop for Reply<T> {
    fn drop(&mut self) {
        if let Some(mailbox) = self.mailbox.take() {
            tracing::trace!("reply {} dropped unsent", self.id);
            mailbox.inner.borrow_mut().abandoned.push(self.id);
        }
    }
}

/// Asynchronous `query -> options` lookup.
///
/// Implementations may call `reply.send` before returning (synchronous
/// sources) or hold on to the reply and answer later.
pub trait OptionSource<T> {
    fn request(&mut self, query: &str, reply: Reply<T>);
}

impl<T, F> OptionSource<T> for F
where
    F: FnMut(&str, Reply<T>),
{
    fn request(&mut self, query: &str, reply: Reply<T>) {
        self(query, reply)
    }
}

/// Adapter turning a synchronous `&str -> Vec<T>` function into a source
pub struct FnSource<F> {
    lookup: F,
}

impl<F> FnSource<F> {
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }
}

impl<T, F> OptionSource<T> for FnSource<F>
where
    F: FnMut(&str) -> Vec<T>,
{
    fn request(&mut self, query: &str, reply: Reply<T>) {
        reply.send((self.lookup)(query));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_increase() {
        let mailbox: Mailbox<String> = Mailbox::new();
        assert_eq!(mailbox.latest(), None);
        let a = mailbox.reply();
        let b = mailbox.reply();
        assert!(a.id() < b.id());
        assert_eq!(mailbox.latest(), Some(b.id()));
    }

    #[test]
    fn test_deliveries_in_arrival_order() {
        let mailbox = Mailbox::new();
        let first = mailbox.reply();
        let second = mailbox.reply();

        second.send(vec!["b"]);
        first.send(vec!["a"]);

        assert_eq!(mailbox.len(), 2);
        let d = mailbox.pop().unwrap();
        assert_eq!(d.id, RequestId(2));
        assert_eq!(d.options, vec!["b"]);
        let d = mailbox.pop().unwrap();
        assert_eq!(d.id, RequestId(1));
        assert!(mailbox.is_empty());
    }

    #[test]
    fn test_dropped_reply_delivers_nothing() {
        let mailbox: Mailbox<u32> = Mailbox::new();
        let kept = mailbox.reply();
        drop(mailbox.reply());
        assert!(mailbox.pop().is_none());
        assert_eq!(mailbox.abandoned_len(), 1);
        assert_eq!(mailbox.take_abandoned(), vec![RequestId(2)]);
        assert!(mailbox.take_abandoned().is_empty());

        kept.send(vec![7]);
        assert_eq!(mailbox.abandoned_len(), 0);
        assert_eq!(mailbox.pop().unwrap().options, vec![7]);
    }

    #[test]
    fn test_closure_source() {
        let mailbox = Mailbox::new();
        let mut source = |query: &str, reply: Reply<String>| {
            reply.send(vec![query.to_uppercase()]);
        };
        source.request("abc", mailbox.reply());
        assert_eq!(mailbox.pop().unwrap().options, vec!["ABC".to_string()]);
    }

    #[test]
    fn test_fn_source() {
        let mailbox = Mailbox::new();
        let mut source = FnSource::new(|q: &str| -> Vec<String> { q.chars().map(String::from).collect() });
        source.request("xy", mailbox.reply());
        assert_eq!(
            mailbox.pop().unwrap().options,
            vec!["x".to_string(), "y".to_string()]
        );
    }
}
