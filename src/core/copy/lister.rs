//! Lazy resource enumeration
//!
//! Remote collections are enumerated through [`ResourceLister`], an explicit
//! async state machine: each `try_next` call yields one descriptor, an error,
//! or the end of the sequence. Sequences are finite and single-pass; a fresh
//! lister must be constructed for every copy operation.
//!
//! [`Paginator`] is the reusable continuation-token implementation: it walks
//! a paged list endpoint, buffering one page at a time, until a page comes
//! back without a token.

use crate::domain::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::collections::VecDeque;

/// One page of a remote listing
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Descriptors in enumeration order, already mapped and filtered
    pub items: Vec<T>,
    /// Opaque cursor; `None` terminates the enumeration
    pub continuation_token: Option<String>,
}

/// A lazy, finite, single-pass sequence of resource descriptors
#[async_trait]
pub trait ResourceLister: Send {
    type Item: Send;

    /// Yield the next descriptor, or `None` at the end of the sequence
    ///
    /// # Errors
    ///
    /// Errors from the underlying list calls propagate uncaught; listing is
    /// never retried.
    async fn try_next(&mut self) -> Result<Option<Self::Item>>;
}

type PageFetcher<T> = Box<dyn FnMut(Option<String>) -> BoxFuture<'static, Result<Page<T>>> + Send>;

/// Continuation-token pagination state machine
///
/// Drives a page fetcher: called first with no token, then with whatever
/// token the previous page returned, until a page carries none. Empty pages
/// that still carry a token keep the enumeration going.
pub struct Paginator<T> {
    fetch: PageFetcher<T>,
    continuation: Option<String>,
    buffer: VecDeque<T>,
    exhausted: bool,
}

impl<T: Send> Paginator<T> {
    pub fn new<F>(fetch: F) -> Self
    where
        F: FnMut(Option<String>) -> BoxFuture<'static, Result<Page<T>>> + Send + 'static,
    {
        Self {
            fetch: Box::new(fetch),
            continuation: None,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }
}

#[async_trait]
impl<T: Send> ResourceLister for Paginator<T> {
    type Item = T;

    async fn try_next(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            if self.exhausted {
                return Ok(None);
            }

            let page = (self.fetch)(self.continuation.take()).await?;
            self.exhausted = page.continuation_token.is_none();
            self.continuation = page.continuation_token;
            self.buffer.extend(page.items);
        }
    }
}
