//! Cursor-based pagination over list endpoints.
//!
//! List endpoints return one page at a time in an envelope:
//!
//! ```json
//! {"object": "list", "data": [...], "has_more": true, "url": "/v1/invoiceitems"}
//! ```
//!
//! [`ListIter`] turns that into a lazy sequence. Nothing is fetched until the
//! first [`ListIterator::next`] call; later pages are requested only once the
//! current page is used up. The next page starts after the last id of the
//! previous page (`starting_after`), or, if the caller started with
//! `ending_before`, before the first id of the previous page.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::ListIterator;
//!
//! let mut iter = client.invoice_items().list(None);
//! while iter.next().await {
//!     let item = iter.invoice_item().unwrap();
//!     println!("{:?}: {}", item.id, item.amount);
//! }
//! if let Some(err) = iter.err() {
//!     eprintln!("listing stopped: {err}");
//! }
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{Backend, Error};
use crate::config::ApiKey;
use crate::form::Form;
use crate::params::{ListParams, ListParamsContainer};
use crate::rest::{Resource, ResourceOperation};

/// Metadata of one list page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    /// Whether more objects exist beyond this page.
    #[serde(default)]
    pub has_more: bool,
    /// Total number of objects, when the API includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
    /// The URL the page was fetched from.
    #[serde(default)]
    pub url: String,
}

/// One page of a list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct List<T> {
    /// The objects on this page, in API order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Page metadata.
    #[serde(flatten)]
    pub meta: ListMeta,
}

/// A pending page request.
pub type PageFuture<T> = Pin<Box<dyn Future<Output = Result<List<T>, Error>> + Send>>;

/// Fetches one page for the given list params and encoded form.
pub type PageQuery<T> = Box<dyn Fn(&ListParams, &Form) -> PageFuture<T> + Send + Sync>;

/// Common interface of every list iterator.
///
/// Resource iterators implement this by forwarding to a [`ListIter`] and add
/// a narrowed accessor such as `invoice_item()`.
#[allow(async_fn_in_trait)]
pub trait ListIterator {
    /// The element type.
    type Item;

    /// Advances to the next element, fetching a page if needed.
    ///
    /// Returns `false` once the list is exhausted or a fetch failed; check
    /// [`ListIterator::err`] to tell the two apart.
    async fn next(&mut self) -> bool;

    /// Returns the element the last successful [`ListIterator::next`] moved
    /// to. `None` before the first advance and after exhaustion.
    fn current(&self) -> Option<&Self::Item>;

    /// Returns the error that stopped iteration, if any.
    fn err(&self) -> Option<&Error>;

    /// Returns the metadata of the most recently fetched page.
    fn meta(&self) -> Option<&ListMeta>;
}

/// Lazy iterator over every object of a list endpoint.
pub struct ListIter<T> {
    query: PageQuery<T>,
    list_params: ListParams,
    form: Form,
    values: VecDeque<T>,
    current: Option<T>,
    meta: Option<ListMeta>,
    err: Option<Error>,
    backward: bool,
    done: bool,
}

impl<T: Resource> ListIter<T> {
    /// Creates an iterator. No request is made until the first advance.
    ///
    /// If `params` cannot be encoded, the iterator yields nothing and
    /// reports the encoding error through [`ListIterator::err`].
    pub fn new<P: ListParamsContainer + ?Sized>(params: &P, query: PageQuery<T>) -> Self {
        let list_params = params.list_params().clone();
        let backward = list_params.ending_before.is_some();
        let (form, err) = match Form::from_params(params) {
            Ok(form) => (form, None),
            Err(e) => (Form::new(), Some(e)),
        };
        let done = err.is_some();

        Self {
            query,
            list_params,
            form,
            values: VecDeque::new(),
            current: None,
            meta: None,
            err,
            backward,
            done,
        }
    }

    /// Drains the iterator into a `Vec`.
    ///
    /// # Errors
    ///
    /// Returns the error that stopped iteration, discarding elements
    /// collected before it.
    pub async fn collect_all(mut self) -> Result<Vec<T>, Error> {
        let mut items = Vec::new();
        while ListIterator::next(&mut self).await {
            if let Some(item) = self.current.take() {
                items.push(item);
            }
        }
        match self.err {
            Some(e) => Err(e),
            None => Ok(items),
        }
    }

    async fn fetch_page(&mut self) -> Result<(), Error> {
        let page = (self.query)(&self.list_params, &self.form).await?;

        let edge = if self.backward {
            page.data.first()
        } else {
            page.data.last()
        };
        let cursor = edge.and_then(Resource::id).map(ToString::to_string);

        if !page.meta.has_more || self.list_params.single {
            self.done = true;
        } else if let Some(id) = cursor {
            if self.backward {
                self.form.set("ending_before", id.as_str());
                self.list_params.ending_before = Some(id);
            } else {
                self.form.set("starting_after", id.as_str());
                self.list_params.starting_after = Some(id);
            }
        } else {
            tracing::warn!(
                "List page for {} reported more results but has no cursor id; stopping",
                T::OBJECT
            );
            self.done = true;
        }

        self.values.extend(page.data);
        self.meta = Some(page.meta);
        Ok(())
    }
}

impl<T: Resource> ListIterator for ListIter<T> {
    type Item = T;

    async fn next(&mut self) -> bool {
        if self.values.is_empty() && !self.done {
            if let Err(e) = self.fetch_page().await {
                self.err = Some(e);
                self.done = true;
            }
        }
        self.current = self.values.pop_front();
        self.current.is_some()
    }

    fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    fn meta(&self) -> Option<&ListMeta> {
        self.meta.as_ref()
    }
}

impl<T: fmt::Debug> fmt::Debug for ListIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListIter")
            .field("list_params", &self.list_params)
            .field("form", &self.form)
            .field("buffered", &self.values.len())
            .field("current", &self.current)
            .field("meta", &self.meta)
            .field("err", &self.err)
            .finish_non_exhaustive()
    }
}

/// Builds a page query that fetches `T`'s list path through `backend`.
pub(crate) fn paged_query<B: Backend, T: Resource>(backend: Arc<B>, key: ApiKey) -> PageQuery<T> {
    Box::new(move |params: &ListParams, form: &Form| -> PageFuture<T> {
        let backend = Arc::clone(&backend);
        let key = key.clone();
        let params = params.clone();
        let form = form.clone();
        Box::pin(async move {
            let path = T::path(ResourceOperation::List)?;
            backend
                .call_raw(path.http_method, path.template, &key, &form, &params)
                .await
        })
    })
}
