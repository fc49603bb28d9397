//! REST resource infrastructure.
//!
//! - **[`Resource`] trait**: object name, paths and id of an API object type
//! - **Path building**: [`ResourcePath`] tables and [`format_url_path`]
//! - **Pagination**: [`ListIter`], the [`ListIterator`] trait and the
//!   [`List`] page envelope
//! - **[`resources`]**: the per-resource clients
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::{ListIterator, StripeClient};
//!
//! let client = StripeClient::new(&config)?;
//!
//! let item = client.invoice_items().get("ii_123", None).await?;
//! println!("{:?}: {}", item.id, item.amount);
//!
//! let mut iter = client.invoice_items().list(None);
//! while iter.next().await {
//!     println!("{:?}", iter.invoice_item());
//! }
//! ```

mod list;
mod path;
mod resource;
pub mod resources;

pub use list::{List, ListIter, ListIterator, ListMeta, PageFuture, PageQuery};
pub use path::{format_url_path, get_path, ResourceOperation, ResourcePath};
pub use resource::Resource;
