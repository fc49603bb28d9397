//! Per-resource API clients.
//!
//! Each submodule covers one endpoint family:
//!
//! - [`invoice_item`]: `/invoiceitems` (create, get, update, delete, list)
//! - [`order_return`]: `/order_returns` (list)
//!
//! A module exposes the resource type, its params types, a `Client` bound to
//! a [`Backend`](crate::clients::Backend) and an API key, and an `Iter`
//! returned by `Client::list`.

mod common;
pub mod invoice_item;
pub mod order_return;

pub use invoice_item::{InvoiceItem, InvoiceItemListParams, InvoiceItemParams, Period};
pub use order_return::{OrderItem, OrderItemType, OrderReturn, OrderReturnListParams};
