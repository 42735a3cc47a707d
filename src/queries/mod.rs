//! Query Builder/Selector: item search, item classification, price request
//! construction and the price fetch itself.
//!
//! [`PriceQuery`] borrows a loaded [`References`](crate::reference::References),
//! so prices cannot be requested before the reference lookups exist.

pub mod classify;
pub mod filter;
pub mod prices;
pub mod request;

pub use classify::{classify, Category};
pub use filter::filter;
pub use prices::PriceQuery;
pub use request::{build_query, PriceRequest};
