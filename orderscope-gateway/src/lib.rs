//! # orderscope-gateway
//!
//! Access layer for the order backend: the clean [`Order`] model, the
//! backend's wire schema with its irregular field names, and the
//! [`OrderGateway`] trait with a `reqwest`-backed implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use orderscope_gateway::{HttpOrderGateway, OrderGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = HttpOrderGateway::new("http://127.0.0.1:8081");
//!     let fetched = gateway.fetch_order("d2a797a7-6b33-4a0a-95c8-f3b2a4e0a111").await?;
//!     println!(
//!         "{} ({} items, cache hit: {})",
//!         fetched.order.id,
//!         fetched.order.items.len(),
//!         fetched.served_from_cache
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, GatewayError>`](GatewayError):
//!
//! - [`GatewayError::Status`] — the backend answered with a non-2xx status
//! - [`GatewayError::InvalidFormat`] — the response envelope is unusable
//! - [`GatewayError::Network`] / [`GatewayError::Timeout`] /
//!   [`GatewayError::Decode`] — transport-level failures
//!
//! `GatewayError::is_expected()` separates user-level outcomes from
//! operational failures for log leveling.

mod error;
mod http;
mod traits;
mod types;
mod wire;

// Re-export error types
pub use error::{GatewayError, Result};

// Re-export the gateway trait and its HTTP implementation
pub use http::HttpOrderGateway;
pub use traits::OrderGateway;

// Re-export types
pub use types::{Delivery, FetchedOrder, Item, Order, Payment};
