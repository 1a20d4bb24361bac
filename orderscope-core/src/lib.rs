//! Orderscope Core Library
//!
//! Provides the headless logic of the order-lookup client:
//! - Lookup state machine (`LookupController`)
//! - Address-line synchronization and history (`location`)
//! - Panel visibility state (`StatusPresenter`)
//! - Rendered order form (`OrderViewModel`)
//!
//! This library performs no I/O of its own. The order backend is reached
//! through the injected `OrderGateway` trait, and lookups execute as tasks
//! the frontend spawns, so every flow is testable with a scripted gateway
//! and no real UI.

pub mod error;
pub mod location;
pub mod lookup;
pub mod presenter;
pub mod types;
pub mod view_model;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use location::{History, HistoryEntry, UrlSynchronizer};
pub use lookup::{LookupController, LookupTicket, run_lookup};
pub use presenter::StatusPresenter;
pub use types::{DisplayState, LookupMeta, LookupReply};
pub use view_model::{ItemCard, NO_ITEMS_PLACEHOLDER, OrderViewModel, Slot};

// Re-export the gateway surface the frontend needs
pub use orderscope_gateway::{
    Delivery, FetchedOrder, GatewayError, HttpOrderGateway, Item, Order, OrderGateway, Payment,
};
