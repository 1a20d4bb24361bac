use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Order ============

/// A single order record as the rest of the system sees it.
///
/// This is the clean internal model. The backend's irregular field naming
/// (exported-style capitalization, one misspelled key) never leaves the
/// wire module; everything here is consistently named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Opaque order identifier.
    pub id: String,
    pub track_number: String,
    /// Entry channel code.
    pub entry: String,
    pub locale: String,
    /// Carried through from the backend record; never displayed.
    pub internal_signature: String,
    pub customer_id: String,
    pub delivery_service: String,
    pub shard_key: String,
    /// Shipping-model identifier.
    pub shipping_model_id: i64,
    pub date_created: DateTime<Utc>,
    /// Out-of-shard marker.
    pub out_of_shard: String,
    /// Absent when the backend omits the delivery group.
    pub delivery: Option<Delivery>,
    /// Absent when the backend omits the payment group.
    pub payment: Option<Payment>,
    /// May be empty.
    pub items: Vec<Item>,
}

/// Delivery address group of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub postal_code: String,
    pub city: String,
    pub address: String,
    pub region: String,
}

/// Payment group of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub transaction: String,
    /// `None` when the backend supplies no request id.
    pub request_id: Option<String>,
    pub currency: String,
    pub provider: String,
    pub amount: i64,
    /// Payment time as unix seconds, displayed verbatim.
    pub paid_at: i64,
    pub bank: String,
    pub delivery_cost: i64,
    pub goods_total: i64,
    pub custom_fee: i64,
}

/// One line item of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub brand: String,
    pub price: i64,
    /// Discount percent.
    pub sale: i64,
    pub total_price: i64,
    pub size: String,
    /// Numeric status code, displayed verbatim.
    pub status: i64,
    pub track_number: String,
    pub chart_id: i64,
    pub rid: String,
    /// Numeric product-model identifier.
    pub nm_id: i64,
}

// ============ Lookup result ============

/// An order together with the backend's cache-hit indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedOrder {
    pub order: Order,
    /// Whether the backend served this order from its fast path.
    pub served_from_cache: bool,
}
