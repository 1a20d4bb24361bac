//! Rendered form of an order: named display slots plus item cards.

use std::collections::BTreeMap;

use orderscope_gateway::{Item, Order};

use crate::types::LookupMeta;

/// Literal shown instead of an absent payment request id.
const REQUEST_ID_FALLBACK: &str = "N/A";

/// Literal shown in place of the item list when an order has no items.
pub const NO_ITEMS_PLACEHOLDER: &str = "No items";

/// A named display slot.
///
/// Every top-level order field, each field of the optional delivery and
/// payment groups, and the two lookup-meta readouts have one stable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Slot {
    OrderId,
    TrackNumber,
    Entry,
    Locale,
    CustomerId,
    DeliveryService,
    ShardKey,
    ShippingModelId,
    DateCreated,
    OutOfShard,
    DeliveryName,
    DeliveryPhone,
    DeliveryEmail,
    DeliveryPostalCode,
    DeliveryCity,
    DeliveryAddress,
    DeliveryRegion,
    PaymentTransaction,
    PaymentRequestId,
    PaymentCurrency,
    PaymentProvider,
    PaymentAmount,
    PaymentPaidAt,
    PaymentBank,
    PaymentDeliveryCost,
    PaymentGoodsTotal,
    PaymentCustomFee,
    ResponseTime,
    DataSource,
}

impl Slot {
    /// Overview slots, in display order.
    pub const OVERVIEW: [Self; 10] = [
        Self::OrderId,
        Self::TrackNumber,
        Self::Entry,
        Self::Locale,
        Self::CustomerId,
        Self::DeliveryService,
        Self::ShardKey,
        Self::ShippingModelId,
        Self::DateCreated,
        Self::OutOfShard,
    ];

    /// Delivery-group slots, in display order.
    pub const DELIVERY: [Self; 7] = [
        Self::DeliveryName,
        Self::DeliveryPhone,
        Self::DeliveryEmail,
        Self::DeliveryPostalCode,
        Self::DeliveryCity,
        Self::DeliveryAddress,
        Self::DeliveryRegion,
    ];

    /// Payment-group slots, in display order.
    pub const PAYMENT: [Self; 10] = [
        Self::PaymentTransaction,
        Self::PaymentRequestId,
        Self::PaymentCurrency,
        Self::PaymentProvider,
        Self::PaymentAmount,
        Self::PaymentPaidAt,
        Self::PaymentBank,
        Self::PaymentDeliveryCost,
        Self::PaymentGoodsTotal,
        Self::PaymentCustomFee,
    ];

    /// Lookup-meta slots, in display order.
    pub const META: [Self; 2] = [Self::ResponseTime, Self::DataSource];

    /// Human-readable label for the slot.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OrderId => "Order ID",
            Self::TrackNumber => "Track Number",
            Self::Entry => "Entry",
            Self::Locale => "Locale",
            Self::CustomerId => "Customer ID",
            Self::DeliveryService => "Delivery Service",
            Self::ShardKey => "Shard Key",
            Self::ShippingModelId => "Shipping Model ID",
            Self::DateCreated => "Created",
            Self::OutOfShard => "Out-of-Shard",
            Self::DeliveryName => "Name",
            Self::DeliveryPhone => "Phone",
            Self::DeliveryEmail => "Email",
            Self::DeliveryPostalCode => "Postal Code",
            Self::DeliveryCity => "City",
            Self::DeliveryAddress => "Address",
            Self::DeliveryRegion => "Region",
            Self::PaymentTransaction => "Transaction",
            Self::PaymentRequestId => "Request ID",
            Self::PaymentCurrency => "Currency",
            Self::PaymentProvider => "Provider",
            Self::PaymentAmount => "Amount",
            Self::PaymentPaidAt => "Paid At",
            Self::PaymentBank => "Bank",
            Self::PaymentDeliveryCost => "Delivery Cost",
            Self::PaymentGoodsTotal => "Goods Total",
            Self::PaymentCustomFee => "Custom Fee",
            Self::ResponseTime => "Response Time",
            Self::DataSource => "Data Source",
        }
    }
}

/// One rendered line item: a heading and labeled fields in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub heading: String,
    pub fields: Vec<(&'static str, String)>,
}

impl ItemCard {
    fn render(index: usize, item: &Item) -> Self {
        Self {
            heading: format!("Item {}: {}", index + 1, item.name),
            fields: vec![
                ("Brand", item.brand.clone()),
                ("Price", format!("{} RUB", item.price)),
                ("Sale", format!("{}%", item.sale)),
                ("Total Price", item.total_price.to_string()),
                ("Size", item.size.clone()),
                ("Status", item.status.to_string()),
                ("Track Number", item.track_number.clone()),
                ("Chart ID", item.chart_id.to_string()),
                ("RID", item.rid.clone()),
                ("Nm ID", item.nm_id.to_string()),
            ],
        }
    }
}

/// Rendered order state backing the result panel.
///
/// `apply` is a pure field mapping and is idempotent: applying the same
/// order twice leaves identical slot text and no duplicate item cards,
/// because the item list is cleared before it is repopulated and absent
/// optional groups clear their slots instead of leaving stale values.
#[derive(Debug, Default)]
pub struct OrderViewModel {
    slots: BTreeMap<Slot, String>,
    items: Vec<ItemCard>,
    items_placeholder: bool,
}

impl OrderViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `order` and `meta` into the display slots and rebuilds the
    /// item cards.
    pub fn apply(&mut self, order: &Order, meta: LookupMeta) {
        self.set(Slot::OrderId, order.id.clone());
        self.set(Slot::TrackNumber, order.track_number.clone());
        self.set(Slot::Entry, order.entry.clone());
        self.set(Slot::Locale, order.locale.clone());
        self.set(Slot::CustomerId, order.customer_id.clone());
        self.set(Slot::DeliveryService, order.delivery_service.clone());
        self.set(Slot::ShardKey, order.shard_key.clone());
        self.set(Slot::ShippingModelId, order.shipping_model_id.to_string());
        self.set(
            Slot::DateCreated,
            order
                .date_created
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
        );
        self.set(Slot::OutOfShard, order.out_of_shard.clone());

        match &order.delivery {
            Some(delivery) => {
                self.set(Slot::DeliveryName, delivery.name.clone());
                self.set(Slot::DeliveryPhone, delivery.phone.clone());
                self.set(Slot::DeliveryEmail, delivery.email.clone());
                self.set(Slot::DeliveryPostalCode, delivery.postal_code.clone());
                self.set(Slot::DeliveryCity, delivery.city.clone());
                self.set(Slot::DeliveryAddress, delivery.address.clone());
                self.set(Slot::DeliveryRegion, delivery.region.clone());
            }
            None => self.clear_group(&Slot::DELIVERY),
        }

        match &order.payment {
            Some(payment) => {
                self.set(Slot::PaymentTransaction, payment.transaction.clone());
                self.set(
                    Slot::PaymentRequestId,
                    payment
                        .request_id
                        .clone()
                        .unwrap_or_else(|| REQUEST_ID_FALLBACK.to_string()),
                );
                self.set(Slot::PaymentCurrency, payment.currency.clone());
                self.set(Slot::PaymentProvider, payment.provider.clone());
                self.set(Slot::PaymentAmount, payment.amount.to_string());
                self.set(Slot::PaymentPaidAt, payment.paid_at.to_string());
                self.set(Slot::PaymentBank, payment.bank.clone());
                self.set(Slot::PaymentDeliveryCost, payment.delivery_cost.to_string());
                self.set(Slot::PaymentGoodsTotal, payment.goods_total.to_string());
                self.set(Slot::PaymentCustomFee, payment.custom_fee.to_string());
            }
            None => self.clear_group(&Slot::PAYMENT),
        }

        self.items.clear();
        for (index, item) in order.items.iter().enumerate() {
            self.items.push(ItemCard::render(index, item));
        }
        self.items_placeholder = self.items.is_empty();

        self.set(Slot::ResponseTime, format!("{} ms", meta.latency_ms));
        self.set(
            Slot::DataSource,
            if meta.served_from_cache {
                "cache"
            } else {
                "database"
            },
        );
    }

    /// Text of `slot`, if it has been written.
    #[must_use]
    pub fn slot(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    /// Text of `slot`, or the empty string when unwritten.
    #[must_use]
    pub fn slot_text(&self, slot: Slot) -> &str {
        self.slot(slot).unwrap_or("")
    }

    /// Rendered item cards, in order.
    #[must_use]
    pub fn items(&self) -> &[ItemCard] {
        &self.items
    }

    /// Whether the item area shows the "no items" placeholder instead of
    /// cards.
    #[must_use]
    pub fn shows_items_placeholder(&self) -> bool {
        self.items_placeholder
    }

    fn set(&mut self, slot: Slot, value: impl Into<String>) {
        self.slots.insert(slot, value.into());
    }

    fn clear_group(&mut self, slots: &[Slot]) {
        for slot in slots {
            self.slots.remove(slot);
        }
    }
}
