//! Transport schema for the order backend.
//!
//! The backend marshals its records with exported-style field names
//! (`TrackNumber`, `SmID`, `OofShard`, ...) including one misspelled key,
//! `CustumerID`. Those irregularities are decoded here, once, and converted
//! into the clean [`Order`] model before anything else sees them.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::{Delivery, Item, Order, Payment};

/// Response envelope of the order-lookup endpoint.
///
/// A missing `success` flag reads as `false`; a missing `cached` flag reads
/// as a primary-storage hit.
#[derive(Debug, Deserialize)]
pub(crate) struct OrderEnvelope {
    #[serde(default)]
    pub success: bool,
    pub data: Option<WireOrder>,
    #[serde(default)]
    pub cached: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct WireOrder {
    #[serde(rename = "ID")]
    pub id: String,
    pub track_number: String,
    pub entry: String,
    pub locale: String,
    #[serde(default)]
    pub internal_signature: String,
    // Spelled this way on the wire.
    #[serde(rename = "CustumerID")]
    pub customer_id: String,
    pub delivery_service: String,
    pub shard_key: String,
    #[serde(rename = "SmID")]
    pub shipping_model_id: i64,
    pub date_created: DateTime<Utc>,
    #[serde(rename = "OofShard")]
    pub out_of_shard: String,
    pub delivery: Option<WireDelivery>,
    pub payment: Option<WirePayment>,
    // The backend emits `null` for an order with no items.
    pub items: Option<Vec<WireItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct WireDelivery {
    pub name: String,
    pub phone: String,
    pub zip: String,
    pub city: String,
    pub address: String,
    pub region: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct WirePayment {
    pub transaction: String,
    /// Empty string when the backend has no request id for the payment.
    #[serde(default, rename = "RequestID")]
    pub request_id: String,
    pub currency: String,
    pub provider: String,
    pub amount: i64,
    pub payment_dt: i64,
    pub bank: String,
    pub delivery_cost: i64,
    pub goods_total: i64,
    pub custom_fee: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct WireItem {
    #[serde(rename = "ChartID")]
    pub chart_id: i64,
    pub track_number: String,
    pub price: i64,
    #[serde(rename = "RID")]
    pub rid: String,
    pub name: String,
    pub sale: i64,
    pub size: String,
    pub total_price: i64,
    #[serde(rename = "NmID")]
    pub nm_id: i64,
    pub brand: String,
    pub status: i64,
}

impl From<WireOrder> for Order {
    fn from(wire: WireOrder) -> Self {
        Self {
            id: wire.id,
            track_number: wire.track_number,
            entry: wire.entry,
            locale: wire.locale,
            internal_signature: wire.internal_signature,
            customer_id: wire.customer_id,
            delivery_service: wire.delivery_service,
            shard_key: wire.shard_key,
            shipping_model_id: wire.shipping_model_id,
            date_created: wire.date_created,
            out_of_shard: wire.out_of_shard,
            delivery: wire.delivery.map(Delivery::from),
            payment: wire.payment.map(Payment::from),
            items: wire
                .items
                .unwrap_or_default()
                .into_iter()
                .map(Item::from)
                .collect(),
        }
    }
}

impl From<WireDelivery> for Delivery {
    fn from(wire: WireDelivery) -> Self {
        Self {
            name: wire.name,
            phone: wire.phone,
            email: wire.email,
            postal_code: wire.zip,
            city: wire.city,
            address: wire.address,
            region: wire.region,
        }
    }
}

impl From<WirePayment> for Payment {
    fn from(wire: WirePayment) -> Self {
        Self {
            transaction: wire.transaction,
            request_id: if wire.request_id.is_empty() {
                None
            } else {
                Some(wire.request_id)
            },
            currency: wire.currency,
            provider: wire.provider,
            amount: wire.amount,
            paid_at: wire.payment_dt,
            bank: wire.bank,
            delivery_cost: wire.delivery_cost,
            goods_total: wire.goods_total,
            custom_fee: wire.custom_fee,
        }
    }
}

impl From<WireItem> for Item {
    fn from(wire: WireItem) -> Self {
        Self {
            name: wire.name,
            brand: wire.brand,
            price: wire.price,
            sale: wire.sale,
            total_price: wire.total_price,
            size: wire.size,
            status: wire.status,
            track_number: wire.track_number,
            chart_id: wire.chart_id,
            rid: wire.rid,
            nm_id: wire.nm_id,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_envelope_json() -> &'static str {
        r#"{
            "success": true,
            "data": {
                "ID": "d2a797a7-6b33-4a0a-95c8-f3b2a4e0a111",
                "TrackNumber": "WBILMTESTTRACK",
                "Entry": "WBIL",
                "Delivery": {
                    "Name": "Test Testov",
                    "Phone": "+9720000000",
                    "Zip": "2639809",
                    "City": "Kiryat Mozkin",
                    "Address": "Ploshad Mira 15",
                    "Region": "Kraiot",
                    "Email": "test@gmail.com"
                },
                "Payment": {
                    "Transaction": "b563feb7b2b84b6test",
                    "RequestID": "",
                    "Currency": "USD",
                    "Provider": "wbpay",
                    "Amount": 1817,
                    "PaymentDt": 1637907727,
                    "Bank": "alpha",
                    "DeliveryCost": 1500,
                    "GoodsTotal": 317,
                    "CustomFee": 0
                },
                "Items": [
                    {
                        "ChartID": 9934930,
                        "TrackNumber": "WBILMTESTTRACK",
                        "Price": 453,
                        "RID": "ab4219087a764ae0btest",
                        "Name": "Mascaras",
                        "Sale": 30,
                        "Size": "0",
                        "TotalPrice": 317,
                        "NmID": 2389212,
                        "Brand": "Vivienne Sabo",
                        "Status": 202
                    }
                ],
                "Locale": "en",
                "InternalSignature": "",
                "CustumerID": "test",
                "DeliveryService": "meest",
                "ShardKey": "9",
                "SmID": 99,
                "DateCreated": "2021-11-26T06:22:19Z",
                "OofShard": "1"
            },
            "cached": false
        }"#
    }

    #[test]
    fn decode_full_envelope() {
        let envelope: OrderEnvelope = serde_json::from_str(sample_envelope_json()).unwrap();
        assert!(envelope.success);
        assert!(!envelope.cached);

        let order: Order = envelope.data.unwrap().into();
        assert_eq!(order.id, "d2a797a7-6b33-4a0a-95c8-f3b2a4e0a111");
        assert_eq!(order.track_number, "WBILMTESTTRACK");
        assert_eq!(order.shipping_model_id, 99);
        assert_eq!(order.out_of_shard, "1");
        assert_eq!(order.date_created.to_rfc3339(), "2021-11-26T06:22:19+00:00");

        let delivery = order.delivery.unwrap();
        assert_eq!(delivery.postal_code, "2639809");
        assert_eq!(delivery.city, "Kiryat Mozkin");

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].chart_id, 9_934_930);
        assert_eq!(order.items[0].rid, "ab4219087a764ae0btest");
        assert_eq!(order.items[0].nm_id, 2_389_212);
    }

    #[test]
    fn misspelled_customer_key_decodes_into_clean_field() {
        let envelope: OrderEnvelope = serde_json::from_str(sample_envelope_json()).unwrap();
        let order: Order = envelope.data.unwrap().into();
        assert_eq!(order.customer_id, "test");
    }

    #[test]
    fn empty_request_id_becomes_none() {
        let envelope: OrderEnvelope = serde_json::from_str(sample_envelope_json()).unwrap();
        let order: Order = envelope.data.unwrap().into();
        assert_eq!(order.payment.unwrap().request_id, None);
    }

    #[test]
    fn present_request_id_is_kept() {
        let json = sample_envelope_json().replace("\"RequestID\": \"\"", "\"RequestID\": \"req-7\"");
        let envelope: OrderEnvelope = serde_json::from_str(&json).unwrap();
        let order: Order = envelope.data.unwrap().into();
        assert_eq!(order.payment.unwrap().request_id.as_deref(), Some("req-7"));
    }

    #[test]
    fn null_items_decode_as_empty() {
        let mut value: serde_json::Value = serde_json::from_str(sample_envelope_json()).unwrap();
        value["data"]["Items"] = serde_json::Value::Null;
        let envelope: OrderEnvelope = serde_json::from_value(value).unwrap();
        let order: Order = envelope.data.unwrap().into();
        assert!(order.items.is_empty());
    }

    #[test]
    fn missing_cached_defaults_to_false() {
        let mut value: serde_json::Value = serde_json::from_str(sample_envelope_json()).unwrap();
        value.as_object_mut().unwrap().remove("cached");
        let envelope: OrderEnvelope = serde_json::from_value(value).unwrap();
        assert!(!envelope.cached);
    }

    #[test]
    fn missing_success_flag_reads_false() {
        let envelope: OrderEnvelope = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
    }
}
