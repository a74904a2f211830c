//! Records shared by the listing and the detail responses.
//!
//! These decode straight from the wire; the vendor's short keys are accepted
//! as aliases and the readable names are used when serializing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decode::null_as_default;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(alias = "st", deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(alias = "hn", deserialize_with = "null_as_default")]
    pub house_number: String,
    #[serde(alias = "pc", deserialize_with = "null_as_default")]
    pub postcode: String,
    #[serde(alias = "tn", deserialize_with = "null_as_default")]
    pub town: String,
    #[serde(alias = "ci", deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(alias = "lt", deserialize_with = "null_as_default")]
    pub latitude: String,
    #[serde(alias = "ln", deserialize_with = "null_as_default")]
    pub longitude: String,
}

/// Estimated delivery window in minutes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Eta {
    #[serde(deserialize_with = "null_as_default")]
    pub min: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max: i64,
}

/// Delivery cost for an order value range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cost {
    #[serde(alias = "fr", deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub to: String,
    #[serde(alias = "ct", deserialize_with = "null_as_default")]
    pub cost: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethod {
    #[serde(alias = "mi", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mf: String,
}

/// Availability of one ordering mode (delivery or pickup).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceMode {
    #[serde(alias = "op", deserialize_with = "null_as_default")]
    pub open: i64,
    #[serde(alias = "oh", deserialize_with = "null_as_default")]
    pub opening_hours: String,
    #[serde(alias = "mpt")]
    pub minimum_preparation_time: Option<String>,
    pub eta: Option<Eta>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryMethods {
    /// Shape varies per response; kept as sent.
    pub ah: Value,
    #[serde(alias = "dl", deserialize_with = "null_as_default")]
    pub delivery: ServiceMode,
    #[serde(alias = "pu", deserialize_with = "null_as_default")]
    pub pickup: ServiceMode,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTiers {
    #[serde(alias = "pz", deserialize_with = "null_as_default")]
    pub tiers: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethods {
    #[serde(alias = "me", deserialize_with = "null_as_default")]
    pub methods: Vec<PaymentMethod>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn address_from_vendor_keys() {
        let address: Address = serde_json::from_value(json!({
            "st": "Hauptstraße",
            "hn": "1",
            "pc": "90461",
            "tn": "Nürnberg",
            "ci": "Nürnberg",
            "lt": "49.43",
            "ln": "11.09"
        }))
        .unwrap();

        assert_eq!(address.street, "Hauptstraße");
        assert_eq!(address.postcode, "90461");
        assert_eq!(address.latitude, "49.43");
    }

    #[test]
    fn address_serializes_readable_names_and_reads_them_back() {
        let address = Address {
            street: "Hauptstraße".to_string(),
            postcode: "90461".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&address).unwrap();

        assert_eq!(value["street"], "Hauptstraße");
        assert_eq!(serde_json::from_value::<Address>(value).unwrap(), address);
    }

    #[test]
    fn delivery_methods_keep_opaque_field() {
        let methods: DeliveryMethods = serde_json::from_value(json!({
            "ah": {"anything": [1, 2]},
            "dl": {"op": 1, "oh": "11:00-22:00", "eta": {"min": 30, "max": 45}},
            "pu": {"op": 0, "oh": ""}
        }))
        .unwrap();

        assert_eq!(methods.ah, json!({"anything": [1, 2]}));
        assert_eq!(methods.delivery.open, 1);
        assert_eq!(methods.delivery.eta, Some(Eta { min: 30, max: 45 }));
        assert_eq!(methods.pickup.eta, None);
        assert_eq!(
            serde_json::to_value(&methods).unwrap()["ah"],
            json!({"anything": [1, 2]})
        );
    }
}
