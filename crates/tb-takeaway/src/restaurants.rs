use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    api_interfaces::restaurants,
    common::{Address, Cost, DeliveryMethods, Eta, PaymentMethod},
    countries::CountryCode,
    error::GetError,
    time, Client,
};

const FUNCTION: &str = "getrestaurants";

/// A point to search around, sent next to the postal code.
///
/// Both values are sent exactly as given since they are part of the signed
/// checksum.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

/// The two coordinate params, empty when searching by postal code only.
pub(crate) fn coordinate_params(coordinates: Option<&Coordinates>) -> [String; 2] {
    match coordinates {
        Some(c) => [c.latitude.clone(), c.longitude.clone()],
        None => [String::new(), String::new()],
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RestaurantList {
    pub city: City,
    pub restaurants: Vec<Restaurant>,
    pub current_time: NaiveDateTime,
    pub unix_time: i64,
    pub weekday: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct City {
    pub ps: String,
    pub name: String,
    pub postcode: String,
}

/// A restaurant as it appears in search results.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: String,
    pub pcid: String,
    pub name: String,
    pub branch: String,
    pub op: String,
    pub hd: String,
    pub delivery_methods: DeliveryMethods,
    pub tip: i64,
    pub new: i64,
    pub ply: i64,
    pub estimated_time: Value,
    pub eta: Option<Eta>,
    pub ft: String,
    pub ck: String,
    pub ds: String,
    pub logo: String,
    pub cloudinary_logo: String,
    pub cuisines: Vec<Vec<String>>,
    /// Rating scores; entries are kept as sent.
    pub scores: Map<String, Value>,
    pub nt: String,
    pub chain_penalty: bool,
    pub si: Vec<String>,
    pub price_tiers: BTreeMap<String, String>,
    pub payment_methods: Vec<PaymentMethod>,
    pub minimum_order_amount: String,
    pub delivery_costs: Vec<Cost>,
    pub ddf: Vec<Value>,
    pub rv: String,
    pub rvd: String,
    pub address: Address,
    pub bd: String,
}

impl From<restaurants::Restaurant> for Restaurant {
    fn from(raw: restaurants::Restaurant) -> Self {
        Self {
            id: raw.id,
            pcid: raw.pcid,
            name: raw.nm,
            branch: raw.bn,
            op: raw.op,
            hd: raw.hd,
            delivery_methods: raw.dm,
            tip: raw.tip,
            new: raw.new,
            ply: raw.ply,
            estimated_time: raw.est,
            eta: raw.eta,
            ft: raw.ft,
            ck: raw.ck,
            ds: raw.ds,
            logo: raw.lo,
            cloudinary_logo: raw.cloudinary_logo,
            cuisines: raw.cs.ct,
            scores: raw.sr,
            nt: raw.nt,
            chain_penalty: raw.chain_penalty,
            si: raw.sc.si,
            price_tiers: raw.pd.tiers,
            payment_methods: raw.pm.methods,
            minimum_order_amount: raw.dc.ma,
            delivery_costs: raw.dc.co,
            ddf: raw.dc.ddf,
            rv: raw.rv,
            rvd: raw.rvd,
            address: raw.ad,
            bd: raw.bd,
        }
    }
}

impl TryFrom<restaurants::Restaurants> for RestaurantList {
    type Error = GetError;

    fn try_from(raw: restaurants::Restaurants) -> Result<Self, GetError> {
        Ok(Self {
            current_time: time::parse_field("rs.ct", &raw.ct)?,
            city: City {
                ps: raw.cp.ps,
                name: raw.cp.pt,
                postcode: raw.cp.ptd,
            },
            restaurants: raw.rt.into_iter().map(Restaurant::from).collect(),
            unix_time: raw.unx,
            weekday: raw.wd,
        })
    }
}

impl Client {
    /// Restaurants delivering to a postal code, optionally narrowed by
    /// coordinates.
    pub async fn get_restaurants(
        &self,
        postal_code: &str,
        country: CountryCode,
        coordinates: Option<Coordinates>,
    ) -> Result<RestaurantList, GetError> {
        let [latitude, longitude] = coordinate_params(coordinates.as_ref());
        let params = [
            postal_code.to_string(),
            country.to_string(),
            latitude,
            longitude,
            self.language().to_string(),
        ];
        let response: restaurants::Response = self.call(FUNCTION, &params).await?;
        RestaurantList::try_from(response.rs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::DEFAULT_SECRET,
        signing,
        testing::{client_for, TEST_LANGUAGE},
    };
    use httpmock::prelude::*;
    use serde_json::json;

    const FAKE_POSTCODE: &str = "90461";

    fn listing(postcode: &str) -> Value {
        json!({
            "rs": {
                "cp": {"ps": "1", "pt": "Nürnberg", "ptd": postcode},
                "rt": [
                    {
                        "id": "O3QQ11PN",
                        "nm": "Pizza Roma",
                        "bn": "Südstadt",
                        "op": "1",
                        "dm": {
                            "ah": null,
                            "dl": {"op": 1, "oh": "11:00-22:00"},
                            "pu": {"op": 1, "oh": "11:00-21:30"}
                        },
                        "est": "30",
                        "eta": {"min": 25, "max": 40},
                        "lo": "roma.png",
                        "cs": {"ct": [["pizza", "Pizza"], ["italian", "Italienisch"]]},
                        "sr": {"s1": 120, "s2": 4, "s4": 4.5, "s9": "x"},
                        "chain_penalty": false,
                        "sc": {"si": ["1"]},
                        "pd": {"pz": {"1": "€", "2": "€€"}},
                        "pm": {"me": [{"mi": "0"}, {"mi": "1"}]},
                        "dc": {
                            "ma": "10,00",
                            "co": [{"fr": "0", "to": "15", "ct": "2,00"}],
                            "ddf": []
                        },
                        "ad": {"st": "Allersberger Str.", "hn": "5", "pc": postcode, "tn": "Nürnberg"}
                    }
                ],
                "ct": "2024-05-01 18:30:00",
                "unx": 1714581000,
                "wd": "3"
            }
        })
    }

    #[tokio::test]
    async fn get_restaurants_by_postcode() {
        // Arrange
        let server = MockServer::start_async().await;
        let restaurants_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .x_www_form_urlencoded_tuple("var1", FUNCTION)
                    .x_www_form_urlencoded_tuple("var2", FAKE_POSTCODE)
                    .x_www_form_urlencoded_tuple("var3", "2")
                    .x_www_form_urlencoded_tuple("var4", "")
                    .x_www_form_urlencoded_tuple("var5", "")
                    .x_www_form_urlencoded_tuple("var6", TEST_LANGUAGE);
                then.status(200).json_body(listing(FAKE_POSTCODE));
            })
            .await;
        let client = client_for(&server);

        // Act
        let list = client
            .get_restaurants(FAKE_POSTCODE, CountryCode::DE, None)
            .await;

        // Assert
        assert!(
            list.is_ok(),
            "Failed to get restaurants: {:?}",
            list.unwrap_err()
        );
        let list = list.unwrap();
        assert_eq!(list.city.postcode, FAKE_POSTCODE);
        assert!(!list.restaurants.is_empty());
        let roma = &list.restaurants[0];
        assert_eq!(roma.name, "Pizza Roma");
        assert_eq!(roma.cuisines.len(), 2);
        assert_eq!(roma.scores["s9"], json!("x"));
        assert_eq!(roma.payment_methods.len(), 2);
        assert_eq!(roma.delivery_costs[0].cost, "2,00");
        assert_eq!(roma.price_tiers["2"], "€€");
        assert_eq!(roma.address.postcode, FAKE_POSTCODE);
        assert_eq!(time::format_time(&list.current_time), "2024-05-01 18:30:00");
        restaurants_mock.assert();
    }

    #[tokio::test]
    async fn get_restaurants_by_coordinates() {
        // Arrange
        let server = MockServer::start_async().await;
        let restaurants_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .x_www_form_urlencoded_tuple("var4", "49.430")
                    .x_www_form_urlencoded_tuple("var5", "11.09")
                    .x_www_form_urlencoded_tuple(
                        "var0",
                        signing::checksum(
                            FUNCTION,
                            &[
                                FAKE_POSTCODE.to_string(),
                                "2".to_string(),
                                "49.430".to_string(),
                                "11.09".to_string(),
                                TEST_LANGUAGE.to_string(),
                            ],
                            DEFAULT_SECRET,
                        ),
                    );
                then.status(200).json_body(listing(FAKE_POSTCODE));
            })
            .await;
        let client = client_for(&server);
        let coordinates = Coordinates::new("49.430", "11.09");

        // Act
        let list = client
            .get_restaurants(FAKE_POSTCODE, CountryCode::DE, Some(coordinates))
            .await;

        // Assert
        assert!(list.is_ok(), "Failed: {:?}", list.unwrap_err());
        restaurants_mock.assert();
    }

    #[tokio::test]
    async fn get_restaurants_bad_json() {
        // Arrange
        let server = MockServer::start_async().await;
        let restaurants_mock = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200)
                    .header("Content-Type", "application/json")
                    .body(r#"{"error": "something is amiss" }"#);
            })
            .await;
        let client = client_for(&server);

        // Act
        let list = client
            .get_restaurants(FAKE_POSTCODE, CountryCode::DE, None)
            .await;

        // Assert
        assert!(matches!(
            list.unwrap_err(),
            GetError::ParseError {
                function: FUNCTION,
                ..
            }
        ));
        restaurants_mock.assert();
    }
}
