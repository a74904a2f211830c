use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    api_interfaces::restaurant as raw,
    common::{Address, Cost, DeliveryMethods, PaymentMethod},
    countries::CountryCode,
    decode::null_as_default,
    error::GetError,
    menu::Menu,
    restaurants::{coordinate_params, Coordinates},
    time, Client,
};

const FULL_FUNCTION: &str = "getrestaurantdata";
const CHECKOUT_FUNCTION: &str = "getrestaurantcheckoutdata";

/// Where the order would go. Every part is optional; absent parts are sent
/// as empty strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestaurantLocation {
    pub postcode: String,
    pub coordinates: Option<Coordinates>,
    pub client_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RestaurantDetail {
    pub name: String,
    pub branch: String,
    pub restaurant_id: String,
    pub telephone: String,
    pub header_image_url: String,
    pub cloudinary_header: String,
    pub tr: String,
    pub pne: String,
    pub rci: String,
    pub address: Address,
    pub online_ordering: OnlineOrdering,
    pub sco: String,
    pub ddf: String,
    pub smid: Value,
    pub pty: String,
    pub pro: i64,
    pub cph: String,
    pub murl: String,
    pub rte: i64,
    pub legal: Legal,
    pub ck: String,
    pub ds: i64,
    pub op: String,
    pub ac: String,
    pub ply: i64,
    pub delivery_methods: DeliveryMethods,
    pub price_tiers: BTreeMap<String, String>,
    pub payment_methods: Vec<PaymentMethod>,
    pub delivery_times: ServiceTimes,
    pub pickup_times: ServiceTimes,
    pub minimum_order_amount: String,
    pub delivery_areas: Vec<DeliveryArea>,
    /// Empty for checkout data.
    pub menu: Menu,
    pub rating: Rating,
    pub current_time: NaiveDateTime,
    pub weekday: String,
    pub ce: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnlineOrdering {
    #[serde(alias = "lu", deserialize_with = "null_as_default")]
    pub logo_url: String,
    #[serde(alias = "cloudinaryLogo", deserialize_with = "null_as_default")]
    pub cloudinary_logo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sl: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rv: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rvd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cim: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ft: String,
    #[serde(deserialize_with = "null_as_default")]
    pub eba: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legal {
    #[serde(alias = "own", deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vat: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tcr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub crn: String,
    #[serde(alias = "adr", deserialize_with = "null_as_default")]
    pub address: Address,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rating {
    #[serde(deserialize_with = "null_as_default")]
    pub cr: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub prr: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DeliveryArea {
    pub postcodes: Vec<String>,
    pub minimum_order_amount: String,
    pub costs: Vec<Cost>,
}

/// Opening slots for one ordering mode.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ServiceTimes {
    pub current_time: Option<NaiveDateTime>,
    pub today: Vec<TimeSlot>,
    pub tomorrow: Vec<TimeSlot>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

struct SlotFields {
    start: &'static str,
    end: &'static str,
}

/// Names of the time fields of one `ServiceTimes` block, for error reports.
struct TimeFields {
    current: &'static str,
    today: SlotFields,
    tomorrow: SlotFields,
}

const DELIVERY_TIME_FIELDS: TimeFields = TimeFields {
    current: "rd.dt.ct",
    today: SlotFields {
        start: "rd.dt.td.ti.st",
        end: "rd.dt.td.ti.et",
    },
    tomorrow: SlotFields {
        start: "rd.dt.tm.ti.st",
        end: "rd.dt.tm.ti.et",
    },
};

const PICKUP_TIME_FIELDS: TimeFields = TimeFields {
    current: "rd.pt.ct",
    today: SlotFields {
        start: "rd.pt.td.ti.st",
        end: "rd.pt.td.ti.et",
    },
    tomorrow: SlotFields {
        start: "rd.pt.tm.ti.st",
        end: "rd.pt.tm.ti.et",
    },
};

fn time_slots(slots: Vec<raw::TimeSlot>, fields: &SlotFields) -> Result<Vec<TimeSlot>, GetError> {
    slots
        .into_iter()
        .map(|slot| {
            Ok(TimeSlot {
                start: time::parse_field(fields.start, &slot.st)?,
                end: time::parse_field(fields.end, &slot.et)?,
            })
        })
        .collect()
}

fn service_times(raw: raw::ServiceTimes, fields: &TimeFields) -> Result<ServiceTimes, GetError> {
    Ok(ServiceTimes {
        current_time: time::parse_optional_field(fields.current, raw.ct.as_deref())?,
        today: time_slots(raw.td.ti, &fields.today)?,
        tomorrow: time_slots(raw.tm.ti, &fields.tomorrow)?,
    })
}

impl From<raw::DeliveryArea> for DeliveryArea {
    fn from(raw: raw::DeliveryArea) -> Self {
        Self {
            postcodes: raw.pc.pp,
            minimum_order_amount: raw.ma,
            costs: raw.co,
        }
    }
}

impl TryFrom<raw::RestaurantData> for RestaurantDetail {
    type Error = GetError;

    fn try_from(raw: raw::RestaurantData) -> Result<Self, GetError> {
        Ok(Self {
            current_time: time::parse_field("rd.ct", &raw.ct)?,
            delivery_times: service_times(raw.dt, &DELIVERY_TIME_FIELDS)?,
            pickup_times: service_times(raw.pt, &PICKUP_TIME_FIELDS)?,
            name: raw.nm,
            branch: raw.bn,
            restaurant_id: raw.ri,
            telephone: raw.tel.no1,
            header_image_url: raw.mh,
            cloudinary_header: raw.cloudinary_header,
            tr: raw.tr,
            pne: raw.pne,
            rci: raw.rci,
            address: raw.ad,
            online_ordering: raw.oo,
            sco: raw.sco,
            ddf: raw.ddf,
            smid: raw.smid,
            pty: raw.pty,
            pro: raw.pro,
            cph: raw.cph,
            murl: raw.murl,
            rte: raw.rte,
            legal: raw.lgl,
            ck: raw.ck,
            ds: raw.ds,
            op: raw.op,
            ac: raw.ac,
            ply: raw.ply,
            delivery_methods: raw.dm,
            price_tiers: raw.pd.tiers,
            payment_methods: raw.pm.methods,
            minimum_order_amount: raw.dc.ma,
            delivery_areas: raw.dd.da.into_iter().map(DeliveryArea::from).collect(),
            menu: Menu::from(raw.mc),
            rating: raw.rt,
            weekday: raw.wd,
            ce: raw.ce,
        })
    }
}

impl Client {
    /// Restaurant details including the full menu.
    pub async fn get_restaurant_data(
        &self,
        restaurant_id: &str,
        country: CountryCode,
        location: &RestaurantLocation,
    ) -> Result<RestaurantDetail, GetError> {
        self.restaurant_detail(FULL_FUNCTION, restaurant_id, country, location)
            .await
    }

    /// Restaurant details needed at checkout, without the menu.
    pub async fn get_restaurant_checkout_data(
        &self,
        restaurant_id: &str,
        country: CountryCode,
        location: &RestaurantLocation,
    ) -> Result<RestaurantDetail, GetError> {
        self.restaurant_detail(CHECKOUT_FUNCTION, restaurant_id, country, location)
            .await
    }

    async fn restaurant_detail(
        &self,
        function: &'static str,
        restaurant_id: &str,
        country: CountryCode,
        location: &RestaurantLocation,
    ) -> Result<RestaurantDetail, GetError> {
        let [latitude, longitude] = coordinate_params(location.coordinates.as_ref());
        let params = [
            restaurant_id.to_string(),
            country.to_string(),
            location.postcode.clone(),
            latitude,
            longitude,
            location.client_id.clone(),
        ];
        let response: raw::Response = self.call(function, &params).await?;
        RestaurantDetail::try_from(response.rd)
    }
}
