use serde::Deserialize;
use serde_json::Value;

use super::menu::Menu;
use crate::{
    common::{Address, Cost, DeliveryMethods, PaymentMethods, PriceTiers},
    decode::null_as_default,
    restaurant::{Legal, OnlineOrdering, Rating},
};

#[derive(Deserialize)]
pub struct Response {
    pub rd: RestaurantData,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct RestaurantData {
    #[serde(deserialize_with = "null_as_default")]
    pub nm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tel: Telephone,
    #[serde(deserialize_with = "null_as_default")]
    pub mh: String,
    #[serde(rename = "cloudinaryHeader", deserialize_with = "null_as_default")]
    pub cloudinary_header: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pne: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rci: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ad: Address,
    #[serde(deserialize_with = "null_as_default")]
    pub oo: OnlineOrdering,
    #[serde(deserialize_with = "null_as_default")]
    pub sco: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ddf: String,
    pub smid: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub pty: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pro: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub cph: String,
    #[serde(deserialize_with = "null_as_default")]
    pub murl: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rte: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub lgl: Legal,
    #[serde(deserialize_with = "null_as_default")]
    pub ck: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ds: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub op: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ac: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ply: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dm: DeliveryMethods,
    #[serde(deserialize_with = "null_as_default")]
    pub pd: PriceTiers,
    #[serde(deserialize_with = "null_as_default")]
    pub pm: PaymentMethods,
    #[serde(deserialize_with = "null_as_default")]
    pub dt: ServiceTimes,
    #[serde(deserialize_with = "null_as_default")]
    pub pt: ServiceTimes,
    #[serde(deserialize_with = "null_as_default")]
    pub dc: MinimumAmount,
    #[serde(deserialize_with = "null_as_default")]
    pub dd: DeliveryData,
    #[serde(deserialize_with = "null_as_default")]
    pub mc: Menu,
    #[serde(deserialize_with = "null_as_default")]
    pub rt: Rating,
    #[serde(deserialize_with = "null_as_default")]
    pub ct: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ce: i64,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Telephone {
    #[serde(deserialize_with = "null_as_default")]
    pub no1: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct MinimumAmount {
    #[serde(deserialize_with = "null_as_default")]
    pub ma: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct DeliveryData {
    #[serde(deserialize_with = "null_as_default")]
    pub da: Vec<DeliveryArea>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct DeliveryArea {
    #[serde(deserialize_with = "null_as_default")]
    pub pc: Postcodes,
    #[serde(deserialize_with = "null_as_default")]
    pub ma: String,
    #[serde(deserialize_with = "null_as_default")]
    pub co: Vec<Cost>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Postcodes {
    #[serde(deserialize_with = "null_as_default")]
    pub pp: Vec<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct ServiceTimes {
    pub ct: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub td: Times,
    #[serde(deserialize_with = "null_as_default")]
    pub tm: Times,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Times {
    #[serde(deserialize_with = "null_as_default")]
    pub ti: Vec<TimeSlot>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct TimeSlot {
    #[serde(deserialize_with = "null_as_default")]
    pub st: String,
    #[serde(deserialize_with = "null_as_default")]
    pub et: String,
}
