use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    common::{Address, Cost, DeliveryMethods, Eta, PaymentMethods, PriceTiers},
    decode::null_as_default,
};

#[derive(Deserialize)]
pub struct Response {
    pub rs: Restaurants,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Restaurants {
    #[serde(deserialize_with = "null_as_default")]
    pub cp: City,
    #[serde(deserialize_with = "null_as_default")]
    pub rt: Vec<Restaurant>,
    #[serde(deserialize_with = "null_as_default")]
    pub ct: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unx: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub wd: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct City {
    #[serde(deserialize_with = "null_as_default")]
    pub ps: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ptd: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Restaurant {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pcid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub op: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dm: DeliveryMethods,
    #[serde(deserialize_with = "null_as_default")]
    pub tip: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub new: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ply: i64,
    pub est: Value,
    pub eta: Option<Eta>,
    #[serde(deserialize_with = "null_as_default")]
    pub ft: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ck: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ds: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lo: String,
    #[serde(rename = "cloudinaryLogo", deserialize_with = "null_as_default")]
    pub cloudinary_logo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cs: Cuisines,
    #[serde(deserialize_with = "null_as_default")]
    pub sr: Map<String, Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub nt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub chain_penalty: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub sc: SubCategories,
    #[serde(deserialize_with = "null_as_default")]
    pub pd: PriceTiers,
    #[serde(deserialize_with = "null_as_default")]
    pub pm: PaymentMethods,
    #[serde(deserialize_with = "null_as_default")]
    pub dc: DeliveryCosts,
    #[serde(deserialize_with = "null_as_default")]
    pub rv: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rvd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ad: Address,
    #[serde(deserialize_with = "null_as_default")]
    pub bd: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Cuisines {
    #[serde(deserialize_with = "null_as_default")]
    pub ct: Vec<Vec<String>>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct SubCategories {
    #[serde(deserialize_with = "null_as_default")]
    pub si: Vec<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct DeliveryCosts {
    #[serde(deserialize_with = "null_as_default")]
    pub ma: String,
    #[serde(deserialize_with = "null_as_default")]
    pub co: Vec<Cost>,
    #[serde(deserialize_with = "null_as_default")]
    pub ddf: Vec<Value>,
}
