use serde::Deserialize;

use crate::decode::null_as_default;

#[derive(Deserialize)]
pub struct Response {
    pub rr: ReviewList,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct ReviewList {
    #[serde(deserialize_with = "null_as_default")]
    pub rv: Vec<Review>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Review {
    #[serde(deserialize_with = "null_as_default")]
    pub nm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ti: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kw: String,
    #[serde(deserialize_with = "null_as_default")]
    pub be: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ny: String,
}
