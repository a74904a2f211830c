use serde::Deserialize;

use crate::decode::null_as_default;

#[derive(Deserialize)]
pub struct Response {
    pub st: CurrentTime,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CurrentTime {
    #[serde(deserialize_with = "null_as_default")]
    pub ct: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rs: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub wd: String,
}
