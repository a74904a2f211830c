use serde::Deserialize;

use crate::decode::null_as_default;

/// Error wrapper present on failed calls.
#[derive(Deserialize)]
pub struct Envelope {
    pub nok: Option<Nok>,
}

#[derive(Deserialize)]
pub struct Nok {
    pub error: VendorError,
}

#[derive(Deserialize)]
pub struct VendorError {
    #[serde(rename = "errorid", default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(rename = "errortext", default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl Envelope {
    /// The vendor error, if the envelope reports one.
    pub fn into_error(self) -> Option<VendorError> {
        self.nok.map(|nok| nok.error).filter(|error| error.id != 0)
    }
}
