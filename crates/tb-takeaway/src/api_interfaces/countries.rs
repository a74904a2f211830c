use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::{countries::ServiceKeys, decode::null_as_default};

#[derive(Deserialize)]
pub struct Response {
    pub av: AvailableCountries,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct AvailableCountries {
    #[serde(deserialize_with = "null_as_default")]
    pub cd: Vec<Country>,
    #[serde(deserialize_with = "null_as_default")]
    pub cs: TranslationSection,
    #[serde(deserialize_with = "null_as_default")]
    pub em: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub api: ApiRevision,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct TranslationSection {
    #[serde(deserialize_with = "null_as_default")]
    pub ct: Vec<CountryTranslation>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct ApiRevision {
    #[serde(deserialize_with = "null_as_default")]
    pub rd: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rdc: i64,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CountryTranslation {
    #[serde(deserialize_with = "null_as_default")]
    pub ci: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tr: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub im: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sc: SubTranslationSection,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct SubTranslationSection {
    #[serde(deserialize_with = "null_as_default")]
    pub st: Vec<SubTranslation>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct SubTranslation {
    #[serde(deserialize_with = "null_as_default")]
    pub si: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tr: BTreeMap<String, String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(deserialize_with = "null_as_default")]
    pub cy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub su: String,
    #[serde(deserialize_with = "null_as_default")]
    pub p1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub p2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub p3: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gse: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cre: String,
    #[serde(deserialize_with = "null_as_default")]
    pub e1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub e2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pse: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tw: String,
    #[serde(deserialize_with = "null_as_default")]
    pub se: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fl: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hl: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ic: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub si: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pie: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub lye: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub lyv: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub lyn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub erp: PaymentMethodIds,
    #[serde(deserialize_with = "null_as_default")]
    pub ls: Languages,
    #[serde(deserialize_with = "null_as_default")]
    pub cn: BTreeMap<String, String>,
    pub psw: Value,
    pub taa: Value,
    pub mv: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub tip: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub ac: ServiceKeys,
    #[serde(deserialize_with = "null_as_default")]
    pub dcr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mor: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct PaymentMethodIds {
    #[serde(deserialize_with = "null_as_default")]
    pub pm: Vec<i64>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Languages {
    #[serde(deserialize_with = "null_as_default")]
    pub la: Vec<String>,
}
