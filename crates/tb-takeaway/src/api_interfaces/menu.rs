use serde::Deserialize;
use serde_json::Value;

use crate::{
    decode::{self, null_as_default},
    menu::{Choice, FoodInfo},
};

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Menu {
    #[serde(deserialize_with = "null_as_default")]
    pub cs: CategorySection,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CategorySection {
    #[serde(deserialize_with = "null_as_default")]
    pub ct: Vec<Category>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ds: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cti: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ot: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub ps: ProductSection,
    #[serde(rename = "cloudinaryChain")]
    pub cloudinary_chain: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct ProductSection {
    #[serde(deserialize_with = "decode::products")]
    pub pr: Vec<Product>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ds: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ah: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tc: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pu: String,
    #[serde(rename = "cloudinaryProduct")]
    pub cloudinary_product: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub xfm: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fai: FoodInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub ss: SideDishSection,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct SideDishSection {
    #[serde(deserialize_with = "null_as_default")]
    pub sd: Vec<SideDish>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct SideDish {
    #[serde(deserialize_with = "null_as_default")]
    pub nm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cc: ChoiceSection,
    #[serde(deserialize_with = "null_as_default")]
    pub tp: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct ChoiceSection {
    #[serde(deserialize_with = "null_as_default")]
    pub ch: Vec<Choice>,
}
