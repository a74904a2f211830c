use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    api_interfaces::menu,
    decode::{self, null_as_default},
};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Menu {
    pub categories: Vec<Category>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cti: String,
    pub ot: Vec<Value>,
    pub products: Vec<Product>,
    pub cloudinary_chain: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ah: String,
    pub pickup_cost: String,
    pub delivery_cost: String,
    pub pu: String,
    pub cloudinary_product: Option<String>,
    pub xfm: i64,
    pub food_info: FoodInfo,
    pub side_dishes: Vec<SideDish>,
}

/// Allergens, additives and extras of a product, normalized from whichever
/// shape the vendor sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodInfo {
    #[serde(alias = "all", deserialize_with = "decode::allergens")]
    pub allergens: Vec<String>,
    #[serde(alias = "add", deserialize_with = "decode::additives")]
    pub additives: Vec<String>,
    #[serde(alias = "xtr", deserialize_with = "decode::extras")]
    pub extras: BTreeMap<String, String>,
    #[serde(alias = "nut", deserialize_with = "null_as_default")]
    pub nutrition: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SideDish {
    pub name: String,
    pub choices: Vec<Choice>,
    pub kind: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Choice {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(alias = "nm", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "pc", deserialize_with = "null_as_default")]
    pub pickup_cost: String,
    #[serde(alias = "tc", deserialize_with = "null_as_default")]
    pub delivery_cost: String,
    #[serde(deserialize_with = "null_as_default")]
    pub xfm: i64,
}

impl Menu {
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.categories
            .iter()
            .flat_map(|category| category.products.iter())
    }
}

impl From<menu::SideDish> for SideDish {
    fn from(raw: menu::SideDish) -> Self {
        Self {
            name: raw.nm,
            choices: raw.cc.ch,
            kind: raw.tp,
        }
    }
}

impl From<menu::Product> for Product {
    fn from(raw: menu::Product) -> Self {
        Self {
            id: raw.id,
            name: raw.nm,
            description: raw.ds,
            ah: raw.ah,
            pickup_cost: raw.pc,
            delivery_cost: raw.tc,
            pu: raw.pu,
            cloudinary_product: raw.cloudinary_product,
            xfm: raw.xfm,
            food_info: raw.fai,
            side_dishes: raw.ss.sd.into_iter().map(SideDish::from).collect(),
        }
    }
}

impl From<menu::Category> for Category {
    fn from(raw: menu::Category) -> Self {
        Self {
            id: raw.id,
            name: raw.nm,
            description: raw.ds,
            cti: raw.cti,
            ot: raw.ot,
            products: raw.ps.pr.into_iter().map(Product::from).collect(),
            cloudinary_chain: raw.cloudinary_chain,
        }
    }
}

impl From<menu::Menu> for Menu {
    fn from(raw: menu::Menu) -> Self {
        Self {
            categories: raw.cs.ct.into_iter().map(Category::from).collect(),
        }
    }
}
