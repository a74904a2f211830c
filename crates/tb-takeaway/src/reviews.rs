use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{api_interfaces::reviews, error::GetError, time, Client};

const FUNCTION: &str = "restaurantreviews";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Review {
    pub name: String,
    pub time: NaiveDateTime,
    pub remark: String,
    pub kw: String,
    pub be: String,
    pub dm: String,
    pub zo: String,
    pub ny: String,
}

impl TryFrom<reviews::Review> for Review {
    type Error = GetError;

    fn try_from(raw: reviews::Review) -> Result<Self, GetError> {
        Ok(Self {
            time: time::parse_field("rr.rv.ti", &raw.ti)?,
            name: raw.nm,
            remark: raw.rm,
            kw: raw.kw,
            be: raw.be,
            dm: raw.dm,
            zo: raw.zo,
            ny: raw.ny,
        })
    }
}

impl Client {
    /// One page of reviews. `page` is passed through as is.
    pub async fn get_restaurant_reviews(
        &self,
        restaurant_id: &str,
        page: u32,
    ) -> Result<Vec<Review>, GetError> {
        let params = [restaurant_id.to_string(), page.to_string()];
        let response: reviews::Response = self.call(FUNCTION, &params).await?;
        response.rr.rv.into_iter().map(Review::try_from).collect()
    }
}
