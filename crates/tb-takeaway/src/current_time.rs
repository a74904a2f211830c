use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::{
    api_interfaces::current_time, countries::CountryCode, error::GetError, time, Client,
};

const FUNCTION: &str = "getcurrenttime";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OrderingMode {
    Delivery,
    Pickup,
}

impl OrderingMode {
    pub fn id(self) -> u8 {
        match self {
            Self::Delivery => 1,
            Self::Pickup => 2,
        }
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown ordering mode: {0}")]
pub struct ParseOrderingModeError(String);

impl FromStr for OrderingMode {
    type Err = ParseOrderingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "delivery" => Ok(Self::Delivery),
            "2" | "pickup" => Ok(Self::Pickup),
            _ => Err(ParseOrderingModeError(s.to_string())),
        }
    }
}

/// Server time as seen by a restaurant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurrentTime {
    pub current_time: NaiveDateTime,
    pub rs: i64,
    pub weekday: String,
}

impl TryFrom<current_time::CurrentTime> for CurrentTime {
    type Error = GetError;

    fn try_from(raw: current_time::CurrentTime) -> Result<Self, GetError> {
        Ok(Self {
            current_time: time::parse_field("st.ct", &raw.ct)?,
            rs: raw.rs,
            weekday: raw.wd,
        })
    }
}

impl Client {
    pub async fn get_current_time(
        &self,
        country: CountryCode,
        restaurant_id: &str,
        mode: OrderingMode,
    ) -> Result<CurrentTime, GetError> {
        let params = [
            country.to_string(),
            restaurant_id.to_string(),
            mode.to_string(),
        ];
        let response: current_time::Response = self.call(FUNCTION, &params).await?;
        CurrentTime::try_from(response.st)
    }
}
