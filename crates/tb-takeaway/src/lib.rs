mod api_interfaces;
pub mod client;
pub mod common;
pub mod constants;
pub mod countries;
pub mod current_time;
mod decode;
pub mod error;
pub mod menu;
pub mod restaurant;
pub mod restaurants;
pub mod reviews;
pub mod signing;
pub mod time;
mod util;

#[cfg(test)]
mod testing;

pub use client::{Client, ClientConfig, ClientConfigBuilder, Endpoint};
pub use countries::CountryCode;
pub use current_time::OrderingMode;
pub use decode::ShapeError;
pub use error::GetError;
pub use restaurant::RestaurantLocation;
pub use restaurants::Coordinates;
