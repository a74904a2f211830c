//! Raw response shapes, keyed the way the vendor sends them.

// Request structures are omitted since every call shares the signed form body.

pub mod countries;
pub mod current_time;
pub mod envelope;
pub mod menu;
pub mod restaurant;
pub mod restaurants;
pub mod reviews;
