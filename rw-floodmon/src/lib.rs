pub mod reading;
pub mod request;
pub mod station;

#[cfg(feature = "api")]
pub mod client;
