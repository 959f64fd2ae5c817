//! Core library for the `weather-dash` terminal dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The fetch-and-normalize pipeline (current conditions + 5-day forecast)
//! - The dashboard controller owning display state
//!
//! It is used by `dash-cli`, but can also be reused by other front-ends.

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod model;
pub mod source;

pub use config::Config;
pub use controller::Dashboard;
pub use error::FetchError;
pub use model::{CurrentConditions, ForecastDay};
pub use source::{WeatherSource, shecodes::SheCodesSource};
