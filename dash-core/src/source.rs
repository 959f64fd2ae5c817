use crate::{
    error::FetchError,
    model::{CurrentConditions, ForecastDay},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod shecodes;

/// Seam between the dashboard controller and the remote weather API.
///
/// Both operations normalize the raw payload before returning, so callers only
/// ever see display-ready view-models.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Current conditions for a city.
    async fn current(&self, city: &str) -> Result<CurrentConditions, FetchError>;

    /// The next five days for a city, today excluded, chronological.
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastDay>, FetchError>;
}
