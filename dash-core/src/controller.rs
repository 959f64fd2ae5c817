use std::sync::Arc;

use tracing::error;

use crate::{
    model::{CurrentConditions, ForecastDay},
    source::WeatherSource,
};

/// Owns the two display-state slices and the only code paths that mutate them.
///
/// A search fires both fetches concurrently with no joint commit: each
/// completion applies its own slice, so a failed fetch leaves that slice at
/// its prior value while the other still updates. Failures surface only in
/// the diagnostic log; the viewer keeps whatever was displayed before.
#[derive(Debug)]
pub struct Dashboard {
    source: Arc<dyn WeatherSource>,
    current: Option<CurrentConditions>,
    forecast: Vec<ForecastDay>,
}

impl Dashboard {
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self {
            source,
            current: None,
            forecast: Vec::new(),
        }
    }

    /// Search a city: one current-conditions request and one forecast request,
    /// concurrently, with no ordering guarantee between them. Never fails from
    /// the caller's point of view.
    pub async fn submit_search(&mut self, city: &str) {
        let (current, forecast) =
            tokio::join!(self.source.current(city), self.source.forecast(city));

        match current {
            Ok(conditions) => self.current = Some(conditions),
            Err(err) => error!(city, %err, "current conditions fetch failed"),
        }

        match forecast {
            Ok(days) => self.forecast = days,
            Err(err) => error!(city, %err, "forecast fetch failed"),
        }
    }

    /// Current-conditions slice; `None` until the first successful fetch.
    pub fn current(&self) -> Option<&CurrentConditions> {
        self.current.as_ref()
    }

    /// Forecast slice; empty until the first successful fetch.
    pub fn forecast(&self) -> &[ForecastDay] {
        &self.forecast
    }
}
