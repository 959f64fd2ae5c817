use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::Config,
    error::FetchError,
    format::day_label,
    model::{self, CurrentConditions, ForecastDay},
};

use super::WeatherSource;

/// Number of future days shown in the forecast strip.
const FORECAST_DAYS: usize = 5;

/// Client for a SheCodes-style weather API: `/current` and `/forecast`
/// endpoints, each taking `query`, `key` and `units` parameters.
#[derive(Debug, Clone)]
pub struct SheCodesSource {
    api_key: String,
    base_url: String,
    http: Client,
}

impl SheCodesSource {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// Build a source from loaded configuration; fails with a setup hint when
    /// no API key is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?;
        Ok(Self::new(api_key.to_owned(), config.base_url.clone()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, FetchError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(%url, city, "fetching weather data");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("query", city),
                ("key", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(FetchError::from_request)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::from_request)?;

        if !status.is_success() {
            return Err(FetchError::http(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct CurrentTemperature {
    current: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct CurrentCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentPayload {
    city: String,
    temperature: CurrentTemperature,
    condition: CurrentCondition,
    wind: Wind,
}

#[derive(Debug, Deserialize)]
struct DailyTemperature {
    maximum: f64,
    minimum: f64,
}

#[derive(Debug, Deserialize)]
struct DailyCondition {
    icon_url: String,
}

#[derive(Debug, Deserialize)]
struct DailyEntry {
    time: i64,
    condition: DailyCondition,
    temperature: DailyTemperature,
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    daily: Vec<DailyEntry>,
}

fn normalize_current(payload: CurrentPayload) -> CurrentConditions {
    CurrentConditions {
        city: payload.city,
        temperature_c: model::round_temp(payload.temperature.current),
        description: payload.condition.description,
        humidity: model::format_humidity(payload.temperature.humidity),
        wind_speed: model::format_wind(payload.wind.speed),
    }
}

fn normalize_forecast(payload: ForecastPayload) -> Vec<ForecastDay> {
    payload
        .daily
        .into_iter()
        .skip(1) // daily[0] is today
        .take(FORECAST_DAYS)
        .map(|day| {
            let label = DateTime::from_timestamp(day.time, 0)
                .map(|utc| day_label(&utc.with_timezone(&Local)))
                .unwrap_or_default();

            ForecastDay {
                day_label: label,
                icon_url: day.condition.icon_url,
                max_temp_c: model::round_temp(day.temperature.maximum),
                min_temp_c: model::round_temp(day.temperature.minimum),
            }
        })
        .collect()
}

#[async_trait]
impl WeatherSource for SheCodesSource {
    async fn current(&self, city: &str) -> Result<CurrentConditions, FetchError> {
        let payload: CurrentPayload = self.get_json("current", city).await?;
        Ok(normalize_current(payload))
    }

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastDay>, FetchError> {
        let payload: ForecastPayload = self.get_json("forecast", city).await?;
        Ok(normalize_forecast(payload))
    }
}
