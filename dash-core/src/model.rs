use serde::{Deserialize, Serialize};

/// Display-ready snapshot of a city's current weather.
///
/// All numeric normalization happens before this struct is built, so the
/// front-end can print every field as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// City name as echoed by the weather service.
    pub city: String,
    /// Temperature in °C, rounded to the nearest integer.
    pub temperature_c: i32,
    pub description: String,
    /// Relative humidity with a trailing `%`, e.g. `"87%"`.
    pub humidity: String,
    /// Wind speed rounded to one decimal with a `km/h` suffix, e.g. `"13.4km/h"`.
    pub wind_speed: String,
}

/// One future day of the forecast strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Abbreviated weekday name in the viewer's local time zone, e.g. `"Tue"`.
    pub day_label: String,
    /// Icon reference passed through from the service unmodified.
    pub icon_url: String,
    pub max_temp_c: i32,
    pub min_temp_c: i32,
}

/// Round to the nearest integer, halves away from zero.
pub(crate) fn round_temp(raw: f64) -> i32 {
    raw.round() as i32
}

/// One-decimal wind speed with unit suffix.
///
/// A speed that rounds to a whole number renders without a trailing `.0`
/// (`13km/h`, not `13.0km/h`).
pub(crate) fn format_wind(raw_speed: f64) -> String {
    let rounded = (raw_speed * 10.0).round() / 10.0;
    format!("{rounded}km/h")
}

pub(crate) fn format_humidity(pct: u8) -> String {
    format!("{pct}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_rounds_to_nearest_integer() {
        assert_eq!(round_temp(7.49), 7);
        assert_eq!(round_temp(7.5), 8);
        assert_eq!(round_temp(-2.5), -3);
        assert_eq!(round_temp(0.0), 0);
    }

    #[test]
    fn wind_speed_rounds_to_one_decimal() {
        assert_eq!(format_wind(13.37), "13.4km/h");
        assert_eq!(format_wind(13.34), "13.3km/h");
    }

    #[test]
    fn whole_number_wind_speed_has_no_decimal() {
        assert_eq!(format_wind(13.0), "13km/h");
        assert_eq!(format_wind(12.96), "13km/h");
    }

    #[test]
    fn humidity_carries_percent_suffix() {
        assert_eq!(format_humidity(87), "87%");
        assert_eq!(format_humidity(0), "0%");
    }
}
