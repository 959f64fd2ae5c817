//! Text rendering of the dashboard state.
//!
//! Mirrors the display regions of the dashboard: a header with the city and
//! the viewer's local clock, the current-conditions block, and the five-day
//! forecast strip.

use chrono::Local;
use dash_core::{Dashboard, ForecastDay, format::clock_label};

pub fn dashboard(dashboard: &Dashboard) {
    let Some(current) = dashboard.current() else {
        println!("No weather data to show (see diagnostics on stderr).");
        return;
    };

    println!();
    println!("{}", current.city);
    println!("{}", clock_label(&Local::now()));
    println!("{}", current.description);
    println!("Humidity: {}, Wind Speed: {}", current.humidity, current.wind_speed);
    println!();
    println!("  {}ºC", current.temperature_c);

    if !dashboard.forecast().is_empty() {
        println!();
        println!("{}", forecast_strip(dashboard.forecast()));
    }
}

/// One line per forecast day: label, high/low, icon reference.
fn forecast_strip(days: &[ForecastDay]) -> String {
    days.iter()
        .map(|day| {
            format!(
                "{:<4} {:>3}º | {}º  {}",
                day.day_label, day.max_temp_c, day.min_temp_c, day.icon_url
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
