//! Weather panel.
//!
//! [`WeatherClient`] talks to OpenWeatherMap; [`WeatherPanel`] remembers the
//! last city the user asked for.

mod client;

pub use client::{WeatherClient, DEFAULT_GEO_URL, DEFAULT_WEATHER_URL};

use serde::Serialize;

use crate::error::WeatherError;
use crate::storage::{keys, persist_best_effort, read_or_none, KvStore};

const ICON_URL_PREFIX: &str = "https://openweathermap.org/img/wn/";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature: f64,
    /// OpenWeatherMap unit system: `metric`, `imperial` or `standard`.
    pub units: String,
    pub description: String,
    pub icon: String,
}

impl WeatherReport {
    fn demo(city: Option<&str>, units: &str) -> Self {
        let temperature = match units {
            "imperial" => 68.0,
            "standard" => 293.15,
            _ => 20.0,
        };
        Self {
            location: city.unwrap_or("Test City").to_string(),
            temperature,
            units: units.to_string(),
            description: "clear sky (demo)".into(),
            icon: "01d".into(),
        }
    }

    /// Rounded temperature with its unit, e.g. `20°C`.
    pub fn display_temp(&self) -> String {
        let unit = match self.units.as_str() {
            "imperial" => "°F",
            "standard" => "K",
            _ => "°C",
        };
        format!("{}{unit}", self.temperature.round() as i64)
    }

    pub fn icon_url(&self) -> Option<String> {
        (!self.icon.is_empty()).then(|| format!("{ICON_URL_PREFIX}{}@2x.png", self.icon))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLocation {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
}

pub struct WeatherPanel<S: KvStore> {
    store: S,
}

impl<S: KvStore> WeatherPanel<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn saved_city(&self) -> Option<String> {
        read_or_none(&self.store, keys::WEATHER_CITY).filter(|c| !c.trim().is_empty())
    }

    /// Accept a city typed by the user. Returns the trimmed name.
    pub fn submit_city(&self, input: &str) -> Result<String, WeatherError> {
        let city = trimmed_city(input)?;
        persist_best_effort(&self.store, keys::WEATHER_CITY, city);
        Ok(city.to_string())
    }

    /// Fetch weather for a typed city. The city is remembered only once the
    /// API has accepted it.
    pub async fn lookup_city(
        &self,
        client: &WeatherClient,
        input: &str,
    ) -> Result<WeatherReport, WeatherError> {
        let city = trimmed_city(input)?;
        let report = client.fetch_city(city).await?;
        persist_best_effort(&self.store, keys::WEATHER_CITY, city);
        Ok(report)
    }
}

fn trimmed_city(input: &str) -> Result<&str, WeatherError> {
    let city = input.trim();
    if city.is_empty() {
        return Err(WeatherError::EmptyCity);
    }
    Ok(city)
}
