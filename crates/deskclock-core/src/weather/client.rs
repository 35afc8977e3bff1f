//! OpenWeatherMap client with IP geolocation.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use super::{GeoLocation, WeatherReport};
use crate::error::WeatherError;

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_GEO_URL: &str = "http://ip-api.com/json";
const PLACEHOLDER_KEY: &str = "YOUR_API_KEY";

#[derive(Deserialize)]
struct ApiResponse {
    name: String,
    main: ApiMain,
    weather: Vec<ApiCondition>,
}

#[derive(Deserialize)]
struct ApiMain {
    temp: f64,
}

#[derive(Deserialize)]
struct ApiCondition {
    description: String,
    icon: String,
}

#[derive(Deserialize)]
struct GeoResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    city: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

pub struct WeatherClient {
    http: Client,
    api_key: Option<String>,
    units: String,
    weather_url: String,
    geo_url: String,
}

impl WeatherClient {
    /// A client for the public endpoints. Without a usable API key every
    /// lookup returns demo data and no request is made.
    pub fn new(api_key: Option<&str>) -> Self {
        let api_key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_KEY)
            .map(str::to_string);
        Self {
            http: Client::new(),
            api_key,
            units: "metric".into(),
            weather_url: DEFAULT_WEATHER_URL.into(),
            geo_url: DEFAULT_GEO_URL.into(),
        }
    }

    pub fn with_units(mut self, units: &str) -> Self {
        self.units = units.to_string();
        self
    }

    pub fn with_endpoints(mut self, weather_url: &str, geo_url: &str) -> Self {
        self.weather_url = weather_url.to_string();
        self.geo_url = geo_url.to_string();
        self
    }

    pub fn is_demo(&self) -> bool {
        self.api_key.is_none()
    }

    pub async fn fetch_city(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let Some(key) = self.api_key.as_deref() else {
            tracing::warn!("weather API key not set, using demo data");
            return Ok(WeatherReport::demo(Some(city), &self.units));
        };
        let mut url = Url::parse(&self.weather_url)?;
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("appid", key)
            .append_pair("units", &self.units);
        self.fetch(url, city).await
    }

    pub async fn fetch_coords(&self, lat: f64, lon: f64) -> Result<WeatherReport, WeatherError> {
        let Some(key) = self.api_key.as_deref() else {
            return Ok(WeatherReport::demo(None, &self.units));
        };
        let mut url = Url::parse(&self.weather_url)?;
        url.query_pairs_mut()
            .append_pair("lat", &lat.to_string())
            .append_pair("lon", &lon.to_string())
            .append_pair("appid", key)
            .append_pair("units", &self.units);
        self.fetch(url, &format!("{lat},{lon}")).await
    }

    /// Look up the caller's approximate location from their IP address.
    pub async fn locate(&self) -> Result<GeoLocation, WeatherError> {
        let resp = self.http.get(&self.geo_url).send().await?;
        if !resp.status().is_success() {
            return Err(WeatherError::Geolocation(format!("HTTP {}", resp.status().as_u16())));
        }
        let geo: GeoResponse = resp.json().await?;
        if geo.status != "success" {
            return Err(WeatherError::Geolocation(
                geo.message.unwrap_or_else(|| geo.status.clone()),
            ));
        }
        Ok(GeoLocation {
            city: geo.city,
            lat: geo.lat,
            lon: geo.lon,
        })
    }

    /// Weather at the caller's IP location.
    pub async fn fetch_here(&self) -> Result<WeatherReport, WeatherError> {
        if self.is_demo() {
            return Ok(WeatherReport::demo(None, &self.units));
        }
        let here = self.locate().await?;
        tracing::debug!(city = %here.city, "located via IP");
        self.fetch_coords(here.lat, here.lon).await
    }

    async fn fetch(&self, url: Url, label: &str) -> Result<WeatherReport, WeatherError> {
        let resp = self.http.get(url).send().await?;
        match resp.status() {
            s if s.is_success() => {}
            StatusCode::NOT_FOUND => return Err(WeatherError::CityNotFound(label.to_string())),
            StatusCode::UNAUTHORIZED => return Err(WeatherError::Unauthorized),
            s => return Err(WeatherError::Api { status: s.as_u16() }),
        }

        let data: ApiResponse = resp.json().await?;
        let (description, icon) = data
            .weather
            .into_iter()
            .next()
            .map(|c| (c.description, c.icon))
            .unwrap_or_default();
        Ok(WeatherReport {
            location: data.name,
            temperature: data.main.temp,
            units: self.units.clone(),
            description,
            icon,
        })
    }
}
