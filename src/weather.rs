use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;

/// Days requested from the provider on every fetch. The user's horizon only
/// truncates what gets rendered; it never changes the request.
pub const FORECAST_DAYS: u8 = 5;

/// One fetch's outcome, classified so callers can branch on kind instead of
/// string-matching. Every kind is terminal for the current render cycle only;
/// nothing here ever aborts the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    RequestFailed(String),
    #[error("weather response was invalid: {0}")]
    InvalidResponse(String),
    #[error("weather response did not parse: {0}")]
    ParseFailed(String),
    #[error("unexpected weather error: {0}")]
    Unexpected(String),
}

// The normalized snapshot handed to the renderer. Temperatures are kept in
// Celsius only; display units are derived later, exactly once.

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
    pub forecast_days: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_percent: u8,
    pub wind_speed_kph: f64,
    pub condition_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    /// Hourly samples in provider order, which is chronological.
    pub hours: Vec<HourSample>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourSample {
    pub time_epoch: i64,
    pub temperature_c: f64,
    pub precipitation_mm: f64,
}

// Wire shapes for WeatherAPI.com's forecast.json. Unknown fields (including
// the provider's pre-converted temp_f twins) are ignored on decode.

#[derive(Debug, Deserialize)]
struct ApiResponse {
    location: ApiLocation,
    current: ApiCurrent,
    forecast: ApiForecast,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: u8,
    wind_kph: f64,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiForecast {
    forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDay {
    hour: Vec<ApiHour>,
}

#[derive(Debug, Deserialize)]
struct ApiHour {
    time_epoch: i64,
    temp_c: f64,
    precip_mm: f64,
}

impl From<ApiResponse> for WeatherSnapshot {
    fn from(api: ApiResponse) -> Self {
        Self {
            location: Location {
                name: api.location.name,
                latitude: api.location.lat,
                longitude: api.location.lon,
            },
            current: CurrentConditions {
                temperature_c: api.current.temp_c,
                feels_like_c: api.current.feelslike_c,
                humidity_percent: api.current.humidity,
                wind_speed_kph: api.current.wind_kph,
                condition_text: api.current.condition.text,
            },
            forecast_days: api
                .forecast
                .forecastday
                .into_iter()
                .map(|day| ForecastDay {
                    hours: day
                        .hour
                        .into_iter()
                        .map(|hour| HourSample {
                            time_epoch: hour.time_epoch,
                            temperature_c: hour.temp_c,
                            precipitation_mm: hour.precip_mm,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Thin client over the provider's combined current+forecast endpoint. One
/// request per render cycle; no retries, no caching, transport-default
/// timeouts.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: Config,
}

impl WeatherClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub async fn fetch(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/forecast.json", self.config.base_url);
        let days = FORECAST_DAYS.to_string();

        tracing::debug!("requesting forecast for {city:?}");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", city),
                ("days", days.as_str()),
                ("aqi", "yes"),
            ])
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!(
                "provider returned status {status}"
            )));
        }

        let body = response.text().await.map_err(classify_transport)?;

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|err| WeatherError::ParseFailed(err.to_string()))?;

        // Top-level contract check, distinct from transport and syntax
        // failures: a 2xx body without these objects is an invalid response.
        for key in ["location", "current", "forecast"] {
            if value.get(key).is_none() {
                return Err(WeatherError::InvalidResponse(format!(
                    "missing `{key}` object"
                )));
            }
        }

        let api: ApiResponse = serde_json::from_value(value)
            .map_err(|err| WeatherError::ParseFailed(err.to_string()))?;

        Ok(api.into())
    }
}

fn classify_transport(err: reqwest::Error) -> WeatherError {
    // Request URLs embed the key as a query parameter; error details must
    // not carry the URL into logs or the banner.
    let err = err.without_url();

    let transport = err.is_connect()
        || err.is_timeout()
        || err.is_request()
        || err.is_redirect()
        || err.is_status()
        || err.is_body();

    if transport {
        WeatherError::RequestFailed(err.to_string())
    } else {
        WeatherError::Unexpected(err.to_string())
    }
}
