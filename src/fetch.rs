//! Single-shot forecast download from weatherapi.com. One request per
//! search, no retries: the outcome is either a parsed payload or one error
//! surfaced to the user.

use std::time::Duration;

use reqwest::StatusCode;

use crate::forecast::WeatherData;

const FORECAST_URL: &str = "https://api.weatherapi.com/v1/forecast.json";
const FORECAST_DAYS: &str = "3";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// weatherapi answers an unknown location with HTTP 400.
    #[error("city not found")]
    CityNotFound,
    #[error("weather service answered with status {0}")]
    Status(StatusCode),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("could not start the fetch runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

pub async fn fetch_forecast(
    client: &reqwest::Client,
    api_key: &str,
    city: &str,
) -> Result<WeatherData, FetchError> {
    log::debug!("requesting {FORECAST_DAYS}-day forecast for {city:?}");
    let response = client
        .get(FORECAST_URL)
        .query(&[
            ("key", api_key),
            ("q", city),
            ("days", FORECAST_DAYS),
            ("aqi", "yes"),
            ("alerts", "yes"),
        ])
        .send()
        .await?;

    match response.status() {
        status if status.is_success() => Ok(response.json().await?),
        StatusCode::BAD_REQUEST => Err(FetchError::CityNotFound),
        status => Err(FetchError::Status(status)),
    }
}

/// Runs one fetch to completion on a throwaway current-thread runtime.
/// Meant for worker threads owned by the UI.
pub fn fetch_forecast_blocking(api_key: &str, city: &str) -> Result<WeatherData, FetchError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        fetch_forecast(&client, api_key, city).await
    })
}
