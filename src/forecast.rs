//! Serde types for the weatherapi.com forecast payload. Only the fields the
//! app displays are declared; hourly numerics are optional so one missing
//! field degrades a single chart slot instead of failing the whole decode.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherData {
    pub location: Location,
    pub current: Current,
    pub forecast: Forecast,
    #[serde(default)]
    pub alerts: Alerts,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub tz_id: String,
    /// Location-local wall clock, "YYYY-MM-DD H:MM" with an unpadded hour.
    pub localtime: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Current {
    pub last_updated: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub wind_kph: f64,
    pub wind_mph: f64,
    pub wind_degree: f64,
    pub wind_dir: String,
    pub gust_kph: f64,
    pub gust_mph: f64,
    pub humidity: f64,
    pub cloud: f64,
    pub pressure_mb: f64,
    pub pressure_in: f64,
    pub precip_mm: f64,
    pub precip_in: f64,
    pub vis_km: f64,
    pub vis_miles: f64,
    pub uv: f64,
    pub condition: Condition,
    #[serde(default)]
    pub air_quality: Option<AirQuality>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirQuality {
    #[serde(default)]
    pub co: Option<f64>,
    #[serde(default)]
    pub no2: Option<f64>,
    #[serde(default)]
    pub o3: Option<f64>,
    #[serde(default)]
    pub so2: Option<f64>,
    #[serde(default, rename = "pm2_5")]
    pub pm2_5: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default, rename = "us-epa-index")]
    pub us_epa_index: Option<f64>,
    #[serde(default, rename = "gb-defra-index")]
    pub gb_defra_index: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    /// "YYYY-MM-DD".
    pub date: String,
    pub day: DaySummary,
    pub astro: Astro,
    pub hour: Vec<HourlyRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DaySummary {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub avgtemp_c: f64,
    pub maxwind_kph: f64,
    pub totalprecip_mm: f64,
    pub avghumidity: f64,
    pub uv: f64,
    pub daily_chance_of_rain: f64,
    pub daily_chance_of_snow: f64,
    pub condition: Condition,
}

/// Rise/set labels come as 12-hour clock strings ("06:05 AM"), or sentinels
/// like "No moonrise" at extreme latitudes.
#[derive(Debug, Clone, Deserialize)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    #[serde(default)]
    pub moon_phase: String,
    #[serde(default)]
    pub moon_illumination: serde_json::Value,
}

/// One hour of forecast data, both unit systems already present on the
/// record. Never mutated by this crate.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyRecord {
    /// "YYYY-MM-DD HH:MM".
    pub time: String,
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub temp_f: Option<f64>,
    #[serde(default)]
    pub feelslike_c: Option<f64>,
    #[serde(default)]
    pub feelslike_f: Option<f64>,
    #[serde(default)]
    pub windchill_c: Option<f64>,
    #[serde(default)]
    pub windchill_f: Option<f64>,
    #[serde(default)]
    pub heatindex_c: Option<f64>,
    #[serde(default)]
    pub heatindex_f: Option<f64>,
    #[serde(default)]
    pub dewpoint_c: Option<f64>,
    #[serde(default)]
    pub dewpoint_f: Option<f64>,
    #[serde(default)]
    pub wind_kph: Option<f64>,
    #[serde(default)]
    pub wind_mph: Option<f64>,
    #[serde(default)]
    pub wind_degree: Option<f64>,
    #[serde(default)]
    pub wind_dir: Option<String>,
    #[serde(default)]
    pub gust_kph: Option<f64>,
    #[serde(default)]
    pub gust_mph: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub cloud: Option<f64>,
    #[serde(default)]
    pub pressure_mb: Option<f64>,
    #[serde(default)]
    pub pressure_in: Option<f64>,
    #[serde(default)]
    pub precip_mm: Option<f64>,
    #[serde(default)]
    pub precip_in: Option<f64>,
    #[serde(default)]
    pub vis_km: Option<f64>,
    #[serde(default)]
    pub vis_miles: Option<f64>,
    #[serde(default)]
    pub uv: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Alerts {
    #[serde(default)]
    pub alert: Vec<WeatherAlert>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherAlert {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub desc: String,
}
