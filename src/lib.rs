#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod astro;
pub mod bands;
pub mod chart;
pub mod fetch;
pub mod forecast;
pub mod metrics;
pub mod series;
pub mod visibility;

pub use app::ForecastApp;
