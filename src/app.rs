use std::sync::mpsc::{channel, Receiver, TryRecvError};

use egui::Ui;

use crate::astro;
use crate::bands::{UK_DEFRA_INDEX, US_EPA_INDEX, UV_INDEX};
use crate::chart::ChartView;
use crate::fetch::{self, FetchError};
use crate::forecast::{ForecastDay, WeatherData};
use crate::series;

/// The three forecast days the provider returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Day {
    #[default]
    Today,
    Tomorrow,
    DayAfter,
}

impl Day {
    fn index(self) -> usize {
        match self {
            Day::Today => 0,
            Day::Tomorrow => 1,
            Day::DayAfter => 2,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Day::Today => "Today",
            Day::Tomorrow => "Tomorrow",
            Day::DayAfter => "Day After",
        }
    }
}

type FetchOutcome = (u64, Result<WeatherData, FetchError>);

pub struct ForecastApp {
    api_key: String,
    city: String,
    error: Option<String>,
    weather: Option<WeatherData>,
    day: Day,
    chart: ChartView,
    pending: Option<Receiver<FetchOutcome>>,
    // Bumped on every search so a late result from a superseded fetch
    // can be recognized and dropped.
    generation: u64,
}

impl ForecastApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, api_key: String) -> Self {
        Self {
            api_key,
            city: String::new(),
            error: None,
            weather: None,
            day: Day::default(),
            chart: ChartView::new(),
            pending: None,
            generation: 0,
        }
    }

    fn spawn_fetch(&mut self, ctx: &egui::Context) {
        let city = self.city.trim().to_string();
        if city.is_empty() {
            return;
        }
        self.generation += 1;
        let generation = self.generation;
        let api_key = self.api_key.clone();
        let ctx = ctx.clone();
        let (sender, receiver) = channel();
        self.pending = Some(receiver);
        std::thread::spawn(move || {
            let result = fetch::fetch_forecast_blocking(&api_key, &city);
            if sender.send((generation, result)).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    fn poll_fetch(&mut self) {
        let Some(receiver) = &self.pending else {
            return;
        };
        match receiver.try_recv() {
            Ok((generation, result)) => {
                self.pending = None;
                if generation != self.generation {
                    log::debug!("discarding a superseded fetch result");
                    return;
                }
                match result {
                    Ok(data) => {
                        self.error = None;
                        self.day = Day::default();
                        self.weather = Some(data);
                    }
                    Err(err) => {
                        log::warn!("forecast fetch failed: {err}");
                        self.error = Some(err.to_string());
                        self.weather = None;
                    }
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.error = Some("the fetch worker exited unexpectedly".to_string());
            }
        }
    }

    fn go_back(&mut self) {
        self.weather = None;
        self.city.clear();
        self.error = None;
        self.day = Day::default();
        // Supersede any in-flight fetch: drop its channel and bump the
        // generation so a late result cannot resurrect the cleared state.
        self.pending = None;
        self.generation += 1;
    }

    pub fn ui(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.add_space(16.0);
                egui::widgets::global_dark_light_mode_buttons(ui);
            });
        });

        egui::SidePanel::left("search_panel").show(ctx, |ui| {
            ui.heading("Forecast Flow");
            ui.separator();
            ui.text_edit_singleline(&mut self.city);
            ui.horizontal(|ui| {
                let searchable = !self.city.trim().is_empty() && self.pending.is_none();
                if ui
                    .add_enabled(searchable, egui::Button::new("Search"))
                    .clicked()
                {
                    self.spawn_fetch(ctx);
                }
                if ui
                    .add_enabled(self.weather.is_some(), egui::Button::new("Back"))
                    .clicked()
                {
                    self.go_back();
                }
            });
            if self.pending.is_some() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Fetching forecast...");
                });
            }
            if self.api_key.is_empty() {
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    "WEATHERAPI_KEY is not set; searches will fail.",
                );
            }
            if let Some(error) = &self.error {
                ui.colored_label(ui.visuals().error_fg_color, format!("⚠ {error}"));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(weather) = self.weather.take() else {
                ui.label("Search for a city to load its 3-day forecast.");
                return;
            };
            self.weather_ui(&weather, ui);
            self.weather = Some(weather);
        });
    }

    fn weather_ui(&mut self, weather: &WeatherData, ui: &mut Ui) {
        ui.horizontal(|ui| {
            for day in [Day::Today, Day::Tomorrow, Day::DayAfter] {
                ui.selectable_value(&mut self.day, day, day.label());
            }
        });
        ui.separator();

        let Some(day) = weather.forecast.forecastday.get(self.day.index()) else {
            ui.label("The forecast payload does not cover this day.");
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            overview_ui(weather, day, ui);
            ui.separator();
            ui.heading("Weather Data Visualization");
            let points = series::project(&day.hour);
            self.chart.ui(&points, ui);
        });
    }
}

impl eframe::App for ForecastApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.ui(ctx, frame);
    }
}

/// Sun/moon status text; an unparsable window reads as unknown rather than
/// guessing a comparison.
fn body_status(localtime: &str, date: &str, rise: &str, set: &str) -> &'static str {
    match astro::is_up(localtime, date, rise, set) {
        Ok(true) => "Up",
        Ok(false) => "Down",
        Err(err) => {
            log::debug!("astronomy window unavailable: {err}");
            "Unknown"
        }
    }
}

fn hemisphere(value: f64, positive: &str, negative: &str) -> String {
    // The equator and prime meridian read as N/E.
    if value >= 0.0 {
        format!("{value}° {positive}")
    } else {
        format!("{value}° {negative}")
    }
}

/// The provider reports moon illumination as either a bare number or a
/// string, depending on API version.
fn moon_illumination_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) if !text.is_empty() => Some(format!("{text} %")),
        serde_json::Value::Number(number) => Some(format!("{number} %")),
        _ => None,
    }
}

fn overview_ui(weather: &WeatherData, day: &ForecastDay, ui: &mut Ui) {
    let location = &weather.location;
    let current = &weather.current;
    let astro = &day.astro;

    ui.heading(format!(
        "{}, {} - {}",
        location.name, location.country, day.date
    ));

    ui.columns(2, |columns| {
        let ui = &mut columns[0];
        ui.strong("Location");
        egui::Grid::new("location_grid").num_columns(2).show(ui, |ui| {
            ui.label("Region");
            ui.label(&location.region);
            ui.end_row();
            ui.label("Latitude");
            ui.label(hemisphere(location.lat, "N", "S"));
            ui.end_row();
            ui.label("Longitude");
            ui.label(hemisphere(location.lon, "E", "W"));
            ui.end_row();
            ui.label("Timezone");
            ui.label(&location.tz_id);
            ui.end_row();
            ui.label("Local time");
            ui.label(&location.localtime);
            ui.end_row();
            ui.label("Last updated");
            ui.label(&current.last_updated);
            ui.end_row();
        });

        ui.add_space(8.0);
        ui.strong("Current conditions");
        egui::Grid::new("current_grid").num_columns(2).show(ui, |ui| {
            ui.label("Condition");
            ui.label(&current.condition.text);
            ui.end_row();
            ui.label("Temperature");
            ui.label(format!("{} °C / {} °F", current.temp_c, current.temp_f));
            ui.end_row();
            ui.label("Feels like");
            ui.label(format!(
                "{} °C / {} °F",
                current.feelslike_c, current.feelslike_f
            ));
            ui.end_row();
            ui.label("Wind");
            ui.label(format!(
                "{} kph / {} mph {}",
                current.wind_kph, current.wind_mph, current.wind_dir
            ));
            ui.end_row();
            ui.label("Gust");
            ui.label(format!("{} kph / {} mph", current.gust_kph, current.gust_mph));
            ui.end_row();
            ui.label("Humidity");
            ui.label(format!("{} %", current.humidity));
            ui.end_row();
            ui.label("Cloud");
            ui.label(format!("{} %", current.cloud));
            ui.end_row();
            ui.label("Pressure");
            ui.label(format!(
                "{} mb / {} in",
                current.pressure_mb, current.pressure_in
            ));
            ui.end_row();
            ui.label("Precipitation");
            ui.label(format!("{} mm / {} in", current.precip_mm, current.precip_in));
            ui.end_row();
            ui.label("Visibility");
            ui.label(format!("{} km / {} miles", current.vis_km, current.vis_miles));
            ui.end_row();
            ui.label("UV index");
            ui.label(format!("{} ({})", current.uv, UV_INDEX.classify(current.uv)));
            ui.end_row();
        });

        let ui = &mut columns[1];
        ui.strong("Air quality");
        egui::Grid::new("air_quality_grid").num_columns(2).show(ui, |ui| {
            match &current.air_quality {
                Some(aq) => {
                    if let Some(index) = aq.us_epa_index {
                        ui.label("US EPA index");
                        ui.label(format!("{index:.0} ({})", US_EPA_INDEX.classify(index)));
                        ui.end_row();
                    }
                    if let Some(index) = aq.gb_defra_index {
                        ui.label("UK DEFRA index");
                        ui.label(format!("{index:.0} ({})", UK_DEFRA_INDEX.classify(index)));
                        ui.end_row();
                    }
                    for (name, value) in [
                        ("CO", aq.co),
                        ("NO₂", aq.no2),
                        ("O₃", aq.o3),
                        ("SO₂", aq.so2),
                        ("PM2.5", aq.pm2_5),
                        ("PM10", aq.pm10),
                    ] {
                        if let Some(value) = value {
                            ui.label(name);
                            ui.label(format!("{value:.1} µg/m³"));
                            ui.end_row();
                        }
                    }
                }
                None => {
                    ui.label("No air quality data in this payload.");
                    ui.end_row();
                }
            }
        });

        ui.add_space(8.0);
        ui.strong("Astronomy");
        egui::Grid::new("astronomy_grid").num_columns(2).show(ui, |ui| {
            ui.label("Sunrise");
            ui.label(&astro.sunrise);
            ui.end_row();
            ui.label("Sunset");
            ui.label(&astro.sunset);
            ui.end_row();
            ui.label("Sun");
            ui.label(body_status(
                &location.localtime,
                &day.date,
                &astro.sunrise,
                &astro.sunset,
            ));
            ui.end_row();
            ui.label("Moonrise");
            ui.label(&astro.moonrise);
            ui.end_row();
            ui.label("Moonset");
            ui.label(&astro.moonset);
            ui.end_row();
            ui.label("Moon");
            ui.label(body_status(
                &location.localtime,
                &day.date,
                &astro.moonrise,
                &astro.moonset,
            ));
            ui.end_row();
            if !astro.moon_phase.is_empty() {
                ui.label("Moon phase");
                ui.label(&astro.moon_phase);
                ui.end_row();
            }
            if let Some(illumination) = moon_illumination_text(&astro.moon_illumination) {
                ui.label("Moon illumination");
                ui.label(illumination);
                ui.end_row();
            }
        });

        ui.add_space(8.0);
        ui.strong("Day summary");
        egui::Grid::new("day_summary_grid").num_columns(2).show(ui, |ui| {
            ui.label("Condition");
            ui.label(&day.day.condition.text);
            ui.end_row();
            ui.label("Temperature");
            ui.label(format!(
                "{} °C to {} °C",
                day.day.mintemp_c, day.day.maxtemp_c
            ));
            ui.end_row();
            ui.label("Max wind");
            ui.label(format!("{} kph", day.day.maxwind_kph));
            ui.end_row();
            ui.label("Total precipitation");
            ui.label(format!("{} mm", day.day.totalprecip_mm));
            ui.end_row();
            ui.label("Chance of rain");
            ui.label(format!("{} %", day.day.daily_chance_of_rain));
            ui.end_row();
            ui.label("UV index");
            ui.label(format!("{} ({})", day.day.uv, UV_INDEX.classify(day.day.uv)));
            ui.end_row();
        });
    });

    if !weather.alerts.alert.is_empty() {
        ui.add_space(8.0);
        ui.strong("Alerts");
        for alert in &weather.alerts.alert {
            let title = if alert.headline.is_empty() {
                &alert.event
            } else {
                &alert.headline
            };
            ui.colored_label(ui.visuals().warn_fg_color, title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> ForecastApp {
        ForecastApp {
            api_key: String::new(),
            city: String::new(),
            error: None,
            weather: None,
            day: Day::default(),
            chart: ChartView::new(),
            pending: None,
            generation: 0,
        }
    }

    fn sample_weather() -> WeatherData {
        serde_json::from_str(
            r#"{
                "location": {
                    "name": "Paris", "region": "Ile-de-France", "country": "France",
                    "lat": 48.87, "lon": 2.33, "tz_id": "Europe/Paris",
                    "localtime": "2024-06-01 14:30"
                },
                "current": {
                    "last_updated": "2024-06-01 14:15",
                    "temp_c": 18.2, "temp_f": 64.8,
                    "feelslike_c": 17.0, "feelslike_f": 62.6,
                    "wind_kph": 14.0, "wind_mph": 8.7,
                    "wind_degree": 210, "wind_dir": "SSW",
                    "gust_kph": 21.2, "gust_mph": 13.2,
                    "humidity": 61, "cloud": 25,
                    "pressure_mb": 1012, "pressure_in": 29.88,
                    "precip_mm": 0.0, "precip_in": 0.0,
                    "vis_km": 10, "vis_miles": 6, "uv": 4,
                    "condition": { "text": "Partly cloudy" }
                },
                "forecast": { "forecastday": [] }
            }"#,
        )
        .expect("sample payload should decode")
    }

    #[test]
    fn back_discards_an_in_flight_fetch() {
        let mut app = app();
        app.city = "Paris".to_string();
        app.generation = 1;
        let (sender, receiver) = channel();
        app.pending = Some(receiver);

        app.go_back();
        assert!(app.pending.is_none());
        assert_eq!(app.generation, 2);

        // The worker's channel is gone; its eventual result has nowhere
        // to land and the cleared state stays cleared.
        assert!(sender.send((1, Ok(sample_weather()))).is_err());
        app.poll_fetch();
        assert!(app.weather.is_none());
        assert!(app.error.is_none());
        assert!(app.city.is_empty());
    }

    #[test]
    fn superseded_fetch_result_is_dropped() {
        let mut app = app();
        let (sender, receiver) = channel();
        app.pending = Some(receiver);
        // A newer search has bumped the generation past the in-flight one.
        app.generation = 2;

        sender
            .send((1, Ok(sample_weather())))
            .expect("receiver is still held");
        app.poll_fetch();
        assert!(app.weather.is_none());
        assert!(app.error.is_none());
        assert!(app.pending.is_none());
    }

    #[test]
    fn current_fetch_result_is_applied() {
        let mut app = app();
        let (sender, receiver) = channel();
        app.pending = Some(receiver);
        app.generation = 1;

        sender
            .send((1, Ok(sample_weather())))
            .expect("receiver is still held");
        app.poll_fetch();
        let weather = app.weather.as_ref().expect("payload should be applied");
        assert_eq!(weather.location.name, "Paris");
        assert!(app.pending.is_none());
    }

    #[test]
    fn day_indices_match_the_payload_layout() {
        assert_eq!(Day::Today.index(), 0);
        assert_eq!(Day::Tomorrow.index(), 1);
        assert_eq!(Day::DayAfter.index(), 2);
    }

    #[test]
    fn unparsable_windows_read_as_unknown() {
        assert_eq!(
            body_status("2024-06-01 12:00", "2024-06-01", "No moonrise", "07:10 PM"),
            "Unknown"
        );
        assert_eq!(
            body_status("2024-06-01 12:00", "2024-06-01", "05:50 AM", "09:10 PM"),
            "Up"
        );
        assert_eq!(
            body_status("2024-06-01 23:00", "2024-06-01", "05:50 AM", "09:10 PM"),
            "Down"
        );
    }

    #[test]
    fn hemisphere_suffixes() {
        assert_eq!(hemisphere(48.86, "N", "S"), "48.86° N");
        assert_eq!(hemisphere(-33.87, "N", "S"), "-33.87° S");
        // The equator and prime meridian are northern/eastern.
        assert_eq!(hemisphere(0.0, "N", "S"), "0° N");
        assert_eq!(hemisphere(0.0, "E", "W"), "0° E");
    }

    #[test]
    fn moon_illumination_accepts_both_provider_shapes() {
        assert_eq!(
            moon_illumination_text(&serde_json::json!("74")),
            Some("74 %".to_string())
        );
        assert_eq!(
            moon_illumination_text(&serde_json::json!(74)),
            Some("74 %".to_string())
        );
        assert_eq!(moon_illumination_text(&serde_json::json!("")), None);
        assert_eq!(moon_illumination_text(&serde_json::Value::Null), None);
    }
}
