//! Projection of hourly forecast records into chart-ready points.

use crate::forecast::HourlyRecord;
use crate::metrics::{Metric, METRIC_COUNT};

/// One chart sample: the time-of-day label plus every metric's value in both
/// unit systems. Slots without data hold NaN; consumers treat non-finite
/// values as absent.
#[derive(Debug, Clone)]
pub struct SeriesPoint {
    /// X-axis label, the time-of-day part of the record's timestamp.
    pub time: String,
    /// Compass label paired with the wind degree.
    pub wind_dir: String,
    primary: [f64; METRIC_COUNT],
    secondary: [f64; METRIC_COUNT],
}

impl SeriesPoint {
    pub fn primary(&self, metric: Metric) -> f64 {
        self.primary[metric.index()]
    }

    /// Secondary-unit value; NaN for metrics that only have one unit.
    pub fn secondary(&self, metric: Metric) -> f64 {
        self.secondary[metric.index()]
    }
}

// Bitwise float comparison so NaN slots compare equal to themselves.
impl PartialEq for SeriesPoint {
    fn eq(&self, other: &Self) -> bool {
        let bits = |values: &[f64; METRIC_COUNT]| values.map(f64::to_bits);
        self.time == other.time
            && self.wind_dir == other.wind_dir
            && bits(&self.primary) == bits(&other.primary)
            && bits(&self.secondary) == bits(&other.secondary)
    }
}

fn value(field: Option<f64>) -> f64 {
    field.unwrap_or(f64::NAN)
}

/// Time-of-day part of a "YYYY-MM-DD HH:MM" timestamp.
fn time_label(timestamp: &str) -> &str {
    timestamp
        .split_once(' ')
        .map(|(_, clock)| clock)
        .unwrap_or_default()
}

/// Maps hourly records onto [`SeriesPoint`]s, one per record, preserving
/// input order. Values are copied verbatim; both unit variants are already
/// present on the source record, so no conversion happens here.
pub fn project(records: &[HourlyRecord]) -> Vec<SeriesPoint> {
    records
        .iter()
        .map(|record| {
            let mut primary = [f64::NAN; METRIC_COUNT];
            let mut secondary = [f64::NAN; METRIC_COUNT];
            for metric in Metric::ALL {
                let (first, second) = match metric {
                    Metric::Temperature => (record.temp_c, record.temp_f),
                    Metric::FeelsLike => (record.feelslike_c, record.feelslike_f),
                    Metric::WindChill => (record.windchill_c, record.windchill_f),
                    Metric::HeatIndex => (record.heatindex_c, record.heatindex_f),
                    Metric::DewPoint => (record.dewpoint_c, record.dewpoint_f),
                    Metric::WindSpeed => (record.wind_kph, record.wind_mph),
                    Metric::WindDegree => (record.wind_degree, None),
                    Metric::Gust => (record.gust_kph, record.gust_mph),
                    Metric::Humidity => (record.humidity, None),
                    Metric::Cloud => (record.cloud, None),
                    Metric::Pressure => (record.pressure_mb, record.pressure_in),
                    Metric::Precipitation => (record.precip_mm, record.precip_in),
                    Metric::Visibility => (record.vis_km, record.vis_miles),
                    Metric::Uv => (record.uv, None),
                };
                primary[metric.index()] = value(first);
                secondary[metric.index()] = value(second);
            }
            SeriesPoint {
                time: time_label(&record.time).to_string(),
                wind_dir: record.wind_dir.clone().unwrap_or_default(),
                primary,
                secondary,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time: &str, temp_c: f64) -> HourlyRecord {
        serde_json::from_str(&format!(
            r#"{{
                "time": "{time}",
                "temp_c": {temp_c},
                "temp_f": {},
                "wind_kph": 14.0,
                "wind_mph": 8.7,
                "wind_degree": 210,
                "wind_dir": "SSW",
                "humidity": 61,
                "cloud": 25,
                "pressure_mb": 1012.0,
                "pressure_in": 29.88,
                "precip_mm": 0.0,
                "precip_in": 0.0,
                "vis_km": 10.0,
                "vis_miles": 6.0,
                "uv": 4.0
            }}"#,
            temp_c * 9.0 / 5.0 + 32.0
        ))
        .expect("test record should decode")
    }

    #[test]
    fn preserves_length_and_order() {
        let records: Vec<_> = (0..24)
            .map(|hour| record(&format!("2024-06-01 {hour:02}:00"), 15.0 + hour as f64))
            .collect();
        let points = project(&records);
        assert_eq!(points.len(), records.len());
        for (hour, point) in points.iter().enumerate() {
            assert_eq!(point.time, format!("{hour:02}:00"));
        }
    }

    #[test]
    fn copies_both_unit_variants_verbatim() {
        let points = project(&[record("2024-06-01 13:00", 20.0)]);
        let point = &points[0];
        assert_eq!(point.primary(Metric::Temperature), 20.0);
        assert_eq!(point.secondary(Metric::Temperature), 68.0);
        assert_eq!(point.primary(Metric::WindSpeed), 14.0);
        assert_eq!(point.secondary(Metric::WindSpeed), 8.7);
        assert_eq!(point.primary(Metric::WindDegree), 210.0);
        assert_eq!(point.wind_dir, "SSW");
    }

    #[test]
    fn missing_fields_degrade_to_nan() {
        let sparse: HourlyRecord =
            serde_json::from_str(r#"{ "time": "2024-06-01 05:00" }"#).expect("sparse record");
        let points = project(&[sparse]);
        let point = &points[0];
        assert!(point.primary(Metric::Temperature).is_nan());
        assert!(point.primary(Metric::Uv).is_nan());
        assert_eq!(point.wind_dir, "");
        assert_eq!(point.time, "05:00");
    }

    #[test]
    fn single_unit_metrics_have_nan_secondary() {
        let points = project(&[record("2024-06-01 13:00", 20.0)]);
        assert!(points[0].secondary(Metric::Humidity).is_nan());
        assert!(points[0].secondary(Metric::Cloud).is_nan());
        assert!(points[0].secondary(Metric::Uv).is_nan());
    }

    #[test]
    fn projection_is_idempotent() {
        let records = vec![record("2024-06-01 08:00", 17.5), record("2024-06-01 09:00", 18.5)];
        assert_eq!(project(&records), project(&records));
    }

    #[test]
    fn timestamp_without_date_prefix_degrades_to_empty_label() {
        let odd: HourlyRecord =
            serde_json::from_str(r#"{ "time": "13:00" }"#).expect("odd record");
        let points = project(&[odd]);
        assert_eq!(points[0].time, "");
    }
}
