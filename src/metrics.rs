//! The closed catalog of chart metrics: one entry per plotted line, carrying
//! everything the chart and tooltip need to render it.

use egui::Color32;

use crate::bands::{BandScale, UV_INDEX};

/// The 14 hourly quantities drawn on the chart. The set is closed: every
/// variant has a descriptor and a slot in each [`crate::series::SeriesPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    FeelsLike,
    WindChill,
    HeatIndex,
    DewPoint,
    WindSpeed,
    WindDegree,
    Gust,
    Humidity,
    Cloud,
    Pressure,
    Precipitation,
    Visibility,
    Uv,
}

pub const METRIC_COUNT: usize = 14;

/// What sits next to the primary value in the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Secondary {
    /// Single-unit metric, nothing else to show.
    None,
    /// The same quantity in the other unit system, with its suffix.
    Unit(&'static str),
    /// The compass label that accompanies the wind degree.
    Compass,
}

pub struct MetricInfo {
    pub label: &'static str,
    pub color: Color32,
    /// Suffix of the primary value; empty for unitless readings.
    pub unit: &'static str,
    pub secondary: Secondary,
    pub scale: Option<&'static BandScale>,
}

// Descriptor table, one entry per `Metric` in declaration order.
static INFOS: [MetricInfo; METRIC_COUNT] = [
    MetricInfo {
        label: "Temperature",
        color: Color32::from_rgb(0xfa, 0xd0, 0xc4),
        unit: "°C",
        secondary: Secondary::Unit("°F"),
        scale: None,
    },
    MetricInfo {
        label: "Feels Like",
        color: Color32::from_rgb(0xfb, 0xc2, 0xeb),
        unit: "°C",
        secondary: Secondary::Unit("°F"),
        scale: None,
    },
    MetricInfo {
        label: "Wind Chill",
        color: Color32::from_rgb(0xff, 0xd1, 0xff),
        unit: "°C",
        secondary: Secondary::Unit("°F"),
        scale: None,
    },
    MetricInfo {
        label: "Heat Index",
        color: Color32::from_rgb(0xfc, 0xb6, 0x9f),
        unit: "°C",
        secondary: Secondary::Unit("°F"),
        scale: None,
    },
    MetricInfo {
        label: "Dew Point",
        color: Color32::from_rgb(0xee, 0x9c, 0xa7),
        unit: "°C",
        secondary: Secondary::Unit("°F"),
        scale: None,
    },
    MetricInfo {
        label: "Wind Speed",
        color: Color32::from_rgb(0x66, 0xa6, 0xff),
        unit: "kph",
        secondary: Secondary::Unit("mph"),
        scale: None,
    },
    MetricInfo {
        label: "Wind Degree",
        color: Color32::from_rgb(0xfd, 0xa0, 0x85),
        unit: "°",
        secondary: Secondary::Compass,
        scale: None,
    },
    MetricInfo {
        label: "Gust",
        color: Color32::from_rgb(0x8f, 0xd3, 0xf4),
        unit: "kph",
        secondary: Secondary::Unit("mph"),
        scale: None,
    },
    MetricInfo {
        label: "Humidity",
        color: Color32::from_rgb(0xd5, 0x7e, 0xeb),
        unit: "%",
        secondary: Secondary::None,
        scale: None,
    },
    MetricInfo {
        label: "Cloud",
        color: Color32::from_rgb(0x8e, 0xc5, 0xfc),
        unit: "%",
        secondary: Secondary::None,
        scale: None,
    },
    MetricInfo {
        label: "Pressure",
        color: Color32::from_rgb(0xf5, 0x57, 0x6c),
        unit: "mb",
        secondary: Secondary::Unit("in"),
        scale: None,
    },
    MetricInfo {
        label: "Precipitation",
        color: Color32::from_rgb(0x00, 0xf2, 0xfe),
        unit: "mm",
        secondary: Secondary::Unit("in"),
        scale: None,
    },
    MetricInfo {
        label: "Visibility",
        color: Color32::from_rgb(0x38, 0xf9, 0xd7),
        unit: "km",
        secondary: Secondary::Unit("miles"),
        scale: None,
    },
    MetricInfo {
        label: "UV Index",
        color: Color32::from_rgb(0xfe, 0xe1, 0x40),
        unit: "",
        secondary: Secondary::None,
        scale: Some(&UV_INDEX),
    },
];

impl Metric {
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::Temperature,
        Metric::FeelsLike,
        Metric::WindChill,
        Metric::HeatIndex,
        Metric::DewPoint,
        Metric::WindSpeed,
        Metric::WindDegree,
        Metric::Gust,
        Metric::Humidity,
        Metric::Cloud,
        Metric::Pressure,
        Metric::Precipitation,
        Metric::Visibility,
        Metric::Uv,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn info(self) -> &'static MetricInfo {
        &INFOS[self.index()]
    }

    /// Metric whose display label matches, if any. The chart uses this to
    /// map the hovered plot line back to its catalog entry.
    pub fn from_label(label: &str) -> Option<Metric> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.info().label == label)
    }
}
