//! Threshold tables turning index-style readings (UV, air quality) into
//! severity labels.

/// An ascending list of `(upper bound, label)` pairs plus a fallback label
/// for values above every bound. `classify` is total: every finite value
/// maps to exactly one label.
pub struct BandScale {
    bands: &'static [(f64, &'static str)],
    fallback: &'static str,
}

impl BandScale {
    pub const fn new(bands: &'static [(f64, &'static str)], fallback: &'static str) -> Self {
        Self { bands, fallback }
    }

    /// First label whose bound is >= `value`, fallback otherwise.
    pub fn classify(&self, value: f64) -> &'static str {
        self.bands
            .iter()
            .find(|&&(bound, _)| value <= bound)
            .map_or(self.fallback, |&(_, label)| label)
    }

    /// Position of the band `value` falls into, fallback being the last.
    /// Only interesting to ordering-sensitive callers and tests.
    pub fn band_index(&self, value: f64) -> usize {
        self.bands
            .iter()
            .position(|&(bound, _)| value <= bound)
            .unwrap_or(self.bands.len())
    }
}

/// UV index scale used by weatherapi.com.
pub static UV_INDEX: BandScale = BandScale::new(
    &[
        (2.0, "Low"),
        (5.0, "Moderate"),
        (7.0, "High"),
        (10.0, "Very High"),
    ],
    "Extreme",
);

/// US EPA air quality index, 1 through 6.
pub static US_EPA_INDEX: BandScale = BandScale::new(
    &[
        (1.0, "Good"),
        (2.0, "Moderate"),
        (3.0, "Unhealthy for sensitive group"),
        (4.0, "Unhealthy"),
        (5.0, "Very Unhealthy"),
    ],
    "Hazardous",
);

/// UK DEFRA air quality index, 1 through 10.
pub static UK_DEFRA_INDEX: BandScale = BandScale::new(
    &[(3.0, "Low"), (6.0, "Moderate"), (9.0, "High")],
    "Very High",
);
