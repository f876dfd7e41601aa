//! Show/hide state for the chart's 14 lines plus the bulk toggle.

use crate::metrics::{Metric, METRIC_COUNT};

/// Per-metric visibility flags and the "select all / unselect all" flag.
///
/// The aggregate flag is independent state, not a projection of the 14
/// metric flags: toggling a single metric never rewrites it, only
/// [`toggle_all`](Self::toggle_all) does. This mirrors how the buttons
/// behave — the bulk button keeps its last commanded label even when the
/// individual toggles have drifted away from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityController {
    shown: [bool; METRIC_COUNT],
    all: bool,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self {
            shown: [true; METRIC_COUNT],
            all: true,
        }
    }
}

impl VisibilityController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shown(&self, metric: Metric) -> bool {
        self.shown[metric.index()]
    }

    /// Last commanded state of the bulk toggle.
    pub fn all_selected(&self) -> bool {
        self.all
    }

    /// Flips one metric's flag; the aggregate flag is left untouched.
    pub fn toggle(&mut self, metric: Metric) {
        self.shown[metric.index()] ^= true;
    }

    /// Flips the aggregate flag and forces every metric flag to match it.
    pub fn toggle_all(&mut self) {
        self.all = !self.all;
        self.shown = [self.all; METRIC_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_everything_visible() {
        let state = VisibilityController::new();
        assert!(state.all_selected());
        for metric in Metric::ALL {
            assert!(state.is_shown(metric));
        }
    }

    #[test]
    fn toggle_all_round_trips() {
        let mut state = VisibilityController::new();
        state.toggle_all();
        assert!(!state.all_selected());
        for metric in Metric::ALL {
            assert!(!state.is_shown(metric));
        }
        state.toggle_all();
        assert!(state.all_selected());
        for metric in Metric::ALL {
            assert!(state.is_shown(metric));
        }
    }

    #[test]
    fn toggling_one_metric_leaves_the_rest_alone() {
        let mut state = VisibilityController::new();
        state.toggle(Metric::Uv);
        assert!(!state.is_shown(Metric::Uv));
        assert!(state.all_selected());
        for metric in Metric::ALL {
            if metric != Metric::Uv {
                assert!(state.is_shown(metric));
            }
        }
        state.toggle(Metric::Uv);
        assert_eq!(state, VisibilityController::new());
    }

    #[test]
    fn aggregate_flag_is_not_recomputed_from_metrics() {
        let mut state = VisibilityController::new();
        for metric in Metric::ALL {
            state.toggle(metric);
        }
        // Every line is hidden, yet the bulk toggle still reads "selected".
        assert!(state.all_selected());
        for metric in Metric::ALL {
            assert!(!state.is_shown(metric));
        }
    }

    #[test]
    fn toggle_all_overrides_individual_drift() {
        let mut state = VisibilityController::new();
        state.toggle(Metric::Humidity);
        state.toggle(Metric::Pressure);
        state.toggle_all();
        assert!(!state.all_selected());
        for metric in Metric::ALL {
            assert!(!state.is_shown(metric));
        }
    }
}
