use serde::{Deserialize, Serialize};

use crate::core::{DataExtent, Range};
use crate::error::{GraphError, GraphResult};

pub const STAGGER_GAP_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaggerTuning {
    /// Fraction of the data span added above and below before banding.
    pub gap_ratio: f64,
}

impl Default for StaggerTuning {
    fn default() -> Self {
        Self {
            gap_ratio: STAGGER_GAP_RATIO,
        }
    }
}

impl StaggerTuning {
    pub fn validate(self) -> GraphResult<Self> {
        if !self.gap_ratio.is_finite() || self.gap_ratio < 0.0 {
            return Err(GraphError::InvalidData(
                "stagger gap ratio must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Displayed range for axis `index` of `count` staggered axes.
///
/// The padded data span is repeated `count` times: `count - index - 1` spans
/// below the data and `index` spans above, so axis 0 renders in the top band
/// and axis `count - 1` in the bottom band. Log axes are banded in log10
/// space. Returns `None` when the result is empty, inverted or non-finite.
#[must_use]
pub fn stagger_range(
    extent: DataExtent,
    log_scale: bool,
    index: usize,
    count: usize,
    tuning: StaggerTuning,
) -> Option<Range> {
    let (mut low, mut high) = extent.expanded_if_degenerate();

    if log_scale {
        low = low.log10();
        high = high.log10();
    }

    let mut span = high - low;
    low -= tuning.gap_ratio * span;
    high += tuning.gap_ratio * span;
    span = high - low;

    let below = count.saturating_sub(index + 1) as f64;
    low -= below * span;
    high += index as f64 * span;

    if log_scale {
        low = 10f64.powf(low);
        high = 10f64.powf(high);
    }

    Range::checked(low, high)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{StaggerTuning, stagger_range};
    use crate::core::DataExtent;

    fn extent(lower: f64, upper: f64) -> DataExtent {
        DataExtent::new(lower, upper).expect("extent")
    }

    #[test]
    fn single_axis_only_gets_padding() {
        let range = stagger_range(extent(0.0, 10.0), false, 0, 1, StaggerTuning::default())
            .expect("range");
        assert_relative_eq!(range.lower(), -1.0);
        assert_relative_eq!(range.upper(), 11.0);
    }

    #[test]
    fn constant_data_is_centered_before_padding() {
        let tuning = StaggerTuning { gap_ratio: 0.0 };
        let range = stagger_range(extent(5.0, 5.0), false, 0, 1, tuning).expect("range");
        assert_relative_eq!(range.lower(), 2.5);
        assert_relative_eq!(range.upper(), 7.5);
    }

    #[test]
    fn zero_constant_is_skipped() {
        assert!(stagger_range(extent(0.0, 0.0), false, 0, 2, StaggerTuning::default()).is_none());
    }

    #[test]
    fn log_axis_bands_in_decades() {
        let tuning = StaggerTuning { gap_ratio: 0.0 };
        let top = stagger_range(extent(1.0, 10.0), true, 0, 2, tuning).expect("top");
        assert_relative_eq!(top.lower(), 0.1, max_relative = 1e-12);
        assert_relative_eq!(top.upper(), 10.0, max_relative = 1e-12);

        let bottom = stagger_range(extent(1.0, 10.0), true, 1, 2, tuning).expect("bottom");
        assert_relative_eq!(bottom.lower(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(bottom.upper(), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn log_axis_with_non_positive_data_is_skipped() {
        assert!(stagger_range(extent(0.0, 10.0), true, 0, 1, StaggerTuning::default()).is_none());
        assert!(stagger_range(extent(-5.0, -1.0), true, 0, 1, StaggerTuning::default()).is_none());
    }
}
