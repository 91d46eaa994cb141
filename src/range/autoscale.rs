use crate::core::{Axis, DataExtent, Range};

/// Range an axis takes when autoscaled to `extent`.
///
/// Hidden axes and axes without data keep their range. Constant data is
/// centered the same way stagger does; a zero constant, or data that cannot
/// be shown on a log axis, is skipped.
#[must_use]
pub fn autoscale_range(axis: &Axis, extent: Option<DataExtent>) -> Option<Range> {
    if !axis.is_visible() {
        return None;
    }
    let (low, high) = extent?.expanded_if_degenerate();
    if axis.is_log_scale() && low <= 0.0 {
        return None;
    }
    Range::checked(low, high)
}

#[cfg(test)]
mod tests {
    use super::autoscale_range;
    use crate::core::{Axis, AxisId, DataExtent, Range};

    fn extent(lower: f64, upper: f64) -> Option<DataExtent> {
        Some(DataExtent::new(lower, upper).expect("extent"))
    }

    #[test]
    fn visible_axis_takes_data_union() {
        let axis = Axis::vertical(AxisId::new(0), "Y");
        assert_eq!(
            autoscale_range(&axis, extent(-3.0, 12.0)),
            Some(Range::new(-3.0, 12.0).expect("range"))
        );
    }

    #[test]
    fn hidden_axis_or_missing_data_is_skipped() {
        let hidden = Axis::vertical(AxisId::new(0), "Y").with_visible(false);
        assert_eq!(autoscale_range(&hidden, extent(0.0, 1.0)), None);

        let axis = Axis::vertical(AxisId::new(1), "Y2");
        assert_eq!(autoscale_range(&axis, None), None);
    }

    #[test]
    fn log_axis_rejects_non_positive_data() {
        let axis = Axis::vertical(AxisId::new(0), "Y")
            .with_range(Range::new(1.0, 10.0).expect("range"))
            .expect("positive")
            .with_log_scale(true)
            .expect("log");
        assert_eq!(autoscale_range(&axis, extent(0.0, 100.0)), None);
        assert_eq!(
            autoscale_range(&axis, extent(0.5, 100.0)),
            Some(Range::new(0.5, 100.0).expect("range"))
        );
    }

    #[test]
    fn constant_data_is_centered() {
        let axis = Axis::horizontal(AxisId::new(1), "X");
        assert_eq!(
            autoscale_range(&axis, extent(8.0, 8.0)),
            Some(Range::new(4.0, 12.0).expect("range"))
        );
        assert_eq!(autoscale_range(&axis, extent(0.0, 0.0)), None);
    }
}
