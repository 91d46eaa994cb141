use crate::core::Range;
use crate::error::{GraphError, GraphResult};

/// Scales `range` around `center` by `factor` (`< 1` zooms in).
///
/// Log axes zoom in log10 space. `Ok(None)` means the result could not be
/// displayed and the axis should keep its range.
pub fn zoom_range(
    range: Range,
    log_scale: bool,
    center: f64,
    factor: f64,
) -> GraphResult<Option<Range>> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(GraphError::InvalidData(
            "zoom factor must be finite and > 0".to_owned(),
        ));
    }
    if !center.is_finite() {
        return Err(GraphError::InvalidData(
            "zoom center must be finite".to_owned(),
        ));
    }
    let space = ScaleSpace::new(log_scale);
    let center = space.forward(center);
    let low = center + (space.forward(range.lower()) - center) * factor;
    let high = center + (space.forward(range.upper()) - center) * factor;
    Ok(space.range(low, high))
}

/// Shifts `range` by `fraction` of its span (positive moves toward larger
/// values). Log axes pan in log10 space.
pub fn pan_range(range: Range, log_scale: bool, fraction: f64) -> GraphResult<Option<Range>> {
    if !fraction.is_finite() {
        return Err(GraphError::InvalidData(
            "pan fraction must be finite".to_owned(),
        ));
    }
    let space = ScaleSpace::new(log_scale);
    let low = space.forward(range.lower());
    let high = space.forward(range.upper());
    let delta = (high - low) * fraction;
    Ok(space.range(low + delta, high + delta))
}

#[derive(Clone, Copy)]
struct ScaleSpace {
    log_scale: bool,
}

impl ScaleSpace {
    fn new(log_scale: bool) -> Self {
        Self { log_scale }
    }

    fn forward(self, value: f64) -> f64 {
        if self.log_scale { value.log10() } else { value }
    }

    fn inverse(self, value: f64) -> f64 {
        if self.log_scale {
            10f64.powf(value)
        } else {
            value
        }
    }
    /// Log axes also need a strictly positive lower bound.
    fn range(self, low: f64, high: f64) -> Option<Range> {
        Range::checked(self.inverse(low), self.inverse(high))
            .filter(|range| !self.log_scale || range.lower() > 0.0)
    }
}
