use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Range, Rect};
use crate::error::{GraphError, GraphResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AxisId(u32);

impl AxisId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Edge an axis is anchored to.
///
/// Horizontal: primary = bottom, secondary = top.
/// Vertical: primary = left, secondary = right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisSide {
    #[default]
    Primary,
    Secondary,
}

/// Per-axis model state.
///
/// `bounds` and `tick_extent` are written by the surface after each layout
/// pass; `range` is only rewritten through history-wrapped range operations.
/// Axes serialize for inspection but are only built through the validating
/// constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    id: AxisId,
    title: String,
    orientation: Orientation,
    side: AxisSide,
    range: Range,
    log_scale: bool,
    auto_scale: bool,
    margin: f64,
    visible: bool,
    tick_extent: f64,
    bounds: Rect,
}

impl Axis {
    pub const DEFAULT_MARGIN_PX: f64 = 8.0;

    #[must_use]
    pub fn new(id: AxisId, title: impl Into<String>, orientation: Orientation) -> Self {
        Self {
            id,
            title: title.into(),
            orientation,
            side: AxisSide::Primary,
            range: Range::from_raw(0.0, 100.0),
            log_scale: false,
            auto_scale: false,
            margin: Self::DEFAULT_MARGIN_PX,
            visible: true,
            tick_extent: 0.0,
            bounds: Rect::default(),
        }
    }

    #[must_use]
    pub fn horizontal(id: AxisId, title: impl Into<String>) -> Self {
        Self::new(id, title, Orientation::Horizontal)
    }

    #[must_use]
    pub fn vertical(id: AxisId, title: impl Into<String>) -> Self {
        Self::new(id, title, Orientation::Vertical)
    }

    #[must_use]
    pub fn with_side(mut self, side: AxisSide) -> Self {
        self.side = side;
        self
    }

    pub fn with_range(mut self, range: Range) -> GraphResult<Self> {
        validate_range_for_scale(range, self.log_scale)?;
        self.range = range;
        Ok(self)
    }

    pub fn with_log_scale(mut self, log_scale: bool) -> GraphResult<Self> {
        self.set_log_scale(log_scale)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_auto_scale(mut self, auto_scale: bool) -> Self {
        self.auto_scale = auto_scale;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> GraphResult<Self> {
        self.set_margin(margin)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn id(&self) -> AxisId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    #[must_use]
    pub fn side(&self) -> AxisSide {
        self.side
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }

    #[must_use]
    pub fn is_log_scale(&self) -> bool {
        self.log_scale
    }

    #[must_use]
    pub fn is_auto_scale(&self) -> bool {
        self.auto_scale
    }

    #[must_use]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Length of the tick region computed by the last layout pass.
    #[must_use]
    pub fn tick_extent(&self) -> f64 {
        self.tick_extent
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_side(&mut self, side: AxisSide) {
        self.side = side;
    }

    pub fn set_auto_scale(&mut self, auto_scale: bool) {
        self.auto_scale = auto_scale;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_margin(&mut self, margin: f64) -> GraphResult<()> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(GraphError::InvalidData(
                "axis margin must be finite and >= 0".to_owned(),
            ));
        }
        self.margin = margin;
        Ok(())
    }

    /// Enabling log scale requires a strictly positive current range.
    pub fn set_log_scale(&mut self, log_scale: bool) -> GraphResult<()> {
        validate_range_for_scale(self.range, log_scale)?;
        self.log_scale = log_scale;
        Ok(())
    }

    pub(crate) fn set_range(&mut self, range: Range) -> GraphResult<()> {
        validate_range_for_scale(range, self.log_scale)?;
        self.range = range;
        Ok(())
    }

    /// Writes a history snapshot back without re-validation.
    pub(crate) fn restore_range(&mut self, range: Range) {
        self.range = range;
    }

    pub(crate) fn apply_layout(&mut self, bounds: Rect, tick_extent: f64) {
        self.bounds = bounds;
        self.tick_extent = tick_extent;
    }
}

fn validate_range_for_scale(range: Range, log_scale: bool) -> GraphResult<()> {
    if log_scale && range.lower() <= 0.0 {
        return Err(GraphError::InvalidData(
            "log-scale axis range must be > 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Axis, AxisId};
    use crate::core::Range;

    #[test]
    fn log_scale_rejects_non_positive_range() {
        let axis = Axis::vertical(AxisId::new(0), "Y")
            .with_range(Range::new(-1.0, 10.0).expect("range"))
            .expect("linear range accepted");
        assert!(axis.clone().with_log_scale(true).is_err());

        let positive = axis
            .with_range(Range::new(1.0, 10.0).expect("range"))
            .expect("positive range")
            .with_log_scale(true)
            .expect("log scale enabled");
        assert!(positive.is_log_scale());
    }

    #[test]
    fn negative_margin_is_rejected() {
        let mut axis = Axis::horizontal(AxisId::new(1), "X");
        assert!(axis.set_margin(-2.0).is_err());
        assert!(axis.set_margin(f64::INFINITY).is_err());
        axis.set_margin(3.0).expect("valid margin");
        assert_eq!(axis.margin(), 3.0);
    }
}
