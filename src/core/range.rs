use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Closed numeric interval `[lower, upper]` displayed by an axis.
///
/// Constructed ranges always satisfy `lower < upper` with both bounds finite.
/// History snapshots restore exact values through [`Range::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct Range {
    lower: f64,
    upper: f64,
}

/// Unvalidated wire form; deserialization goes through [`Range::new`].
#[derive(Deserialize)]
struct RangeBounds {
    lower: f64,
    upper: f64,
}

impl TryFrom<RangeBounds> for Range {
    type Error = GraphError;

    fn try_from(bounds: RangeBounds) -> GraphResult<Self> {
        Range::new(bounds.lower, bounds.upper)
    }
}

impl Range {
    pub fn new(lower: f64, upper: f64) -> GraphResult<Self> {
        if !is_valid_span(lower, upper) {
            return Err(GraphError::InvalidData(format!(
                "range must be finite with lower < upper, got [{lower}, {upper}]"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// Builds a range only when `lower < upper` and both bounds are finite.
    #[must_use]
    pub fn checked(lower: f64, upper: f64) -> Option<Self> {
        is_valid_span(lower, upper).then_some(Self { lower, upper })
    }

    /// Data extents may be degenerate (`lower == upper`); they are not
    /// displayable ranges until expanded.
    pub(crate) const fn from_raw(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    #[must_use]
    pub const fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub const fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    #[must_use]
    pub fn union(self, other: Range) -> Range {
        Range::from_raw(self.lower.min(other.lower), self.upper.max(other.upper))
    }

    /// Bitwise equality, so `-0.0` and `0.0` are distinct snapshots.
    #[must_use]
    pub fn bit_eq(self, other: Range) -> bool {
        self.lower.to_bits() == other.lower.to_bits()
            && self.upper.to_bits() == other.upper.to_bits()
    }
}

/// Data extent of one or more traces: `lower <= upper`, possibly degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataExtent {
    pub lower: f64,
    pub upper: f64,
}

impl DataExtent {
    pub fn new(lower: f64, upper: f64) -> GraphResult<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(GraphError::InvalidData(format!(
                "data extent must be finite with lower <= upper, got [{lower}, {upper}]"
            )));
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn union(self, other: DataExtent) -> DataExtent {
        DataExtent {
            lower: self.lower.min(other.lower),
            upper: self.upper.max(other.upper),
        }
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.lower == self.upper
    }

    /// Centers constant data: `half = |lower| / 2` is removed below and added
    /// above. A zero constant stays degenerate.
    #[must_use]
    pub fn expanded_if_degenerate(self) -> (f64, f64) {
        let (mut low, mut high) = (self.lower, self.upper);
        if low == high {
            let half = (low / 2.0).abs();
            low -= half;
            high += half;
        }
        (low, high)
    }
}

fn is_valid_span(lower: f64, upper: f64) -> bool {
    lower.is_finite() && upper.is_finite() && lower < upper
}

#[cfg(test)]
mod tests {
    use super::{DataExtent, Range};

    #[test]
    fn inverted_and_empty_ranges_are_rejected() {
        assert!(Range::new(1.0, 1.0).is_err());
        assert!(Range::new(2.0, 1.0).is_err());
        assert!(Range::new(f64::NEG_INFINITY, 1.0).is_err());
        assert!(Range::checked(-3.0, -1.0).is_some());
    }

    #[test]
    fn constant_extent_expands_by_half_magnitude() {
        let extent = DataExtent::new(5.0, 5.0).expect("extent");
        assert_eq!(extent.expanded_if_degenerate(), (2.5, 7.5));

        let negative = DataExtent::new(-4.0, -4.0).expect("extent");
        assert_eq!(negative.expanded_if_degenerate(), (-6.0, -2.0));
    }

    #[test]
    fn deserialized_ranges_are_validated() {
        let range: Range =
            serde_json::from_str(r#"{"lower":-2.0,"upper":8.0}"#).expect("valid range");
        assert_eq!(range, Range::new(-2.0, 8.0).expect("range"));

        assert!(serde_json::from_str::<Range>(r#"{"lower":3.0,"upper":3.0}"#).is_err());
        assert!(serde_json::from_str::<Range>(r#"{"lower":5.0,"upper":1.0}"#).is_err());

        let json = serde_json::to_string(&range).expect("serialize");
        assert_eq!(serde_json::from_str::<Range>(&json).expect("round trip"), range);
    }

    #[test]
    fn zero_constant_extent_stays_degenerate() {
        let extent = DataExtent::new(0.0, 0.0).expect("extent");
        assert_eq!(extent.expanded_if_degenerate(), (0.0, 0.0));
    }
}
