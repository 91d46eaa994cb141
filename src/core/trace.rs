use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::AxisId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TraceId(u32);

impl TraceId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 8-bit sRGB color handed to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Cycled for traces added without an explicit color.
pub const DEFAULT_TRACE_COLORS: [Rgb; 12] = [
    Rgb::new(21, 21, 196),   // blue
    Rgb::new(242, 26, 26),   // red
    Rgb::new(33, 179, 33),   // green
    Rgb::new(0, 0, 0),       // black
    Rgb::new(128, 0, 255),   // violet
    Rgb::new(255, 170, 0),   // dark yellow
    Rgb::new(255, 0, 240),   // pink
    Rgb::new(243, 132, 132), // peach
    Rgb::new(0, 255, 11),    // neon green
    Rgb::new(0, 214, 255),   // neon blue
    Rgb::new(114, 40, 3),    // brown
    Rgb::new(219, 128, 4),   // orange
];

#[must_use]
pub fn default_trace_color(existing_trace_count: usize) -> Rgb {
    DEFAULT_TRACE_COLORS[existing_trace_count % DEFAULT_TRACE_COLORS.len()]
}

/// Reference to one data series. Sample storage and rendering live with the
/// host; the surface only tracks axis membership, label and color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    id: TraceId,
    label: String,
    x_axis: AxisId,
    y_axis: AxisId,
    color: Option<Rgb>,
}

impl Trace {
    #[must_use]
    pub fn new(id: TraceId, label: impl Into<String>, x_axis: AxisId, y_axis: AxisId) -> Self {
        Self {
            id,
            label: label.into(),
            x_axis,
            y_axis,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn id(&self) -> TraceId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn x_axis(&self) -> AxisId {
        self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> AxisId {
        self.y_axis
    }

    #[must_use]
    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    pub(crate) fn rebind_axes(&mut self, x_axis: AxisId, y_axis: AxisId) {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
    }

    pub(crate) fn set_color(&mut self, color: Rgb) {
        self.color = Some(color);
    }

    #[must_use]
    pub fn belongs_to(&self, axis: AxisId) -> bool {
        self.x_axis == axis || self.y_axis == axis
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_TRACE_COLORS, default_trace_color};

    #[test]
    fn default_colors_wrap_around() {
        assert_eq!(default_trace_color(0), DEFAULT_TRACE_COLORS[0]);
        assert_eq!(default_trace_color(12), DEFAULT_TRACE_COLORS[0]);
        assert_eq!(default_trace_color(13), DEFAULT_TRACE_COLORS[1]);
    }
}
