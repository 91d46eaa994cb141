use indexmap::IndexMap;

use crate::core::{Axis, LegendBlock, Orientation, Rect, Size};
use crate::host::{LayoutEntity, LayoutMeasure, SurfaceHost};

/// Fixed text and tick metrics used by [`NullHost`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullHostMetrics {
    pub title_font_px: f64,
    pub legend_font_px: f64,
    pub legend_swatch_px: f64,
    pub legend_padding_px: f64,
    pub axis_thickness_px: f64,
}

impl Default for NullHostMetrics {
    fn default() -> Self {
        Self {
            title_font_px: 12.0,
            legend_font_px: 10.0,
            legend_swatch_px: 16.0,
            legend_padding_px: 4.0,
            axis_thickness_px: 30.0,
        }
    }
}

/// Headless host used by tests and offscreen layout.
///
/// Text is measured with a deterministic per-glyph estimate so layouts are
/// reproducible across platforms. Every bounds notification is recorded.
#[derive(Debug, Default)]
pub struct NullHost {
    pub metrics: NullHostMetrics,
    pub notified: IndexMap<LayoutEntity, Rect>,
    pub notification_count: usize,
}

impl NullHost {
    #[must_use]
    pub fn with_metrics(metrics: NullHostMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn last_bounds(&self, entity: LayoutEntity) -> Option<Rect> {
        self.notified.get(&entity).copied()
    }
}

impl LayoutMeasure for NullHost {
    fn title_size(&self, title: &str, _available: Size) -> Size {
        let font = self.metrics.title_font_px;
        Size::new(estimate_text_width_px(title, font), font * 1.5)
    }

    fn legend_size(&self, block: &LegendBlock, available: Size) -> Size {
        let metrics = self.metrics;
        let line_height = metrics.legend_font_px * 1.5;
        let padding = metrics.legend_padding_px;
        let mut widest_line: f64 = 0.0;
        let mut line_width: f64 = 0.0;
        let mut lines = 0usize;

        // Entries wrap onto a new line when the offered width is exhausted.
        for entry in block.entries() {
            let entry_width = metrics.legend_swatch_px
                + padding
                + estimate_text_width_px(&entry.label, metrics.legend_font_px)
                + padding;
            if lines == 0 || line_width + entry_width > available.width - 2.0 * padding {
                widest_line = widest_line.max(line_width);
                line_width = entry_width;
                lines += 1;
            } else {
                line_width += entry_width;
            }
        }
        widest_line = widest_line.max(line_width);

        Size::new(
            widest_line + 2.0 * padding,
            lines as f64 * line_height + 2.0 * padding,
        )
    }

    fn axis_size(&self, axis: &Axis, available: Size) -> Size {
        let thickness = if axis.is_visible() {
            self.metrics.axis_thickness_px
        } else {
            0.0
        };
        match axis.orientation() {
            Orientation::Horizontal => Size::new(available.width, thickness),
            Orientation::Vertical => Size::new(thickness, available.height),
        }
    }
}

impl SurfaceHost for NullHost {
    fn bounds_changed(&mut self, entity: LayoutEntity, rect: Rect) {
        self.notified.insert(entity, rect);
        self.notification_count += 1;
    }
}

fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    units * font_size_px
}
