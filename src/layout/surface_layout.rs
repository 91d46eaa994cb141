use indexmap::IndexMap;
use tracing::trace;

use crate::core::{
    Axis, AxisCollection, AxisId, AxisSide, LegendCollection, Orientation, Rect, Size,
};
use crate::error::GraphResult;
use crate::host::LayoutMeasure;

use super::{LayoutTuning, LegendRows, pack_legend_rows};

/// Model state consumed by one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    /// `None` or empty skips the title step.
    pub title: Option<&'a str>,
    pub axes: &'a AxisCollection,
    pub legends: &'a LegendCollection,
    pub show_legend: bool,
    pub plot_area_visible: bool,
}

/// Final rectangle and tick-region length of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPlacement {
    pub rect: Rect,
    pub tick_extent: f64,
}

/// Rectangles produced by [`SurfaceLayoutEngine::layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceLayout {
    pub bounds: Rect,
    pub title: Option<Rect>,
    /// Legend block rectangles keyed by their vertical axis, packing order.
    pub legends: Vec<(AxisId, Rect)>,
    pub legend_rows: LegendRows,
    /// Axis placements in registration order.
    pub axes: IndexMap<AxisId, AxisPlacement>,
    pub plot: Option<Rect>,
    /// Residual working rectangle once every band has been carved out.
    pub residual: Rect,
}

impl SurfaceLayout {
    #[must_use]
    pub fn axis_rect(&self, id: AxisId) -> Option<Rect> {
        self.axes.get(&id).map(|placement| placement.rect)
    }

    #[must_use]
    pub fn legend_rect(&self, axis: AxisId) -> Option<Rect> {
        self.legends
            .iter()
            .find(|(owner, _)| *owner == axis)
            .map(|(_, rect)| *rect)
    }
}

/// Which edges ended up occupied by a visible axis.
#[derive(Debug, Clone, Copy, Default)]
struct EdgePresence {
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
}

/// Partitions the surface among title, legend rows, stacked axes and the
/// plot area.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceLayoutEngine {
    tuning: LayoutTuning,
}

impl SurfaceLayoutEngine {
    #[must_use]
    pub fn new(tuning: LayoutTuning) -> Self {
        Self { tuning }
    }

    #[must_use]
    pub fn tuning(&self) -> LayoutTuning {
        self.tuning
    }

    pub fn layout<M: LayoutMeasure + ?Sized>(
        &self,
        bounds: Rect,
        input: LayoutInput<'_>,
        measure: &M,
    ) -> GraphResult<SurfaceLayout> {
        let bounds = bounds.validate_bounds()?;
        let mut area = bounds;
        let mut edges = EdgePresence::default();
        let mut axes = IndexMap::with_capacity(input.axes.len());
        for axis in input.axes.iter() {
            axes.insert(
                axis.id(),
                AxisPlacement {
                    rect: Rect::default(),
                    tick_extent: 0.0,
                },
            );
        }

        let title = self.layout_title(&mut area, input.title, measure);
        let (legends, legend_rows) = if input.show_legend {
            self.layout_legends(&mut area, input, measure)
        } else {
            (Vec::new(), LegendRows::default())
        };

        self.layout_horizontal_axes(&mut area, input.axes, measure, &mut edges, &mut axes);
        self.layout_vertical_axes(
            &mut area,
            bounds,
            input.axes,
            measure,
            &mut edges,
            &mut axes,
        );
        self.reconcile_horizontal_axes(area, input.axes, edges, &mut axes);

        let plot = input
            .plot_area_visible
            .then(|| plot_rect(area, bounds, input.axes, &axes));

        trace!(
            x = area.x,
            y = area.y,
            width = area.width,
            height = area.height,
            legend_rows = legend_rows.rows.len(),
            "surface layout residual area"
        );

        Ok(SurfaceLayout {
            bounds,
            title,
            legends,
            legend_rows,
            axes,
            plot,
            residual: area,
        })
    }

    fn layout_title<M: LayoutMeasure + ?Sized>(
        &self,
        area: &mut Rect,
        title: Option<&str>,
        measure: &M,
    ) -> Option<Rect> {
        let title = title.filter(|text| !text.is_empty())?;
        let size = measure.title_size(title, area.size());
        let rect = Rect::new(
            area.x + area.width / 2.0 - size.width / 2.0,
            area.y,
            size.width,
            size.height,
        );
        take_top(area, size.height + self.tuning.gap_px);
        Some(rect)
    }

    fn layout_legends<M: LayoutMeasure + ?Sized>(
        &self,
        area: &mut Rect,
        input: LayoutInput<'_>,
        measure: &M,
    ) -> (Vec<(AxisId, Rect)>, LegendRows) {
        let gap = self.tuning.gap_px;
        let mut owners = Vec::new();
        let mut sizes = Vec::new();
        for axis in input.axes.of_orientation(Orientation::Vertical) {
            let Some(block) = input.legends.get(axis.id()) else {
                continue;
            };
            if !block.is_visible() || block.is_empty() {
                continue;
            }
            owners.push(axis.id());
            sizes.push(measure.legend_size(block, area.size()));
        }
        if sizes.is_empty() {
            return (Vec::new(), LegendRows::default());
        }

        let rows = pack_legend_rows(&sizes, area.x, area.width, gap);
        take_bottom(area, rows.total_height(gap));
        let rects = rows.place(&sizes, area.bottom() + gap, gap);
        (owners.into_iter().zip(rects).collect(), rows)
    }

    /// Last-registered axis becomes the outermost band.
    fn layout_horizontal_axes<M: LayoutMeasure + ?Sized>(
        &self,
        area: &mut Rect,
        axes: &AxisCollection,
        measure: &M,
        edges: &mut EdgePresence,
        placements: &mut IndexMap<AxisId, AxisPlacement>,
    ) {
        for axis in axes.of_orientation(Orientation::Horizontal).rev() {
            let size = measured(axis, measure, area.size());
            let rect = match axis.side() {
                AxisSide::Primary => {
                    edges.bottom |= axis.is_visible();
                    let height = take_bottom(area, size.height);
                    Rect::new(area.x, area.bottom(), size.width, height)
                }
                AxisSide::Secondary => {
                    edges.top |= axis.is_visible();
                    let top = area.y;
                    let height = take_top(area, size.height);
                    Rect::new(area.x, top, size.width, height)
                }
            };
            set_placement(placements, axis.id(), rect, 0.0);
        }
    }

    fn layout_vertical_axes<M: LayoutMeasure + ?Sized>(
        &self,
        area: &mut Rect,
        bounds: Rect,
        axes: &AxisCollection,
        measure: &M,
        edges: &mut EdgePresence,
        placements: &mut IndexMap<AxisId, AxisPlacement>,
    ) {
        for axis in axes.of_orientation(Orientation::Vertical).rev() {
            let margin = axis.margin();
            let top_margin = if edges.top { margin } else { 0.0 };
            let bottom_margin = if edges.bottom { margin } else { 0.0 };
            let mut hint_height = area.height + top_margin + bottom_margin;
            if hint_height > bounds.height {
                hint_height = area.height;
            }

            let size = measured(axis, measure, Size::new(area.width, hint_height));
            let height = size.height.clamp(0.0, hint_height);
            let y = area.y - top_margin;
            let rect = match axis.side() {
                AxisSide::Primary => {
                    edges.left |= axis.is_visible();
                    let x = area.x;
                    let width = take_left(area, size.width);
                    Rect::new(x, y, width, height)
                }
                AxisSide::Secondary => {
                    edges.right |= axis.is_visible();
                    let width = take_right(area, size.width);
                    Rect::new(area.right(), y, width, height)
                }
            };
            set_placement(placements, axis.id(), rect, tick_extent(axis, rect));
        }
    }

    /// Horizontal widths were measured before vertical axes took their
    /// share; stretch them to the final span plus flanking margins.
    fn reconcile_horizontal_axes(
        &self,
        area: Rect,
        axes: &AxisCollection,
        edges: EdgePresence,
        placements: &mut IndexMap<AxisId, AxisPlacement>,
    ) {
        for axis in axes.of_orientation(Orientation::Horizontal) {
            let Some(placement) = placements.get_mut(&axis.id()) else {
                continue;
            };
            let margin = axis.margin();
            let mut rect = placement.rect;
            let left_extension = if edges.left {
                rect.x = area.x - margin;
                margin
            } else {
                rect.x = area.x;
                -self.tuning.edge_inset_px
            };
            let right_extension = if edges.right { margin } else { 0.0 };
            rect.width = (area.width + left_extension + right_extension).max(0.0);
            *placement = AxisPlacement {
                rect,
                tick_extent: tick_extent(axis, rect),
            };
        }
    }
}

/// The plot rect follows the primary axes' tick regions rather than the
/// residual area; a missing primary axis falls back to the residual span.
fn plot_rect(
    area: Rect,
    bounds: Rect,
    axes: &AxisCollection,
    placements: &IndexMap<AxisId, AxisPlacement>,
) -> Rect {
    let primary = |orientation| {
        axes.primary(orientation)
            .and_then(|axis| placements.get(&axis.id()).map(|p| (axis.margin(), *p)))
    };
    let (x, width) = match primary(Orientation::Horizontal) {
        Some((margin, placement)) => (placement.rect.x + margin, placement.tick_extent),
        None => (area.x, area.width),
    };
    let (y, height) = match primary(Orientation::Vertical) {
        Some((margin, placement)) => (placement.rect.y + margin, placement.tick_extent),
        None => (area.y, area.height),
    };
    clamp_within(Rect::new(x, y, width, height), bounds)
}

fn measured<M: LayoutMeasure + ?Sized>(axis: &Axis, measure: &M, available: Size) -> Size {
    if !axis.is_visible() {
        return match axis.orientation() {
            Orientation::Horizontal => Size::new(available.width, 0.0),
            Orientation::Vertical => Size::new(0.0, available.height),
        };
    }
    let size = measure.axis_size(axis, available);
    Size::new(sanitize(size.width), sanitize(size.height))
}

/// Horizontal tick extents are settled during reconciliation.
fn set_placement(
    placements: &mut IndexMap<AxisId, AxisPlacement>,
    id: AxisId,
    rect: Rect,
    tick_extent: f64,
) {
    if let Some(placement) = placements.get_mut(&id) {
        *placement = AxisPlacement { rect, tick_extent };
    }
}

fn tick_extent(axis: &Axis, rect: Rect) -> f64 {
    let length = match axis.orientation() {
        Orientation::Horizontal => rect.width,
        Orientation::Vertical => rect.height,
    };
    (length - 2.0 * axis.margin()).max(0.0)
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn take_top(area: &mut Rect, amount: f64) -> f64 {
    let amount = sanitize(amount).min(area.height);
    area.y += amount;
    area.height -= amount;
    amount
}

fn take_bottom(area: &mut Rect, amount: f64) -> f64 {
    let amount = sanitize(amount).min(area.height);
    area.height -= amount;
    amount
}

fn take_left(area: &mut Rect, amount: f64) -> f64 {
    let amount = sanitize(amount).min(area.width);
    area.x += amount;
    area.width -= amount;
    amount
}

fn take_right(area: &mut Rect, amount: f64) -> f64 {
    let amount = sanitize(amount).min(area.width);
    area.width -= amount;
    amount
}

fn clamp_within(rect: Rect, bounds: Rect) -> Rect {
    let x = rect.x.clamp(bounds.x, bounds.right());
    let y = rect.y.clamp(bounds.y, bounds.bottom());
    let right = rect.right().clamp(x, bounds.right());
    let bottom = rect.bottom().clamp(y, bounds.bottom());
    Rect::new(x, y, right - x, bottom - y)
}
