use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Rect, Size};

/// One packed legend row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendRow {
    /// Left edge of the first block, centered in the packing area.
    pub start_x: f64,
    /// Index of the first block of this row in packing order.
    pub first: usize,
    pub count: usize,
    /// Sum of `block width + gap` over the row.
    pub used_width: f64,
    /// Tallest block in the row.
    pub height: f64,
}

/// Greedy row packing result for all legend blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendRows {
    pub rows: SmallVec<[LegendRow; 4]>,
}

impl LegendRows {
    /// Height consumed from the working area: every row plus one gap each.
    #[must_use]
    pub fn total_height(&self, gap: f64) -> f64 {
        self.rows.iter().map(|row| row.height + gap).sum()
    }

    /// Places blocks left-to-right from each row start, rows stacked downward
    /// from `top`. Output order matches `sizes`.
    #[must_use]
    pub fn place(&self, sizes: &[Size], top: f64, gap: f64) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(sizes.len());
        let mut row_top = top;
        for row in &self.rows {
            let mut cursor = row.start_x;
            for size in &sizes[row.first..row.first + row.count] {
                rects.push(Rect::from_origin_size(cursor, row_top, *size));
                cursor += size.width + gap;
            }
            row_top += row.height + gap;
        }
        rects
    }
}

/// Packs legend blocks into rows no wider than `area_width`.
///
/// The first block of a row is always accepted, so a block wider than the
/// whole area occupies a row on its own.
#[must_use]
pub fn pack_legend_rows(sizes: &[Size], area_x: f64, area_width: f64, gap: f64) -> LegendRows {
    let mut packed = LegendRows::default();
    let mut first = 0usize;
    let mut count = 0usize;
    let mut cursor = 0.0;
    let mut row_height: f64 = 0.0;

    let close_row = |packed: &mut LegendRows, first: usize, count: usize, used_width: f64, height: f64| {
        packed.rows.push(LegendRow {
            start_x: area_x + (area_width - used_width) / 2.0,
            first,
            count,
            used_width,
            height,
        });
    };

    for (index, size) in sizes.iter().enumerate() {
        let advance = size.width + gap;
        if count > 0 && cursor + advance > area_width {
            close_row(&mut packed, first, count, cursor, row_height);
            first = index;
            count = 0;
            cursor = 0.0;
            row_height = 0.0;
        }
        cursor += advance;
        count += 1;
        row_height = row_height.max(size.height);
    }
    if count > 0 {
        close_row(&mut packed, first, count, cursor, row_height);
    }
    packed
}
