use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisId, Rect, TraceId};

/// One label entry inside a legend block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub trace: TraceId,
    pub label: String,
}

/// Labeled-swatch group for all traces sharing one vertical axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendBlock {
    axis: AxisId,
    entries: Vec<LegendEntry>,
    visible: bool,
    bounds: Rect,
}

impl LegendBlock {
    #[must_use]
    pub fn new(axis: AxisId, visible: bool) -> Self {
        Self {
            axis,
            entries: Vec::new(),
            visible,
            bounds: Rect::default(),
        }
    }

    #[must_use]
    pub fn axis(&self) -> AxisId {
        self.axis
    }

    #[must_use]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn push(&mut self, trace: TraceId, label: &str) {
        if self.entries.iter().any(|entry| entry.trace == trace) {
            return;
        }
        self.entries.push(LegendEntry {
            trace,
            label: label.to_owned(),
        });
    }

    fn remove(&mut self, trace: TraceId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.trace != trace);
        self.entries.len() != before
    }
}

/// Legend blocks keyed by their vertical axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendCollection {
    blocks: IndexMap<AxisId, LegendBlock>,
}

impl LegendCollection {
    #[must_use]
    pub fn get(&self, axis: AxisId) -> Option<&LegendBlock> {
        self.blocks.get(&axis)
    }

    pub(crate) fn get_mut(&mut self, axis: AxisId) -> Option<&mut LegendBlock> {
        self.blocks.get_mut(&axis)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LegendBlock> {
        self.blocks.values()
    }

    /// Adds `trace` to the block of `axis`, creating the block on first use.
    /// Returns `true` when a new block was created.
    pub(crate) fn attach(&mut self, axis: AxisId, trace: TraceId, label: &str, visible: bool) -> bool {
        let created = !self.blocks.contains_key(&axis);
        self.blocks
            .entry(axis)
            .or_insert_with(|| LegendBlock::new(axis, visible))
            .push(trace, label);
        created
    }

    /// Removes `trace` from the block of `axis`, dropping the block once
    /// empty. Returns `true` when the block was dropped.
    pub(crate) fn detach(&mut self, axis: AxisId, trace: TraceId) -> bool {
        let Some(block) = self.blocks.get_mut(&axis) else {
            return false;
        };
        block.remove(trace);
        if block.is_empty() {
            self.blocks.shift_remove(&axis);
            return true;
        }
        false
    }

    pub(crate) fn remove_block(&mut self, axis: AxisId) -> Option<LegendBlock> {
        self.blocks.shift_remove(&axis)
    }

    pub(crate) fn set_all_visible(&mut self, visible: bool) {
        for block in self.blocks.values_mut() {
            block.set_visible(visible);
        }
    }
}
