use crate::history::CommandHistory;
use crate::host::SurfaceHost;

use super::ChartSurface;

impl<H: SurfaceHost> ChartSurface<H> {
    /// Restores the ranges from before the latest command.
    pub fn undo(&mut self) -> bool {
        let changed = self.core.history.undo(&mut self.core.model.axes);
        if changed {
            self.invalidate_layout();
        }
        changed
    }

    /// Re-applies the most recently undone command.
    pub fn redo(&mut self) -> bool {
        let changed = self.core.history.redo(&mut self.core.model.axes);
        if changed {
            self.invalidate_layout();
        }
        changed
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.core.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.core.history.can_redo()
    }

    #[must_use]
    pub fn undo_label(&self) -> Option<&str> {
        self.core.history.undo_label()
    }

    #[must_use]
    pub fn redo_label(&self) -> Option<&str> {
        self.core.history.redo_label()
    }

    #[must_use]
    pub fn history(&self) -> &CommandHistory {
        &self.core.history
    }

    pub fn clear_history(&mut self) {
        self.core.history.clear();
    }
}
