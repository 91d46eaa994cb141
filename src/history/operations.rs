use std::collections::VecDeque;

use tracing::debug;

use crate::core::AxisCollection;
use crate::error::{GraphError, GraphResult};
use crate::history::RangeCommand;

/// Executed/undone stacks of range commands.
///
/// Executing a new command clears the undone stack, so there is no
/// branching redo. An optional limit drops the oldest executed command.
#[derive(Debug, Default)]
pub struct CommandHistory {
    executed: VecDeque<Box<dyn RangeCommand>>,
    undone: Vec<Box<dyn RangeCommand>>,
    limit: Option<usize>,
}

impl CommandHistory {
    pub fn with_limit(limit: Option<usize>) -> GraphResult<Self> {
        let mut history = Self::default();
        history.set_limit(limit)?;
        Ok(history)
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<usize>) -> GraphResult<()> {
        if limit == Some(0) {
            return Err(GraphError::InvalidData(
                "history limit must be > 0 when set".to_owned(),
            ));
        }
        self.limit = limit;
        self.enforce_limit();
        Ok(())
    }

    /// Applies `command`'s effect, then pushes it onto the executed stack.
    pub fn execute(&mut self, command: Box<dyn RangeCommand>, axes: &mut AxisCollection) {
        command.redo(axes);
        debug!(
            command = command.label(),
            executed = self.executed.len() + 1,
            discarded_redo = self.undone.len(),
            "history execute"
        );
        self.executed.push_back(command);
        self.undone.clear();
        self.enforce_limit();
    }

    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self, axes: &mut AxisCollection) -> bool {
        let Some(command) = self.executed.pop_back() else {
            return false;
        };
        command.undo(axes);
        debug!(command = command.label(), "history undo");
        self.undone.push(command);
        true
    }

    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self, axes: &mut AxisCollection) -> bool {
        let Some(command) = self.undone.pop() else {
            return false;
        };
        command.redo(axes);
        debug!(command = command.label(), "history redo");
        self.executed.push_back(command);
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.executed.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    #[must_use]
    pub fn undo_label(&self) -> Option<&str> {
        self.executed.back().map(|command| command.label())
    }

    #[must_use]
    pub fn redo_label(&self) -> Option<&str> {
        self.undone.last().map(|command| command.label())
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.executed.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.undone.len()
    }

    pub fn clear(&mut self) {
        self.executed.clear();
        self.undone.clear();
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        while self.executed.len() > limit {
            self.executed.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CommandHistory;
    use crate::core::{Axis, AxisCollection, AxisId, Range};
    use crate::history::PendingZoom;

    fn set_range(axes: &mut AxisCollection, history: &mut CommandHistory, upper: f64) {
        let ids = [AxisId::new(0)];
        let pending = PendingZoom::begin("Set Range", axes, &ids);
        let mut scratch = axes.clone();
        scratch
            .get_mut(AxisId::new(0))
            .expect("axis")
            .set_range(Range::new(0.0, upper).expect("range"))
            .expect("set");
        history.execute(Box::new(pending.finish(&scratch)), axes);
    }

    fn upper(axes: &AxisCollection) -> f64 {
        axes.get(AxisId::new(0)).expect("axis").range().upper()
    }

    #[test]
    fn execute_applies_effect_and_undo_redo_swap_it() {
        let mut axes = AxisCollection::default();
        axes.insert(Axis::vertical(AxisId::new(0), "Y")).expect("y");
        let mut history = CommandHistory::default();

        set_range(&mut axes, &mut history, 5.0);
        assert_eq!(upper(&axes), 5.0);
        assert!(history.undo(&mut axes));
        assert_eq!(upper(&axes), 100.0);
        assert!(history.redo(&mut axes));
        assert_eq!(upper(&axes), 5.0);
        assert!(!history.redo(&mut axes));
    }

    #[test]
    fn empty_history_is_a_noop() {
        let mut axes = AxisCollection::default();
        let mut history = CommandHistory::default();
        assert!(!history.undo(&mut axes));
        assert!(!history.redo(&mut axes));
        assert_eq!(history.undo_label(), None);
    }

    #[test]
    fn limit_drops_oldest_command() {
        let mut axes = AxisCollection::default();
        axes.insert(Axis::vertical(AxisId::new(0), "Y")).expect("y");
        let mut history = CommandHistory::with_limit(Some(2)).expect("limit");
        for upper in [1.0, 2.0, 3.0] {
            set_range(&mut axes, &mut history, upper);
        }
        assert_eq!(history.undo_depth(), 2);
        while history.undo(&mut axes) {}
        assert_eq!(upper(&axes), 1.0);
        assert!(CommandHistory::with_limit(Some(0)).is_err());
    }
}
