use indexmap::IndexMap;

use crate::core::{Axis, AxisId, Orientation};
use crate::error::{GraphError, GraphResult};

/// Insertion-ordered axis registry.
///
/// Registration order is the single source of truth for layout stacking and
/// for stagger indexing; removal keeps the relative order of the survivors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisCollection {
    axes: IndexMap<AxisId, Axis>,
}

impl AxisCollection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: AxisId) -> bool {
        self.axes.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: AxisId) -> Option<&Axis> {
        self.axes.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: AxisId) -> Option<&mut Axis> {
        self.axes.get_mut(&id)
    }

    pub fn insert(&mut self, axis: Axis) -> GraphResult<AxisId> {
        let id = axis.id();
        if self.axes.contains_key(&id) {
            return Err(GraphError::AxisAlreadyRegistered(id));
        }
        self.axes.insert(id, axis);
        Ok(id)
    }

    pub fn remove(&mut self, id: AxisId) -> GraphResult<Axis> {
        self.axes
            .shift_remove(&id)
            .ok_or(GraphError::AxisNotRegistered(id))
    }

    /// All axes in registration order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Axis> {
        self.axes.values()
    }

    /// Axes of one orientation in registration order.
    pub fn of_orientation(
        &self,
        orientation: Orientation,
    ) -> impl DoubleEndedIterator<Item = &Axis> {
        self.axes
            .values()
            .filter(move |axis| axis.orientation() == orientation)
    }

    #[must_use]
    pub fn ids_of(&self, orientation: Orientation) -> Vec<AxisId> {
        self.of_orientation(orientation).map(Axis::id).collect()
    }

    /// Horizontal axes followed by vertical axes.
    #[must_use]
    pub fn ids_grouped(&self) -> Vec<AxisId> {
        let mut ids = self.ids_of(Orientation::Horizontal);
        ids.extend(self.ids_of(Orientation::Vertical));
        ids
    }

    /// First-registered axis of the given orientation.
    #[must_use]
    pub fn primary(&self, orientation: Orientation) -> Option<&Axis> {
        self.of_orientation(orientation).next()
    }
}

#[cfg(test)]
mod tests {
    use super::AxisCollection;
    use crate::core::{Axis, AxisId, Orientation};
    use crate::error::GraphError;

    #[test]
    fn duplicate_registration_is_reported() {
        let mut axes = AxisCollection::default();
        axes.insert(Axis::vertical(AxisId::new(3), "Y"))
            .expect("first insert");
        let err = axes
            .insert(Axis::horizontal(AxisId::new(3), "X"))
            .expect_err("duplicate id");
        assert_eq!(err, GraphError::AxisAlreadyRegistered(AxisId::new(3)));
    }

    #[test]
    fn removal_preserves_registration_order() {
        let mut axes = AxisCollection::default();
        for raw in 0..4 {
            axes.insert(Axis::vertical(AxisId::new(raw), format!("Y{raw}")))
                .expect("insert");
        }
        axes.remove(AxisId::new(1)).expect("remove");
        assert_eq!(
            axes.ids_of(Orientation::Vertical),
            vec![AxisId::new(0), AxisId::new(2), AxisId::new(3)]
        );
        assert!(matches!(
            axes.remove(AxisId::new(1)),
            Err(GraphError::AxisNotRegistered(_))
        ));
    }

    #[test]
    fn primary_is_first_registered_per_orientation() {
        let mut axes = AxisCollection::default();
        axes.insert(Axis::vertical(AxisId::new(0), "Y")).expect("y");
        axes.insert(Axis::horizontal(AxisId::new(1), "X")).expect("x");
        axes.insert(Axis::horizontal(AxisId::new(2), "X2")).expect("x2");
        assert_eq!(
            axes.primary(Orientation::Horizontal).map(Axis::id),
            Some(AxisId::new(1))
        );
        assert_eq!(
            axes.ids_grouped(),
            vec![AxisId::new(1), AxisId::new(2), AxisId::new(0)]
        );
    }
}
