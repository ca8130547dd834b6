//! Action objects and the discrete/continuous action registries.

use crate::error::EnvError;

/// A control input. Values are read by index; the pole balancing environment
/// reads the applied force from index 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    id: usize,
    values: Vec<f32>,
}

impl Action {
    #[must_use]
    pub fn new(id: usize, values: Vec<f32>) -> Self {
        Self { id, values }
    }

    /// Single-valued action.
    #[must_use]
    pub fn scalar(id: usize, value: f32) -> Self {
        Self::new(id, vec![value])
    }

    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn at(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered registry of actions; ids are positions in registration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionList {
    actions: Vec<Action>,
}

impl ActionList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single-valued action and return its id.
    pub fn push(&mut self, value: f32) -> usize {
        let id = self.actions.len();
        self.actions.push(Action::scalar(id, value));
        id
    }

    /// Replace the value of an already registered single-valued action.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::UnknownAction`] if `id` was never registered.
    pub fn set(&mut self, id: usize, value: f32) -> Result<(), EnvError> {
        let action = self
            .actions
            .get_mut(id)
            .ok_or(EnvError::UnknownAction(id))?;
        action.values = vec![value];
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Action> {
        self.actions.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}

/// The two parallel control interfaces offered to a controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionSpace {
    discrete: ActionList,
    continuous: ActionList,
}

impl ActionSpace {
    #[must_use]
    pub fn new(discrete: ActionList, continuous: ActionList) -> Self {
        Self {
            discrete,
            continuous,
        }
    }

    #[must_use]
    pub fn discrete(&self) -> &ActionList {
        &self.discrete
    }

    #[must_use]
    pub fn continuous(&self) -> &ActionList {
        &self.continuous
    }

    /// The continuous registry is left open for the harness to reshape.
    pub fn continuous_mut(&mut self) -> &mut ActionList {
        &mut self.continuous
    }

    /// Look up a discrete action.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::UnknownAction`] if `id` is not registered.
    pub fn discrete_action(&self, id: usize) -> Result<&Action, EnvError> {
        self.discrete.get(id).ok_or(EnvError::UnknownAction(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_sequential_ids() {
        let mut list = ActionList::new();
        assert_eq!(list.push(-10.0), 0);
        assert_eq!(list.push(0.0), 1);
        assert_eq!(list.push(10.0), 2);
        assert_eq!(list.get(2).and_then(|a| a.at(0)), Some(10.0));
        assert!(list.get(3).is_none());
    }

    #[test]
    fn set_overrides_registered_value_only() {
        let mut list = ActionList::new();
        list.push(0.0);
        list.set(0, 3.5).unwrap();
        assert_eq!(list.get(0).unwrap().values(), &[3.5]);
        assert_eq!(list.set(4, 1.0), Err(EnvError::UnknownAction(4)));
    }

    #[test]
    fn action_reads_by_index() {
        let a = Action::new(0, vec![1.0, 2.0]);
        assert_eq!(a.at(1), Some(2.0));
        assert_eq!(a.at(2), None);
        assert!(Action::new(0, Vec::new()).is_empty());
    }
}
