//! Fixed (non-learning) controllers over the discrete action set.

use crate::actions::{Action, ActionSpace};
use crate::error::EnvError;

/// Id of the full-left push in the discrete registry.
pub const PUSH_LEFT: usize = 0;
/// Id of the zero-force action.
pub const NO_PUSH: usize = 1;
/// Id of the full-right push.
pub const PUSH_RIGHT: usize = 2;

pub trait Policy {
    /// Choose an action from `space` given the current observation.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::UnknownAction`] when the chosen id is not registered.
    fn act(&mut self, observation: &[f32], space: &ActionSpace) -> Result<Action, EnvError>;
}

/// Always picks the same discrete action.
#[derive(Copy, Clone, Debug)]
pub struct ConstantPolicy {
    pub action_id: usize,
}

impl Policy for ConstantPolicy {
    fn act(&mut self, _observation: &[f32], space: &ActionSpace) -> Result<Action, EnvError> {
        space.discrete_action(self.action_id).cloned()
    }
}

/// Pushes toward the side the first observed pole leans to, with a damping
/// term on its angular velocity.
#[derive(Copy, Clone, Debug)]
pub struct BangBangPolicy {
    pub damping: f32,
}

impl Default for BangBangPolicy {
    fn default() -> Self {
        Self { damping: 0.1 }
    }
}

impl Policy for BangBangPolicy {
    fn act(&mut self, observation: &[f32], space: &ActionSpace) -> Result<Action, EnvError> {
        let theta = observation.get(2).copied().unwrap_or(0.0);
        let theta_dot = observation.get(3).copied().unwrap_or(0.0);
        let id = if theta + self.damping * theta_dot > 0.0 {
            PUSH_RIGHT
        } else {
            PUSH_LEFT
        };
        space.discrete_action(id).cloned()
    }
}

/// Uniform choice over the discrete registry.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(rng: fastrand::Rng) -> Self {
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _observation: &[f32], space: &ActionSpace) -> Result<Action, EnvError> {
        let n = space.discrete().len();
        if n == 0 {
            return Err(EnvError::UnknownAction(0));
        }
        space.discrete_action(self.rng.usize(..n)).cloned()
    }
}
