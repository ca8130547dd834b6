use serde::Serialize;

use crate::actions::{Action, ActionSpace};
use crate::error::EnvError;

/// What the environment emits after `initialize` and after every `step`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimeStep {
    pub observation: Vec<f32>,
    pub reward: f32,
    /// Secondary signal.
    pub z: f32,
    pub terminal: bool,
}

/// Reinforcement learning environment trait.
///
/// Modelled on the classic episodic harness: [`initialize`] starts an episode,
/// each [`step`] applies one action, and the environment reports an
/// observation, a reward, a secondary signal, and whether the episode ended.
///
/// [`initialize`]: Env::initialize
/// [`step`]: Env::step
pub trait Env {
    /// Start a new episode and return its first time step.
    fn initialize(&mut self) -> TimeStep;

    /// Apply `action` and return the resulting time step.
    ///
    /// # Errors
    ///
    /// Fails when the action cannot be interpreted by this environment.
    fn step(&mut self, action: &Action) -> Result<TimeStep, EnvError>;

    fn end_of_episode(&self) -> bool;

    fn reward(&self) -> f32;

    /// Secondary signal emitted alongside the reward.
    fn z(&self) -> f32;

    /// Current observation as seen by a controller.
    fn observations(&self) -> &[f32];

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    fn action_space(&self) -> &ActionSpace;

    /// Full internal state, flattened. Used for recording; a controller must
    /// only look at [`Env::observations`].
    fn snapshot(&self) -> Vec<f32>;
}
