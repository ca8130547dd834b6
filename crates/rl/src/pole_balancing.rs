//! Non-Markov pole balancing.
//!
//! Gomez & Miikkulainen, "Incremental Evolution of Complex General Behavior"
//! (1996). A cart on a 4.8 m track carries one or two poles; the controller
//! pushes the cart with up to 10 N and sees only a partial observation of the
//! state (see [`crate::observation`]).

use physics::{Bounds, PhysicsConstants, PhysicsState, PoleBalancingParams};
use tracing::{trace, warn};

use crate::actions::{Action, ActionList, ActionSpace};
use crate::config::PoleBalancingConfig;
use crate::env::{Env, TimeStep};
use crate::episode::{EpisodeController, EpisodePhase};
use crate::error::EnvError;
use crate::observation::ObservationProjector;
use crate::reward::{CosineReward, Signal, ZeroSignal};

pub struct NonMarkovPoleBalancing {
    params: PoleBalancingParams,
    state: PhysicsState,
    controller: EpisodeController,
    projector: ObservationProjector,
    secondary: Box<dyn Signal>,
    actions: ActionSpace,
    observations: Vec<f32>,
    rng: fastrand::Rng,
}

impl NonMarkovPoleBalancing {
    /// Creates an environment seeded from entropy.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Physics`] when `nb_poles` is not 1 or 2.
    pub fn new(nb_poles: usize, random_init: bool) -> Result<Self, EnvError> {
        Self::with_rng(nb_poles, random_init, fastrand::Rng::new())
    }

    /// # Errors
    ///
    /// Returns [`EnvError::Physics`] when the configured pole count is not 1 or 2.
    pub fn from_config(config: &PoleBalancingConfig) -> Result<Self, EnvError> {
        let rng = config
            .seed
            .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        Self::with_rng(config.nb_poles, config.random_init, rng)
    }

    /// Creates an environment drawing random starts from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Physics`] when `nb_poles` is not 1 or 2.
    pub fn with_rng(
        nb_poles: usize,
        random_init: bool,
        rng: fastrand::Rng,
    ) -> Result<Self, EnvError> {
        let params = PoleBalancingParams::for_poles(nb_poles)?;
        let controller = EpisodeController::new(random_init, &params.bounds)?;
        let projector = ObservationProjector::new(nb_poles, params.bounds.track);

        let mut discrete = ActionList::new();
        discrete.push(params.bounds.action.min());
        discrete.push(0.0);
        discrete.push(params.bounds.action.max());
        let mut continuous = ActionList::new();
        continuous.push(0.0);

        Ok(Self {
            state: params.initial_state(),
            observations: vec![0.0; projector.size()],
            params,
            controller,
            projector,
            secondary: Box::new(ZeroSignal),
            actions: ActionSpace::new(discrete, continuous),
            rng,
        })
    }

    /// Replace the always-zero secondary signal.
    #[must_use]
    pub fn with_secondary_signal(mut self, signal: Box<dyn Signal>) -> Self {
        self.secondary = signal;
        self
    }

    #[must_use]
    pub fn nb_poles(&self) -> usize {
        self.params.nb_poles()
    }

    #[must_use]
    pub fn state(&self) -> &PhysicsState {
        &self.state
    }

    #[must_use]
    pub fn constants(&self) -> &PhysicsConstants {
        &self.params.constants
    }

    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.params.bounds
    }

    #[must_use]
    pub fn phase(&self) -> EpisodePhase {
        self.controller.phase()
    }

    #[must_use]
    pub fn controller(&self) -> &EpisodeController {
        &self.controller
    }

    /// Mutable access for the harness, e.g. to override the continuous default.
    pub fn action_space_mut(&mut self) -> &mut ActionSpace {
        &mut self.actions
    }

    fn time_step(&mut self) -> TimeStep {
        self.projector.project(&self.state, &mut self.observations);
        TimeStep {
            observation: self.observations.clone(),
            reward: self.reward(),
            z: self.z(),
            terminal: self.end_of_episode(),
        }
    }
}

impl Env for NonMarkovPoleBalancing {
    fn initialize(&mut self) -> TimeStep {
        self.controller.initialize(&mut self.state, &mut self.rng);
        self.time_step()
    }

    fn step(&mut self, action: &Action) -> Result<TimeStep, EnvError> {
        let requested = action.at(0).ok_or(EnvError::ActionArity {
            expected: 1,
            actual: action.len(),
        })?;
        if requested.is_nan() {
            return Err(EnvError::NonFiniteAction(requested));
        }
        let force = self.params.bounds.action.bound(requested);

        if !self.controller.advance(&mut self.state, &self.params, force) {
            warn!(
                episode = self.controller.episodes(),
                "step on a terminated episode ignored; call initialize first"
            );
        }

        let time_step = self.time_step();
        trace!(
            step = self.controller.steps(),
            force,
            reward = time_step.reward,
            terminal = time_step.terminal,
            "step"
        );
        Ok(time_step)
    }

    fn end_of_episode(&self) -> bool {
        EpisodeController::is_terminal(&self.state, &self.params.bounds)
    }

    fn reward(&self) -> f32 {
        CosineReward.evaluate(&self.state)
    }

    fn z(&self) -> f32 {
        self.secondary.evaluate(&self.state)
    }

    fn observations(&self) -> &[f32] {
        &self.observations
    }

    fn obs_size(&self) -> usize {
        self.projector.size()
    }

    fn action_space(&self) -> &ActionSpace {
        &self.actions
    }

    fn snapshot(&self) -> Vec<f32> {
        self.state.to_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_three_discrete_forces_and_one_continuous_default() {
        let env = NonMarkovPoleBalancing::new(1, false).unwrap();
        let forces: Vec<f32> = env
            .action_space()
            .discrete()
            .iter()
            .filter_map(|a| a.at(0))
            .collect();
        assert_eq!(forces, vec![-10.0, 0.0, 10.0]);
        assert_eq!(env.action_space().continuous().len(), 1);
        assert_eq!(env.action_space().continuous().get(0).unwrap().at(0), Some(0.0));
    }

    #[test]
    fn rejects_unsupported_pole_counts() {
        for n in [0, 3] {
            assert!(matches!(
                NonMarkovPoleBalancing::new(n, false),
                Err(EnvError::Physics(physics::PhysicsError::UnsupportedPoleCount(m))) if m == n
            ));
        }
    }

    #[test]
    fn empty_and_nan_actions_are_rejected() {
        let mut env = NonMarkovPoleBalancing::new(1, false).unwrap();
        env.initialize();
        assert_eq!(
            env.step(&Action::new(0, Vec::new())),
            Err(EnvError::ActionArity { expected: 1, actual: 0 })
        );
        assert!(matches!(
            env.step(&Action::scalar(0, f32::NAN)),
            Err(EnvError::NonFiniteAction(_))
        ));
        assert_eq!(env.controller().steps(), 0);
    }

    #[test]
    fn secondary_signal_is_pluggable() {
        struct CartDistance;
        impl Signal for CartDistance {
            fn evaluate(&self, state: &PhysicsState) -> f32 {
                state.cart.x.abs()
            }
        }
        let mut env = NonMarkovPoleBalancing::new(1, false)
            .unwrap()
            .with_secondary_signal(Box::new(CartDistance));
        assert_eq!(env.initialize().z, 0.0);
        let push = Action::scalar(2, 10.0);
        env.step(&push).unwrap();
        let ts = env.step(&push).unwrap();
        assert!(ts.z > 0.0);
    }
}
