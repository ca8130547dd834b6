//! Episode lifecycle: initial state selection, stepping, and termination.

use physics::{integrator, Bounds, PhysicsError, PhysicsState, PoleBalancingParams, Range};
use tracing::debug;

/// Half width of the cart position draw for random starts (m).
pub const INIT_X_HALF_WIDTH: f32 = 0.2;
/// Half width of the pole angle draw for random starts (rad).
pub const INIT_THETA_HALF_WIDTH: f32 = 0.2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EpisodePhase {
    Running,
    Terminated,
}

#[derive(Clone, Debug)]
pub struct EpisodeController {
    random_init: bool,
    x_init: Range,
    theta_init: Range,
    phase: EpisodePhase,
    steps: u64,
    episodes: u64,
}

impl EpisodeController {
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidRange`] if the random-start ranges do not
    /// fit strictly inside the termination bounds.
    pub fn new(random_init: bool, bounds: &Bounds) -> Result<Self, PhysicsError> {
        let x_init = Range::symmetric(INIT_X_HALF_WIDTH)?;
        let theta_init = Range::symmetric(INIT_THETA_HALF_WIDTH)?;
        for (draw, limit) in [(x_init, bounds.track), (theta_init, bounds.pole_angle)] {
            if !limit.strictly_contains(&draw) {
                return Err(PhysicsError::InvalidRange {
                    min: draw.min(),
                    max: draw.max(),
                });
            }
        }
        Ok(Self {
            random_init,
            x_init,
            theta_init,
            phase: EpisodePhase::Running,
            steps: 0,
            episodes: 0,
        })
    }

    #[must_use]
    pub fn random_init(&self) -> bool {
        self.random_init
    }

    #[must_use]
    pub fn x_init(&self) -> Range {
        self.x_init
    }

    #[must_use]
    pub fn theta_init(&self) -> Range {
        self.theta_init
    }

    #[must_use]
    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    /// Steps taken in the current episode.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Episodes started since construction.
    #[must_use]
    pub fn episodes(&self) -> u64 {
        self.episodes
    }

    /// `true` when the cart left the track or any pole left its angle range.
    #[must_use]
    pub fn is_terminal(state: &PhysicsState, bounds: &Bounds) -> bool {
        !bounds.within(state)
    }

    /// Reset `state` for a new episode and enter [`EpisodePhase::Running`].
    pub fn initialize(&mut self, state: &mut PhysicsState, rng: &mut fastrand::Rng) {
        if self.random_init {
            state.cart.x = self.x_init.sample(rng);
            for pole in &mut state.poles {
                pole.theta = self.theta_init.sample(rng);
            }
        } else {
            state.cart.x = 0.0;
            for pole in &mut state.poles {
                pole.theta = 0.0;
            }
        }
        state.zero_velocities();
        integrator::normalize_angles(state);

        self.phase = EpisodePhase::Running;
        self.steps = 0;
        self.episodes += 1;
        debug!(
            episode = self.episodes,
            x = state.cart.x,
            random = self.random_init,
            "episode initialized"
        );
    }

    /// Integrate one step under `force` and update the phase.
    ///
    /// A terminated episode is left untouched and `false` is returned.
    pub fn advance(
        &mut self,
        state: &mut PhysicsState,
        params: &PoleBalancingParams,
        force: f32,
    ) -> bool {
        if self.phase == EpisodePhase::Terminated {
            return false;
        }
        integrator::step(state, &params.constants, force);
        self.steps += 1;
        if Self::is_terminal(state, &params.bounds) {
            self.phase = EpisodePhase::Terminated;
            debug!(
                episode = self.episodes,
                steps = self.steps,
                x = state.cart.x,
                "episode terminated"
            );
        }
        true
    }
}
