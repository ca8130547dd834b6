//! Projection of the full physics state onto what a controller may observe.
//!
//! The observation has `2 + 2 * nb_poles` slots: the cart position (clamped to
//! the track for reporting), the cart velocity, then pole angles and angular
//! velocities. Poles are visited with a stride of two starting at index 0, and
//! pole `i` lands in slots `i + 2` and `i + 3`. With two poles only the first
//! one is ever reported and the trailing slots stay at zero, which makes the
//! task non-Markov.

use physics::{PhysicsState, Range};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObservationProjector {
    nb_poles: usize,
    track: Range,
}

impl ObservationProjector {
    #[must_use]
    pub fn new(nb_poles: usize, track: Range) -> Self {
        Self { nb_poles, track }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        2 + 2 * self.nb_poles
    }

    /// Write the observation for `state` into `out`.
    ///
    /// Slots that no pole is projected into are left untouched.
    pub fn project(&self, state: &PhysicsState, out: &mut [f32]) {
        debug_assert_eq!(out.len(), self.size());
        debug_assert_eq!(state.nb_poles(), self.nb_poles);

        out[0] = self.track.bound(state.cart.x);
        out[1] = state.cart.x_dot;
        for i in (0..self.nb_poles).step_by(2) {
            out[i + 2] = state.poles[i].theta;
            out[i + 3] = state.poles[i].theta_dot;
        }
    }

    #[must_use]
    pub fn observe(&self, state: &PhysicsState) -> Vec<f32> {
        let mut out = vec![0.0; self.size()];
        self.project(state, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physics::PoleBalancingParams;

    #[test]
    fn cart_position_is_reported_clamped() {
        let params = PoleBalancingParams::for_poles(1).unwrap();
        let projector = ObservationProjector::new(1, params.bounds.track);
        let mut state = params.initial_state();
        state.cart.x = 3.1;
        state.cart.x_dot = -0.4;
        state.poles[0].theta = 0.1;
        state.poles[0].theta_dot = 0.2;
        assert_eq!(projector.observe(&state), vec![2.4, -0.4, 0.1, 0.2]);
    }

    #[test]
    fn second_pole_is_hidden() {
        let params = PoleBalancingParams::for_poles(2).unwrap();
        let projector = ObservationProjector::new(2, params.bounds.track);
        let mut state = params.initial_state();
        state.poles[0].theta = 0.05;
        state.poles[0].theta_dot = 0.5;
        state.poles[1].theta = -0.1;
        state.poles[1].theta_dot = 1.5;
        assert_eq!(projector.size(), 6);
        assert_eq!(projector.observe(&state), vec![0.0, 0.0, 0.05, 0.5, 0.0, 0.0]);
    }
}
