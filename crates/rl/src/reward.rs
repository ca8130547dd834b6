use physics::PhysicsState;

/// A scalar signal computed from the full state after each transition.
pub trait Signal {
    fn evaluate(&self, state: &PhysicsState) -> f32;
}

/// `Σ cos θ_i` over every pole, in `[-nb_poles, nb_poles]` and maximal when all
/// poles are upright.
#[derive(Copy, Clone, Debug, Default)]
pub struct CosineReward;

impl Signal for CosineReward {
    fn evaluate(&self, state: &PhysicsState) -> f32 {
        state.poles.iter().map(|pole| pole.theta.cos()).sum()
    }
}

/// Always zero. Default secondary signal.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZeroSignal;

impl Signal for ZeroSignal {
    fn evaluate(&self, _state: &PhysicsState) -> f32 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use physics::PoleBalancingParams;

    #[test]
    fn upright_poles_earn_one_each() {
        for n in [1, 2] {
            let state = PoleBalancingParams::for_poles(n).unwrap().initial_state();
            assert_eq!(CosineReward.evaluate(&state), n as f32);
        }
    }

    #[test]
    fn hanging_pole_earns_minus_one() {
        let mut state = PoleBalancingParams::for_poles(1).unwrap().initial_state();
        state.poles[0].theta = std::f32::consts::PI;
        assert_relative_eq!(CosineReward.evaluate(&state), -1.0);
        assert_eq!(ZeroSignal.evaluate(&state), 0.0);
    }
}
