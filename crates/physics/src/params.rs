//! Parameter tables for the single- and double-pole configurations.
//!
//! Values follow Gomez & Miikkulainen, "Incremental Evolution of Complex
//! General Behavior" (1996).

use crate::error::PhysicsError;
use crate::range::Range;
use crate::types::{Bounds, PhysicsConstants, PhysicsState, Pole};

pub const TRACK_HALF_WIDTH: f32 = 2.4;
pub const MAX_FORCE: f32 = 10.0;
pub const SINGLE_POLE_ANGLE_LIMIT_DEG: f32 = 12.0;
pub const DOUBLE_POLE_ANGLE_LIMIT_DEG: f32 = 15.0;

/// Everything fixed at construction for a given pole count.
#[derive(Clone, Debug, PartialEq)]
pub struct PoleBalancingParams {
    pub constants: PhysicsConstants,
    pub bounds: Bounds,
    /// Physical properties of each pole, upright and at rest.
    pub poles: Vec<Pole>,
}

impl PoleBalancingParams {
    /// Select the parameter table for `nb_poles`.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnsupportedPoleCount`] for anything other than 1 or 2.
    pub fn for_poles(nb_poles: usize) -> Result<Self, PhysicsError> {
        let (poles, track_friction, angle_limit_deg) = match nb_poles {
            1 => (vec![Pole::new(0.5, 0.1, 0.0)], 0.0, SINGLE_POLE_ANGLE_LIMIT_DEG),
            2 => (
                vec![Pole::new(0.5, 0.1, 0.000_002), Pole::new(0.05, 0.01, 0.000_002)],
                0.0005,
                DOUBLE_POLE_ANGLE_LIMIT_DEG,
            ),
            n => return Err(PhysicsError::UnsupportedPoleCount(n)),
        };

        let constants = PhysicsConstants {
            track_friction,
            ..PhysicsConstants::default()
        };
        let bounds = Bounds {
            track: Range::symmetric(TRACK_HALF_WIDTH)?,
            pole_angle: Range::symmetric(angle_limit_deg.to_radians())?,
            action: Range::symmetric(MAX_FORCE)?,
        };

        Ok(Self {
            constants,
            bounds,
            poles,
        })
    }

    #[must_use]
    pub fn nb_poles(&self) -> usize {
        self.poles.len()
    }

    /// A fresh upright state with the cart centred.
    #[must_use]
    pub fn initial_state(&self) -> PhysicsState {
        PhysicsState::new(self.poles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn single_pole_table() {
        let p = PoleBalancingParams::for_poles(1).unwrap();
        assert_eq!(p.nb_poles(), 1);
        assert_eq!(p.poles[0].length, 0.5);
        assert_eq!(p.poles[0].mass, 0.1);
        assert_eq!(p.constants.track_friction, 0.0);
        assert_relative_eq!(p.bounds.pole_angle.max(), 12.0_f32.to_radians());
    }

    #[test]
    fn double_pole_table() {
        let p = PoleBalancingParams::for_poles(2).unwrap();
        assert_eq!(p.nb_poles(), 2);
        assert_eq!(p.poles[1].length, 0.05);
        assert_eq!(p.poles[1].mass, 0.01);
        assert_eq!(p.poles[0].mup, 2e-6);
        assert_eq!(p.constants.track_friction, 0.0005);
        assert_relative_eq!(p.bounds.pole_angle.max(), 15.0_f32.to_radians());
    }

    #[test]
    fn other_pole_counts_are_rejected() {
        for n in [0, 3, 7] {
            assert_eq!(
                PoleBalancingParams::for_poles(n),
                Err(PhysicsError::UnsupportedPoleCount(n))
            );
        }
    }
}
