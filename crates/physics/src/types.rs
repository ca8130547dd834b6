use serde::Serialize;

use crate::range::Range;

/// Cart position (m) and velocity (m/s) along the track.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct CartState {
    pub x: f32,
    pub x_dot: f32,
}

/// A pole hinged to the cart: its dynamic state plus its fixed physical properties.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Pole {
    /// Angle from vertical (rad), kept in (-π, π].
    pub theta: f32,
    /// Angular velocity (rad/s).
    pub theta_dot: f32,
    /// Half length (m).
    pub length: f32,
    /// Mass (kg).
    pub mass: f32,
    /// Hinge friction coefficient.
    pub mup: f32,
}

impl Pole {
    /// An upright pole at rest.
    #[must_use]
    pub const fn new(length: f32, mass: f32, mup: f32) -> Self {
        Self {
            theta: 0.0,
            theta_dot: 0.0,
            length,
            mass,
            mup,
        }
    }

    /// Hinge friction torque term `mup * theta_dot / (mass * length)`.
    #[must_use]
    pub fn hinge_friction(&self) -> f32 {
        self.mup * self.theta_dot / (self.mass * self.length)
    }
}

/// Full, Markovian simulation state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PhysicsState {
    pub cart: CartState,
    pub poles: Vec<Pole>,
}

impl PhysicsState {
    #[must_use]
    pub fn new(poles: Vec<Pole>) -> Self {
        Self {
            cart: CartState::default(),
            poles,
        }
    }

    #[must_use]
    pub fn nb_poles(&self) -> usize {
        self.poles.len()
    }

    /// Put the cart at rest and stop every pole, leaving positions and angles untouched.
    pub fn zero_velocities(&mut self) {
        self.cart.x_dot = 0.0;
        for pole in &mut self.poles {
            pole.theta_dot = 0.0;
        }
    }

    /// Flattened `[x, x_dot, theta_0, theta_dot_0, theta_1, theta_dot_1, ...]`.
    #[must_use]
    pub fn to_frame(&self) -> Vec<f32> {
        let mut frame = Vec::with_capacity(2 + 2 * self.poles.len());
        frame.push(self.cart.x);
        frame.push(self.cart.x_dot);
        for pole in &self.poles {
            frame.push(pole.theta);
            frame.push(pole.theta_dot);
        }
        frame
    }
}

/// Immutable physical constants shared by every integration step.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct PhysicsConstants {
    /// Gravitational acceleration (m/s²). Negative: upright is the unstable equilibrium.
    pub gravity: f32,
    /// Cart mass (kg).
    pub cart_mass: f32,
    /// Friction coefficient of the cart on the track.
    pub track_friction: f32,
    pub three_fourth: f32,
    /// Integration timestep (s).
    pub dt: f32,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self {
            gravity: -9.81,
            cart_mass: 1.0,
            track_friction: 0.0,
            three_fourth: 3.0 / 4.0,
            dt: 0.02,
        }
    }
}

/// Termination and actuation bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    /// Track range for the cart position (m).
    pub track: Range,
    /// Allowed pole angle (rad).
    pub pole_angle: Range,
    /// Allowed applied force (N).
    pub action: Range,
}

impl Bounds {
    /// `true` when the cart is on the track and every pole is inside its angle range.
    #[must_use]
    pub fn within(&self, state: &PhysicsState) -> bool {
        self.track.contains(state.cart.x)
            && state
                .poles
                .iter()
                .all(|pole| self.pole_angle.contains(pole.theta))
    }
}
