//! # Cart-Pole Integration
//!
//! Equations of motion for a cart carrying any number of independently hinged
//! poles, advanced with explicit (forward) Euler at a fixed timestep.
//!
//! Each pole couples into the cart through an *effective force* and an
//! *effective mass*; both are recomputed from the current angle and angular
//! velocity on every step and never stored.

use std::f32::consts::{PI, TAU};

use crate::types::{PhysicsConstants, PhysicsState, Pole};

/// Per-pole coupling terms for one step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EffectiveDynamics {
    pub force: f32,
    pub mass: f32,
}

/// Accelerations evaluated on the pre-update state.
#[derive(Clone, Debug, PartialEq)]
pub struct Accelerations {
    pub cart: f32,
    pub poles: Vec<f32>,
}

/// Sign with `signum(0.0) == 0.0`.
///
/// `f32::signum` maps `+0.0` to `1.0`, which would apply full track friction to
/// a cart at rest.
#[must_use]
pub fn signum(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Wrap an angle into (-π, π] with a single 2π correction.
///
/// Per-step angular change is far below 2π, so one correction is enough for any
/// state reached through [`step`].
#[must_use]
pub fn wrap_angle(theta: f32) -> f32 {
    if theta > PI {
        theta - TAU
    } else if theta <= -PI {
        theta + TAU
    } else {
        theta
    }
}

/// Wrap every pole angle in place.
pub fn normalize_angles(state: &mut PhysicsState) {
    for pole in &mut state.poles {
        pole.theta = wrap_angle(pole.theta);
    }
}

#[must_use]
pub fn effective_dynamics(pole: &Pole, constants: &PhysicsConstants) -> EffectiveDynamics {
    let (sin, cos) = pole.theta.sin_cos();
    let force = pole.mass * pole.length * pole.theta_dot.powi(2) * sin
        + constants.three_fourth
            * pole.mass
            * cos
            * (pole.hinge_friction() + constants.gravity * sin);
    let mass = pole.mass * (1.0 - constants.three_fourth * cos.powi(2));
    EffectiveDynamics { force, mass }
}

/// Cart acceleration under the (already clamped) applied `force`.
#[must_use]
pub fn cart_acceleration(state: &PhysicsState, constants: &PhysicsConstants, force: f32) -> f32 {
    let (total_force, total_mass) = state
        .poles
        .iter()
        .map(|pole| effective_dynamics(pole, constants))
        .fold((0.0_f32, 0.0_f32), |(f, m), eff| (f + eff.force, m + eff.mass));

    (force - constants.track_friction * signum(state.cart.x_dot) + total_force)
        / (constants.cart_mass + total_mass)
}

#[must_use]
pub fn pole_angular_acceleration(pole: &Pole, constants: &PhysicsConstants, cart_acc: f32) -> f32 {
    let (sin, cos) = pole.theta.sin_cos();
    -constants.three_fourth
        * (cart_acc * cos + constants.gravity * sin + pole.hinge_friction())
        / pole.length
}

#[must_use]
pub fn accelerations(state: &PhysicsState, constants: &PhysicsConstants, force: f32) -> Accelerations {
    let cart = cart_acceleration(state, constants, force);
    let poles = state
        .poles
        .iter()
        .map(|pole| pole_angular_acceleration(pole, constants, cart))
        .collect();
    Accelerations { cart, poles }
}

/// Advance `state` by one timestep under `force` and re-normalize the angles.
///
/// `force` must already be clamped to the action range. All accelerations are
/// computed before any state variable is touched.
pub fn step(state: &mut PhysicsState, constants: &PhysicsConstants, force: f32) -> Accelerations {
    let acc = accelerations(state, constants, force);
    let dt = constants.dt;

    state.cart.x += state.cart.x_dot * dt;
    state.cart.x_dot += acc.cart * dt;

    for (pole, theta_acc) in state.poles.iter_mut().zip(&acc.poles) {
        pole.theta += pole.theta_dot * dt;
        pole.theta_dot += theta_acc * dt;
    }

    normalize_angles(state);
    acc
}
