#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Pole Balancing Physics
//!
//! The physical model behind the non-Markov pole balancing benchmark: a cart on
//! a bounded track carrying one or two poles on frictional hinges.
//!
//! ## Key Components
//!
//! -   **State:** [`PhysicsState`] holds the cart and an ordered list of
//!     [`Pole`]s. Each pole carries both its dynamic state and its fixed
//!     physical properties. These are defined in the [`types`] module.
//! -   **Parameters:** [`PoleBalancingParams`] selects the constants, bounds
//!     and pole table for a given pole count.
//! -   **Integration:** the [`integrator`] module computes effective
//!     force/mass per pole and advances the state with forward Euler.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{integrator, PoleBalancingParams};
//!
//! let params = PoleBalancingParams::for_poles(1)?;
//! let mut state = params.initial_state();
//! let force = params.bounds.action.bound(25.0);
//! integrator::step(&mut state, &params.constants, force);
//! assert!(state.cart.x_dot > 0.0);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod error;
pub mod integrator;
pub mod params;
pub mod range;
pub mod types;

pub use error::PhysicsError;
pub use integrator::{Accelerations, EffectiveDynamics};
pub use params::PoleBalancingParams;
pub use range::Range;
pub use types::{Bounds, CartState, PhysicsConstants, PhysicsState, Pole};
