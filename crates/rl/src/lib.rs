#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Non-Markov Pole Balancing Environment
//!
//! Episodic benchmark environment on top of the [`physics`] crate. A cart
//! balances one or two poles; the controller sees a partial observation and
//! earns `Σ cos θ` per step.
//!
//! ```rust
//! use rl::{Env, NonMarkovPoleBalancing};
//!
//! let mut env = NonMarkovPoleBalancing::new(1, false)?;
//! let first = env.initialize();
//! assert_eq!(first.observation, vec![0.0; 4]);
//! assert_eq!(first.reward, 1.0);
//!
//! let push_right = env.action_space().discrete_action(2)?.clone();
//! let next = env.step(&push_right)?;
//! assert!(!next.terminal);
//! # Ok::<(), rl::EnvError>(())
//! ```

pub mod actions;
pub mod config;
pub mod env;
pub mod episode;
pub mod error;
pub mod observation;
pub mod pole_balancing;
pub mod policy;
pub mod recorder;
pub mod reward;
pub mod rollout;

pub use actions::{Action, ActionList, ActionSpace};
pub use config::PoleBalancingConfig;
pub use env::{Env, TimeStep};
pub use episode::{EpisodeController, EpisodePhase};
pub use error::EnvError;
pub use observation::ObservationProjector;
pub use pole_balancing::NonMarkovPoleBalancing;
pub use policy::{BangBangPolicy, ConstantPolicy, Policy, RandomPolicy};
pub use recorder::{Recorder, TrajectoryRecorder};
pub use reward::{CosineReward, Signal, ZeroSignal};
pub use rollout::{run_episode, EpisodeSummary};
