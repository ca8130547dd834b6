//! # Episode Runner
//!
//! Builds the environment and controller from [`RunOptions`], plays the
//! requested number of episodes, and optionally dumps the final episode's
//! trajectory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use rl::{
    run_episode, BangBangPolicy, ConstantPolicy, Env, EpisodeSummary, NonMarkovPoleBalancing,
    Policy, PoleBalancingConfig, RandomPolicy, TrajectoryRecorder,
};
use serde_json::json;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Never push.
    Zero,
    /// Always push with +10 N.
    PushRight,
    /// Always push with -10 N.
    PushLeft,
    /// Push toward the observed lean.
    BangBang,
    /// Uniform over the discrete actions.
    Random,
}

impl PolicyKind {
    fn build(self, seed: Option<u64>) -> Box<dyn Policy> {
        match self {
            PolicyKind::Zero => Box::new(ConstantPolicy {
                action_id: rl::policy::NO_PUSH,
            }),
            PolicyKind::PushRight => Box::new(ConstantPolicy {
                action_id: rl::policy::PUSH_RIGHT,
            }),
            PolicyKind::PushLeft => Box::new(ConstantPolicy {
                action_id: rl::policy::PUSH_LEFT,
            }),
            PolicyKind::BangBang => Box::new(BangBangPolicy::default()),
            PolicyKind::Random => {
                // Decorrelate from the environment's start-state stream.
                let rng = seed.map_or_else(fastrand::Rng::new, |s| {
                    fastrand::Rng::with_seed(s ^ 0x9e37_79b9_7f4a_7c15)
                });
                Box::new(RandomPolicy::new(rng))
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct RunOptions {
    pub env: PoleBalancingConfig,
    pub episodes: usize,
    pub max_steps: usize,
    pub policy: PolicyKind,
    pub trace: Option<PathBuf>,
}

/// Play `options.episodes` episodes and return their summaries.
///
/// # Errors
///
/// Returns configuration errors, environment errors, and trace I/O errors.
pub fn run(options: &RunOptions) -> Result<Vec<EpisodeSummary>> {
    let mut env = NonMarkovPoleBalancing::from_config(&options.env)?;
    let mut policy = options.policy.build(options.env.seed);
    let mut recorder = TrajectoryRecorder::new(2 + 2 * env.nb_poles());

    tracing::info!(
        poles = env.nb_poles(),
        random_init = options.env.random_init,
        observation = env.obs_size(),
        policy = ?options.policy,
        "starting {} episode(s)",
        options.episodes
    );

    let mut summaries = Vec::with_capacity(options.episodes);
    for episode in 0..options.episodes {
        recorder.clear();
        let summary = run_episode(
            &mut env,
            policy.as_mut(),
            options.max_steps,
            Some(&mut recorder),
        )?;
        tracing::info!(
            episode = episode + 1,
            steps = summary.steps,
            total_reward = summary.total_reward,
            terminated = summary.terminated,
            "episode finished"
        );
        summaries.push(summary);
    }

    if let Some(path) = &options.trace {
        write_trace(path, &recorder)?;
        tracing::info!("trajectory written to {}", path.display());
    }

    Ok(summaries)
}

fn write_trace(path: &Path, recorder: &TrajectoryRecorder) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for (step, frame) in recorder.frames().enumerate() {
        writeln!(out, "{}", json!({ "step": step, "frame": frame }))?;
    }
    out.flush()?;
    Ok(())
}
