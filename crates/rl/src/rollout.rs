use serde::Serialize;

use crate::env::Env;
use crate::error::EnvError;
use crate::policy::Policy;
use crate::recorder::Recorder;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub steps: usize,
    /// Sum of per-step rewards, excluding the reward emitted by `initialize`.
    pub total_reward: f32,
    /// `false` when the episode was cut off at `max_steps`.
    pub terminated: bool,
}

/// Run one episode of at most `max_steps` steps.
///
/// When a recorder is given it receives the full-state snapshot after
/// `initialize` and after every step.
///
/// # Errors
///
/// Propagates policy and environment errors.
pub fn run_episode<E, P>(
    env: &mut E,
    policy: &mut P,
    max_steps: usize,
    mut recorder: Option<&mut dyn Recorder>,
) -> Result<EpisodeSummary, EnvError>
where
    E: Env + ?Sized,
    P: Policy + ?Sized,
{
    let mut time_step = env.initialize();
    if let Some(rec) = recorder.as_deref_mut() {
        rec.record(&env.snapshot());
    }

    let mut summary = EpisodeSummary {
        steps: 0,
        total_reward: 0.0,
        terminated: time_step.terminal,
    };
    while !summary.terminated && summary.steps < max_steps {
        let action = policy.act(&time_step.observation, env.action_space())?;
        time_step = env.step(&action)?;
        if let Some(rec) = recorder.as_deref_mut() {
            rec.record(&env.snapshot());
        }
        summary.steps += 1;
        summary.total_reward += time_step.reward;
        summary.terminated = time_step.terminal;
    }
    Ok(summary)
}
