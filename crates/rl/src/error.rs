use physics::PhysicsError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    #[error("unknown action id {0}")]
    UnknownAction(usize),
    #[error("action carries {actual} values, expected at least {expected}")]
    ActionArity { expected: usize, actual: usize },
    #[error("non-finite action value {0}")]
    NonFiniteAction(f32),
}
