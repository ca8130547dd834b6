use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("unsupported pole count {0}: only 1 or 2 poles have parameter tables")]
    UnsupportedPoleCount(usize),
    #[error("invalid range [{min}, {max}]")]
    InvalidRange { min: f32, max: f32 },
}
