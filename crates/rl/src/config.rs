use physics::{PhysicsError, PoleBalancingParams};
use serde::{Deserialize, Serialize};

/// Construction parameters for [`crate::NonMarkovPoleBalancing`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoleBalancingConfig {
    /// Number of poles on the cart (1 or 2).
    pub nb_poles: usize,
    /// Start every episode from a random near-upright state.
    pub random_init: bool,
    /// Seed for the initial-state generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for PoleBalancingConfig {
    fn default() -> Self {
        Self {
            nb_poles: 1,
            random_init: false,
            seed: None,
        }
    }
}

impl PoleBalancingConfig {
    #[must_use]
    pub fn new(nb_poles: usize, random_init: bool) -> Self {
        Self {
            nb_poles,
            random_init,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnsupportedPoleCount`] when `nb_poles` has no parameter table.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        PoleBalancingParams::for_poles(self.nb_poles).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: PoleBalancingConfig = serde_json::from_str(r#"{"nb_poles": 2}"#).unwrap();
        assert_eq!(cfg, PoleBalancingConfig::new(2, false));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<PoleBalancingConfig>(r#"{"poles": 2}"#).is_err());
    }

    #[test]
    fn validate_flags_bad_pole_count() {
        assert!(PoleBalancingConfig::default().validate().is_ok());
        assert_eq!(
            PoleBalancingConfig::new(3, true).validate(),
            Err(PhysicsError::UnsupportedPoleCount(3))
        );
    }
}
