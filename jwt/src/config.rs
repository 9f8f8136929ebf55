use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Tunables of [SelfSignedJwt]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfSignedJwtConfig {
    /// Minutes between 'nbf' and 'exp' of every assertion
    pub lifetime_mins: u64,
}

impl SelfSignedJwtConfig {
    /// Assertions are short lived, a token request is expected to follow right away
    pub const DEFAULT_LIFETIME_MINS: u64 = 10;

    /// Lifetime of an assertion
    pub fn lifetime(&self) -> RustyAssertionResult<time::Duration> {
        let mins = i64::try_from(self.lifetime_mins).map_err(|_| RustyAssertionError::InvalidLifetime)?;
        if mins == 0 || mins > i64::from(u32::MAX) {
            return Err(RustyAssertionError::InvalidLifetime);
        }
        Ok(time::Duration::minutes(mins))
    }
}

impl Default for SelfSignedJwtConfig {
    fn default() -> Self {
        Self {
            lifetime_mins: Self::DEFAULT_LIFETIME_MINS,
        }
    }
}
