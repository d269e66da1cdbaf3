use serde::Deserialize;

use crate::Error;

/// Settings of a validation pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Maximum number of ways the new road reachability walk may visit.
    /// Unbounded when unset.
    pub search_limit: Option<usize>,
    /// Withhold the delete fix from entities that are relation members
    pub protect_relation_members: bool,
}

impl ValidatorConfig {
    /// # Errors
    ///
    /// Returns an error if `search_limit` is zero
    pub fn validate(&self) -> Result<(), Error> {
        if self.search_limit == Some(0) {
            return Err(Error::ConfigError(
                "search_limit must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
