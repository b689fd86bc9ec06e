use serde::{Deserialize, Serialize};

use crate::signup::UserType;

/// Settings for the signup page.
///
/// Loaded from the `[signup]` table of `config.toml`. Every field has a
/// default so that a missing or partial file still yields a usable form.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SignupConfig {
    #[serde(default)]
    pub user_type: UserType,
    /// Mark every missing field inline, not just the first.
    #[serde(default)]
    pub show_all_errors: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub signup: SignupConfig,
}
