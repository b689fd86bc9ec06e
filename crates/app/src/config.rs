use shared_types::{AppConfig, SignupConfig, UserType};
use std::sync::OnceLock;

static CONFIG: OnceLock<SignupConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides `signup.user_type`.
const USER_TYPE_ENV: &str = "SIGNUP_USER_TYPE";

/// Parse `config.toml` contents, falling back to defaults on error.
fn parse(contents: &str) -> SignupConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.signup,
        Err(e) => {
            tracing::warn!("failed to parse {CONFIG_PATH}: {e}; using defaults");
            SignupConfig::default()
        }
    }
}

/// Apply the `SIGNUP_USER_TYPE` override, ignoring values that don't parse.
fn apply_env(mut config: SignupConfig, raw: Option<String>) -> SignupConfig {
    if let Some(raw) = raw {
        match raw.parse::<UserType>() {
            Ok(user_type) => config.user_type = user_type,
            Err(e) => tracing::warn!("ignoring {USER_TYPE_ENV}: {e}"),
        }
    }
    config
}

/// Read `config.toml` and the environment once and cache the result.
/// Later calls return the cached config.
///
/// A missing file is not an error: the form runs in customer mode.
pub fn load() -> &'static SignupConfig {
    CONFIG.get_or_init(|| {
        let from_file = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse(&contents),
            Err(e) => {
                tracing::info!("{CONFIG_PATH} not readable ({e}); using defaults");
                SignupConfig::default()
            }
        };
        let config = apply_env(from_file, std::env::var(USER_TYPE_ENV).ok());
        tracing::info!(
            user_type = %config.user_type,
            show_all_errors = config.show_all_errors,
            "signup config loaded"
        );
        config
    })
}
