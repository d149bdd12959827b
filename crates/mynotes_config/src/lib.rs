use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub mod env_vars;
pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Layers, lowest priority first: built-in defaults, `config/default.*`,
/// `config/{RUN_ENV}.*`, then `MYNOTES__SECTION__KEY` environment variables.
/// `secret_from_env` markers are resolved afterwards and both VAPID keys
/// must end up non-empty.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();
    let config_dir = PathBuf::from(env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string()));

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    debug!("config: default_path: {}", default_path.display());
    debug!("config: env_path: {}", env_path.display());

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    resolve_secrets(raw_config, env_vars::process_env)
}

/// Applies `secret_from_env` replacement and validates the push keys.
pub fn resolve_secrets<F>(config: AppConfig, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut json: Value = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    let missing = env_vars::inject_secrets(&mut json, lookup);
    if !missing.is_empty() {
        return Err(ConfigError::Message(format!(
            "no environment value for secret(s): {}",
            missing.join(", ")
        )));
    }
    let config: AppConfig = serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))?;

    if config.push.public_key.trim().is_empty() || config.push.private_key.trim().is_empty() {
        return Err(ConfigError::Message(
            "VAPID_PUBLIC_KEY and VAPID_PRIVATE_KEY must both be set".to_string(),
        ));
    }
    Ok(config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// `DOTENV_OVERRIDE` names an alternative file; otherwise `.env` in the working
/// directory is used. A missing file is not an error. Returns the path tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
