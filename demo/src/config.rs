use std::path::PathBuf;

use optval_core::app::env;

pub const LOG_FILE_VAR: &str = "OPTVAL_DEMO_LOG_FILE";
pub const FALLBACK_PREFIX_VAR: &str = "OPTVAL_DEMO_FALLBACK_PREFIX";

#[derive(Clone, Debug)]
pub struct Config {
  pub log_file: Option<PathBuf>,
  pub fallback_prefix: String,
}
impl Config {
  pub fn from_env() -> Self {
    // Only a missing variable means no log file; an invalid one is kept so that file creation reports it.
    let (log_file, cause) = env::var(LOG_FILE_VAR).get();
    let log_file = match cause {
      None => Some(PathBuf::from(log_file)),
      Some(std::env::VarError::NotPresent) => None,
      Some(std::env::VarError::NotUnicode(path)) => Some(PathBuf::from(path)),
    };
    let fallback_prefix = env::var(FALLBACK_PREFIX_VAR).or_fetch(|| "generated".to_string());
    Self { log_file, fallback_prefix }
  }
}
