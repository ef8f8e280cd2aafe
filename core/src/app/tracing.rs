use std::io;
use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::app::env;

pub const CONSOLE_LOG_VAR: &str = "CONSOLE_LOG";
pub const FILE_LOG_VAR: &str = "FILE_LOG";

/// Builds and installs the global tracing subscriber.
///
/// Console and file filters are read from the `CONSOLE_LOG` and `FILE_LOG` environment variables, falling back to the
/// default directives (`info` unless [changed](Self::with_default_directives)).
#[derive(Default)]
pub struct AppTracingBuilder {
  log_file_path: Option<PathBuf>,
  default_directives: Option<&'static str>,
}
impl AppTracingBuilder {
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }

  pub fn with_default_directives(mut self, default_directives: &'static str) -> Self {
    self.default_directives = Some(default_directives);
    self
  }

  pub fn build(self) -> AppTracing {
    let default_directives = self.default_directives.unwrap_or("info");
    let console_filter = EnvFilter::new(directives(CONSOLE_LOG_VAR, default_directives));
    let file = self.log_file_path.map(|p| (p, EnvFilter::new(directives(FILE_LOG_VAR, default_directives))));
    AppTracing::new(console_filter, file)
  }
}

/// Filter directives from environment variable `name`, or `default` if it is not set or does not parse.
fn directives(name: &str, default: &str) -> String {
  let directives = env::var(name).or_fetch(|| default.to_string());
  match EnvFilter::try_new(&directives) {
    Ok(_) => directives,
    Err(_) => default.to_string(),
  }
}

/// Installed tracing. Must be kept alive for the duration of the program, otherwise buffered file logs may be lost.
pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(Option<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  fn new(console_filter: EnvFilter, file: Option<(PathBuf, EnvFilter)>) -> Self {
    let console = tracing_subscriber::fmt::layer()
      .with_writer(io::stderr)
      .with_filter(console_filter);
    let registry = tracing_subscriber::registry().with(console);

    let Some((file_path, file_filter)) = file else {
      registry.init();
      return Self { _file_tracing: FileTracing::default() };
    };

    #[cfg(feature = "app_tracing_file")] {
      match create_log_file(&file_path) {
        Ok(log_file) => {
          let (writer, guard) = tracing_appender::non_blocking(io::BufWriter::new(log_file));
          let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(file_filter);
          registry.with(file_layer).init();
          Self { _file_tracing: FileTracing(Some(guard)) }
        }
        Err(cause) => {
          registry.init();
          tracing::warn!(%cause, path = %file_path.display(), "cannot log to file; continuing with console logging only");
          Self { _file_tracing: FileTracing::default() }
        }
      }
    }
    #[cfg(not(feature = "app_tracing_file"))] {
      drop(file_filter);
      registry.init();
      tracing::warn!(path = %file_path.display(), "cannot log to file; file logging is not enabled");
      Self { _file_tracing: FileTracing }
    }
  }
}

#[cfg(feature = "app_tracing_file")]
fn create_log_file(file_path: &std::path::Path) -> io::Result<std::fs::File> {
  if let Some(parent) = file_path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::File::create(file_path)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn directives_from_set_variable() {
    std::env::set_var("OPTVAL_CORE_TEST_LOG_SET", "optval_core=debug");
    assert_eq!(directives("OPTVAL_CORE_TEST_LOG_SET", "info"), "optval_core=debug");
  }

  #[test]
  fn directives_default_when_variable_missing() {
    assert_eq!(directives("OPTVAL_CORE_TEST_LOG_MISSING", "warn"), "warn");
  }

  #[test]
  fn directives_default_when_variable_invalid() {
    std::env::set_var("OPTVAL_CORE_TEST_LOG_INVALID", "optval_core=loudest");
    assert_eq!(directives("OPTVAL_CORE_TEST_LOG_INVALID", "info"), "info");
  }

  #[cfg(feature = "app_tracing_file")]
  #[test]
  fn create_log_file_creates_parent_directories() {
    let dir = std::env::temp_dir().join(format!("optval_core_test_{}", std::process::id()));
    let path = dir.join("nested").join("log.txt");
    create_log_file(&path).unwrap();
    assert!(path.is_file());
    std::fs::remove_dir_all(&dir).unwrap();
  }
}
