use std::env::{self, VarError};

use crate::predicate::NoError;
use crate::value::Value;

/// Loads variables from a `.env` file in the current directory or its ancestors into the process environment,
/// returning the path of the loaded file. Variables that are already set are not overridden.
///
/// A missing `.env` file is not an error; `None` is returned in that case.
#[cfg(feature = "app_env")]
pub fn load_dotenv_into_env() -> Option<std::path::PathBuf> {
  dotenvy::dotenv().ok()
}

/// Environment variable `name` as an optional value. The variable is read on every retrieval, not here.
///
/// The value is present if the variable is set and valid unicode. [`get`](Value::get) returns the [`VarError`]
/// describing why it is absent, along with an empty string.
pub fn var(name: &str) -> Value<String, Option<VarError>, NoError, impl Fn() -> (String, Option<VarError>)> {
  let name = name.to_owned();
  Value::new(NoError, move || match env::var(&name) {
    Ok(value) => (value, None),
    Err(cause) => (String::new(), Some(cause)),
  })
}
