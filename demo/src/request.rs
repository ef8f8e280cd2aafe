use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use optval_core::{IsTrue, Value};

tokio::task_local! {
  static REQUEST_ID: String;
}

/// Runs `future` with `request_id` as the id of the current request.
pub async fn scope<F: Future>(request_id: String, future: F) -> F::Output {
  REQUEST_ID.scope(request_id, future).await
}

/// Id of the current request, present if the caller runs inside a request [scope].
pub fn request_id() -> Value<String, bool, IsTrue, impl Fn() -> (String, bool)> {
  Value::new(IsTrue, || match REQUEST_ID.try_with(|id| id.clone()) {
    Ok(id) => (id, true),
    Err(_) => (String::new(), false),
  })
}


/// Generates numbered request ids for requests that arrive without one.
#[derive(Debug)]
pub struct RequestIdGenerator {
  prefix: String,
  next: AtomicU64,
}
impl RequestIdGenerator {
  pub fn new(prefix: impl Into<String>) -> Self {
    Self { prefix: prefix.into(), next: AtomicU64::new(1) }
  }

  pub fn generate(&self) -> String {
    let number = self.next.fetch_add(1, Ordering::Relaxed);
    let id = format!("{}-{}", self.prefix, number);
    tracing::debug!(%id, "generated request id");
    id
  }

  /// Number of ids generated so far.
  pub fn generated(&self) -> u64 {
    self.next.load(Ordering::Relaxed) - 1
  }
}
