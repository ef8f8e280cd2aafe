use std::error::Error;

use tracing::{debug, info, warn};

use optval_core::app::env;
use optval_core::app::tracing::AppTracingBuilder;

use crate::config::Config;
use crate::request::RequestIdGenerator;

mod config;
mod request;
mod rules;

const DEFAULT_QUANTITY: u32 = 1;

fn main() -> Result<(), Box<dyn Error>> {
  let dotenv_path = env::load_dotenv_into_env();
  let config = Config::from_env();
  let _tracing = AppTracingBuilder::default()
    .with_default_directives("info,optval_demo=debug")
    .with_log_file_path_opt(config.log_file.clone())
    .build();
  if let Some(path) = dotenv_path {
    debug!(path = %path.display(), "loaded .env file");
  }

  let runtime = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()?;
  runtime.block_on(run(config));
  Ok(())
}

struct Request {
  id: Option<&'static str>,
  quantity: &'static str,
  number: i64,
}

#[derive(Eq, PartialEq, Debug)]
struct Handled {
  request_id: String,
  quantity: u32,
  label: String,
}

async fn run(config: Config) {
  let generator = RequestIdGenerator::new(config.fallback_prefix);
  let requests = [
    Request { id: Some("req-1"), quantity: "3", number: 7 },
    Request { id: None, quantity: "abc", number: 112 },
    Request { id: Some("req-2"), quantity: "", number: 9 },
    Request { id: None, quantity: "12", number: 4 },
  ];
  for request in requests {
    let handled = match request.id {
      Some(id) => request::scope(id.to_string(), handle(&generator, &request)).await,
      None => handle(&generator, &request).await,
    };
    info!(?handled, "handled request");
  }
  info!(generated = generator.generated(), "done");
}

async fn handle(generator: &RequestIdGenerator, request: &Request) -> Handled {
  let request_id = request::request_id().or_fetch(|| generator.generate());
  let quantity = rules::quantity(request.quantity).or_fetch(|| {
    warn!(%request_id, input = request.quantity, "invalid quantity; using default");
    DEFAULT_QUANTITY
  });
  let label = rules::only_odd("odd", request.number).or_fetch(|| format!("even-{}", request.number));
  Handled { request_id, quantity, label }
}
