use thiserror::Error;

use optval_core::{BoxedValue, NoError, Value};

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum QuantityError {
  #[error("Quantity is empty")]
  Empty,
  #[error("Quantity '{0}' is not a number")]
  NotANumber(String),
  #[error("Quantity must be greater than zero")]
  Zero,
}

/// Quantity parsed from `input`, present if `input` is a positive number.
pub fn quantity(input: &str) -> Value<u32, Option<QuantityError>, NoError, impl Fn() -> (u32, Option<QuantityError>) + '_> {
  Value::new(NoError, move || {
    let trimmed = input.trim();
    if trimmed.is_empty() {
      return (0, Some(QuantityError::Empty));
    }
    match trimmed.parse::<u32>() {
      Ok(0) => (0, Some(QuantityError::Zero)),
      Ok(quantity) => (quantity, None),
      Err(_) => (0, Some(QuantityError::NotANumber(trimmed.to_string()))),
    }
  })
}

/// `label`, present only if `number` is odd.
pub fn only_odd(label: impl Into<String>, number: i64) -> BoxedValue<'static, String, i64> {
  let label = label.into();
  Value::new(|number: &i64| number % 2 != 0, move || (label.clone(), number)).boxed()
}
