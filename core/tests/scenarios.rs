use std::cell::Cell;
use std::fmt;

use rstest::rstest;

use optval_core::{IsTrue, NoError, Value};

#[derive(Debug, PartialEq)]
struct SomeError;
impl fmt::Display for SomeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("some error") }
}
impl std::error::Error for SomeError {}

#[rstest]
#[case(true, 1, 1)]
#[case(false, 2, 3)]
fn boolean_predicate(#[case] signal: bool, #[case] expected_or: i32, #[case] expected_or_fetch: i32) {
  let value = Value::new(IsTrue, move || (1, signal));

  // The raw pair is returned regardless of the predicate.
  assert_eq!(value.get(), (1, signal));
  assert_eq!(value.or(2), expected_or);
  assert_eq!(value.or_fetch(|| 3), expected_or_fetch);
}

#[test]
fn error_predicate_present() {
  let value = Value::new(NoError, || (1, None::<SomeError>));
  assert_eq!(value.get(), (1, None));
  assert_eq!(value.or(2), 1);
  assert_eq!(value.or_fetch(|| 3), 1);
}

#[test]
fn error_predicate_absent() {
  let value = Value::new(NoError, || (1, Some(SomeError)));
  assert_eq!(value.get(), (1, Some(SomeError)));
  assert_eq!(value.or(2), 2);
  assert_eq!(value.or_fetch(|| 3), 3);
}

#[test]
fn error_predicate_over_result_signal() {
  let failing = Value::new(NoError, || (1, Err::<(), _>(SomeError)));
  assert_eq!(failing.or(2), 2);
  let succeeding = Value::new(NoError, || (1, Ok::<(), SomeError>(())));
  assert_eq!(succeeding.or(2), 1);
}

#[rstest]
#[case("", 1, 1)]
#[case("not empty", 2, 3)]
fn custom_predicate(#[case] signal: &'static str, #[case] expected_or: i32, #[case] expected_or_fetch: i32) {
  let empty = |s: &&str| s.is_empty();
  let value = Value::new(empty, move || (1, signal));

  assert_eq!(value.get(), (1, signal));
  assert_eq!(value.or(2), expected_or);
  assert_eq!(value.or_fetch(|| 3), expected_or_fetch);
}

#[rstest]
#[case(true, 0)]
#[case(false, 1)]
fn fallback_supplier_only_called_when_absent(#[case] signal: bool, #[case] expected_calls: usize) {
  let supplied = Cell::new(0);
  let fetched = Cell::new(0);
  let value = Value::new(IsTrue, || {
    supplied.set(supplied.get() + 1);
    ("value", signal)
  });

  value.or_fetch(|| {
    fetched.set(fetched.get() + 1);
    "fallback"
  });

  assert_eq!(supplied.get(), 1);
  assert_eq!(fetched.get(), expected_calls);
}

#[test]
fn integer_signal_governs_string_value() {
  fn only_odd(n: i32) -> Value<String, i32, impl Fn(&i32) -> bool, impl Fn() -> (String, i32)> {
    Value::new(|n: &i32| n % 2 != 0, move || ("only-odd".to_string(), n))
  }

  assert_eq!(only_odd(112).or("my-fallback".to_string()), "my-fallback");
  assert_eq!(only_odd(111).or("my-fallback".to_string()), "only-odd");
  assert_eq!(only_odd(-3).or("my-fallback".to_string()), "only-odd");
  assert_eq!(only_odd(-4).or("my-fallback".to_string()), "my-fallback");
}

#[test]
fn shared_across_threads_when_parts_are() {
  let value = Value::new(IsTrue, || (std::thread::current().id(), true));
  std::thread::scope(|scope| {
    let handle = scope.spawn(|| value.get().0);
    let spawned = handle.join().unwrap();
    assert_ne!(spawned, value.get().0);
  });
}
