/// Decides, from a signal of type `P`, whether the value paired with that signal counts as present.
///
/// Every `Fn(&P) -> bool` closure or function is a predicate, so custom predicates are usually written inline:
///
/// ```
/// use optval_core::Value;
///
/// let empty = |s: &&str| s.is_empty();
/// assert_eq!(Value::new(empty, || (1, "not empty")).or(2), 2);
/// ```
///
/// Predicates are expected to be deterministic and free of side effects.
pub trait Predicate<P: ?Sized> {
  fn test(&self, signal: &P) -> bool;
}

impl<P: ?Sized, F: Fn(&P) -> bool> Predicate<P> for F {
  #[inline]
  fn test(&self, signal: &P) -> bool { self(signal) }
}


/// Boolean-identity predicate: the value is present if the `bool` signal is `true`.
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct IsTrue;

impl Predicate<bool> for IsTrue {
  #[inline]
  fn test(&self, signal: &bool) -> bool { *signal }
}


/// Nil-error predicate: the value is present if the signal carries no error.
///
/// Supports `Option<E>` signals (present on `None`) and `Result<U, E>` signals (present on `Ok`).
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct NoError;

impl<E> Predicate<Option<E>> for NoError {
  #[inline]
  fn test(&self, signal: &Option<E>) -> bool { signal.is_none() }
}

impl<U, E> Predicate<Result<U, E>> for NoError {
  #[inline]
  fn test(&self, signal: &Result<U, E>) -> bool { signal.is_ok() }
}
