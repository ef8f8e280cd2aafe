use std::fmt;
use std::marker::PhantomData;

use crate::predicate::Predicate;

/// Optional value: a deferred `(value, signal)` supplier paired with a [`Predicate`] over the signal.
///
/// The value is present if the predicate holds for the signal the supplier produced, and absent otherwise.
/// Construction does not evaluate anything. Every retrieval ([`get`](Self::get), [`or`](Self::or),
/// [`or_fetch`](Self::or_fetch)) invokes the supplier exactly once; nothing is cached between calls.
///
/// `T` is the type of the value and `P` the type of the signal. The predicate only ever inspects the signal.
pub struct Value<T, P, Pr, S> {
  predicate: Pr,
  supplier: S,
  _phantom: PhantomData<fn() -> (T, P)>,
}

/// Optional value with a type-erased predicate and supplier, for returning from functions and storing in fields.
pub type BoxedValue<'a, T, P> = Value<T, P, Box<dyn Fn(&P) -> bool + 'a>, Box<dyn Fn() -> (T, P) + 'a>>;

impl<T, P, Pr, S> Value<T, P, Pr, S> where
  Pr: Predicate<P>,
  S: Fn() -> (T, P),
{
  /// Creates a new optional value from `predicate` and `supplier`. Does not invoke either.
  ///
  /// Closure predicates passed here need their parameter type annotated (`|b: &bool| *b`), because [`Predicate`] does
  /// not tell the compiler the closure's signature. Use [`from_fn`](Self::from_fn) to have it inferred instead.
  #[inline]
  pub fn new(predicate: Pr, supplier: S) -> Self {
    Self { predicate, supplier, _phantom: PhantomData }
  }

  /// Creates a new optional value from a closure `predicate` and `supplier`, inferring the predicate's parameter type.
  #[inline]
  pub fn from_fn(predicate: Pr, supplier: S) -> Self where
    Pr: Fn(&P) -> bool,
  {
    Self::new(predicate, supplier)
  }

  /// Returns the value and the signal, without testing the predicate.
  ///
  /// The value is returned even if it is absent. Useful when the signal itself is of interest, for example to inspect
  /// the error that made the value absent.
  #[inline]
  pub fn get(&self) -> (T, P) {
    (self.supplier)()
  }

  /// Returns the value if it is present, otherwise returns `fallback`.
  #[inline]
  pub fn or(&self, fallback: T) -> T {
    self.or_fetch(move || fallback)
  }

  /// Returns the value if it is present, otherwise returns the result of calling `fallback`.
  ///
  /// `fallback` is only called when the value is absent.
  #[inline]
  pub fn or_fetch(&self, fallback: impl FnOnce() -> T) -> T {
    let (value, signal) = self.get();
    if !self.predicate.test(&signal) {
      return fallback();
    }
    value
  }

  /// Erases the predicate and supplier types, creating a [`BoxedValue`].
  pub fn boxed<'a>(self) -> BoxedValue<'a, T, P> where
    Pr: 'a,
    S: 'a,
  {
    let Self { predicate, supplier, .. } = self;
    let predicate: Box<dyn Fn(&P) -> bool + 'a> = Box::new(move |signal: &P| predicate.test(signal));
    let supplier: Box<dyn Fn() -> (T, P) + 'a> = Box::new(supplier);
    Value::new(predicate, supplier)
  }
}

impl<T, P, Pr: Clone, S: Clone> Clone for Value<T, P, Pr, S> {
  #[inline]
  fn clone(&self) -> Self {
    Self { predicate: self.predicate.clone(), supplier: self.supplier.clone(), _phantom: PhantomData }
  }
}
impl<T, P, Pr: Copy, S: Copy> Copy for Value<T, P, Pr, S> {}

impl<T, P, Pr, S> fmt::Debug for Value<T, P, Pr, S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Value")
      .field("value_type", &std::any::type_name::<T>())
      .field("signal_type", &std::any::type_name::<P>())
      .finish_non_exhaustive()
  }
}
