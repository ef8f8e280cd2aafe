pub mod predicate;
pub mod value;

pub mod app;

pub use predicate::{IsTrue, NoError, Predicate};
pub use value::{BoxedValue, Value};
