//! Assertion primitive: `expect(received).to_be(expected)`.
//!
//! Comparison uses *same-value* equality rather than `PartialEq`: `NaN`
//! equals `NaN`, and `+0.0` and `-0.0` are distinct. This mirrors an
//! identity-style comparison primitive and is deliberate; do not swap in
//! ordinary float equality.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::errors::HarnessError;

/// Same-value equality. For floats this compares bit patterns with a
/// mutual-NaN escape; for reference-counted pointers it compares identity;
/// for containers it compares structurally element by element.
///
/// The `Debug` supertrait supplies the rendering used in assertion
/// messages: strings come out quoted, numbers and booleans as literals,
/// `None` by its literal name, and anything else via its debug form.
pub trait SameValue: fmt::Debug {
    fn same_value(&self, other: &Self) -> bool;
}

macro_rules! same_value_via_eq {
    ($($ty:ty),* $(,)?) => {$(
        impl SameValue for $ty {
            fn same_value(&self, other: &Self) -> bool {
                self == other
            }
        }
    )*};
}

same_value_via_eq!(
    (),
    bool,
    char,
    str,
    String,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
);

macro_rules! same_value_float {
    ($($ty:ty),* $(,)?) => {$(
        impl SameValue for $ty {
            fn same_value(&self, other: &Self) -> bool {
                // All NaNs are one value; zero keeps its sign.
                if self.is_nan() && other.is_nan() {
                    return true;
                }
                self.to_bits() == other.to_bits()
            }
        }
    )*};
}

same_value_float!(f32, f64);

impl<T: SameValue + ?Sized> SameValue for &T {
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(*other)
    }
}

impl<T: SameValue> SameValue for Option<T> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_value(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: SameValue> SameValue for [T] {
    fn same_value(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.same_value(b))
    }
}

impl<T: SameValue> SameValue for Vec<T> {
    fn same_value(&self, other: &Self) -> bool {
        self.as_slice().same_value(other.as_slice())
    }
}

impl<T: SameValue, const N: usize> SameValue for [T; N] {
    fn same_value(&self, other: &Self) -> bool {
        self.as_slice().same_value(other.as_slice())
    }
}

impl<A: SameValue, B: SameValue> SameValue for (A, B) {
    fn same_value(&self, other: &Self) -> bool {
        self.0.same_value(&other.0) && self.1.same_value(&other.1)
    }
}

impl<A: SameValue, B: SameValue, C: SameValue> SameValue for (A, B, C) {
    fn same_value(&self, other: &Self) -> bool {
        self.0.same_value(&other.0) && self.1.same_value(&other.1) && self.2.same_value(&other.2)
    }
}

// Shared pointers compare by identity, the same-value semantic for
// reference-like values.
impl<T: fmt::Debug + ?Sized> SameValue for Rc<T> {
    fn same_value(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: fmt::Debug + ?Sized> SameValue for Arc<T> {
    fn same_value(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

/// Comparator bound to a received value.
#[derive(Debug)]
pub struct Expectation<T> {
    received: T,
}

/// Binds a received value for comparison.
///
/// # Example
/// ```
/// use minitest::expect;
///
/// assert!(expect(2 + 2).to_be(4).is_ok());
/// assert!(expect("a").to_be("b").is_err());
/// ```
pub fn expect<T: SameValue>(received: T) -> Expectation<T> {
    Expectation { received }
}

impl<T: SameValue> Expectation<T> {
    /// Succeeds when `expected` is the same value as the received one;
    /// otherwise fails with [`HarnessError::Assertion`] describing both.
    pub fn to_be(&self, expected: T) -> Result<(), HarnessError> {
        if self.received.same_value(&expected) {
            return Ok(());
        }
        Err(HarnessError::assertion(format!(
            "Expected {} but received {}.",
            format_value(&expected),
            format_value(&self.received),
        )))
    }
}

fn format_value<T: fmt::Debug>(value: &T) -> String {
    format!("{:?}", value)
}
