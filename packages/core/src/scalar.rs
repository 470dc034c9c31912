//! The closed set of scalar kinds usable with typed access.

use crate::{Kind, Value};

mod private {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
    impl Sealed for String {}
}

/// A Rust type that maps onto one of the four scalar value kinds.
///
/// This trait is sealed: it is implemented for exactly `i64`, `f64`,
/// `bool` and `String`, mirroring the closed [`Value`] union. Typed store
/// access ([`Store::get`](crate::Store::get) and
/// [`Store::get_mut`](crate::Store::get_mut)) is parameterized over it,
/// so requesting any other type is a compile error rather than a runtime
/// one.
///
/// The `Default` bound supplies the initial contents of a value node
/// created by write access (`0`, `0.0`, `false`, `""`).
pub trait Scalar: private::Sealed + Default {
    /// The kind tag this type projects from.
    fn kind() -> Kind;

    /// Borrow the payload out of a value of the matching kind.
    fn from_value(value: &Value) -> Option<&Self>;

    /// Mutably borrow the payload out of a value of the matching kind.
    fn from_value_mut(value: &mut Value) -> Option<&mut Self>;

    /// Wrap this into a value node payload.
    fn into_value(self) -> Value;
}

impl Scalar for i64 {
    fn kind() -> Kind {
        Kind::Integer
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Integer(v) => Some(v),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Integer(v) => Some(v),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Integer(self)
    }
}

impl Scalar for f64 {
    fn kind() -> Kind {
        Kind::Float
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Float(v) => Some(v),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Float(v) => Some(v),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl Scalar for bool {
    fn kind() -> Kind {
        Kind::Boolean
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Boolean(v) => Some(v),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::Boolean(v) => Some(v),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Boolean(self)
    }
}

impl Scalar for String {
    fn kind() -> Kind {
        Kind::String
    }

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut Value) -> Option<&mut Self> {
        match value {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }
}
