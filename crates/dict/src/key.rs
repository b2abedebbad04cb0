//! External key conversion.
//!
//! A [`DictKey`] is anything that renders to a string key and has a notion of
//! truthiness. Falsy keys (empty strings, zero, NaN, `false`, `None`) are
//! rejected when inserting, but lookups accept any key.
//!
//! Numbers render through Rust's `Display`: floats print in full positional
//! form (`1e21` becomes `1000000000000000000000`), infinities as `inf`, and
//! negative zero as `-0`.

use std::borrow::Cow;

pub trait DictKey {
    /// External (un-namespaced) string form of the key.
    fn to_key(&self) -> Cow<'_, str>;

    /// Whether this key may be used with [`crate::Dict::set`].
    fn is_truthy(&self) -> bool;
}

impl<T: DictKey + ?Sized> DictKey for &T {
    fn to_key(&self) -> Cow<'_, str> { (**self).to_key() }
    fn is_truthy(&self) -> bool { (**self).is_truthy() }
}

impl DictKey for str {
    fn to_key(&self) -> Cow<'_, str> { Cow::Borrowed(self) }
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl DictKey for String {
    fn to_key(&self) -> Cow<'_, str> { Cow::Borrowed(self.as_str()) }
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl DictKey for Cow<'_, str> {
    fn to_key(&self) -> Cow<'_, str> { Cow::Borrowed(self.as_ref()) }
    fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl DictKey for char {
    fn to_key(&self) -> Cow<'_, str> { Cow::Owned(self.to_string()) }
    fn is_truthy(&self) -> bool { true }
}

impl DictKey for bool {
    fn to_key(&self) -> Cow<'_, str> { Cow::Borrowed(if *self { "true" } else { "false" }) }
    fn is_truthy(&self) -> bool { *self }
}

macro_rules! int_key {
    ($($t:ty),*) => {
        $(
            impl DictKey for $t {
                fn to_key(&self) -> Cow<'_, str> { Cow::Owned(self.to_string()) }
                fn is_truthy(&self) -> bool { *self != 0 }
            }
        )*
    };
}

int_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_key {
    ($($t:ty),*) => {
        $(
            impl DictKey for $t {
                fn to_key(&self) -> Cow<'_, str> { Cow::Owned(self.to_string()) }
                fn is_truthy(&self) -> bool { *self != 0.0 && !self.is_nan() }
            }
        )*
    };
}

float_key!(f32, f64);

impl<T: DictKey> DictKey for Option<T> {
    fn to_key(&self) -> Cow<'_, str> {
        match self {
            Some(inner) => inner.to_key(),
            None => Cow::Borrowed("null"),
        }
    }

    fn is_truthy(&self) -> bool { self.as_ref().is_some_and(DictKey::is_truthy) }
}
