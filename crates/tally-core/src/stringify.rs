//! Compile-time query for whether a value can be rendered as text.
//!
//! Every operand handed to a check implements [`Stringify`]. The associated
//! [`Stringify::CAN_STRINGIFY`] constant answers "can this type be printed?"
//! at compile time, so a check on a non-renderable type pays nothing for
//! diagnostics it cannot produce and the branch on the constant folds away.
//!
//! Types opt in with [`impl_stringify_display!`](crate::impl_stringify_display)
//! when they implement `Display`, or declare themselves unprintable with
//! [`impl_opaque!`](crate::impl_opaque). Values of foreign types can be
//! wrapped in [`Opaque`] on the spot.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Sub};
use std::rc::Rc;
use std::sync::Arc;

/// Text produced when a non-renderable value is stringified anyway.
pub const OPAQUE_PLACEHOLDER: &str = "<unprintable>";

/// Text produced for an absent optional value.
pub const NONE_PLACEHOLDER: &str = "(none)";

/// Textual rendering capability, resolved per type.
pub trait Stringify {
    /// Whether [`Stringify::stringify`] yields a meaningful rendering.
    const CAN_STRINGIFY: bool;

    /// Renders the value. Non-renderable types return
    /// [`OPAQUE_PLACEHOLDER`]; checks never call this unless
    /// [`Stringify::CAN_STRINGIFY`] holds.
    fn stringify(&self) -> String;
}

/// Implements [`Stringify`] for types that render through `Display`.
#[macro_export]
macro_rules! impl_stringify_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::stringify::Stringify for $ty {
                const CAN_STRINGIFY: bool = true;

                fn stringify(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )*
    };
}

/// Implements [`Stringify`] for types that have no textual rendering.
#[macro_export]
macro_rules! impl_opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::stringify::Stringify for $ty {
                const CAN_STRINGIFY: bool = false;

                fn stringify(&self) -> ::std::string::String {
                    ::std::string::String::from($crate::stringify::OPAQUE_PLACEHOLDER)
                }
            }
        )*
    };
}

impl_stringify_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    str,
);

impl Stringify for () {
    const CAN_STRINGIFY: bool = true;

    fn stringify(&self) -> String {
        "()".to_string()
    }
}

impl Stringify for Cow<'_, str> {
    const CAN_STRINGIFY: bool = true;

    fn stringify(&self) -> String {
        self.as_ref().to_string()
    }
}

impl<T: Stringify + ?Sized> Stringify for &T {
    const CAN_STRINGIFY: bool = T::CAN_STRINGIFY;

    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringify + ?Sized> Stringify for &mut T {
    const CAN_STRINGIFY: bool = T::CAN_STRINGIFY;

    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringify + ?Sized> Stringify for Box<T> {
    const CAN_STRINGIFY: bool = T::CAN_STRINGIFY;

    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringify + ?Sized> Stringify for Rc<T> {
    const CAN_STRINGIFY: bool = T::CAN_STRINGIFY;

    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringify + ?Sized> Stringify for Arc<T> {
    const CAN_STRINGIFY: bool = T::CAN_STRINGIFY;

    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringify> Stringify for Option<T> {
    const CAN_STRINGIFY: bool = T::CAN_STRINGIFY;

    fn stringify(&self) -> String {
        match self {
            Some(value) => value.stringify(),
            None => NONE_PLACEHOLDER.to_string(),
        }
    }
}

/// Returns whether the type of `value` is renderable.
pub const fn can_stringify<T: Stringify + ?Sized>(_value: &T) -> bool {
    T::CAN_STRINGIFY
}

/// Renders `value`, or returns `fallback` when its type is not renderable.
pub fn stringify_or<T: Stringify + ?Sized>(value: &T, fallback: &str) -> String {
    if T::CAN_STRINGIFY {
        value.stringify()
    } else {
        fallback.to_string()
    }
}

/// Returns true when both operand types are renderable.
pub const fn both_renderable<A: Stringify + ?Sized, B: Stringify + ?Sized>() -> bool {
    A::CAN_STRINGIFY && B::CAN_STRINGIFY
}

/// Returns true when all three operand types are renderable.
pub const fn all_renderable3<A, B, C>() -> bool
where
    A: Stringify + ?Sized,
    B: Stringify + ?Sized,
    C: Stringify + ?Sized,
{
    A::CAN_STRINGIFY && B::CAN_STRINGIFY && C::CAN_STRINGIFY
}

/// Wrapper marking a value as non-renderable while forwarding comparison
/// and arithmetic to the inner value.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Opaque<T>(
    /// The wrapped value.
    pub T,
);

impl<T> Opaque<T> {
    /// Unwraps the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Stringify for Opaque<T> {
    const CAN_STRINGIFY: bool = false;

    fn stringify(&self) -> String {
        OPAQUE_PLACEHOLDER.to_string()
    }
}

impl<T> fmt::Debug for Opaque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Opaque(..)")
    }
}

impl<T: PartialOrd> PartialOrd for Opaque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: Add<U>, U> Add<Opaque<U>> for Opaque<T> {
    type Output = Opaque<T::Output>;

    fn add(self, rhs: Opaque<U>) -> Self::Output {
        Opaque(self.0 + rhs.0)
    }
}

impl<T: Sub<U>, U> Sub<Opaque<U>> for Opaque<T> {
    type Output = Opaque<T::Output>;

    fn sub(self, rhs: Opaque<U>) -> Self::Output {
        Opaque(self.0 - rhs.0)
    }
}

impl<T: Div<U>, U> Div<Opaque<U>> for Opaque<T> {
    type Output = Opaque<T::Output>;

    fn div(self, rhs: Opaque<U>) -> Self::Output {
        Opaque(self.0 / rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Handle;
    crate::impl_opaque!(Handle);

    #[test]
    fn primitives_render() {
        assert!(can_stringify(&5_i32));
        assert_eq!(10.0_f64.stringify(), "10");
        assert_eq!(0.1_f64.stringify(), "0.1");
        assert_eq!("abc".stringify(), "abc");
    }

    #[test]
    fn opaque_types_do_not_render() {
        assert!(!can_stringify(&Handle));
        assert!(!can_stringify(&Opaque(3)));
        assert_eq!(stringify_or(&Handle, "given value"), "given value");
        assert_eq!(stringify_or(&7_u8, "given value"), "7");
    }

    #[test]
    fn capability_follows_wrappers() {
        assert!(<Option<&i32> as Stringify>::CAN_STRINGIFY);
        assert!(!<Option<Opaque<i32>> as Stringify>::CAN_STRINGIFY);
        assert_eq!(None::<i32>.stringify(), NONE_PLACEHOLDER);
        assert!(both_renderable::<i32, &str>());
        assert!(!all_renderable3::<i32, Handle, f64>());
    }

    #[test]
    fn opaque_forwards_arithmetic() {
        let sum = Opaque(2.0_f64) + Opaque(0.5_f64);
        assert!(sum == Opaque(2.5));
        assert!(Opaque(1) < Opaque(2));
    }
}
