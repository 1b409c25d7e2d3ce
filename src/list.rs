/// The empty argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HNil;

/// A heterogeneous argument list holding `head` followed by the list `tail`.
///
/// Argument lists are built with [`args!`](crate::args) and taken apart with
/// [`unpack!`](crate::unpack); the fields are public so plain struct patterns
/// work too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

/// Pushes an element onto the back of a heterogeneous list.
///
/// The enumeration drivers walk the argument list front to back, moving each
/// processed argument onto an already-resolved list. Appending at the back
/// keeps every argument in its original position by the time the callable
/// sees the list.
pub trait Append<X> {
    /// The list with `X` at the back.
    type Output;

    fn append(self, item: X) -> Self::Output;
}

impl<X> Append<X> for HNil {
    type Output = HCons<X, HNil>;

    fn append(self, item: X) -> Self::Output {
        HCons {
            head: item,
            tail: HNil,
        }
    }
}

impl<X, H, T: Append<X>> Append<X> for HCons<H, T> {
    type Output = HCons<H, T::Output>;

    fn append(self, item: X) -> Self::Output {
        HCons {
            head: self.head,
            tail: self.tail.append(item),
        }
    }
}

/// The result of appending `X` to the list `L`.
pub type Appended<L, X> = <L as Append<X>>::Output;

/// Destructures an argument list in pattern position.
///
/// This is the pattern-side mirror of [`args!`](crate::args), for use inside
/// [`Invocable::invoke`](crate::Invocable::invoke).
///
/// # Example
///
/// ```
/// use seqcall::{unpack, HCons, HNil};
///
/// let list = HCons { head: 1_i64, tail: HCons { head: "x", tail: HNil } };
/// let unpack!(n, s) = list;
/// assert_eq!((n, s), (1, "x"));
/// ```
#[macro_export]
macro_rules! unpack {
    () => { $crate::HNil };
    ($head:pat $(, $rest:pat)* $(,)?) => {
        $crate::HCons { head: $head, tail: $crate::unpack!($($rest),*) }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let list = HNil.append(1_i32).append("two").append(3.0_f64);
        let unpack!(a, b, c) = list;
        assert_eq!(a, 1);
        assert_eq!(b, "two");
        assert!((c - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn append_to_empty() {
        let list = HNil.append(9_u8);
        assert_eq!(list, HCons { head: 9_u8, tail: HNil });
    }
}
