use crate::seq::IntSeq;

/// A plain (non-sequence) argument.
///
/// `Val` is what the classifier wraps around every argument that is not an
/// [`IntSeq`] marker. The wrapped value is forwarded to the callable
/// unchanged on every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Val<T>(pub T);

/// Classifies one argument as plain or sequence.
///
/// The blanket impl wraps any value in [`Val`]; [`IntSeq`] opts out through
/// an inherent `into_arg` that returns the marker unchanged. Method
/// resolution prefers the inherent method, so `arg.into_arg()` picks the
/// right classification without the caller naming it — this is the whole
/// sequence classifier. Any type the crate does not recognize is therefore a
/// plain argument.
pub trait IntoArg: Sized {
    /// The classified form of the argument.
    type Arg;

    fn into_arg(self) -> Self::Arg;
}

impl<T> IntoArg for T {
    type Arg = Val<T>;

    fn into_arg(self) -> Val<T> {
        Val(self)
    }
}

impl<L> IntSeq<L> {
    /// Keeps a sequence marker as-is during classification.
    ///
    /// Shadows [`IntoArg::into_arg`] for marker values.
    #[must_use]
    pub fn into_arg(self) -> Self {
        self
    }
}

/// Builds the argument list for [`invoke`](crate::invoke).
///
/// Each element is classified on the spot: [`IntSeq`] markers (from
/// [`ints!`](crate::ints)) stay sequence arguments, everything else becomes a
/// plain [`Val`] argument.
///
/// # Example
///
/// ```
/// use seqcall::{args, ints, HCons, HNil, IntSeq, Ints, Val};
///
/// let list = args![10_i64, ints![1, 2]];
/// let _: HCons<Val<i64>, HCons<IntSeq<Ints!(1, 2)>, HNil>> = list;
/// ```
#[macro_export]
macro_rules! args {
    () => { $crate::HNil };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::HCons {
            head: {
                use $crate::IntoArg as _;
                ($head).into_arg()
            },
            tail: $crate::args!($($rest),*),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ints, HCons, HNil};

    #[test]
    fn plain_values_are_wrapped() {
        let list = args!["hello", 3_u8];
        let _: HCons<Val<&str>, HCons<Val<u8>, HNil>> = list;
        assert_eq!(list.head, Val("hello"));
    }

    #[test]
    fn sequence_markers_are_not_wrapped() {
        fn assert_is_marker<L>(_: &IntSeq<L>) {}

        let list = args![ints![1, 2, 3]];
        assert_is_marker(&list.head);
    }

    #[test]
    fn references_classify_as_plain() {
        let data = vec![1, 2, 3];
        let list = args![&data];
        let Val(borrowed) = list.head;
        assert_eq!(borrowed, &data);
    }
}
