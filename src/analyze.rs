use typenum::{Bit, B0, B1};

use crate::classify::Val;
use crate::list::{HCons, HNil};
use crate::seq::{IntList, IntSeq};

/// Counts invocations and detects sequence arguments, from types alone.
///
/// `COUNT` is the product of every sequence argument's length (1 for a list
/// with no sequences, including the empty list); any zero-length sequence
/// absorbs the product to 0. Presence is reported twice: `HAS_SEQ` for value
/// code, and the type-level bit `HasSeq`, which is what lets
/// [`invoke`](crate::invoke) return a bare result for sequence-free argument
/// lists and a container otherwise.
pub trait Analyze {
    /// [`B1`] iff at least one argument is a sequence marker.
    type HasSeq: Bit;

    /// Total number of invocations the argument list requires.
    const COUNT: usize;

    /// Whether any argument is a sequence marker.
    const HAS_SEQ: bool = <Self::HasSeq as Bit>::BOOL;
}

impl Analyze for HNil {
    type HasSeq = B0;

    const COUNT: usize = 1;
}

impl<T, Tail: Analyze> Analyze for HCons<Val<T>, Tail> {
    type HasSeq = Tail::HasSeq;

    const COUNT: usize = Tail::COUNT;
}

impl<L: IntList, Tail: Analyze> Analyze for HCons<IntSeq<L>, Tail> {
    type HasSeq = B1;

    const COUNT: usize = L::LEN * Tail::COUNT;
}

/// Returns how many times [`invoke`](crate::invoke) would call the callable
/// for this argument list.
///
/// # Example
///
/// ```
/// use seqcall::{args, ints, invocation_count};
///
/// assert_eq!(invocation_count(&args![10_i64, ints![1, 2, 3]]), 3);
/// assert_eq!(invocation_count(&args![ints![0, 1], ints![10, 20]]), 4);
/// assert_eq!(invocation_count(&args!["plain"]), 1);
/// assert_eq!(invocation_count(&args![ints![], ints![1, 2]]), 0);
/// ```
#[must_use]
pub fn invocation_count<A: Analyze>(_args: &A) -> usize {
    A::COUNT
}

/// Returns whether the argument list contains any sequence argument.
#[must_use]
pub fn contains_sequence<A: Analyze>(_args: &A) -> bool {
    A::HAS_SEQ
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args, ints};

    #[test]
    fn empty_list_counts_one() {
        assert_eq!(invocation_count(&args![]), 1);
        assert!(!contains_sequence(&args![]));
    }

    #[test]
    fn plain_arguments_do_not_multiply() {
        let list = args![1_u8, "two", 3.0_f32];
        assert_eq!(invocation_count(&list), 1);
        assert!(!contains_sequence(&list));
    }

    #[test]
    fn sequence_lengths_multiply() {
        assert_eq!(invocation_count(&args![ints![1, 2, 3]]), 3);
        assert_eq!(invocation_count(&args![ints![1, 2], 0_i64, ints![5, 6, 7]]), 6);
        assert!(contains_sequence(&args![0_i64, ints![1]]));
    }

    #[test]
    fn zero_length_sequence_absorbs_the_product() {
        assert_eq!(invocation_count(&args![ints![], ints![1, 2, 3]]), 0);
        assert_eq!(invocation_count(&args![ints![1, 2, 3], ints![]]), 0);
        assert!(contains_sequence(&args![ints![]]));
    }
}
