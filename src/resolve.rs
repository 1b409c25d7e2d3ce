use crate::classify::Val;
use crate::invocable::Invocable;
use crate::list::{HCons, HNil};
use crate::seq::{IntConst, IntSeq};

/// Computes the canonical substituted argument list.
///
/// Walking the classified list front to back, a plain `Val<T>` resolves to
/// `T` and every sequence marker resolves to `IntConst<0>`: the
/// representative constant. Value 0 is chosen because it exists for every
/// sequence, including an empty one, and because the result type of a
/// well-formed callable does not depend on which constant is picked (one
/// generic [`Invocable`] impl has one `Output`). The canonical list is what
/// [`invoke`](crate::invoke) requires the callable to accept, so a callable
/// that cannot handle it is rejected at the call site, at compile time.
pub trait Resolve {
    /// The argument list with every position resolved.
    type Canonical;
}

impl Resolve for HNil {
    type Canonical = HNil;
}

impl<T, Tail: Resolve> Resolve for HCons<Val<T>, Tail> {
    type Canonical = HCons<T, Tail::Canonical>;
}

impl<L, Tail: Resolve> Resolve for HCons<IntSeq<L>, Tail> {
    type Canonical = HCons<IntConst<0>, Tail::Canonical>;
}

/// The canonical substituted list for the argument list `A`.
pub type Canonical<A> = <A as Resolve>::Canonical;

/// The result type one invocation of `F` produces for the argument list `A`.
///
/// Reference outputs stay references; nothing is decayed on the way to the
/// result container.
pub type Output<F, A> = <F as Invocable<Canonical<A>>>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ints;

    fn assert_canonical<A, Expected>()
    where
        A: Resolve<Canonical = Expected>,
    {
    }

    #[test]
    fn empty_list_resolves_to_itself() {
        assert_canonical::<HNil, HNil>();
    }

    #[test]
    fn plain_arguments_are_unwrapped() {
        assert_canonical::<HCons<Val<i64>, HNil>, HCons<i64, HNil>>();
    }

    #[test]
    fn sequences_resolve_to_the_representative_constant() {
        assert_canonical::<
            HCons<Val<i64>, HCons<IntSeq<Ints!(1, 2, 3)>, HNil>>,
            HCons<i64, HCons<IntConst<0>, HNil>>,
        >();
    }

    #[test]
    fn empty_sequences_resolve_too() {
        assert_canonical::<HCons<IntSeq<Ints!()>, HNil>, HCons<IntConst<0>, HNil>>();
    }
}
