use generic_array::GenericArray;
use typenum::{Bit, B0, B1};

use crate::analyze::Analyze;
use crate::direct::DirectCall;
use crate::invocable::Invocable;
use crate::list::HNil;
use crate::resolve::{Canonical, Resolve};
use crate::sweep::{Sweep, SweepEffect};

/// Picks the execution shape from the analyzer's presence bit.
///
/// Sequence-free argument lists ([`B0`]) run [`DirectCall`] and hand the
/// single result back bare; lists with at least one sequence ([`B1`]) run
/// [`Sweep`] and hand back the container. The two impls are selected purely
/// by the type-level bit, which is how one `invoke` can have both return
/// shapes without runtime dispatch.
pub trait Execute<F, HasSeq: Bit> {
    /// What [`invoke`](crate::invoke) returns for this argument list.
    type Outcome;

    fn execute(self, f: &mut F) -> Self::Outcome;
}

impl<F, A> Execute<F, B0> for A
where
    A: DirectCall<F, HNil>,
{
    type Outcome = <A as DirectCall<F, HNil>>::Output;

    fn execute(self, f: &mut F) -> Self::Outcome {
        self.call_direct(HNil, f)
    }
}

impl<F, A> Execute<F, B1> for A
where
    A: Sweep<F, HNil>,
{
    type Outcome = GenericArray<<A as Sweep<F, HNil>>::Item, <A as Sweep<F, HNil>>::Size>;

    fn execute(self, f: &mut F) -> Self::Outcome {
        self.sweep(HNil, f)
    }
}

/// Invokes `f` once per combination of the sequence arguments in `args`.
///
/// The argument list comes from [`args!`](crate::args); sequence positions
/// are [`ints!`](crate::ints) markers. What comes back depends only on the
/// types in the list:
///
/// - no sequence argument — one invocation, its result returned bare
///   (references keep their identity);
/// - at least one sequence — a [`GenericArray`] whose length is the product
///   of the sequence lengths, slot `i` holding the result of combination `i`
///   with the left-most sequence varying slowest;
/// - some sequence empty — a length-0 container, the callable never runs.
///
/// A callable that cannot accept the substituted argument lists fails to
/// compile here; there is no runtime failure mode.
///
/// # Example
///
/// ```
/// use seqcall::{args, ints, invoke, HCons, HNil, IntConst, Invocable};
///
/// struct AddPair;
///
/// impl<const A: i64, const B: i64> Invocable<HCons<IntConst<A>, HCons<IntConst<B>, HNil>>>
///     for AddPair
/// {
///     type Output = i64;
///
///     fn invoke(&mut self, _args: HCons<IntConst<A>, HCons<IntConst<B>, HNil>>) -> i64 {
///         A + B
///     }
/// }
///
/// let sums = invoke(&mut AddPair, args![ints![0, 1], ints![10, 20]]);
/// assert_eq!(sums.as_slice(), &[10, 20, 11, 21][..]);
///
/// // Without sequence arguments the bare result comes back.
/// struct Halve;
///
/// impl Invocable<HCons<i64, HNil>> for Halve {
///     type Output = i64;
///
///     fn invoke(&mut self, args: HCons<i64, HNil>) -> i64 {
///         args.head / 2
///     }
/// }
///
/// assert_eq!(invoke(&mut Halve, args![84_i64]), 42);
/// ```
pub fn invoke<F, A>(f: &mut F, args: A) -> <A as Execute<F, <A as Analyze>::HasSeq>>::Outcome
where
    A: Analyze + Resolve + Execute<F, <A as Analyze>::HasSeq>,
    F: Invocable<Canonical<A>>,
{
    args.execute(f)
}

/// Invokes `f` once per combination, discarding results.
///
/// Runs the same enumeration as [`invoke`], in the same order, but builds no
/// container — each invocation happens purely for its side effects. This is
/// the entry point for callables whose output is `()`; outputs of other
/// types are dropped as they are produced.
///
/// # Example
///
/// ```
/// use seqcall::{args, ints, invoke_for_effect, HCons, HNil, IntConst, Invocable};
///
/// struct Recorder {
///     seen: Vec<i64>,
/// }
///
/// impl<const K: i64> Invocable<HCons<IntConst<K>, HNil>> for Recorder {
///     type Output = ();
///
///     fn invoke(&mut self, _args: HCons<IntConst<K>, HNil>) {
///         self.seen.push(K);
///     }
/// }
///
/// let mut recorder = Recorder { seen: Vec::new() };
/// invoke_for_effect(&mut recorder, args![ints![5, 6]]);
/// assert_eq!(recorder.seen, vec![5, 6]);
/// ```
pub fn invoke_for_effect<F, A>(f: &mut F, args: A)
where
    A: Resolve + SweepEffect<F, HNil>,
    F: Invocable<Canonical<A>>,
{
    args.sweep_effect(HNil, f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::HCons;
    use crate::seq::IntConst;
    use crate::{args, ints, unpack};

    struct AddBase {
        calls: usize,
    }

    impl<const K: i64> Invocable<HCons<i64, HCons<IntConst<K>, HNil>>> for AddBase {
        type Output = i64;

        fn invoke(&mut self, args: HCons<i64, HCons<IntConst<K>, HNil>>) -> i64 {
            self.calls += 1;
            let unpack!(base, _k) = args;
            base + K
        }
    }

    #[test]
    fn one_sequence_one_slot_per_value() {
        let mut add = AddBase { calls: 0 };
        let results = invoke(&mut add, args![10_i64, ints![1, 2, 3]]);

        assert_eq!(results.as_slice(), &[11, 12, 13][..]);
        assert_eq!(add.calls, 3);
    }

    #[test]
    fn empty_sequence_returns_empty_container_without_calling() {
        let mut add = AddBase { calls: 0 };
        let results = invoke(&mut add, args![10_i64, ints![]]);

        assert!(results.is_empty());
        assert_eq!(add.calls, 0);
    }

    struct TotalLen;

    impl Invocable<HCons<String, HCons<&'static str, HNil>>> for TotalLen {
        type Output = usize;

        fn invoke(&mut self, args: HCons<String, HCons<&'static str, HNil>>) -> usize {
            let unpack!(a, b) = args;
            a.len() + b.len()
        }
    }

    #[test]
    fn sequence_free_list_returns_the_bare_result() {
        let out = invoke(&mut TotalLen, args![String::from("abc"), "de"]);
        assert_eq!(out, 5);
    }

    struct NoArgs {
        calls: usize,
    }

    impl Invocable<HNil> for NoArgs {
        type Output = u8;

        fn invoke(&mut self, _args: HNil) -> u8 {
            self.calls += 1;
            7
        }
    }

    #[test]
    fn empty_argument_list_invokes_exactly_once() {
        let mut f = NoArgs { calls: 0 };
        assert_eq!(invoke(&mut f, args![]), 7);
        assert_eq!(f.calls, 1);
    }
}
