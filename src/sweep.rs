use core::ops::Add;

use generic_array::{sequence::Concat, ArrayLength, GenericArray};
use typenum::{Sum, U0, U1};

use crate::classify::Val;
use crate::invocable::Invocable;
use crate::list::{Append, Appended, HCons, HNil};
use crate::seq::{Cons, IntConst, IntSeq, Nil};

/// Enumerates every combination and collects the results.
///
/// The pending argument list is walked front to back while resolved
/// arguments accumulate on `Done` in their original order. A sequence
/// argument fans out: the block of results for its first value comes first,
/// followed by the blocks for the remaining values, so the left-most
/// sequence varies slowest and the right-most fastest — index `i * L2 + j`
/// holds the combination of the `i`-th value of the first sequence with the
/// `j`-th of the second, and so on for deeper nestings.
///
/// The container is assembled by concatenating those blocks, with the length
/// tracked as a type-level sum. Every slot is therefore written by its own
/// invocation — there is no pre-filled seed value, so the result type needs
/// neither `Default` nor `Clone`. An empty sequence contributes an empty
/// block without invoking the callable at all, which collapses the whole
/// container to length 0.
///
/// Plain arguments are cloned once per fan-out so each combination receives
/// them in their original positions; borrow instead of moving when cloning
/// is unwanted.
pub trait Sweep<F, Done> {
    /// Element type of the result container.
    type Item;

    /// Container length: the product of the pending sequence lengths.
    type Size: ArrayLength;

    fn sweep(self, done: Done, f: &mut F) -> GenericArray<Self::Item, Self::Size>;
}

/// All arguments resolved: one invocation, one-element block.
impl<F, Done> Sweep<F, Done> for HNil
where
    F: Invocable<Done>,
{
    type Item = F::Output;
    type Size = U1;

    fn sweep(self, done: Done, f: &mut F) -> GenericArray<Self::Item, Self::Size> {
        GenericArray::from([f.invoke(done)])
    }
}

/// A plain argument moves onto the resolved list unchanged.
impl<F, Done, T, Tail> Sweep<F, Done> for HCons<Val<T>, Tail>
where
    Done: Append<T>,
    Tail: Sweep<F, Appended<Done, T>>,
{
    type Item = <Tail as Sweep<F, Appended<Done, T>>>::Item;
    type Size = <Tail as Sweep<F, Appended<Done, T>>>::Size;

    fn sweep(self, done: Done, f: &mut F) -> GenericArray<Self::Item, Self::Size> {
        self.tail.sweep(done.append(self.head.0), f)
    }
}

/// An exhausted sequence: empty block, no invocation.
///
/// The element type is still derived, by resolving this position to the
/// representative constant, so a length-0 container is fully typed without
/// the callable ever running.
impl<F, Done, Tail> Sweep<F, Done> for HCons<IntSeq<Nil>, Tail>
where
    Done: Append<IntConst<0>>,
    Tail: Sweep<F, Appended<Done, IntConst<0>>>,
{
    type Item = <Tail as Sweep<F, Appended<Done, IntConst<0>>>>::Item;
    type Size = U0;

    fn sweep(self, _done: Done, _f: &mut F) -> GenericArray<Self::Item, Self::Size> {
        GenericArray::from([])
    }
}

/// A sequence with at least one value: block for `V`, then the rest.
impl<F, Done, const V: i64, Rest, Tail> Sweep<F, Done> for HCons<IntSeq<Cons<V, Rest>>, Tail>
where
    Done: Clone + Append<IntConst<V>>,
    Tail: Clone + Sweep<F, Appended<Done, IntConst<V>>>,
    HCons<IntSeq<Rest>, Tail>:
        Sweep<F, Done, Item = <Tail as Sweep<F, Appended<Done, IntConst<V>>>>::Item>,
    <Tail as Sweep<F, Appended<Done, IntConst<V>>>>::Size:
        Add<<HCons<IntSeq<Rest>, Tail> as Sweep<F, Done>>::Size>,
    Sum<
        <Tail as Sweep<F, Appended<Done, IntConst<V>>>>::Size,
        <HCons<IntSeq<Rest>, Tail> as Sweep<F, Done>>::Size,
    >: ArrayLength,
{
    type Item = <Tail as Sweep<F, Appended<Done, IntConst<V>>>>::Item;
    type Size = Sum<
        <Tail as Sweep<F, Appended<Done, IntConst<V>>>>::Size,
        <HCons<IntSeq<Rest>, Tail> as Sweep<F, Done>>::Size,
    >;

    fn sweep(self, done: Done, f: &mut F) -> GenericArray<Self::Item, Self::Size> {
        let HCons { head: _, tail } = self;
        let rest = HCons {
            head: IntSeq::<Rest>::new(),
            tail: tail.clone(),
        };
        let block = tail.sweep(done.clone().append(IntConst::<V>), f);
        block.concat(rest.sweep(done, f))
    }
}

/// Enumerates every combination purely for the callable's side effects.
///
/// Same order as [`Sweep`], no container and no index bookkeeping: each leaf
/// invokes the callable and discards the result. This is the path
/// [`invoke_for_effect`](crate::invoke_for_effect) takes, and the natural
/// home for callables whose output is `()`.
pub trait SweepEffect<F, Done> {
    fn sweep_effect(self, done: Done, f: &mut F);
}

impl<F, Done> SweepEffect<F, Done> for HNil
where
    F: Invocable<Done>,
{
    fn sweep_effect(self, done: Done, f: &mut F) {
        f.invoke(done);
    }
}

impl<F, Done, T, Tail> SweepEffect<F, Done> for HCons<Val<T>, Tail>
where
    Done: Append<T>,
    Tail: SweepEffect<F, Appended<Done, T>>,
{
    fn sweep_effect(self, done: Done, f: &mut F) {
        self.tail.sweep_effect(done.append(self.head.0), f);
    }
}

impl<F, Done, Tail> SweepEffect<F, Done> for HCons<IntSeq<Nil>, Tail> {
    fn sweep_effect(self, _done: Done, _f: &mut F) {}
}

impl<F, Done, const V: i64, Rest, Tail> SweepEffect<F, Done> for HCons<IntSeq<Cons<V, Rest>>, Tail>
where
    Done: Clone + Append<IntConst<V>>,
    Tail: Clone + SweepEffect<F, Appended<Done, IntConst<V>>>,
    HCons<IntSeq<Rest>, Tail>: SweepEffect<F, Done>,
{
    fn sweep_effect(self, done: Done, f: &mut F) {
        let HCons { head: _, tail } = self;
        let rest = HCons {
            head: IntSeq::<Rest>::new(),
            tail: tail.clone(),
        };
        tail.sweep_effect(done.clone().append(IntConst::<V>), f);
        rest.sweep_effect(done, f);
    }
}
