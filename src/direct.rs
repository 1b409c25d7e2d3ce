use crate::classify::Val;
use crate::invocable::Invocable;
use crate::list::{Append, Appended, HCons, HNil};

/// Performs exactly one invocation, arguments in their original order.
///
/// This is the path [`invoke`](crate::invoke) takes when no argument is a
/// sequence marker: the pending list is walked front to back, each plain
/// argument is moved onto the resolved `Done` list, and the callable runs
/// once at the end. Nothing is cloned and the result is returned exactly as
/// the callable produced it, references included, so move-only arguments and
/// non-`Clone` results work on this path.
pub trait DirectCall<F, Done> {
    /// The callable's result for the fully resolved list.
    type Output;

    fn call_direct(self, done: Done, f: &mut F) -> Self::Output;
}

impl<F, Done> DirectCall<F, Done> for HNil
where
    F: Invocable<Done>,
{
    type Output = F::Output;

    fn call_direct(self, done: Done, f: &mut F) -> Self::Output {
        f.invoke(done)
    }
}

impl<F, Done, T, Tail> DirectCall<F, Done> for HCons<Val<T>, Tail>
where
    Done: Append<T>,
    Tail: DirectCall<F, Appended<Done, T>>,
{
    type Output = <Tail as DirectCall<F, Appended<Done, T>>>::Output;

    fn call_direct(self, done: Done, f: &mut F) -> Self::Output {
        self.tail.call_direct(done.append(self.head.0), f)
    }
}
