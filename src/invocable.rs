/// A callable that can be invoked with one substituted argument list.
///
/// `Args` is the heterogeneous list the callable receives for one
/// combination: plain arguments appear as their own types in their original
/// positions, and each sequence argument appears as an
/// [`IntConst`](crate::IntConst). Because a different constant is a
/// different type, implementations are written generically over
/// `const V: i64` parameters — one impl per argument shape, covering every
/// combination. A single generic impl has a single `Output`, which is what
/// guarantees the result type does not depend on which constant was
/// substituted.
///
/// `invoke` takes `&mut self` so a callable can accumulate state across the
/// combinations, the way an `FnMut` closure would.
///
/// # Example
///
/// ```
/// use seqcall::{args, ints, invoke, unpack, HCons, HNil, IntConst, Invocable};
///
/// struct AddBase;
///
/// impl<const K: i64> Invocable<HCons<i64, HCons<IntConst<K>, HNil>>> for AddBase {
///     type Output = i64;
///
///     fn invoke(&mut self, args: HCons<i64, HCons<IntConst<K>, HNil>>) -> i64 {
///         let unpack!(base, _k) = args;
///         base + K
///     }
/// }
///
/// let results = invoke(&mut AddBase, args![10_i64, ints![1, 2, 3]]);
/// assert_eq!(results.as_slice(), &[11, 12, 13][..]);
/// ```
pub trait Invocable<Args> {
    /// The result of one invocation.
    ///
    /// May be a reference type; reference results are preserved as-is, both
    /// for the bare single-call result and as container elements.
    type Output;

    fn invoke(&mut self, args: Args) -> Self::Output;
}

/// Calling through a mutable reference invokes the referent.
impl<F, Args> Invocable<Args> for &mut F
where
    F: Invocable<Args>,
{
    type Output = F::Output;

    fn invoke(&mut self, args: Args) -> Self::Output {
        (**self).invoke(args)
    }
}
