use core::marker::PhantomData;

/// The empty compile-time integer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nil;

/// A compile-time integer list holding `V` followed by the list `Rest`.
///
/// Lists are zero-sized: the integers live entirely in the type. Use the
/// [`Ints!`](crate::Ints) macro instead of spelling the cons cells out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cons<const V: i64, Rest>(PhantomData<Rest>);

/// A compile-time list of `i64` values with a known length.
///
/// Implemented only by [`Nil`] and [`Cons`]; the trait is sealed because the
/// enumeration drivers match on those two shapes exhaustively.
///
/// # Example
///
/// ```
/// use seqcall::{IntList, Ints};
///
/// assert_eq!(<Ints!(1, 2, 3) as IntList>::LEN, 3);
/// assert_eq!(<Ints!() as IntList>::LEN, 0);
/// ```
pub trait IntList: sealed::Sealed {
    /// Number of values in the list.
    const LEN: usize;
}

impl IntList for Nil {
    const LEN: usize = 0;
}

impl<const V: i64, Rest: IntList> IntList for Cons<V, Rest> {
    const LEN: usize = 1 + Rest::LEN;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Nil {}
    impl<const V: i64, Rest: Sealed> Sealed for super::Cons<V, Rest> {}
}

/// Marks one argument position as a compile-time integer sequence.
///
/// An `IntSeq` is a zero-sized value; passing one to [`args!`](crate::args)
/// tells [`invoke`](crate::invoke) to call the callable once per value in
/// `L`, substituting an [`IntConst`] for this position each time. Build one
/// with [`ints!`](crate::ints).
pub struct IntSeq<L>(PhantomData<L>);

impl<L> IntSeq<L> {
    /// Creates the marker for the list `L`.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<L> Clone for IntSeq<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for IntSeq<L> {}

impl<L> Default for IntSeq<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> core::fmt::Debug for IntSeq<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("IntSeq")
    }
}

/// A single compile-time integer constant.
///
/// This is what a sequence argument becomes in one concrete invocation. The
/// value is available at the type level through the `V` parameter, so an
/// [`Invocable`](crate::Invocable) impl written generically over
/// `const V: i64` can use it in const positions, not just as a runtime
/// integer.
///
/// # Example
///
/// ```
/// use seqcall::IntConst;
///
/// let k = IntConst::<7>;
/// assert_eq!(IntConst::<7>::VALUE, 7);
/// assert_eq!(k.get(), 7);
/// assert_eq!(i64::from(k), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntConst<const V: i64>;

impl<const V: i64> IntConst<V> {
    /// The constant itself.
    pub const VALUE: i64 = V;

    /// Returns the constant as a runtime value.
    #[must_use]
    pub const fn get(self) -> i64 {
        V
    }
}

impl<const V: i64> From<IntConst<V>> for i64 {
    fn from(_: IntConst<V>) -> Self {
        V
    }
}

/// Names the compile-time integer list type for the given values.
///
/// # Example
///
/// ```
/// use seqcall::{IntList, IntSeq, Ints};
///
/// type Octaves = Ints!(-12, 0, 12);
/// let _marker: IntSeq<Octaves> = IntSeq::new();
/// assert_eq!(Octaves::LEN, 3);
/// ```
#[macro_export]
macro_rules! Ints {
    () => { $crate::Nil };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::Cons<{ $head }, $crate::Ints!($($rest),*)>
    };
}

/// Builds an [`IntSeq`] marker value from a list of integer constants.
///
/// # Example
///
/// ```
/// use seqcall::{ints, IntSeq, Ints};
///
/// let marker: IntSeq<Ints!(1, 2, 3)> = ints![1, 2, 3];
/// let _ = marker;
/// ```
#[macro_export]
macro_rules! ints {
    ($($v:expr),* $(,)?) => {
        <$crate::IntSeq<$crate::Ints!($($v),*)>>::new()
    };
}
