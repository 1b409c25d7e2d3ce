//! Invoke a callable once for every combination of compile-time integer
//! sequence arguments.
//!
//! An argument list built with [`args!`] may mix plain values with
//! [`ints!`] sequence markers. [`invoke`] calls the callable for the
//! cartesian product of the sequences, substituting an [`IntConst`] for each
//! sequence position, and collects the results into a fixed-size
//! [`GenericArray`] whose length is known at compile time. Plain arguments
//! reach every call unchanged and in their original positions. With no
//! sequence argument the callable runs exactly once and its result comes
//! back bare; with a zero-length sequence it never runs at all and the
//! container is empty.
//!
//! Everything is decided from types: which arguments are sequences, how many
//! invocations happen, the result type, and the container length. There is
//! no runtime dispatch and no failure mode other than a compile error.
//!
//! # Example
//!
//! ```
//! use seqcall::{args, ints, invoke, unpack, HCons, HNil, IntConst, Invocable};
//!
//! struct AddBase;
//!
//! impl<const K: i64> Invocable<HCons<i64, HCons<IntConst<K>, HNil>>> for AddBase {
//!     type Output = i64;
//!
//!     fn invoke(&mut self, args: HCons<i64, HCons<IntConst<K>, HNil>>) -> i64 {
//!         let unpack!(base, _k) = args;
//!         base + K
//!     }
//! }
//!
//! let results = invoke(&mut AddBase, args![10_i64, ints![1, 2, 3]]);
//! assert_eq!(results.as_slice(), &[11, 12, 13][..]);
//! ```
//!
//! Callables are written as [`Invocable`] impls generic over `const` `i64`
//! parameters — a generic impl is the Rust spelling of "accepts any constant
//! from the sequence", and its single `Output` is what keeps the result type
//! uniform across combinations. Enumeration order is fixed: the left-most
//! sequence varies slowest, the right-most fastest, exactly as nested loops
//! would iterate. [`invoke_for_effect`] runs the same enumeration without
//! collecting anything, for callables that only have side effects.

mod analyze;
mod classify;
mod direct;
mod invocable;
mod invoke;
mod list;
mod resolve;
mod seq;
mod sweep;

pub use generic_array::GenericArray;

pub use analyze::{contains_sequence, invocation_count, Analyze};
pub use classify::{IntoArg, Val};
pub use direct::DirectCall;
pub use invocable::Invocable;
pub use invoke::{invoke, invoke_for_effect, Execute};
pub use list::{Append, Appended, HCons, HNil};
pub use resolve::{Canonical, Output, Resolve};
pub use seq::{Cons, IntConst, IntList, IntSeq, Nil};
pub use sweep::{Sweep, SweepEffect};
