//! Fluent transformation combinators for ordered sequences.
//!
//! [`Sequence`] wraps an ordered, insertion-order-preserving collection and exposes
//! pipeline-style combinators (`map`, `filter`, `reduce`, `for_each`) that each return a new
//! value, never mutating the receiver.
//!
//! ```
//! use seqtools::{seq, Sequence};
//!
//! let evens = seq![1, 2, 3, 4]
//!     .map(|x| x * 2)
//!     .filter(|&x| x > 4);
//!
//! assert_eq!(evens, Sequence::from_values([6, 8]));
//! assert_eq!(evens.to_string(), "[6, 8]");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod error;
mod sequence;

pub use self::{error::InvalidCount, sequence::Sequence};

/// Creates a [`Sequence`] containing the given values, in order.
///
/// ```
/// use seqtools::seq;
///
/// let seq = seq![1, 2, 3];
/// assert_eq!(seq.len(), 3);
///
/// let empty: seqtools::Sequence<u32> = seq![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($($val:expr),+ $(,)?) => {
        $crate::Sequence::from_values([$($val),+])
    };
}
