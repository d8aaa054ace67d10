use std::{fmt, slice};

use smallvec::SmallVec;

use crate::InvalidCount;

/// Elements stored inline before spilling to the heap.
pub(crate) const INLINE_CAP: usize = 8;

/// An ordered, insertion-order-preserving sequence with fluent transformation combinators.
///
/// Every combinator reads the receiver and returns a fresh sequence (or a reduced scalar); a
/// `Sequence` is never mutated after construction. Insertion order is significant: it determines
/// [`map`](Self::map) output order, [`reduce`](Self::reduce) accumulation order, and iteration
/// order.
///
/// Short sequences are stored inline; longer ones spill to the heap transparently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<T> {
    items: SmallVec<[T; INLINE_CAP]>,
}

impl<T> Sequence<T> {
    /// Constructs an empty sequence.
    pub fn new() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    /// Constructs a sequence containing exactly the given values, in the given order.
    ///
    /// An empty source yields an empty sequence. See also the [`seq!`](crate::seq) macro for
    /// literal construction.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: values.into_iter().collect(),
        }
    }

    /// Constructs a sequence by invoking `producer` exactly `count` times, in order.
    ///
    /// A `count` of zero yields an empty sequence without invoking `producer`.
    ///
    /// ```
    /// use seqtools::Sequence;
    ///
    /// let seq = Sequence::generate(3, || "a");
    /// assert_eq!(seq.to_string(), "[a, a, a]");
    /// ```
    pub fn generate(count: usize, mut producer: impl FnMut() -> T) -> Self {
        let mut items = SmallVec::with_capacity(count);

        for _ in 0..count {
            items.push(producer());
        }

        Self { items }
    }

    /// Constructs a sequence by invoking `producer` exactly `count` times, rejecting negative
    /// counts.
    ///
    /// Intended for callers holding externally-sourced signed counts. Returns [`InvalidCount`]
    /// without invoking `producer` if `count` is negative; otherwise behaves like
    /// [`generate`](Self::generate).
    pub fn try_generate(
        count: i64,
        producer: impl FnMut() -> T,
    ) -> Result<Self, InvalidCount> {
        let count = usize::try_from(count).map_err(|_| InvalidCount::new(count))?;
        Ok(Self::generate(count, producer))
    }

    /// Returns the number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the element at `idx`, or `None` if out of bounds.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.items.get(idx)
    }

    /// Returns an iterator over the elements, in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a new sequence where element `i` is `transform(&self[i])`, evaluated in index
    /// order.
    ///
    /// The result has the same length as the receiver; the receiver is unchanged. Order of
    /// evaluation only matters if `transform` has observable side effects.
    ///
    /// ```
    /// use seqtools::seq;
    ///
    /// let doubled = seq![1, 2, 3].map(|x| x * 2);
    /// assert_eq!(doubled.to_string(), "[2, 4, 6]");
    /// ```
    pub fn map<V>(&self, transform: impl FnMut(&T) -> V) -> Sequence<V> {
        self.items.iter().map(transform).collect()
    }

    /// Folds the sequence left-to-right into a single value.
    ///
    /// Starts from `identity` and applies `accumulator` to each element in insertion order.
    /// Returns `identity` unchanged for an empty sequence.
    ///
    /// ```
    /// use seqtools::seq;
    ///
    /// let sum = seq![1, 2, 3, 4].reduce(0, |acc, x| acc + x);
    /// assert_eq!(sum, 10);
    /// ```
    pub fn reduce<U>(&self, identity: U, mut accumulator: impl FnMut(U, &T) -> U) -> U {
        let mut acc = identity;

        for item in &self.items {
            acc = accumulator(acc, item);
        }

        acc
    }

    /// Invokes `action` once per element, in insertion order, for its side effects.
    ///
    /// Does not construct a new sequence. If `action` panics mid-iteration, the panic propagates
    /// immediately and remaining elements are not visited; the receiver is left untouched either
    /// way, since it is only ever read.
    pub fn for_each(&self, action: impl FnMut(&T)) {
        self.items.iter().for_each(action);
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a new sequence containing, in original relative order, exactly those elements for
    /// which `predicate` returns true.
    ///
    /// Duplicates are preserved. An empty result is valid. The receiver is unchanged.
    ///
    /// ```
    /// use seqtools::{seq, Sequence};
    ///
    /// let kept = seq![1, 2, 3, 4].filter(|&x| x > 2);
    /// assert_eq!(kept, Sequence::from_values([3, 4]));
    /// ```
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Sequence<T> {
        let mut items = SmallVec::new();

        for item in &self.items {
            if predicate(item) {
                items.push(item.clone());
            }
        }

        Sequence { items }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the elements as a bracketed, comma-separated list, e.g. `[1, 2, 3]`.
///
/// Intended for debugging and logging; not a parseable format.
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{item}")?;
        }

        f.write_str("]")
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; INLINE_CAP]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}
