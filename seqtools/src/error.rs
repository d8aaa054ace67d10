use derive_more::{Display, Error};

/// Error returned from [`Sequence::try_generate()`](crate::Sequence::try_generate).
#[derive(Debug, Display, Error)]
#[display("invalid element count: {count}")]
#[non_exhaustive]
pub struct InvalidCount {
    /// The rejected count.
    pub count: i64,
}

impl InvalidCount {
    pub(crate) fn new(count: i64) -> Self {
        Self { count }
    }
}
