//! # Core Type Machinery

use core::fmt::{Debug, Display};
use core::hash::Hash;

use num_traits::{NumCast, PrimInt, Unsigned};

/// Hash map used throughout the crate.
///
/// `ahash` is a performance win over the default hasher on most modern CPUs.
/// Nothing in the crate depends on hash iteration order; id assignment comes
/// from sorting, not from map layout.
pub type WbHashMap<K, V> = ahash::AHashMap<K, V>;

/// Trait bound for token id types.
///
/// Any unsigned primitive integer qualifies; vocabularies larger than the
/// chosen type can index fail at build/load time rather than wrapping.
pub trait TokenType:
    PrimInt + Unsigned + Display + Debug + Hash + Send + Sync + 'static
{
    /// Cast a vocabulary index to a token id.
    ///
    /// ## Returns
    /// `None` when the index does not fit in `Self`.
    fn from_index(index: usize) -> Option<Self> {
        NumCast::from(index)
    }

    /// Cast a token id to a vocabulary index.
    fn to_index(self) -> Option<usize> {
        self.to_usize()
    }
}

impl<T> TokenType for T where
    T: PrimInt + Unsigned + Display + Debug + Hash + Send + Sync + 'static
{
}
