/// Errors reported by the collections in this crate.
///
/// Every fallible operation checks its input before touching the structure,
/// so an `Err` always leaves the collection exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CollectionError {
    /// An absent element (`None`) was offered for insertion.
    #[error("cannot insert an absent element")]
    InvalidArgument,

    /// An element was requested from an empty collection.
    #[error("the collection is empty")]
    EmptyCollection,

    /// A cursor was moved past the end it was heading to.
    #[error("no element left in this direction")]
    NoSuchElement,

    /// A positional access fell outside of `0..len`.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = CollectionError> = std::result::Result<T, E>;
