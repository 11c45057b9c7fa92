use thiserror::Error;

/// Caller-contract violations reported by the fallible list operations.
///
/// These are programming errors, not transient conditions: an operation that
/// returns an `Error` has not touched the list.
///
/// Note that value-based removal of an absent value is *not* an error; it is
/// a no-op and reported as `None` by [`remove_first`] and [`remove_value`].
///
/// [`remove_first`]: crate::List::remove_first
/// [`remove_value`]: crate::List::remove_value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A position was past the end of the list, or an offset-from-the-end
    /// was zero or larger than the list.
    #[error("position {0} is out of bounds")]
    OutOfBounds(usize),
    /// A checked cursor move would have crossed the ghost node.
    #[error("cannot move the cursor across the end of the list")]
    AtBoundary,
}
