//! Error handling.

use core::alloc::{Layout, LayoutError};
use core::fmt;

/// An enumeration of error types raised when storage cannot be obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// A memory allocation failed.
    AllocError(Layout),
    /// The requested capacity cannot be represented.
    CapacityOverflow,
    /// The provided layout was not allocatable.
    LayoutError(LayoutError),
}

impl StorageError {
    /// Generic description of this error.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllocError(_) => "Allocation error",
            Self::CapacityOverflow => "Capacity overflow",
            Self::LayoutError(_) => "Layout error",
        }
    }

    /// Generate a panic with this error as the reason.
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        if let Self::AllocError(layout) = self {
            alloc::alloc::handle_alloc_error(layout);
        } else {
            panic!("{}", self.as_str())
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LayoutError> for StorageError {
    fn from(err: LayoutError) -> Self {
        Self::LayoutError(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}

/// An error raised by checked access when the index is not within
/// the live elements of a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutOfRange {
    index: usize,
    length: usize,
}

impl OutOfRange {
    pub(crate) const fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// Generic description of this error.
    pub fn as_str(&self) -> &'static str {
        "Index out of range"
    }

    /// The rejected index.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The length of the collection when the index was rejected.
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Generate a panic with this error as the reason.
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}", self);
    }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: the index is {} but the length is {}",
            self.as_str(),
            self.index,
            self.length
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRange {}

/// An error raised by insertion operations when the insertion position
/// was invalid. Includes the value that was to be inserted.
#[derive(Clone)]
pub struct InsertionError<T> {
    pub(crate) error: OutOfRange,
    pub(crate) value: T,
}

impl<T> InsertionError<T> {
    pub(crate) fn new(error: OutOfRange, value: T) -> Self {
        Self { error, value }
    }

    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        "Insertion error"
    }

    /// Get a reference to the contained `OutOfRange`
    pub fn error(&self) -> &OutOfRange {
        &self.error
    }

    /// Unwrap the inner value of this error
    pub fn into_value(self) -> T {
        self.value
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        panic!("{}: {}", self.as_str(), self.error);
    }
}

impl<T> fmt::Debug for InsertionError<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertionError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertionError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}: {}", self.as_str(), self.error))
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for InsertionError<T> {}

#[cfg(test)]
mod tests {
    use super::{InsertionError, OutOfRange, StorageError};
    use alloc::string::ToString;
    use core::alloc::Layout;

    #[test]
    #[should_panic(expected = "Layout error")]
    fn layout_error_panic() {
        let err = Layout::from_size_align(0, 3).expect_err("expected layout error");
        let a = StorageError::LayoutError(err);
        a.panic();
    }

    #[test]
    #[should_panic(expected = "Capacity overflow")]
    fn capacity_overflow_panic() {
        StorageError::CapacityOverflow.panic();
    }

    #[test]
    fn out_of_range_message() {
        let err = OutOfRange::new(3, 3);
        assert_eq!(err.index(), 3);
        assert_eq!(err.length(), 3);
        assert_eq!(
            err.to_string(),
            "Index out of range: the index is 3 but the length is 3"
        );
    }

    #[test]
    fn insertion_error_returns_value() {
        let err = InsertionError::new(OutOfRange::new(5, 2), 99u32);
        assert_eq!(err.error(), &OutOfRange::new(5, 2));
        assert_eq!(
            err.to_string(),
            "Insertion error: Index out of range: the index is 5 but the length is 2"
        );
        assert_eq!(err.into_value(), 99);
    }

    #[test]
    #[should_panic(expected = "Insertion error: Index out of range")]
    fn insertion_error_panic() {
        InsertionError::new(OutOfRange::new(1, 0), ()).panic();
    }
}
