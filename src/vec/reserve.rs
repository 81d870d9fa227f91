/// A request to pre-allocate capacity for a collection without creating
/// any elements.
///
/// ```
/// use simple_vec::{reserve, SimpleVec};
///
/// let v = SimpleVec::<u32>::from(reserve(16));
/// assert_eq!(v.capacity(), 16);
/// assert!(v.is_empty());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    /// Create a request for `capacity` slots.
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The number of slots requested.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Create a request for `capacity` slots.
#[inline]
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
