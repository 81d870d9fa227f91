//! Raw, fixed-size backing storage for collections.

use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr::NonNull;
use core::slice;

use const_default::ConstDefault;

use crate::error::StorageError;

pub(crate) mod alloc;

pub(crate) mod utils;

use self::alloc::Global;
use self::utils::array_layout;

/// A fixed number of contiguous, uninitialized slots of `T`.
///
/// The storage owns its allocation and releases it when dropped, but it
/// never reads, writes, or drops elements: tracking which slots are live is
/// the responsibility of the owning collection. The allocation is never
/// resized in place; collections grow by allocating a new `RawStorage` and
/// swapping it in.
///
/// An empty storage (zero slots, or any number of slots of a zero-sized
/// type) holds a well-aligned dangling pointer and owns no allocation.
pub struct RawStorage<T> {
    data: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T> RawStorage<T> {
    /// Constructs a new storage with no slots. This does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Try to allocate exactly `capacity` uninitialized slots.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        let layout = array_layout::<T>(capacity)?;
        let data = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            Global.try_alloc(layout)?.cast()
        };
        Ok(Self {
            data,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Allocate exactly `capacity` uninitialized slots, panicking on failure.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// The number of slots in this storage.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether this storage owns a live allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.capacity != 0 && mem::size_of::<T>() != 0
    }

    /// A pointer to the first slot.
    #[inline]
    pub const fn data_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// A mutable pointer to the first slot.
    #[inline]
    pub fn data_ptr_mut(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    /// Access every slot as possibly-uninitialized memory.
    #[inline]
    pub fn as_uninit_slice(&mut self) -> &mut [MaybeUninit<T>] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr().cast(), self.capacity) }
    }

    /// Access a single slot without bounds checking.
    ///
    /// # Safety
    /// The index must be less than the capacity of the storage, otherwise a
    /// memory access error may occur.
    #[inline]
    pub unsafe fn uninit_index(&mut self, index: usize) -> &mut MaybeUninit<T> {
        debug_assert!(index < self.capacity, "storage index out of bounds");
        &mut *self.data.as_ptr().add(index).cast()
    }

    /// Exchange the allocations of two storages.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

impl<T> Default for RawStorage<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConstDefault for RawStorage<T> {
    const DEFAULT: Self = Self::new();
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if self.is_allocated() {
            // the layout was validated when the storage was allocated
            if let Ok(layout) = array_layout::<T>(self.capacity) {
                unsafe { Global.release(self.data.cast(), layout) };
            }
        }
    }
}

// The storage uniquely owns its allocation.
unsafe impl<T: Send> Send for RawStorage<T> {}

unsafe impl<T: Sync> Sync for RawStorage<T> {}

#[cfg(test)]
mod tests {
    use super::RawStorage;
    use crate::error::StorageError;

    #[test]
    fn empty_storage() {
        let s = RawStorage::<u64>::new();
        assert_eq!(s.capacity(), 0);
        assert!(!s.is_allocated());
    }

    #[test]
    fn zero_capacity_does_not_allocate() {
        let s = RawStorage::<u64>::with_capacity(0);
        assert_eq!(s.capacity(), 0);
        assert!(!s.is_allocated());
    }

    #[test]
    fn allocates_exact_capacity() {
        let mut s = RawStorage::<u32>::with_capacity(5);
        assert_eq!(s.capacity(), 5);
        assert!(s.is_allocated());
        assert_eq!(s.as_uninit_slice().len(), 5);
        assert_eq!(s.data_ptr() as usize % core::mem::align_of::<u32>(), 0);
    }

    #[test]
    fn zst_storage() {
        let s = RawStorage::<()>::with_capacity(100);
        assert_eq!(s.capacity(), 100);
        assert!(!s.is_allocated());
    }

    #[test]
    fn write_and_read_slots() {
        let mut s = RawStorage::<u32>::with_capacity(3);
        for i in 0..3 {
            unsafe { s.uninit_index(i) }.write(i as u32 * 10);
        }
        let read = unsafe { s.uninit_index(2).assume_init_read() };
        assert_eq!(read, 20);
    }

    #[test]
    fn swap_exchanges_ownership() {
        let mut a = RawStorage::<u8>::with_capacity(4);
        let mut b = RawStorage::<u8>::new();
        let ptr = a.data_ptr();
        a.swap(&mut b);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 4);
        assert_eq!(b.data_ptr(), ptr);
    }

    #[test]
    fn layout_overflow() {
        let err = RawStorage::<u64>::try_with_capacity(usize::MAX).expect_err("expected failure");
        assert!(matches!(err, StorageError::LayoutError(_)));
    }
}
