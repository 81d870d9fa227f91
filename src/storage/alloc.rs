use core::alloc::Layout;
use core::ptr::NonNull;

use alloc::alloc::{alloc as raw_alloc, dealloc as raw_dealloc};

use crate::error::StorageError;

/// The global allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Global;

impl Global {
    /// Allocate a block of memory fitting `layout`.
    ///
    /// Zero-sized layouts produce a well-aligned dangling pointer
    /// without touching the allocator.
    #[inline]
    pub fn try_alloc(&self, layout: Layout) -> Result<NonNull<u8>, StorageError> {
        if layout.size() == 0 {
            // SAFETY: alignment is always non-zero
            Ok(unsafe { NonNull::new_unchecked(layout.align() as *mut u8) })
        } else {
            NonNull::new(unsafe { raw_alloc(layout) }).ok_or(StorageError::AllocError(layout))
        }
    }

    /// Release a block of memory previously returned by `try_alloc`.
    ///
    /// # Safety
    /// `ptr` must have been allocated by `try_alloc` with the same `layout`,
    /// and must not be released more than once.
    #[inline]
    pub unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() > 0 {
            raw_dealloc(ptr.as_ptr(), layout);
        }
    }
}
