use core::mem::MaybeUninit;
use core::ptr;

use crate::storage::RawStorage;

/// Writes a run of new elements into the spare slots of a storage.
///
/// Elements written so far are dropped if the inserter is dropped before
/// `complete` is called, so a panicking producer does not leak them.
pub(crate) struct Inserter<'a, T> {
    buf: &'a mut [MaybeUninit<T>],
    start: usize,
    end: usize,
}

impl<'a, T> Inserter<'a, T> {
    /// Begin writing at slot `len` of `storage`.
    #[inline]
    pub fn for_storage(storage: &'a mut RawStorage<T>, len: usize) -> Self {
        let buf = storage.as_uninit_slice();
        debug_assert!(len <= buf.len());
        Self {
            buf,
            start: len,
            end: len,
        }
    }

    #[inline]
    pub fn push(&mut self, val: T) {
        self.buf[self.end].write(val);
        self.end += 1;
    }

    #[inline]
    pub fn push_clone(&mut self, val: &T)
    where
        T: Clone,
    {
        self.push(val.clone());
    }

    #[inline]
    pub fn extend_from_slice(&mut self, data: &[T])
    where
        T: Clone,
    {
        for item in data {
            self.push_clone(item);
        }
    }

    #[inline]
    pub fn full(&self) -> bool {
        self.end == self.buf.len()
    }

    /// Finish writing, returning the new length of the initialized prefix.
    #[inline]
    pub fn complete(mut self) -> usize {
        self.start = self.end;
        self.end
    }
}

impl<T> Drop for Inserter<'_, T> {
    #[inline]
    fn drop(&mut self) {
        if self.start != self.end {
            unsafe {
                ptr::drop_in_place(
                    &mut self.buf[self.start..self.end] as *mut [MaybeUninit<T>] as *mut [T],
                )
            };
        }
    }
}
