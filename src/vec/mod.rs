//! A growable, contiguous vector.

use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::{self, MaybeUninit};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use const_default::ConstDefault;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::capacity::{Grow, GrowDoubling, GrowExact};
use crate::error::{InsertionError, OutOfRange, StorageError};
use crate::storage::RawStorage;

use self::insert::Inserter;

pub use self::{
    into_iter::IntoIter,
    reserve::{reserve, ReserveProxy},
};

#[macro_use]
mod macros;

pub(crate) mod insert;
mod into_iter;
mod reserve;

/// A contiguous growable array of `T`.
///
/// Elements `[0, len)` are live. The remaining `capacity - len` slots are
/// uninitialized spare storage. When a push or insert finds no spare slot,
/// the capacity doubles (starting from a single slot); explicit requests
/// such as [`reserve`](Self::reserve) and [`resize`](Self::resize) allocate
/// exactly the capacity asked for.
///
/// Growth always builds a complete replacement buffer before swapping it in,
/// so a failed allocation leaves the vector unchanged.
pub struct SimpleVec<T> {
    buffer: RawStorage<T>,
    length: usize,
}

impl<T> SimpleVec<T> {
    /// Constructs a new, empty `SimpleVec<T>`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// let mut vec: simple_vec::SimpleVec<i32> = simple_vec::SimpleVec::new();
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            buffer: RawStorage::new(),
            length: 0,
        }
    }

    /// Constructs an empty vector with exactly `capacity` slots reserved.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Ok(Self {
            buffer: RawStorage::try_with_capacity(capacity)?,
            length: 0,
        })
    }

    /// Constructs an empty vector with exactly `capacity` slots reserved,
    /// panicking if the storage cannot be allocated.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Constructs an empty vector with the capacity carried by a reservation
    /// request.
    #[inline]
    pub fn with_reserve(request: ReserveProxy) -> Self {
        Self::with_capacity(request.capacity())
    }

    /// Constructs a vector of `len` default values, with capacity `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut vec = Self::with_capacity(len);
        vec.fill_to(len, T::default);
        vec
    }

    /// Constructs a vector of `len` clones of `elem`, with capacity `len`.
    pub fn from_elem(elem: T, len: usize) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(len);
        vec.fill_to(len, || elem.clone());
        vec
    }

    /// Constructs a vector holding clones of `data` in order, with capacity
    /// equal to its length.
    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(data.len());
        vec.extend_from_slice(data);
        vec
    }

    /// The number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// The number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Access the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buffer.data_ptr(), self.length) }
    }

    /// Access the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buffer.data_ptr_mut(), self.length) }
    }

    /// Access the slots beyond the live elements.
    #[inline]
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        let length = self.length;
        &mut self.buffer.as_uninit_slice()[length..]
    }

    /// Checked access to the element at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// let v = simple_vec::simple_vec![10, 20, 30];
    /// assert_eq!(v.at(2), Ok(&30));
    /// assert!(v.at(3).is_err());
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        if index < self.length {
            Ok(unsafe { &*self.buffer.data_ptr().add(index) })
        } else {
            Err(OutOfRange::new(index, self.length))
        }
    }

    /// Checked mutable access to the element at `index`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        if index < self.length {
            Ok(unsafe { &mut *self.buffer.data_ptr_mut().add(index) })
        } else {
            Err(OutOfRange::new(index, self.length))
        }
    }

    /// Access the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `len()`. This is only verified by a debug
    /// assertion.
    #[inline]
    pub unsafe fn at_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.length, "index out of bounds");
        &*self.buffer.data_ptr().add(index)
    }

    /// Mutably access the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `len()`. This is only verified by a debug
    /// assertion.
    #[inline]
    pub unsafe fn at_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.length, "index out of bounds");
        &mut *self.buffer.data_ptr_mut().add(index)
    }

    /// Drop every element. The capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drop the elements from `len` onward. Has no effect if `len` is not
    /// less than the current length.
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.length;
        if len < old_len {
            self.length = len;
            unsafe {
                let to_drop: &mut [T] =
                    slice::from_raw_parts_mut(self.buffer.data_ptr_mut().add(len), old_len - len);
                ptr::drop_in_place(to_drop);
            }
        }
    }

    /// Ensure there is room for at least `capacity` elements in total.
    ///
    /// Does nothing when the capacity is already sufficient. Otherwise the
    /// elements are moved into a new buffer of exactly `capacity` slots.
    #[inline]
    pub fn reserve(&mut self, capacity: usize) {
        match self.try_reserve(capacity) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Try to ensure there is room for at least `capacity` elements in total.
    #[inline]
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), StorageError> {
        self.try_grow::<GrowExact>(capacity)
    }

    /// Resize to `new_len` elements, filling new slots with default values.
    ///
    /// Growing beyond the current capacity reallocates to exactly `new_len`
    /// slots.
    #[inline]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resize to `new_len` elements, filling new slots by calling `f`.
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        match new_len.cmp(&self.length) {
            Ordering::Greater => {
                if let Err(error) = self.try_grow::<GrowExact>(new_len) {
                    error.panic();
                }
                self.fill_to(new_len, f);
            }
            Ordering::Less => self.truncate(new_len),
            Ordering::Equal => {}
        }
    }

    /// Append an element, doubling the capacity if there is no spare slot.
    pub fn push_back(&mut self, item: T) {
        if let Err(error) = self.grow_for(1) {
            error.panic();
        }
        unsafe { self.push_unchecked(item) };
    }

    /// Remove the last element.
    ///
    /// The vector must not be empty. This is only verified by a debug
    /// assertion; in release builds an empty vector is left unchanged.
    #[inline]
    pub fn pop_back(&mut self) {
        debug_assert!(!self.is_empty(), "pop_back called on an empty vector");
        drop(self.pop());
    }

    /// Remove and return the last element, if any.
    pub fn pop(&mut self) -> Option<T> {
        if self.length > 0 {
            self.length -= 1;
            Some(unsafe { self.buffer.uninit_index(self.length).assume_init_read() })
        } else {
            None
        }
    }

    /// Insert `value` before the element at `index`, shifting the following
    /// elements one slot to the right.
    ///
    /// An `index` equal to the length appends. When the vector is full the
    /// elements are relocated into a buffer of twice the capacity, with a
    /// gap left at `index`. Returns a reference to the inserted element, or
    /// the rejected value when `index` is greater than the length.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut v = simple_vec::simple_vec!['a', 'b', 'c'];
    /// *v.insert(0, 'x').unwrap() = 'v';
    /// assert_eq!(v, ['v', 'a', 'b', 'c']);
    /// assert_eq!(v.insert(9, 'z').unwrap_err().into_value(), 'z');
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, InsertionError<T>> {
        let len = self.length;
        if index > len {
            return Err(InsertionError::new(OutOfRange::new(index, len), value));
        }
        let capacity = self.buffer.capacity();
        if len == capacity {
            let Some(minimum) = len.checked_add(1) else {
                StorageError::CapacityOverflow.panic();
            };
            let mut buffer = RawStorage::with_capacity(GrowDoubling::next_capacity(capacity, minimum));
            unsafe {
                let src = self.buffer.data_ptr();
                let dst = buffer.data_ptr_mut();
                ptr::copy_nonoverlapping(src, dst, index);
                dst.add(index).write(value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);
            }
            // the previous buffer now only holds moved-from slots
            self.buffer.swap(&mut buffer);
        } else {
            unsafe {
                let head = self.buffer.data_ptr_mut().add(index);
                if index < len {
                    ptr::copy(head, head.add(1), len - index);
                }
                head.write(value);
            }
        }
        self.length = len + 1;
        Ok(unsafe { self.buffer.uninit_index(index).assume_init_mut() })
    }

    /// Remove the element at `index`, shifting the following elements one
    /// slot to the left.
    ///
    /// Returns the position of the element which followed the removed one,
    /// which is `index` itself. When `index` is not the position of a live
    /// element the vector is unchanged and the end position (the length) is
    /// returned.
    pub fn erase(&mut self, index: usize) -> usize {
        match self.remove(index) {
            Some(_) => index,
            None => self.length,
        }
    }

    /// Remove and return the element at `index`, shifting the following
    /// elements one slot to the left.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.length;
        if index >= len {
            return None;
        }
        unsafe {
            let head = self.buffer.data_ptr_mut().add(index);
            let result = ptr::read(head);
            ptr::copy(head.add(1), head, len - index - 1);
            self.length = len - 1;
            Some(result)
        }
    }

    /// Exchange the contents of two vectors without moving any elements.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        mem::swap(&mut self.length, &mut other.length);
    }

    /// Append clones of every element in `items`.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        if let Err(error) = self.grow_for(items.len()) {
            error.panic();
        }
        let mut insert = Inserter::for_storage(&mut self.buffer, self.length);
        insert.extend_from_slice(items);
        self.length = insert.complete();
    }

    /// Write an element into the next spare slot.
    ///
    /// # Safety
    /// The length must be less than the capacity.
    #[inline]
    unsafe fn push_unchecked(&mut self, item: T) {
        let length = self.length;
        self.buffer.uninit_index(length).write(item);
        self.length = length + 1;
    }

    /// Fill the spare slots up to `new_len`, which must not exceed the capacity.
    fn fill_to<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        let mut insert = Inserter::for_storage(&mut self.buffer, self.length);
        for _ in self.length..new_len {
            insert.push(f());
        }
        self.length = insert.complete();
    }

    /// Make room for `additional` more elements using the doubling policy.
    #[inline]
    fn grow_for(&mut self, additional: usize) -> Result<(), StorageError> {
        let Some(minimum) = self.length.checked_add(additional) else {
            return Err(StorageError::CapacityOverflow);
        };
        self.try_grow::<GrowDoubling>(minimum)
    }

    fn try_grow<G: Grow>(&mut self, minimum: usize) -> Result<(), StorageError> {
        let capacity = self.buffer.capacity();
        if minimum <= capacity {
            return Ok(());
        }
        self.try_relocate(G::next_capacity(capacity, minimum))
    }

    /// Move the live elements into a new buffer of exactly `capacity` slots.
    fn try_relocate(&mut self, capacity: usize) -> Result<(), StorageError> {
        debug_assert!(capacity >= self.length);
        let mut buffer = RawStorage::try_with_capacity(capacity)?;
        unsafe {
            ptr::copy_nonoverlapping(self.buffer.data_ptr(), buffer.data_ptr_mut(), self.length);
        }
        self.buffer.swap(&mut buffer);
        Ok(())
    }

    fn extend_iter(&mut self, iter: &mut impl Iterator<Item = T>) {
        loop {
            let mut insert = Inserter::for_storage(&mut self.buffer, self.length);
            let mut full;
            loop {
                full = insert.full();
                if full {
                    break;
                }
                let Some(item) = iter.next() else { break };
                insert.push(item);
            }
            self.length = insert.complete();
            if !full {
                // ran out of items to insert
                break;
            }
            let Some(item) = iter.next() else { break };
            let min_reserve = iter.size_hint().0.saturating_add(1);
            if let Err(error) = self.grow_for(min_reserve) {
                error.panic();
            }
            unsafe { self.push_unchecked(item) };
        }
    }
}

impl<T> AsRef<[T]> for SimpleVec<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVec<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVec<T> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVec<T> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for SimpleVec<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self)
    }

    /// Builds a complete copy of `source` before replacing the contents of
    /// `self`, so a panic while cloning leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap_with(&mut copy);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T> Default for SimpleVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConstDefault for SimpleVec<T> {
    const DEFAULT: Self = Self::new();
}

impl<T> Deref for SimpleVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Drop for SimpleVec<T> {
    fn drop(&mut self) {
        // the buffer releases its allocation afterward
        self.clear();
    }
}

impl<T> Extend<T> for SimpleVec<T> {
    #[inline]
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        self.extend_iter(&mut iter.into_iter())
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for SimpleVec<T> {
    #[inline]
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend_iter(&mut iter.into_iter().cloned())
    }
}

impl<T> FromIterator<T> for SimpleVec<T> {
    #[inline]
    fn from_iter<A: IntoIterator<Item = T>>(iter: A) -> Self {
        let iter = iter.into_iter();
        let (min_cap, _) = iter.size_hint();
        let mut vec = Self::with_capacity(min_cap);
        vec.extend(iter);
        vec
    }
}

impl<T: Clone> From<&[T]> for SimpleVec<T> {
    #[inline]
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for SimpleVec<T> {
    #[inline]
    fn from(data: &[T; N]) -> Self {
        Self::from_slice(data)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVec<T> {
    fn from(data: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        let mut insert = Inserter::for_storage(&mut vec.buffer, 0);
        for item in data {
            insert.push(item);
        }
        vec.length = insert.complete();
        vec
    }
}

impl<T> From<ReserveProxy> for SimpleVec<T> {
    #[inline]
    fn from(request: ReserveProxy) -> Self {
        Self::with_reserve(request)
    }
}

impl<T: Hash> Hash for SimpleVec<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> IntoIterator for SimpleVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T1, T2> PartialEq<SimpleVec<T2>> for SimpleVec<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &SimpleVec<T2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq> Eq for SimpleVec<T> {}

impl<T1, T2> PartialEq<[T2]> for SimpleVec<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T1, T2> PartialEq<&[T2]> for SimpleVec<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T1, T2, const N: usize> PartialEq<[T2; N]> for SimpleVec<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, T2, const N: usize> PartialEq<&[T2; N]> for SimpleVec<T1>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &&[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, T2> PartialEq<SimpleVec<T2>> for [T1]
where
    T2: PartialEq<T1>,
{
    #[inline]
    fn eq(&self, other: &SimpleVec<T2>) -> bool {
        other.eq(self)
    }
}

impl<T1, T2, const N: usize> PartialEq<SimpleVec<T2>> for [T1; N]
where
    T2: PartialEq<T1>,
{
    #[inline]
    fn eq(&self, other: &SimpleVec<T2>) -> bool {
        other.eq(self)
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVec<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVec<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

#[cfg(feature = "zeroize")]
impl<T> Zeroize for SimpleVec<T> {
    /// Drop every element and overwrite the entire buffer with zeroes.
    /// The capacity is unchanged.
    fn zeroize(&mut self) {
        self.clear();
        let bytes = self.buffer.capacity() * mem::size_of::<T>();
        let data: &mut [MaybeUninit<u8>] =
            unsafe { slice::from_raw_parts_mut(self.buffer.data_ptr_mut().cast(), bytes) };
        data.zeroize();
    }
}
