// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::fmt;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};

use allocator_api2::alloc::{Allocator, Global};

use crate::error::ArrayError;

/// Capacity an empty array grows to on its first append.
///
/// Doubling zero would leave no room for the pending element, so growth from
/// an empty buffer jumps straight to this value.
pub const MIN_GROW_CAPACITY: usize = 4;

/// A contiguous growable array with caller-visible capacity and length.
///
/// Every allocating operation comes in two flavours:
///
/// - **fail-fast** (`new`, `push`, `reserve`, `reverse`): allocation failure
///   aborts through [`handle_alloc_error`](alloc::alloc::handle_alloc_error),
///   a capacity that cannot be expressed as a layout panics.
/// - **fail-reporting** (`new_checked`, `push_checked`, `reserve_checked`,
///   `reverse_checked`): failure is returned as [`ArrayError`] and the array is
///   left exactly as it was.
///
/// Elements are plain `Copy` values. Nothing is dropped on [`clear`](Self::clear)
/// or [`release`](Self::release); the slots are simply forgotten.
///
/// # Growth
///
/// When an append finds `len == capacity` the capacity doubles. An empty
/// buffer grows to [`MIN_GROW_CAPACITY`].
///
/// # Example
///
/// ```rust
/// use construct_array::Array;
///
/// let mut array = Array::new(2);
/// array.push(1u32);
/// array.push(2);
/// array.push(3);
///
/// assert_eq!(array.capacity(), 4);
/// assert_eq!(array.as_slice(), &[1, 2, 3]);
///
/// array.reverse();
/// assert_eq!(array.as_slice(), &[3, 2, 1]);
///
/// array.release();
/// assert_eq!(array.capacity(), 0);
/// ```
pub struct Array<T, A = Global>
where
    T: Copy,
    A: Allocator,
{
    items: NonNull<T>,
    capacity: usize,
    len: usize,
    alloc: A,
}

// SAFETY: the buffer is exclusively owned, so the array is as thread-safe as
// its elements and its allocator.
unsafe impl<T, A> Send for Array<T, A>
where
    T: Copy + Send,
    A: Allocator + Send,
{
}

// SAFETY: shared references only hand out `&[T]` and `&A`.
unsafe impl<T, A> Sync for Array<T, A>
where
    T: Copy + Sync,
    A: Allocator + Sync,
{
}

#[cold]
#[inline(never)]
fn handle_error(error: ArrayError) -> ! {
    match error {
        ArrayError::CapacityOverflow => panic!("capacity overflow"),
        ArrayError::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
    }
}

impl<T> Array<T>
where
    T: Copy,
{
    /// Creates an array able to hold `capacity` elements without growing.
    ///
    /// `capacity == 0` performs no allocation.
    ///
    /// # Panics / Aborts
    ///
    /// Aborts if the allocation fails, panics if `capacity` overflows the
    /// maximum layout size. Use [`new_checked`](Self::new_checked) to get an
    /// error instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use construct_array::Array;
    ///
    /// let array: Array<u8> = Array::new(16);
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 16);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::new_in(capacity, Global)
    }

    /// Creates an array able to hold `capacity` elements, reporting allocation failure.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::CapacityOverflow`] if `capacity` elements do not fit a layout.
    /// - [`ArrayError::AllocFailed`] if the allocator refuses the request.
    ///
    /// # Example
    ///
    /// ```rust
    /// use construct_array::{Array, ArrayError};
    ///
    /// let array: Array<u64> = Array::new_checked(8).expect("Failed to allocate");
    /// assert_eq!(array.capacity(), 8);
    ///
    /// let result = Array::<u64>::new_checked(usize::MAX);
    /// assert!(matches!(result, Err(ArrayError::CapacityOverflow)));
    /// ```
    pub fn new_checked(capacity: usize) -> Result<Self, ArrayError> {
        Self::new_checked_in(capacity, Global)
    }
}

impl<T, A> Array<T, A>
where
    T: Copy,
    A: Allocator,
{
    /// Same as [`Array::new`], with the buffer provided by `alloc`.
    pub fn new_in(capacity: usize, alloc: A) -> Self {
        match Self::new_checked_in(capacity, alloc) {
            Ok(array) => array,
            Err(error) => handle_error(error),
        }
    }

    /// Same as [`Array::new_checked`], with the buffer provided by `alloc`.
    pub fn new_checked_in(capacity: usize, alloc: A) -> Result<Self, ArrayError> {
        let items = Self::allocate_in(capacity, &alloc)?;

        Ok(Self {
            items,
            capacity,
            len: 0,
            alloc,
        })
    }

    #[inline]
    fn layout_for(capacity: usize) -> Result<Layout, ArrayError> {
        Layout::array::<T>(capacity).map_err(|_| ArrayError::CapacityOverflow)
    }

    /// Layout of the current buffer, or `None` when nothing is allocated
    /// (zero capacity, zero-sized `T`, or released).
    #[inline]
    fn allocated_layout(&self) -> Option<Layout> {
        Layout::array::<T>(self.capacity)
            .ok()
            .filter(|layout| layout.size() != 0)
    }

    /// Allocates an uninitialized buffer for `capacity` elements.
    fn allocate_in(capacity: usize, alloc: &A) -> Result<NonNull<T>, ArrayError> {
        let layout = Self::layout_for(capacity)?;

        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        match alloc.allocate(layout) {
            Ok(ptr) => Ok(ptr.cast()),
            Err(_) => {
                tracing::debug!(capacity, size = layout.size(), "array allocation failed");
                Err(ArrayError::AllocFailed { layout })
            }
        }
    }

    fn next_capacity(&self) -> Result<usize, ArrayError> {
        if self.capacity == 0 {
            return Ok(MIN_GROW_CAPACITY);
        }

        self.capacity
            .checked_mul(2)
            .ok_or(ArrayError::CapacityOverflow)
    }

    /// Moves the elements into a buffer of `new_capacity` slots.
    ///
    /// On error the old buffer is still owned by `self` and untouched.
    #[cold]
    fn grow_to(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        debug_assert!(new_capacity > self.capacity);

        let new_layout = Self::layout_for(new_capacity)?;

        let items = match self.allocated_layout() {
            None => Self::allocate_in(new_capacity, &self.alloc)?,
            Some(old_layout) => {
                // SAFETY: `items` was allocated by `self.alloc` with `old_layout`,
                // and `new_layout` is strictly larger with the same alignment.
                let grown = unsafe { self.alloc.grow(self.items.cast(), old_layout, new_layout) };

                match grown {
                    Ok(ptr) => ptr.cast(),
                    Err(_) => {
                        tracing::debug!(
                            old_capacity = self.capacity,
                            new_capacity,
                            "array growth failed"
                        );
                        return Err(ArrayError::AllocFailed { layout: new_layout });
                    }
                }
            }
        };

        tracing::trace!(old_capacity = self.capacity, new_capacity, "array grown");

        self.items = items;
        self.capacity = new_capacity;

        Ok(())
    }

    /// Returns the number of initialized elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated element slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the allocator backing this array.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns the first `len` elements.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized; `items` is non-null
        // and aligned even when dangling.
        unsafe { core::slice::from_raw_parts(self.items.as_ptr(), self.len) }
    }

    /// Returns the first `len` elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { core::slice::from_raw_parts_mut(self.items.as_ptr(), self.len) }
    }

    /// Returns a raw pointer to the buffer.
    ///
    /// The pointer is dangling when nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Appends `item`, doubling the capacity if the array is full.
    ///
    /// # Panics / Aborts
    ///
    /// Aborts if growing the buffer fails. Use
    /// [`push_checked`](Self::push_checked) to get an error instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use construct_array::Array;
    ///
    /// let mut array = Array::new(0);
    /// array.push(7u8);
    ///
    /// assert_eq!(array.as_slice(), &[7]);
    /// assert_eq!(array.capacity(), construct_array::MIN_GROW_CAPACITY);
    /// ```
    pub fn push(&mut self, item: T) {
        if let Err(error) = self.push_checked(item) {
            handle_error(error);
        }
    }

    /// Appends `item`, reporting a failed growth instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError`] if the buffer had to grow and could not. The
    /// item is not stored and the array is unchanged.
    pub fn push_checked(&mut self, item: T) -> Result<(), ArrayError> {
        if self.len == self.capacity {
            let new_capacity = self.next_capacity()?;
            self.grow_to(new_capacity)?;
        }

        // SAFETY: `len < capacity`, so the slot lies inside the buffer.
        unsafe { self.items.as_ptr().add(self.len).write(item) };
        self.len += 1;

        Ok(())
    }

    /// Grows the buffer to exactly `new_capacity` slots.
    ///
    /// Does nothing if the capacity is already at least `new_capacity`.
    ///
    /// # Panics / Aborts
    ///
    /// Same as [`push`](Self::push).
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(error) = self.reserve_checked(new_capacity) {
            handle_error(error);
        }
    }

    /// Grows the buffer to exactly `new_capacity` slots, reporting failure.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError`] if the buffer could not grow. The array is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use construct_array::{Array, ArrayError};
    ///
    /// fn example() -> Result<(), ArrayError> {
    ///     let mut array: Array<u16> = Array::new_checked(2)?;
    ///     array.reserve_checked(10)?;
    ///     assert_eq!(array.capacity(), 10);
    ///
    ///     // Never shrinks
    ///     array.reserve_checked(3)?;
    ///     assert_eq!(array.capacity(), 10);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn reserve_checked(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity <= self.capacity {
            return Ok(());
        }

        self.grow_to(new_capacity)
    }

    /// Forgets every element. Capacity and buffer are kept for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Reverses the element order through a freshly allocated buffer.
    ///
    /// # Panics / Aborts
    ///
    /// Aborts if the new buffer cannot be allocated. Use
    /// [`reverse_checked`](Self::reverse_checked) to get an error instead.
    pub fn reverse(&mut self) {
        if let Err(error) = self.reverse_checked() {
            handle_error(error);
        }
    }

    /// Reverses the element order, reporting allocation failure.
    ///
    /// A new buffer with the same capacity is allocated, filled back to front,
    /// and swapped in; the old buffer is released only afterwards. Arrays with
    /// nothing allocated are reversed in place and never fail.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocFailed`] if the new buffer could not be
    /// allocated. Elements, length and capacity are untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use construct_array::{Array, ArrayError};
    ///
    /// fn example() -> Result<(), ArrayError> {
    ///     let mut array = Array::new_checked(4)?;
    ///     array.push_checked('a')?;
    ///     array.push_checked('b')?;
    ///
    ///     array.reverse_checked()?;
    ///     assert_eq!(array.as_slice(), &['b', 'a']);
    ///     assert_eq!(array.capacity(), 4);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn reverse_checked(&mut self) -> Result<(), ArrayError> {
        let Some(old_layout) = self.allocated_layout() else {
            self.as_mut_slice().reverse();
            return Ok(());
        };

        let reversed = Self::allocate_in(self.capacity, &self.alloc)?;

        // SAFETY: both buffers hold `capacity >= len` slots and do not overlap.
        // The old buffer was allocated by `self.alloc` with `old_layout`.
        unsafe {
            let src = self.items.as_ptr();
            let dst = reversed.as_ptr();

            for i in 0..self.len {
                dst.add(i).write(src.add(self.len - 1 - i).read());
            }

            self.alloc.deallocate(self.items.cast(), old_layout);
        }

        tracing::trace!(len = self.len, capacity = self.capacity, "array reversed");

        self.items = reversed;

        Ok(())
    }

    /// Frees the buffer and resets the array to zero capacity.
    ///
    /// Calling it again is a no-op. The array can be pushed to afterwards and
    /// behaves like `new(0)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use construct_array::Array;
    ///
    /// let mut array = Array::new(8);
    /// array.push(1i32);
    ///
    /// array.release();
    /// array.release();
    ///
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 0);
    /// ```
    pub fn release(&mut self) {
        if let Some(layout) = self.allocated_layout() {
            // SAFETY: `items` was allocated by `self.alloc` with `layout`, and is
            // replaced by the sentinel right below so it is never freed twice.
            unsafe { self.alloc.deallocate(self.items.cast(), layout) };
        }

        self.items = NonNull::dangling();
        self.capacity = 0;
        self.len = 0;
    }
}

impl<T, A> Drop for Array<T, A>
where
    T: Copy,
    A: Allocator,
{
    fn drop(&mut self) {
        self.release();
    }
}

impl<T, A> Default for Array<T, A>
where
    T: Copy,
    A: Allocator + Default,
{
    fn default() -> Self {
        Self::new_in(0, A::default())
    }
}

impl<T, A> Clone for Array<T, A>
where
    T: Copy,
    A: Allocator + Clone,
{
    /// Fail-fast copy with the same capacity.
    fn clone(&self) -> Self {
        let mut cloned = Self::new_in(self.capacity, self.alloc.clone());

        // SAFETY: `cloned` owns a fresh buffer of `capacity >= len` slots.
        unsafe {
            ptr::copy_nonoverlapping(self.items.as_ptr(), cloned.items.as_ptr(), self.len);
        }
        cloned.len = self.len;

        cloned
    }
}

impl<T, A> fmt::Debug for Array<T, A>
where
    T: Copy + fmt::Debug,
    A: Allocator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<T, A> Deref for Array<T, A>
where
    T: Copy,
    A: Allocator,
{
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A> DerefMut for Array<T, A>
where
    T: Copy,
    A: Allocator,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A, B> PartialEq<Array<T, B>> for Array<T, A>
where
    T: Copy + PartialEq,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &Array<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, A> Eq for Array<T, A>
where
    T: Copy + Eq,
    A: Allocator,
{
}

impl<T, A> PartialEq<[T]> for Array<T, A>
where
    T: Copy + PartialEq,
    A: Allocator,
{
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T, A> PartialEq<&[T]> for Array<T, A>
where
    T: Copy + PartialEq,
    A: Allocator,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, A, const N: usize> PartialEq<[T; N]> for Array<T, A>
where
    T: Copy + PartialEq,
    A: Allocator,
{
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, A> Extend<T> for Array<T, A>
where
    T: Copy,
    A: Allocator,
{
    /// Fail-fast: every item goes through [`Array::push`].
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Array<T>
where
    T: Copy,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let mut array = Self::new(lower);
        array.extend(iter);

        array
    }
}
