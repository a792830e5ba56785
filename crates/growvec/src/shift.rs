//! Positional insertion and erasure with element shifting.
//!
//! Both operations move the suffix `[index, len)` by one slot as raw bytes.
//! A bitwise shift cannot fail partway, so the only panic windows here are
//! the bounds assertions at entry — before any element has moved.

use std::ptr;

use growvec_raw::RawBuf;

use crate::vec::GrowVec;

impl<T> GrowVec<T> {
    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    /// Returns a reference to the inserted element.
    ///
    /// Positions run over `[0, len]`; inserting at `len` appends. `value`
    /// is owned by this call and cannot alias the shifted range, so the gap
    /// can be written after the shift with no intermediate copy.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        assert!(
            index <= self.len,
            "insert index {index} out of range (len {})",
            self.len
        );
        if self.len == self.capacity() {
            self.grow_and_insert(index, value);
        } else {
            // SAFETY: len < capacity leaves room for the shifted suffix;
            // [index, len) are live elements moving up one slot as raw
            // bytes, and the gap left at `index` is immediately filled.
            unsafe {
                let gap = self.buf.slot(index);
                ptr::copy(gap, gap.add(1), self.len - index);
                ptr::write(gap, value);
            }
        }
        self.len += 1;
        // SAFETY: the element at `index` was just initialized.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Growth path for insert: the new element lands directly in its final
    /// slot of the fresh buffer, then the prefix and suffix relocate around
    /// it. Every transfer is a bitwise move, so there is no partially
    /// filled buffer to unwind.
    fn grow_and_insert(&mut self, index: usize, value: T) {
        let mut new_buf = RawBuf::with_capacity(Self::grown_capacity(self.len));
        // SAFETY: index <= len < grown capacity.
        unsafe { ptr::write(new_buf.slot(index), value) };
        // SAFETY: distinct allocations; prefix [0, index) and suffix
        // [index, len) of the old buffer are live and relocate around the
        // element already written at `index`. The old slots become raw
        // storage and are released without destructor calls.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_ptr(), index);
            ptr::copy_nonoverlapping(
                self.buf.slot(index),
                new_buf.slot(index + 1),
                self.len - index,
            );
        }
        self.buf.swap(&mut new_buf);
    }

    /// Remove and return the element at `index`, shifting `[index + 1, len)`
    /// one slot left. The former successor ends up at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "remove index {index} out of range (len {})",
            self.len
        );
        // SAFETY: the element at `index` is live. The length is committed
        // before the read so the moved-out slot is never reachable; the
        // suffix shift refills it with live bytes.
        unsafe {
            self.len -= 1;
            let gap = self.buf.slot(index);
            let value = ptr::read(gap);
            ptr::copy(gap.add(1), gap, self.len - index);
            value
        }
    }
}
