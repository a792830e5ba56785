//! Copy construction and copy assignment.
//!
//! Cloning runs element code and can therefore panic mid-batch; both paths
//! here follow the replace-then-commit protocol where the strong guarantee
//! is documented, and say so where it is not.

use std::mem;
use std::ptr;

use crate::guard::PartialInit;
use crate::vec::GrowVec;

impl<T: Clone> Clone for GrowVec<T> {
    /// Copy-construction sized to content.
    ///
    /// The clone's capacity is exactly `self.len()` — spare capacity is a
    /// property of the source's history, not of its contents, and is not
    /// inherited. A panicking element clone drops every element this call
    /// constructed and releases the new allocation; the source is never
    /// touched.
    fn clone(&self) -> Self {
        let mut clone = Self::with_capacity(self.len);
        let mut guard = PartialInit::new(clone.buf.as_ptr());
        for (i, elem) in self.iter().enumerate() {
            // SAFETY: i < capacity and the slot is raw storage.
            unsafe { ptr::write(clone.buf.slot(i), elem.clone()) };
            guard.advance();
        }
        guard.disarm();
        clone.len = self.len;
        clone
    }

    /// Copy-assignment that reuses the existing allocation when it is
    /// large enough.
    ///
    /// With sufficient capacity, the overlapping prefix is overwritten
    /// element-by-element with `clone_from` and the remainder is either
    /// clone-constructed (source longer) or dropped (source shorter). A
    /// panicking element clone in this branch leaves a valid sequence
    /// holding a mix of old and new values — the accepted price of
    /// skipping the allocation.
    ///
    /// With insufficient capacity, falls back to clone-and-swap: the
    /// replacement is built completely before anything is committed, so a
    /// panic leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() < source.len {
            let mut replacement = source.clone();
            mem::swap(self, &mut replacement);
            return;
        }
        let shared = self.len.min(source.len);
        for (dst, src) in self.as_mut_slice()[..shared]
            .iter_mut()
            .zip(source.as_slice()[..shared].iter())
        {
            dst.clone_from(src);
        }
        if source.len > self.len {
            let mut guard = PartialInit::new(self.buf.slot(self.len));
            for i in self.len..source.len {
                // SAFETY: capacity >= source.len, so slot(i) is raw storage
                // in bounds.
                unsafe { ptr::write(self.buf.slot(i), source.as_slice()[i].clone()) };
                guard.advance();
            }
            guard.disarm();
            self.len = source.len;
        } else {
            self.truncate(source.len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[u64]) -> GrowVec<u64> {
        let mut vec = GrowVec::with_capacity(values.len());
        for &v in values {
            vec.push(v);
        }
        vec
    }

    #[test]
    fn clone_sizes_capacity_to_content() {
        let mut source = GrowVec::with_capacity(32);
        source.push(1u64);
        source.push(2);
        let clone = source.clone();
        assert_eq!(clone.len(), 2);
        assert_eq!(clone.capacity(), 2);
        assert_eq!(clone.as_slice(), source.as_slice());
    }

    #[test]
    fn clone_is_independent_of_the_source() {
        let source = filled(&[1, 2, 3]);
        let mut clone = source.clone();
        clone[0] = 99;
        clone.push(4);
        assert_eq!(source.as_slice(), &[1, 2, 3]);
        assert_eq!(clone.as_slice(), &[99, 2, 3, 4]);
    }

    #[test]
    fn clone_from_reuses_a_large_enough_buffer() {
        let mut target = GrowVec::with_capacity(8);
        target.push(7u64);
        let addr = target.as_slice().as_ptr();
        let source = filled(&[1, 2, 3]);
        target.clone_from(&source);
        assert_eq!(target.as_slice(), &[1, 2, 3]);
        assert_eq!(target.as_slice().as_ptr(), addr);
        assert_eq!(target.capacity(), 8);
    }

    #[test]
    fn clone_from_shorter_source_truncates() {
        let mut target = filled(&[1, 2, 3, 4]);
        let source = filled(&[9]);
        target.clone_from(&source);
        assert_eq!(target.as_slice(), &[9]);
        assert_eq!(target.capacity(), 4);
    }

    #[test]
    fn clone_from_reallocates_when_capacity_is_short() {
        let mut target = filled(&[1]);
        assert_eq!(target.capacity(), 1);
        let source = filled(&[5, 6, 7]);
        target.clone_from(&source);
        assert_eq!(target.as_slice(), &[5, 6, 7]);
        // Fallback path builds a content-sized replacement.
        assert_eq!(target.capacity(), 3);
    }

    #[test]
    fn clone_of_empty_is_empty() {
        let source = GrowVec::<u64>::new();
        let clone = source.clone();
        assert_eq!(clone.len(), 0);
        assert_eq!(clone.capacity(), 0);
    }
}
