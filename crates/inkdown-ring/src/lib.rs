//! # Inkdown Ring
//!
//! A fixed-capacity FIFO ring buffer.
//!
//! All slots are allocated up front. Reads and writes move two indices around
//! the slot array with wrap-around; nothing is shifted or reallocated.
//!
//! ```rust
//! use inkdown_ring::{RingBuffer, RingBufferError};
//!
//! let mut buffer = RingBuffer::new(2)?;
//! buffer.write(1)?;
//! buffer.write(2)?;
//! assert_eq!(buffer.write(3), Err(RingBufferError::Full { capacity: 2 }));
//!
//! // Overwrite evicts the oldest value instead of failing.
//! assert_eq!(buffer.overwrite(3), Some(1));
//! assert_eq!(buffer.read()?, 2);
//! assert_eq!(buffer.read()?, 3);
//! assert_eq!(buffer.read(), Err(RingBufferError::Empty));
//! # Ok::<(), RingBufferError>(())
//! ```

pub mod error;

pub use error::RingBufferError;

use log::trace;

/// Fixed-capacity FIFO buffer over a preallocated slot array.
///
/// Values are read back in the order they were written. When the buffer is
/// full, [`write`](Self::write) fails while [`overwrite`](Self::overwrite)
/// replaces the oldest value.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    /// Slot the next read takes from.
    read_index: usize,
    /// Slot the next write goes to.
    write_index: usize,
    /// Distinguishes full from empty when the two indices coincide.
    full: bool,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer with `capacity` slots.
    ///
    /// Fails with [`RingBufferError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, RingBufferError> {
        if capacity == 0 {
            return Err(RingBufferError::ZeroCapacity);
        }

        let slots = std::iter::repeat_with(|| None).take(capacity).collect();
        Ok(Self {
            slots,
            read_index: 0,
            write_index: 0,
            full: false,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of values currently held.
    pub fn len(&self) -> usize {
        if self.full {
            self.capacity()
        } else if self.write_index >= self.read_index {
            self.write_index - self.read_index
        } else {
            self.capacity() - self.read_index + self.write_index
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.full && self.read_index == self.write_index
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Remove and return the oldest value.
    pub fn read(&mut self) -> Result<T, RingBufferError> {
        if self.is_empty() {
            return Err(RingBufferError::Empty);
        }

        let value = self.slots[self.read_index]
            .take()
            .ok_or(RingBufferError::Empty)?;
        self.read_index = self.advance(self.read_index);
        self.full = false;
        Ok(value)
    }

    /// Append a value, failing with [`RingBufferError::Full`] if no slot is free.
    pub fn write(&mut self, value: T) -> Result<(), RingBufferError> {
        if self.full {
            return Err(RingBufferError::Full {
                capacity: self.capacity(),
            });
        }

        self.store(value);
        Ok(())
    }

    /// Append a value, evicting the oldest one if the buffer is full.
    ///
    /// Returns the evicted value, or `None` if there was room.
    pub fn overwrite(&mut self, value: T) -> Option<T> {
        if !self.full {
            self.store(value);
            return None;
        }

        // Full: the write slot is the oldest value's slot.
        let evicted = self.slots[self.write_index].replace(value);
        self.write_index = self.advance(self.write_index);
        self.read_index = self.write_index;
        trace!("ring buffer overwrote oldest value");
        evicted
    }

    /// Drop every held value and reset to empty.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.read_index = 0;
        self.write_index = 0;
        self.full = false;
    }

    /// Write into the free slot at `write_index`. Caller checks `full`.
    #[inline]
    fn store(&mut self, value: T) {
        self.slots[self.write_index] = Some(value);
        self.write_index = self.advance(self.write_index);
        self.full = self.write_index == self.read_index;
    }

    #[inline(always)]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }
}
