/// Errors reported by [`RingBuffer`](crate::RingBuffer) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RingBufferError {
    /// A buffer cannot be created with zero slots.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// `read` was called on a buffer holding no values.
    #[error("cannot read from an empty buffer")]
    Empty,

    /// `write` was called on a buffer whose slots are all occupied.
    #[error("cannot write to a full buffer (capacity {capacity})")]
    Full {
        /// Capacity of the buffer that rejected the write.
        capacity: usize,
    },
}
