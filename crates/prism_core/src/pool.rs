//! Bump-pointer frame pool for transient allocations.
//!
//! A fixed byte buffer with a monotonically increasing `used` offset.
//! Allocation hands out block handles resolved against the pool; `reset`
//! rewinds the offset without releasing the buffer, so a pool can be
//! recycled every frame. The pool is an explicitly passed handle - there
//! is no process-wide instance - and exhaustion is an explicit error, not
//! a panic. Intended for stochastic-sampling extensions; the render core
//! itself does not allocate per pixel.

use thiserror::Error;

/// Allocation failure: the pool cannot satisfy the request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("frame pool exhausted: requested {requested} bytes with {remaining} remaining")]
pub struct PoolExhausted {
    pub requested: usize,
    pub remaining: usize,
}

/// Handle to a block allocated from a [`FramePool`].
///
/// Handles are plain offsets: `reset` logically invalidates outstanding
/// handles, and resolving one afterwards yields whatever bytes have been
/// written over that range since.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolBlock {
    offset: usize,
    len: usize,
}

impl PoolBlock {
    /// Length of the block in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for zero-length blocks.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Usage statistics for a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Bytes currently allocated
    pub used: usize,
    /// High-water mark since construction
    pub peak: usize,
    /// Total buffer size
    pub capacity: usize,
}

/// A transient allocation that either lives in the pool or spilled to the
/// general-purpose heap.
#[derive(Debug)]
pub enum Scratch {
    Pooled(PoolBlock),
    Heap(Vec<u8>),
}

/// Fixed-capacity bump allocator.
pub struct FramePool {
    buffer: Vec<u8>,
    used: usize,
    peak: usize,
}

impl FramePool {
    /// Create a pool with the given capacity in bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![0; capacity],
            used: 0,
            peak: 0,
        }
    }

    /// Total buffer size in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes remaining before exhaustion.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.used
    }

    /// Allocate `len` bytes from the pool.
    ///
    /// Fails with [`PoolExhausted`] when the request does not fit; a
    /// failed allocation leaves the pool untouched.
    pub fn alloc(&mut self, len: usize) -> Result<PoolBlock, PoolExhausted> {
        if len > self.remaining() {
            return Err(PoolExhausted {
                requested: len,
                remaining: self.remaining(),
            });
        }
        let block = PoolBlock {
            offset: self.used,
            len,
        };
        self.used += len;
        self.peak = self.peak.max(self.used);
        Ok(block)
    }

    /// Allocate from the pool, degrading to a heap allocation when the
    /// pool is exhausted. The spill is logged once per call.
    pub fn alloc_or_heap(&mut self, len: usize) -> Scratch {
        match self.alloc(len) {
            Ok(block) => Scratch::Pooled(block),
            Err(err) => {
                log::warn!("{err}, falling back to heap allocation");
                Scratch::Heap(vec![0; len])
            }
        }
    }

    /// Read access to an allocated block.
    pub fn get(&self, block: PoolBlock) -> &[u8] {
        &self.buffer[block.offset..block.offset + block.len]
    }

    /// Write access to an allocated block.
    pub fn get_mut(&mut self, block: PoolBlock) -> &mut [u8] {
        &mut self.buffer[block.offset..block.offset + block.len]
    }

    /// Rewind `used` to zero without releasing the buffer.
    ///
    /// The peak statistic survives the reset.
    pub fn reset(&mut self) {
        self.used = 0;
    }

    /// Current usage statistics.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            used: self.used,
            peak: self.peak,
            capacity: self.buffer.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_bumps_offset() {
        let mut pool = FramePool::with_capacity(64);
        let a = pool.alloc(16).unwrap();
        let b = pool.alloc(16).unwrap();
        assert_eq!(a.len(), 16);
        assert_ne!(a, b);
        assert_eq!(pool.stats().used, 32);
        assert_eq!(pool.remaining(), 32);
    }

    #[test]
    fn test_blocks_are_disjoint() {
        let mut pool = FramePool::with_capacity(8);
        let a = pool.alloc(4).unwrap();
        let b = pool.alloc(4).unwrap();
        pool.get_mut(a).fill(0xAA);
        pool.get_mut(b).fill(0xBB);
        assert_eq!(pool.get(a), &[0xAA; 4]);
        assert_eq!(pool.get(b), &[0xBB; 4]);
    }

    #[test]
    fn test_exhaustion_is_explicit_and_harmless() {
        let mut pool = FramePool::with_capacity(16);
        pool.alloc(12).unwrap();
        let err = pool.alloc(8).unwrap_err();
        assert_eq!(
            err,
            PoolExhausted {
                requested: 8,
                remaining: 4
            }
        );
        // Failed allocation leaves the offset untouched
        assert_eq!(pool.stats().used, 12);
        // A smaller request still fits
        assert!(pool.alloc(4).is_ok());
    }

    #[test]
    fn test_reset_keeps_peak() {
        let mut pool = FramePool::with_capacity(32);
        pool.alloc(24).unwrap();
        pool.reset();
        let stats = pool.stats();
        assert_eq!(stats.used, 0);
        assert_eq!(stats.peak, 24);
        assert_eq!(stats.capacity, 32);
        // Buffer is reusable after reset
        assert!(pool.alloc(32).is_ok());
    }

    #[test]
    fn test_heap_fallback() {
        let mut pool = FramePool::with_capacity(4);
        match pool.alloc_or_heap(2) {
            Scratch::Pooled(block) => assert_eq!(block.len(), 2),
            Scratch::Heap(_) => panic!("expected pooled allocation"),
        }
        match pool.alloc_or_heap(16) {
            Scratch::Heap(bytes) => assert_eq!(bytes.len(), 16),
            Scratch::Pooled(_) => panic!("expected heap fallback"),
        }
    }
}
