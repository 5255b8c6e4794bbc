//! Explicit work partitions - which worker owns which particle indices.

use std::ops::Range;

/// Partitions handed to each pool thread; >1 so uneven cells balance out
const SPLITS_PER_WORKER: usize = 4;

/// One contiguous, exclusively owned index range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partition {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Partition {
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split of `0..len` into equal chunks (the last may be shorter).
///
/// Chunk `k` is exactly what `slice.chunks_mut(chunk_len())` yields at
/// position `k`, so a partition can be paired with its sub-slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partitions {
    len: usize,
    chunk: usize,
}

impl Partitions {
    pub fn new(len: usize, workers: usize) -> Self {
        let workers = workers.max(1);
        let chunk = len.div_ceil(workers).max(1);
        Self { len, chunk }
    }

    /// Partitions sized for the current thread pool
    pub fn for_pool(len: usize) -> Self {
        Self::new(len, worker_count() * SPLITS_PER_WORKER)
    }

    #[inline]
    pub fn chunk_len(&self) -> usize {
        self.chunk
    }

    #[inline]
    pub fn total_len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.len.div_ceil(self.chunk)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Partition {
        let start = (index * self.chunk).min(self.len);
        let end = (start + self.chunk).min(self.len);
        Partition { index, start, end }
    }

    pub fn iter(&self) -> impl Iterator<Item = Partition> + '_ {
        (0..self.count()).map(move |k| self.get(k))
    }
}

/// Threads that will share a phase
pub fn worker_count() -> usize {
    #[cfg(feature = "parallel")]
    {
        rayon::current_num_threads()
    }
    #[cfg(not(feature = "parallel"))]
    {
        1
    }
}
