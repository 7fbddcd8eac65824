use crate::lock::{CriticalSection, NopLock, SectionGuard};
use crate::raw_ring::RawRing;
use core::iter::FusedIterator;
use core::mem;

/// A fixed-capacity FIFO queue over a contiguous, stack-allocated store.
///
/// `N` is the capacity in elements and must be greater than zero. `L` is the
/// [`CriticalSection`] policy guarding mutation of the shared element count;
/// it defaults to the no-op [`NopLock`].
///
/// Element types are bulk-copied values: `T: Copy`, and `T: Default` for the
/// initial slot fill. Popped elements are never dropped in place, only
/// overwritten by later pushes.
///
/// A single instance may be shared between exactly one producer context and
/// one consumer context; all operations take `&self`. Pushing while full
/// rejects the excess instead of overwriting unread elements.
pub struct RingBuffer<T, const N: usize, L: CriticalSection = NopLock> {
    raw: RawRing<T, N>,
    lock: L,
}

impl<T: Copy + Default, const N: usize, L: CriticalSection + Default> Default
    for RingBuffer<T, N, L>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize, L: CriticalSection + Default> RingBuffer<T, N, L> {
    /// Creates an empty buffer with a default-constructed policy.
    pub fn new() -> Self {
        Self::with_lock(L::default())
    }
}

impl<T: Copy + Default, const N: usize, L: CriticalSection> RingBuffer<T, N, L> {
    /// Creates an empty buffer around a pre-built policy instance.
    pub fn with_lock(lock: L) -> Self {
        Self {
            raw: RawRing::new(),
            lock,
        }
    }
}

impl<T: Copy, const N: usize, L: CriticalSection> RingBuffer<T, N, L> {
    /// Total capacity, in elements.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Total capacity, in bytes.
    pub const fn capacity_bytes(&self) -> usize {
        N * mem::size_of::<T>()
    }

    /// Number of elements currently stored.
    ///
    /// Advisory under concurrent mutation: the value may be stale by the
    /// time the caller inspects it.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Copies elements out of `items` into the buffer until the input is
    /// exhausted or the buffer is full, then bumps the shared count once
    /// under a single critical-section acquisition.
    ///
    /// Excess input is left in the iterator, never overwritten into unread
    /// slots. Returns the number of elements accepted, which is `0` when the
    /// buffer was already full or the input was empty.
    pub fn push_many<I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        let mut used = self.raw.len();
        let mut idx = self.raw.producer_idx();
        let mut pushed = 0;

        while used < N {
            let Some(item) = items.next() else { break };

            unsafe {
                self.raw.buffer_write(idx, item);
            }
            idx = RawRing::<T, N>::wrap(idx + 1);
            used += 1;
            pushed += 1;
        }

        if pushed > 0 {
            // the payload and the cursor must be in place before the count
            // makes the elements visible to the consumer
            self.raw.store_producer_idx(idx);
            let _cs = SectionGuard::enter(&self.lock);
            self.raw.add_len(pushed);
        }

        pushed
    }

    /// Pushes a single element; returns whether it was accepted.
    pub fn push_one(&self, value: T) -> bool {
        self.push_many(core::iter::once(value)) == 1
    }

    /// Returns the element at the front of the queue without removing it.
    ///
    /// If the buffer is empty this returns whatever stale value occupies the
    /// front slot; that is not a fault, but callers are expected to check
    /// [`is_empty`](Self::is_empty) first. Peeking a possibly-empty buffer
    /// must not race a concurrent push into the same slot.
    pub fn peek(&self) -> T {
        unsafe { self.raw.buffer_read(self.raw.consumer_idx()) }
    }

    /// Discards the front element; returns `false` on an empty buffer.
    pub fn pop(&self) -> bool {
        self.pop_many(1) == 1
    }

    /// Discards up to `count` elements from the front in one step.
    ///
    /// The request is clamped to the current length; the cursor advances
    /// once and the count is decremented under a single critical-section
    /// acquisition. Returns the number of elements actually removed.
    pub fn pop_many(&self, count: usize) -> usize {
        let count = count.min(self.raw.len());

        if count > 0 {
            let idx = RawRing::<T, N>::wrap(self.raw.consumer_idx() + count);
            self.raw.store_consumer_idx(idx);
            let _cs = SectionGuard::enter(&self.lock);
            self.raw.sub_len(count);
        }

        count
    }

    /// Removes and returns the front element, or `None` on an empty buffer.
    pub fn try_pop(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.peek();
        self.pop();
        Some(value)
    }

    /// Empties the buffer.
    ///
    /// The consumer cursor collapses onto the producer cursor rather than
    /// rewinding to slot 0, and the count drops to zero under the critical
    /// section. Iterators taken before the clear no longer describe live
    /// contents. Must not race an in-flight push.
    pub fn clear(&self) {
        let _cs = SectionGuard::enter(&self.lock);
        self.raw.store_consumer_idx(self.raw.producer_idx());
        self.raw.set_len(0);
    }

    /// Moves as many elements as the target will accept from the front of
    /// `self` into `target`, preserving order.
    ///
    /// The target may have a different capacity and a different policy; the
    /// transfer goes through the public push/pop contract only, copying the
    /// data. Exactly the accepted number of elements is removed from `self`,
    /// so a partial move leaves the remainder in place for the caller to
    /// retry. Returns the number of elements moved.
    pub fn move_to<const M: usize, L2>(&self, target: &RingBuffer<T, M, L2>) -> usize
    where
        L2: CriticalSection,
    {
        let accepted = target.push_many(self.iter());
        self.pop_many(accepted)
    }

    /// Returns a lazy forward-only iterator over the current contents,
    /// oldest first, yielding copies.
    ///
    /// The iterator snapshots the front cursor and length at construction:
    /// it wraps around the physical end of the store at most once and does
    /// not observe pushes or pops performed afterwards. Mutating the buffer
    /// while iterating is not supported; callers that need it must hold the
    /// buffer's policy for the duration, e.g. via
    /// [`SectionGuard`](crate::SectionGuard).
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            raw: &self.raw,
            idx: self.raw.consumer_idx(),
            remaining: self.raw.len(),
        }
    }
}

impl<'a, T: Copy, const N: usize, L: CriticalSection> IntoIterator for &'a RingBuffer<T, N, L> {
    type Item = T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Copy, const N: usize, L: CriticalSection> Extend<T> for RingBuffer<T, N, L> {
    /// Lossy on overflow: input beyond the free space is dropped, matching
    /// [`push_many`](RingBuffer::push_many).
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_many(iter);
    }
}

/// Snapshot iterator over a [`RingBuffer`], created by
/// [`RingBuffer::iter`].
pub struct Iter<'a, T, const N: usize> {
    raw: &'a RawRing<T, N>,
    idx: usize,
    remaining: usize,
}

impl<T: Copy, const N: usize> Iterator for Iter<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }

        let value = unsafe { self.raw.buffer_read(self.idx) };
        self.idx = RawRing::<T, N>::wrap(self.idx + 1);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T: Copy, const N: usize> FusedIterator for Iter<'_, T, N> {}
