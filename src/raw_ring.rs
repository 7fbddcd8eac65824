use self::inner::AtomicCursor;
use crate::loom::{AtomicUsize, UnsafeCell};
use core::sync::atomic::Ordering;

#[cfg(feature = "cache-padded")]
mod inner {
    use crate::loom::AtomicUsize;
    use cache_padded::CachePadded;
    use core::ops::Deref;

    #[derive(Default)]
    pub(crate) struct AtomicCursor {
        inner: CachePadded<AtomicUsize>,
    }

    impl Deref for AtomicCursor {
        type Target = AtomicUsize;

        fn deref(&self) -> &Self::Target {
            &self.inner
        }
    }
}

#[cfg(not(feature = "cache-padded"))]
mod inner {
    use crate::loom::AtomicUsize;
    use core::ops::Deref;

    #[derive(Default)]
    pub(crate) struct AtomicCursor {
        inner: AtomicUsize,
    }

    impl Deref for AtomicCursor {
        type Target = AtomicUsize;

        fn deref(&self) -> &Self::Target {
            &self.inner
        }
    }
}

unsafe impl<T: Send, const N: usize> Send for RawRing<T, N> {}
unsafe impl<T: Send, const N: usize> Sync for RawRing<T, N> {}

/// Storage and cursor arithmetic shared by every `RingBuffer` instantiation.
///
/// All `N` slots hold initialized values at all times; pops only advance the
/// consumer cursor, pushes overwrite in place. The explicit `len` counter is
/// the single source of truth for empty/full, which lets the cursors wrap
/// modulo `N` with no spare slot.
pub(crate) struct RawRing<T, const N: usize> {
    buf: [UnsafeCell<T>; N],
    producer_pos: AtomicCursor,
    consumer_pos: AtomicCursor,
    len: AtomicUsize,
}

impl<T, const N: usize> RawRing<T, N> {
    const CAPACITY_OK: () = assert!(N > 0, "ring buffer capacity must be greater than 0");

    pub(crate) fn new() -> Self
    where
        T: Default,
    {
        let () = Self::CAPACITY_OK;

        Self {
            buf: core::array::from_fn(|_| UnsafeCell::new(T::default())),
            producer_pos: Default::default(),
            consumer_pos: Default::default(),
            len: Default::default(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wraps an advanced cursor back into `[0, N)`.
    ///
    /// A single correction is enough because cursors only ever advance by at
    /// most `N` at a time.
    pub(crate) fn wrap(pos: usize) -> usize {
        debug_assert!(pos < 2 * N);
        if pos >= N {
            pos - N
        } else {
            pos
        }
    }

    pub(crate) fn producer_idx(&self) -> usize {
        self.producer_pos.load(Ordering::Acquire)
    }

    pub(crate) fn consumer_idx(&self) -> usize {
        self.consumer_pos.load(Ordering::Acquire)
    }

    pub(crate) fn store_producer_idx(&self, idx: usize) {
        debug_assert!(idx < N);
        self.producer_pos.store(idx, Ordering::Release);
    }

    pub(crate) fn store_consumer_idx(&self, idx: usize) {
        debug_assert!(idx < N);
        self.consumer_pos.store(idx, Ordering::Release);
    }

    pub(crate) fn add_len(&self, n: usize) {
        self.len.fetch_add(n, Ordering::Release);
    }

    pub(crate) fn sub_len(&self, n: usize) {
        self.len.fetch_sub(n, Ordering::Release);
    }

    pub(crate) fn set_len(&self, n: usize) {
        debug_assert!(n <= N);
        self.len.store(n, Ordering::Release);
    }

    pub(crate) unsafe fn buffer_read(&self, idx: usize) -> T
    where
        T: Copy,
    {
        debug_assert!(idx < N);
        let cell = self.buf.get_unchecked(idx);
        cell.with(|ptr| *ptr)
    }

    pub(crate) unsafe fn buffer_write(&self, idx: usize, value: T)
    where
        T: Copy,
    {
        debug_assert!(idx < N);
        let cell = self.buf.get_unchecked(idx);
        cell.with_mut(|ptr| *ptr = value);
    }
}
