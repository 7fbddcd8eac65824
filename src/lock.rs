/// A critical-section policy injected into [`RingBuffer`](crate::RingBuffer).
///
/// The buffer only ever takes the critical section around mutation of its
/// shared element count; payload copies happen outside of it. A policy is a
/// plain value type owned by the buffer, so implementations are free to wrap
/// an interrupt mask, a spinlock handle or nothing at all.
///
/// `acquire` and `release` must be callable repeatedly and must not fail.
pub trait CriticalSection {
    fn acquire(&self);

    fn release(&self);
}

/// The default [`CriticalSection`] policy that does nothing.
///
/// Suitable for uniprocessor targets with no preemption-sensitive sharing,
/// and for single-threaded use. On multi-core targets the buffer's count is
/// still updated with atomic read-modify-write operations, so `NopLock`
/// remains sound for one producer and one consumer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopLock;

impl CriticalSection for NopLock {
    fn acquire(&self) {}

    fn release(&self) {}
}

/// A scoped guard over a [`CriticalSection`].
///
/// Acquires on [`enter`](SectionGuard::enter) and releases on drop, on every
/// exit path. Callers can use it with the buffer's own policy instance to
/// guard an iteration against concurrent mutation.
pub struct SectionGuard<'a, L: CriticalSection> {
    lock: &'a L,
}

impl<'a, L: CriticalSection> SectionGuard<'a, L> {
    pub fn enter(lock: &'a L) -> Self {
        lock.acquire();
        Self { lock }
    }
}

impl<L: CriticalSection> Drop for SectionGuard<'_, L> {
    fn drop(&mut self) {
        self.lock.release();
    }
}
