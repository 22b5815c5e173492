use core::{
    cell::UnsafeCell,
    marker::PhantomData,
    sync::atomic::{AtomicBool, Ordering},
};

use super::irq::IrqControl;

/// IRQ-safe spinlock.
///
/// - Disables interrupts on lock
/// - Spins until acquired
/// - Restores interrupt state on drop
///
/// Safe to use from:
/// - IRQ context
/// - Normal firmware context
///
/// Not fair. Not reentrant.
pub struct IrqSpinLock<T, I: IrqControl> {
    locked: AtomicBool,
    data: UnsafeCell<T>,
    _irq: PhantomData<I>,
}

unsafe impl<T: Send, I: IrqControl> Send for IrqSpinLock<T, I> {}
unsafe impl<T: Send, I: IrqControl> Sync for IrqSpinLock<T, I> {}

impl<T, I: IrqControl> IrqSpinLock<T, I> {
    /// Create a new IRQ-safe spinlock.
    pub const fn new(data: T) -> Self {
        Self {
            locked: AtomicBool::new(false),
            data: UnsafeCell::new(data),
            _irq: PhantomData,
        }
    }

    /// Acquire the lock with interrupts disabled.
    pub fn lock(&self) -> IrqSpinLockGuard<'_, T, I> {
        let irq_state = I::disable();

        while self
            .locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            core::hint::spin_loop();
        }

        IrqSpinLockGuard {
            lock: self,
            irq_state,
        }
    }

    /// Try to acquire the lock once.
    ///
    /// On failure the interrupt state is restored before returning `None`,
    /// so a fault handler can use this without risking a deadlock against
    /// the context it interrupted.
    pub fn try_lock(&self) -> Option<IrqSpinLockGuard<'_, T, I>> {
        let irq_state = I::disable();

        match self
            .locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
        {
            Ok(_) => Some(IrqSpinLockGuard {
                lock: self,
                irq_state,
            }),
            Err(_) => {
                I::restore(irq_state);
                None
            }
        }
    }
}

/// Guard returned by `IrqSpinLock::lock`.
///
/// Restores interrupt state on drop.
pub struct IrqSpinLockGuard<'a, T, I: IrqControl> {
    lock: &'a IrqSpinLock<T, I>,
    irq_state: I::State,
}

impl<T, I: IrqControl> core::ops::Deref for IrqSpinLockGuard<'_, T, I> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &*self.lock.data.get() }
    }
}

impl<T, I: IrqControl> core::ops::DerefMut for IrqSpinLockGuard<'_, T, I> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<T, I: IrqControl> Drop for IrqSpinLockGuard<'_, T, I> {
    fn drop(&mut self) {
        // Release lock first
        self.lock.locked.store(false, Ordering::Release);

        I::restore(self.irq_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::AtomicUsize;

    /// Records how deeply interrupts are masked.
    struct CountingIrq;

    static MASKED: AtomicUsize = AtomicUsize::new(0);

    impl IrqControl for CountingIrq {
        type State = ();

        fn disable() {
            MASKED.fetch_add(1, Ordering::SeqCst);
        }

        fn restore(_: ()) {
            MASKED.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn interrupts_masked_only_while_held() {
        let lock: IrqSpinLock<u32, CountingIrq> = IrqSpinLock::new(0);
        {
            let mut guard = lock.lock();
            *guard = 7;
            assert_eq!(MASKED.load(Ordering::SeqCst), 1);

            // Contended attempt leaves the mask depth unchanged.
            assert!(lock.try_lock().is_none());
            assert_eq!(MASKED.load(Ordering::SeqCst), 1);
        }
        assert_eq!(MASKED.load(Ordering::SeqCst), 0);
        assert_eq!(*lock.try_lock().unwrap(), 7);
        assert_eq!(MASKED.load(Ordering::SeqCst), 0);
    }
}
