use core::fmt::Debug;

/// Architecture-specific interrupt masking interface.
///
/// Implemented by the HAL for the architecture family selected at build
/// time (`machine::Irq`). Both operations must be callable from interrupt
/// and fault context and must never block.
pub trait IrqControl {
    /// Saved interrupt state
    type State: Copy + Debug;

    /// Disable interrupts and return the previous state.
    fn disable() -> Self::State;

    /// Restore interrupts to a previous state.
    fn restore(state: Self::State);
}
