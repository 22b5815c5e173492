//! Architecture-neutral building blocks shared by the HAL and firmware images.
//!
//! Nothing in this crate touches hardware. Interrupt masking is expressed as
//! the [`sync::irq::IrqControl`] trait and implemented by the HAL for the
//! selected architecture family.

#![cfg_attr(not(test), no_std)]

pub mod sync;
