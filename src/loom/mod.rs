#[cfg(loom)]
pub(crate) use ::loom::sync::atomic::*;
#[cfg(not(loom))]
pub(crate) use core::sync::atomic::*;

#[cfg(loom)]
pub(crate) use ::loom::cell::UnsafeCell;
#[cfg(not(loom))]
mod cell;
#[cfg(not(loom))]
pub(crate) use self::cell::UnsafeCell;
