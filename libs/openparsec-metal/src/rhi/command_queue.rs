// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Command queue handle.

use std::ffi::c_void;
use std::ptr::NonNull;

/// Handle to an externally-owned Metal command queue.
///
/// The queue itself is created and released by whoever owns the device;
/// this type only carries the reference between modules. Copying a handle
/// copies the reference, nothing else. Dropping a handle leaves the queue
/// untouched.
///
/// Command queues are long-lived and shared across the whole render path,
/// so copies of the same handle routinely circulate on several threads.
/// The handle itself never touches the object it names; anyone who turns
/// it back into a live queue (see the `metal` module) follows the Metal
/// runtime's own threading rules while using it.
#[repr(transparent)]
#[derive(Debug, Clone, Copy)]
pub struct CommandQueueHandle {
    object: NonNull<c_void>,
}

impl CommandQueueHandle {
    /// Wrap an existing command queue reference.
    ///
    /// The reference must name a live `MTLCommandQueue`. Non-nullness is
    /// carried by the argument type.
    pub fn new(object: NonNull<c_void>) -> Self {
        Self { object }
    }

    /// Wrap a command queue reference that arrived through FFI as a raw
    /// pointer.
    ///
    /// # Safety
    ///
    /// `object` must be a non-null pointer to a live `MTLCommandQueue`.
    /// Debug builds assert non-nullness; release builds do not check.
    pub unsafe fn from_raw(object: *mut c_void) -> Self {
        debug_assert!(!object.is_null(), "command queue reference must not be null");
        // SAFETY: non-null per the caller's contract, asserted above in debug builds.
        Self::new(unsafe { NonNull::new_unchecked(object) })
    }

    /// The wrapped command queue reference.
    pub fn object(&self) -> NonNull<c_void> {
        self.object
    }

    /// The wrapped reference as a raw pointer, for handing back across FFI.
    pub fn as_ptr(&self) -> *mut c_void {
        self.object.as_ptr()
    }
}

// SAFETY: The handle stores an opaque reference and never dereferences it.
// Metal command queues are safe to use from any thread; the unsafe accessors
// that produce a live queue put the runtime's threading rules on their caller.
unsafe impl Send for CommandQueueHandle {}
unsafe impl Sync for CommandQueueHandle {}

// A handle is exactly one pointer, with the null value left as the niche.
static_assertions::assert_eq_size!(CommandQueueHandle, *mut c_void);
static_assertions::assert_eq_size!(Option<CommandQueueHandle>, *mut c_void);
static_assertions::assert_impl_all!(CommandQueueHandle: Send, Sync, Copy);
