// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Command queue handle interop with `MTLCommandQueue`.

use std::ffi::c_void;
use std::ptr::NonNull;

use objc2::runtime::ProtocolObject;
use objc2_metal::MTLCommandQueue;

use crate::rhi::CommandQueueHandle;

impl CommandQueueHandle {
    /// Wrap a live Metal command queue.
    ///
    /// No retain is taken. The caller keeps the queue alive for as long as
    /// this handle (or any copy of it) circulates.
    pub fn from_queue(queue: &ProtocolObject<dyn MTLCommandQueue>) -> Self {
        let object = queue as *const ProtocolObject<dyn MTLCommandQueue> as *mut c_void;
        // SAFETY: derived from a live reference, therefore non-null.
        Self::new(unsafe { NonNull::new_unchecked(object) })
    }

    /// The wrapped reference as a Metal command queue protocol object.
    ///
    /// # Safety
    ///
    /// The referenced object must still be alive and must have been an
    /// `MTLCommandQueue` when the handle was constructed.
    pub unsafe fn as_queue(&self) -> &ProtocolObject<dyn MTLCommandQueue> {
        let obj_ptr = self.as_ptr() as *const ProtocolObject<dyn MTLCommandQueue>;
        // SAFETY: live and of the right kind per the caller's contract.
        unsafe { &*obj_ptr }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objc2_metal::{MTLCreateSystemDefaultDevice, MTLDevice};

    #[test]
    fn test_queue_handle_round_trips_protocol_object() {
        let device = MTLCreateSystemDefaultDevice().expect("No Metal device available");
        let queue = device
            .newCommandQueue()
            .expect("Failed to create Metal command queue");

        let handle = CommandQueueHandle::from_queue(&queue);
        let roundtrip = unsafe { handle.as_queue() };
        assert!(std::ptr::eq(roundtrip, &*queue));
    }

    #[test]
    fn test_copied_queue_handles_name_the_same_queue() {
        let device = MTLCreateSystemDefaultDevice().expect("No Metal device available");
        let queue = device
            .newCommandQueue()
            .expect("Failed to create Metal command queue");

        let handle = CommandQueueHandle::from_queue(&queue);
        let copy = handle;
        assert_eq!(copy.as_ptr(), handle.as_ptr());
    }
}
