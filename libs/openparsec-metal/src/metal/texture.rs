// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Texture handle interop with `MTLTexture`.

use std::ffi::c_void;
use std::ptr::NonNull;

use objc2::runtime::ProtocolObject;
use objc2_metal::MTLTexture;

use crate::rhi::TextureHandle;

impl TextureHandle {
    /// Wrap a live Metal texture.
    ///
    /// No retain is taken. The caller keeps the texture alive for as long
    /// as this handle (or any copy of it) circulates.
    pub fn from_texture(texture: &ProtocolObject<dyn MTLTexture>) -> Self {
        let object = texture as *const ProtocolObject<dyn MTLTexture> as *mut c_void;
        // SAFETY: derived from a live reference, therefore non-null.
        Self::new(unsafe { NonNull::new_unchecked(object) })
    }

    /// The wrapped reference as a Metal texture protocol object.
    ///
    /// # Safety
    ///
    /// The referenced object must still be alive and must have been an
    /// `MTLTexture` when the handle was constructed.
    pub unsafe fn as_texture(&self) -> &ProtocolObject<dyn MTLTexture> {
        let obj_ptr = self.as_ptr() as *const ProtocolObject<dyn MTLTexture>;
        // SAFETY: live and of the right kind per the caller's contract.
        unsafe { &*obj_ptr }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objc2_metal::{
        MTLCreateSystemDefaultDevice, MTLDevice, MTLPixelFormat, MTLTextureDescriptor,
        MTLTextureUsage,
    };

    fn create_test_texture(
        width: usize,
        height: usize,
    ) -> objc2::rc::Retained<ProtocolObject<dyn MTLTexture>> {
        let device = MTLCreateSystemDefaultDevice().expect("No Metal device available");

        let descriptor = MTLTextureDescriptor::new();
        unsafe {
            descriptor.setWidth(width);
            descriptor.setHeight(height);
            descriptor.setPixelFormat(MTLPixelFormat::BGRA8Unorm);
            descriptor.setUsage(MTLTextureUsage::ShaderRead);
        }

        device
            .newTextureWithDescriptor(&descriptor)
            .expect("Failed to create Metal texture")
    }

    #[test]
    fn test_texture_handle_round_trips_protocol_object() {
        let texture = create_test_texture(128, 64);

        let handle = TextureHandle::from_texture(&texture);
        let roundtrip = unsafe { handle.as_texture() };
        assert!(std::ptr::eq(roundtrip, &*texture));
    }

    #[test]
    fn test_texture_attributes_read_back_through_handle() {
        let texture = create_test_texture(128, 64);

        let handle = TextureHandle::from_texture(&texture);
        let roundtrip = unsafe { handle.as_texture() };
        assert_eq!(roundtrip.width(), 128);
        assert_eq!(roundtrip.height(), 64);
        assert_eq!(roundtrip.pixelFormat(), MTLPixelFormat::BGRA8Unorm);
    }
}
