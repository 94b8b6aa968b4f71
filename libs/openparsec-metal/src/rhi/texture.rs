// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Texture handle.

use std::ffi::c_void;
use std::ptr::NonNull;

/// Handle to an externally-owned Metal texture.
///
/// Carries the reference only. Width, height, pixel format and usage stay
/// with whatever component allocated the texture; a handle adds no metadata
/// and takes no retain.
#[repr(transparent)]
#[derive(Debug, Clone, Copy)]
pub struct TextureHandle {
    object: NonNull<c_void>,
}

impl TextureHandle {
    /// Wrap an existing texture reference.
    ///
    /// The reference must name a live `MTLTexture`.
    pub fn new(object: NonNull<c_void>) -> Self {
        Self { object }
    }

    /// Wrap a texture reference that arrived through FFI as a raw pointer.
    ///
    /// # Safety
    ///
    /// `object` must be a non-null pointer to a live `MTLTexture`.
    /// Debug builds assert non-nullness; release builds do not check.
    pub unsafe fn from_raw(object: *mut c_void) -> Self {
        debug_assert!(!object.is_null(), "texture reference must not be null");
        // SAFETY: non-null per the caller's contract, asserted above in debug builds.
        Self::new(unsafe { NonNull::new_unchecked(object) })
    }

    /// The wrapped texture reference.
    pub fn object(&self) -> NonNull<c_void> {
        self.object
    }

    /// The wrapped reference as a raw pointer, for handing back across FFI.
    pub fn as_ptr(&self) -> *mut c_void {
        self.object.as_ptr()
    }
}

// SAFETY: The handle stores an opaque reference and never dereferences it.
// Metal textures are safe to reference from any thread; the unsafe accessors
// that produce a live texture put the runtime's threading rules on their caller.
unsafe impl Send for TextureHandle {}
unsafe impl Sync for TextureHandle {}

// A handle is exactly one pointer, with the null value left as the niche.
static_assertions::assert_eq_size!(TextureHandle, *mut c_void);
static_assertions::assert_eq_size!(Option<TextureHandle>, *mut c_void);
static_assertions::assert_impl_all!(TextureHandle: Send, Sync, Copy);
