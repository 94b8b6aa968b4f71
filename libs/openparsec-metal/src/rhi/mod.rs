// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Resource handle types shared across the render path.
//!
//! Each handle wraps one never-null opaque reference to an externally-owned
//! GPU object. The two kinds are deliberately separate types so a queue
//! reference can never be stored in, or read out of, a texture slot:
//!
//! ```compile_fail
//! use std::ffi::c_void;
//! use std::ptr::NonNull;
//! use openparsec_metal::{CommandQueueHandle, TextureHandle};
//!
//! fn submit(queue: CommandQueueHandle) {
//!     let _ = queue;
//! }
//!
//! let mut stub = 0u8;
//! let object = NonNull::new(&mut stub as *mut u8 as *mut c_void).unwrap();
//! let texture = TextureHandle::new(object);
//! submit(texture); // a texture is not a command queue
//! ```

mod command_queue;
mod texture;

pub use command_queue::CommandQueueHandle;
pub use texture::TextureHandle;
