// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Non-owning Metal resource handle types for the OpenParsec render path.
//!
//! Engine code that hands GPU work to the native render call needs to refer
//! to a small number of Metal objects without pulling the Objective-C object
//! model into every module that touches them. This crate provides exactly
//! that boundary: one distinct handle type per resource kind, each wrapping
//! a single never-null opaque reference.
//!
//! The handles are plain value types. They take no retain on the referenced
//! object, they add no metadata, and dropping one has no effect on the
//! resource it names. Creation, storage and release of the underlying Metal
//! objects stay with the components that own them.
//!
//! On macOS and iOS the `metal` module adds typed conversions between the
//! handles and `objc2-metal` protocol objects. Everything else compiles on
//! any platform, since nothing here ever dereferences the wrapped pointer.

pub mod rhi;

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub mod metal;

pub use rhi::{CommandQueueHandle, TextureHandle};
