// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Native Metal interop for the handle types (macOS/iOS).
//!
//! Typed conversions between the opaque handles and `objc2-metal` protocol
//! objects. Constructing a handle from a live protocol object is safe; going
//! the other way is unsafe because the handle cannot prove the object is
//! still alive.

mod command_queue;
mod texture;
