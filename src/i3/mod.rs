//! i3/sway-specific implementations.
//!
//! This module provides the concrete backend for the
//! [`WindowManager`](crate::traits::WindowManager) trait, speaking the
//! i3 IPC protocol directly over its Unix socket.  sway implements the
//! same protocol, so both are supported.
//!
//! Nothing outside this module should reference i3 directly.

pub mod message;
pub mod wm;
