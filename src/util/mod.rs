//! Host-independent behavior behind each page enhancement.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the decisions (what theme, visible or not, which
//! frame, which key) while `browser` only wires them to DOM events. That keeps
//! everything here testable on the native target.

pub mod dark_mode;
pub mod reveal;
pub mod scroll;
pub mod shortcut;
pub mod storage;
pub mod typing;
