//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the components stay renderable on the server.

pub mod color_scheme;
pub mod storage;
pub mod upgrade;
