//! This module contains the core types used within winborder.
//! They are the building blocks that the border host and its
//! policies are written in terms of.

/// Basic types used throughout winborder.
pub mod types;
/// A minimal retained visual tree.
pub mod view;
/// Dwell timers polled from the UI thread.
pub mod timer;

pub use view::{View, ViewId, Layer, StackOrder};
pub use timer::DwellTimer;
