//! # winborder - touch-driven window borders
//!
//! winborder overlays a custom-drawn border onto a top-level window, and turns
//! the touches and gestures made on it into window actions: moving, resizing
//! from any of eight directions, minimizing, maximizing and closing.
//!
//! ## Design
//!
//! The crate is built around two pieces, composed by delegation:
//!
//! - [`BorderHost`], which owns the real window, tracks whether bordering is
//! enabled, and keeps the window's _real_ size (as the compositor sees it)
//! and its _bordered_ size (the content area inside the decoration) in sync.
//! - A [`BorderPolicy`], a pluggable strategy that draws the border and classifies
//! input into window actions. [`DefaultBorder`] is the stock implementation.
//!
//! The host owns exactly one policy. It forwards window lifecycle events and input
//! to the policy, and the policy issues its requests back through a [`BorderCtxt`],
//! which is the only way a policy can touch the window.
//!
//! ### Platforms
//!
//! The window itself is abstracted over by the [`Window`] trait. Implement it
//! for your toolkit's window type; [`HeadlessWindow`] is an in-memory
//! implementation that records every request made to it, and is useful for
//! testing and for driving the border without a compositor.
//!
//! ### Event Loops
//!
//! Everything here runs on the UI thread. Input is handed to
//! [`BorderHost::dispatch`] as it arrives, and [`BorderHost::tick`] should be
//! called once per frame so that pending dwell timers can fire.
//!
//! ## Usage
//!
//! ```rust
//! use winborder::{BorderHost, HeadlessWindow, Window};
//! use winborder::types::{Size, Real};
//!
//! let window = HeadlessWindow::new(Size::<i32, Real>::new(400, 300));
//! let mut host = BorderHost::new(window);
//!
//! host.enable_border(None).expect("could not enable border");
//!
//! // the window has grown by the border footprint
//! assert_eq!(host.window().size(), Size::new(410, 355));
//! ```

#![warn(
    missing_debug_implementations,
    missing_docs
)]

pub mod config;
pub mod core;
pub mod border;
pub mod platform;
pub mod log;

pub use crate::core::types;
#[doc(inline)]
pub use crate::border::{BorderHost, BorderPolicy, BorderCtxt, DefaultBorder, InputEvent};
#[doc(inline)]
pub use crate::config::BorderConfig;
#[doc(inline)]
pub use crate::platform::{Window, HeadlessWindow};

use thiserror::Error;

/// Everything that could possibly go wrong while bordering a window.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BorderError {
    /// The border is already enabled on this window.
    #[error("border is already enabled")]
    AlreadyEnabled,

    /// An operation that requires an enabled border was attempted without one.
    #[error("border is not enabled")]
    NotEnabled,

    /// The policy could not build its visual tree.
    #[error("could not create border view: {0}")]
    ViewCreation(String),

    /// One or more configuration invariants was not upheld.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An error not covered by winborder.
    #[error("Error: {0}")]
    OtherError(String),
}

/// The general result type used by winborder.
pub type Result<T> = ::core::result::Result<T, BorderError>;

/// An error handler that can be used to handle errors that
/// occur inside event callbacks.
///
/// Event callbacks never propagate errors, since doing so would abort
/// event dispatch. Instead, anything they cannot act on is passed here.
/// Typically this would be a standard logging function, but it can be anything.
pub trait ErrorHandler {
    /// Calls the error handler.
    fn call(&self, err: BorderError);
}
