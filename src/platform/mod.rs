//! Traits and structs for the window that a border decorates.
//!
//! The border subsystem never talks to a compositor or toolkit directly.
//! Instead, everything it needs from a top-level window is described by the
//! [`Window`] trait, which a toolkit implements for its own window type.
//!
//! ## The `Window` trait
//!
//! A `Window` exposes three groups of functionality:
//!
//! - Geometry: querying and setting the window's _real_ size and position.
//! - State changes: maximizing, minimizing and destroying the window, as well
//! as asking the compositor to start an interactive move or resize.
//! - Presentation: transparency, background color, floating mode, and adding
//! or removing views on top of the window content.
//!
//! Sizes passed through a `Window` are always [`Real`], that is, the size the
//! compositor sees including any border decoration. Converting to and from the
//! content-only size is the responsibility of [`BorderHost`][1].
//!
//! [`HeadlessWindow`] is an in-memory implementation that records every request
//! made to it, for testing and for running a border without a compositor.
//!
//! [1]: crate::border::BorderHost

use std::fmt::Debug;

use crate::core::{View, ViewId};
use crate::types::{Color, Point, Real, ResizeDirection, Size};

pub mod headless;

#[doc(inline)]
pub use headless::{HeadlessWindow, WindowRequest};

/// A top-level window that can be decorated with a border.
///
/// All methods are called from the UI thread. Requests that the compositor
/// acts on asynchronously (moves, resizes, maximizing) are fire-and-forget:
/// the window reports the outcome later through
/// [`BorderHost::handle_resized`][1].
///
/// [1]: crate::border::BorderHost::handle_resized
pub trait Window: Debug {
    /// Returns the real size of the window.
    fn size(&self) -> Size<i32, Real>;

    /// Sets the real size of the window.
    fn set_size(&mut self, size: Size<i32, Real>);

    /// Returns the position of the window on the screen.
    fn position(&self) -> Point<i32>;

    /// Moves the window to `pos` on the screen.
    fn set_position(&mut self, pos: Point<i32>);

    /// Tests whether the window is currently maximized.
    fn is_maximized(&self) -> bool;

    /// Maximizes or restores the window.
    fn maximize(&mut self, maximize: bool);

    /// Minimizes or restores the window.
    fn minimize(&mut self, minimize: bool);

    /// Destroys the window.
    fn destroy(&mut self);

    /// Asks the compositor to start an interactive move.
    fn request_move_to_server(&mut self);

    /// Asks the compositor to start an interactive resize in direction `dir`.
    fn request_resize_to_server(&mut self, dir: ResizeDirection);

    /// Sets whether the window is drawn with an alpha channel.
    fn set_transparency(&mut self, transparent: bool);

    /// Sets the background color of the window.
    fn set_background_color(&mut self, color: Color);

    /// Switches the window into floating mode, so it is not
    /// managed by a tiling layout.
    fn enable_floating_mode(&mut self);

    /// Adds a view on top of the window content, returning its identifier.
    fn add_view(&mut self, view: View) -> ViewId;

    /// Removes a view previously added with `add_view`.
    fn remove_view(&mut self, id: ViewId) -> Option<View>;
}
