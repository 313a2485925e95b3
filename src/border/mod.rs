//! The border subsystem.
//!
//! This module contains the [`BorderHost`], which owns a window and keeps
//! its real and bordered sizes in sync, and the [`BorderPolicy`] trait,
//! which describes the pluggable strategy that draws the border and turns
//! input into window actions.
//!
//! ## Control Flow
//!
//! The host owns exactly one policy. It raises window lifecycle events
//! (creation, resizes, overlay mode changes, timer ticks) and input events
//! to the policy, and in each callback hands the policy a [`BorderCtxt`].
//! The policy issues all of its requests (moving, resizing, maximizing and
//! so on) back through this context.
//!
//! ```text
//!  event loop ──dispatch/tick──▶ BorderHost ──callbacks──▶ BorderPolicy
//!                                    ▲                         │
//!                                    └──────BorderCtxt─────────┘
//! ```

use std::fmt::Debug;

use crate::core::View;
use crate::platform::Window;
use crate::types::{Bordered, Real, Size, SizeKind};
use crate::Result;

pub mod ctxt;
pub mod default;
pub mod direction;
pub mod gesture;
pub mod host;

#[doc(inline)]
pub use ctxt::{BorderCtxt, Subscriptions};
#[doc(inline)]
pub use default::DefaultBorder;
#[doc(inline)]
pub use gesture::{
    BorderIcon, GestureArbiter, GestureKind, GestureState,
    PanGesture, PinchGesture, PointState, TapGesture, Touch,
};
#[doc(inline)]
pub use host::{BorderHost, InputEvent};

/// The footprint of a border decoration, and the size limits of the
/// window it decorates.
///
/// The decoration adds a line of `line_thickness` on the left, right and
/// top of the content, and a strip of `border_height` plus another line
/// below it:
///
/// ```text
///  +++++++
///  +*****+
///  +*****+
///  +=====+
///  +=====+
/// ```
///
/// where `+` is the line and `=` is the border strip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderGeometry {
    /// The thickness of the line drawn around the content.
    pub line_thickness: u32,
    /// The width of the band along each edge that resizes from that edge.
    pub touch_thickness: u32,
    /// The height of the border strip below the content.
    pub border_height: u32,
    /// The smallest bordered size the window may take.
    pub min_size: Option<Size<i32, Bordered>>,
    /// The largest bordered size the window may take.
    pub max_size: Option<Size<i32, Bordered>>,
}

impl BorderGeometry {
    /// The amount the decoration adds to the content size.
    pub fn footprint<K: SizeKind>(&self) -> Size<i32, K> {
        Size::new(
            2 * self.line_thickness as i32,
            (self.border_height + self.line_thickness) as i32,
        )
    }

    /// Clamps `size` component-wise to the minimum and maximum sizes, if set.
    pub fn clamp(&self, size: Size<i32, Bordered>) -> Size<i32, Bordered> {
        let mut size = size;
        if let Some(min) = self.min_size {
            size = size.at_least(min);
        }
        if let Some(max) = self.max_size {
            size = size.at_most(max);
        }
        size
    }

    /// Converts a real size to a bordered size.
    ///
    /// If `decorated` is false, the decoration is not drawn and
    /// the sizes are the same.
    pub fn to_bordered(&self, real: Size<i32, Real>, decorated: bool) -> Size<i32, Bordered> {
        if decorated {
            (real - self.footprint()).cast()
        } else {
            real.cast()
        }
    }

    /// Converts a bordered size to a real size.
    ///
    /// If `decorated` is false, the decoration is not drawn and
    /// the sizes are the same.
    pub fn to_real(&self, bordered: Size<i32, Bordered>, decorated: bool) -> Size<i32, Real> {
        if decorated {
            bordered.saturating_add(self.footprint()).cast()
        } else {
            bordered.cast()
        }
    }
}

/// A strategy that draws a border and turns input into window actions.
///
/// A `BorderPolicy` is handed to [`BorderHost::enable_border`], which
/// takes ownership of it. From then on, the host calls into it for every
/// event, always passing a [`BorderCtxt`] that mediates access to the window.
///
/// Apart from the geometry and view construction, every callback has a
/// default implementation that does nothing, so a policy only needs to
/// implement the behaviour it cares about. Input callbacks return whether
/// the input was consumed.
///
/// Input callbacks only run while the policy is subscribed to the matching
/// [`Subscriptions`] flag. See [`InputEvent`] for the mapping.
///
/// [`DefaultBorder`] is the stock implementation.
pub trait BorderPolicy<W: Window>: Debug {
    /// The geometry of the decoration this policy draws.
    fn geometry(&self) -> BorderGeometry;

    /// Whether the decoration is hidden while the window is maximized.
    fn overlay_mode(&self) -> bool {
        false
    }

    /// Builds the border's visual tree into `root`.
    ///
    /// If this returns an error, enabling the border fails and is rolled back.
    fn create_border_view(&mut self, root: &mut View) -> Result<()>;

    /// Called once the border has been enabled and the root view attached.
    fn on_created(&mut self, _ctx: &mut BorderCtxt<'_, W>) {}

    /// Called right before a server-assisted resize is requested.
    fn on_request_resize(&mut self, _ctx: &mut BorderCtxt<'_, W>) {}

    /// Called after the window was resized, with the final bordered size.
    fn on_resized(&mut self, _ctx: &mut BorderCtxt<'_, W>, _size: Size<i32, Bordered>) {}

    /// Called when the window enters or leaves overlay-maximized state.
    ///
    /// Only called if [`overlay_mode`](BorderPolicy::overlay_mode) is true.
    fn on_overlay_mode(&mut self, _ctx: &mut BorderCtxt<'_, W>, _enable: bool) {}

    /// Called for a touch anywhere on the window.
    fn on_window_touch(&mut self, _ctx: &mut BorderCtxt<'_, W>, _touch: &Touch) -> bool {
        false
    }

    /// Called for a touch on the border root view.
    fn on_border_touch(&mut self, _ctx: &mut BorderCtxt<'_, W>, _touch: &Touch) -> bool {
        false
    }

    /// Called for a pan gesture on the border root view.
    fn on_border_pan(&mut self, _ctx: &mut BorderCtxt<'_, W>, _pan: &PanGesture) -> bool {
        false
    }

    /// Called for a pinch gesture on the border root view.
    fn on_border_pinch(&mut self, _ctx: &mut BorderCtxt<'_, W>, _pinch: &PinchGesture) -> bool {
        false
    }

    /// Called for a touch on one of the border's icons.
    fn on_icon_touch(&mut self, _ctx: &mut BorderCtxt<'_, W>, _icon: BorderIcon, _touch: &Touch) -> bool {
        false
    }

    /// Called for a tap gesture on the whole-window overlay.
    fn on_overlay_tap(&mut self, _ctx: &mut BorderCtxt<'_, W>, _tap: &TapGesture) -> bool {
        false
    }

    /// Called for a pan gesture on the whole-window overlay.
    fn on_overlay_pan(&mut self, _ctx: &mut BorderCtxt<'_, W>, _pan: &PanGesture) -> bool {
        false
    }

    /// Called once per frame so the policy can poll its timers.
    fn on_tick(&mut self, _ctx: &mut BorderCtxt<'_, W>) {}

    /// Releases everything the policy owns. Called exactly once, when the
    /// border is disposed.
    fn dispose(&mut self, _ctx: &mut BorderCtxt<'_, W>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> BorderGeometry {
        BorderGeometry {
            line_thickness: 5,
            touch_thickness: 20,
            border_height: 50,
            min_size: Some(Size::new(100, 0)),
            max_size: Some(Size::new(1000, 800)),
        }
    }

    #[test]
    fn test_size_conversion_roundtrip() {
        let geom = geometry();
        let real = Size::<i32, Real>::new(410, 355);

        let bordered = geom.to_bordered(real, true);
        assert_eq!(bordered, Size::new(400, 300));
        assert_eq!(geom.to_real(bordered, true), real);
    }

    #[test]
    fn test_undecorated_conversion_is_identity() {
        let geom = geometry();
        let bordered = Size::<i32, Bordered>::new(1920, 1080);

        assert_eq!(geom.to_real(bordered, false), Size::new(1920, 1080));
        assert_eq!(geom.to_bordered(Size::new(1920, 1080), false), bordered);
    }

    #[test]
    fn test_clamp() {
        let geom = geometry();

        assert_eq!(geom.clamp(Size::new(50, 900)), Size::new(100, 800));
        assert_eq!(geom.clamp(Size::new(300, 200)), Size::new(300, 200));
    }
}
