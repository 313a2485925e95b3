//! Touch and gesture input, and arbitration between competing gestures.
//!
//! The embedding toolkit runs its own gesture detection; this module only
//! describes what it reports. A [`Touch`] is a single frame of raw touch
//! input, while [`PanGesture`], [`PinchGesture`] and [`TapGesture`] are
//! recognized gestures.
//!
//! ## Arbitration
//!
//! At most one kind of gesture drives the window at a time. Kinds are ordered
//! by priority as `None < Tap < Pan < Pinch`, and a gesture may only act while
//! no higher-priority kind is active. [`may_act`] states this rule, and
//! [`GestureArbiter`] tracks the active kind.

use strum::{Display, EnumIs};
use strum_macros::EnumIter;

use crate::types::Point;

/// The state of the first touch point in a [`Touch`] frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs, Display)]
pub enum PointState {
    /// The point went down.
    Down,
    /// The point was lifted.
    Up,
    /// The point moved.
    Motion,
    /// The point left the view it started on.
    Leave,
    /// The point is down but did not move.
    Stationary,
    /// The touch was interrupted by the system.
    Interrupted,
}

/// A single frame of touch input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    /// The state of the first point.
    pub state: PointState,
    /// The number of points currently down.
    pub point_count: usize,
    /// The position of the first point, in real-window coordinates.
    pub position: Point<f32>,
}

impl Touch {
    /// Creates a new Touch.
    pub fn new(state: PointState, point_count: usize, position: Point<f32>) -> Self {
        Self {
            state,
            point_count,
            position,
        }
    }

    /// Creates a Touch of a single point.
    pub fn single(state: PointState, position: Point<f32>) -> Self {
        Self::new(state, 1, position)
    }
}

/// The lifecycle state of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIs, Display)]
pub enum GestureState {
    /// The gesture was recognized.
    Started,
    /// The gesture is in progress.
    Continuing,
    /// The gesture ended normally.
    Finished,
    /// The gesture was cancelled.
    Cancelled,
}

impl GestureState {
    /// Whether the gesture is over, either finished or cancelled.
    pub fn is_over(&self) -> bool {
        matches!(self, GestureState::Finished | GestureState::Cancelled)
    }
}

/// A single-finger drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    /// The state of the gesture.
    pub state: GestureState,
    /// Where the gesture currently is, in real-window coordinates.
    pub position: Point<f32>,
    /// How far the gesture moved on screen since the last frame.
    pub screen_displacement: Point<f32>,
}

impl PanGesture {
    /// Creates a new PanGesture.
    pub fn new(state: GestureState, position: Point<f32>, screen_displacement: Point<f32>) -> Self {
        Self {
            state,
            position,
            screen_displacement,
        }
    }
}

/// A two-finger pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchGesture {
    /// The state of the gesture.
    pub state: GestureState,
    /// The scale relative to the distance between the fingers at the start.
    pub scale: f32,
}

/// One or more taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapGesture {
    /// The number of consecutive taps.
    pub taps: u32,
}

/// The icons that a border draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum BorderIcon {
    /// Minimizes the window.
    Minimize,
    /// Toggles whether the window is maximized.
    Maximize,
    /// Closes the window.
    Close,
    /// Resizes the window from its bottom left corner.
    LeftCorner,
    /// Resizes the window from its bottom right corner.
    RightCorner,
}

/// The kind of gesture currently driving the window.
///
/// Variants are ordered by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, EnumIs, EnumIter, Display)]
pub enum GestureKind {
    /// No gesture is active.
    #[default]
    None,
    /// A tap gesture.
    Tap,
    /// A pan gesture.
    Pan,
    /// A pinch gesture.
    Pinch,
}

/// Tests whether a gesture of kind `candidate` may act while `current` is active.
///
/// A candidate may act as long as no higher-priority kind is active.
pub fn may_act(current: GestureKind, candidate: GestureKind) -> bool {
    current <= candidate
}

/// Tracks which kind of gesture is currently driving the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureArbiter {
    current: GestureKind,
}

impl GestureArbiter {
    /// Creates a new arbiter with no active gesture.
    pub fn new() -> Self {
        Self::default()
    }

    /// The kind that is currently active.
    pub fn current(&self) -> GestureKind {
        self.current
    }

    /// Tests whether `kind` may act, without claiming.
    pub fn may_act(&self, kind: GestureKind) -> bool {
        may_act(self.current, kind)
    }

    /// Makes `kind` the active gesture if it may act.
    ///
    /// Returns whether the claim succeeded.
    pub fn try_claim(&mut self, kind: GestureKind) -> bool {
        if self.may_act(kind) {
            self.current = kind;
            true
        } else {
            false
        }
    }

    /// Releases `kind`, if it is the active gesture.
    pub fn release(&mut self, kind: GestureKind) {
        if self.current == kind {
            self.current = GestureKind::None;
        }
    }

    /// Releases whatever gesture is active.
    pub fn reset(&mut self) {
        self.current = GestureKind::None;
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_may_act_is_priority_order() {
        use GestureKind::*;

        for current in GestureKind::iter() {
            assert!(may_act(current, current));
            assert!(may_act(None, current));
        }
        assert!(may_act(Tap, Pinch));
        assert!(!may_act(Pan, Tap));
        assert!(!may_act(Pinch, Pan));
    }

    #[test]
    fn test_arbiter_claims() {
        let mut arbiter = GestureArbiter::new();

        assert!(arbiter.try_claim(GestureKind::Pan));
        assert!(!arbiter.try_claim(GestureKind::Tap));
        assert_eq!(arbiter.current(), GestureKind::Pan);

        // releasing a kind that is not active does nothing
        arbiter.release(GestureKind::Tap);
        assert_eq!(arbiter.current(), GestureKind::Pan);

        assert!(arbiter.try_claim(GestureKind::Pinch));
        arbiter.reset();
        assert!(arbiter.current().is_none());
    }
}
