//! The context a [`BorderPolicy`](crate::BorderPolicy) works through.

use std::time::Instant;

use bitflags::bitflags;
use tracing::trace;

use crate::border::{direction, BorderGeometry};
use crate::core::{Layer, View, ViewId};
use crate::platform::Window;
use crate::types::{BorderDirection, Bordered, Point, ResizeDirection, Size};

bitflags! {

/// The event subscriptions currently registered on a border.
///
/// An [`InputEvent`](crate::InputEvent) only reaches the policy while
/// a flag matching it is set.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscriptions: u16 {
    /// The host listens for window resizes.
    const RESIZED           = 1 << 0;
    /// Pan and pinch gestures on the border root view.
    const BORDER_GESTURES   = 1 << 1;
    /// Touches on the border root view, for press feedback.
    const BORDER_TOUCH      = 1 << 2;
    /// Touches on the border's icons.
    const ICON_TOUCH        = 1 << 3;
    /// Touches on the window, watched for a two-finger long press.
    const WINDOW_INTERCEPT  = 1 << 4;
    /// Touches on the window, watched to summon a hidden border.
    const OVERLAY_INTERCEPT = 1 << 5;
    /// Pan and tap gestures on the whole-window overlay.
    const OVERLAY_GESTURES  = 1 << 6;
    /// Touches on the border root view while it is summoned.
    const ROOT_INTERCEPT    = 1 << 7;
}
}

impl Subscriptions {
    /// The subscriptions a policy may register itself.
    pub const POLICY: Subscriptions = Subscriptions::RESIZED.complement();
}

/// The context handed to a [`BorderPolicy`](crate::BorderPolicy)
/// in every callback.
///
/// A `BorderCtxt` is the only way a policy can affect the window. It
/// exposes the window's state and requests, the border's root view and
/// layer, and the policy's event subscriptions.
///
/// Sizes going through a `BorderCtxt` are always bordered; the context
/// converts them to and from the window's real size.
#[derive(custom_debug_derive::Debug)]
pub struct BorderCtxt<'b, W: Window> {
    #[debug(skip)]
    pub(crate) window: &'b mut W,
    pub(crate) geometry: BorderGeometry,
    pub(crate) overlay_mode: bool,
    pub(crate) root: &'b mut View,
    pub(crate) border_layer: &'b mut Layer,
    pub(crate) subs: &'b mut Subscriptions,
    pub(crate) now: Instant,
}

impl<'b, W: Window> BorderCtxt<'b, W> {
    /// The window being bordered.
    pub fn window(&self) -> &W {
        self.window
    }

    /// The geometry of the decoration.
    pub fn geometry(&self) -> BorderGeometry {
        self.geometry
    }

    /// The time of the event being handled.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Whether the decoration is currently drawn around the content.
    ///
    /// This is false while the window is maximized in overlay mode.
    pub fn is_decorated(&self) -> bool {
        !(self.overlay_mode && self.window.is_maximized())
    }

    /// Classifies a point in real-window coordinates.
    ///
    /// See [`direction_at`](direction::direction_at).
    pub fn direction_at(&self, x: f32, y: f32) -> BorderDirection {
        direction::direction_at(&self.geometry, self.window_size(), x, y)
    }

    /// The bordered size of the window.
    pub fn window_size(&self) -> Size<i32, Bordered> {
        self.geometry.to_bordered(self.window.size(), self.is_decorated())
    }

    /// Resizes the window to the bordered size `size`.
    pub fn set_window_size(&mut self, size: Size<i32, Bordered>) {
        let real = self.geometry.to_real(size, self.is_decorated());
        trace!("resizing to {} (real {})", size, real);
        self.window.set_size(real);
    }

    /// The position of the window on the screen.
    pub fn position(&self) -> Point<i32> {
        self.window.position()
    }

    /// Moves the window to `pos`.
    pub fn set_position(&mut self, pos: Point<i32>) {
        self.window.set_position(pos);
    }

    /// Tests whether the window is maximized.
    pub fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    /// Maximizes or restores the window.
    pub fn maximize(&mut self, maximize: bool) {
        self.window.maximize(maximize);
    }

    /// Minimizes or restores the window.
    pub fn minimize(&mut self, minimize: bool) {
        self.window.minimize(minimize);
    }

    /// Destroys the window.
    pub fn destroy(&mut self) {
        self.window.destroy();
    }

    /// Asks the compositor to start an interactive move.
    pub fn request_move_to_server(&mut self) {
        self.window.request_move_to_server();
    }

    /// Asks the compositor to start an interactive resize.
    pub fn request_resize_to_server(&mut self, dir: ResizeDirection) {
        self.window.request_resize_to_server(dir);
    }

    /// Sets whether the window is drawn with an alpha channel.
    pub fn set_transparency(&mut self, transparent: bool) {
        self.window.set_transparency(transparent);
    }

    /// Adds a view on top of the window content.
    pub fn add_window_view(&mut self, view: View) -> ViewId {
        self.window.add_view(view)
    }

    /// Removes a view added with `add_window_view`.
    pub fn remove_window_view(&mut self, id: ViewId) -> Option<View> {
        self.window.remove_view(id)
    }

    /// The border's root view.
    pub fn root(&self) -> &View {
        self.root
    }

    /// The border's root view.
    pub fn root_mut(&mut self) -> &mut View {
        self.root
    }

    /// The layer the border is drawn on.
    pub fn border_layer(&self) -> &Layer {
        self.border_layer
    }

    /// The layer the border is drawn on.
    pub fn border_layer_mut(&mut self) -> &mut Layer {
        self.border_layer
    }

    /// Registers the policy for the events in `subs`.
    ///
    /// Flags owned by the host are ignored.
    pub fn subscribe(&mut self, subs: Subscriptions) {
        self.subs.insert(subs & Subscriptions::POLICY);
    }

    /// Unregisters the policy from the events in `subs`.
    ///
    /// Flags owned by the host are ignored.
    pub fn unsubscribe(&mut self, subs: Subscriptions) {
        self.subs.remove(subs & Subscriptions::POLICY);
    }

    /// Tests whether every flag in `subs` is registered.
    pub fn is_subscribed(&self, subs: Subscriptions) -> bool {
        self.subs.contains(subs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessWindow;
    use crate::types::Real;

    fn geometry() -> BorderGeometry {
        BorderGeometry {
            line_thickness: 5,
            touch_thickness: 20,
            border_height: 50,
            min_size: None,
            max_size: None,
        }
    }

    #[test]
    fn test_policy_cannot_touch_host_flags() {
        let mut window = HeadlessWindow::new(Size::<i32, Real>::new(410, 355));
        let mut root = View::new("root");
        let mut layer = Layer::new("border", Size::new(410, 355));
        let mut subs = Subscriptions::RESIZED;

        let mut ctx = BorderCtxt {
            window: &mut window,
            geometry: geometry(),
            overlay_mode: false,
            root: &mut root,
            border_layer: &mut layer,
            subs: &mut subs,
            now: Instant::now(),
        };

        ctx.unsubscribe(Subscriptions::all());
        assert!(ctx.is_subscribed(Subscriptions::RESIZED));

        ctx.subscribe(Subscriptions::BORDER_GESTURES | Subscriptions::RESIZED);
        assert!(ctx.is_subscribed(Subscriptions::BORDER_GESTURES));
        assert_eq!(ctx.window_size(), Size::new(400, 300));
    }

    #[test]
    fn test_overlay_maximized_is_undecorated() {
        let mut window = HeadlessWindow::new(Size::<i32, Real>::new(1920, 1080));
        window.set_maximized(true);
        let mut root = View::new("root");
        let mut layer = Layer::new("border", Size::new(1920, 1080));
        let mut subs = Subscriptions::empty();

        let mut ctx = BorderCtxt {
            window: &mut window,
            geometry: geometry(),
            overlay_mode: true,
            root: &mut root,
            border_layer: &mut layer,
            subs: &mut subs,
            now: Instant::now(),
        };

        assert!(!ctx.is_decorated());
        ctx.set_window_size(Size::new(1280, 720));
        assert_eq!(ctx.window().size(), Size::new(1280, 720));
    }
}
