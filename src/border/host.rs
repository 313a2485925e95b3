//! The owner of a bordered window.

use std::time::Instant;

use tracing::{debug, error, info, instrument, trace};

use crate::border::{
    BorderCtxt, BorderGeometry, BorderIcon, BorderPolicy, DefaultBorder,
    PanGesture, PinchGesture, Subscriptions, TapGesture, Touch,
};
use crate::border::direction;
use crate::config::BorderConfig;
use crate::core::{Layer, View};
use crate::log::DefaultErrorHandler;
use crate::platform::Window;
use crate::types::{BorderDirection, Bordered, Color, Real, Size};
use crate::{ErrorHandler, Result, BorderError::*};

/// An input event handed to the border by the embedding event loop.
///
/// Each event only reaches the policy while one of its
/// [`subscriptions`](InputEvent::subscriptions) is registered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch anywhere on the window.
    ///
    /// Delivered on `WINDOW_INTERCEPT` or `OVERLAY_INTERCEPT`.
    WindowTouch(Touch),
    /// A touch on the border root view.
    ///
    /// Delivered on `BORDER_TOUCH` or `ROOT_INTERCEPT`.
    BorderTouch(Touch),
    /// A pan gesture on the border root view.
    ///
    /// Delivered on `BORDER_GESTURES`.
    BorderPan(PanGesture),
    /// A pinch gesture on the border root view.
    ///
    /// Delivered on `BORDER_GESTURES`.
    BorderPinch(PinchGesture),
    /// A touch on one of the border's icons.
    ///
    /// Delivered on `ICON_TOUCH`.
    IconTouch(BorderIcon, Touch),
    /// A pan gesture on the whole-window overlay.
    ///
    /// Delivered on `OVERLAY_GESTURES`.
    OverlayPan(PanGesture),
    /// A tap gesture on the whole-window overlay.
    ///
    /// Delivered on `OVERLAY_GESTURES`.
    OverlayTap(TapGesture),
}

impl InputEvent {
    /// The subscriptions that the event is delivered on.
    pub fn subscriptions(&self) -> Subscriptions {
        use InputEvent::*;

        match self {
            WindowTouch(_) => Subscriptions::WINDOW_INTERCEPT | Subscriptions::OVERLAY_INTERCEPT,
            BorderTouch(_) => Subscriptions::BORDER_TOUCH | Subscriptions::ROOT_INTERCEPT,
            BorderPan(_) | BorderPinch(_) => Subscriptions::BORDER_GESTURES,
            IconTouch(..) => Subscriptions::ICON_TOUCH,
            OverlayPan(_) | OverlayTap(_) => Subscriptions::OVERLAY_GESTURES,
        }
    }
}

/// Owns a window and, once enabled, the border decorating it.
///
/// `BorderHost` manages the enable/dispose lifecycle of the border, and
/// keeps the window's _real_ size and its _bordered_ size consistent:
///
/// - While the decoration is drawn, `real = bordered + footprint`, where the
/// footprint is `(2 * line, border height + line)`.
/// - While the window is maximized and the policy is in overlay mode, the
/// decoration is hidden and `real = bordered`.
/// - While bordering is not enabled, `real = bordered`.
///
/// It routes [`InputEvent`]s to its [`BorderPolicy`] according to the
/// policy's subscriptions, and polls the policy's timers on every
/// [`tick`](BorderHost::tick).
///
/// # Layers
///
/// While enabled, the host maintains two layers: the content layer, which is
/// sized to the bordered size and offset by the line thickness, and the border
/// layer, sized to the real size and initially lowered to the bottom of the
/// stack. The border's root view lives on the border layer.
#[derive(custom_debug_derive::Debug)]
pub struct BorderHost<W: Window> {
    window: W,
    policy: Option<Box<dyn BorderPolicy<W>>>,
    geometry: BorderGeometry,
    root: Option<View>,
    content_layer: Layer,
    border_layer: Layer,
    subs: Subscriptions,
    overlay_active: bool,
    #[debug(skip)]
    error_handler: Box<dyn ErrorHandler>,
}

impl<W: Window> BorderHost<W> {
    /// Creates a new host owning `window`, with bordering disabled.
    pub fn new(window: W) -> Self {
        let size = window.size();
        Self {
            window,
            policy: None,
            geometry: BorderConfig::default().geometry(),
            root: None,
            content_layer: Layer::new("RootLayer", size),
            border_layer: Layer::new("BorderWindowBottomLayer", size),
            subs: Subscriptions::empty(),
            overlay_active: false,
            error_handler: Box::new(DefaultErrorHandler),
        }
    }

    /// Replaces the handler for errors swallowed during event dispatch.
    pub fn with_error_handler<E: ErrorHandler + 'static>(mut self, handler: E) -> Self {
        self.error_handler = Box::new(handler);
        self
    }

    /// Enables the border on the window.
    ///
    /// If `policy` is `None`, a [`DefaultBorder`] is used.
    ///
    /// The window is grown by the policy's decoration footprint, and the
    /// policy builds its visual tree. If that fails, the window is restored
    /// to exactly the state it was in and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyEnabled` if the border is already enabled, leaving
    /// the window, layers and current policy untouched.
    #[instrument(level = "debug", skip_all)]
    pub fn enable_border(&mut self, policy: Option<Box<dyn BorderPolicy<W>>>) -> Result<()> {
        if self.is_border_enabled() {
            error!("border is already enabled");
            return Err(AlreadyEnabled)
        }

        let mut policy = policy.unwrap_or_else(|| Box::new(DefaultBorder::new()));
        let geom = policy.geometry();
        debug!("enabling border with {:?}", geom);

        self.subs.insert(Subscriptions::RESIZED);

        let original = self.window.size();
        let grown = original + geom.footprint();
        self.window.set_size(grown);

        let mut root = View::new("BorderRoot");
        if let Err(e) = policy.create_border_view(&mut root) {
            error!("could not create border view: {}", e);
            self.window.set_size(original);
            self.subs.remove(Subscriptions::RESIZED);
            return Err(e)
        }

        self.content_layer.set_size(original);
        self.content_layer.set_offset_y(geom.line_thickness as i32);
        self.border_layer.set_size(grown);
        self.border_layer.lower_to_bottom();

        self.window.set_transparency(true);
        self.window.set_background_color(Color::TRANSPARENT);
        self.window.enable_floating_mode();

        self.geometry = geom;
        self.root = Some(root);
        self.policy = Some(policy);
        self.overlay_active = false;

        self.with_policy(Instant::now(), |policy, ctx| policy.on_created(ctx));
        info!("border enabled, window is now {}", grown);

        Ok(())
    }

    /// Tests whether the border is enabled.
    pub fn is_border_enabled(&self) -> bool {
        self.policy.is_some()
    }

    /// Classifies a point in real-window coordinates.
    ///
    /// Returns `None` if the border is not enabled.
    pub fn direction_at(&self, x: f32, y: f32) -> BorderDirection {
        if !self.is_border_enabled() {
            return BorderDirection::None
        }
        direction::direction_at(&self.geometry, self.bordered_size(), x, y)
    }

    /// Handles a resize of the window to the real size `size`.
    ///
    /// This should be called whenever the compositor reports a new size.
    /// The bordered size is clamped to the policy's limits, and if clamping
    /// changed it, a corrected resize is issued. Position is left as is.
    #[instrument(level = "debug", skip(self))]
    pub fn handle_resized(&mut self, size: Size<i32, Real>) {
        if !self.subs.contains(Subscriptions::RESIZED) {
            return
        }
        let overlay = self.overlay_mode() && self.window.is_maximized();
        let decorated = !overlay;

        let requested = self.geometry.to_bordered(size, decorated);
        let clamped = self.geometry.clamp(requested);
        info!("window resized to {} (bordered {})", size, requested);

        if clamped != requested {
            debug!("clamped {} to {}", requested, clamped);
            self.window.set_size(self.geometry.to_real(clamped, decorated));
        }

        self.content_layer.set_size(clamped.cast());
        self.border_layer.set_size(self.geometry.to_real(clamped, decorated));

        let now = Instant::now();
        if self.overlay_mode() && overlay != self.overlay_active {
            debug!("overlay mode {}", if overlay { "on" } else { "off" });
            self.overlay_active = overlay;
            self.with_policy(now, |policy, ctx| policy.on_overlay_mode(ctx, overlay));
        }
        self.with_policy(now, |policy, ctx| policy.on_resized(ctx, clamped));
    }

    /// Routes an input event to the policy.
    ///
    /// Returns whether the policy consumed the event. Events the policy is
    /// not subscribed to are dropped.
    #[instrument(level = "trace", skip(self))]
    pub fn dispatch(&mut self, event: InputEvent, now: Instant) -> bool {
        use InputEvent::*;

        if !self.is_border_enabled() {
            self.error_handler.call(NotEnabled);
            return false
        }
        if !self.subs.intersects(event.subscriptions()) {
            trace!("no subscription for {:?}", event);
            return false
        }

        self.with_policy(now, |policy, ctx| match &event {
            WindowTouch(touch) => policy.on_window_touch(ctx, touch),
            BorderTouch(touch) => policy.on_border_touch(ctx, touch),
            BorderPan(pan) => policy.on_border_pan(ctx, pan),
            BorderPinch(pinch) => policy.on_border_pinch(ctx, pinch),
            IconTouch(icon, touch) => policy.on_icon_touch(ctx, *icon, touch),
            OverlayPan(pan) => policy.on_overlay_pan(ctx, pan),
            OverlayTap(tap) => policy.on_overlay_tap(ctx, tap),
        })
        .unwrap_or(false)
    }

    /// Lets the policy poll its timers. Call this once per frame.
    pub fn tick(&mut self, now: Instant) {
        self.with_policy(now, |policy, ctx| policy.on_tick(ctx));
    }

    /// Tears the border down.
    ///
    /// Every subscription is dropped, the policy disposes of everything
    /// it owns and is released along with the root view. The window keeps
    /// its current size. Calling this when the border is not enabled does
    /// nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn dispose_border(&mut self) {
        if !self.is_border_enabled() {
            return
        }
        self.with_policy(Instant::now(), |policy, ctx| policy.dispose(ctx));

        self.subs = Subscriptions::empty();
        self.policy = None;
        self.root = None;
        self.overlay_active = false;
        info!("border disposed");
    }

    /// Converts a real size to a bordered size, given the current state.
    pub fn to_bordered(&self, size: Size<i32, Real>) -> Size<i32, Bordered> {
        self.geometry.to_bordered(size, self.is_decorated())
    }

    /// Converts a bordered size to a real size, given the current state.
    pub fn to_real(&self, size: Size<i32, Bordered>) -> Size<i32, Real> {
        self.geometry.to_real(size, self.is_decorated())
    }

    /// The bordered size of the window.
    pub fn bordered_size(&self) -> Size<i32, Bordered> {
        self.to_bordered(self.window.size())
    }

    /// Resizes the window to the bordered size `size`.
    pub fn set_bordered_size(&mut self, size: Size<i32, Bordered>) {
        let real = self.to_real(size);
        self.window.set_size(real);
    }

    /// The window being bordered.
    pub fn window(&self) -> &W {
        &self.window
    }

    /// The window being bordered.
    ///
    /// Changing the window's size through this skips conversion;
    /// prefer [`set_bordered_size`](BorderHost::set_bordered_size).
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// The active policy, if the border is enabled.
    pub fn policy(&self) -> Option<&dyn BorderPolicy<W>> {
        self.policy.as_deref()
    }

    /// The border's root view, if the border is enabled.
    pub fn root_view(&self) -> Option<&View> {
        self.root.as_ref()
    }

    /// The layer the window content is drawn on.
    pub fn content_layer(&self) -> &Layer {
        &self.content_layer
    }

    /// The layer the border is drawn on.
    pub fn border_layer(&self) -> &Layer {
        &self.border_layer
    }

    /// The event subscriptions currently registered.
    pub fn subscriptions(&self) -> Subscriptions {
        self.subs
    }

    fn overlay_mode(&self) -> bool {
        self.policy.as_ref().is_some_and(|p| p.overlay_mode())
    }

    fn is_decorated(&self) -> bool {
        self.is_border_enabled() && !(self.overlay_mode() && self.window.is_maximized())
    }

    /// Runs `f` with the policy and a context built from the host's state.
    ///
    /// Returns `None` if the border is not enabled.
    fn with_policy<F, R>(&mut self, now: Instant, f: F) -> Option<R>
    where
        F: FnOnce(&mut Box<dyn BorderPolicy<W>>, &mut BorderCtxt<'_, W>) -> R,
    {
        let policy = self.policy.as_mut()?;
        let root = self.root.as_mut()?;

        let mut ctx = BorderCtxt {
            window: &mut self.window,
            geometry: self.geometry,
            overlay_mode: policy.overlay_mode(),
            root,
            border_layer: &mut self.border_layer,
            subs: &mut self.subs,
            now,
        };

        Some(f(policy, &mut ctx))
    }
}

impl<W: Window> Drop for BorderHost<W> {
    fn drop(&mut self) {
        self.dispose_border();
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::border::PointState;
    use crate::platform::{HeadlessWindow, WindowRequest};
    use crate::types::Point;
    use crate::BorderError;

    fn host() -> BorderHost<HeadlessWindow> {
        BorderHost::new(HeadlessWindow::new(Size::new(400, 300)))
    }

    #[derive(Debug)]
    struct FailingBorder;

    impl BorderPolicy<HeadlessWindow> for FailingBorder {
        fn geometry(&self) -> BorderGeometry {
            BorderConfig::default().geometry()
        }

        fn create_border_view(&mut self, _: &mut View) -> Result<()> {
            Err(ViewCreation("no resources".into()))
        }
    }

    #[test]
    fn test_enable_grows_window() {
        let mut host = host();
        host.enable_border(None).expect("could not enable");

        assert!(host.is_border_enabled());
        assert_eq!(host.window().size(), Size::new(410, 355));
        assert_eq!(host.bordered_size(), Size::new(400, 300));
        assert_eq!(host.content_layer().size(), Size::new(400, 300));
        assert_eq!(host.content_layer().offset_y(), 5);
        assert_eq!(host.border_layer().size(), Size::new(410, 355));

        let window = host.window();
        assert!(window.is_transparent());
        assert!(window.is_floating());
        assert!(window.background().is_transparent());
    }

    #[test]
    fn test_enable_twice_is_rejected() {
        let mut host = host();
        host.enable_border(None).expect("could not enable");
        let requests = host.window().requests().len();
        let subs = host.subscriptions();

        let res = host.enable_border(Some(Box::new(FailingBorder)));

        assert_eq!(res, Err(BorderError::AlreadyEnabled));
        assert_eq!(host.window().size(), Size::new(410, 355));
        assert_eq!(host.window().requests().len(), requests);
        assert_eq!(host.border_layer().size(), Size::new(410, 355));
        assert_eq!(host.subscriptions(), subs);
        assert!(format!("{:?}", host.policy()).contains("DefaultBorder"));
    }

    #[test]
    fn test_failed_enable_rolls_back() {
        let mut host = host();

        let res = host.enable_border(Some(Box::new(FailingBorder)));

        assert!(matches!(res, Err(BorderError::ViewCreation(_))));
        assert!(!host.is_border_enabled());
        assert_eq!(host.window().size(), Size::new(400, 300));
        assert!(host.subscriptions().is_empty());
        assert!(!host.window().is_transparent());
    }

    #[test]
    fn test_conversions() {
        let mut host = host();

        // identity while not enabled
        assert_eq!(host.to_real(Size::new(400, 300)), Size::new(400, 300));

        host.enable_border(None).expect("could not enable");
        let real = Size::new(810, 655);
        assert_eq!(host.to_real(host.to_bordered(real)), real);
        assert_eq!(host.to_bordered(real), Size::new(800, 600));

        host.set_bordered_size(Size::new(500, 400));
        assert_eq!(host.window().size(), Size::new(510, 455));
    }

    #[test]
    fn test_resize_is_clamped() {
        let mut host = host();
        host.enable_border(None).expect("could not enable");
        host.window_mut().take_requests();

        // bordered width of 50 is below the minimum of 100
        host.handle_resized(Size::new(60, 355));

        assert_eq!(
            host.window().requests().first(),
            Some(&WindowRequest::SetSize(Size::new(110, 355)))
        );
        assert_eq!(host.content_layer().size(), Size::new(100, 300));
        assert_eq!(host.border_layer().size(), Size::new(110, 355));
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let mut host = host();
        host.enable_border(None).expect("could not enable");

        host.dispose_border();
        assert!(!host.is_border_enabled());
        assert!(host.subscriptions().is_empty());
        assert!(host.root_view().is_none());

        host.dispose_border();
        assert!(!host.is_border_enabled());

        // events are dropped once disposed
        let touch = Touch::single(PointState::Up, Point::new(5.0, 5.0));
        assert!(!host.dispatch(InputEvent::WindowTouch(touch), Instant::now()));
    }

    #[test]
    fn test_unsubscribed_events_are_dropped() {
        let mut host = host();
        host.enable_border(None).expect("could not enable");

        // no overlay exists yet, so nothing listens for overlay gestures
        let tap = InputEvent::OverlayTap(TapGesture { taps: 3 });
        assert!(!host.dispatch(tap, Instant::now()));
        assert!(!host.window().is_maximized());
    }
}
