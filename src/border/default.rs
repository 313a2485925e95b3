//! The stock border policy.

use tracing::{debug, info, trace};

use crate::border::{
    BorderCtxt, BorderGeometry, BorderIcon, BorderPolicy, GestureArbiter, GestureKind,
    GestureState, PanGesture, PinchGesture, PointState, Subscriptions, TapGesture, Touch,
};
use crate::config::BorderConfig;
use crate::core::{DwellTimer, View, ViewId};
use crate::platform::Window;
use crate::types::{BorderDirection, Bordered, Color, CornerRadius, ResizeDirection, Size};
use crate::Result;

/// Returns the artwork file for `icon`, in its normal or dark variant.
///
/// The dark variants are shown while the window is maximized.
pub fn icon_file(icon: BorderIcon, dark: bool) -> &'static str {
    use BorderIcon::*;

    match (icon, dark) {
        (Minimize, false)    => "minimalize.png",
        (Minimize, true)     => "dark_minimalize.png",
        (Maximize, false)    => "maximalize.png",
        (Maximize, true)     => "dark_smallwindow.png",
        (Close, false)       => "close.png",
        (Close, true)        => "dark_close.png",
        (LeftCorner, false)  => "leftCorner.png",
        (LeftCorner, true)   => "dark_leftCorner.png",
        (RightCorner, false) => "rightCorner.png",
        (RightCorner, true)  => "dark_rightCorner.png",
    }
}

/// The default [`BorderPolicy`].
///
/// `DefaultBorder` draws a translucent border with rounded corners and a
/// strip below the content holding minimize, maximize and close icons,
/// flanked by two corner handles. Its behaviour is as follows:
///
/// - Panning on the border moves the window if started on the strip, or
///   resizes it if started within touch range of an edge or corner.
/// - Pinching in on the border minimizes the window, or restores it if it
///   is maximized. Pinching out maximizes it.
/// - Resting two fingers on the window for the long press interval picks
///   the window up: a translucent overlay covers it, and until the overlay
///   is dismissed, a pan moves the window and tapping it the configured
///   number of times toggles maximize. Any other tap count dismisses it.
/// - In overlay mode, the border is hidden while the window is maximized.
///   Lifting a finger anywhere on the window shows it, and it hides again
///   once the overlay hide interval passes without the border being touched.
///
/// The look and timings are taken from a [`BorderConfig`].
#[derive(Debug)]
pub struct DefaultBorder {
    config: BorderConfig,
    icons: Vec<(BorderIcon, ViewId)>,
    strip: Option<ViewId>,
    arbiter: GestureArbiter,
    direction: BorderDirection,
    pre_scale: f32,
    pressed_background: Option<Color>,
    long_press: Option<DwellTimer>,
    window_view: Option<ViewId>,
    overlay_timer: Option<DwellTimer>,
    overlay_background: Option<Color>,
    intercepting: bool,
    detached: bool,
}

impl DefaultBorder {
    /// Creates a DefaultBorder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BorderConfig::default())
    }

    /// Creates a DefaultBorder with the given configuration.
    pub fn with_config(config: BorderConfig) -> Self {
        Self {
            config,
            icons: Vec::new(),
            strip: None,
            arbiter: GestureArbiter::new(),
            direction: BorderDirection::None,
            pre_scale: 0.0,
            pressed_background: None,
            long_press: None,
            window_view: None,
            overlay_timer: None,
            overlay_background: None,
            intercepting: false,
            detached: false,
        }
    }

    /// The configuration of the border.
    pub fn config(&self) -> &BorderConfig {
        &self.config
    }

    /// The view showing `icon`, once the border view has been created.
    pub fn icon_view(&self, icon: BorderIcon) -> Option<ViewId> {
        self.icons
            .iter()
            .find(|(i, _)| *i == icon)
            .map(|(_, id)| *id)
    }

    /// The view holding the icons, once the border view has been created.
    pub fn strip_view(&self) -> Option<ViewId> {
        self.strip
    }

    /// The kind of gesture currently driving the window.
    pub fn current_gesture(&self) -> GestureKind {
        self.arbiter.current()
    }

    /// Whether the window has been picked up by a two-finger long press.
    pub fn is_window_gesture_active(&self) -> bool {
        self.window_view.is_some()
    }

    /// Whether the window was closed through the close icon.
    ///
    /// A detached border ignores all further events.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    fn request_resize<W: Window>(&mut self, ctx: &mut BorderCtxt<'_, W>, dir: ResizeDirection) {
        <Self as BorderPolicy<W>>::on_request_resize(self, ctx);
        ctx.request_resize_to_server(dir);
    }

    fn toggle_maximize<W: Window>(&self, ctx: &mut BorderCtxt<'_, W>) {
        let maximized = ctx.is_maximized();
        ctx.maximize(!maximized);
    }

    fn unmaximize_or_move<W: Window>(&self, ctx: &mut BorderCtxt<'_, W>) {
        if ctx.is_maximized() {
            ctx.maximize(false);
        } else {
            ctx.request_move_to_server();
        }
    }

    fn update_icons<W: Window>(&self, ctx: &mut BorderCtxt<'_, W>) {
        let maximized = ctx.is_maximized();

        for (icon, id) in &self.icons {
            let url = self.config.resource(icon_file(*icon, maximized));
            if let Some(view) = ctx.root_mut().find_mut(*id) {
                view.set_resource_url(url);
            }
        }

        let radius = if maximized {
            CornerRadius::SQUARE
        } else {
            self.config.corner_radius()
        };
        ctx.root_mut().set_corner_radius(radius);
        ctx.set_transparency(!maximized);
    }

    // Covers the window with an overlay that takes over pan and tap gestures.
    fn pick_up_window<W: Window>(&mut self, ctx: &mut BorderCtxt<'_, W>) {
        let mut overlay = View::new("WindowOverlay");
        overlay.set_background(self.config.window_overlay());

        self.window_view = Some(ctx.add_window_view(overlay));
        ctx.subscribe(Subscriptions::OVERLAY_GESTURES);
        ctx.unsubscribe(Subscriptions::WINDOW_INTERCEPT);
        debug!("window picked up");
    }

    fn clear_window_gesture<W: Window>(&mut self, ctx: &mut BorderCtxt<'_, W>) {
        if let Some(id) = self.window_view.take() {
            ctx.remove_window_view(id);
            ctx.unsubscribe(Subscriptions::OVERLAY_GESTURES);
            ctx.subscribe(Subscriptions::WINDOW_INTERCEPT);
            debug!("window put down");
        }
    }

    fn resize_by<W: Window>(&self, ctx: &mut BorderCtxt<'_, W>, pan: &PanGesture) {
        let delta = pan.screen_displacement.truncate();
        let dir = self.direction;

        let grow: Size<i32, Bordered> = if dir.is_corner() {
            Size::new(delta.x, delta.y)
        } else if dir.is_vertical_edge() {
            Size::new(delta.x, 0)
        } else if dir.is_horizontal_edge() {
            Size::new(0, delta.y)
        } else {
            if dir.is_move() {
                let pos = ctx.position().saturating_add(delta);
                ctx.set_position(pos);
            }
            return
        };

        let size = ctx.window_size().saturating_add(grow);
        ctx.set_window_size(size);
    }
}

impl Default for DefaultBorder {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Window> BorderPolicy<W> for DefaultBorder {
    fn geometry(&self) -> BorderGeometry {
        self.config.geometry()
    }

    fn overlay_mode(&self) -> bool {
        self.config.overlay_mode()
    }

    fn create_border_view(&mut self, root: &mut View) -> Result<()> {
        use BorderIcon::*;

        root.set_background(self.config.background());
        root.set_corner_radius(self.config.corner_radius());

        self.icons.clear();

        let left = View::image("LeftCornerIcon", self.config.resource(icon_file(LeftCorner, false)));
        self.icons.push((LeftCorner, root.add(left)));

        let mut strip = View::new("BorderStrip");
        for icon in [Minimize, Maximize, Close, RightCorner] {
            let view = View::image(
                format!("{}Icon", icon),
                self.config.resource(icon_file(icon, false)),
            );
            self.icons.push((icon, strip.add(view)));
        }
        self.strip = Some(root.add(strip));

        Ok(())
    }

    fn on_created(&mut self, ctx: &mut BorderCtxt<'_, W>) {
        ctx.subscribe(
            Subscriptions::BORDER_GESTURES
            | Subscriptions::BORDER_TOUCH
            | Subscriptions::ICON_TOUCH
            | Subscriptions::WINDOW_INTERCEPT
        );
        if self.config.overlay_mode() {
            ctx.subscribe(Subscriptions::ROOT_INTERCEPT);
        }
        self.arbiter.reset();
    }

    fn on_request_resize(&mut self, ctx: &mut BorderCtxt<'_, W>) {
        debug!("resize requested at {}", ctx.window_size());
    }

    fn on_resized(&mut self, ctx: &mut BorderCtxt<'_, W>, size: Size<i32, Bordered>) {
        if self.detached {
            return
        }
        trace!("updating icons for {}", size);
        self.update_icons(ctx);
    }

    fn on_overlay_mode(&mut self, ctx: &mut BorderCtxt<'_, W>, enable: bool) {
        if self.detached {
            return
        }
        if enable {
            ctx.subscribe(Subscriptions::OVERLAY_INTERCEPT);
            let root = ctx.root_mut();
            // a press in progress must not restore its color over the tint
            let saved = self.pressed_background.take().unwrap_or(root.background());
            self.overlay_background = Some(saved);
            root.set_background(self.config.overlay_background());
            root.hide();
        } else {
            self.overlay_timer = None;
            self.intercepting = false;
            ctx.unsubscribe(Subscriptions::OVERLAY_INTERCEPT);
            ctx.border_layer_mut().lower_to_bottom();
            let root = ctx.root_mut();
            if let Some(bg) = self.overlay_background.take() {
                root.set_background(bg);
            }
            root.show();
        }
    }

    fn on_window_touch(&mut self, ctx: &mut BorderCtxt<'_, W>, touch: &Touch) -> bool {
        if self.detached {
            return false
        }

        if ctx.is_subscribed(Subscriptions::OVERLAY_INTERCEPT)
            && touch.state.is_up()
            && !self.intercepting
            && self.overlay_timer.is_none()
        {
            self.overlay_timer = Some(DwellTimer::started(self.config.overlay_hide(), ctx.now()));
            ctx.border_layer_mut().raise_to_top();
            ctx.root_mut().show();
            self.intercepting = true;
            debug!("border summoned");
        }

        if ctx.is_subscribed(Subscriptions::WINDOW_INTERCEPT) {
            if touch.state.is_stationary() && touch.point_count == 2 {
                if self.window_view.is_none() && self.long_press.is_none() {
                    self.long_press = Some(DwellTimer::started(self.config.long_press(), ctx.now()));
                }
            } else {
                self.arbiter.reset();
                self.long_press = None;
            }
        }

        false
    }

    fn on_border_touch(&mut self, ctx: &mut BorderCtxt<'_, W>, touch: &Touch) -> bool {
        if self.detached {
            return false
        }

        if ctx.is_subscribed(Subscriptions::ROOT_INTERCEPT) && self.intercepting {
            if let Some(timer) = self.overlay_timer.as_mut() {
                timer.start(ctx.now());
            }
        }

        if !ctx.is_subscribed(Subscriptions::BORDER_TOUCH) {
            return false
        }
        match touch.state {
            PointState::Down => {
                let root = ctx.root_mut();
                self.pressed_background = Some(root.background());
                root.set_background(self.config.pressed_background());
            }
            PointState::Up | PointState::Leave | PointState::Interrupted => {
                if let Some(bg) = self.pressed_background.take() {
                    ctx.root_mut().set_background(bg);
                }
            }
            _ => {}
        }
        true
    }

    fn on_border_pan(&mut self, ctx: &mut BorderCtxt<'_, W>, pan: &PanGesture) -> bool {
        if self.detached {
            return false
        }

        match pan.state {
            GestureState::Started => {
                if !self.arbiter.try_claim(GestureKind::Pan) {
                    return false
                }
                self.direction = ctx.direction_at(pan.position.x, pan.position.y);
                debug!("border pan started at {} ({})", pan.position, self.direction);

                if self.direction.is_move() {
                    self.unmaximize_or_move(ctx);
                } else if let Some(dir) = self.direction.resize_direction() {
                    self.request_resize(ctx, dir);
                }
            }
            GestureState::Continuing => {
                if !self.arbiter.may_act(GestureKind::Pan) {
                    return false
                }
                self.resize_by(ctx, pan);
            }
            GestureState::Finished | GestureState::Cancelled => {
                self.direction = BorderDirection::None;
                self.arbiter.release(GestureKind::Pan);
                self.clear_window_gesture(ctx);
            }
        }
        true
    }

    fn on_border_pinch(&mut self, ctx: &mut BorderCtxt<'_, W>, pinch: &PinchGesture) -> bool {
        if self.detached {
            return false
        }

        match pinch.state {
            GestureState::Started => {
                if !self.arbiter.try_claim(GestureKind::Pinch) {
                    return false
                }
                self.pre_scale = pinch.scale;
            }
            GestureState::Continuing => {}
            GestureState::Finished | GestureState::Cancelled => {
                if !self.arbiter.may_act(GestureKind::Pinch) {
                    return false
                }
                if self.pre_scale > pinch.scale {
                    if ctx.is_maximized() {
                        ctx.maximize(false);
                    } else {
                        ctx.minimize(true);
                    }
                } else {
                    ctx.maximize(true);
                }
                self.arbiter.release(GestureKind::Pinch);
            }
        }
        true
    }

    fn on_icon_touch(&mut self, ctx: &mut BorderCtxt<'_, W>, icon: BorderIcon, touch: &Touch) -> bool {
        use BorderIcon::*;

        if self.detached {
            return false
        }

        match (icon, touch.state) {
            (LeftCorner, PointState::Down) => {
                self.clear_window_gesture(ctx);
                self.request_resize(ctx, ResizeDirection::BottomLeft);
            }
            (RightCorner, PointState::Down) => {
                self.clear_window_gesture(ctx);
                self.request_resize(ctx, ResizeDirection::BottomRight);
            }
            (Minimize, PointState::Up) => {
                self.clear_window_gesture(ctx);
                ctx.minimize(true);
            }
            (Maximize, PointState::Up) => {
                self.clear_window_gesture(ctx);
                self.toggle_maximize(ctx);
            }
            (Close, PointState::Up) => {
                info!("closing window");
                ctx.destroy();
                self.long_press = None;
                self.overlay_timer = None;
                self.detached = true;
            }
            _ => {}
        }
        true
    }

    fn on_overlay_tap(&mut self, ctx: &mut BorderCtxt<'_, W>, tap: &TapGesture) -> bool {
        if self.detached || !self.arbiter.try_claim(GestureKind::Tap) {
            return false
        }

        if tap.taps == self.config.maximize_taps() {
            self.toggle_maximize(ctx);
        } else {
            self.clear_window_gesture(ctx);
        }
        self.arbiter.release(GestureKind::Tap);
        true
    }

    fn on_overlay_pan(&mut self, ctx: &mut BorderCtxt<'_, W>, pan: &PanGesture) -> bool {
        if self.detached || !self.arbiter.may_act(GestureKind::Pan) {
            return false
        }

        match pan.state {
            GestureState::Started => {
                self.arbiter.try_claim(GestureKind::Pan);
                self.unmaximize_or_move(ctx);
            }
            GestureState::Continuing => {}
            GestureState::Finished | GestureState::Cancelled => {
                self.arbiter.reset();
                self.clear_window_gesture(ctx);
            }
        }
        true
    }

    fn on_tick(&mut self, ctx: &mut BorderCtxt<'_, W>) {
        if self.detached {
            return
        }
        let now = ctx.now();

        if self.long_press.as_mut().is_some_and(|t| t.poll(now)) {
            self.long_press = None;
            self.pick_up_window(ctx);
        }

        if self.overlay_timer.as_mut().is_some_and(|t| t.poll(now)) {
            self.overlay_timer = None;
            ctx.border_layer_mut().lower_to_bottom();
            ctx.root_mut().hide();
            self.intercepting = false;
            debug!("border hidden");
        }
    }

    fn dispose(&mut self, ctx: &mut BorderCtxt<'_, W>) {
        self.clear_window_gesture(ctx);
        ctx.unsubscribe(Subscriptions::POLICY);

        self.long_press = None;
        self.overlay_timer = None;
        self.intercepting = false;
        self.pressed_background = None;
        self.overlay_background = None;
        self.strip = None;
        self.icons.clear();
        self.arbiter.reset();
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use test_log::test;

    use super::*;
    use crate::border::{BorderHost, InputEvent};
    use crate::platform::{HeadlessWindow, WindowRequest};
    use crate::types::Point;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn host() -> BorderHost<HeadlessWindow> {
        let mut host = BorderHost::new(HeadlessWindow::new(Size::new(400, 300)));
        host.enable_border(None).expect("could not enable border");
        host.window_mut().take_requests();
        host
    }

    fn overlay_host() -> BorderHost<HeadlessWindow> {
        let config = BorderConfig::builder()
            .overlay_mode(true)
            .finish(crate::config::no_checks)
            .expect("invalid config");

        let mut host = BorderHost::new(HeadlessWindow::new(Size::new(400, 300)));
        host.enable_border(Some(Box::new(DefaultBorder::with_config(config))))
            .expect("could not enable border");
        host
    }

    fn pan(state: GestureState, x: f32, y: f32, dx: f32, dy: f32) -> InputEvent {
        InputEvent::BorderPan(PanGesture::new(state, Point::new(x, y), Point::new(dx, dy)))
    }

    fn pinch(state: GestureState, scale: f32) -> InputEvent {
        InputEvent::BorderPinch(PinchGesture { state, scale })
    }

    fn touch(state: PointState, points: usize) -> Touch {
        Touch::new(state, points, Point::new(200.0, 150.0))
    }

    fn named<'v>(view: &'v View, name: &str) -> &'v View {
        view.find_named(name).expect("view missing")
    }

    #[test]
    fn test_pan_on_edge_resizes() {
        let mut host = host();
        let now = Instant::now();

        assert!(host.dispatch(pan(GestureState::Started, 10.0, 150.0, 0.0, 0.0), now));
        host.dispatch(pan(GestureState::Continuing, 10.0, 150.0, 10.0, 5.0), now);
        host.dispatch(pan(GestureState::Finished, 10.0, 150.0, 0.0, 0.0), now);

        assert_eq!(host.bordered_size(), Size::new(410, 300));
        assert_eq!(
            host.window().requests().first(),
            Some(&WindowRequest::Resize(ResizeDirection::Left))
        );
    }

    #[test]
    fn test_huge_pan_saturates() {
        let mut host = host();
        let now = Instant::now();

        host.dispatch(pan(GestureState::Started, 10.0, 150.0, 0.0, 0.0), now);
        assert!(host.dispatch(pan(GestureState::Continuing, 10.0, 150.0, 3.0e9, 0.0), now));
        assert_eq!(host.window().size().width, i32::MAX);
        host.dispatch(pan(GestureState::Finished, 10.0, 150.0, 0.0, 0.0), now);

        // moving saturates too
        host.dispatch(pan(GestureState::Started, 200.0, 320.0, 0.0, 0.0), now);
        host.dispatch(pan(GestureState::Continuing, 200.0, 320.0, 10.0, 10.0), now);
        assert!(host.dispatch(pan(GestureState::Continuing, 200.0, 320.0, -3.0e9, 3.0e9), now));
        assert_eq!(host.window().position(), Point::new(i32::MIN + 10, i32::MAX));
    }

    #[test]
    fn test_pan_on_corner_resizes_both() {
        let mut host = host();
        let now = Instant::now();

        host.dispatch(pan(GestureState::Started, 409.0, 354.0, 0.0, 0.0), now);
        host.dispatch(pan(GestureState::Continuing, 409.0, 354.0, 7.9, -3.0), now);

        assert_eq!(host.bordered_size(), Size::new(407, 297));
    }

    #[test]
    fn test_pan_on_strip_moves() {
        let mut host = host();
        let now = Instant::now();

        host.dispatch(pan(GestureState::Started, 200.0, 320.0, 0.0, 0.0), now);
        host.dispatch(pan(GestureState::Continuing, 200.0, 320.0, 15.0, 20.0), now);

        assert_eq!(host.window().position(), Point::new(15, 20));
        assert_eq!(host.bordered_size(), Size::new(400, 300));
        assert_eq!(host.window().requests().first(), Some(&WindowRequest::Move));

        // a maximized window is restored instead
        host.dispatch(pan(GestureState::Finished, 200.0, 320.0, 0.0, 0.0), now);
        host.window_mut().set_maximized(true);
        host.dispatch(pan(GestureState::Started, 200.0, 320.0, 0.0, 0.0), now);
        assert!(!host.window().is_maximized());
    }

    #[test]
    fn test_pinch() {
        let now = Instant::now();

        let mut host = host();
        host.dispatch(pinch(GestureState::Started, 1.0), now);
        host.dispatch(pinch(GestureState::Finished, 0.5), now);
        assert_eq!(host.window().requests(), &[WindowRequest::Minimize(true)]);

        let mut host = self::host();
        host.window_mut().set_maximized(true);
        host.dispatch(pinch(GestureState::Started, 1.0), now);
        host.dispatch(pinch(GestureState::Cancelled, 0.5), now);
        assert_eq!(host.window().requests(), &[WindowRequest::Maximize(false)]);

        let mut host = self::host();
        host.dispatch(pinch(GestureState::Started, 1.0), now);
        host.dispatch(pinch(GestureState::Finished, 1.5), now);
        assert_eq!(host.window().requests(), &[WindowRequest::Maximize(true)]);
    }

    #[test]
    fn test_pinch_blocks_pan() {
        let mut host = host();
        let now = Instant::now();

        host.dispatch(pinch(GestureState::Started, 1.0), now);
        assert!(!host.dispatch(pan(GestureState::Started, 10.0, 150.0, 0.0, 0.0), now));
        assert!(host.window().requests().is_empty());
    }

    #[test]
    fn test_long_press_picks_up_window() {
        let mut host = host();
        let t0 = Instant::now();

        // a stream of stationary frames does not push the deadline back
        for offset in [0, 100, 200] {
            host.dispatch(InputEvent::WindowTouch(touch(PointState::Stationary, 2)), t0 + ms(offset));
        }
        host.tick(t0 + ms(299));
        assert!(host.window().views().is_empty());

        host.tick(t0 + ms(300));
        assert_eq!(host.window().views().len(), 1);
        assert!(host.subscriptions().contains(Subscriptions::OVERLAY_GESTURES));
        assert!(!host.subscriptions().contains(Subscriptions::WINDOW_INTERCEPT));
    }

    #[test]
    fn test_long_press_cancelled() {
        let mut host = host();
        let t0 = Instant::now();

        host.dispatch(InputEvent::WindowTouch(touch(PointState::Stationary, 2)), t0);
        host.dispatch(InputEvent::WindowTouch(touch(PointState::Motion, 2)), t0 + ms(100));
        host.tick(t0 + ms(400));

        assert!(host.window().views().is_empty());
    }

    #[test]
    fn test_overlay_taps() {
        let mut host = host();
        let t0 = Instant::now();

        host.dispatch(InputEvent::WindowTouch(touch(PointState::Stationary, 2)), t0);
        host.tick(t0 + ms(300));

        assert!(host.dispatch(InputEvent::OverlayTap(TapGesture { taps: 3 }), t0 + ms(400)));
        assert!(host.window().is_maximized());
        assert_eq!(host.window().views().len(), 1);

        host.dispatch(InputEvent::OverlayTap(TapGesture { taps: 2 }), t0 + ms(500));
        assert!(host.window().is_maximized());
        assert!(host.window().views().is_empty());
        assert!(host.subscriptions().contains(Subscriptions::WINDOW_INTERCEPT));
    }

    #[test]
    fn test_double_tap_when_configured() {
        let config = BorderConfig::builder()
            .maximize_taps(2)
            .finish(crate::config::no_checks)
            .expect("invalid config");
        let mut host = BorderHost::new(HeadlessWindow::new(Size::new(400, 300)));
        host.enable_border(Some(Box::new(DefaultBorder::with_config(config))))
            .expect("could not enable border");
        let t0 = Instant::now();

        host.dispatch(InputEvent::WindowTouch(touch(PointState::Stationary, 2)), t0);
        host.tick(t0 + ms(300));

        host.dispatch(InputEvent::OverlayTap(TapGesture { taps: 2 }), t0 + ms(400));
        assert!(host.window().is_maximized());
    }

    #[test]
    fn test_overlay_pan() {
        let mut host = host();
        let t0 = Instant::now();

        host.dispatch(InputEvent::WindowTouch(touch(PointState::Stationary, 2)), t0);
        host.tick(t0 + ms(300));
        host.window_mut().take_requests();

        let start = PanGesture::new(GestureState::Started, Point::new(200.0, 150.0), Point::zeroed());
        let finish = PanGesture::new(GestureState::Finished, Point::new(220.0, 150.0), Point::zeroed());

        host.dispatch(InputEvent::OverlayPan(start), t0 + ms(400));
        assert_eq!(host.window().requests(), &[WindowRequest::Move]);

        host.dispatch(InputEvent::OverlayPan(finish), t0 + ms(500));
        assert!(host.window().views().is_empty());
    }

    #[test]
    fn test_icons() {
        let mut host = host();
        let now = Instant::now();
        let up = touch(PointState::Up, 1);
        let down = touch(PointState::Down, 1);

        host.dispatch(InputEvent::IconTouch(BorderIcon::LeftCorner, down), now);
        host.dispatch(InputEvent::IconTouch(BorderIcon::RightCorner, down), now);
        host.dispatch(InputEvent::IconTouch(BorderIcon::Minimize, up), now);
        host.dispatch(InputEvent::IconTouch(BorderIcon::Maximize, up), now);
        host.dispatch(InputEvent::IconTouch(BorderIcon::Maximize, up), now);

        assert_eq!(
            host.window_mut().take_requests(),
            vec![
                WindowRequest::Resize(ResizeDirection::BottomLeft),
                WindowRequest::Resize(ResizeDirection::BottomRight),
                WindowRequest::Minimize(true),
                WindowRequest::Maximize(true),
                WindowRequest::Maximize(false),
            ]
        );

        assert!(host.dispatch(InputEvent::IconTouch(BorderIcon::Close, up), now));
        assert!(host.window().is_destroyed());

        // everything is ignored once the window is closed
        assert!(!host.dispatch(InputEvent::IconTouch(BorderIcon::Maximize, up), now));
        assert!(!host.window().is_maximized());
    }

    #[test]
    fn test_press_feedback() {
        let mut host = host();
        let now = Instant::now();
        let config = BorderConfig::default();

        host.dispatch(InputEvent::BorderTouch(touch(PointState::Down, 1)), now);
        assert_eq!(host.root_view().map(View::background), Some(config.pressed_background()));

        host.dispatch(InputEvent::BorderTouch(touch(PointState::Leave, 1)), now);
        assert_eq!(host.root_view().map(View::background), Some(config.background()));
    }

    #[test]
    fn test_press_across_overlay_transition() {
        let mut host = overlay_host();
        let now = Instant::now();
        let config = BorderConfig::default();

        host.dispatch(InputEvent::BorderTouch(touch(PointState::Down, 1)), now);

        host.window_mut().set_maximized(true);
        host.handle_resized(Size::new(1920, 1080));

        // releasing keeps the overlay tint
        host.dispatch(InputEvent::BorderTouch(touch(PointState::Up, 1)), now);
        assert_eq!(host.root_view().map(View::background), Some(config.overlay_background()));

        host.window_mut().set_maximized(false);
        host.handle_resized(Size::new(410, 355));
        assert_eq!(host.root_view().map(View::background), Some(config.background()));
    }

    #[test]
    fn test_icons_follow_maximized_state() {
        let mut host = host();

        host.window_mut().set_maximized(true);
        host.handle_resized(Size::new(1930, 1135));

        let root = host.root_view().expect("no root view");
        let maximize = named(root, "MaximizeIcon");
        assert!(maximize.resource_url().is_some_and(|u| u.ends_with("dark_smallwindow.png")));
        assert!(root.corner_radius().is_square());
        assert!(!host.window().is_transparent());

        host.window_mut().set_maximized(false);
        host.handle_resized(Size::new(410, 355));

        let root = host.root_view().expect("no root view");
        let close = named(root, "CloseIcon");
        assert!(close.resource_url().is_some_and(|u| u.ends_with("/close.png")));
        assert!(!root.corner_radius().is_square());
        assert!(host.window().is_transparent());
    }

    #[test]
    fn test_overlay_mode_auto_hide() {
        let mut host = overlay_host();
        let t0 = Instant::now();

        host.window_mut().set_maximized(true);
        host.handle_resized(Size::new(1920, 1080));

        // the decoration is gone, so sizes are the same
        assert_eq!(host.to_real(Size::new(1920, 1080)), Size::new(1920, 1080));
        assert_eq!(host.border_layer().size(), Size::new(1920, 1080));
        assert!(!host.root_view().expect("no root").is_visible());

        host.dispatch(InputEvent::WindowTouch(touch(PointState::Up, 1)), t0);
        assert!(host.root_view().expect("no root").is_visible());
        assert_eq!(host.border_layer().order(), crate::core::StackOrder::Top);

        // touching the border pushes the deadline back
        host.dispatch(InputEvent::BorderTouch(touch(PointState::Motion, 1)), t0 + ms(2000));
        host.tick(t0 + ms(3500));
        assert!(host.root_view().expect("no root").is_visible());

        host.tick(t0 + ms(5000));
        assert!(!host.root_view().expect("no root").is_visible());
        assert_eq!(host.border_layer().order(), crate::core::StackOrder::Bottom);

        host.window_mut().set_maximized(false);
        host.handle_resized(Size::new(410, 355));

        let root = host.root_view().expect("no root");
        assert!(root.is_visible());
        assert_eq!(root.background(), BorderConfig::default().background());
        assert!(!host.subscriptions().contains(Subscriptions::OVERLAY_INTERCEPT));
    }

    #[test]
    fn test_dispose_removes_overlay() {
        let mut host = host();
        let t0 = Instant::now();

        host.dispatch(InputEvent::WindowTouch(touch(PointState::Stationary, 2)), t0);
        host.tick(t0 + ms(300));
        assert_eq!(host.window().views().len(), 1);

        host.dispose_border();
        assert!(host.window().views().is_empty());
        assert!(host.subscriptions().is_empty());
    }
}
