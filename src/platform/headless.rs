//! An in-memory window that does not interface with a compositor at all.

use tracing::trace;

use crate::core::{View, ViewId};
use crate::platform::Window;
use crate::types::{Color, Point, Real, ResizeDirection, Size};

/// A request made to a [`HeadlessWindow`], recorded in the order it was made.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowRequest {
    /// The window was resized.
    SetSize(Size<i32, Real>),
    /// The window was moved.
    SetPosition(Point<i32>),
    /// The window was maximized or restored.
    Maximize(bool),
    /// The window was minimized or restored.
    Minimize(bool),
    /// The window was destroyed.
    Destroy,
    /// An interactive move was requested.
    Move,
    /// An interactive resize was requested.
    Resize(ResizeDirection),
    /// Transparency was toggled.
    Transparency(bool),
    /// The background color was set.
    Background(Color),
    /// The window was made floating.
    Floating,
    /// A view was added.
    AddView(ViewId),
    /// A view was removed.
    RemoveView(ViewId),
}

/// A window that implements [`Window`] without a compositor behind it,
/// and should mainly be used for testing.
///
/// `HeadlessWindow` applies every request to its own state immediately,
/// and additionally keeps a log of all requests made to it, which can be
/// inspected with [`requests`](HeadlessWindow::requests) and drained with
/// [`take_requests`](HeadlessWindow::take_requests).
///
/// Since there is no compositor, a size change does not call back into
/// the border. Drivers should call
/// [`BorderHost::handle_resized`](crate::BorderHost::handle_resized)
/// themselves to emulate the compositor's notification.
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    size: Size<i32, Real>,
    position: Point<i32>,
    maximized: bool,
    minimized: bool,
    destroyed: bool,
    transparent: bool,
    floating: bool,
    background: Color,
    views: Vec<View>,
    requests: Vec<WindowRequest>,
}

impl HeadlessWindow {
    /// Creates a new HeadlessWindow of the given size at the origin.
    pub fn new(size: Size<i32, Real>) -> Self {
        Self {
            size,
            position: Point::zeroed(),
            maximized: false,
            minimized: false,
            destroyed: false,
            transparent: false,
            floating: false,
            background: Color::from_hex(0xffffffff),
            views: Vec::new(),
            requests: Vec::new(),
        }
    }

    /// Sets the maximized state directly, without recording a request.
    ///
    /// Emulates the compositor maximizing the window on its own.
    pub fn set_maximized(&mut self, maximized: bool) {
        self.maximized = maximized;
    }

    /// Tests whether the window is minimized.
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Tests whether the window has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Tests whether the window is drawn with an alpha channel.
    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    /// Tests whether the window is in floating mode.
    pub fn is_floating(&self) -> bool {
        self.floating
    }

    /// The background color of the window.
    pub fn background(&self) -> Color {
        self.background
    }

    /// The views added on top of the window content.
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Every request made to the window so far.
    pub fn requests(&self) -> &[WindowRequest] {
        &self.requests
    }

    /// Drains the request log.
    pub fn take_requests(&mut self) -> Vec<WindowRequest> {
        std::mem::take(&mut self.requests)
    }

    fn record(&mut self, req: WindowRequest) {
        trace!("headless window request: {:?}", req);
        self.requests.push(req);
    }
}

impl Window for HeadlessWindow {
    fn size(&self) -> Size<i32, Real> {
        self.size
    }

    fn set_size(&mut self, size: Size<i32, Real>) {
        self.size = size;
        self.record(WindowRequest::SetSize(size));
    }

    fn position(&self) -> Point<i32> {
        self.position
    }

    fn set_position(&mut self, pos: Point<i32>) {
        self.position = pos;
        self.record(WindowRequest::SetPosition(pos));
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn maximize(&mut self, maximize: bool) {
        self.maximized = maximize;
        self.record(WindowRequest::Maximize(maximize));
    }

    fn minimize(&mut self, minimize: bool) {
        self.minimized = minimize;
        self.record(WindowRequest::Minimize(minimize));
    }

    fn destroy(&mut self) {
        self.destroyed = true;
        self.record(WindowRequest::Destroy);
    }

    fn request_move_to_server(&mut self) {
        self.record(WindowRequest::Move);
    }

    fn request_resize_to_server(&mut self, dir: ResizeDirection) {
        self.record(WindowRequest::Resize(dir));
    }

    fn set_transparency(&mut self, transparent: bool) {
        self.transparent = transparent;
        self.record(WindowRequest::Transparency(transparent));
    }

    fn set_background_color(&mut self, color: Color) {
        self.background = color;
        self.record(WindowRequest::Background(color));
    }

    fn enable_floating_mode(&mut self) {
        self.floating = true;
        self.record(WindowRequest::Floating);
    }

    fn add_view(&mut self, view: View) -> ViewId {
        let id = view.id();
        self.views.push(view);
        self.record(WindowRequest::AddView(id));
        id
    }

    fn remove_view(&mut self, id: ViewId) -> Option<View> {
        let idx = self.views.iter().position(|v| v.id() == id)?;
        self.record(WindowRequest::RemoveView(id));
        Some(self.views.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_are_recorded() {
        let mut window = HeadlessWindow::new(Size::new(400, 300));

        window.set_size(Size::new(410, 355));
        window.maximize(true);
        let id = window.add_view(View::new("overlay"));

        assert!(window.is_maximized());
        assert_eq!(window.size(), Size::new(410, 355));
        assert_eq!(window.views().len(), 1);

        assert!(window.remove_view(id).is_some());
        assert!(window.remove_view(id).is_none());

        assert_eq!(
            window.take_requests(),
            vec![
                WindowRequest::SetSize(Size::new(410, 355)),
                WindowRequest::Maximize(true),
                WindowRequest::AddView(id),
                WindowRequest::RemoveView(id),
            ]
        );
        assert!(window.requests().is_empty());
    }
}
