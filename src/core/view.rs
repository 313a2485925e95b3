//! A minimal retained visual tree.
//!
//! A [`View`] is a node that the border draws into: it has a background,
//! rounded corners, an optional image resource, a visibility flag, and
//! owned children. The embedding toolkit renders it however it likes;
//! this crate only ever mutates the tree.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Color, CornerRadius, Size, Real};

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for a [`View`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    fn next() -> Self {
        Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw value of the identifier.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// A single node in the visual tree.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    id: ViewId,
    name: String,
    background: Color,
    corner_radius: CornerRadius,
    visible: bool,
    resource_url: Option<String>,
    children: Vec<View>,
}

impl View {
    /// Creates a new, visible, transparent View.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            id: ViewId::next(),
            name: name.into(),
            background: Color::TRANSPARENT,
            corner_radius: CornerRadius::SQUARE,
            visible: true,
            resource_url: None,
            children: Vec::new(),
        }
    }

    /// Creates a new View that displays the image at `url`.
    pub fn image<S, U>(name: S, url: U) -> Self
    where
        S: Into<String>,
        U: Into<String>,
    {
        let mut view = Self::new(name);
        view.resource_url = Some(url.into());
        view
    }

    /// Returns the View's identifier.
    #[inline(always)]
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Returns the View's name.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the View's background color.
    #[inline(always)]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Sets the View's background color.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Returns the View's corner radius.
    #[inline(always)]
    pub fn corner_radius(&self) -> CornerRadius {
        self.corner_radius
    }

    /// Sets the View's corner radius.
    pub fn set_corner_radius(&mut self, radius: CornerRadius) {
        self.corner_radius = radius;
    }

    /// Returns the image resource shown by the View, if any.
    pub fn resource_url(&self) -> Option<&str> {
        self.resource_url.as_deref()
    }

    /// Sets the image resource shown by the View.
    pub fn set_resource_url<U: Into<String>>(&mut self, url: U) {
        self.resource_url = Some(url.into());
    }

    /// Tests whether the View is shown.
    #[inline(always)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows the View.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hides the View.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Adds a child to the View, returning its identifier.
    pub fn add(&mut self, child: View) -> ViewId {
        let id = child.id;
        self.children.push(child);
        id
    }

    /// Removes the child with the given identifier from anywhere
    /// in the subtree, returning it if found.
    pub fn remove(&mut self, id: ViewId) -> Option<View> {
        if let Some(idx) = self.children.iter().position(|c| c.id == id) {
            return Some(self.children.remove(idx))
        }
        self.children.iter_mut().find_map(|c| c.remove(id))
    }

    /// The View's direct children.
    pub fn children(&self) -> &[View] {
        &self.children
    }

    /// Finds a View by identifier in this subtree, including `self`.
    pub fn find(&self, id: ViewId) -> Option<&View> {
        if self.id == id {
            return Some(self)
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Finds the first View named `name` in this subtree, depth first.
    pub fn find_named(&self, name: &str) -> Option<&View> {
        if self.name == name {
            return Some(self)
        }
        self.children.iter().find_map(|c| c.find_named(name))
    }

    /// Like [`View::find`], but mutably.
    pub fn find_mut(&mut self, id: ViewId) -> Option<&mut View> {
        if self.id == id {
            return Some(self)
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }
}

/// Where a [`Layer`] sits in the window's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackOrder {
    /// Drawn above everything else.
    Top,
    /// Drawn below everything else.
    Bottom,
}

/// A named, sized layer on the window that views are added to.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    name: &'static str,
    size: Size<i32, Real>,
    offset_y: i32,
    order: StackOrder,
}

impl Layer {
    /// Creates a new Layer lowered to the bottom of the stack.
    pub fn new(name: &'static str, size: Size<i32, Real>) -> Self {
        Self {
            name,
            size,
            offset_y: 0,
            order: StackOrder::Bottom,
        }
    }

    /// The name of the Layer.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The size of the Layer.
    pub fn size(&self) -> Size<i32, Real> {
        self.size
    }

    /// Resizes the Layer.
    pub fn set_size(&mut self, size: Size<i32, Real>) {
        self.size = size;
    }

    /// The vertical offset of the Layer from the top of the window.
    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }

    /// Moves the Layer down from the top of the window.
    pub fn set_offset_y(&mut self, offset: i32) {
        self.offset_y = offset;
    }

    /// Where the layer sits in the stack.
    pub fn order(&self) -> StackOrder {
        self.order
    }

    /// Raises the Layer to the top of the stack.
    pub fn raise_to_top(&mut self) {
        self.order = StackOrder::Top;
    }

    /// Lowers the Layer to the bottom of the stack.
    pub fn lower_to_bottom(&mut self) {
        self.order = StackOrder::Bottom;
    }
}
