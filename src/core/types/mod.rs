//! Basic core types used throughout this crate.

pub mod geometry;

pub use geometry::*;

use strum::{EnumIs, EnumIter, Display};

/// The region of a bordered window that a touch point falls in.
///
/// Computed fresh for each gesture start by
/// [`direction_at`](crate::border::direction::direction_at).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIs, EnumIter, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderDirection {
    /// Inside the content area.
    #[default]
    None,
    /// The top left corner.
    TopLeft,
    /// The top edge.
    Top,
    /// The top right corner.
    TopRight,
    /// The left edge.
    Left,
    /// The right edge.
    Right,
    /// The bottom left corner.
    BottomLeft,
    /// The bottom edge.
    Bottom,
    /// The bottom right corner.
    BottomRight,
    /// The border strip below the content, used to drag the window around.
    Move,
}

impl BorderDirection {
    /// Whether the direction is one of the four corners.
    pub fn is_corner(&self) -> bool {
        use BorderDirection::*;
        matches!(self, TopLeft | TopRight | BottomLeft | BottomRight)
    }

    /// Whether the direction is the left or the right edge.
    pub fn is_vertical_edge(&self) -> bool {
        matches!(self, BorderDirection::Left | BorderDirection::Right)
    }

    /// Whether the direction is the top or the bottom edge.
    pub fn is_horizontal_edge(&self) -> bool {
        matches!(self, BorderDirection::Top | BorderDirection::Bottom)
    }

    /// Returns the resize direction that this border direction requests, if any.
    ///
    /// `None` and `Move` do not resize the window.
    pub fn resize_direction(&self) -> Option<ResizeDirection> {
        use BorderDirection as B;
        use ResizeDirection as R;

        match self {
            B::TopLeft     => Some(R::TopLeft),
            B::Top         => Some(R::Top),
            B::TopRight    => Some(R::TopRight),
            B::Left        => Some(R::Left),
            B::Right       => Some(R::Right),
            B::BottomLeft  => Some(R::BottomLeft),
            B::Bottom      => Some(R::Bottom),
            B::BottomRight => Some(R::BottomRight),
            B::None | B::Move => None,
        }
    }
}

/// A direction in which the compositor is asked to resize a window.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizeDirection {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl From<ResizeDirection> for BorderDirection {
    fn from(from: ResizeDirection) -> BorderDirection {
        use BorderDirection as B;
        use ResizeDirection as R;

        match from {
            R::TopLeft     => B::TopLeft,
            R::Top         => B::Top,
            R::TopRight    => B::TopRight,
            R::Left        => B::Left,
            R::Right       => B::Right,
            R::BottomLeft  => B::BottomLeft,
            R::Bottom      => B::Bottom,
            R::BottomRight => B::BottomRight,
        }
    }
}

/// A representation of a color, following the RGBA model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(u32);

impl Color {
    /// A fully transparent color.
    pub const TRANSPARENT: Color = Color(0x00000000);

    /// Creates the Color from a 32-bit integer.
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex)
    }

    /// Creates the Color from (R, G, B, A) components given as
    /// proportions of max intensity, clamped to 0.0..=1.0.
    pub fn from_rgba_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;

        Self(u32::from_be_bytes([byte(r), byte(g), byte(b), byte(a)]))
    }

    /// Returns the (R, G, B, A) values of the Color as bytes.
    pub fn rgba(&self) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = u32::to_be_bytes(self.0);
        (r, g, b, a)
    }

    /// Returns the alpha component of the Color as a proportion of max intensity.
    pub fn alpha_f32(&self) -> f32 {
        self.rgba().3 as f32 / 255.0
    }

    /// Tests whether the Color is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.rgba().3 == 0
    }

    /// Returns the color as a u32.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Color {
    fn from(from: u32) -> Self {
        Self::from_hex(from)
    }
}

/// The corner radius of a view, relative to its size.
///
/// Each component is in the order (top left, top right, bottom right, bottom left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CornerRadius(pub [f32; 4]);

impl CornerRadius {
    /// Square corners.
    pub const SQUARE: CornerRadius = CornerRadius([0.0; 4]);

    /// A radius that is the same for every corner.
    pub const fn uniform(radius: f32) -> Self {
        Self([radius; 4])
    }

    /// Tests whether every corner is square.
    pub fn is_square(&self) -> bool {
        self.0.iter().all(|r| *r == 0.0)
    }
}
