//! Primitives for working with window geometries.
//!
//! This module contains [`Point`] and [`Size`], the two geometrical types
//! the border subsystem works with. Both are generic over a [`Scalar`],
//! which is implemented for `i32`, `u32`, `f32` and `f64`.
//!
//! ## Real and Bordered sizes
//!
//! A bordered window has two sizes at any given moment: the size the
//! compositor sees (the _real_ size), and the size of the content area
//! that excludes the border decoration (the _bordered_ size).
//!
//! [`Size`] is additionally generic over a marker type implementing
//! [`SizeKind`], so that the two can never be mixed up by accident.
//! Only [`BorderHost`][1] converts between them.
//!
//! [1]: crate::border::BorderHost

use core::ops::{Add, Sub, AddAssign, SubAssign, Neg};

use std::fmt;
use std::marker::PhantomData;

pub mod marker {
    //! Marker types for marking a Size as Real or Bordered.
    //!
    //! This module contains the [`SizeKind`] sealed trait and its
    //! two implementors, [`Real`] and [`Bordered`].

    mod private {
        pub trait Sealed {}
    }

    use core::ops::{Add, Sub};

    /// A sealed trait for marking types as Scalars, that can be used in Points and Sizes.
    pub trait Scalar:
        Sized
        + Copy
        + PartialEq
        + PartialOrd
        + Add<Self, Output = Self>
        + Sub<Self, Output = Self>
        + Default
    {
        /// The zero point of the Scalar.
        const ZERO: Self;

        /// Convert to this Scalar from an f64, truncating towards zero if needed.
        fn from_f64(v: f64) -> Self;

        /// Convert this Scalar to an f64.
        fn to_f64(self) -> f64;
    }

    macro_rules! __impl_scalar {
        ($zero:expr => $($targ:ty),+) => {
            $(
                impl private::Sealed for $targ {}

                impl Scalar for $targ {
                    const ZERO: Self = $zero as $targ;

                    #[inline]
                    fn from_f64(v: f64) -> Self {
                        v as Self
                    }

                    #[inline]
                    fn to_f64(self) -> f64 {
                        self as f64
                    }
                }
            )+
        };
    }

    __impl_scalar!(0 => i32, u32, f32, f64);

    /// A sealed trait defining marker types `Real` and `Bordered`.
    pub trait SizeKind: Copy + PartialEq + private::Sealed {}

    macro_rules! __impl_sizekind {
        {$(#[$outer:meta])? $targ:ident} => {
            $(
                #[$outer]
            )?
            #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct $targ;

            impl private::Sealed for $targ {}
            impl SizeKind for $targ {}
        };
    }

    __impl_sizekind!{
        /// Marks a size as the compositor-visible window size.
        Real
    }
    __impl_sizekind!{
        /// Marks a size as the content area, excluding the border decoration.
        Bordered
    }
}

pub use marker::{Scalar, SizeKind, Real, Bordered};

/// A point on a window or on the screen.
///
/// The (0, 0) reference is taken from the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<N: Scalar> {
    /// The `Point`'s X-coordinate.
    pub x: N,
    /// The `Point`'s Y-coordinate.
    pub y: N,
}

impl<N: Scalar> Point<N> {
    /// Creates a new Point.
    pub const fn new(x: N, y: N) -> Point<N> {
        Point { x, y }
    }

    /// Creates a new Point where both coordinates are zero.
    pub const fn zeroed() -> Point<N> {
        Point { x: N::ZERO, y: N::ZERO }
    }

    /// Converts the Point to integer coordinates, truncating towards zero.
    pub fn truncate(self) -> Point<i32> {
        Point {
            x: i32::from_f64(self.x.to_f64()),
            y: i32::from_f64(self.y.to_f64()),
        }
    }
}

impl Point<i32> {
    /// Adds `other` component-wise, saturating at the bounds of `i32`.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Point::new(self.x.saturating_add(other.x), self.y.saturating_add(other.y))
    }
}

impl<N: Scalar> Add for Point<N> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<N: Scalar> AddAssign for Point<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<N: Scalar> Sub for Point<N> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<N: Scalar + Neg<Output = N>> Neg for Point<N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<N: Scalar> From<(N, N)> for Point<N> {
    fn from(from: (N, N)) -> Self {
        let (x, y) = from;
        Self { x, y }
    }
}

impl<N: Scalar + fmt::Display> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A width and a height, without respect to position.
///
/// `Size`s of the same [`SizeKind`] can be added and subtracted
/// component-wise. Adding a `Size` is how window sizes are grown by
/// the border footprint or by gesture displacements.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size<N: Scalar, Kind: SizeKind> {
    /// The width of the Size.
    pub width: N,
    /// The height of the Size.
    pub height: N,

    #[cfg_attr(feature = "serde", serde(skip))]
    _kind: PhantomData<Kind>,
}

impl<N: Scalar, Kind: SizeKind> Size<N, Kind> {
    /// Creates a new Size.
    pub const fn new(width: N, height: N) -> Self {
        Self {
            width,
            height,
            _kind: PhantomData
        }
    }

    /// Creates a new Size with all fields set to zero.
    pub const fn zeroed() -> Self {
        Self::new(N::ZERO, N::ZERO)
    }

    /// Raises each component of `self` to at least the matching component of `min`.
    #[must_use]
    pub fn at_least(self, min: Self) -> Self {
        Self::new(
            if min.width > self.width { min.width } else { self.width },
            if min.height > self.height { min.height } else { self.height },
        )
    }

    /// Lowers each component of `self` to at most the matching component of `max`.
    #[must_use]
    pub fn at_most(self, max: Self) -> Self {
        Self::new(
            if max.width < self.width { max.width } else { self.width },
            if max.height < self.height { max.height } else { self.height },
        )
    }

    /// Tests whether both components of `self` are less than or equal to `other`'s.
    pub fn fits_within(&self, other: &Self) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    /// Reinterprets the Size as another kind.
    ///
    /// Only the border host should need this, as it is the sole owner
    /// of the conversion between real and bordered sizes.
    pub(crate) fn cast<K: SizeKind>(self) -> Size<N, K> {
        Size::new(self.width, self.height)
    }
}

impl<Kind: SizeKind> Size<i32, Kind> {
    /// Adds `other` component-wise, saturating at the bounds of `i32`.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self::new(
            self.width.saturating_add(other.width),
            self.height.saturating_add(other.height),
        )
    }
}

impl<N: Scalar, Kind: SizeKind> Add for Size<N, Kind> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.width + other.width, self.height + other.height)
    }
}

impl<N: Scalar, Kind: SizeKind> AddAssign for Size<N, Kind> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<N: Scalar, Kind: SizeKind> Sub for Size<N, Kind> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.width - other.width, self.height - other.height)
    }
}

impl<N: Scalar, Kind: SizeKind> SubAssign for Size<N, Kind> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<N: Scalar, Kind: SizeKind> From<(N, N)> for Size<N, Kind> {
    fn from(from: (N, N)) -> Self {
        let (width, height) = from;
        Self::new(width, height)
    }
}

impl<N: Scalar + fmt::Display, Kind: SizeKind> fmt::Display for Size<N, Kind> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
