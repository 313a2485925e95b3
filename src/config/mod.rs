//! Types for configuring a window border.
//!
//! This module contains [`BorderConfig`], the configuration object
//! consumed by [`DefaultBorder`](crate::DefaultBorder), and its builder.
//!
use custom_debug_derive::Debug;

use std::any::Any;
use std::collections::HashMap;
use std::time::Duration;

use crate::border::BorderGeometry;
use crate::types::{Color, CornerRadius, Size, Bordered};
use crate::{Result, BorderError::*};

/// The default height of the border strip below the content.
pub const DEFAULT_BORDER_HEIGHT: u32 = 50;
/// The default thickness of the border line around the content.
pub const DEFAULT_LINE_THICKNESS: u32 = 5;
/// The default width of the band along each edge that counts as that edge.
pub const DEFAULT_TOUCH_THICKNESS: u32 = 20;

/// The central configuration object for a border.
///
/// `BorderConfig` stores the geometry of the border decoration, the
/// timings of its dwell timers and the look of its views, but it can
/// also store any arbitrary key-value pair.
///
/// `BorderConfig` provides a `validate` method that ensures it is valid
/// and can be used by a border. While this checks the predefined
/// invariants on the config, it can also run user-defined code to
/// ensure that user-defined invariants are also upheld.
///
/// # Construction
///
/// To build a `BorderConfig`, use the [`BorderConfigBuilder`] type.
///
/// # Example
///
/// ```rust
/// use winborder::config::{BorderConfig, no_checks};
///
/// // create a default config that upholds all invariants
/// let config = BorderConfig::new();
///
/// config.validate(no_checks).expect("invalid config");
/// ```
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderConfig {
    /// The thickness of the line drawn around the content.
    pub(crate) line_thickness: u32,
    /// The width of the band along each edge that resizes from that edge.
    pub(crate) touch_thickness: u32,
    /// The height of the border strip below the content.
    pub(crate) border_height: u32,
    /// The smallest content size the window can be resized to.
    pub(crate) min_size: Option<Size<i32, Bordered>>,
    /// The largest content size the window can be resized to.
    pub(crate) max_size: Option<Size<i32, Bordered>>,
    /// Whether the border hides itself while the window is maximized.
    pub(crate) overlay_mode: bool,
    /// The directory that icon artwork is loaded from.
    pub(crate) resource_path: String,
    /// How long two fingers must rest on the window to pick it up.
    pub(crate) long_press: Duration,
    /// How long the summoned border stays up in overlay mode.
    pub(crate) overlay_hide: Duration,
    /// The number of taps on a picked-up window that toggles maximize.
    pub(crate) maximize_taps: u32,
    /// The background of the border.
    pub(crate) background: Color,
    /// The background of the border while it is being pressed.
    pub(crate) pressed_background: Color,
    /// The background of the border while it is summoned in overlay mode.
    pub(crate) overlay_background: Color,
    /// The tint of the view covering a picked-up window.
    pub(crate) window_overlay: Color,
    /// The corner radius of the border while the window is not maximized.
    pub(crate) corner_radius: CornerRadius,
    /// Storage for any user-defined keys.
    #[debug(skip)]
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) keys: HashMap<String, Box<dyn Any>>,
}

/// A function that simply returns Ok. Pass this into validate if you have no
/// user-defined checks to run.
pub const fn no_checks(_: &BorderConfig) -> Result<()> {
    Ok(())
}

impl BorderConfig {
    /// Returns the default construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [`BorderConfigBuilder`] to build your config with the
    /// 'builder' idiom.
    pub fn builder() -> BorderConfigBuilder {
        BorderConfigBuilder::new()
    }

    /// Checks the configuration to verify that all invariants are upheld.
    ///
    /// The built-in invariants are:
    ///
    /// 1. If both a minimum and a maximum size are set, the minimum
    /// is no larger than the maximum in either dimension.
    /// 2. Neither dwell interval is zero.
    /// 3. The maximize tap count is at least one.
    ///
    /// If you have no code you want to insert, pass in [`no_checks`] as a
    /// function pointer.
    pub fn validate<F>(&self, checks: F) -> Result<()>
    where
        F: FnOnce(&BorderConfig) -> Result<()>,
    {
        if let (Some(min), Some(max)) = (self.min_size, self.max_size) {
            if !min.fits_within(&max) {
                return Err(InvalidConfig(format!("min size {} exceeds max size {}", min, max)));
            }
        }
        if self.long_press.is_zero() || self.overlay_hide.is_zero() {
            return Err(InvalidConfig("dwell intervals must be non-zero".into()));
        }
        if self.maximize_taps < 1 {
            return Err(InvalidConfig("maximize_taps must be at least 1".into()));
        }
        checks(self)?;
        Ok(())
    }

    /// Returns the footprint of the border decoration as a [`BorderGeometry`].
    pub fn geometry(&self) -> BorderGeometry {
        BorderGeometry {
            line_thickness: self.line_thickness,
            touch_thickness: self.touch_thickness,
            border_height: self.border_height,
            min_size: self.min_size,
            max_size: self.max_size,
        }
    }

    /// Whether the border hides itself while the window is maximized.
    pub fn overlay_mode(&self) -> bool {
        self.overlay_mode
    }

    /// The directory that icon artwork is loaded from.
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// Returns the full path of the icon artwork file `name`.
    pub fn resource(&self, name: &str) -> String {
        format!("{}{}", self.resource_path, name)
    }

    /// How long two fingers must rest on the window to pick it up.
    pub fn long_press(&self) -> Duration {
        self.long_press
    }

    /// How long the summoned border stays up in overlay mode.
    pub fn overlay_hide(&self) -> Duration {
        self.overlay_hide
    }

    /// The number of taps on a picked-up window that toggles maximize.
    ///
    /// Defaults to 3. Older toolkits toggled on a double tap, which can be
    /// restored by setting this to 2.
    pub fn maximize_taps(&self) -> u32 {
        self.maximize_taps
    }

    /// The background of the border.
    pub fn background(&self) -> Color {
        self.background
    }

    /// The background of the border while it is being pressed.
    pub fn pressed_background(&self) -> Color {
        self.pressed_background
    }

    /// The background of the border while it is summoned in overlay mode.
    pub fn overlay_background(&self) -> Color {
        self.overlay_background
    }

    /// The tint of the view covering a picked-up window.
    pub fn window_overlay(&self) -> Color {
        self.window_overlay
    }

    /// The corner radius of the border while the window is not maximized.
    pub fn corner_radius(&self) -> CornerRadius {
        self.corner_radius
    }

    /// Inserts an arbitrary key-value pair into the config.
    pub fn insert_key<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Any,
    {
        self.keys.insert(key.into(), Box::new(value) as Box<dyn Any>);
    }

    /// Get a generic key from the config's internal store.
    ///
    /// Returns `None` if the key does not exist or is not
    /// in the type specified.
    pub fn get_key<V: Any>(&self, key: &str) -> Option<&V> {
        self.keys
            .get(key)
            .and_then(|i| i.downcast_ref::<V>())
    }

    /// Remove a key-value pair from the config.
    ///
    /// Returns None if the value doesn't exist or is not of
    /// the specified type.
    pub fn remove_key<V: Any>(&mut self, key: &str) -> Option<V> {
        self.keys
            .remove(key)
            .and_then(|v| v.downcast().ok())
            .map(|v| *v)
    }
}

impl Default for BorderConfig {
    fn default() -> BorderConfig {
        BorderConfig {
            line_thickness: DEFAULT_LINE_THICKNESS,
            touch_thickness: DEFAULT_TOUCH_THICKNESS,
            border_height: DEFAULT_BORDER_HEIGHT,
            min_size: Some(Size::new(100, 0)),
            max_size: None,
            overlay_mode: false,
            resource_path: String::from("/usr/share/winborder/images/"),
            long_press: Duration::from_millis(300),
            overlay_hide: Duration::from_millis(3000),
            maximize_taps: 3,
            background: Color::from_rgba_f32(1.0, 1.0, 1.0, 0.3),
            pressed_background: Color::from_rgba_f32(1.0, 1.0, 1.0, 0.4),
            overlay_background: Color::from_rgba_f32(1.0, 1.0, 1.0, 0.3),
            window_overlay: Color::from_rgba_f32(1.0, 1.0, 1.0, 0.5),
            corner_radius: CornerRadius::uniform(0.03),
            keys: HashMap::new(),
        }
    }
}

/// A helper type to construct a [`BorderConfig`].
#[derive(Debug, Default)]
pub struct BorderConfigBuilder {
    inner: BorderConfig,
}

impl BorderConfigBuilder {
    /// Creates a new `BorderConfigBuilder`.
    pub fn new() -> Self {
        Self {
            inner: BorderConfig::default(),
        }
    }

    /// Sets the thickness of the line drawn around the content.
    pub fn line_thickness(mut self, px: u32) -> Self {
        self.inner.line_thickness = px;
        self
    }

    /// Sets the width of the band along each edge that resizes from that edge.
    pub fn touch_thickness(mut self, px: u32) -> Self {
        self.inner.touch_thickness = px;
        self
    }

    /// Sets the height of the border strip below the content.
    pub fn border_height(mut self, px: u32) -> Self {
        self.inner.border_height = px;
        self
    }

    /// Sets the smallest content size the window can be resized to.
    pub fn min_size<S: Into<Option<Size<i32, Bordered>>>>(mut self, size: S) -> Self {
        self.inner.min_size = size.into();
        self
    }

    /// Sets the largest content size the window can be resized to.
    pub fn max_size<S: Into<Option<Size<i32, Bordered>>>>(mut self, size: S) -> Self {
        self.inner.max_size = size.into();
        self
    }

    /// Sets whether the border hides itself while the window is maximized.
    pub fn overlay_mode(mut self, overlay: bool) -> Self {
        self.inner.overlay_mode = overlay;
        self
    }

    /// Sets the directory that icon artwork is loaded from.
    pub fn resource_path<S: Into<String>>(mut self, path: S) -> Self {
        self.inner.resource_path = path.into();
        self
    }

    /// Sets how long two fingers must rest on the window to pick it up.
    pub fn long_press(mut self, dwell: Duration) -> Self {
        self.inner.long_press = dwell;
        self
    }

    /// Sets how long the summoned border stays up in overlay mode.
    pub fn overlay_hide(mut self, dwell: Duration) -> Self {
        self.inner.overlay_hide = dwell;
        self
    }

    /// Sets the number of taps on a picked-up window that toggles maximize.
    pub fn maximize_taps(mut self, taps: u32) -> Self {
        self.inner.maximize_taps = taps;
        self
    }

    /// Sets the background of the border.
    pub fn background(mut self, color: Color) -> Self {
        self.inner.background = color;
        self
    }

    /// Sets the background of the border while it is being pressed.
    pub fn pressed_background(mut self, color: Color) -> Self {
        self.inner.pressed_background = color;
        self
    }

    /// Sets the corner radius of the border while the window is not maximized.
    pub fn corner_radius(mut self, radius: CornerRadius) -> Self {
        self.inner.corner_radius = radius;
        self
    }

    /// Inserts any additional keys the user may want.
    pub fn other_key<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Any,
    {
        self.inner.insert_key(key, value);
        self
    }

    /// Finishes config construction, validates it and returns
    /// a completed config if validation is successful.
    ///
    /// You can supply an additional `check` to run
    /// additional code to validate your config.
    pub fn finish<F>(self, check: F) -> Result<BorderConfig>
    where
        F: FnOnce(&BorderConfig) -> Result<()>,
    {
        let config = self.inner;
        config.validate(check)?;
        Ok(config)
    }
}
