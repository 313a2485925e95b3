//! Classifying touch points on a bordered window.

use crate::border::BorderGeometry;
use crate::types::{BorderDirection, Bordered, Size};

/// Maps a touch point to the region of the bordered window it falls in.
///
/// `x` and `y` are in real-window coordinates, i.e. relative to the top
/// left corner of the decoration, and `size` is the current bordered size.
///
/// Corners are checked before edges, and edges before the move band,
/// so a point near two edges always resolves to the corner between them.
/// The first match of the following wins:
///
/// 1. bottom left corner
/// 2. bottom right corner
/// 3. top left corner
/// 4. top right corner
/// 5. left edge
/// 6. right edge
/// 7. bottom edge
/// 8. top edge
/// 9. the move band below the content
///
/// Anything else is inside the content area and returns `None`.
pub fn direction_at(
    geom: &BorderGeometry,
    size: Size<i32, Bordered>,
    x: f32,
    y: f32,
) -> BorderDirection {
    use BorderDirection::*;

    let touch = geom.touch_thickness as f32;
    let line = geom.line_thickness as f32;
    let height = geom.border_height as f32;
    let (w, h) = (size.width as f32, size.height as f32);

    let left = x < touch;
    let right = x > w + line * 2.0 - touch;
    let top = y < touch;
    let bottom_corner = y > h + height - touch;

    if left && bottom_corner {
        BottomLeft
    } else if right && bottom_corner {
        BottomRight
    } else if left && top {
        TopLeft
    } else if right && top {
        TopRight
    } else if left {
        Left
    } else if right {
        Right
    } else if y > h + height + line - touch {
        Bottom
    } else if top {
        Top
    } else if y > h {
        Move
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    const SIZE: Size<i32, Bordered> = Size::new(400, 300);

    fn geom() -> BorderGeometry {
        BorderGeometry {
            line_thickness: 5,
            touch_thickness: 20,
            border_height: 50,
            min_size: None,
            max_size: None,
        }
    }

    fn dir(x: f32, y: f32) -> BorderDirection {
        direction_at(&geom(), SIZE, x, y)
    }

    #[test]
    fn test_content_is_none() {
        // content spans x in [20, 390] and y in [20, 300] before any band kicks in
        for x in (20..=390).step_by(10) {
            for y in (20..=300).step_by(10) {
                assert_eq!(dir(x as f32, y as f32), BorderDirection::None, "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_corners_win_over_edges() {
        assert_eq!(dir(0.0, 0.0), BorderDirection::TopLeft);
        assert_eq!(dir(409.0, 0.0), BorderDirection::TopRight);
        assert_eq!(dir(0.0, 354.0), BorderDirection::BottomLeft);
        assert_eq!(dir(409.0, 354.0), BorderDirection::BottomRight);

        // just inside the bottom corner band, which starts higher than the bottom edge band
        assert_eq!(dir(5.0, 331.0), BorderDirection::BottomLeft);
        assert_eq!(dir(400.0, 331.0), BorderDirection::BottomRight);
    }

    #[test]
    fn test_edges_and_move_band() {
        assert_eq!(dir(10.0, 150.0), BorderDirection::Left);
        assert_eq!(dir(395.0, 150.0), BorderDirection::Right);
        assert_eq!(dir(200.0, 5.0), BorderDirection::Top);
        assert_eq!(dir(200.0, 340.0), BorderDirection::Bottom);
        assert_eq!(dir(200.0, 320.0), BorderDirection::Move);
        assert_eq!(dir(200.0, 301.0), BorderDirection::Move);
    }

    #[test]
    fn test_every_direction_reachable() {
        let points = [
            (0.0, 0.0), (200.0, 0.0), (409.0, 0.0),
            (0.0, 150.0), (409.0, 150.0),
            (0.0, 354.0), (200.0, 354.0), (409.0, 354.0),
            (200.0, 320.0), (200.0, 150.0),
        ];
        let found: Vec<_> = points.iter().map(|(x, y)| dir(*x, *y)).collect();

        for d in BorderDirection::iter() {
            assert!(found.contains(&d), "{} not reachable", d);
        }
    }
}
