//! Background grid and axis lines in screen space

use super::camera::Camera;
use super::types::{Point, Viewport};

/// Screen pixels the grid and axes extend past the viewport edges
pub const OVERSCAN: f64 = 10.0;

/// Grid spacings drawn behind the scene, in world units
pub const GRID_UNITS: [f64; 2] = [10.0, 50.0];

/// Grids denser than this many lines per axis are skipped
pub const MAX_GRID_LINES: i64 = 2000;

/// Largest grid index whose world coordinate is still an exact f64 integer
const MAX_GRID_INDEX: f64 = 9_007_199_254_740_992.0;

/// A line ready to draw, in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLine {
    pub from: Point,
    pub to: Point,
}

/// Vertical and horizontal grid lines every `unit` world units covering the viewport
pub fn grid_lines(camera: &Camera, viewport: Viewport, unit: f64) -> Vec<ScreenLine> {
    if !unit.is_finite() || unit <= 0.0 {
        return Vec::new();
    }

    let top_left = camera.screen_to_world(Point::ZERO, viewport);
    let bottom_right = camera.screen_to_world(Point::new(viewport.width, viewport.height), viewport);
    let pad = OVERSCAN / camera.zoom();

    // Truncated toward zero, not floored
    let first_col = (top_left.x / unit).trunc();
    let first_row = (top_left.y / unit).trunc();
    let last_col = (bottom_right.x / unit).trunc() + 1.0;
    let last_row = (bottom_right.y / unit).trunc() + 1.0;

    // Bounds are checked in f64 so far-away cameras never overflow the casts
    let bounds = [first_col, first_row, last_col, last_row];
    if bounds.iter().any(|b| !b.is_finite() || b.abs() > MAX_GRID_INDEX) {
        return Vec::new();
    }
    if last_col - first_col > MAX_GRID_LINES as f64 || last_row - first_row > MAX_GRID_LINES as f64 {
        return Vec::new();
    }
    let (first_col, last_col) = (first_col as i64, last_col as i64);
    let (first_row, last_row) = (first_row as i64, last_row as i64);

    let mut lines = Vec::new();
    for col in first_col..last_col {
        let x = unit * col as f64;
        lines.push(ScreenLine {
            from: camera.world_to_screen(Point::new(x, top_left.y - pad), viewport),
            to: camera.world_to_screen(Point::new(x, bottom_right.y + pad), viewport),
        });
    }
    for row in first_row..last_row {
        let y = unit * row as f64;
        lines.push(ScreenLine {
            from: camera.world_to_screen(Point::new(top_left.x - pad, y), viewport),
            to: camera.world_to_screen(Point::new(bottom_right.x + pad, y), viewport),
        });
    }
    lines
}

/// The world x and y axes, spanning the viewport
pub fn axis_lines(camera: &Camera, viewport: Viewport) -> [ScreenLine; 2] {
    let origin = camera.world_to_screen(Point::ZERO, viewport);
    [
        ScreenLine {
            from: Point::new(-OVERSCAN, origin.y),
            to: Point::new(viewport.width + OVERSCAN, origin.y),
        },
        ScreenLine {
            from: Point::new(origin.x, -OVERSCAN),
            to: Point::new(origin.x, viewport.height + OVERSCAN),
        },
    ]
}
