//! Text rendering of a scene for headless runs

use super::scene::Scene;
use super::types::Point;

/// Characters per world unit
const MAP_SCALE: f64 = 0.25;

/// Largest map drawn, in characters per side
const MAP_MAX_CELLS: usize = 200;

/// Render the scene as a character grid.
///
/// Legend: `+` segment endpoint, `#` road, `C` vehicle, `B` bridge.
/// World y grows downward, as on screen.
pub fn render_map(scene: &Scene, bridges: &[Point]) -> String {
    let endpoints = scene
        .segments()
        .iter()
        .flat_map(|segment| [segment.start, segment.end]);
    let all_points: Vec<Point> = endpoints
        .chain(scene.vehicles().iter().copied())
        .filter(Point::is_finite)
        .collect();

    if all_points.is_empty() {
        return String::from("(empty scene)\n");
    }

    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    for p in &all_points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    // Pad by one cell on each side
    let pad = 1.0 / MAP_SCALE;
    min_x -= pad;
    max_x += pad;
    min_y -= pad;
    max_y += pad;

    // Clamped in f64 so extreme spans never overflow the cell count
    let cells = |span: f64| ((span * MAP_SCALE).min(MAP_MAX_CELLS as f64 - 1.0) as usize) + 1;
    let width = cells(max_x - min_x);
    let height = cells(max_y - min_y);
    let mut grid = vec![vec![' '; width]; height];

    let to_grid = |p: &Point| -> Option<(usize, usize)> {
        if !p.is_finite() {
            return None;
        }
        let col = ((p.x - min_x) * MAP_SCALE) as usize;
        let row = ((p.y - min_y) * MAP_SCALE) as usize;
        Some((row.min(height - 1), col.min(width - 1)))
    };

    for segment in scene.segments() {
        let (Some((start_row, start_col)), Some((end_row, end_col))) =
            (to_grid(&segment.start), to_grid(&segment.end))
        else {
            continue;
        };

        // Bresenham line between the two cells
        let dx = (end_col as i64 - start_col as i64).abs();
        let dy = (end_row as i64 - start_row as i64).abs();
        let sx = if start_col < end_col { 1 } else { -1 };
        let sy = if start_row < end_row { 1 } else { -1 };

        let mut err = dx - dy;
        let mut x = start_col as i64;
        let mut y = start_row as i64;

        loop {
            grid[y as usize][x as usize] = '#';

            if x == end_col as i64 && y == end_row as i64 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    for segment in scene.segments() {
        for endpoint in [segment.start, segment.end] {
            if let Some((row, col)) = to_grid(&endpoint) {
                grid[row][col] = '+';
            }
        }
    }

    for bridge in bridges {
        if let Some((row, col)) = to_grid(bridge) {
            grid[row][col] = 'B';
        }
    }

    for vehicle in scene.vehicles() {
        if let Some((row, col)) = to_grid(vehicle) {
            grid[row][col] = 'C';
        }
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in &grid {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

/// Print the map with a legend to stdout
pub fn print_map(scene: &Scene, bridges: &[Point]) {
    println!("\n=== Road Map ===");
    println!("Legend: +=Endpoint, #=Road, C=Vehicle, B=Bridge");
    println!();
    print!("{}", render_map(scene, bridges));
    println!();
}
