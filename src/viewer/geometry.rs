//! Bridge detection between road segments
//!
//! A bridge is a point where two segments cross or overlap without sharing a
//! junction endpoint. Every unordered pair of segments is tested, so the cost
//! is quadratic in the number of segments.

use ordered_float::OrderedFloat;

use super::types::{Point, Segment};

/// Find every bridge point in the segment list.
///
/// Points are not deduplicated: several pairs crossing at the same spot each
/// contribute their own point.
pub fn find_bridges(segments: &[Segment]) -> Vec<Point> {
    let mut bridges = Vec::new();
    for (i, first) in segments.iter().enumerate() {
        for second in &segments[i + 1..] {
            segment_pair_bridges(first, second, &mut bridges);
        }
    }
    bridges
}

/// Append the bridge points produced by a single pair of segments
pub fn segment_pair_bridges(a: &Segment, b: &Segment, bridges: &mut Vec<Point>) {
    let (x0, y0, x1, y1) = (a.start.x, a.start.y, a.end.x, a.end.y);
    let (bx0, by0, bx1, by1) = (b.start.x, b.start.y, b.end.x, b.end.y);

    let dx = x0 - x1;
    let dy = y0 - y1;
    let bdx = bx0 - bx1;
    let bdy = by0 - by1;

    let det = dx * bdy - dy * bdx;
    let dt1 = bdy * (x0 - bx1) - bdx * (y0 - by1);
    let dt2 = dx * (by0 - y1) - dy * (bx0 - x1);

    if det != 0.0 {
        let t1 = dt1 / det;
        let t2 = dt2 / det;
        if in_closed_unit(t1) && in_closed_unit(t2) && (in_open_unit(t1) || in_open_unit(t2)) {
            bridges.push(Point::new(x0 + t1 * (x1 - x0), y0 + t1 * (y1 - y0)));
        }
    } else if dt1 == 0.0 && dt2 == 0.0 {
        collinear_bridges(a, b, bridges);
    }
}

fn in_closed_unit(t: f64) -> bool {
    (0.0..=1.0).contains(&t)
}

fn in_open_unit(t: f64) -> bool {
    t > 0.0 && t < 1.0
}

/// Overlap of two collinear axis-aligned segments, marked at every unit step
fn collinear_bridges(a: &Segment, b: &Segment, bridges: &mut Vec<Point>) {
    // A zero-length segment is both vertical and horizontal; its range is meaningless
    if a.is_degenerate() || b.is_degenerate() {
        return;
    }

    if a.is_vertical() {
        let x = a.start.x;
        if let Some((lo, hi)) = overlap_range([a.start.y, a.end.y, b.start.y, b.end.y]) {
            bridges.extend(lattice_between(lo, hi).map(|y| Point::new(x, y)));
        }
    } else if a.is_horizontal() {
        let y = a.start.y;
        if let Some((lo, hi)) = overlap_range([a.start.x, a.end.x, b.start.x, b.end.x]) {
            bridges.extend(lattice_between(lo, hi).map(|x| Point::new(x, y)));
        }
    }
}

/// Middle two of the four endpoint coordinates, provided the two ranges overlap.
/// The first pair of coordinates belongs to one segment, the second pair to the other.
fn overlap_range(coords: [f64; 4]) -> Option<(f64, f64)> {
    if coords.iter().any(|c| !c.is_finite()) {
        return None;
    }

    let (a_lo, a_hi) = (coords[0].min(coords[1]), coords[0].max(coords[1]));
    let (b_lo, b_hi) = (coords[2].min(coords[3]), coords[2].max(coords[3]));
    if a_lo.max(b_lo) > a_hi.min(b_hi) {
        return None;
    }

    let mut sorted = coords.map(OrderedFloat);
    sorted.sort();
    Some((sorted[1].into_inner(), sorted[2].into_inner()))
}

/// Whole-number coordinates strictly inside `(lo, hi)`
fn lattice_between(lo: f64, hi: f64) -> impl Iterator<Item = f64> {
    let first = lo.floor() + 1.0;
    (0u64..)
        .map(move |step| first + step as f64)
        .take_while(move |k| *k < hi)
}
