//! Scene builders for demos and headless runs

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::scene::Scene;
use super::types::{Point, Segment};

/// Coordinates of generated segments fall in `0..=GENERATOR_EXTENT`
pub const GENERATOR_EXTENT: i32 = 100;

/// Generate a chain of axis-aligned segments.
///
/// The first segment is vertical; after that segments alternate between
/// horizontal and vertical, each starting where the previous one ended.
/// Uses a seeded RNG when `seed` is given.
pub fn generate_segments(count: usize, seed: Option<u64>) -> Vec<Segment> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    generate_segments_with(count, &mut rng)
}

pub fn generate_segments_with<R: Rng>(count: usize, rng: &mut R) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::with_capacity(count);

    for i in 0..count {
        let Some(previous) = segments.last() else {
            let x = rng.random_range(0..=GENERATOR_EXTENT);
            let y0 = rng.random_range(0..=GENERATOR_EXTENT);
            let y1 = rng.random_range(0..=GENERATOR_EXTENT);
            segments.push(Segment::new((x, y0), (x, y1)));
            continue;
        };

        let start = previous.end;
        let coordinate = f64::from(rng.random_range(0..=GENERATOR_EXTENT));
        let end = if i % 2 == 0 {
            Point::new(start.x, coordinate)
        } else {
            Point::new(coordinate, start.y)
        };
        segments.push(Segment { start, end });
    }

    segments
}

/// A small closed loop with a crossing branch and three moving cars
pub fn demo_scene() -> Result<Scene> {
    let segments = vec![
        Segment::new((0, 0), (25, 0)),
        Segment::new((25, 0), (50, 0)),
        Segment::new((50, 0), (50, 50)),
        Segment::new((50, 50), (150, 50)),
        Segment::new((150, 50), (250, 50)),
        Segment::new((250, 50), (250, -50)),
        Segment::new((250, -50), (25, -50)),
        Segment::new((25, -50), (25, 0)),
        Segment::new((150, 0), (150, 50)),
        Segment::new((150, 50), (150, 100)),
    ];
    let vehicles = vec![
        Point::new(30.0, 0.0),
        Point::new(50.0, 20.0),
        Point::new(170.0, 50.0),
    ];
    let velocities = vec![
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 0.0),
    ];
    Scene::new(segments, vehicles, Some(velocities))
}

/// Vehicle updater that moves every vehicle by its velocity
pub fn drive_forward(vehicles: &mut [Point], velocities: Option<&mut [Point]>, _segments: &[Segment]) {
    let Some(velocities) = velocities else {
        return;
    };
    for (vehicle, velocity) in vehicles.iter_mut().zip(velocities.iter()) {
        *vehicle = *vehicle + *velocity;
    }
}
