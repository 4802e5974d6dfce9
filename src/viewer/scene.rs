//! Scene data: road segments, vehicle positions and optional velocities

use anyhow::{bail, Result};
use log::{info, warn};

use super::types::{Point, Segment};

/// The only velocities vehicles are expected to carry
pub const UNIT_VELOCITIES: [Point; 4] = [
    Point::new(1.0, 0.0),
    Point::new(0.0, 1.0),
    Point::new(-1.0, 0.0),
    Point::new(0.0, -1.0),
];

/// External collaborator that moves vehicles between frames.
///
/// Called once per frame, synchronously, with the vehicle positions, the
/// optional velocities and the segment list.
pub trait VehicleUpdate {
    fn update(&mut self, vehicles: &mut [Point], velocities: Option<&mut [Point]>, segments: &[Segment]);
}

impl<F> VehicleUpdate for F
where
    F: FnMut(&mut [Point], Option<&mut [Point]>, &[Segment]),
{
    fn update(&mut self, vehicles: &mut [Point], velocities: Option<&mut [Point]>, segments: &[Segment]) {
        self(vehicles, velocities, segments)
    }
}

/// Segments and vehicles shown by the viewer
#[derive(Debug, Clone, Default)]
pub struct Scene {
    segments: Vec<Segment>,
    vehicles: Vec<Point>,
    /// Same length as `vehicles` when present
    velocities: Option<Vec<Point>>,
}

impl Scene {
    pub fn new(
        segments: Vec<Segment>,
        vehicles: Vec<Point>,
        velocities: Option<Vec<Point>>,
    ) -> Result<Self> {
        let mut scene = Self {
            segments,
            vehicles,
            velocities: None,
        };
        if let Some(velocities) = velocities {
            scene.set_velocities(velocities)?;
        }
        info!(
            "Scene created with {} segments and {} vehicles",
            scene.segments.len(),
            scene.vehicles.len()
        );
        Ok(scene)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn vehicles(&self) -> &[Point] {
        &self.vehicles
    }

    pub fn velocities(&self) -> Option<&[Point]> {
        self.velocities.as_deref()
    }

    /// Attach a velocity to every vehicle
    pub fn set_velocities(&mut self, velocities: Vec<Point>) -> Result<()> {
        if velocities.len() != self.vehicles.len() {
            bail!(
                "Expected {} velocities, got {}",
                self.vehicles.len(),
                velocities.len()
            );
        }
        let off_axis = velocities.iter().filter(|v| !is_unit_velocity(v)).count();
        if off_axis > 0 {
            warn!("{} vehicle velocities are not unit axis vectors", off_axis);
        }
        self.velocities = Some(velocities);
        Ok(())
    }

    pub fn clear_velocities(&mut self) {
        self.velocities = None;
    }

    /// Hand the scene to the external updater for one frame
    pub fn apply_update<U: VehicleUpdate + ?Sized>(&mut self, updater: &mut U) {
        updater.update(
            &mut self.vehicles,
            self.velocities.as_deref_mut(),
            &self.segments,
        );
    }
}

pub fn is_unit_velocity(velocity: &Point) -> bool {
    UNIT_VELOCITIES.contains(velocity)
}
