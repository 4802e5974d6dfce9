//! Pan/zoom camera mapping world space onto the screen
//!
//! Standalone implementation that doesn't depend on Bevy.

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use std::ops::RangeInclusive;

use super::types::{Point, Viewport};

/// Smallest zoom the camera will ever hold
pub const MIN_ZOOM: f64 = 1e-6;

/// Zoom the camera starts with
pub const DEFAULT_ZOOM: f64 = 2.0;

/// Offset the camera starts with
pub const DEFAULT_OFFSET: Point = Point::new(-200.0, -100.0);

/// Velocity impulse per unit of wheel delta
pub const WHEEL_IMPULSE: f64 = 0.01;

/// Range of the zoom slider in the control panel
pub const ZOOM_SLIDER_RANGE: RangeInclusive<f64> = 0.1..=100.0;

/// Range of the offset sliders in the control panel
pub const OFFSET_SLIDER_RANGE: RangeInclusive<f64> = -100.0..=100.0;

/// Tuning for the inertial zoom decay.
///
/// Only built through [`InertiaConfig::new`] or `Default`, so damping is
/// always above 1 and the clip threshold always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaConfig {
    /// Divisor applied to the residual velocity each frame
    damping: f64,
    /// Residual velocity below which the camera snaps back to rest
    clip: f64,
}

impl InertiaConfig {
    pub fn new(damping: f64, clip: f64) -> Result<Self> {
        if !damping.is_finite() || damping <= 1.0 {
            bail!("Inertia damping must be greater than 1, got {}", damping);
        }
        if !clip.is_finite() || clip <= 0.0 {
            bail!("Inertia clip threshold must be positive, got {}", clip);
        }
        Ok(Self { damping, clip })
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn clip(&self) -> f64 {
        self.clip
    }
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            damping: 1.05,
            clip: 0.005,
        }
    }
}

/// How screen-space drag deltas are converted into world units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragScaling {
    /// Divide by the zoom current at each drag update
    #[default]
    Live,
    /// Divide by the zoom captured when the drag began
    Snapshot,
}

/// State captured when a drag begins
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    offset: Point,
    zoom: f64,
}

/// Values mirrored into the control panel sliders
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraControls {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Camera holding zoom, offset and the in-flight zoom velocity.
///
/// `zoom` is strictly positive after every mutation. `zoom_velocity` is a
/// multiplicative factor that rests at exactly 1.0.
#[derive(Debug, Clone)]
pub struct Camera {
    zoom: f64,
    offset: Point,
    zoom_velocity: f64,
    drag: Option<DragAnchor>,
    inertia: InertiaConfig,
    drag_scaling: DragScaling,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset: DEFAULT_OFFSET,
            zoom_velocity: 1.0,
            drag: None,
            inertia: InertiaConfig::default(),
            drag_scaling: DragScaling::default(),
        }
    }

    /// Create a camera with an explicit starting zoom and offset
    pub fn with_state(zoom: f64, offset: Point) -> Result<Self> {
        let mut camera = Self::new();
        camera.set_zoom(zoom).context("Invalid initial camera zoom")?;
        camera.set_offset(offset);
        Ok(camera)
    }

    pub fn with_inertia(mut self, inertia: InertiaConfig) -> Self {
        self.inertia = inertia;
        self
    }

    pub fn with_drag_scaling(mut self, drag_scaling: DragScaling) -> Self {
        self.drag_scaling = drag_scaling;
        self
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn zoom_velocity(&self) -> f64 {
        self.zoom_velocity
    }

    pub fn inertia(&self) -> InertiaConfig {
        self.inertia
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Set the zoom directly, bypassing inertia
    pub fn set_zoom(&mut self, zoom: f64) -> Result<()> {
        if !zoom.is_finite() || zoom < MIN_ZOOM {
            warn!("Rejected camera zoom {}", zoom);
            bail!("Camera zoom must be finite and at least {}, got {}", MIN_ZOOM, zoom);
        }
        self.zoom = zoom;
        Ok(())
    }

    /// Set the offset directly, bypassing inertia
    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn world_to_screen(&self, p: Point, viewport: Viewport) -> Point {
        viewport.center() + (p + self.offset) * self.zoom
    }

    pub fn screen_to_world(&self, p: Point, viewport: Viewport) -> Point {
        (p - viewport.center()) / self.zoom - self.offset
    }

    /// Scale a world-space length into screen pixels
    pub fn scale_to_screen(&self, length: f64) -> f64 {
        length * self.zoom
    }

    pub fn begin_drag(&mut self) {
        if self.drag.is_some() {
            return;
        }
        debug!("Drag started at offset ({:.2}, {:.2})", self.offset.x, self.offset.y);
        self.drag = Some(DragAnchor {
            offset: self.offset,
            zoom: self.zoom,
        });
    }

    /// Move the camera by the total screen-space delta since the drag began.
    /// Ignored when no drag is in progress.
    pub fn update_drag(&mut self, delta_screen: Point) {
        let Some(anchor) = self.drag else {
            return;
        };
        let divisor = match self.drag_scaling {
            DragScaling::Live => self.zoom,
            DragScaling::Snapshot => anchor.zoom,
        };
        self.offset = anchor.offset + delta_screen / divisor;
    }

    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            debug!("Drag ended at offset ({:.2}, {:.2})", self.offset.x, self.offset.y);
        }
    }

    /// Replace the zoom velocity with an impulse proportional to the wheel delta
    pub fn apply_wheel(&mut self, delta: f64) {
        if !delta.is_finite() {
            warn!("Ignored non-finite wheel delta {}", delta);
            return;
        }
        self.zoom_velocity = 1.0 + WHEEL_IMPULSE * delta;
    }

    /// Advance inertial zoom by one frame using the configured damping
    pub fn step_inertia(&mut self) {
        self.step_inertia_with(self.inertia);
    }

    /// Advance inertial zoom by one frame with explicit tuning
    pub fn step_inertia_with(&mut self, inertia: InertiaConfig) {
        let InertiaConfig { damping, clip } = inertia;
        if self.zoom_velocity != 1.0 {
            let zoomed = self.zoom * self.zoom_velocity;
            if !zoomed.is_finite() {
                warn!("Inertial zoom overflowed, keeping zoom at {}", self.zoom);
            } else if zoomed < MIN_ZOOM {
                warn!("Inertial zoom produced {}, clamping to {}", zoomed, MIN_ZOOM);
                self.zoom = MIN_ZOOM;
            } else {
                self.zoom = zoomed;
            }
            self.zoom_velocity = 1.0 + (self.zoom_velocity - 1.0) / damping;
        }
        if (self.zoom_velocity - 1.0).abs() < clip {
            self.zoom_velocity = 1.0;
        }
    }

    /// Current values for the control panel
    pub fn controls(&self) -> CameraControls {
        CameraControls {
            zoom: self.zoom,
            offset_x: self.offset.x,
            offset_y: self.offset.y,
        }
    }

    /// Apply values edited in the control panel
    pub fn apply_controls(&mut self, controls: CameraControls) -> Result<()> {
        self.set_zoom(controls.zoom)?;
        self.set_offset(Point::new(controls.offset_x, controls.offset_y));
        Ok(())
    }
}
