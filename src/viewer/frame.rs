//! Per-frame orchestration of camera, bridges and the vehicle updater
//!
//! Input events are queued as they arrive and drained at the start of each
//! frame, so the camera and scene only ever have one writer per frame.

use anyhow::Result;
use log::{debug, warn};
use std::collections::VecDeque;

use super::camera::{Camera, CameraControls, DragScaling, InertiaConfig, DEFAULT_OFFSET, DEFAULT_ZOOM};
use super::geometry::find_bridges;
use super::grid::{axis_lines, grid_lines, ScreenLine, GRID_UNITS};
use super::scene::{Scene, VehicleUpdate};
use super::types::{Point, Viewport, MARKER_RADIUS, SEGMENT_WIDTH};

/// User input delivered to the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    BeginDrag,
    /// Total screen-space movement since the drag began
    Drag(Point),
    EndDrag,
    Wheel(f64),
    SetZoom(f64),
    SetOffset(Point),
    SetControls(CameraControls),
    SetDrawBridges(bool),
}

/// Settings used to build a [`Viewer`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub draw_bridges: bool,
    pub zoom: f64,
    pub offset: Point,
    pub inertia: InertiaConfig,
    pub drag_scaling: DragScaling,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            draw_bridges: false,
            zoom: DEFAULT_ZOOM,
            offset: DEFAULT_OFFSET,
            inertia: InertiaConfig::default(),
            drag_scaling: DragScaling::default(),
        }
    }
}

/// A road segment in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSegment {
    pub from: Point,
    pub to: Point,
}

/// Everything the presentation layer needs to draw one frame, in screen space
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Index of this frame, starting at 0
    pub frame: u64,
    pub viewport: Viewport,
    pub controls: CameraControls,
    pub axes: [ScreenLine; 2],
    /// Grid lines per entry of [`GRID_UNITS`]
    pub grids: Vec<Vec<ScreenLine>>,
    pub segments: Vec<ScreenSegment>,
    pub segment_width: f64,
    pub vehicles: Vec<Point>,
    pub bridges: Vec<Point>,
    pub marker_radius: f64,
}

/// Drives the camera, bridge overlay and vehicle updates once per frame.
///
/// `U` is the boxed updater type. Hosts that share the viewer across threads
/// pick `dyn VehicleUpdate + Send + Sync`.
pub struct Viewer<U: ?Sized = dyn VehicleUpdate> {
    camera: Camera,
    scene: Scene,
    draw_bridges: bool,
    input: VecDeque<InputEvent>,
    updater: Option<Box<U>>,
    controls: CameraControls,
    frame_count: u64,
    last_bridge_count: Option<usize>,
}

impl Viewer {
    pub fn new(scene: Scene, config: ViewerConfig) -> Result<Self> {
        Self::with_config(scene, config)
    }

    /// Register the callback that moves vehicles after each frame
    pub fn with_updater(self, updater: impl VehicleUpdate + 'static) -> Self {
        self.with_boxed_updater(Box::new(updater))
    }
}

impl<U: VehicleUpdate + ?Sized> Viewer<U> {
    /// Build a viewer whose updater type is chosen by the caller
    pub fn with_config(scene: Scene, config: ViewerConfig) -> Result<Self> {
        let camera = Camera::with_state(config.zoom, config.offset)?
            .with_inertia(config.inertia)
            .with_drag_scaling(config.drag_scaling);
        let controls = camera.controls();
        Ok(Self {
            camera,
            scene,
            draw_bridges: config.draw_bridges,
            input: VecDeque::new(),
            updater: None,
            controls,
            frame_count: 0,
            last_bridge_count: None,
        })
    }

    pub fn with_boxed_updater(mut self, updater: Box<U>) -> Self {
        self.updater = Some(updater);
        self
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Control panel values as of the last inertia step
    pub fn controls(&self) -> CameraControls {
        self.controls
    }

    pub fn draw_bridges(&self) -> bool {
        self.draw_bridges
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Queue an input event for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push_back(event);
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Bridge points of the current scene in world space
    pub fn world_bridges(&self) -> Vec<Point> {
        find_bridges(self.scene.segments())
    }

    /// Run one frame and return what to draw
    pub fn frame(&mut self, viewport: Viewport) -> FrameOutput {
        while let Some(event) = self.input.pop_front() {
            self.apply_input(event);
        }

        self.camera.step_inertia();
        self.controls = self.camera.controls();

        let world_bridges = if self.draw_bridges {
            let bridges = find_bridges(self.scene.segments());
            if self.last_bridge_count != Some(bridges.len()) {
                debug!("Bridge count changed to {}", bridges.len());
                self.last_bridge_count = Some(bridges.len());
            }
            bridges
        } else {
            Vec::new()
        };

        let camera = &self.camera;
        let to_screen = |p: &Point| camera.world_to_screen(*p, viewport);
        let output = FrameOutput {
            frame: self.frame_count,
            viewport,
            controls: self.controls,
            axes: axis_lines(camera, viewport),
            grids: GRID_UNITS
                .iter()
                .map(|unit| grid_lines(camera, viewport, *unit))
                .collect(),
            segments: self
                .scene
                .segments()
                .iter()
                .map(|segment| ScreenSegment {
                    from: to_screen(&segment.start),
                    to: to_screen(&segment.end),
                })
                .collect(),
            segment_width: camera.scale_to_screen(SEGMENT_WIDTH),
            vehicles: self.scene.vehicles().iter().map(to_screen).collect(),
            bridges: world_bridges.iter().map(to_screen).collect(),
            marker_radius: camera.scale_to_screen(MARKER_RADIUS),
        };

        if let Some(updater) = self.updater.as_mut() {
            self.scene.apply_update(&mut **updater);
        }

        self.frame_count += 1;
        output
    }

    fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::BeginDrag => self.camera.begin_drag(),
            InputEvent::Drag(delta) => self.camera.update_drag(delta),
            InputEvent::EndDrag => self.camera.end_drag(),
            InputEvent::Wheel(delta) => self.camera.apply_wheel(delta),
            InputEvent::SetZoom(zoom) => {
                if let Err(e) = self.camera.set_zoom(zoom) {
                    warn!("Ignoring zoom input: {:#}", e);
                }
            }
            InputEvent::SetOffset(offset) => self.camera.set_offset(offset),
            InputEvent::SetControls(controls) => {
                if let Err(e) = self.camera.apply_controls(controls) {
                    warn!("Ignoring control panel input: {:#}", e);
                }
            }
            InputEvent::SetDrawBridges(enabled) => {
                debug!("Bridge overlay {}", if enabled { "enabled" } else { "disabled" });
                self.draw_bridges = enabled;
            }
        }
    }
}
