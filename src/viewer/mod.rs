//! Standalone road viewer core
//!
//! Camera transforms, bridge detection and per-frame orchestration for a 2D
//! top-down road view. Nothing in here depends on the Bevy game engine, so it
//! can be driven headless and tested from the console.

mod camera;
mod frame;
mod generator;
mod geometry;
mod grid;
mod map;
mod scene;
mod types;

pub use camera::{
    Camera, CameraControls, DragScaling, InertiaConfig, DEFAULT_OFFSET, DEFAULT_ZOOM, MIN_ZOOM,
    OFFSET_SLIDER_RANGE, WHEEL_IMPULSE, ZOOM_SLIDER_RANGE,
};
pub use frame::{FrameOutput, InputEvent, ScreenSegment, Viewer, ViewerConfig};
pub use generator::{demo_scene, drive_forward, generate_segments, generate_segments_with, GENERATOR_EXTENT};
pub use geometry::{find_bridges, segment_pair_bridges};
pub use grid::{axis_lines, grid_lines, ScreenLine, GRID_UNITS, MAX_GRID_LINES, OVERSCAN};
pub use map::{print_map, render_map};
pub use scene::{is_unit_velocity, Scene, VehicleUpdate, UNIT_VELOCITIES};
pub use types::{Point, Segment, Viewport, MARKER_RADIUS, SEGMENT_WIDTH};
