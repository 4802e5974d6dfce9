//! UI components and resources linking Bevy to the viewer core

use bevy::prelude::*;

use crate::viewer::{CameraControls, Point, VehicleUpdate, Viewer, Viewport};

/// Width of the control panel on the left of the window
pub const CONTROLS_WIDTH: f32 = 300.0;

/// Horizontal space the canvas gives up besides the control panel
pub const CANVAS_MARGIN_X: f32 = 315.0;

/// Vertical space the canvas gives up at the bottom of the window
pub const CANVAS_MARGIN_Y: f32 = 38.0;

/// Viewer whose updater is safe to share with Bevy's schedulers
pub type SharedViewer = Viewer<dyn VehicleUpdate + Send + Sync>;

/// Resource wrapper for the viewer core
#[derive(Resource)]
pub struct ViewerResource(pub SharedViewer);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Camera values restored by the reset key
#[derive(Resource)]
pub struct InitialControls(pub CameraControls);

/// Cursor position where the current canvas drag began
#[derive(Resource, Default)]
pub struct DragState {
    pub press_cursor: Option<Vec2>,
}

/// Text lines of the control panel
#[derive(Component)]
pub enum ControlText {
    Zoom,
    OffsetX,
    OffsetY,
    Bridges,
}

/// Drawing area of the window, in window pixels (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    pub origin: Vec2,
    pub size: Vec2,
    pub window: Vec2,
}

impl CanvasLayout {
    /// Canvas to the right of the control panel
    pub fn for_window(window: &Window) -> Self {
        let window_size = Vec2::new(window.width(), window.height());
        Self {
            origin: Vec2::new(CONTROLS_WIDTH, 0.0),
            size: Vec2::new(
                (window_size.x - CANVAS_MARGIN_X).max(1.0),
                (window_size.y - CANVAS_MARGIN_Y).max(1.0),
            ),
            window: window_size,
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        Viewport::new(f64::from(self.size.x), f64::from(self.size.y)).ok()
    }

    pub fn contains(&self, cursor: Vec2) -> bool {
        let local = cursor - self.origin;
        local.x >= 0.0 && local.y >= 0.0 && local.x <= self.size.x && local.y <= self.size.y
    }

    /// Convert a canvas screen point into Bevy 2D world coordinates
    pub fn to_bevy(&self, p: Point) -> Vec2 {
        let window_x = p.x as f32 + self.origin.x;
        let window_y = p.y as f32 + self.origin.y;
        Vec2::new(window_x - self.window.x / 2.0, self.window.y / 2.0 - window_y)
    }
}
