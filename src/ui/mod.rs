//! UI module that draws the viewer core using Bevy
//!
//! This module is purely presentation - camera math, bridge detection and the
//! frame sequence live in the `viewer` module. The UI translates window input
//! into viewer input events and draws each frame's screen-space output.

mod components;
mod input;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{CanvasLayout, SharedViewer, ViewerResource};

use components::DragState;
use input::{handle_camera_mouse, handle_input};
use sync::{render_frame, update_control_text};
use world::setup_world;

/// Plugin to register all UI systems.
///
/// Expects a [`ViewerResource`] to be inserted before the app runs.
pub struct RoadViewUIPlugin;

impl Plugin for RoadViewUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>()
            .insert_resource(ClearColor(Color::srgb_u8(250, 250, 250)))
            .add_systems(Startup, setup_world)
            .add_systems(
                Update,
                (
                    handle_input,
                    handle_camera_mouse,
                    render_frame,
                    update_control_text,
                )
                    .chain(),
            );
    }
}
