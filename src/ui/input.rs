//! Input handling systems
//!
//! Mouse and keyboard input is translated into viewer input events; the
//! viewer applies them at the start of its next frame.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::components::{CanvasLayout, DragState, InitialControls, ViewerResource};
use crate::viewer::{InputEvent, Point};

/// Wheel pixels treated as one line of scrolling
const PIXELS_PER_LINE: f32 = 16.0;

/// World units the arrow keys move the offset per frame
const OFFSET_STEP: f64 = 1.0;

/// Zoom factor applied per frame while PageUp/PageDown is held
const ZOOM_STEP: f64 = 1.02;

/// Handle keyboard input
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
    mut viewer: ResMut<ViewerResource>,
    initial: Res<InitialControls>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }

    let viewer = &mut viewer.0;

    if keyboard.just_pressed(KeyCode::KeyB) {
        let enabled = !viewer.draw_bridges();
        viewer.push_input(InputEvent::SetDrawBridges(enabled));
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        viewer.push_input(InputEvent::SetControls(initial.0));
    }

    let controls = viewer.controls();
    let mut nudge = Point::ZERO;
    if keyboard.pressed(KeyCode::ArrowLeft) {
        nudge.x -= OFFSET_STEP;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        nudge.x += OFFSET_STEP;
    }
    if keyboard.pressed(KeyCode::ArrowUp) {
        nudge.y -= OFFSET_STEP;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        nudge.y += OFFSET_STEP;
    }
    if nudge != Point::ZERO {
        viewer.push_input(InputEvent::SetOffset(Point::new(
            controls.offset_x + nudge.x,
            controls.offset_y + nudge.y,
        )));
    }

    if keyboard.pressed(KeyCode::PageUp) {
        viewer.push_input(InputEvent::SetZoom(controls.zoom * ZOOM_STEP));
    } else if keyboard.pressed(KeyCode::PageDown) {
        viewer.push_input(InputEvent::SetZoom(controls.zoom / ZOOM_STEP));
    }
}

/// Handle canvas dragging and wheel zoom
pub fn handle_camera_mouse(
    windows: Query<&Window, With<PrimaryWindow>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut wheel: MessageReader<MouseWheel>,
    mut drag: ResMut<DragState>,
    mut viewer: ResMut<ViewerResource>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let layout = CanvasLayout::for_window(window);
    let cursor = window.cursor_position();
    let hovered = cursor.is_some_and(|c| layout.contains(c));
    let viewer = &mut viewer.0;

    if buttons.just_pressed(MouseButton::Left) && hovered && drag.press_cursor.is_none() {
        drag.press_cursor = cursor;
        viewer.push_input(InputEvent::BeginDrag);
    }

    if let (Some(press), Some(current)) = (drag.press_cursor, cursor) {
        if buttons.pressed(MouseButton::Left) {
            let delta = current - press;
            viewer.push_input(InputEvent::Drag(Point::new(
                f64::from(delta.x),
                f64::from(delta.y),
            )));
        }
    }

    if buttons.just_released(MouseButton::Left) && drag.press_cursor.take().is_some() {
        viewer.push_input(InputEvent::EndDrag);
    }

    for event in wheel.read() {
        if !hovered {
            continue;
        }
        let lines = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / PIXELS_PER_LINE,
        };
        viewer.push_input(InputEvent::Wheel(f64::from(lines)));
    }
}
