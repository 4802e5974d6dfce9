//! Systems drawing viewer frames with gizmos and syncing the control panel

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::ops::RangeInclusive;

use super::components::{CanvasLayout, ControlText, ViewerResource};
use crate::viewer::{FrameOutput, Point, ScreenLine, OFFSET_SLIDER_RANGE, ZOOM_SLIDER_RANGE};

/// System to run one viewer frame and draw its output
pub fn render_frame(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewer: ResMut<ViewerResource>,
    mut gizmos: Gizmos,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let layout = CanvasLayout::for_window(window);
    let Some(viewport) = layout.viewport() else {
        return;
    };

    let output = viewer.0.frame(viewport);
    draw_frame(&mut gizmos, &layout, &output);
}

fn draw_frame(gizmos: &mut Gizmos, layout: &CanvasLayout, output: &FrameOutput) {
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(output.viewport.width, 0.0),
        Point::new(output.viewport.width, output.viewport.height),
        Point::new(0.0, output.viewport.height),
    ];
    for (i, corner) in corners.iter().enumerate() {
        let next = corners[(i + 1) % corners.len()];
        gizmos.line_2d(
            layout.to_bevy(*corner),
            layout.to_bevy(next),
            Color::srgb_u8(90, 90, 95),
        );
    }

    for grid in &output.grids {
        for l in grid {
            draw_line(gizmos, layout, l, Color::srgba(0.0, 0.0, 0.0, 50.0 / 255.0));
        }
    }
    for l in &output.axes {
        draw_line(gizmos, layout, l, Color::srgba(0.0, 0.0, 0.0, 80.0 / 255.0));
    }

    let road_color = Color::srgb_u8(180, 180, 220);
    let endpoint_color = Color::srgb_u8(220, 220, 220);
    let half_width = output.segment_width / 2.0;
    let radius = output.marker_radius as f32;
    for segment in &output.segments {
        let from = layout.to_bevy(segment.from);
        let to = layout.to_bevy(segment.to);
        gizmos.line_2d(from, to, road_color);

        // Road edges half a road width either side of the center line
        let direction = to - from;
        if direction.length_squared() > 0.0 {
            let normal = direction.perp().normalize() * half_width as f32;
            gizmos.line_2d(from + normal, to + normal, road_color);
            gizmos.line_2d(from - normal, to - normal, road_color);
        }

        gizmos.circle_2d(from, radius, endpoint_color);
        gizmos.circle_2d(to, radius, endpoint_color);
    }

    for vehicle in &output.vehicles {
        gizmos.circle_2d(layout.to_bevy(*vehicle), radius, Color::srgb_u8(255, 0, 0));
    }

    for bridge in &output.bridges {
        gizmos.circle_2d(layout.to_bevy(*bridge), radius, Color::BLACK);
    }
}

fn draw_line(gizmos: &mut Gizmos, layout: &CanvasLayout, line: &ScreenLine, color: Color) {
    gizmos.line_2d(layout.to_bevy(line.from), layout.to_bevy(line.to), color);
}

/// System to mirror camera values into the control panel
pub fn update_control_text(
    viewer: Res<ViewerResource>,
    mut text_query: Query<(&ControlText, &mut Text)>,
) {
    let controls = viewer.0.controls();

    for (kind, mut text) in text_query.iter_mut() {
        match kind {
            ControlText::Zoom => {
                **text = format!(
                    "Zoom: {:.3}{}",
                    controls.zoom,
                    range_note(controls.zoom, &ZOOM_SLIDER_RANGE)
                );
            }
            ControlText::OffsetX => {
                **text = format!(
                    "X Offset: {:.2}{}",
                    controls.offset_x,
                    range_note(controls.offset_x, &OFFSET_SLIDER_RANGE)
                );
            }
            ControlText::OffsetY => {
                **text = format!(
                    "Y Offset: {:.2}{}",
                    controls.offset_y,
                    range_note(controls.offset_y, &OFFSET_SLIDER_RANGE)
                );
            }
            ControlText::Bridges => {
                **text = format!(
                    "Bridges: {}",
                    if viewer.0.draw_bridges() { "shown" } else { "hidden" }
                );
            }
        }
    }
}

fn range_note(value: f64, range: &RangeInclusive<f64>) -> &'static str {
    if range.contains(&value) {
        ""
    } else {
        " (off slider)"
    }
}
