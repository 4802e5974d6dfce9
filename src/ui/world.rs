//! World setup systems for the camera and control panel

use bevy::prelude::*;

use super::components::{ControlText, InitialControls, MainCamera, ViewerResource, CONTROLS_WIDTH};

/// System to spawn the 2D camera and the control panel
pub fn setup_world(mut commands: Commands, viewer: Res<ViewerResource>) {
    commands.spawn((MainCamera, Camera2d));
    commands.insert_resource(InitialControls(viewer.0.controls()));

    commands
        .spawn((
            Node {
                width: Val::Px(CONTROLS_WIDTH),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(5.0),
                ..default()
            },
            BackgroundColor(Color::srgb_u8(37, 37, 38)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Camera Control"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            for (kind, label) in [
                (ControlText::Zoom, "Zoom: -"),
                (ControlText::OffsetX, "X Offset: -"),
                (ControlText::OffsetY, "Y Offset: -"),
                (ControlText::Bridges, "Bridges: -"),
            ] {
                parent.spawn((
                    Text::new(label),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                    kind,
                ));
            }

            parent.spawn((
                Text::new("Arrows: offset  PgUp/PgDn: zoom\nB: bridges  R: reset"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}
