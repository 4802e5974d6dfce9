use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use road_view::viewer::{
    demo_scene, drive_forward, generate_segments, print_map, DragScaling, InertiaConfig,
    InputEvent, Point, Scene, VehicleUpdate, Viewer, ViewerConfig, Viewport,
};

/// Viewer whose updater can move to the Bevy render thread
type AppViewer = Viewer<dyn VehicleUpdate + Send + Sync>;

#[derive(Parser)]
#[command(name = "road_view")]
#[command(about = "Top-down road network viewer with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of frames to run in headless mode
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Length of a randomly generated road chain (0 uses the demo scene)
    #[arg(long, default_value_t = 0)]
    segments: usize,

    /// Seed for the road generator
    #[arg(long)]
    seed: Option<u64>,

    /// Mark crossings that are not junctions
    #[arg(long)]
    bridges: bool,

    /// Headless viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Headless viewport height in pixels
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Initial camera zoom
    #[arg(long, default_value_t = 2.0)]
    zoom: f64,

    /// Initial camera x offset
    #[arg(long, default_value_t = -200.0, allow_negative_numbers = true)]
    offset_x: f64,

    /// Initial camera y offset
    #[arg(long, default_value_t = -100.0, allow_negative_numbers = true)]
    offset_y: f64,

    /// Divisor applied to the zoom velocity each frame
    #[arg(long, default_value_t = 1.05)]
    damping: f64,

    /// Zoom velocity below which inertia stops
    #[arg(long, default_value_t = 0.005)]
    clip: f64,

    /// Scale drags by the zoom captured when the drag began
    #[arg(long)]
    snapshot_drag_zoom: bool,

    /// Wheel delta injected before the first headless frame
    #[arg(long, allow_negative_numbers = true)]
    wheel: Option<f64>,

    /// Print a text map of the scene in headless mode
    #[arg(long)]
    map: bool,
}

impl Cli {
    fn viewer_config(&self) -> Result<ViewerConfig> {
        Ok(ViewerConfig {
            draw_bridges: self.bridges,
            zoom: self.zoom,
            offset: Point::new(self.offset_x, self.offset_y),
            inertia: InertiaConfig::new(self.damping, self.clip)?,
            drag_scaling: if self.snapshot_drag_zoom {
                DragScaling::Snapshot
            } else {
                DragScaling::Live
            },
        })
    }

    fn scene(&self) -> Result<Scene> {
        if self.segments == 0 {
            return demo_scene();
        }
        Scene::new(generate_segments(self.segments, self.seed), Vec::new(), None)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Bevy installs its own logger in UI mode
    if !cli.ui {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn,road_view=info"),
        )
        .init();
    }

    let viewer = AppViewer::with_config(cli.scene()?, cli.viewer_config()?)
        .context("Failed to build viewer")?
        .with_boxed_updater(Box::new(drive_forward));

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(viewer);
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        run_headless(&cli, viewer)?;
    }
    Ok(())
}

/// Run the viewer without graphics, logging what each frame would draw
fn run_headless(cli: &Cli, mut viewer: AppViewer) -> Result<()> {
    let viewport = Viewport::new(cli.width, cli.height)?;
    info!("Running road viewer in headless mode...");
    info!(
        "Frames: {}, Viewport: {}x{}, Bridges: {}",
        cli.frames, viewport.width, viewport.height, cli.bridges
    );

    if cli.map {
        print_map(viewer.scene(), &viewer.world_bridges());
    }

    if let Some(delta) = cli.wheel {
        viewer.push_input(InputEvent::Wheel(delta));
    }

    let mut last_bridges = 0;
    for _ in 0..cli.frames {
        let output = viewer.frame(viewport);
        last_bridges = output.bridges.len();
    }

    let controls = viewer.controls();
    info!("=== VIEWER RUN COMPLETE ===");
    info!("Frames rendered: {}", viewer.frame_count());
    info!("Total segments: {}", viewer.scene().segments().len());
    info!("Total vehicles: {}", viewer.scene().vehicles().len());
    info!("Bridge points: {}", last_bridges);
    info!("Final zoom: {:.4}", controls.zoom);
    info!("Final offset: ({:.2}, {:.2})", controls.offset_x, controls.offset_y);

    if cli.map {
        print_map(viewer.scene(), &viewer.world_bridges());
    }
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(viewer: AppViewer) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;
    use road_view::ui;

    println!("Starting Road Viewer UI...");
    println!();
    println!("Camera Controls:");
    println!("  Click+Drag  - Pan");
    println!("  Wheel       - Zoom with inertia");
    println!("  B           - Toggle bridge overlay");
    println!("  R           - Reset camera");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,road_view=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Road Viewer".into(),
                        resolution: (1280, 720).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(ui::ViewerResource(viewer))
        .add_plugins(ui::RoadViewUIPlugin)
        .run();
}
