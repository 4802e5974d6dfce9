//! Camera transform and inertia tests

use road_view::viewer::{
    Camera, CameraControls, DragScaling, InertiaConfig, Point, Viewport, DEFAULT_OFFSET,
    DEFAULT_ZOOM, MIN_ZOOM,
};

fn assert_close(a: Point, b: Point) {
    let scale = 1.0_f64.max(b.x.abs()).max(b.y.abs());
    assert!(
        (a.x - b.x).abs() <= 1e-9 * scale && (a.y - b.y).abs() <= 1e-9 * scale,
        "{:?} != {:?}",
        a,
        b
    );
}

#[test]
fn test_camera_defaults() {
    let camera = Camera::new();
    assert_eq!(camera.zoom(), DEFAULT_ZOOM);
    assert_eq!(camera.offset(), DEFAULT_OFFSET);
    assert_eq!(camera.zoom_velocity(), 1.0);
    assert!(!camera.is_dragging());
}

#[test]
fn test_world_to_screen_formula() {
    let camera = Camera::with_state(2.0, Point::new(-200.0, -100.0)).unwrap();
    let viewport = Viewport::new(800.0, 600.0).unwrap();

    // 400 + (250 - 200) * 2, 300 + (100 - 100) * 2
    let screen = camera.world_to_screen(Point::new(250.0, 100.0), viewport);
    assert_eq!(screen, Point::new(500.0, 300.0));

    let world = camera.screen_to_world(Point::new(500.0, 300.0), viewport);
    assert_eq!(world, Point::new(250.0, 100.0));
}

#[test]
fn test_transform_round_trip() {
    let viewports = [
        Viewport::new(1280.0, 720.0).unwrap(),
        Viewport::new(1.0, 3.0).unwrap(),
        Viewport::new(965.0, 682.0).unwrap(),
    ];
    let cameras = [
        Camera::with_state(2.0, Point::new(-200.0, -100.0)).unwrap(),
        Camera::with_state(0.1, Point::new(37.5, -12.25)).unwrap(),
        Camera::with_state(87.3, Point::new(0.0, 99.0)).unwrap(),
    ];
    let points = [
        Point::new(0.0, 0.0),
        Point::new(-1234.5, 678.9),
        Point::new(1e6, -1e6),
        Point::new(0.001, 0.002),
    ];

    for camera in &cameras {
        for viewport in viewports {
            for p in points {
                let back = camera.screen_to_world(camera.world_to_screen(p, viewport), viewport);
                assert_close(back, p);
            }
        }
    }
}

#[test]
fn test_set_zoom_rejects_non_positive() {
    let mut camera = Camera::new();
    assert!(camera.set_zoom(0.0).is_err());
    assert!(camera.set_zoom(-3.0).is_err());
    assert!(camera.set_zoom(f64::NAN).is_err());
    assert!(camera.set_zoom(f64::INFINITY).is_err());
    assert_eq!(camera.zoom(), DEFAULT_ZOOM);

    assert!(camera.set_zoom(4.5).is_ok());
    assert_eq!(camera.zoom(), 4.5);
    assert!(Camera::with_state(0.0, Point::ZERO).is_err());
}

#[test]
fn test_setters_bypass_inertia_and_are_idempotent() {
    let mut camera = Camera::new();
    camera.apply_wheel(10.0);
    camera.set_zoom(3.0).unwrap();
    camera.set_zoom(3.0).unwrap();
    camera.set_offset(Point::new(5.0, 6.0));
    camera.set_offset(Point::new(5.0, 6.0));

    assert_eq!(camera.zoom(), 3.0);
    assert_eq!(camera.offset(), Point::new(5.0, 6.0));
    // Pending velocity is untouched by direct setters
    assert!((camera.zoom_velocity() - 1.1).abs() < 1e-12);
}

#[test]
fn test_wheel_sets_velocity() {
    let mut camera = Camera::new();
    camera.apply_wheel(3.0);
    assert!((camera.zoom_velocity() - 1.03).abs() < 1e-12);
    camera.apply_wheel(-2.0);
    assert!((camera.zoom_velocity() - 0.98).abs() < 1e-12);
}

#[test]
fn test_inertia_step_multiplies_and_decays() {
    let mut camera = Camera::with_state(2.0, Point::ZERO).unwrap();
    camera.apply_wheel(10.0);
    camera.step_inertia();

    assert!((camera.zoom() - 2.2).abs() < 1e-12);
    assert!((camera.zoom_velocity() - (1.0 + 0.1 / 1.05)).abs() < 1e-12);
}

#[test]
fn test_inertia_at_rest_does_nothing() {
    let mut camera = Camera::new();
    for _ in 0..10 {
        camera.step_inertia();
    }
    assert_eq!(camera.zoom(), DEFAULT_ZOOM);
    assert_eq!(camera.zoom_velocity(), 1.0);
}

#[test]
fn test_inertia_converges_exactly() {
    for wheel in [-99.0, -50.0, -1.0, 0.3, 1.0, 7.0, 120.0, 1000.0] {
        let mut camera = Camera::new();
        camera.apply_wheel(wheel);

        let mut steps = 0;
        while camera.zoom_velocity() != 1.0 {
            camera.step_inertia();
            steps += 1;
            assert!(steps < 500, "inertia did not settle for wheel {}", wheel);
        }
        assert_eq!(camera.zoom_velocity(), 1.0);
        assert!(camera.zoom() > 0.0);

        // No drift once at rest
        let zoom = camera.zoom();
        camera.step_inertia();
        assert_eq!(camera.zoom(), zoom);
    }
}

#[test]
fn test_small_impulse_snaps_immediately() {
    let mut camera = Camera::new();
    camera.apply_wheel(0.4);
    camera.step_inertia();
    assert!((camera.zoom() - DEFAULT_ZOOM * 1.004).abs() < 1e-12);
    assert_eq!(camera.zoom_velocity(), 1.0);
}

#[test]
fn test_huge_negative_wheel_keeps_zoom_positive() {
    let mut camera = Camera::new();
    camera.apply_wheel(-500.0);
    camera.step_inertia();
    assert!(camera.zoom() >= MIN_ZOOM);
    while camera.zoom_velocity() != 1.0 {
        camera.step_inertia();
        assert!(camera.zoom() >= MIN_ZOOM);
    }
}

#[test]
fn test_custom_inertia_config() {
    assert!(InertiaConfig::new(1.0, 0.005).is_err());
    assert!(InertiaConfig::new(0.5, 0.005).is_err());
    assert!(InertiaConfig::new(1.05, 0.0).is_err());

    let inertia = InertiaConfig::new(2.0, 0.05).unwrap();
    let mut camera = Camera::with_state(1.0, Point::ZERO)
        .unwrap()
        .with_inertia(inertia);
    camera.apply_wheel(20.0);
    camera.step_inertia();
    assert!((camera.zoom() - 1.2).abs() < 1e-12);
    assert!((camera.zoom_velocity() - 1.1).abs() < 1e-12);
    camera.step_inertia();
    camera.step_inertia();
    // 0.1 -> 0.05 -> 0.025, below the clip
    assert_eq!(camera.zoom_velocity(), 1.0);
}

#[test]
fn test_explicit_inertia_tuning_is_validated() {
    // Tuning that would never settle is refused before reaching a camera
    for (damping, clip) in [(1.0, 0.005), (0.9, 0.005), (f64::NAN, 0.005), (1.05, -0.1), (1.05, f64::INFINITY)] {
        assert!(
            InertiaConfig::new(damping, clip).is_err(),
            "accepted damping {} clip {}",
            damping,
            clip
        );
    }

    let inertia = InertiaConfig::new(1.5, 0.01).unwrap();
    assert_eq!(inertia.damping(), 1.5);
    assert_eq!(inertia.clip(), 0.01);

    let mut camera = Camera::new();
    camera.apply_wheel(50.0);
    let mut steps = 0;
    while camera.zoom_velocity() != 1.0 {
        camera.step_inertia_with(inertia);
        steps += 1;
        assert!(steps < 100, "inertia did not settle");
    }
    // The camera's own tuning is left untouched
    assert_eq!(camera.inertia(), InertiaConfig::default());
}

#[test]
fn test_drag_moves_offset_by_screen_delta_over_zoom() {
    let mut camera = Camera::with_state(2.0, Point::new(10.0, 20.0)).unwrap();

    // Ignored outside a drag
    camera.update_drag(Point::new(100.0, 100.0));
    assert_eq!(camera.offset(), Point::new(10.0, 20.0));

    camera.begin_drag();
    assert!(camera.is_dragging());
    camera.update_drag(Point::new(10.0, -4.0));
    assert_eq!(camera.offset(), Point::new(15.0, 18.0));

    // Deltas are totals since the drag began, not increments
    camera.update_drag(Point::new(20.0, 0.0));
    assert_eq!(camera.offset(), Point::new(20.0, 20.0));

    camera.end_drag();
    assert!(!camera.is_dragging());
    camera.update_drag(Point::new(50.0, 50.0));
    assert_eq!(camera.offset(), Point::new(20.0, 20.0));
}

#[test]
fn test_drag_scaling_live_vs_snapshot() {
    let mut live = Camera::with_state(2.0, Point::ZERO).unwrap();
    let mut snapshot = Camera::with_state(2.0, Point::ZERO)
        .unwrap()
        .with_drag_scaling(DragScaling::Snapshot);

    for camera in [&mut live, &mut snapshot] {
        camera.begin_drag();
        camera.set_zoom(4.0).unwrap();
        camera.update_drag(Point::new(8.0, 8.0));
    }

    assert_eq!(live.offset(), Point::new(2.0, 2.0));
    assert_eq!(snapshot.offset(), Point::new(4.0, 4.0));
}

#[test]
fn test_controls_mirror_and_apply() {
    let mut camera = Camera::new();
    let controls = camera.controls();
    assert_eq!(controls.zoom, DEFAULT_ZOOM);
    assert_eq!(controls.offset_x, DEFAULT_OFFSET.x);
    assert_eq!(controls.offset_y, DEFAULT_OFFSET.y);

    camera
        .apply_controls(CameraControls {
            zoom: 7.0,
            offset_x: 1.0,
            offset_y: -2.0,
        })
        .unwrap();
    assert_eq!(camera.zoom(), 7.0);
    assert_eq!(camera.offset(), Point::new(1.0, -2.0));

    let rejected = camera.apply_controls(CameraControls {
        zoom: 0.0,
        offset_x: 50.0,
        offset_y: 50.0,
    });
    assert!(rejected.is_err());
    assert_eq!(camera.zoom(), 7.0);
    assert_eq!(camera.offset(), Point::new(1.0, -2.0));
}
