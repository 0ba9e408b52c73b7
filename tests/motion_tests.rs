// Host-side tests for the intro tween, orbit controls and viewport maths.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod rig {
        include!("../src/core/rig.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
}

use crate::core::error::SceneError;
use crate::core::orbit::{OrbitConfig, OrbitControls};
use crate::core::rig::Camera;
use crate::core::tween::*;
use crate::core::viewport::Viewport;
use glam::{Vec2, Vec3};
use std::time::Duration;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn camera(eye: Vec3, target: Vec3) -> Camera {
    Camera {
        eye,
        target,
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: 45f32.to_radians(),
        znear: 1.0,
        zfar: 100.0,
    }
}

#[test]
fn cubic_in_out_hits_endpoints_and_midpoint() {
    assert_eq!(cubic_in_out(0.0), 0.0);
    assert_eq!(cubic_in_out(0.5), 0.5);
    assert_eq!(cubic_in_out(1.0), 1.0);
    assert!(approx(cubic_in_out(0.25), 0.0625, 1e-6));
    assert!(approx(cubic_in_out(0.75), 0.9375, 1e-6));
    // Out-of-range input is clamped
    assert_eq!(cubic_in_out(-1.0), 0.0);
    assert_eq!(cubic_in_out(2.0), 1.0);
}

#[test]
fn cubic_in_out_is_monotonic() {
    let mut prev = cubic_in_out(0.0);
    for i in 1..=100 {
        let v = cubic_in_out(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn tween_reaches_end_and_stays_there() {
    let mut t = Tween::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), Duration::from_millis(1000));
    assert_eq!(t.value(), Vec3::ZERO);
    let half = t.advance(Duration::from_millis(500));
    assert!(approx(half.x, 5.0, 1e-5));
    assert!(!t.is_finished());
    t.advance(Duration::from_millis(700));
    assert!(t.is_finished());
    assert_eq!(t.progress(), 1.0);
    let end = t.advance(Duration::from_millis(100));
    assert!(approx(end.x, 10.0, 1e-5));
}

#[test]
fn zero_length_tween_is_finished_immediately() {
    let t = Tween::new(Vec3::ZERO, Vec3::ONE, Duration::ZERO);
    assert!(t.is_finished());
    assert!((t.value() - Vec3::ONE).length() < 1e-6);
}

#[test]
fn intro_moves_eye_and_target_together() {
    let config = IntroConfig {
        eye_from: Vec3::new(4.0, 2.0, 25.0),
        eye_to: Vec3::new(4.0, 1.8, 9.5),
        target_from: Vec3::new(0.0, 1.0, 0.0),
        target_to: Vec3::new(0.0, 2.0, 0.0),
        duration: Duration::from_millis(1800),
    };
    let mut intro = IntroAnimation::new(&config);
    let mut cam = camera(Vec3::ZERO, Vec3::ZERO);
    intro.begin(&mut cam);
    assert_eq!(cam.eye, config.eye_from);
    assert_eq!(cam.target, config.target_from);

    let mut done = false;
    let mut frames = 0;
    while !done {
        done = intro.advance(Duration::from_millis(16), &mut cam);
        frames += 1;
        assert!(frames < 200, "intro never finished");
    }
    assert_eq!(frames, 113); // ceil(1800 / 16)
    assert!((cam.eye - config.eye_to).length() < 1e-5);
    assert!((cam.target - config.target_to).length() < 1e-5);
}

#[test]
fn auto_rotate_preserves_radius_and_height() {
    let target = Vec3::new(0.0, 2.2, 0.0);
    let mut cam = camera(Vec3::new(0.0, 3.0, 9.0), target);
    let radius = (cam.eye - target).length();
    let mut orbit = OrbitControls::new(OrbitConfig {
        target,
        auto_rotate: true,
        damping: Some(0.05),
        ..OrbitConfig::default()
    });
    for _ in 0..600 {
        orbit.update(&mut cam);
        assert!(approx((cam.eye - target).length(), radius, 1e-3));
        assert!(approx(cam.eye.y, 3.0, 1e-3));
    }
    // The eye has swung off the +Z axis
    assert!(cam.eye.x.abs() > 0.1);
}

#[test]
fn undamped_auto_rotate_applies_full_angle() {
    let mut cam = camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut orbit = OrbitControls::new(OrbitConfig {
        auto_rotate: true,
        ..OrbitConfig::default()
    });
    let step = orbit.auto_rotate_angle();
    assert!(approx(step, std::f32::consts::TAU / 1800.0, 1e-7));
    orbit.update(&mut cam);
    let theta = cam.eye.x.atan2(cam.eye.z);
    assert!(approx(theta, -step, 1e-5));
}

#[test]
fn auto_rotate_swings_eye_toward_negative_x() {
    let mut cam = camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut orbit = OrbitControls::new(OrbitConfig {
        auto_rotate: true,
        damping: Some(0.05),
        ..OrbitConfig::default()
    });
    orbit.update(&mut cam);
    assert!(cam.eye.x < 0.0, "eye = {:?}", cam.eye);
}

#[test]
fn damping_applies_a_fraction_of_the_pending_rotation() {
    let mut cam = camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut orbit = OrbitControls::new(OrbitConfig {
        auto_rotate: true,
        damping: Some(0.05),
        ..OrbitConfig::default()
    });
    let step = orbit.auto_rotate_angle();
    orbit.update(&mut cam);
    let theta = cam.eye.x.atan2(cam.eye.z);
    assert!(approx(theta, -step * 0.05, 1e-6));
}

fn azimuth(cam: &Camera) -> f32 {
    let o = cam.eye - cam.target;
    o.x.atan2(o.z)
}

fn polar(cam: &Camera) -> f32 {
    let o = cam.eye - cam.target;
    (o.y / o.length()).acos()
}

#[test]
fn horizontal_drag_rotates_by_element_height_fraction() {
    let mut cam = camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut orbit = OrbitControls::new(OrbitConfig::default());
    orbit.begin_drag(100.0, 100.0);
    assert!(orbit.is_dragging());
    // A quarter of the element height is a quarter turn.
    orbit.drag_to(150.0, 100.0, 200.0);
    orbit.update(&mut cam);
    assert!(approx(azimuth(&cam), -std::f32::consts::FRAC_PI_2, 1e-5));
    assert!(approx((cam.eye - cam.target).length(), 10.0, 1e-4));
    orbit.end_drag();
    assert!(!orbit.is_dragging());
}

#[test]
fn vertical_drag_changes_polar_angle_and_stops_at_pole() {
    let mut cam = camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut orbit = OrbitControls::new(OrbitConfig::default());
    orbit.begin_drag(0.0, 0.0);
    orbit.drag_to(0.0, 20.0, 400.0);
    orbit.update(&mut cam);
    let expected = std::f32::consts::FRAC_PI_2 - std::f32::consts::TAU * 20.0 / 400.0;
    assert!(approx(polar(&cam), expected, 1e-5));
    assert!(cam.eye.y > 0.0);

    // Dragging far past the pole keeps the eye just off it.
    orbit.drag_to(0.0, 2000.0, 400.0);
    orbit.update(&mut cam);
    assert!(cam.eye.is_finite());
    assert!(approx(cam.eye.y, 10.0, 1e-3));
}

#[test]
fn drag_moves_without_begin_are_ignored() {
    let mut cam = camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut orbit = OrbitControls::new(OrbitConfig::default());
    orbit.drag_to(300.0, 300.0, 400.0);
    orbit.begin_drag(0.0, 0.0);
    orbit.drag_to(50.0, 0.0, 0.0);
    orbit.update(&mut cam);
    assert!((cam.eye - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-4);
}

#[test]
fn damped_drag_settles_on_the_full_angle() {
    let mut cam = camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut orbit = OrbitControls::new(OrbitConfig {
        damping: Some(0.05),
        ..OrbitConfig::default()
    });
    orbit.begin_drag(0.0, 0.0);
    orbit.drag_to(40.0, 0.0, 400.0);
    orbit.end_drag();
    let full = -std::f32::consts::TAU * 40.0 / 400.0;

    orbit.update(&mut cam);
    assert!(approx(azimuth(&cam), full * 0.05, 1e-5));
    for _ in 0..400 {
        orbit.update(&mut cam);
    }
    assert!(approx(azimuth(&cam), full, 1e-4));
}

#[test]
fn auto_rotate_pauses_while_dragging() {
    let mut cam = camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut orbit = OrbitControls::new(OrbitConfig {
        auto_rotate: true,
        ..OrbitConfig::default()
    });
    orbit.begin_drag(10.0, 10.0);
    orbit.update(&mut cam);
    assert!(approx(azimuth(&cam), 0.0, 1e-6));
    orbit.end_drag();
    orbit.update(&mut cam);
    assert!(azimuth(&cam) < 0.0);
}

#[test]
fn wheel_dollies_radius_and_respects_limits() {
    let mut cam = camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    let mut orbit = OrbitControls::new(OrbitConfig {
        min_distance: 8.0,
        max_distance: 11.0,
        ..OrbitConfig::default()
    });
    orbit.wheel(-100.0);
    orbit.update(&mut cam);
    assert!(approx(cam.eye.z, 9.5, 1e-4));

    orbit.wheel(120.0);
    orbit.update(&mut cam);
    assert!(approx(cam.eye.z, 10.0, 1e-4));

    orbit.wheel(0.0);
    orbit.update(&mut cam);
    assert!(approx(cam.eye.z, 10.0, 1e-4));

    for _ in 0..10 {
        orbit.wheel(-1.0);
    }
    orbit.update(&mut cam);
    assert!(approx(cam.eye.z, 8.0, 1e-4));

    for _ in 0..10 {
        orbit.wheel(1.0);
    }
    orbit.update(&mut cam);
    assert!(approx(cam.eye.z, 11.0, 1e-4));
}

#[test]
fn idle_orbit_leaves_camera_in_place() {
    let eye = Vec3::new(4.0, 2.0, 25.0);
    let target = Vec3::new(0.0, 1.0, 0.0);
    let mut cam = camera(eye, target);
    let mut orbit = OrbitControls::new(OrbitConfig {
        target,
        ..OrbitConfig::default()
    });
    orbit.update(&mut cam);
    assert!((cam.eye - eye).length() < 1e-4);

    // Degenerate rig: eye on the target
    let mut stuck = camera(target, target);
    orbit.update(&mut stuck);
    assert_eq!(stuck.eye, target);
}

#[test]
fn viewport_rejects_empty_area() {
    assert_eq!(
        Viewport::new(0.0, 540.0, 1.0),
        Err(SceneError::InvalidViewport {
            width: 0.0,
            height: 540.0
        })
    );
    assert!(Viewport::new(960.0, f32::NAN, 1.0).is_err());
    let vp = Viewport::new(960.0, 540.0, 1.0).unwrap();
    assert_eq!(vp.size(), Vec2::new(960.0, 540.0));
    assert!(approx(vp.aspect(), 16.0 / 9.0, 1e-6));
}

#[test]
fn backing_size_caps_pixel_ratio() {
    let retina = Viewport::new(800.0, 600.0, 3.0).unwrap();
    assert_eq!(retina.pixel_ratio(2.0), 2.0);
    assert_eq!(retina.backing_size(2.0), (1600, 1200));

    let odd = Viewport::new(333.0, 101.0, 1.5).unwrap();
    assert_eq!(odd.backing_size(2.0), (499, 151));

    let broken = Viewport::new(10.0, 10.0, 0.0).unwrap();
    assert_eq!(broken.pixel_ratio(2.0), 1.0);

    let tiny = Viewport::new(0.25, 0.25, 1.0).unwrap();
    assert_eq!(tiny.backing_size(2.0), (1, 1));
}
