use crate::core::rig::Camera;
use glam::Vec3;
use std::time::Duration;

/// Cubic ease-in-out over `k` in [0, 1].
#[inline]
pub fn cubic_in_out(k: f32) -> f32 {
    let k = k.clamp(0.0, 1.0);
    if k < 0.5 {
        4.0 * k * k * k
    } else {
        let t = -2.0 * k + 2.0;
        1.0 - t * t * t / 2.0
    }
}

#[derive(Clone, Debug)]
pub struct Tween {
    from: Vec3,
    to: Vec3,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    pub fn new(from: Vec3, to: Vec3, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn value(&self) -> Vec3 {
        self.from.lerp(self.to, cubic_in_out(self.progress()))
    }

    pub fn advance(&mut self, dt: Duration) -> Vec3 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroConfig {
    pub eye_from: Vec3,
    pub eye_to: Vec3,
    pub target_from: Vec3,
    pub target_to: Vec3,
    pub duration: Duration,
}

/// Opening camera move: eye and look target glide together.
#[derive(Clone, Debug)]
pub struct IntroAnimation {
    eye: Tween,
    target: Tween,
}

impl IntroAnimation {
    pub fn new(config: &IntroConfig) -> Self {
        Self {
            eye: Tween::new(config.eye_from, config.eye_to, config.duration),
            target: Tween::new(config.target_from, config.target_to, config.duration),
        }
    }

    /// Snaps the camera to the starting pose.
    pub fn begin(&self, camera: &mut Camera) {
        camera.eye = self.eye.value();
        camera.target = self.target.value();
    }

    /// Returns `true` once both tweens have reached their end values.
    pub fn advance(&mut self, dt: Duration, camera: &mut Camera) -> bool {
        camera.eye = self.eye.advance(dt);
        camera.target = self.target.advance(dt);
        self.eye.is_finished() && self.target.is_finished()
    }
}
