use crate::constants::{
    ORBIT_AUTO_ROTATE_SPEED, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_BASE,
    ORBIT_ZOOM_SPEED,
};
use crate::core::rig::Camera;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    pub target: Vec3,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    /// Fraction of the pending rotation applied per update; `None` applies
    /// it immediately.
    pub damping: Option<f32>,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            auto_rotate: false,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            damping: None,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
        }
    }
}

// radius, azimuth around +Y measured from +Z, polar angle from +Y
#[derive(Clone, Copy, Debug)]
struct Spherical {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(s * self.theta.sin(), self.phi.cos() * self.radius, s * self.theta.cos())
    }
}

/// Keeps the camera orbiting its look target.
///
/// Rotation requests (auto-rotate, pointer drags) accumulate as pending
/// azimuth/polar deltas and are drained by `update`, through damping when it
/// is configured. Wheel zoom scales the radius on the next update.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    config: OrbitConfig,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
    drag_from: Option<Vec2>,
}

impl OrbitControls {
    pub fn new(config: OrbitConfig) -> Self {
        Self {
            config,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
            drag_from: None,
        }
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Azimuth removed per update when auto-rotating.
    #[inline]
    pub fn auto_rotate_angle(&self) -> f32 {
        TAU / 60.0 / 60.0 * self.config.auto_rotate_speed
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.pending_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.pending_phi -= angle;
    }

    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.drag_from = Some(Vec2::new(x, y));
    }

    /// A full element height of drag turns the camera once around.
    pub fn drag_to(&mut self, x: f32, y: f32, element_height: f32) {
        let Some(from) = self.drag_from else {
            return;
        };
        let to = Vec2::new(x, y);
        self.drag_from = Some(to);
        if !(element_height.is_finite() && element_height > 0.0) {
            return;
        }
        let delta = (to - from) * self.config.rotate_speed;
        self.rotate_left(TAU * delta.x / element_height);
        self.rotate_up(TAU * delta.y / element_height);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    #[inline]
    pub fn zoom_scale(&self) -> f32 {
        ORBIT_ZOOM_BASE.powf(self.config.zoom_speed)
    }

    /// Negative `delta_y` (wheel away from the user) moves the camera closer.
    pub fn wheel(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.pending_scale *= self.zoom_scale();
        } else if delta_y > 0.0 {
            self.pending_scale /= self.zoom_scale();
        }
    }

    pub fn update(&mut self, camera: &mut Camera) {
        let offset = camera.eye - camera.target;
        let mut sph = Spherical::from_offset(offset);
        if sph.radius == 0.0 {
            return;
        }
        if self.config.auto_rotate && !self.is_dragging() {
            self.rotate_left(self.auto_rotate_angle());
        }
        match self.config.damping {
            Some(d) => {
                sph.theta += self.pending_theta * d;
                sph.phi += self.pending_phi * d;
                self.pending_theta *= 1.0 - d;
                self.pending_phi *= 1.0 - d;
            }
            None => {
                sph.theta += self.pending_theta;
                sph.phi += self.pending_phi;
                self.pending_theta = 0.0;
                self.pending_phi = 0.0;
            }
        }
        sph.phi = sph.phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        sph.radius = (sph.radius * self.pending_scale)
            .max(self.config.min_distance)
            .min(self.config.max_distance);
        self.pending_scale = 1.0;
        camera.eye = camera.target + sph.to_offset();
    }
}
