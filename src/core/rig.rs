use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Omnidirectional light with a finite range.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color_rgb: [f32; 3],
    pub intensity: f32,
    pub distance: f32,
}

#[derive(Clone, Debug)]
pub struct SceneRig {
    /// Eye in camera-group local space; `target` is in world space.
    pub camera: Camera,
    /// Translation of the group that carries the camera.
    pub camera_group: Vec3,
    pub light: PointLight,
}

impl SceneRig {
    /// Eye position after the camera group transform.
    pub fn world_eye(&self) -> Vec3 {
        self.camera.eye + self.camera_group
    }

    /// Looks from the lifted eye at the unshifted target, so a group offset
    /// tilts the view instead of sliding it.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.world_eye(), self.camera.target, self.camera.up)
    }

    /// Unit vector from the world eye toward the look target.
    pub fn view_direction(&self) -> Vec3 {
        (self.camera.target - self.world_eye()).normalize_or_zero()
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.camera.aspect = aspect;
        }
    }
}
