use crate::constants::{
    CAMERA_GROUP_Y_SCALE, LIGHT_X_SCALE, LIGHT_Y_SCALE, PARALLAX_SMOOTHING, REFERENCE_FPS,
};
use crate::core::error::SceneError;
use crate::core::rig::SceneRig;
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SmoothingMode {
    /// Apply the factor once per frame regardless of frame duration.
    PerFrame,
    /// Rescale the factor by elapsed time so convergence speed does not
    /// depend on the display refresh rate.
    FrameRateIndependent { reference_fps: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub smoothing: f32,
    pub mode: SmoothingMode,
    pub camera_group_y_scale: f32,
    pub light_x_scale: f32,
    pub light_y_scale: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            smoothing: PARALLAX_SMOOTHING,
            mode: SmoothingMode::PerFrame,
            camera_group_y_scale: CAMERA_GROUP_Y_SCALE,
            light_x_scale: LIGHT_X_SCALE,
            light_y_scale: LIGHT_Y_SCALE,
        }
    }
}

impl ParallaxConfig {
    pub fn frame_rate_independent(self) -> Self {
        Self {
            mode: SmoothingMode::FrameRateIndependent {
                reference_fps: REFERENCE_FPS,
            },
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(SceneError::InvalidSmoothing(self.smoothing));
        }
        let scales = [
            ("camera_group_y", self.camera_group_y_scale),
            ("light_x", self.light_x_scale),
            ("light_y", self.light_y_scale),
        ];
        for (name, value) in scales {
            if !value.is_finite() {
                return Err(SceneError::InvalidScale { name, value });
            }
        }
        if let SmoothingMode::FrameRateIndependent { reference_fps } = self.mode {
            if !(reference_fps.is_finite() && reference_fps > 0.0) {
                return Err(SceneError::InvalidScale {
                    name: "reference_fps",
                    value: reference_fps,
                });
            }
        }
        Ok(())
    }

    /// Lerp factor for a frame that took `dt`.
    pub fn factor_for(&self, dt: Duration) -> f32 {
        match self.mode {
            SmoothingMode::PerFrame => self.smoothing,
            SmoothingMode::FrameRateIndependent { reference_fps } => {
                let frames = dt.as_secs_f32() * reference_fps;
                1.0 - (1.0 - self.smoothing).powf(frames)
            }
        }
    }
}

/// Displacements derived from the smoothed pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOffsets {
    pub camera_group_y: f32,
    pub light_x: f32,
    pub light_y: f32,
}

impl ParallaxOffsets {
    #[inline]
    pub fn from_smoothed(smoothed: Vec2, config: &ParallaxConfig) -> Self {
        Self {
            camera_group_y: smoothed.y * config.camera_group_y_scale,
            light_x: smoothed.x * config.light_x_scale,
            light_y: smoothed.y * config.light_y_scale,
        }
    }

    /// Writes the offsets into the rig. Light Z keeps its configured value.
    pub fn apply(&self, rig: &mut SceneRig) {
        rig.camera_group.y = self.camera_group_y;
        rig.light.position.x = self.light_x;
        rig.light.position.y = self.light_y;
    }
}

/// Maps client pixel coordinates to [-0.5, 0.5] on both axes.
///
/// Returns `None` when the viewport has no area, in which case the caller
/// keeps its previous target.
#[inline]
pub fn normalize_pointer(client_x: f32, client_y: f32, viewport: Vec2) -> Option<Vec2> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if !valid(viewport.x) || !valid(viewport.y) {
        return None;
    }
    Some(Vec2::new(
        client_x / viewport.x - 0.5,
        client_y / viewport.y - 0.5,
    ))
}

#[derive(Clone, Debug)]
pub struct ParallaxController {
    config: ParallaxConfig,
    target: Vec2,
    smoothed: Vec2,
}

impl ParallaxController {
    pub fn new(config: ParallaxConfig) -> Result<Self, SceneError> {
        config.validate()?;
        Ok(Self {
            config,
            target: Vec2::ZERO,
            smoothed: Vec2::ZERO,
        })
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    /// Latest pointer sample wins; there is no queue.
    pub fn on_pointer_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        viewport: Vec2,
    ) -> Option<Vec2> {
        let target = normalize_pointer(client_x, client_y, viewport)?;
        self.target = target;
        Some(target)
    }

    /// Advances the filter by one frame and returns the offsets to apply.
    pub fn on_frame(&mut self, dt: Duration) -> ParallaxOffsets {
        let alpha = self.config.factor_for(dt);
        self.smoothed += (self.target - self.smoothed) * alpha;
        self.offsets()
    }

    pub fn offsets(&self) -> ParallaxOffsets {
        ParallaxOffsets::from_smoothed(self.smoothed, &self.config)
    }
}
