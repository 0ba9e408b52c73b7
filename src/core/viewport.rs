use crate::core::error::SceneError;
use glam::Vec2;

/// CSS-pixel window size plus the device pixel ratio at the time it was read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Result<Self, SceneError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SceneError::InvalidViewport { width, height });
        }
        Ok(Self {
            width,
            height,
            device_pixel_ratio,
        })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Device pixel ratio capped at `max`; unusable ratios fall back to 1.
    #[inline]
    pub fn pixel_ratio(&self, max: f32) -> f32 {
        let dpr = self.device_pixel_ratio;
        if dpr.is_finite() && dpr > 0.0 {
            dpr.min(max)
        } else {
            1.0
        }
    }

    /// Canvas backing-store size in physical pixels, never zero.
    pub fn backing_size(&self, max_pixel_ratio: f32) -> (u32, u32) {
        let ratio = self.pixel_ratio(max_pixel_ratio);
        let w = (self.width * ratio).floor() as u32;
        let h = (self.height * ratio).floor() as u32;
        (w.max(1), h.max(1))
    }
}
